#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpeakerState {
    Alive,
    Suspended,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpeakerRecord {
    pub id: u64,
    pub name: String,
    pub created_at: u64,
    pub state: SpeakerState,
}
