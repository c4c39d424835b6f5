use logica_value::Status;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExpressionVersion {
    Current,
    Superseded,
}

/// A submitted (condition, action) pair (spec §4.5/§4.6 `submit`). Status is
/// `inactive` if the condition did not hold, `broken` if the action ran and
/// failed, `active` if it ran and succeeded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpressionRecord {
    pub speaker: String,
    pub condition_label: String,
    pub action: String,
    pub status: Status,
    pub version: ExpressionVersion,
}

pub type ExpressionKey = (String, String, String);

pub fn expression_key(speaker: &str, condition_label: &str, action: &str) -> ExpressionKey {
    (speaker.to_string(), condition_label.to_string(), action.to_string())
}
