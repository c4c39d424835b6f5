use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum KernelError {
    #[error("speaker '{0}' is not declared")]
    UnknownSpeaker(String),

    #[error("speaker '{0}' is suspended")]
    SpeakerSuspended(String),

    #[error("only root (speaker 0) may perform this operation")]
    NotRoot,

    #[error("variable '{owner}.{name}' is sealed")]
    SealedVariable { owner: String, name: String },

    #[error("request #{0} does not exist")]
    UnknownRequest(u64),

    #[error("request #{request} is not addressed to speaker '{responder}'")]
    NotAddressee { request: u64, responder: String },

    #[error("request #{0} was already resolved")]
    RequestAlreadyResolved(u64),
}

pub type KernelResult<T> = Result<T, KernelError>;
