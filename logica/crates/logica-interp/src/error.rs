use logica_kernel::KernelError;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum RuntimeError {
    #[error("fail: {message}")]
    Fail { message: String },

    #[error(transparent)]
    Kernel(#[from] KernelError),

    #[error("unary minus applied to a non-numeric value")]
    NonNumericNegation,

    #[error("call to undeclared function '{0}'")]
    UndefinedFunction(String),

    #[error("recursion limit exceeded calling '{0}'")]
    RecursionLimitExceeded(String),

    #[error("no pending request addressed to '{0}'")]
    NoPendingRequest(String),
}

pub type RuntimeResult<T> = Result<T, RuntimeError>;
