use logica_util::Position;
use thiserror::Error;

/// Axioms 1, 5, 8, 9 from the compile-time rule set; any other number is
/// unreachable and would indicate a bug in the checker itself.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CompileError {
    #[error("axiom {axiom} violated at {pos}: {message}")]
    AxiomViolation {
        axiom: u8,
        message: String,
        pos: Position,
    },
}

impl CompileError {
    pub fn axiom(&self) -> u8 {
        match self {
            CompileError::AxiomViolation { axiom, .. } => *axiom,
        }
    }

    pub fn pos(&self) -> Position {
        match self {
            CompileError::AxiomViolation { pos, .. } => *pos,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            CompileError::AxiomViolation { message, .. } => message,
        }
    }

    pub(crate) fn violation(axiom: u8, message: impl Into<String>, pos: Position) -> Self {
        CompileError::AxiomViolation {
            axiom,
            message: message.into(),
            pos,
        }
    }
}

pub type CompileResult<T> = Result<T, CompileError>;
