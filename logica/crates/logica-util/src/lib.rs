//! logica-util - shared position tracking and the wire error format.
//!
//! Every pipeline stage (lexer, parser, compiler, interpreter) carries source
//! positions on its own nodes and raises its own error type. This crate holds
//! the one thing they all share: `Position`, and the `WireError` shape that
//! the façade in `logica` folds every stage's error into (see §6/§7 of the
//! spec: `error { kind, line?, col?, message, axiom? }`).

use std::fmt;

/// A 1-based (line, column) pair, attached to every token and AST node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Position {
    pub line: usize,
    pub col: usize,
}

impl Position {
    pub const fn new(line: usize, col: usize) -> Self {
        Self { line, col }
    }

    /// The position before any character has been consumed.
    pub const fn start() -> Self {
        Self { line: 1, col: 1 }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.col)
    }
}

/// The four error kinds the façade can report, per §7 of the spec.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    LexError,
    ParseError,
    AxiomViolation,
    RuntimeError,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorKind::LexError => "lex_error",
            ErrorKind::ParseError => "parse_error",
            ErrorKind::AxiomViolation => "axiom_violation",
            ErrorKind::RuntimeError => "runtime_error",
        };
        f.write_str(s)
    }
}

/// The uniform error shape returned across the `tokenize`/`check`/`run`
/// façade, regardless of which pipeline stage raised it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WireError {
    pub kind: ErrorKind,
    pub line: Option<usize>,
    pub col: Option<usize>,
    pub message: String,
    /// Set only for `ErrorKind::AxiomViolation`, the violated axiom's number.
    pub axiom: Option<u8>,
}

impl WireError {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            line: None,
            col: None,
            message: message.into(),
            axiom: None,
        }
    }

    pub fn at(mut self, pos: Position) -> Self {
        self.line = Some(pos.line);
        self.col = Some(pos.col);
        self
    }

    pub fn with_axiom(mut self, axiom: u8) -> Self {
        self.axiom = Some(axiom);
        self
    }
}

impl fmt::Display for WireError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.axiom, self.line, self.col) {
            (Some(n), Some(l), Some(c)) => {
                write!(f, "{} {}: axiom {} at {}:{}", self.kind, self.message, n, l, c)
            }
            (Some(n), _, _) => write!(f, "{} {}: axiom {}", self.kind, self.message, n),
            (None, Some(l), Some(c)) => write!(f, "{} at {}:{}: {}", self.kind, l, c, self.message),
            (None, _, _) => write!(f, "{}: {}", self.kind, self.message),
        }
    }
}

impl std::error::Error for WireError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn position_display() {
        assert_eq!(Position::new(3, 7).to_string(), "3:7");
    }

    #[test]
    fn wire_error_display_with_axiom_and_position() {
        let err = WireError::new(ErrorKind::AxiomViolation, "write ownership violated")
            .at(Position::new(2, 5))
            .with_axiom(8);
        assert_eq!(
            err.to_string(),
            "axiom_violation write ownership violated: axiom 8 at 2:5"
        );
    }

    #[test]
    fn wire_error_display_plain() {
        let err = WireError::new(ErrorKind::RuntimeError, "fail: ran out of budget");
        assert_eq!(err.to_string(), "runtime_error: fail: ran out of budget");
    }
}
