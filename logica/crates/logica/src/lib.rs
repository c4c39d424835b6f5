//! Front-end entry points (spec §6): `tokenize`, `check`, `run`. Every
//! pipeline-stage error is folded into the shared [`WireError`] shape here,
//! so callers never need to know which stage raised it.

use logica_compile::{CompiledProgram, Compiler};
use logica_interp::Interpreter;
use logica_kernel::Kernel;
use logica_lex::{LexError, Lexer, Token};
use logica_par::{ParseError, Parser};
use logica_util::{ErrorKind, Position, WireError};
use tracing::info;

fn lex_to_wire(err: LexError) -> WireError {
    WireError::new(ErrorKind::LexError, err.to_string()).at(err.pos())
}

fn parse_to_wire(err: ParseError) -> WireError {
    WireError::new(ErrorKind::ParseError, err.to_string()).at(err.pos())
}

fn compile_to_wire(err: logica_compile::CompileError) -> WireError {
    WireError::new(ErrorKind::AxiomViolation, err.message().to_string())
        .at(err.pos())
        .with_axiom(err.axiom())
}

fn runtime_to_wire(err: logica_interp::RuntimeError) -> WireError {
    WireError::new(ErrorKind::RuntimeError, err.to_string())
}

/// `tokenize(source) -> tokens | error`.
pub fn tokenize(source: &str) -> Result<Vec<Token>, WireError> {
    Lexer::tokenize(source).map_err(lex_to_wire)
}

/// `check(source) -> ok | error`: runs lex -> parse -> compile, discarding
/// the compiled program — callers only learn whether it is well-formed.
pub fn check(source: &str) -> Result<(), WireError> {
    compile_program(source).map(|_| ())
}

fn compile_program(source: &str) -> Result<CompiledProgram, WireError> {
    let tokens = tokenize(source)?;
    let stmts = Parser::parse_program(tokens).map_err(parse_to_wire)?;
    Compiler::compile(&stmts).map_err(compile_to_wire)
}

/// The result of `run`: the output lines produced up to the point execution
/// stopped, the final kernel state (`None` if compilation never reached
/// execution), and the error (if any) that stopped it.
pub struct RunOutcome {
    pub output: Vec<String>,
    pub kernel: Option<Kernel>,
    pub error: Option<WireError>,
}

/// `run(source, quiet?) -> { output: lines, error? }`. `quiet` only
/// controls whether a completion summary is traced; output collection is
/// identical either way.
pub fn run(source: &str, quiet: bool) -> RunOutcome {
    let program = match compile_program(source) {
        Ok(program) => program,
        Err(error) => {
            return RunOutcome {
                output: Vec::new(),
                kernel: None,
                error: Some(error),
            }
        }
    };

    let (output, kernel, error) = Interpreter::run(program);
    if !quiet {
        info!(lines = output.len(), failed = error.is_some(), "run complete");
    }
    RunOutcome {
        output,
        kernel: Some(kernel),
        error: error.map(runtime_to_wire),
    }
}

/// Re-exported so CLI code can format positions without importing
/// `logica-util` directly.
pub use logica_util::WireError as Error;
pub type Pos = Position;
