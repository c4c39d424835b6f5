use logica_par::ast::{Expr, LetTarget};
use rustc_hash::FxHashMap;

/// A block of operations, compiled from a `Block` of statements. Kept as a
/// tree rather than a flat index-range encoding: the interpreter walks it
/// directly, and expression trees stay embedded inside each operation.
pub type OpBlock = Vec<Operation>;

#[derive(Debug, Clone)]
pub enum Operation {
    SetSpeaker(String),
    PopSpeaker,
    Store { target: LetTarget, value: Expr },
    Speak(Expr),
    When {
        condition: Expr,
        body: OpBlock,
        otherwise: Option<OpBlock>,
        broken: Option<OpBlock>,
    },
    If {
        branches: Vec<(Expr, OpBlock)>,
        else_body: Option<OpBlock>,
    },
    While {
        condition: Expr,
        max: i64,
        body: OpBlock,
    },
    Call(Expr),
    Return(Option<Expr>),
    Request { target: String, action: Expr },
    Respond { accept: bool },
    Inspect { target: String },
    History { owner: String, var: String },
    VerifyLedger,
    Seal { target: String },
    World(String),
    Pass,
    Fail(Option<Expr>),
}

#[derive(Debug, Clone)]
pub struct FunctionDef {
    pub params: Vec<String>,
    pub body: OpBlock,
}

#[derive(Debug, Clone, Default)]
pub struct CompiledProgram {
    pub speakers: Vec<String>,
    pub functions: FxHashMap<String, FunctionDef>,
    pub worlds: Vec<String>,
    pub operations: OpBlock,
}
