//! AST node definitions (spec §3): statement and expression variants, each
//! carrying a source position for diagnostics.

use logica_util::Position;

pub type Block = Vec<Stmt>;

#[derive(Debug, Clone, PartialEq)]
pub struct Stmt {
    pub kind: StmtKind,
    pub pos: Position,
}

impl Stmt {
    pub fn new(kind: StmtKind, pos: Position) -> Self {
        Self { kind, pos }
    }
}

/// The left-hand side of a `let`: either a bare name or a dotted
/// `speaker.var` write target (subject to Axiom 8).
#[derive(Debug, Clone, PartialEq)]
pub enum LetTarget {
    Simple(String),
    Dotted(String, String),
}

#[derive(Debug, Clone, PartialEq)]
pub enum StmtKind {
    SpeakerDecl(String),
    World(String),
    AsBlock {
        speaker: String,
        body: Block,
    },
    Let {
        target: LetTarget,
        value: Expr,
    },
    Speak(Expr),
    When {
        condition: Expr,
        body: Block,
        otherwise: Option<Block>,
        broken: Option<Block>,
    },
    If {
        /// (condition, body) pairs: the `if` branch followed by any `elif`s.
        branches: Vec<(Expr, Block)>,
        else_body: Option<Block>,
    },
    While {
        condition: Expr,
        max: Option<i64>,
        body: Block,
    },
    FnDecl {
        name: String,
        params: Vec<String>,
        body: Block,
    },
    Return(Option<Expr>),
    Request {
        target: String,
        action: Expr,
    },
    Respond {
        accept: bool,
    },
    Inspect {
        target: String,
    },
    History {
        owner: String,
        var: String,
    },
    Verify,
    Seal {
        target: String,
    },
    Pass,
    Fail(Option<Expr>),
    Expr(Expr),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Expr {
    pub kind: ExprKind,
    pub pos: Position,
}

impl Expr {
    pub fn new(kind: ExprKind, pos: Position) -> Self {
        Self { kind, pos }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOp {
    Neg,
    Not,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    Mod,
    Eq,
    NotEq,
    Lt,
    LtEq,
    Gt,
    GtEq,
    And,
    Or,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLit {
    Active,
    Inactive,
    Broken,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ExprKind {
    Integer(i64),
    Float(f64),
    Str(String),
    Bool(bool),
    NoneLit,
    Status(StatusLit),
    Ident(String),
    Member {
        object: Box<Expr>,
        name: String,
    },
    Index {
        object: Box<Expr>,
        index: Box<Expr>,
    },
    Unary {
        op: UnaryOp,
        expr: Box<Expr>,
    },
    Binary {
        op: BinaryOp,
        lhs: Box<Expr>,
        rhs: Box<Expr>,
    },
    Call {
        callee: Box<Expr>,
        args: Vec<Expr>,
    },
    Read {
        owner: String,
        var: String,
    },
}
