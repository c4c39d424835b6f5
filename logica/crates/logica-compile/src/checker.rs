use std::collections::HashSet;

use logica_par::ast::{Block, LetTarget, Stmt, StmtKind};
use rustc_hash::FxHashMap;
use tracing::debug;

use crate::error::{CompileError, CompileResult};
use crate::program::{CompiledProgram, FunctionDef, OpBlock, Operation};

pub struct Compiler {
    declared_speakers: HashSet<String>,
    speaker_stack: Vec<String>,
    sealed: HashSet<(String, String)>,
    functions: FxHashMap<String, FunctionDef>,
    worlds: Vec<String>,
}

impl Compiler {
    pub fn compile(stmts: &[Stmt]) -> CompileResult<CompiledProgram> {
        let mut compiler = Compiler {
            declared_speakers: HashSet::new(),
            speaker_stack: Vec::new(),
            sealed: HashSet::new(),
            functions: FxHashMap::default(),
            worlds: Vec::new(),
        };
        compiler.collect_speakers(stmts);

        let mut operations = Vec::new();
        for stmt in stmts {
            match &stmt.kind {
                StmtKind::SpeakerDecl(_) => {}
                StmtKind::World(name) => {
                    compiler.worlds.push(name.clone());
                    operations.push(Operation::World(name.clone()));
                }
                StmtKind::AsBlock { speaker, body } => {
                    operations.extend(compiler.compile_as_block(speaker, body, stmt)?);
                }
                other => {
                    return Err(CompileError::violation(
                        1,
                        format!("statement {other:?} is not valid at top level"),
                        stmt.pos,
                    ))
                }
            }
        }

        Ok(CompiledProgram {
            speakers: compiler.declared_speakers.into_iter().collect(),
            functions: compiler.functions,
            worlds: compiler.worlds,
            operations,
        })
    }

    fn collect_speakers(&mut self, stmts: &[Stmt]) {
        for stmt in stmts {
            if let StmtKind::SpeakerDecl(name) = &stmt.kind {
                self.declared_speakers.insert(name.clone());
            }
        }
    }

    fn compile_as_block(
        &mut self,
        speaker: &str,
        body: &Block,
        stmt: &Stmt,
    ) -> CompileResult<OpBlock> {
        if !self.declared_speakers.contains(speaker) {
            return Err(CompileError::violation(
                1,
                format!("speaker '{speaker}' is not declared"),
                stmt.pos,
            ));
        }
        self.speaker_stack.push(speaker.to_string());
        let compiled_body = self.compile_block(body);
        self.speaker_stack.pop();
        let compiled_body = compiled_body?;

        let mut ops = Vec::with_capacity(compiled_body.len() + 2);
        ops.push(Operation::SetSpeaker(speaker.to_string()));
        ops.extend(compiled_body);
        ops.push(Operation::PopSpeaker);
        Ok(ops)
    }

    /// The current compile-time speaker, used for both Axiom 1 (must be
    /// non-empty) and Axiom 8 (write ownership against this name). Carries
    /// through unchanged into every nested block, including `fn` bodies,
    /// matching the lexical (not call-site) notion of "current speaker".
    fn current_speaker(&self) -> Option<&str> {
        self.speaker_stack.last().map(String::as_str)
    }

    fn require_speaker<'a>(&'a self, pos: logica_util::Position) -> CompileResult<&'a str> {
        self.current_speaker().ok_or_else(|| {
            CompileError::violation(1, "statement requires an active speaker context", pos)
        })
    }

    fn compile_block(&mut self, block: &Block) -> CompileResult<OpBlock> {
        let mut ops = Vec::with_capacity(block.len());
        for stmt in block {
            ops.push(self.compile_stmt(stmt)?);
        }
        Ok(ops)
    }

    fn compile_stmt(&mut self, stmt: &Stmt) -> CompileResult<Operation> {
        match &stmt.kind {
            StmtKind::SpeakerDecl(_) => Err(CompileError::violation(
                1,
                "speaker declarations are only valid at top level",
                stmt.pos,
            )),
            StmtKind::World(name) => {
                self.require_speaker(stmt.pos)?;
                self.worlds.push(name.clone());
                Ok(Operation::World(name.clone()))
            }
            StmtKind::AsBlock { .. } => Err(CompileError::violation(
                1,
                "'as' blocks cannot be nested inside another speaker context",
                stmt.pos,
            )),
            StmtKind::Let { target, value } => {
                self.check_let_target(target, stmt.pos)?;
                Ok(Operation::Store {
                    target: target.clone(),
                    value: value.clone(),
                })
            }
            StmtKind::Speak(expr) => {
                self.require_speaker(stmt.pos)?;
                Ok(Operation::Speak(expr.clone()))
            }
            StmtKind::When {
                condition,
                body,
                otherwise,
                broken,
            } => {
                self.require_speaker(stmt.pos)?;
                let body = self.compile_block(body)?;
                let otherwise = otherwise.as_ref().map(|b| self.compile_block(b)).transpose()?;
                let broken = broken.as_ref().map(|b| self.compile_block(b)).transpose()?;
                Ok(Operation::When {
                    condition: condition.clone(),
                    body,
                    otherwise,
                    broken,
                })
            }
            StmtKind::If { branches, else_body } => {
                self.require_speaker(stmt.pos)?;
                let mut compiled_branches = Vec::with_capacity(branches.len());
                for (cond, body) in branches {
                    compiled_branches.push((cond.clone(), self.compile_block(body)?));
                }
                let else_body = else_body.as_ref().map(|b| self.compile_block(b)).transpose()?;
                Ok(Operation::If {
                    branches: compiled_branches,
                    else_body,
                })
            }
            StmtKind::While { condition, max, body } => {
                self.require_speaker(stmt.pos)?;
                let max = match max {
                    Some(n) if *n > 0 => *n,
                    Some(n) => {
                        return Err(CompileError::violation(
                            9,
                            format!("while loop max must be a positive integer, got {n}"),
                            stmt.pos,
                        ))
                    }
                    None => {
                        return Err(CompileError::violation(
                            9,
                            "while loop is missing a 'max' bound",
                            stmt.pos,
                        ))
                    }
                };
                let body = self.compile_block(body)?;
                Ok(Operation::While {
                    condition: condition.clone(),
                    max,
                    body,
                })
            }
            StmtKind::FnDecl { name, params, body } => {
                self.require_speaker(stmt.pos)?;
                let compiled_body = self.compile_block(body)?;
                debug!(function = %name, "registered function");
                self.functions.insert(
                    name.clone(),
                    FunctionDef {
                        params: params.clone(),
                        body: compiled_body,
                    },
                );
                Ok(Operation::Pass)
            }
            StmtKind::Return(expr) => {
                self.require_speaker(stmt.pos)?;
                Ok(Operation::Return(expr.clone()))
            }
            StmtKind::Request { target, action } => {
                self.require_speaker(stmt.pos)?;
                if !self.declared_speakers.contains(target) {
                    return Err(CompileError::violation(
                        1,
                        format!("request target '{target}' is not a declared speaker"),
                        stmt.pos,
                    ));
                }
                Ok(Operation::Request {
                    target: target.clone(),
                    action: action.clone(),
                })
            }
            StmtKind::Respond { accept } => {
                self.require_speaker(stmt.pos)?;
                Ok(Operation::Respond { accept: *accept })
            }
            StmtKind::Inspect { target } => {
                self.require_speaker(stmt.pos)?;
                Ok(Operation::Inspect {
                    target: target.clone(),
                })
            }
            StmtKind::History { owner, var } => {
                self.require_speaker(stmt.pos)?;
                Ok(Operation::History {
                    owner: owner.clone(),
                    var: var.clone(),
                })
            }
            StmtKind::Verify => {
                self.require_speaker(stmt.pos)?;
                Ok(Operation::VerifyLedger)
            }
            StmtKind::Seal { target } => {
                let owner = self.require_speaker(stmt.pos)?.to_string();
                self.sealed.insert((owner, target.clone()));
                Ok(Operation::Seal {
                    target: target.clone(),
                })
            }
            StmtKind::Pass => {
                self.require_speaker(stmt.pos)?;
                Ok(Operation::Pass)
            }
            StmtKind::Fail(reason) => {
                self.require_speaker(stmt.pos)?;
                Ok(Operation::Fail(reason.clone()))
            }
            StmtKind::Expr(expr) => {
                self.require_speaker(stmt.pos)?;
                Ok(Operation::Call(expr.clone()))
            }
        }
    }

    /// Axiom 8 (write ownership) and Axiom 5 (sealed variables), applied to
    /// a `let` target regardless of how deeply it is nested.
    fn check_let_target(&self, target: &LetTarget, pos: logica_util::Position) -> CompileResult<()> {
        let current = self.require_speaker(pos)?;
        let (owner, name) = match target {
            LetTarget::Simple(name) => (current.to_string(), name.clone()),
            LetTarget::Dotted(owner, name) => {
                if owner != current {
                    return Err(CompileError::violation(
                        8,
                        format!(
                            "speaker '{current}' cannot write to '{owner}.{name}': write ownership violated"
                        ),
                        pos,
                    ));
                }
                (owner.clone(), name.clone())
            }
        };
        if self.sealed.contains(&(owner.clone(), name.clone())) {
            return Err(CompileError::violation(
                5,
                format!("variable '{owner}.{name}' is sealed and cannot be reassigned"),
                pos,
            ));
        }
        Ok(())
    }
}
