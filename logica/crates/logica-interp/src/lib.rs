//! The tree-walking interpreter (spec §4.5): executes a `CompiledProgram`
//! against a [`Kernel`], maintaining the runtime speaker stack and local
//! function scopes.

mod error;

pub use error::{RuntimeError, RuntimeResult};

use logica_compile::{CompiledProgram, FunctionDef, OpBlock, Operation};
use logica_kernel::Kernel;
use logica_par::ast::{BinaryOp, Expr, ExprKind, LetTarget, StatusLit, UnaryOp};
use logica_value::{Status, Value};
use rustc_hash::FxHashMap;
use tracing::trace;

const MAX_CALL_DEPTH: usize = 512;

enum Flow {
    Normal,
    Return(Value),
}

pub struct Interpreter {
    kernel: Kernel,
    functions: FxHashMap<String, FunctionDef>,
    speaker_stack: Vec<String>,
    scopes: Vec<FxHashMap<String, Value>>,
    output: Vec<String>,
    call_depth: usize,
}

impl Interpreter {
    pub fn new(program: CompiledProgram) -> Self {
        Interpreter {
            kernel: Kernel::new(),
            functions: program.functions,
            speaker_stack: Vec::new(),
            scopes: Vec::new(),
            output: Vec::new(),
            call_depth: 0,
        }
    }

    pub fn kernel(&self) -> &Kernel {
        &self.kernel
    }

    /// Registers every declared speaker with the kernel (as `root`) and then
    /// runs the top-level operation stream, returning the accumulated
    /// output lines, the final kernel state (so callers can inspect the
    /// ledger even after a runtime error), and the error that aborted
    /// execution, if any.
    pub fn run(program: CompiledProgram) -> (Vec<String>, Kernel, Option<RuntimeError>) {
        let mut interp = Interpreter::new(program.clone());
        for name in &program.speakers {
            // Root always exists; ignore duplicate/self-registration races.
            let _ = interp.kernel.create_speaker("root", name);
        }
        match interp.exec_block(&program.operations) {
            Ok(_) => (interp.output, interp.kernel, None),
            Err(err) => (interp.output, interp.kernel, Some(err)),
        }
    }

    fn effective_speaker(&self) -> String {
        self.speaker_stack
            .last()
            .cloned()
            .unwrap_or_else(|| logica_kernel::ROOT_NAME.to_string())
    }

    fn exec_block(&mut self, block: &OpBlock) -> RuntimeResult<Flow> {
        for op in block {
            match self.exec_op(op)? {
                Flow::Normal => {}
                ret @ Flow::Return(_) => return Ok(ret),
            }
        }
        Ok(Flow::Normal)
    }

    fn exec_op(&mut self, op: &Operation) -> RuntimeResult<Flow> {
        match op {
            Operation::SetSpeaker(name) => {
                self.speaker_stack.push(name.clone());
                Ok(Flow::Normal)
            }
            Operation::PopSpeaker => {
                self.speaker_stack.pop();
                Ok(Flow::Normal)
            }
            Operation::Store { target, value } => {
                let value = self.eval(value)?;
                let speaker = self.effective_speaker();
                let var = match target {
                    LetTarget::Simple(name) => name.as_str(),
                    LetTarget::Dotted(_, name) => name.as_str(),
                };
                self.kernel.write(&speaker, var, value)?;
                Ok(Flow::Normal)
            }
            Operation::Speak(expr) => {
                let value = self.eval(expr)?;
                self.output.push(format!("[{}] {}", self.effective_speaker(), value.display_string()));
                Ok(Flow::Normal)
            }
            Operation::When { condition, body, otherwise, broken } => {
                if self.eval(condition)?.is_truthy() {
                    match self.exec_block(body) {
                        Ok(flow) => Ok(flow),
                        Err(RuntimeError::Fail { .. }) if broken.is_some() => {
                            self.exec_block(broken.as_ref().unwrap())
                        }
                        Err(err) => Err(err),
                    }
                } else if let Some(otherwise) = otherwise {
                    self.exec_block(otherwise)
                } else {
                    Ok(Flow::Normal)
                }
            }
            Operation::If { branches, else_body } => {
                for (cond, body) in branches {
                    if self.eval(cond)?.is_truthy() {
                        return self.exec_block(body);
                    }
                }
                if let Some(else_body) = else_body {
                    self.exec_block(else_body)
                } else {
                    Ok(Flow::Normal)
                }
            }
            Operation::While { condition, max, body } => {
                let mut iterations: i64 = 0;
                while iterations < *max && self.eval(condition)?.is_truthy() {
                    match self.exec_block(body)? {
                        Flow::Normal => {}
                        ret @ Flow::Return(_) => return Ok(ret),
                    }
                    iterations += 1;
                }
                Ok(Flow::Normal)
            }
            Operation::Call(expr) => {
                self.eval(expr)?;
                Ok(Flow::Normal)
            }
            Operation::Return(expr) => {
                let value = match expr {
                    Some(e) => self.eval(e)?,
                    None => Value::None,
                };
                Ok(Flow::Return(value))
            }
            Operation::Request { target, action } => {
                let action_value = self.eval(action)?;
                let speaker = self.effective_speaker();
                self.kernel.request(&speaker, target, &action_value.display_string())?;
                Ok(Flow::Normal)
            }
            Operation::Respond { accept } => {
                let speaker = self.effective_speaker();
                let request_id = self
                    .kernel
                    .pending_requests(&speaker)
                    .first()
                    .map(|r| r.id)
                    .ok_or_else(|| RuntimeError::NoPendingRequest(speaker.clone()))?;
                self.kernel.respond(&speaker, request_id, *accept)?;
                Ok(Flow::Normal)
            }
            Operation::Inspect { target } => {
                let info = self.kernel.inspect_speaker(target)?;
                self.output.push(format!("--- inspect {} ---", info.name));
                self.output.push(format!("id: {}", info.id));
                let status = match info.state {
                    logica_kernel::SpeakerState::Alive => "alive",
                    logica_kernel::SpeakerState::Suspended => "suspended",
                };
                self.output.push(format!("status: {status}"));
                self.output.push(format!("vars: {}", info.variables.join(", ")));
                self.output.push("---".to_string());
                Ok(Flow::Normal)
            }
            Operation::History { owner, var } => {
                let value = self.kernel.inspect_variable(owner, var)?;
                let writes = self.kernel.variable_history(owner, var)?;
                let value_text = value.map(|v| v.display_string()).unwrap_or_else(|| "null".to_string());
                let ids: Vec<String> = writes.iter().map(|id| id.to_string()).collect();
                self.output
                    .push(format!("history {owner}.{var}: value={value_text} writes=[{}]", ids.join(", ")));
                Ok(Flow::Normal)
            }
            Operation::VerifyLedger => {
                match self.kernel.ledger_verify_report() {
                    Ok(()) => self.output.push("VALID".to_string()),
                    Err(reason) => self.output.push(format!("BROKEN: {reason}")),
                }
                Ok(Flow::Normal)
            }
            Operation::Seal { target } => {
                let speaker = self.effective_speaker();
                self.kernel.seal(&speaker, target)?;
                Ok(Flow::Normal)
            }
            Operation::World(_) => Ok(Flow::Normal),
            Operation::Pass => Ok(Flow::Normal),
            Operation::Fail(reason) => {
                let message = match reason {
                    Some(expr) => self.eval(expr)?.display_string(),
                    None => "fail".to_string(),
                };
                Err(RuntimeError::Fail { message })
            }
        }
    }

    fn eval(&mut self, expr: &Expr) -> RuntimeResult<Value> {
        match &expr.kind {
            ExprKind::Integer(n) => Ok(Value::Int(*n)),
            ExprKind::Float(f) => Ok(Value::Float(*f)),
            ExprKind::Str(s) => Ok(Value::Str(s.clone())),
            ExprKind::Bool(b) => Ok(Value::Bool(*b)),
            ExprKind::NoneLit => Ok(Value::None),
            ExprKind::Status(s) => Ok(Value::Status(match s {
                StatusLit::Active => Status::Active,
                StatusLit::Inactive => Status::Inactive,
                StatusLit::Broken => Status::Broken,
            })),
            ExprKind::Ident(name) => Ok(self.lookup(name)),
            ExprKind::Read { owner, var } => {
                let speaker = self.effective_speaker();
                Ok(self.kernel.read(&speaker, owner, var)?)
            }
            // No composite value kind exists in the value model; member and
            // index access never resolve to anything beyond `none`.
            ExprKind::Member { object, .. } => {
                self.eval(object)?;
                Ok(Value::None)
            }
            ExprKind::Index { object, index } => {
                self.eval(object)?;
                self.eval(index)?;
                Ok(Value::None)
            }
            ExprKind::Unary { op, expr } => {
                let value = self.eval(expr)?;
                match op {
                    UnaryOp::Not => Ok(Value::Bool(!value.is_truthy())),
                    UnaryOp::Neg => value.neg().ok_or(RuntimeError::NonNumericNegation),
                }
            }
            ExprKind::Binary { op, lhs, rhs } => self.eval_binary(*op, lhs, rhs),
            ExprKind::Call { callee, args } => self.eval_call(callee, args),
        }
    }

    fn lookup(&self, name: &str) -> Value {
        for scope in self.scopes.iter().rev() {
            if let Some(value) = scope.get(name) {
                return value.clone();
            }
        }
        let speaker = self.effective_speaker();
        self.kernel
            .inspect_variable(&speaker, name)
            .ok()
            .flatten()
            .unwrap_or(Value::None)
    }

    fn eval_binary(&mut self, op: BinaryOp, lhs: &Expr, rhs: &Expr) -> RuntimeResult<Value> {
        match op {
            BinaryOp::And => {
                let l = self.eval(lhs)?;
                if !l.is_truthy() {
                    return Ok(Value::Bool(false));
                }
                Ok(Value::Bool(self.eval(rhs)?.is_truthy()))
            }
            BinaryOp::Or => {
                let l = self.eval(lhs)?;
                if l.is_truthy() {
                    return Ok(Value::Bool(true));
                }
                Ok(Value::Bool(self.eval(rhs)?.is_truthy()))
            }
            _ => {
                let l = self.eval(lhs)?;
                let r = self.eval(rhs)?;
                Ok(match op {
                    BinaryOp::Add => l.add(&r),
                    BinaryOp::Sub => l.sub(&r),
                    BinaryOp::Mul => l.mul(&r),
                    BinaryOp::Div => l.div(&r),
                    BinaryOp::Mod => l.modulo(&r),
                    BinaryOp::Eq => Value::Bool(l.values_equal(&r)),
                    BinaryOp::NotEq => Value::Bool(!l.values_equal(&r)),
                    BinaryOp::Lt => Value::Bool(matches!(l.partial_compare(&r), Some(std::cmp::Ordering::Less))),
                    BinaryOp::LtEq => Value::Bool(matches!(
                        l.partial_compare(&r),
                        Some(std::cmp::Ordering::Less) | Some(std::cmp::Ordering::Equal)
                    )),
                    BinaryOp::Gt => Value::Bool(matches!(l.partial_compare(&r), Some(std::cmp::Ordering::Greater))),
                    BinaryOp::GtEq => Value::Bool(matches!(
                        l.partial_compare(&r),
                        Some(std::cmp::Ordering::Greater) | Some(std::cmp::Ordering::Equal)
                    )),
                    BinaryOp::And | BinaryOp::Or => unreachable!("handled above"),
                })
            }
        }
    }

    fn eval_call(&mut self, callee: &Expr, args: &[Expr]) -> RuntimeResult<Value> {
        let name = match &callee.kind {
            ExprKind::Ident(name) => name.clone(),
            _ => return Ok(Value::None),
        };
        let def = self
            .functions
            .get(&name)
            .cloned()
            .ok_or_else(|| RuntimeError::UndefinedFunction(name.clone()))?;

        if self.call_depth >= MAX_CALL_DEPTH {
            return Err(RuntimeError::RecursionLimitExceeded(name));
        }

        let mut values = Vec::with_capacity(args.len());
        for arg in args {
            values.push(self.eval(arg)?);
        }

        let mut scope = FxHashMap::default();
        for (param, value) in def.params.iter().zip(values.into_iter()) {
            scope.insert(param.clone(), value);
        }

        self.scopes.push(scope);
        self.call_depth += 1;
        trace!(function = %name, depth = self.call_depth, "function call");
        let result = self.exec_block(&def.body);
        self.call_depth -= 1;
        self.scopes.pop();

        match result? {
            Flow::Return(value) => Ok(value),
            Flow::Normal => Ok(Value::None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use logica_compile::Compiler;
    use logica_lex::Lexer;
    use logica_par::Parser;

    fn run(src: &str) -> (Vec<String>, Option<RuntimeError>) {
        let tokens = Lexer::tokenize(src).unwrap();
        let stmts = Parser::parse_program(tokens).unwrap();
        let program = Compiler::compile(&stmts).unwrap();
        let (output, _kernel, err) = Interpreter::run(program);
        (output, err)
    }

    #[test]
    fn speak_hello() {
        let (output, err) = run("speaker J\nas J {\n speak \"Hello\"\n}");
        assert!(err.is_none());
        assert_eq!(output, vec!["[J] Hello".to_string()]);
    }

    #[test]
    fn int_float_arithmetic_promotion() {
        let (output, err) = run("speaker X\nas X {\n let a = 10\n let b = 3.5\n let r = a - b\n speak r\n}");
        assert!(err.is_none());
        assert_eq!(output, vec!["[X] 6.5".to_string()]);
    }

    #[test]
    fn int_float_equality() {
        let (output, err) = run(
            "speaker X\nas X {\n let a = 1\n let b = 1.0\n if a == b {\n speak \"equal\"\n }\n}",
        );
        assert!(err.is_none());
        assert_eq!(output, vec!["[X] equal".to_string()]);
    }

    #[test]
    fn fail_aborts_with_message() {
        let (_, err) = run("speaker X\nas X {\n fail \"boom\"\n}");
        assert_eq!(err, Some(RuntimeError::Fail { message: "boom".to_string() }));
    }

    #[test]
    fn while_loop_bounded_by_max() {
        let (output, err) = run(
            "speaker X\nas X {\n let i = 0\n while i < 10, max 3 {\n speak i\n let i = i + 1\n }\n}",
        );
        assert!(err.is_none());
        assert_eq!(output.len(), 3);
    }

    #[test]
    fn function_sees_only_params_and_partition() {
        let (output, err) = run(
            "speaker X\nas X {\n let outer = 99\n fn f(n) {\n speak n\n }\n f(5)\n}",
        );
        assert!(err.is_none());
        assert_eq!(output, vec!["[X] 5".to_string()]);
    }

    #[test]
    fn ledger_valid_after_normal_run() {
        let tokens = Lexer::tokenize("speaker J\nas J {\n let x = 1\n speak x\n}").unwrap();
        let stmts = Parser::parse_program(tokens).unwrap();
        let program = Compiler::compile(&stmts).unwrap();
        let (_, kernel, err) = Interpreter::run(program);
        assert!(err.is_none());
        assert!(kernel.ledger_verify());
    }

    #[test]
    fn division_by_zero_is_silent_none() {
        let (output, err) = run("speaker X\nas X {\n let r = 1 / 0\n speak r\n}");
        assert!(err.is_none());
        assert_eq!(output, vec!["[X] none".to_string()]);
    }
}
