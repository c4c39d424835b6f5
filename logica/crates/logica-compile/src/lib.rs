//! The axiom checker (spec §4.4): lowers the AST into a `CompiledProgram`
//! and statically enforces axioms 1, 5, 8, and 9.

mod checker;
mod error;
mod program;

pub use checker::Compiler;
pub use error::{CompileError, CompileResult};
pub use program::{CompiledProgram, FunctionDef, OpBlock, Operation};

#[cfg(test)]
mod tests {
    use super::*;
    use logica_lex::Lexer;
    use logica_par::Parser;

    fn compile(src: &str) -> CompileResult<CompiledProgram> {
        let tokens = Lexer::tokenize(src).unwrap();
        let stmts = Parser::parse_program(tokens).unwrap();
        Compiler::compile(&stmts)
    }

    #[test]
    fn simple_speak_compiles() {
        let program = compile("speaker J\nas J {\n speak \"Hello\"\n}").unwrap();
        assert_eq!(program.speakers, vec!["J".to_string()]);
        assert_eq!(program.operations.len(), 3); // set_speaker, speak, pop_speaker
    }

    #[test]
    fn axiom1_undeclared_speaker() {
        let err = compile("speaker A\nas B {\n speak \"x\"\n}").unwrap_err();
        assert_eq!(err.axiom(), 1);
    }

    #[test]
    fn axiom1_request_to_undeclared_speaker() {
        let err = compile("speaker A\nas A {\n request B \"help\"\n}").unwrap_err();
        assert_eq!(err.axiom(), 1);
    }

    #[test]
    fn axiom8_cross_speaker_write_rejected() {
        let err = compile("speaker A\nspeaker B\nas A {\n let B.x = 1\n}").unwrap_err();
        assert_eq!(err.axiom(), 8);
    }

    #[test]
    fn axiom8_fires_inside_nested_blocks() {
        let sources = [
            "speaker A\nspeaker B\nas A {\n if true {\n let B.x = 1\n }\n}",
            "speaker A\nspeaker B\nas A {\n while true, max 3 {\n let B.x = 1\n }\n}",
            "speaker A\nspeaker B\nas A {\n when true {\n let B.x = 1\n }\n}",
            "speaker A\nspeaker B\nas A {\n fn f() {\n let B.x = 1\n }\n}",
        ];
        for src in sources {
            let err = compile(src).unwrap_err();
            assert_eq!(err.axiom(), 8, "expected axiom 8 violation for: {src}");
        }
    }

    #[test]
    fn axiom9_missing_max_rejected() {
        let err = compile("speaker X\nas X {\n while true {\n speak \"x\"\n }\n}").unwrap_err();
        assert_eq!(err.axiom(), 9);
    }

    #[test]
    fn axiom9_zero_max_rejected() {
        let err = compile("speaker X\nas X {\n while true, max 0 {\n speak \"x\"\n }\n}").unwrap_err();
        assert_eq!(err.axiom(), 9);
    }

    #[test]
    fn axiom5_seal_then_reassign_rejected() {
        let err = compile("speaker X\nas X {\n let g = 92\n seal g\n let g = 100\n}").unwrap_err();
        assert_eq!(err.axiom(), 5);
    }

    #[test]
    fn well_formed_program_compiles() {
        assert!(compile(
            "speaker X\nas X {\n let a = 10\n let b = 3.5\n let r = a - b\n speak r\n}"
        )
        .is_ok());
    }

    #[test]
    fn function_declaration_registers_in_table() {
        let program = compile("speaker X\nas X {\n fn greet() {\n speak \"hi\"\n }\n}").unwrap();
        assert!(program.functions.contains_key("greet"));
    }
}
