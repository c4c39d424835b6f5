//! The Logica parser (spec §4.2): recursive descent with a precedence-level
//! chain for expressions (lowest `or` down to postfix/primary).

pub mod ast;
mod error;

pub use error::{ParseError, ParseResult};

use ast::*;
use logica_lex::{Token, TokenKind};
use tracing::trace;

pub struct Parser {
    tokens: Vec<Token>,
    pos: usize,
}

impl Parser {
    pub fn new(tokens: Vec<Token>) -> Self {
        Self { tokens, pos: 0 }
    }

    pub fn parse_program(tokens: Vec<Token>) -> ParseResult<Vec<Stmt>> {
        trace!(tokens = tokens.len(), "parsing token stream");
        let mut parser = Parser::new(tokens);
        let mut stmts = Vec::new();
        parser.skip_newlines();
        while !parser.at(TokenKind::Eof) {
            stmts.push(parser.parse_top_level()?);
            parser.skip_newlines();
        }
        trace!(statements = stmts.len(), "parsing complete");
        Ok(stmts)
    }

    // --- token stream helpers -------------------------------------------------

    fn current(&self) -> &Token {
        &self.tokens[self.pos]
    }

    fn at(&self, kind: TokenKind) -> bool {
        self.current().kind == kind
    }

    fn advance(&mut self) -> Token {
        let tok = self.tokens[self.pos].clone();
        if self.pos + 1 < self.tokens.len() {
            self.pos += 1;
        }
        tok
    }

    fn skip_newlines(&mut self) {
        while self.at(TokenKind::Newline) {
            self.advance();
        }
    }

    fn expect(&mut self, kind: TokenKind, context: &str) -> ParseResult<Token> {
        if self.at(kind) {
            Ok(self.advance())
        } else {
            Err(self.unexpected(context))
        }
    }

    fn expect_ident(&mut self, context: &str) -> ParseResult<String> {
        if self.at(TokenKind::Identifier) {
            Ok(self.advance().value)
        } else {
            Err(self.unexpected(context))
        }
    }

    fn unexpected(&self, context: &str) -> ParseError {
        let tok = self.current();
        ParseError::UnexpectedToken {
            found: format!("{:?}", tok.kind),
            pos: tok.pos,
            context: context.to_string(),
        }
    }

    // --- top level --------------------------------------------------------

    fn parse_top_level(&mut self) -> ParseResult<Stmt> {
        match self.current().kind {
            TokenKind::Speaker => self.parse_speaker_decl(),
            TokenKind::World => self.parse_world_decl(),
            TokenKind::As => self.parse_as_block(),
            _ => Err(self.unexpected("expected speaker declaration, world declaration, or as-block")),
        }
    }

    fn parse_speaker_decl(&mut self) -> ParseResult<Stmt> {
        let pos = self.current().pos;
        self.advance(); // 'speaker'
        let name = self.expect_ident("speaker name")?;
        Ok(Stmt::new(StmtKind::SpeakerDecl(name), pos))
    }

    fn parse_world_decl(&mut self) -> ParseResult<Stmt> {
        let pos = self.current().pos;
        self.advance(); // 'world'
        let name = self.expect_ident("world name")?;
        Ok(Stmt::new(StmtKind::World(name), pos))
    }

    fn parse_as_block(&mut self) -> ParseResult<Stmt> {
        let pos = self.current().pos;
        self.advance(); // 'as'
        let speaker = self.expect_ident("speaker name after 'as'")?;
        let body = self.parse_block()?;
        Ok(Stmt::new(StmtKind::AsBlock { speaker, body }, pos))
    }

    // --- blocks and statements ---------------------------------------------

    fn parse_block(&mut self) -> ParseResult<Block> {
        self.skip_newlines();
        self.expect(TokenKind::LBrace, "'{' to start a block")?;
        self.skip_newlines();
        let mut stmts = Vec::new();
        while !self.at(TokenKind::RBrace) {
            stmts.push(self.parse_statement()?);
            self.skip_newlines();
        }
        self.expect(TokenKind::RBrace, "'}' to close a block")?;
        Ok(stmts)
    }

    fn parse_statement(&mut self) -> ParseResult<Stmt> {
        match self.current().kind {
            TokenKind::Let => self.parse_let(),
            TokenKind::Speak => self.parse_speak(),
            TokenKind::When => self.parse_when(),
            TokenKind::If => self.parse_if(),
            TokenKind::While => self.parse_while(),
            TokenKind::Fn => self.parse_fn_decl(),
            TokenKind::Return => self.parse_return(),
            TokenKind::Request => self.parse_request(),
            TokenKind::Respond => self.parse_respond(),
            TokenKind::Inspect => self.parse_inspect(),
            TokenKind::History => self.parse_history(),
            TokenKind::Verify => self.parse_verify(),
            TokenKind::Seal => self.parse_seal(),
            TokenKind::World => self.parse_world_decl(),
            TokenKind::Pass => {
                let pos = self.current().pos;
                self.advance();
                Ok(Stmt::new(StmtKind::Pass, pos))
            }
            TokenKind::Fail => self.parse_fail(),
            _ => {
                let pos = self.current().pos;
                let expr = self.parse_expression()?;
                Ok(Stmt::new(StmtKind::Expr(expr), pos))
            }
        }
    }

    fn parse_let(&mut self) -> ParseResult<Stmt> {
        let pos = self.current().pos;
        self.advance(); // 'let'
        let first = self.expect_ident("variable name in let")?;
        let target = if self.at(TokenKind::Dot) {
            self.advance();
            let var = self.expect_ident("variable name after '.'")?;
            LetTarget::Dotted(first, var)
        } else {
            LetTarget::Simple(first)
        };
        self.expect(TokenKind::Eq, "'=' in let statement")?;
        let value = self.parse_expression()?;
        Ok(Stmt::new(StmtKind::Let { target, value }, pos))
    }

    fn parse_speak(&mut self) -> ParseResult<Stmt> {
        let pos = self.current().pos;
        self.advance(); // 'speak'
        let value = self.parse_expression()?;
        Ok(Stmt::new(StmtKind::Speak(value), pos))
    }

    fn parse_when(&mut self) -> ParseResult<Stmt> {
        let pos = self.current().pos;
        self.advance(); // 'when'
        let condition = self.parse_expression()?;
        let body = self.parse_block()?;

        let mut otherwise = None;
        let mut broken = None;
        loop {
            self.skip_newlines_lookahead_for_clause();
            match self.current().kind {
                TokenKind::Otherwise if otherwise.is_none() => {
                    self.advance();
                    otherwise = Some(self.parse_block()?);
                }
                TokenKind::Broken if broken.is_none() => {
                    self.advance();
                    broken = Some(self.parse_block()?);
                }
                _ => break,
            }
        }

        Ok(Stmt::new(
            StmtKind::When {
                condition,
                body,
                otherwise,
                broken,
            },
            pos,
        ))
    }

    /// `otherwise`/`broken`/`elif`/`else` may appear on the line right after a
    /// closing `}`; peek past newlines without consuming them if no such
    /// clause follows.
    fn skip_newlines_lookahead_for_clause(&mut self) {
        let save = self.pos;
        self.skip_newlines();
        if !matches!(
            self.current().kind,
            TokenKind::Otherwise | TokenKind::Broken | TokenKind::Elif | TokenKind::Else
        ) {
            self.pos = save;
        }
    }

    fn parse_if(&mut self) -> ParseResult<Stmt> {
        let pos = self.current().pos;
        self.advance(); // 'if'
        let mut branches = Vec::new();
        let cond = self.parse_expression()?;
        let body = self.parse_block()?;
        branches.push((cond, body));

        let mut else_body = None;
        loop {
            self.skip_newlines_lookahead_for_clause();
            match self.current().kind {
                TokenKind::Elif => {
                    self.advance();
                    let cond = self.parse_expression()?;
                    let body = self.parse_block()?;
                    branches.push((cond, body));
                }
                TokenKind::Else => {
                    self.advance();
                    else_body = Some(self.parse_block()?);
                    break;
                }
                _ => break,
            }
        }

        Ok(Stmt::new(StmtKind::If { branches, else_body }, pos))
    }

    fn parse_while(&mut self) -> ParseResult<Stmt> {
        let pos = self.current().pos;
        self.advance(); // 'while'
        let condition = self.parse_expression()?;
        let max = if self.at(TokenKind::Comma) {
            self.advance();
            self.expect(TokenKind::Max, "'max' after ',' in while loop")?;
            let tok = self.expect(TokenKind::Integer, "integer literal after 'max'")?;
            Some(tok.value.parse::<i64>().map_err(|_| ParseError::InvalidNumber {
                text: tok.value.clone(),
                pos: tok.pos,
            })?)
        } else {
            None
        };
        let body = self.parse_block()?;
        Ok(Stmt::new(StmtKind::While { condition, max, body }, pos))
    }

    fn parse_fn_decl(&mut self) -> ParseResult<Stmt> {
        let pos = self.current().pos;
        self.advance(); // 'fn'
        let name = self.expect_ident("function name")?;
        self.expect(TokenKind::LParen, "'(' after function name")?;
        let mut params = Vec::new();
        if !self.at(TokenKind::RParen) {
            params.push(self.expect_ident("parameter name")?);
            while self.at(TokenKind::Comma) {
                self.advance();
                params.push(self.expect_ident("parameter name")?);
            }
        }
        self.expect(TokenKind::RParen, "')' after parameter list")?;
        let body = self.parse_block()?;
        Ok(Stmt::new(StmtKind::FnDecl { name, params, body }, pos))
    }

    fn parse_return(&mut self) -> ParseResult<Stmt> {
        let pos = self.current().pos;
        self.advance(); // 'return'
        if matches!(self.current().kind, TokenKind::Newline | TokenKind::RBrace | TokenKind::Eof) {
            return Ok(Stmt::new(StmtKind::Return(None), pos));
        }
        let value = self.parse_expression()?;
        Ok(Stmt::new(StmtKind::Return(Some(value)), pos))
    }

    fn parse_request(&mut self) -> ParseResult<Stmt> {
        let pos = self.current().pos;
        self.advance(); // 'request'
        let target = self.expect_ident("request target speaker")?;
        let action = self.parse_expression()?;
        Ok(Stmt::new(StmtKind::Request { target, action }, pos))
    }

    fn parse_respond(&mut self) -> ParseResult<Stmt> {
        let pos = self.current().pos;
        self.advance(); // 'respond'
        let accept = match self.current().kind {
            TokenKind::Accept => {
                self.advance();
                true
            }
            TokenKind::Refuse => {
                self.advance();
                false
            }
            _ => return Err(self.unexpected("'accept' or 'refuse' after 'respond'")),
        };
        Ok(Stmt::new(StmtKind::Respond { accept }, pos))
    }

    fn parse_inspect(&mut self) -> ParseResult<Stmt> {
        let pos = self.current().pos;
        self.advance(); // 'inspect'
        let target = self.expect_ident("inspect target")?;
        Ok(Stmt::new(StmtKind::Inspect { target }, pos))
    }

    fn parse_history(&mut self) -> ParseResult<Stmt> {
        let pos = self.current().pos;
        self.advance(); // 'history'
        let owner = self.expect_ident("history owner")?;
        self.expect(TokenKind::Dot, "'.' in history target")?;
        let var = self.expect_ident("history variable")?;
        Ok(Stmt::new(StmtKind::History { owner, var }, pos))
    }

    fn parse_verify(&mut self) -> ParseResult<Stmt> {
        let pos = self.current().pos;
        self.advance(); // 'verify'
        self.expect(TokenKind::Ledger, "'ledger' after 'verify'")?;
        Ok(Stmt::new(StmtKind::Verify, pos))
    }

    fn parse_seal(&mut self) -> ParseResult<Stmt> {
        let pos = self.current().pos;
        self.advance(); // 'seal'
        let target = self.expect_ident("variable to seal")?;
        Ok(Stmt::new(StmtKind::Seal { target }, pos))
    }

    fn parse_fail(&mut self) -> ParseResult<Stmt> {
        let pos = self.current().pos;
        self.advance(); // 'fail'
        if matches!(self.current().kind, TokenKind::Newline | TokenKind::RBrace | TokenKind::Eof) {
            return Ok(Stmt::new(StmtKind::Fail(None), pos));
        }
        let reason = self.parse_expression()?;
        Ok(Stmt::new(StmtKind::Fail(Some(reason)), pos))
    }

    // --- expressions: precedence-level chain --------------------------------
    // or < and < not < comparison < additive < multiplicative < unary minus
    // < postfix < primary

    pub fn parse_expression_tokens(tokens: Vec<Token>) -> ParseResult<Expr> {
        let mut parser = Parser::new(tokens);
        parser.parse_expression()
    }

    fn parse_expression(&mut self) -> ParseResult<Expr> {
        self.parse_or()
    }

    fn parse_or(&mut self) -> ParseResult<Expr> {
        let mut lhs = self.parse_and()?;
        while self.at(TokenKind::Or) {
            let pos = self.current().pos;
            self.advance();
            let rhs = self.parse_and()?;
            lhs = Expr::new(
                ExprKind::Binary {
                    op: BinaryOp::Or,
                    lhs: Box::new(lhs),
                    rhs: Box::new(rhs),
                },
                pos,
            );
        }
        Ok(lhs)
    }

    fn parse_and(&mut self) -> ParseResult<Expr> {
        let mut lhs = self.parse_not()?;
        while self.at(TokenKind::And) {
            let pos = self.current().pos;
            self.advance();
            let rhs = self.parse_not()?;
            lhs = Expr::new(
                ExprKind::Binary {
                    op: BinaryOp::And,
                    lhs: Box::new(lhs),
                    rhs: Box::new(rhs),
                },
                pos,
            );
        }
        Ok(lhs)
    }

    fn parse_not(&mut self) -> ParseResult<Expr> {
        if self.at(TokenKind::Not) {
            let pos = self.current().pos;
            self.advance();
            let expr = self.parse_not()?;
            return Ok(Expr::new(
                ExprKind::Unary {
                    op: UnaryOp::Not,
                    expr: Box::new(expr),
                },
                pos,
            ));
        }
        self.parse_comparison()
    }

    fn parse_comparison(&mut self) -> ParseResult<Expr> {
        let mut lhs = self.parse_additive()?;
        loop {
            let op = match self.current().kind {
                TokenKind::EqEq => BinaryOp::Eq,
                TokenKind::NotEq => BinaryOp::NotEq,
                TokenKind::Lt => BinaryOp::Lt,
                TokenKind::LtEq => BinaryOp::LtEq,
                TokenKind::Gt => BinaryOp::Gt,
                TokenKind::GtEq => BinaryOp::GtEq,
                _ => break,
            };
            let pos = self.current().pos;
            self.advance();
            let rhs = self.parse_additive()?;
            lhs = Expr::new(
                ExprKind::Binary {
                    op,
                    lhs: Box::new(lhs),
                    rhs: Box::new(rhs),
                },
                pos,
            );
        }
        Ok(lhs)
    }

    fn parse_additive(&mut self) -> ParseResult<Expr> {
        let mut lhs = self.parse_multiplicative()?;
        loop {
            let op = match self.current().kind {
                TokenKind::Plus => BinaryOp::Add,
                TokenKind::Minus => BinaryOp::Sub,
                _ => break,
            };
            let pos = self.current().pos;
            self.advance();
            let rhs = self.parse_multiplicative()?;
            lhs = Expr::new(
                ExprKind::Binary {
                    op,
                    lhs: Box::new(lhs),
                    rhs: Box::new(rhs),
                },
                pos,
            );
        }
        Ok(lhs)
    }

    fn parse_multiplicative(&mut self) -> ParseResult<Expr> {
        let mut lhs = self.parse_unary_minus()?;
        loop {
            let op = match self.current().kind {
                TokenKind::Star => BinaryOp::Mul,
                TokenKind::Slash => BinaryOp::Div,
                TokenKind::Percent => BinaryOp::Mod,
                _ => break,
            };
            let pos = self.current().pos;
            self.advance();
            let rhs = self.parse_unary_minus()?;
            lhs = Expr::new(
                ExprKind::Binary {
                    op,
                    lhs: Box::new(lhs),
                    rhs: Box::new(rhs),
                },
                pos,
            );
        }
        Ok(lhs)
    }

    fn parse_unary_minus(&mut self) -> ParseResult<Expr> {
        if self.at(TokenKind::Minus) {
            let pos = self.current().pos;
            self.advance();
            let expr = self.parse_unary_minus()?;
            return Ok(Expr::new(
                ExprKind::Unary {
                    op: UnaryOp::Neg,
                    expr: Box::new(expr),
                },
                pos,
            ));
        }
        self.parse_postfix()
    }

    fn parse_postfix(&mut self) -> ParseResult<Expr> {
        let mut expr = self.parse_primary()?;
        loop {
            match self.current().kind {
                TokenKind::Dot => {
                    let pos = self.current().pos;
                    self.advance();
                    let name = self.expect_ident("member name after '.'")?;
                    expr = Expr::new(
                        ExprKind::Member {
                            object: Box::new(expr),
                            name,
                        },
                        pos,
                    );
                }
                TokenKind::LBracket => {
                    let pos = self.current().pos;
                    self.advance();
                    let index = self.parse_expression()?;
                    self.expect(TokenKind::RBracket, "']' after index expression")?;
                    expr = Expr::new(
                        ExprKind::Index {
                            object: Box::new(expr),
                            index: Box::new(index),
                        },
                        pos,
                    );
                }
                TokenKind::LParen => {
                    let pos = self.current().pos;
                    self.advance();
                    let mut args = Vec::new();
                    if !self.at(TokenKind::RParen) {
                        args.push(self.parse_expression()?);
                        while self.at(TokenKind::Comma) {
                            self.advance();
                            args.push(self.parse_expression()?);
                        }
                    }
                    self.expect(TokenKind::RParen, "')' after argument list")?;
                    expr = Expr::new(
                        ExprKind::Call {
                            callee: Box::new(expr),
                            args,
                        },
                        pos,
                    );
                }
                _ => break,
            }
        }
        Ok(expr)
    }

    fn parse_primary(&mut self) -> ParseResult<Expr> {
        let pos = self.current().pos;
        match self.current().kind {
            TokenKind::Integer => {
                let tok = self.advance();
                let value = tok.value.parse::<i64>().map_err(|_| ParseError::InvalidNumber {
                    text: tok.value.clone(),
                    pos,
                })?;
                Ok(Expr::new(ExprKind::Integer(value), pos))
            }
            TokenKind::Float => {
                let tok = self.advance();
                let value = tok.value.parse::<f64>().map_err(|_| ParseError::InvalidNumber {
                    text: tok.value.clone(),
                    pos,
                })?;
                Ok(Expr::new(ExprKind::Float(value), pos))
            }
            TokenKind::String => {
                let tok = self.advance();
                Ok(Expr::new(ExprKind::Str(tok.value), pos))
            }
            TokenKind::True => {
                self.advance();
                Ok(Expr::new(ExprKind::Bool(true), pos))
            }
            TokenKind::False => {
                self.advance();
                Ok(Expr::new(ExprKind::Bool(false), pos))
            }
            TokenKind::None => {
                self.advance();
                Ok(Expr::new(ExprKind::NoneLit, pos))
            }
            TokenKind::Active => {
                self.advance();
                Ok(Expr::new(ExprKind::Status(StatusLit::Active), pos))
            }
            TokenKind::Inactive => {
                self.advance();
                Ok(Expr::new(ExprKind::Status(StatusLit::Inactive), pos))
            }
            TokenKind::Broken => {
                self.advance();
                Ok(Expr::new(ExprKind::Status(StatusLit::Broken), pos))
            }
            TokenKind::Read => self.parse_read_expr(),
            TokenKind::Identifier => {
                let name = self.advance().value;
                Ok(Expr::new(ExprKind::Ident(name), pos))
            }
            TokenKind::LParen => {
                self.advance();
                let expr = self.parse_expression()?;
                self.expect(TokenKind::RParen, "')' to close parenthesised expression")?;
                Ok(expr)
            }
            _ => Err(self.unexpected("expected an expression")),
        }
    }

    fn parse_read_expr(&mut self) -> ParseResult<Expr> {
        let pos = self.current().pos;
        self.advance(); // 'read'
        let owner = self.expect_ident("owner speaker in read expression")?;
        self.expect(TokenKind::Dot, "'.' in read expression")?;
        let var = self.expect_ident("variable name in read expression")?;
        Ok(Expr::new(ExprKind::Read { owner, var }, pos))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use logica_lex::Lexer;

    fn parse(src: &str) -> Vec<Stmt> {
        let tokens = Lexer::tokenize(src).unwrap();
        Parser::parse_program(tokens).unwrap()
    }

    #[test]
    fn parses_speaker_and_as_block_with_speak() {
        let stmts = parse("speaker J\nas J {\n speak \"Hello\"\n}");
        assert_eq!(stmts.len(), 2);
        assert_eq!(stmts[0].kind, StmtKind::SpeakerDecl("J".into()));
        match &stmts[1].kind {
            StmtKind::AsBlock { speaker, body } => {
                assert_eq!(speaker, "J");
                assert_eq!(body.len(), 1);
                assert!(matches!(body[0].kind, StmtKind::Speak(_)));
            }
            other => panic!("expected as-block, got {other:?}"),
        }
    }

    #[test]
    fn parses_dotted_let_target() {
        let stmts = parse("speaker A\nspeaker B\nas A {\n let B.x = 1\n}");
        match &stmts[2].kind {
            StmtKind::AsBlock { body, .. } => match &body[0].kind {
                StmtKind::Let { target, .. } => {
                    assert_eq!(target, &LetTarget::Dotted("B".into(), "x".into()));
                }
                other => panic!("expected let, got {other:?}"),
            },
            other => panic!("expected as-block, got {other:?}"),
        }
    }

    #[test]
    fn while_requires_comma_max() {
        let stmts = parse("speaker X\nas X {\n while true, max 3 {\n speak \"x\"\n }\n}");
        match &stmts[1].kind {
            StmtKind::AsBlock { body, .. } => match &body[0].kind {
                StmtKind::While { max, .. } => assert_eq!(*max, Some(3)),
                other => panic!("expected while, got {other:?}"),
            },
            other => panic!("expected as-block, got {other:?}"),
        }
    }

    #[test]
    fn while_without_max_parses_with_none() {
        // The parser itself allows `max`-less while loops; Axiom 9 rejects
        // them later, in the compiler.
        let stmts = parse("speaker X\nas X {\n while true {\n speak \"x\"\n }\n}");
        match &stmts[1].kind {
            StmtKind::AsBlock { body, .. } => match &body[0].kind {
                StmtKind::While { max, .. } => assert_eq!(*max, None),
                other => panic!("expected while, got {other:?}"),
            },
            other => panic!("expected as-block, got {other:?}"),
        }
    }

    #[test]
    fn precedence_additive_before_comparison() {
        let stmts = parse("speaker X\nas X {\n let r = 1 + 2 == 3\n}");
        match &stmts[1].kind {
            StmtKind::AsBlock { body, .. } => match &body[0].kind {
                StmtKind::Let { value, .. } => match &value.kind {
                    ExprKind::Binary { op: BinaryOp::Eq, lhs, .. } => {
                        assert!(matches!(lhs.kind, ExprKind::Binary { op: BinaryOp::Add, .. }));
                    }
                    other => panic!("expected ==, got {other:?}"),
                },
                other => panic!("expected let, got {other:?}"),
            },
            other => panic!("expected as-block, got {other:?}"),
        }
    }

    #[test]
    fn if_elif_else_chain() {
        let stmts = parse(
            "speaker X\nas X {\n if a { speak 1 } elif b { speak 2 } else { speak 3 }\n}",
        );
        match &stmts[1].kind {
            StmtKind::AsBlock { body, .. } => match &body[0].kind {
                StmtKind::If { branches, else_body } => {
                    assert_eq!(branches.len(), 2);
                    assert!(else_body.is_some());
                }
                other => panic!("expected if, got {other:?}"),
            },
            other => panic!("expected as-block, got {other:?}"),
        }
    }

    #[test]
    fn member_access_on_integer_literal() {
        // `42.name` (lexer emits INT DOT IDENT, not a float).
        let expr = Parser::parse_expression_tokens(Lexer::tokenize("42.name").unwrap()).unwrap();
        assert!(matches!(expr.kind, ExprKind::Member { .. }));
    }

    #[test]
    fn read_expression() {
        let expr = Parser::parse_expression_tokens(Lexer::tokenize("read owner.name").unwrap()).unwrap();
        match expr.kind {
            ExprKind::Read { owner, var } => {
                assert_eq!(owner, "owner");
                assert_eq!(var, "name");
            }
            other => panic!("expected read expr, got {other:?}"),
        }
    }

    #[test]
    fn unexpected_token_error() {
        let tokens = Lexer::tokenize("speaker J\nas J {\n let = 1\n}").unwrap();
        assert!(Parser::parse_program(tokens).is_err());
    }
}
