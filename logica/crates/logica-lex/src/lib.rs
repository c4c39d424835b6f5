//! The Logica lexer (spec §4.1): source text -> ordered token stream.

mod cursor;
mod token;

pub use token::{Token, TokenKind};

use cursor::Cursor;
use logica_util::Position;
use thiserror::Error;
use tracing::trace;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LexError {
    #[error("unexpected character {character:?} at {pos}")]
    UnexpectedChar { character: char, pos: Position },

    #[error("unterminated string starting at {pos}")]
    UnterminatedString { pos: Position },

    #[error("raw newline inside string literal at {pos}")]
    NewlineInString { pos: Position },

    #[error("invalid escape sequence '\\{escape}' at {pos}")]
    InvalidEscape { escape: char, pos: Position },
}

impl LexError {
    pub fn pos(&self) -> Position {
        match self {
            LexError::UnexpectedChar { pos, .. }
            | LexError::UnterminatedString { pos, .. }
            | LexError::NewlineInString { pos, .. }
            | LexError::InvalidEscape { pos, .. } => *pos,
        }
    }
}

pub type LexResult<T> = Result<T, LexError>;

pub struct Lexer<'a> {
    cursor: Cursor<'a>,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            cursor: Cursor::new(source),
        }
    }

    fn pos(&self) -> Position {
        Position::new(self.cursor.line(), self.cursor.column())
    }

    /// Lex the whole source into a token stream, ending in a single `Eof` token.
    pub fn tokenize(source: &'a str) -> LexResult<Vec<Token>> {
        trace!(bytes = source.len(), "lexing source");
        let mut lexer = Lexer::new(source);
        let mut tokens = Vec::new();
        loop {
            let tok = lexer.next_token()?;
            let done = tok.kind == TokenKind::Eof;
            tokens.push(tok);
            if done {
                break;
            }
        }
        trace!(tokens = tokens.len(), "lexing complete");
        Ok(tokens)
    }

    fn next_token(&mut self) -> LexResult<Token> {
        self.skip_whitespace_and_comments();

        let start = self.pos();
        let c = self.cursor.current();

        if c == '\0' {
            return Ok(Token::new(TokenKind::Eof, "", start));
        }
        if c == '\n' {
            self.cursor.advance();
            return Ok(Token::new(TokenKind::Newline, "\n", start));
        }
        if c.is_ascii_digit() {
            return self.lex_number(start);
        }
        if c == '_' || c.is_alphabetic() {
            return self.lex_identifier(start);
        }
        if c == '"' || c == '\'' {
            return self.lex_string(start, c);
        }
        self.lex_operator(start)
    }

    fn skip_whitespace_and_comments(&mut self) {
        loop {
            match self.cursor.current() {
                ' ' | '\t' | '\r' => {
                    self.cursor.advance();
                }
                '#' => {
                    while self.cursor.current() != '\n' && !self.cursor.is_at_end() {
                        self.cursor.advance();
                    }
                }
                _ => break,
            }
        }
    }

    fn lex_identifier(&mut self, start: Position) -> LexResult<Token> {
        let mut text = String::new();
        while let Some(c) = self
            .cursor
            .advance_if(|c| c == '_' || c.is_alphanumeric())
        {
            text.push(c);
        }
        let kind = TokenKind::keyword(&text).unwrap_or(TokenKind::Identifier);
        Ok(Token::new(kind, text, start))
    }

    fn lex_number(&mut self, start: Position) -> LexResult<Token> {
        let mut text = String::new();
        while let Some(c) = self.cursor.advance_if(|c| c.is_ascii_digit()) {
            text.push(c);
        }

        // A `.` only joins this number if followed by another digit; otherwise
        // it's a standalone Dot token (so `42.name` lexes as INT DOT IDENT).
        if self.cursor.current() == '.' && self.cursor.peek(1).is_ascii_digit() {
            text.push(self.cursor.advance()); // consume '.'
            while let Some(c) = self.cursor.advance_if(|c| c.is_ascii_digit()) {
                text.push(c);
            }
            return Ok(Token::new(TokenKind::Float, text, start));
        }

        Ok(Token::new(TokenKind::Integer, text, start))
    }

    fn lex_string(&mut self, start: Position, delim: char) -> LexResult<Token> {
        self.cursor.advance(); // opening delimiter
        let mut text = String::new();
        loop {
            let c = self.cursor.current();
            if c == '\0' {
                return Err(LexError::UnterminatedString { pos: start });
            }
            if c == '\n' {
                return Err(LexError::NewlineInString { pos: self.pos() });
            }
            if c == delim {
                self.cursor.advance();
                break;
            }
            if c == '\\' {
                let escape_pos = self.pos();
                self.cursor.advance();
                let escaped = self.cursor.current();
                let resolved = match escaped {
                    'n' => '\n',
                    't' => '\t',
                    '\\' => '\\',
                    '"' => '"',
                    '\'' => '\'',
                    other => return Err(LexError::InvalidEscape {
                        escape: other,
                        pos: escape_pos,
                    }),
                };
                text.push(resolved);
                self.cursor.advance();
                continue;
            }
            text.push(c);
            self.cursor.advance();
        }
        Ok(Token::new(TokenKind::String, text, start))
    }

    fn lex_operator(&mut self, start: Position) -> LexResult<Token> {
        let c = self.cursor.advance();
        let (kind, text): (TokenKind, String) = match c {
            '(' => (TokenKind::LParen, "(".into()),
            ')' => (TokenKind::RParen, ")".into()),
            '{' => (TokenKind::LBrace, "{".into()),
            '}' => (TokenKind::RBrace, "}".into()),
            '[' => (TokenKind::LBracket, "[".into()),
            ']' => (TokenKind::RBracket, "]".into()),
            ',' => (TokenKind::Comma, ",".into()),
            '.' => (TokenKind::Dot, ".".into()),
            ':' => (TokenKind::Colon, ":".into()),
            '+' => (TokenKind::Plus, "+".into()),
            '*' => (TokenKind::Star, "*".into()),
            '/' => (TokenKind::Slash, "/".into()),
            '%' => (TokenKind::Percent, "%".into()),
            '=' => {
                if self.cursor.advance_if(|c| c == '=').is_some() {
                    (TokenKind::EqEq, "==".into())
                } else {
                    (TokenKind::Eq, "=".into())
                }
            }
            '!' => {
                if self.cursor.advance_if(|c| c == '=').is_some() {
                    (TokenKind::NotEq, "!=".into())
                } else {
                    return Err(LexError::UnexpectedChar { character: c, pos: start });
                }
            }
            '<' => {
                if self.cursor.advance_if(|c| c == '=').is_some() {
                    (TokenKind::LtEq, "<=".into())
                } else {
                    (TokenKind::Lt, "<".into())
                }
            }
            '>' => {
                if self.cursor.advance_if(|c| c == '=').is_some() {
                    (TokenKind::GtEq, ">=".into())
                } else {
                    (TokenKind::Gt, ">".into())
                }
            }
            '-' => {
                if self.cursor.advance_if(|c| c == '>').is_some() {
                    (TokenKind::Arrow, "->".into())
                } else {
                    (TokenKind::Minus, "-".into())
                }
            }
            other => return Err(LexError::UnexpectedChar { character: other, pos: start }),
        };
        Ok(Token::new(kind, text, start))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(src: &str) -> Vec<TokenKind> {
        Lexer::tokenize(src).unwrap().into_iter().map(|t| t.kind).collect()
    }

    #[test]
    fn tokenizes_speaker_decl() {
        assert_eq!(
            kinds("speaker J"),
            vec![TokenKind::Speaker, TokenKind::Identifier, TokenKind::Eof]
        );
    }

    #[test]
    fn keyword_beats_identifier() {
        assert_eq!(kinds("active"), vec![TokenKind::Active, TokenKind::Eof]);
    }

    #[test]
    fn member_access_dot_vs_float() {
        // `42.name` => INT DOT IDENT, not a float.
        assert_eq!(
            kinds("42.name"),
            vec![
                TokenKind::Integer,
                TokenKind::Dot,
                TokenKind::Identifier,
                TokenKind::Eof
            ]
        );
        assert_eq!(kinds("3.5"), vec![TokenKind::Float, TokenKind::Eof]);
    }

    #[test]
    fn two_char_operators() {
        assert_eq!(
            kinds("== != <= >= ->"),
            vec![
                TokenKind::EqEq,
                TokenKind::NotEq,
                TokenKind::LtEq,
                TokenKind::GtEq,
                TokenKind::Arrow,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn comments_emit_no_token() {
        assert_eq!(
            kinds("let x = 1 # comment\nspeak x"),
            vec![
                TokenKind::Let,
                TokenKind::Identifier,
                TokenKind::Eq,
                TokenKind::Integer,
                TokenKind::Newline,
                TokenKind::Speak,
                TokenKind::Identifier,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn string_escapes() {
        let tokens = Lexer::tokenize(r#""a\nb""#).unwrap();
        assert_eq!(tokens[0].value, "a\nb");
    }

    #[test]
    fn unterminated_string_errors() {
        assert!(matches!(
            Lexer::tokenize("\"abc"),
            Err(LexError::UnterminatedString { .. })
        ));
    }

    #[test]
    fn raw_newline_in_string_errors() {
        assert!(matches!(
            Lexer::tokenize("\"abc\ndef\""),
            Err(LexError::NewlineInString { .. })
        ));
    }

    #[test]
    fn unexpected_char_has_position() {
        let err = Lexer::tokenize("let x = @").unwrap_err();
        assert_eq!(err.pos(), Position::new(1, 9));
    }

    #[test]
    fn every_token_ends_in_eof_with_position() {
        let tokens = Lexer::tokenize("speak 1").unwrap();
        assert_eq!(tokens.last().unwrap().kind, TokenKind::Eof);
    }
}
