//! Logos-based lexer shared by the signature parsers
//!
//! Keywords (`list`, `struct`, `union`) are lexed as plain identifiers and
//! recognised by the parsers from context, because they are also legal type
//! names in the introspection output.

use extsoap_engine_common::{EngineError, Result};
use logos::Logos;

/// Token kinds of the introspection grammar
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(skip r"[ \t\r\n]+")]
pub enum TokenKind {
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,
    #[token("[")]
    LBracket,
    #[token("]")]
    RBracket,
    #[token(",")]
    Comma,
    #[token(";")]
    Semicolon,
    #[token("$")]
    Dollar,

    /// Array sizes inside `[...]`
    #[regex(r"[0-9]+")]
    Number,

    // XML names may carry dots, dashes and non-ASCII letters.
    // `<anyXML>` is how wildcards are rendered.
    #[regex(r"[\p{L}_][\p{L}\p{N}_.\-]*")]
    #[regex(r"<[\p{L}_][\p{L}\p{N}_]*>")]
    Ident,
}

impl TokenKind {
    fn describe(self) -> &'static str {
        match self {
            TokenKind::LParen => "'('",
            TokenKind::RParen => "')'",
            TokenKind::LBrace => "'{'",
            TokenKind::RBrace => "'}'",
            TokenKind::LBracket => "'['",
            TokenKind::RBracket => "']'",
            TokenKind::Comma => "','",
            TokenKind::Semicolon => "';'",
            TokenKind::Dollar => "'$'",
            TokenKind::Number => "number",
            TokenKind::Ident => "identifier",
        }
    }
}

/// A token with its kind, text and byte offset
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: TokenKind,
    pub text: &'a str,
    pub offset: usize,
}

/// Tokenized signature with a read position, driven by the recursive-descent parsers
pub(crate) struct TokenCursor<'a> {
    source: &'a str,
    tokens: Vec<Token<'a>>,
    pos: usize,
}

impl<'a> TokenCursor<'a> {
    pub fn tokenize(source: &'a str) -> Result<Self> {
        let mut lexer = TokenKind::lexer(source);
        let mut tokens = Vec::new();

        while let Some(result) = lexer.next() {
            let span = lexer.span();
            match result {
                Ok(kind) => tokens.push(Token {
                    kind,
                    text: lexer.slice(),
                    offset: span.start,
                }),
                Err(()) => {
                    return Err(malformed(
                        source,
                        span.start,
                        format!("unexpected character {:?}", lexer.slice()),
                    ))
                }
            }
        }

        Ok(Self {
            source,
            tokens,
            pos: 0,
        })
    }

    pub fn peek(&self) -> Option<&Token<'a>> {
        self.tokens.get(self.pos)
    }

    pub fn peek_nth(&self, n: usize) -> Option<&Token<'a>> {
        self.tokens.get(self.pos + n)
    }

    pub fn at(&self, kind: TokenKind) -> bool {
        self.peek().is_some_and(|t| t.kind == kind)
    }

    /// Identifier with the given text followed by a token of `next` kind
    pub fn at_keyword(&self, keyword: &str, next: TokenKind) -> bool {
        self.peek()
            .is_some_and(|t| t.kind == TokenKind::Ident && t.text == keyword)
            && self.peek_nth(1).is_some_and(|t| t.kind == next)
    }

    pub fn bump(&mut self) -> Option<Token<'a>> {
        let token = self.tokens.get(self.pos).copied();
        if token.is_some() {
            self.pos += 1;
        }
        token
    }

    pub fn eat(&mut self, kind: TokenKind) -> bool {
        if self.at(kind) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    pub fn expect(&mut self, kind: TokenKind) -> Result<Token<'a>> {
        match self.peek() {
            Some(token) if token.kind == kind => {
                let token = *token;
                self.pos += 1;
                Ok(token)
            }
            _ => Err(self.error(format!("expected {}", kind.describe()))),
        }
    }

    pub fn expect_ident(&mut self, what: &str) -> Result<&'a str> {
        match self.peek() {
            Some(token) if token.kind == TokenKind::Ident => {
                let text = token.text;
                self.pos += 1;
                Ok(text)
            }
            _ => Err(self.error(format!("expected {}", what))),
        }
    }

    pub fn expect_end(&self) -> Result<()> {
        if self.pos < self.tokens.len() {
            return Err(self.error("unexpected trailing input".to_string()));
        }
        Ok(())
    }

    /// Error positioned at the current token, or at the end of input
    pub fn error(&self, reason: String) -> EngineError {
        let position = self
            .peek()
            .map(|t| t.offset)
            .unwrap_or(self.source.len());
        let found = match self.peek() {
            Some(token) => format!("found {:?}", token.text),
            None => "found end of input".to_string(),
        };
        malformed(self.source, position, format!("{}, {}", reason, found))
    }
}

fn malformed(source: &str, position: usize, reason: String) -> EngineError {
    EngineError::MalformedSignature {
        signature: source.to_string(),
        position,
        reason,
    }
}
