//! Core token types shared across the lexer, parser, and cleanup passes.
//!
//!     The cleanup passes operate on flat token sequences rather than on a
//!     resolved expression tree. Keeping the token model small and closed is
//!     what makes the pattern matching in the cleanup passes auditable: a
//!     token is either one of the kinds a rewrite rule is allowed to look at,
//!     or it is `Other` and can never participate in a match.
//!
//! Token Layers
//!
//!     Syntax Tokens:
//!         Tokens produced outside of quoted templates: identifiers, numbers,
//!         punctuation, comments, whitespace. Produced by the logos lexer in
//!         [lexer](crate::hcl::lexer).
//!
//!     Template Tokens:
//!         Tokens produced inside a quoted template: literal text chunks,
//!         `${` interpolation openers and their matching `}` closers. The
//!         lexer classifies a `}` as [`TokenKind::TemplateSeqEnd`] only when
//!         it closes an interpolation, so the cleanup passes never have to
//!         disambiguate block braces from template delimiters themselves.
//!
//! Every token carries the exact source text it was lexed from, and
//! concatenating the text of a token sequence reproduces the source span it
//! came from byte for byte.

use serde::Serialize;

/// Classification of a single lexical unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TokenKind {
    /// `"` opening a quoted template.
    OQuote,
    /// `"` closing a quoted template.
    CQuote,
    /// `${` (or `${~`) opening an interpolation inside a quoted template.
    TemplateInterp,
    /// `}` (or `~}`) closing an interpolation or template directive.
    TemplateSeqEnd,
    /// A run of literal text inside a quoted template.
    QuotedLit,
    /// An identifier such as `variable` or `string`.
    Ident,
    /// A numeric literal.
    Number,
    OParen,
    CParen,
    OBrack,
    CBrack,
    /// `{` opening a block or object constructor.
    OBrace,
    /// `}` closing a block or object constructor.
    CBrace,
    Equals,
    Comma,
    Newline,
    /// Horizontal whitespace (spaces, tabs, carriage returns).
    Whitespace,
    /// A `#`, `//`, or `/* */` comment, including its delimiters.
    Comment,
    /// Anything the lexer does not classify further. Preserved verbatim;
    /// never matched by a rewrite rule.
    Other,
}

/// An atomic lexical unit: a kind plus the raw source text it covers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>) -> Self {
        Token {
            kind,
            text: text.into(),
        }
    }

    /// An identifier token with the given spelling.
    pub fn ident(name: &str) -> Self {
        Token::new(TokenKind::Ident, name)
    }

    pub fn open_paren() -> Self {
        Token::new(TokenKind::OParen, "(")
    }

    pub fn close_paren() -> Self {
        Token::new(TokenKind::CParen, ")")
    }

    /// Check if this token is a newline
    pub fn is_newline(&self) -> bool {
        matches!(self.kind, TokenKind::Newline)
    }

    /// Check if this token is horizontal whitespace (not a newline)
    pub fn is_whitespace(&self) -> bool {
        matches!(self.kind, TokenKind::Whitespace)
    }

    /// Check if this token opens or closes a quoted template
    pub fn is_quote(&self) -> bool {
        matches!(self.kind, TokenKind::OQuote | TokenKind::CQuote)
    }

    /// Check if this token is an interpolation delimiter
    pub fn is_template_delimiter(&self) -> bool {
        matches!(
            self.kind,
            TokenKind::TemplateInterp | TokenKind::TemplateSeqEnd
        )
    }
}

/// Concatenate the raw text of a token sequence.
pub fn text_of(tokens: &[Token]) -> String {
    let mut out = String::new();
    for token in tokens {
        out.push_str(&token.text);
    }
    out
}
