//! Structural parsing of HCL token streams
//!
//! The parser groups a lossless token stream into a [`Body`]: an ordered
//! list of attributes (`name = expr`), blocks (`type "label" { ... }`), and
//! raw runs (blank lines, comments). It resolves just enough structure for
//! the cleanup passes to find attribute expressions and recurse into
//! blocks; expressions themselves stay as opaque token sequences.
//!
//! Every token of the input is stored somewhere in the tree, in order, so
//! serializing a body that was not rewritten reproduces the source byte for
//! byte.
//!
//! Parsing never panics on bad input. Problems are reported as
//! [`Diagnostic`] values; a file that produced any diagnostic is skipped by
//! the driver and never rewritten.

use crate::hcl::lexer::tokenize;
use crate::hcl::token::{Token, TokenKind};
use serde::Serialize;
use std::fmt;

/// A parse problem with an optional source line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub message: String,
    pub line: Option<usize>,
}

impl Diagnostic {
    fn at(line: usize, message: impl Into<String>) -> Self {
        Diagnostic {
            message: message.into(),
            line: Some(line),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.line {
            Some(line) => write!(f, "line {}: {}", line, self.message),
            None => write!(f, "{}", self.message),
        }
    }
}

impl std::error::Error for Diagnostic {}

/// The structural body of a document or block: attributes, nested blocks,
/// and raw token runs, in document order.
#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    pub(crate) items: Vec<Item>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Item {
    Attribute(Attribute),
    Block(Block),
    /// Tokens carrying no structure: blank lines, comments, and anything
    /// skipped during error recovery.
    Raw(Vec<Token>),
}

/// An attribute definition, `name = expr`.
///
/// The surrounding trivia (indentation, the `=`, spacing, trailing comment
/// and newline) is kept apart from the expression tokens, so `expr` is the
/// exact span a rewrite rule inspects and replaces.
#[derive(Debug, Clone, PartialEq)]
pub struct Attribute {
    pub(crate) lead: Vec<Token>,
    pub(crate) name: Token,
    pub(crate) pre_eq: Vec<Token>,
    pub(crate) eq: Token,
    pub(crate) pre_expr: Vec<Token>,
    pub(crate) expr: Vec<Token>,
    pub(crate) trail: Vec<Token>,
}

impl Attribute {
    pub fn name(&self) -> &str {
        &self.name.text
    }

    /// The attribute's value expression as a token sequence.
    pub fn expr_tokens(&self) -> &[Token] {
        &self.expr
    }

    /// Replace the value expression. The new sequence must serialize to a
    /// valid expression for this position; callers only ever substitute a
    /// sequence derived from the current one.
    pub fn set_expr_tokens(&mut self, tokens: Vec<Token>) {
        self.expr = tokens;
    }
}

/// A block definition, `type "label" ... { body }`.
#[derive(Debug, Clone, PartialEq)]
pub struct Block {
    pub(crate) lead: Vec<Token>,
    pub(crate) type_tok: Token,
    /// Labels, spacing, and the opening `{`.
    pub(crate) header: Vec<Token>,
    pub(crate) body: Body,
    /// Spacing before the closing `}`, the `}` itself, and its line trail.
    pub(crate) close: Vec<Token>,
}

impl Block {
    pub fn type_name(&self) -> &str {
        &self.type_tok.text
    }

    pub fn body(&self) -> &Body {
        &self.body
    }

    pub fn body_mut(&mut self) -> &mut Body {
        &mut self.body
    }
}

impl Body {
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn items_mut(&mut self) -> &mut [Item] {
        &mut self.items
    }
}

/// Parse HCL source into a body plus any diagnostics.
///
/// The body is always returned, including whatever structure was recovered
/// around errors; callers that care about correctness must treat a
/// non-empty diagnostic list as "do not touch this file".
pub fn parse(source: &str) -> (Body, Vec<Diagnostic>) {
    let tokens = tokenize(source);
    let mut cursor = Cursor::new(tokens);
    let mut diagnostics = Vec::new();
    let (mut body, pending) = parse_body(&mut cursor, false, &mut diagnostics);
    if !pending.is_empty() {
        body.items.push(Item::Raw(pending));
    }
    (body, diagnostics)
}

struct Cursor {
    tokens: Vec<Token>,
    pos: usize,
    line: usize,
}

impl Cursor {
    fn new(tokens: Vec<Token>) -> Self {
        Cursor {
            tokens,
            pos: 0,
            line: 1,
        }
    }

    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    fn next(&mut self) -> Option<Token> {
        let token = self.tokens.get(self.pos).cloned()?;
        self.pos += 1;
        self.line += token.text.matches('\n').count();
        Some(token)
    }

    /// Consume a run of horizontal whitespace tokens.
    fn take_whitespace(&mut self, into: &mut Vec<Token>) {
        while self.peek().map(|t| t.is_whitespace()).unwrap_or(false) {
            into.push(self.next().unwrap());
        }
    }

    /// Consume everything up to and including the next newline token.
    /// Used for error recovery.
    fn take_line(&mut self, into: &mut Vec<Token>) {
        while let Some(token) = self.next() {
            let is_newline = token.is_newline();
            into.push(token);
            if is_newline {
                break;
            }
        }
    }
}

/// Parse items until end of input or, when `nested`, an unconsumed `}`.
///
/// Returns the body plus any whitespace collected immediately before the
/// stopping point; for a nested body that whitespace belongs to the
/// enclosing block's closing brace.
fn parse_body(
    cursor: &mut Cursor,
    nested: bool,
    diagnostics: &mut Vec<Diagnostic>,
) -> (Body, Vec<Token>) {
    let mut items = Vec::new();

    loop {
        let mut lead = Vec::new();
        cursor.take_whitespace(&mut lead);

        let Some(token) = cursor.peek() else {
            if nested {
                diagnostics.push(Diagnostic::at(cursor.line, "unclosed block"));
            }
            return (Body { items }, lead);
        };

        match token.kind {
            TokenKind::CBrace if nested => {
                return (Body { items }, lead);
            }
            TokenKind::Newline => {
                lead.push(cursor.next().unwrap());
                items.push(Item::Raw(lead));
            }
            TokenKind::Comment => {
                lead.push(cursor.next().unwrap());
                if cursor.peek().map(|t| t.is_newline()).unwrap_or(false) {
                    lead.push(cursor.next().unwrap());
                }
                items.push(Item::Raw(lead));
            }
            TokenKind::Ident => {
                items.push(parse_definition(cursor, lead, diagnostics));
            }
            _ => {
                diagnostics.push(Diagnostic::at(
                    cursor.line,
                    format!("unexpected {:?} at start of definition", token.kind),
                ));
                cursor.take_line(&mut lead);
                items.push(Item::Raw(lead));
            }
        }
    }
}

/// Parse an attribute or block starting at an identifier.
fn parse_definition(
    cursor: &mut Cursor,
    lead: Vec<Token>,
    diagnostics: &mut Vec<Diagnostic>,
) -> Item {
    let name = cursor.next().unwrap();

    let mut spacing = Vec::new();
    cursor.take_whitespace(&mut spacing);

    match cursor.peek().map(|t| t.kind) {
        Some(TokenKind::Equals) => {
            let eq = cursor.next().unwrap();
            parse_attribute(cursor, lead, name, spacing, eq, diagnostics)
        }
        Some(TokenKind::Ident) | Some(TokenKind::OQuote) | Some(TokenKind::OBrace) => {
            parse_block(cursor, lead, name, spacing, diagnostics)
        }
        other => {
            diagnostics.push(Diagnostic::at(
                cursor.line,
                format!("expected '=' or block body after {:?}, found {:?}", name.text, other),
            ));
            let mut raw = lead;
            raw.push(name);
            raw.extend(spacing);
            cursor.take_line(&mut raw);
            Item::Raw(raw)
        }
    }
}

fn parse_attribute(
    cursor: &mut Cursor,
    lead: Vec<Token>,
    name: Token,
    pre_eq: Vec<Token>,
    eq: Token,
    diagnostics: &mut Vec<Diagnostic>,
) -> Item {
    let mut pre_expr = Vec::new();
    cursor.take_whitespace(&mut pre_expr);

    let mut expr = collect_expression(cursor, diagnostics);
    let mut trail = Vec::new();
    // Spacing between the expression and its line end belongs to trivia,
    // not to the expression span.
    while expr.last().map(|t| t.is_whitespace()).unwrap_or(false) {
        trail.insert(0, expr.pop().unwrap());
    }

    if expr.is_empty() {
        diagnostics.push(Diagnostic::at(cursor.line, "missing attribute expression"));
    }

    if cursor.peek().map(|t| t.kind) == Some(TokenKind::Comment) {
        trail.push(cursor.next().unwrap());
    }
    if cursor.peek().map(|t| t.is_newline()).unwrap_or(false) {
        trail.push(cursor.next().unwrap());
    }

    Item::Attribute(Attribute {
        lead,
        name,
        pre_eq,
        eq,
        pre_expr,
        expr,
        trail,
    })
}

/// Collect expression tokens until a newline, comment, or closing `}` at
/// nesting depth zero. The lexer has already paired quotes and template
/// delimiters, so depth tracking is a plain counter.
fn collect_expression(cursor: &mut Cursor, diagnostics: &mut Vec<Diagnostic>) -> Vec<Token> {
    let mut expr = Vec::new();
    let mut depth: usize = 0;

    loop {
        let Some(token) = cursor.peek() else {
            if depth > 0 {
                diagnostics.push(Diagnostic::at(cursor.line, "unterminated expression"));
            }
            return expr;
        };

        if depth == 0
            && matches!(
                token.kind,
                TokenKind::Newline | TokenKind::Comment | TokenKind::CBrace
            )
        {
            return expr;
        }

        if token.kind == TokenKind::Other && token.text.starts_with("<<") {
            diagnostics.push(Diagnostic::at(
                cursor.line,
                "heredoc expressions are not supported",
            ));
        }

        match token.kind {
            TokenKind::OParen
            | TokenKind::OBrack
            | TokenKind::OBrace
            | TokenKind::OQuote
            | TokenKind::TemplateInterp => depth += 1,
            TokenKind::CParen
            | TokenKind::CBrack
            | TokenKind::CBrace
            | TokenKind::CQuote
            | TokenKind::TemplateSeqEnd => depth = depth.saturating_sub(1),
            _ => {}
        }
        expr.push(cursor.next().unwrap());
    }
}

fn parse_block(
    cursor: &mut Cursor,
    lead: Vec<Token>,
    type_tok: Token,
    mut header: Vec<Token>,
    diagnostics: &mut Vec<Diagnostic>,
) -> Item {
    // Labels: identifiers or quoted strings, then the opening brace.
    loop {
        match cursor.peek().map(|t| t.kind) {
            Some(TokenKind::OBrace) => {
                header.push(cursor.next().unwrap());
                break;
            }
            Some(TokenKind::Ident) => {
                header.push(cursor.next().unwrap());
            }
            Some(TokenKind::OQuote) => {
                header.push(cursor.next().unwrap());
                loop {
                    match cursor.peek().map(|t| t.kind) {
                        Some(TokenKind::QuotedLit) => header.push(cursor.next().unwrap()),
                        Some(TokenKind::CQuote) => {
                            header.push(cursor.next().unwrap());
                            break;
                        }
                        other => {
                            diagnostics.push(Diagnostic::at(
                                cursor.line,
                                format!("invalid block label content: {:?}", other),
                            ));
                            let mut raw = lead;
                            raw.push(type_tok);
                            raw.extend(header);
                            cursor.take_line(&mut raw);
                            return Item::Raw(raw);
                        }
                    }
                }
            }
            Some(TokenKind::Whitespace) => {
                header.push(cursor.next().unwrap());
            }
            other => {
                diagnostics.push(Diagnostic::at(
                    cursor.line,
                    format!("expected block label or '{{', found {:?}", other),
                ));
                let mut raw = lead;
                raw.push(type_tok);
                raw.extend(header);
                cursor.take_line(&mut raw);
                return Item::Raw(raw);
            }
        }
    }

    let (body, pending) = parse_body(cursor, true, diagnostics);

    let mut close = pending;
    if cursor.peek().map(|t| t.kind) == Some(TokenKind::CBrace) {
        close.push(cursor.next().unwrap());
        let mut trail = Vec::new();
        cursor.take_whitespace(&mut trail);
        if cursor.peek().map(|t| t.kind) == Some(TokenKind::Comment) {
            trail.push(cursor.next().unwrap());
        }
        if cursor.peek().map(|t| t.is_newline()).unwrap_or(false) {
            trail.push(cursor.next().unwrap());
        }
        close.extend(trail);
    }

    Item::Block(Block {
        lead,
        type_tok,
        header,
        body,
        close,
    })
}
