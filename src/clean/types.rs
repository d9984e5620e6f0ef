//! Modernization of legacy quoted type constraints
//!
//! Terraform 0.11 spelled variable type constraints as quoted strings
//! (`type = "string"`); 0.12 replaced them with expression-form constraints
//! (`type = string`). Only the three legacy names with a changed surface
//! syntax are mapped; any other quoted content is somebody else's problem
//! and stays untouched.

use crate::hcl::token::{Token, TokenKind};

/// Simplify a type-constraint expression, mapping the legacy quoted names
/// `"string"`, `"list"`, and `"map"` to their modern equivalents. Returns
/// the input unchanged for any other shape or content.
pub fn simplify_type(tokens: &[Token]) -> Vec<Token> {
    // Only a plain quoted string qualifies: open quote, one literal chunk,
    // close quote. Anything longer has escapes, templates, or structure.
    let [oquote, lit, cquote] = tokens else {
        return tokens.to_vec();
    };
    if oquote.kind != TokenKind::OQuote
        || lit.kind != TokenKind::QuotedLit
        || cquote.kind != TokenKind::CQuote
    {
        return tokens.to_vec();
    }

    match lit.text.as_str() {
        "string" => vec![Token::ident("string")],
        "list" => vec![
            Token::ident("list"),
            Token::open_paren(),
            Token::ident("string"),
            Token::close_paren(),
        ],
        "map" => vec![
            Token::ident("map"),
            Token::open_paren(),
            Token::ident("string"),
            Token::close_paren(),
        ],
        // Other legacy names ("number", "bool", ...) keep the same spelling
        // in the modern syntax modulo quotes, which is not this rewrite's
        // call to make.
        _ => tokens.to_vec(),
    }
}
