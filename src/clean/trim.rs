//! Trimming of insignificant tokens around unwrapped expressions

use crate::hcl::token::Token;

fn insignificant(token: &Token) -> bool {
    token.is_newline() || token.is_whitespace()
}

/// Remove newline and horizontal-whitespace tokens from the front and back
/// of a sequence, leaving the interior alone. Total over any input; an
/// all-trivia sequence trims to empty.
///
/// Unwrapping a multi-line interpolation like
///
/// ```text
/// x = "${
///   foo
/// }"
/// ```
///
/// would otherwise leave dangling newlines around the bare `foo`, which is
/// not valid standalone content for an attribute value.
pub fn trim_newlines(tokens: &[Token]) -> Vec<Token> {
    let start = tokens
        .iter()
        .position(|t| !insignificant(t))
        .unwrap_or(tokens.len());
    let end = tokens
        .iter()
        .rposition(|t| !insignificant(t))
        .map(|i| i + 1)
        .unwrap_or(start);
    tokens[start..end].to_vec()
}
