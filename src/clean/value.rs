//! Unwrapping of interpolation-only string values
//!
//! `x = "${var.foo}"` means the same as `x = var.foo`, and the latter is
//! the modern spelling. The rewrite only fires when the string provably
//! consists of exactly one interpolation and nothing else; any shape that
//! cannot be proven safe is returned unchanged. A false positive here
//! silently corrupts user configuration, so every ambiguous case is a
//! rejection.

use crate::clean::trim::trim_newlines;
use crate::hcl::token::{Token, TokenKind};

/// Simplify an attribute value expression, unwrapping `"${expr}"` to the
/// bare `expr` when that is provably meaning-preserving. Returns the input
/// unchanged otherwise.
///
/// Unwrapping runs to a fixed point: a doubly wrapped value like
/// `"${"${x}"}"` peels one provably safe layer at a time until the result
/// is stable, so re-running the rewrite on its own output never changes it
/// again. Every successful step shrinks the sequence, so the loop
/// terminates.
pub fn simplify_value(tokens: &[Token]) -> Vec<Token> {
    let mut current = tokens.to_vec();
    loop {
        let next = unwrap_once(&current);
        if next == current {
            return current;
        }
        current = next;
    }
}

/// One unwrapping step: strip exactly one `"${ ... }"` layer when the
/// guard shape matches and the interior proves free of sibling
/// interpolations.
fn unwrap_once(tokens: &[Token]) -> Vec<Token> {
    if tokens.len() < 5 {
        // Can't possibly be a "${ ... }" sequence without at least enough
        // tokens for the delimiters and one token inside them.
        return tokens.to_vec();
    }

    let shape = (
        tokens[0].kind,
        tokens[1].kind,
        tokens[tokens.len() - 2].kind,
        tokens[tokens.len() - 1].kind,
    );
    if shape
        != (
            TokenKind::OQuote,
            TokenKind::TemplateInterp,
            TokenKind::TemplateSeqEnd,
            TokenKind::CQuote,
        )
    {
        // Not an interpolation sequence at all, then.
        return tokens.to_vec();
    }

    let inside = &tokens[2..tokens.len() - 2];

    // Only sequences provable to be a single interpolation are unwrapped,
    // determined by hunting the interior for any other interpolation
    // delimiter. This produces false negatives sometimes, but that is
    // better than false positives; the easy cases are the interesting ones.
    let mut quotes: usize = 0;
    for token in inside {
        match token.kind {
            TokenKind::OQuote => quotes += 1,
            TokenKind::CQuote => quotes = quotes.saturating_sub(1),
            TokenKind::TemplateInterp | TokenKind::TemplateSeqEnd if quotes == 0 => {
                // Another template delimiter outside nested quotes means a
                // sibling interpolation, as in "${foo}${bar}". That isn't
                // unwrappable, so the whole expression stays as it is.
                return tokens.to_vec();
            }
            // Delimiters inside nested quotes belong to a nested
            // expression, as in "${foo("${bar}")}", and are fine.
            _ => {}
        }
    }

    // Leading and trailing newlines would make the bare expression invalid
    // if the original was spread over lines, as in:
    // "${
    //    foo
    // }"
    trim_newlines(inside)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hcl::lexer::tokenize;
    use crate::hcl::token::text_of;

    fn simplified(source: &str) -> String {
        text_of(&simplify_value(&tokenize(source)))
    }

    #[test]
    fn test_unwraps_single_interpolation() {
        assert_eq!(simplified("\"${foo}\""), "foo");
        assert_eq!(simplified("\"${var.foo}\""), "var.foo");
        assert_eq!(simplified("\"${lookup(var.map, \"key\")}\""), "lookup(var.map, \"key\")");
    }

    #[test]
    fn test_rejects_sibling_interpolations() {
        assert_eq!(simplified("\"${foo}${bar}\""), "\"${foo}${bar}\"");
    }

    #[test]
    fn test_rejects_literal_text_around_interpolation() {
        assert_eq!(simplified("\"prefix-${foo}\""), "\"prefix-${foo}\"");
        assert_eq!(simplified("\"${foo}-suffix\""), "\"${foo}-suffix\"");
    }

    #[test]
    fn test_unwraps_with_nested_quoted_interpolation() {
        // The inner "${bar}" sits inside nested quotes, so it belongs to a
        // nested expression and does not block the outer unwrap.
        assert_eq!(simplified("\"${foo(\"${bar}\")}\""), "foo(\"${bar}\")");
    }

    #[test]
    fn test_trims_newlines_from_multiline_interpolation() {
        assert_eq!(simplified("\"${\nfoo\n}\""), "foo");
        assert_eq!(simplified("\"${\n  foo\n  }\""), "foo");
    }

    #[test]
    fn test_trims_padding_spaces() {
        assert_eq!(simplified("\"${ foo }\""), "foo");
    }

    #[test]
    fn test_keeps_interior_newlines() {
        assert_eq!(simplified("\"${foo(\n1,\n2,\n)}\""), "foo(\n1,\n2,\n)");
    }

    #[test]
    fn test_plain_string_unchanged() {
        assert_eq!(simplified("\"hello\""), "\"hello\"");
    }

    #[test]
    fn test_non_string_unchanged() {
        assert_eq!(simplified("var.foo"), "var.foo");
        assert_eq!(simplified("[1, 2]"), "[1, 2]");
    }

    #[test]
    fn test_template_directive_unchanged() {
        assert_eq!(
            simplified("\"%{if var.x}y%{endif}\""),
            "\"%{if var.x}y%{endif}\""
        );
    }

    #[test]
    fn test_idempotent() {
        for source in ["\"${foo}\"", "\"${foo}${bar}\"", "\"plain\"", "var.foo"] {
            let once = simplify_value(&tokenize(source));
            let twice = simplify_value(&once);
            assert_eq!(once, twice, "source: {source:?}");
        }
    }

    #[test]
    fn test_doubly_wrapped_value_unwraps_fully() {
        // Each layer is provably safe on its own; the fixed point keeps the
        // rewrite idempotent.
        assert_eq!(simplified("\"${\"${x}\"}\""), "x");
    }
}
