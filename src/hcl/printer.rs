//! Serialization of a parsed body back into source text
//!
//! The parser stores every input token somewhere in the tree, so printing
//! is a straight in-order fold over the stored tokens. Spans the cleanup
//! passes did not touch come back byte-identical; replaced expression
//! sequences render as whatever their tokens spell.

use crate::hcl::parser::{Body, Item};
use crate::hcl::token::Token;

/// Serialize a body back into source text.
pub fn serialize(body: &Body) -> String {
    let mut out = String::new();
    write_body(body, &mut out);
    out
}

fn write_body(body: &Body, out: &mut String) {
    for item in body.items() {
        match item {
            Item::Attribute(attr) => {
                write_tokens(&attr.lead, out);
                out.push_str(&attr.name.text);
                write_tokens(&attr.pre_eq, out);
                out.push_str(&attr.eq.text);
                write_tokens(&attr.pre_expr, out);
                write_tokens(&attr.expr, out);
                write_tokens(&attr.trail, out);
            }
            Item::Block(block) => {
                write_tokens(&block.lead, out);
                out.push_str(&block.type_tok.text);
                write_tokens(&block.header, out);
                write_body(block.body(), out);
                write_tokens(&block.close, out);
            }
            Item::Raw(tokens) => write_tokens(tokens, out),
        }
    }
}

fn write_tokens(tokens: &[Token], out: &mut String) {
    for token in tokens {
        out.push_str(&token.text);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hcl::parser::parse;

    fn round_trip(source: &str) {
        let (body, diagnostics) = parse(source);
        assert_eq!(diagnostics, vec![], "source: {source:?}");
        assert_eq!(serialize(&body), source, "source: {source:?}");
    }

    #[test]
    fn test_round_trip_attributes() {
        round_trip("a = 1\nb = \"two\"\nc = [1, 2, 3]\n");
    }

    #[test]
    fn test_round_trip_blocks_and_comments() {
        round_trip(
            "# module inputs\nvariable \"name\" {\n  type    = \"string\"\n  default = \"x\" # comment\n}\n\nresource \"null_resource\" \"a\" {\n  triggers = {\n    x = \"${var.name}\"\n  }\n}\n",
        );
    }

    #[test]
    fn test_round_trip_preserves_odd_spacing() {
        round_trip("  a   =     1\n\n\n\tb=2\n");
    }

    #[test]
    fn test_round_trip_recovered_errors() {
        // Even input that produced diagnostics serializes losslessly.
        let source = "a = <<EOF\nhello\nEOF\n";
        let (body, diagnostics) = parse(source);
        assert!(!diagnostics.is_empty());
        assert_eq!(serialize(&body), source);
    }
}
