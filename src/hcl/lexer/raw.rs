//! Raw logos token definitions for the two lexing modes
//!
//! HCL quoted templates embed expressions (`"${var.foo}"`), so a single
//! token grammar cannot classify `"` and `}` correctly: their meaning
//! depends on whether the lexer is inside a template. This module defines
//! one logos enum per mode; the driver in [super] morphs between them and
//! keeps the delimiter stack that decides which mode applies.

use logos::Logos;

/// Tokens produced outside of quoted templates (normal HCL syntax,
/// including the expression inside a `${ ... }` interpolation).
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyntaxToken {
    #[token("\n")]
    Newline,

    #[regex(r"[ \t\r]+")]
    Whitespace,

    #[regex(r"#[^\n]*")]
    #[regex(r"//[^\n]*")]
    #[regex(r"/\*[^*]*\*+([^/*][^*]*\*+)*/")]
    Comment,

    #[regex(r"[a-zA-Z_][a-zA-Z0-9_-]*")]
    Ident,

    #[regex(r"[0-9]+(\.[0-9]+)?([eE][+-]?[0-9]+)?")]
    Number,

    #[token("\"")]
    OQuote,

    #[token("{")]
    OBrace,

    #[token("}")]
    CBrace,

    // Strip-marker form of an interpolation closer, `${~ ... ~}`. Only
    // meaningful when an interpolation is open; the driver downgrades it
    // otherwise.
    #[token("~}")]
    TildeCBrace,

    #[token("(")]
    OParen,

    #[token(")")]
    CParen,

    #[token("[")]
    OBrack,

    #[token("]")]
    CBrack,

    #[token("=")]
    Equals,

    #[token(",")]
    Comma,

    // Heredoc introducers get their own token so the parser can reject them
    // with a useful diagnostic instead of misreading the heredoc body.
    #[regex(r"<<-?")]
    HeredocIntro,

    // Catch-all for operators and any other punctuation. Preserved
    // verbatim; never participates in a rewrite match.
    #[regex(r".", priority = 0)]
    Other,
}

/// Tokens produced inside a quoted template, between the opening and
/// closing `"`.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateToken {
    #[token("\"")]
    CQuote,

    #[regex(r"\$\{~?", priority = 6)]
    TemplateInterp,

    #[regex(r"%\{~?", priority = 6)]
    TemplateControl,

    // Literal text. `\\.` keeps escape sequences (including `\"`) inside a
    // single chunk. `$` and `%` are excluded so a chunk can never swallow
    // an interpolation opener.
    #[regex(r#"([^"\\$%\n]|\\.)+"#, priority = 1)]
    LitChunk,

    // The escaped openers spell a literal `${` / `%{`. They need their own
    // tokens: a lone leading `$` would otherwise leave `${` behind for the
    // interp pattern to claim.
    #[token("$${")]
    EscapedInterp,

    #[token("%%{")]
    EscapedControl,

    // A `$` or `%` not starting an interpolation (escaped or not) is plain
    // text.
    #[token("$")]
    Dollar,

    #[token("%")]
    Percent,

    // A raw newline inside a quoted template is not valid HCL, but the
    // lexer stays lossless and leaves rejection to the parser.
    #[token("\n")]
    Newline,
}

#[cfg(test)]
mod tests {
    use super::*;
    use logos::Logos;

    fn syntax_tokens(source: &str) -> Vec<SyntaxToken> {
        SyntaxToken::lexer(source).map(|t| t.unwrap()).collect()
    }

    #[test]
    fn test_syntax_basics() {
        assert_eq!(
            syntax_tokens("type = string\n"),
            vec![
                SyntaxToken::Ident,
                SyntaxToken::Whitespace,
                SyntaxToken::Equals,
                SyntaxToken::Whitespace,
                SyntaxToken::Ident,
                SyntaxToken::Newline,
            ]
        );
    }

    #[test]
    fn test_syntax_comments() {
        assert_eq!(syntax_tokens("# hash"), vec![SyntaxToken::Comment]);
        assert_eq!(syntax_tokens("// slash"), vec![SyntaxToken::Comment]);
        assert_eq!(syntax_tokens("/* a */"), vec![SyntaxToken::Comment]);
        assert_eq!(syntax_tokens("/* a **/"), vec![SyntaxToken::Comment]);
        assert_eq!(syntax_tokens("/**/"), vec![SyntaxToken::Comment]);
        assert_eq!(syntax_tokens("/* multi\nline */"), vec![SyntaxToken::Comment]);
    }

    #[test]
    fn test_syntax_heredoc_intro() {
        assert_eq!(
            syntax_tokens("<<EOF"),
            vec![SyntaxToken::HeredocIntro, SyntaxToken::Ident]
        );
        assert_eq!(
            syntax_tokens("<<-EOF"),
            vec![SyntaxToken::HeredocIntro, SyntaxToken::Ident]
        );
    }

    #[test]
    fn test_syntax_other_catch_all() {
        assert_eq!(
            syntax_tokens("a.b"),
            vec![SyntaxToken::Ident, SyntaxToken::Other, SyntaxToken::Ident]
        );
    }

    #[test]
    fn test_template_single_literal_chunk() {
        let mut lexer = TemplateToken::lexer("hello world\"");
        assert_eq!(lexer.next(), Some(Ok(TemplateToken::LitChunk)));
        assert_eq!(lexer.slice(), "hello world");
        assert_eq!(lexer.next(), Some(Ok(TemplateToken::CQuote)));
        assert_eq!(lexer.next(), None);
    }

    #[test]
    fn test_template_interp_opener() {
        let mut lexer = TemplateToken::lexer("${var.foo}");
        assert_eq!(lexer.next(), Some(Ok(TemplateToken::TemplateInterp)));
        assert_eq!(lexer.slice(), "${");
    }

    #[test]
    fn test_template_strip_marker_opener() {
        let mut lexer = TemplateToken::lexer("${~ x");
        assert_eq!(lexer.next(), Some(Ok(TemplateToken::TemplateInterp)));
        assert_eq!(lexer.slice(), "${~");
    }

    #[test]
    fn test_template_escaped_dollar_is_literal() {
        let mut lexer = TemplateToken::lexer("$${not_interp}");
        assert_eq!(lexer.next(), Some(Ok(TemplateToken::EscapedInterp)));
        assert_eq!(lexer.slice(), "$${");
        assert_eq!(lexer.next(), Some(Ok(TemplateToken::LitChunk)));
        assert_eq!(lexer.slice(), "not_interp}");
        assert_eq!(lexer.next(), None);
    }

    #[test]
    fn test_template_escaped_percent_is_literal() {
        let mut lexer = TemplateToken::lexer("%%{nope}");
        assert_eq!(lexer.next(), Some(Ok(TemplateToken::EscapedControl)));
        assert_eq!(lexer.slice(), "%%{");
        assert_eq!(lexer.next(), Some(Ok(TemplateToken::LitChunk)));
        assert_eq!(lexer.slice(), "nope}");
        assert_eq!(lexer.next(), None);
    }

    #[test]
    fn test_template_lone_dollars_are_literal() {
        let mut lexer = TemplateToken::lexer("$$ $x");
        assert_eq!(lexer.next(), Some(Ok(TemplateToken::Dollar)));
        assert_eq!(lexer.next(), Some(Ok(TemplateToken::Dollar)));
        assert_eq!(lexer.next(), Some(Ok(TemplateToken::LitChunk)));
        assert_eq!(lexer.next(), Some(Ok(TemplateToken::Dollar)));
        assert_eq!(lexer.next(), Some(Ok(TemplateToken::LitChunk)));
        assert_eq!(lexer.next(), None);
    }

    #[test]
    fn test_template_escaped_quote_stays_in_chunk() {
        let mut lexer = TemplateToken::lexer(r#"say \"hi\""#);
        assert_eq!(lexer.next(), Some(Ok(TemplateToken::LitChunk)));
        assert_eq!(lexer.slice(), r#"say \"hi\""#);
        assert_eq!(lexer.next(), None);
    }
}
