//! Lossless HCL tokenization, structural parsing, and printing
//!
//! This layer gives the cleanup passes what they need and nothing more: a
//! token stream that classifies quotes, template delimiters, identifiers,
//! and parens; a structural body exposing attribute expressions and nested
//! blocks; and a printer whose output is byte-identical for everything the
//! cleanup passes left alone.

pub mod lexer;
pub mod parser;
pub mod printer;
pub mod token;

pub use lexer::tokenize;
pub use parser::{parse, Attribute, Block, Body, Diagnostic, Item};
pub use printer::serialize;
pub use token::{Token, TokenKind};
