//! Depth-first traversal dispatching the cleanup passes
//!
//! The walker visits every attribute in a parsed body, tracking the chain
//! of enclosing block types, and routes each expression to the right
//! rewrite: `type` attributes directly inside a `variable` block get the
//! type-constraint rewrite, everything else the value rewrite. The chain is
//! a fresh vector per recursive call, so sibling blocks never observe each
//! other's context.

use crate::clean::types::simplify_type;
use crate::clean::value::simplify_value;
use crate::hcl::parser::{Body, Item};

/// Entry point: rewrite every eligible attribute expression in a parsed
/// document, in place. Called once per successfully parsed document.
pub fn clean_document(body: &mut Body) {
    clean_body(body, &[]);
}

/// Rewrite the attributes of one body, then recurse into its blocks.
///
/// `in_blocks` is the chain of enclosing block types from the document
/// root, outermost first; it is empty at the top level.
pub fn clean_body(body: &mut Body, in_blocks: &[String]) {
    for item in body.items_mut() {
        match item {
            Item::Attribute(attr) => {
                let is_type_constraint = in_blocks.len() == 1
                    && in_blocks[0] == "variable"
                    && attr.name() == "type";
                let cleaned = if is_type_constraint {
                    simplify_type(attr.expr_tokens())
                } else {
                    simplify_value(attr.expr_tokens())
                };
                attr.set_expr_tokens(cleaned);
            }
            Item::Block(block) => {
                let mut child_blocks = in_blocks.to_vec();
                child_blocks.push(block.type_name().to_string());
                clean_body(block.body_mut(), &child_blocks);
            }
            Item::Raw(_) => {}
        }
    }
}
