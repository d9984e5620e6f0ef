//! # tfclean
//!
//! Conservative syntax cleanup for Terraform configuration files.
//!
//! tfclean rewrites two Terraform-0.11-era patterns into their modern
//! spellings while preserving every other byte of a file, comments and
//! formatting included:
//!
//! * interpolation-only string values: `x = "${var.foo}"` becomes
//!   `x = var.foo`, but only when the string is provably a single
//!   interpolation and nothing else;
//! * legacy quoted type constraints directly inside `variable` blocks:
//!   `type = "string"` / `"list"` / `"map"` become `string` /
//!   `list(string)` / `map(string)`.
//!
//! The rewrites are deliberately incomplete: anything structurally
//! ambiguous is left exactly as written, and a file that fails to parse is
//! never modified. See the [clean] module for the rewrite rules and [hcl]
//! for the lossless token model they operate on.

pub mod clean;
pub mod hcl;
pub mod run;
