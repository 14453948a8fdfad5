//! Formatter
//!
//! Two rendering modes over the same [`crate::ast::Node`] tree (spec.md
//! §4.7): CSP mode reproduces canonical CSP source text, structural mode
//! produces a mechanical Lisp-style dump of the tree shape itself. Both
//! share the same bottom-up traversal: format every child first, then
//! join the formatted children with the variant's own style.

mod csp;
mod structural;

pub use csp::format_csp;
pub use structural::{format_structural, format_structural_with_width, STRUCTURAL_WRAP_WIDTH};
