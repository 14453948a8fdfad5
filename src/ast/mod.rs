//! Abstract syntax tree.
//!
//! A single closed [`Node`] enum carries every production the grammar
//! recognises. See [`node`] for the enum itself and [`style`] for the
//! formatting-template machinery each non-atomic variant uses.

pub mod node;
pub mod style;

pub use node::{Bond, Node};
pub use style::Style;
