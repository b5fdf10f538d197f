//! Tooling over the lexkind token kind registry.
//!
//! The registry and the `TokenKind` value type live in `lexkind_core`; this crate adds the `lexkind` command-line
//! tool for inspecting the taxonomy and regenerating its Markdown reference.

pub mod cli;

pub use lexkind_core::{KindCategory, TokenKind};
