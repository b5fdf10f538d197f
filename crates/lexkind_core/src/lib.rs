//! Provide the closed token kind taxonomy shared by the lexer, the parser, and diagnostics.
//!
//! Every token kind is declared exactly once in [`registry::TOKEN_KINDS`]. All per-kind metadata (name, fixed
//! spelling, category, grouping partner) is derived from that table into dense, tag-indexed lookup tables, so a new
//! keyword or bracket pair participates in every query without per-query edits.
//!
//! ## Notes
//!
//! - This is a “vocabulary core” crate: **no IO**, no text scanning, no token stream.
//! - The derived tables live in a single process-wide, read-only [`registry::Registry`] that is built on first use and
//!   shared freely across threads.
//! - Registry faults (duplicate names, unmatched grouping pairs, missing spellings) abort initialization; they are
//!   authoring defects, not runtime conditions.
//!
//! ## Examples
//! ```rust
//! use lexkind_core::TokenKind;
//!
//! assert!(TokenKind::OpenParen.is_opening_symbol());
//! assert_eq!(TokenKind::OpenParen.closing_symbol(), TokenKind::CloseParen);
//! assert_eq!(TokenKind::If.fixed_spelling(), "if");
//! assert_eq!(TokenKind::Identifier.fixed_spelling(), "");
//! ```

pub mod errors;
pub mod registry;
pub mod token_kind;

pub use errors::RegistryError;
pub use registry::{Grouping, KindCategory, Registry, TokenEntry, registry};
pub use token_kind::TokenKind;
