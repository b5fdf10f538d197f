//! Registry validation faults.
//!
//! These are authoring defects in the token kind table. [`crate::registry::Registry::build`] reports them as values
//! so they can be tested; the process-wide registry turns any of them into a startup panic.

use thiserror::Error;

/// A violation of the registry's structural invariants.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("entry #{position} declares kind tag {tag}; entries must be listed in tag order")]
    OutOfOrder { position: usize, tag: u8 },

    #[error("entry #{position} has an empty name")]
    EmptyName { position: usize },

    #[error("duplicate token kind name `{name}`")]
    DuplicateName { name: &'static str },

    #[error("`{name}` is a symbol or keyword but has no fixed spelling")]
    MissingSpelling { name: &'static str },

    #[error("`{name}` is a grouping symbol but has no fixed spelling")]
    GroupingWithoutSpelling { name: &'static str },

    #[error("`{name}` is a free-form kind but declares the fixed spelling {spelling:?}")]
    UnexpectedSpelling { name: &'static str, spelling: &'static str },

    #[error("fixed spelling {spelling:?} is shared by `{first}` and `{second}`")]
    DuplicateSpelling {
        spelling: &'static str,
        first: &'static str,
        second: &'static str,
    },

    #[error("`{name}` names an unknown grouping partner `{partner}`")]
    UnknownPartner { name: &'static str, partner: &'static str },

    #[error("`{name}` pairs with `{partner}`, which does not pair back with it")]
    AsymmetricPartner { name: &'static str, partner: &'static str },

    #[error("registry covers {found} token kinds but {expected} are declared")]
    Incomplete { expected: usize, found: usize },
}
