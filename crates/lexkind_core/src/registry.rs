//! The token kind registry: one declarative table, and the lookup tables derived from it.
//!
//! [`TOKEN_KINDS`] is the single source of truth. Each entry states a kind's name, its fixed spelling (if any), its
//! category, and, for grouping symbols, the name of the other half of the pair. [`Registry::build`] validates the
//! table and derives dense per-tag tables so every [`TokenKind`] query is one indexed load.
//!
//! ## Notes
//! - Entries must be listed in [`TokenKind`] declaration order; the entry at position `n` describes the kind whose
//!   tag is `n`.
//! - Free-form kinds (identifiers, literals, end-of-file, error) have no fixed spelling.
//! - Whether a keyword spelling could also lex as an identifier is decided by the author of this table, not by code.
//!
//! ## Examples
//! ```rust
//! use lexkind_core::registry::{self, KindCategory};
//! use lexkind_core::TokenKind;
//!
//! let reg = registry::registry();
//! assert_eq!(reg.len(), TokenKind::COUNT);
//! assert_eq!(reg.category(TokenKind::Fn), KindCategory::Keyword);
//! assert_eq!(reg.lookup_spelling("=>"), Some(TokenKind::EqualGreater));
//! ```

use std::collections::HashMap;
use std::sync::LazyLock;

use crate::errors::RegistryError;
use crate::token_kind::TokenKind;

/// Broad lexical category of a token kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KindCategory {
    /// Text varies per occurrence (identifiers, literals) or the kind is synthetic (end-of-file, error).
    Plain,
    /// Punctuation that can be lexed by direct prefix matching, independent of surrounding context.
    Symbol,
    /// Reserved word.
    Keyword,
}

/// Grouping role of an entry as declared in the table, naming its partner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Grouping {
    None,
    Opening { closing: &'static str },
    Closing { opening: &'static str },
}

/// One declarative registry row.
#[derive(Debug, Clone, Copy)]
pub struct TokenEntry {
    pub kind: TokenKind,
    pub name: &'static str,
    pub spelling: Option<&'static str>,
    pub category: KindCategory,
    pub grouping: Grouping,
}

/// Registry of all token kinds, in tag order.
pub const TOKEN_KINDS: &[TokenEntry] = &[
    // Free-form / synthetic
    plain(TokenKind::Error, "Error"),
    plain(TokenKind::EndOfFile, "EndOfFile"),
    plain(TokenKind::Identifier, "Identifier"),
    plain(TokenKind::IntegerLiteral, "IntegerLiteral"),
    plain(TokenKind::RealLiteral, "RealLiteral"),
    plain(TokenKind::StringLiteral, "StringLiteral"),
    // Grouping symbols
    opening(TokenKind::OpenParen, "OpenParen", "(", "CloseParen"),
    closing(TokenKind::CloseParen, "CloseParen", ")", "OpenParen"),
    opening(TokenKind::OpenCurlyBrace, "OpenCurlyBrace", "{", "CloseCurlyBrace"),
    closing(TokenKind::CloseCurlyBrace, "CloseCurlyBrace", "}", "OpenCurlyBrace"),
    opening(TokenKind::OpenSquareBracket, "OpenSquareBracket", "[", "CloseSquareBracket"),
    closing(TokenKind::CloseSquareBracket, "CloseSquareBracket", "]", "OpenSquareBracket"),
    // Symbols
    symbol(TokenKind::Amp, "Amp", "&"),
    symbol(TokenKind::AmpAmp, "AmpAmp", "&&"),
    symbol(TokenKind::Caret, "Caret", "^"),
    symbol(TokenKind::Colon, "Colon", ":"),
    symbol(TokenKind::ColonColon, "ColonColon", "::"),
    symbol(TokenKind::Comma, "Comma", ","),
    symbol(TokenKind::Equal, "Equal", "="),
    symbol(TokenKind::EqualEqual, "EqualEqual", "=="),
    symbol(TokenKind::EqualGreater, "EqualGreater", "=>"),
    symbol(TokenKind::Exclaim, "Exclaim", "!"),
    symbol(TokenKind::ExclaimEqual, "ExclaimEqual", "!="),
    symbol(TokenKind::Greater, "Greater", ">"),
    symbol(TokenKind::GreaterEqual, "GreaterEqual", ">="),
    symbol(TokenKind::GreaterGreater, "GreaterGreater", ">>"),
    symbol(TokenKind::Less, "Less", "<"),
    symbol(TokenKind::LessEqual, "LessEqual", "<="),
    symbol(TokenKind::LessLess, "LessLess", "<<"),
    symbol(TokenKind::Minus, "Minus", "-"),
    symbol(TokenKind::MinusEqual, "MinusEqual", "-="),
    symbol(TokenKind::MinusGreater, "MinusGreater", "->"),
    symbol(TokenKind::MinusMinus, "MinusMinus", "--"),
    symbol(TokenKind::Percent, "Percent", "%"),
    symbol(TokenKind::Period, "Period", "."),
    symbol(TokenKind::Pipe, "Pipe", "|"),
    symbol(TokenKind::PipePipe, "PipePipe", "||"),
    symbol(TokenKind::Plus, "Plus", "+"),
    symbol(TokenKind::PlusEqual, "PlusEqual", "+="),
    symbol(TokenKind::PlusPlus, "PlusPlus", "++"),
    symbol(TokenKind::Question, "Question", "?"),
    symbol(TokenKind::Semi, "Semi", ";"),
    symbol(TokenKind::Slash, "Slash", "/"),
    symbol(TokenKind::SlashEqual, "SlashEqual", "/="),
    symbol(TokenKind::Star, "Star", "*"),
    symbol(TokenKind::StarEqual, "StarEqual", "*="),
    symbol(TokenKind::Tilde, "Tilde", "~"),
    // Keywords
    keyword(TokenKind::And, "And", "and"),
    keyword(TokenKind::Break, "Break", "break"),
    keyword(TokenKind::Case, "Case", "case"),
    keyword(TokenKind::Continue, "Continue", "continue"),
    keyword(TokenKind::Default, "Default", "default"),
    keyword(TokenKind::Else, "Else", "else"),
    keyword(TokenKind::False, "False", "false"),
    keyword(TokenKind::Fn, "Fn", "fn"),
    keyword(TokenKind::If, "If", "if"),
    keyword(TokenKind::Match, "Match", "match"),
    keyword(TokenKind::Not, "Not", "not"),
    keyword(TokenKind::Or, "Or", "or"),
    keyword(TokenKind::Package, "Package", "package"),
    keyword(TokenKind::Return, "Return", "return"),
    keyword(TokenKind::True, "True", "true"),
    keyword(TokenKind::Var, "Var", "var"),
    keyword(TokenKind::While, "While", "while"),
];

/// Resolved grouping partner of a kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Pairing {
    Unpaired,
    Opens(TokenKind),
    Closes(TokenKind),
}

/// Dense lookup tables derived from a validated entry list.
///
/// Every per-kind table is indexed by [`TokenKind::tag`]. Once built, a registry is never mutated.
#[derive(Debug)]
pub struct Registry {
    kinds: Vec<TokenKind>,
    names: Vec<&'static str>,
    spellings: Vec<&'static str>,
    categories: Vec<KindCategory>,
    pairings: Vec<Pairing>,
    by_name: HashMap<&'static str, TokenKind>,
    by_spelling: HashMap<&'static str, TokenKind>,
}

static REGISTRY: LazyLock<Registry> = LazyLock::new(|| {
    Registry::build(TOKEN_KINDS)
        .and_then(Registry::ensure_complete)
        .unwrap_or_else(|err| panic!("token kind registry is invalid: {err}"))
});

/// Return the process-wide registry derived from [`TOKEN_KINDS`].
///
/// ## Panics
/// - On first use, if [`TOKEN_KINDS`] violates any registry invariant. The process must never run with an
///   inconsistent taxonomy.
pub fn registry() -> &'static Registry {
    &REGISTRY
}

impl Registry {
    /// Validate `entries` and derive the per-tag lookup tables.
    ///
    /// ## Errors
    /// - [`RegistryError::OutOfOrder`] if entry `n` does not describe the kind with tag `n`.
    /// - [`RegistryError::EmptyName`] / [`RegistryError::DuplicateName`] for bad names.
    /// - [`RegistryError::MissingSpelling`], [`RegistryError::GroupingWithoutSpelling`],
    ///   [`RegistryError::UnexpectedSpelling`], [`RegistryError::DuplicateSpelling`] for spelling faults.
    /// - [`RegistryError::UnknownPartner`] / [`RegistryError::AsymmetricPartner`] if grouping partners do not form a
    ///   bijection between opening and closing kinds.
    #[tracing::instrument(skip_all, fields(entry_count = entries.len()))]
    pub fn build(entries: &[TokenEntry]) -> Result<Registry, RegistryError> {
        let mut by_name: HashMap<&'static str, TokenKind> = HashMap::with_capacity(entries.len());
        let mut by_spelling: HashMap<&'static str, TokenKind> = HashMap::with_capacity(entries.len());

        for (position, entry) in entries.iter().enumerate() {
            if entry.kind.index() != position {
                return Err(RegistryError::OutOfOrder {
                    position,
                    tag: entry.kind.tag(),
                });
            }
            if entry.name.is_empty() {
                return Err(RegistryError::EmptyName { position });
            }
            if by_name.insert(entry.name, entry.kind).is_some() {
                return Err(RegistryError::DuplicateName { name: entry.name });
            }

            let spelling = entry.spelling.filter(|s| !s.is_empty());
            match (entry.grouping, entry.category, spelling) {
                (Grouping::Opening { .. } | Grouping::Closing { .. }, _, None) => {
                    return Err(RegistryError::GroupingWithoutSpelling { name: entry.name });
                }
                (_, KindCategory::Symbol | KindCategory::Keyword, None) => {
                    return Err(RegistryError::MissingSpelling { name: entry.name });
                }
                (Grouping::None, KindCategory::Plain, Some(spelling)) => {
                    return Err(RegistryError::UnexpectedSpelling {
                        name: entry.name,
                        spelling,
                    });
                }
                _ => {}
            }

            if let Some(spelling) = spelling {
                if let Some(first) = by_spelling.get(spelling) {
                    return Err(RegistryError::DuplicateSpelling {
                        spelling,
                        first: entries[first.index()].name,
                        second: entry.name,
                    });
                }
                by_spelling.insert(spelling, entry.kind);
            }
        }

        let resolve = |entry: &TokenEntry, partner: &'static str| {
            by_name.get(partner).copied().ok_or(RegistryError::UnknownPartner {
                name: entry.name,
                partner,
            })
        };
        let pairings = entries
            .iter()
            .map(|entry| -> Result<Pairing, RegistryError> {
                Ok(match entry.grouping {
                    Grouping::None => Pairing::Unpaired,
                    Grouping::Opening { closing } => Pairing::Opens(resolve(entry, closing)?),
                    Grouping::Closing { opening } => Pairing::Closes(resolve(entry, opening)?),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        // Opening and closing kinds must map onto each other one-to-one.
        for (entry, pairing) in entries.iter().zip(&pairings) {
            let (partner, pairs_back) = match *pairing {
                Pairing::Unpaired => continue,
                Pairing::Opens(closing) => (closing, pairings[closing.index()] == Pairing::Closes(entry.kind)),
                Pairing::Closes(opening) => (opening, pairings[opening.index()] == Pairing::Opens(entry.kind)),
            };
            if !pairs_back {
                return Err(RegistryError::AsymmetricPartner {
                    name: entry.name,
                    partner: entries[partner.index()].name,
                });
            }
        }

        let registry = Registry {
            kinds: entries.iter().map(|e| e.kind).collect(),
            names: entries.iter().map(|e| e.name).collect(),
            spellings: entries.iter().map(|e| e.spelling.unwrap_or("")).collect(),
            categories: entries.iter().map(|e| e.category).collect(),
            pairings,
            by_name,
            by_spelling,
        };
        tracing::debug!(
            kinds = registry.len(),
            grouping_pairs = registry.pair_count(),
            "derived token kind tables"
        );
        Ok(registry)
    }

    /// Require this registry to describe every declared [`TokenKind`].
    ///
    /// ## Errors
    /// - [`RegistryError::Incomplete`] unless the registered kinds are exactly [`TokenKind::ALL`].
    pub fn ensure_complete(self) -> Result<Registry, RegistryError> {
        if self.kinds.as_slice() != TokenKind::ALL {
            return Err(RegistryError::Incomplete {
                expected: TokenKind::COUNT,
                found: self.len(),
            });
        }
        Ok(self)
    }

    /// Number of kinds in the registry.
    pub fn len(&self) -> usize {
        self.kinds.len()
    }

    /// Return `true` if the registry has no entries.
    pub fn is_empty(&self) -> bool {
        self.kinds.is_empty()
    }

    /// Every kind, exactly once, in declaration order.
    pub fn kinds(&self) -> &[TokenKind] {
        &self.kinds
    }

    /// Number of opening/closing pairs.
    pub fn pair_count(&self) -> usize {
        self.pairings.iter().filter(|p| matches!(p, Pairing::Opens(_))).count()
    }

    /// Name of `kind`.
//
    /// ## Panics
    /// - If `kind` is not part of this registry, which only happens for a registry built from a partial table.
    pub fn name(&self, kind: TokenKind) -> &'static str {
        self.names[kind.index()]
    }

    /// Fixed spelling of `kind`, or `""` for free-form kinds.
    ///
    /// ## Panics
    /// - If `kind` is not part of this registry, which only happens for a registry built from a partial table.
    pub fn fixed_spelling(&self, kind: TokenKind) -> &'static str {
        self.spellings[kind.index()]
    }

    /// Category of `kind`.
//
    /// ## Panics
    /// - If `kind` is not part of this registry, which only happens for a registry built from a partial table.
    pub fn category(&self, kind: TokenKind) -> KindCategory {
        self.categories[kind.index()]
    }

    /// Closing partner of `kind`, if `kind` opens a group.
    ///
    /// ## Panics
    /// - If `kind` is not part of this registry, which only happens for a registry built from a partial table.
    pub fn closing_partner(&self, kind: TokenKind) -> Option<TokenKind> {
        match self.pairings[kind.index()] {
            Pairing::Opens(closing) => Some(closing),
            _ => None,
        }
    }

    /// Opening partner of `kind`, if `kind` closes a group.
    ///
    /// ## Panics
    /// - If `kind` is not part of this registry, which only happens for a registry built from a partial table.
    pub fn opening_partner(&self, kind: TokenKind) -> Option<TokenKind> {
        match self.pairings[kind.index()] {
            Pairing::Closes(opening) => Some(opening),
            _ => None,
        }
    }

    /// Resolve a kind by its registry name.
    ///
    /// ## Notes
    /// - Matching is **case-sensitive**.
    pub fn lookup_name(&self, name: &str) -> Option<TokenKind> {
        self.by_name.get(name).copied()
    }

    /// Resolve a kind by its exact fixed spelling.
    ///
    /// ## Notes
    /// - This is an exact match, not a prefix scan; free-form kinds never match.
    pub fn lookup_spelling(&self, spelling: &str) -> Option<TokenKind> {
        self.by_spelling.get(spelling).copied()
    }
}

// --- helpers -----------------------------------------------------------------

const fn plain(kind: TokenKind, name: &'static str) -> TokenEntry {
    TokenEntry {
        kind,
        name,
        spelling: None,
        category: KindCategory::Plain,
        grouping: Grouping::None,
    }
}

const fn symbol(kind: TokenKind, name: &'static str, spelling: &'static str) -> TokenEntry {
    TokenEntry {
        kind,
        name,
        spelling: Some(spelling),
        category: KindCategory::Symbol,
        grouping: Grouping::None,
    }
}

const fn keyword(kind: TokenKind, name: &'static str, spelling: &'static str) -> TokenEntry {
    TokenEntry {
        kind,
        name,
        spelling: Some(spelling),
        category: KindCategory::Keyword,
        grouping: Grouping::None,
    }
}

const fn opening(kind: TokenKind, name: &'static str, spelling: &'static str, closing: &'static str) -> TokenEntry {
    TokenEntry {
        grouping: Grouping::Opening { closing },
        ..symbol(kind, name, spelling)
    }
}

const fn closing(kind: TokenKind, name: &'static str, spelling: &'static str, opening: &'static str) -> TokenEntry {
    TokenEntry {
        grouping: Grouping::Closing { opening },
        ..symbol(kind, name, spelling)
    }
}
