//! The `TokenKind` value type.
//!
//! A `TokenKind` is a one-byte tag naming exactly one entry of [`crate::registry::TOKEN_KINDS`]. It carries no other
//! state; every query below is a constant-time load from the process-wide [`crate::registry::Registry`].
//!
//! ## Notes
//! - Variants are the only way to name a kind directly; there is no `Default`.
//! - [`TokenKind::tag`] exists for dispatch tables and `match`-style keys. Kinds have no arithmetic.

use std::fmt;

use crate::registry::{self, KindCategory};

/// Declare the kind enum together with [`TokenKind::ALL`], so the enumeration cannot miss a variant.
macro_rules! declare_token_kinds {
    ($(#[$attr:meta])* pub enum $name:ident { $($variant:ident,)+ }) => {
        $(#[$attr])*
        pub enum $name {
            $($variant,)+
        }

        impl $name {
            /// Every declared kind, in tag order.
            pub const ALL: &'static [$name] = &[$($name::$variant,)+];
        }
    };
}

declare_token_kinds! {
/// Stable identifier for every token kind.
///
/// ## Notes
/// - Declaration order is tag order and must match [`crate::registry::TOKEN_KINDS`] row for row.
/// - A variant without a table row makes the process-wide registry fail its completeness check.
///
/// ## Examples
/// ```rust
/// use lexkind_core::TokenKind;
///
/// assert!(TokenKind::If.is_keyword());
/// assert!(!TokenKind::If.is_symbol());
/// assert_eq!(TokenKind::CloseParen.opening_symbol(), TokenKind::OpenParen);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum TokenKind {
    // Free-form / synthetic
    Error,
    EndOfFile,
    Identifier,
    IntegerLiteral,
    RealLiteral,
    StringLiteral,

    // Grouping symbols
    OpenParen,
    CloseParen,
    OpenCurlyBrace,
    CloseCurlyBrace,
    OpenSquareBracket,
    CloseSquareBracket,

    // Symbols
    Amp,
    AmpAmp,
    Caret,
    Colon,
    ColonColon,
    Comma,
    Equal,
    EqualEqual,
    EqualGreater,
    Exclaim,
    ExclaimEqual,
    Greater,
    GreaterEqual,
    GreaterGreater,
    Less,
    LessEqual,
    LessLess,
    Minus,
    MinusEqual,
    MinusGreater,
    MinusMinus,
    Percent,
    Period,
    Pipe,
    PipePipe,
    Plus,
    PlusEqual,
    PlusPlus,
    Question,
    Semi,
    Slash,
    SlashEqual,
    Star,
    StarEqual,
    Tilde,

    // Keywords
    And,
    Break,
    Case,
    Continue,
    Default,
    Else,
    False,
    Fn,
    If,
    Match,
    Not,
    Or,
    Package,
    Return,
    True,
    Var,
    While,
}
}

impl TokenKind {
    /// Number of declared token kinds.
    pub const COUNT: usize = TokenKind::ALL.len();

    /// Underlying tag, stable for the lifetime of the program.
    ///
    /// Distinct kinds always have distinct tags, so this is usable as a dispatch key.
    #[inline]
    pub const fn tag(self) -> u8 {
        self as u8
    }

    #[inline]
    pub(crate) const fn index(self) -> usize {
        self as usize
    }

    /// Recover a kind from its tag.
    ///
    /// ## Returns
    /// - `Some(kind)` with `kind.tag() == tag` for every tag inside the registry.
    /// - `None` otherwise; a tag can never produce a kind outside the closed set.
    pub fn from_tag(tag: u8) -> Option<TokenKind> {
        registry::registry().kinds().get(usize::from(tag)).copied()
    }

    /// Every kind, exactly once, in declaration order.
    pub fn all() -> impl ExactSizeIterator<Item = TokenKind> {
        registry::registry().kinds().iter().copied()
    }

    /// Resolve a kind by its registry name (case-sensitive).
    pub fn from_name(name: &str) -> Option<TokenKind> {
        registry::registry().lookup_name(name)
    }

    /// Resolve a kind by its exact fixed spelling, e.g. `"=="` or `"while"`.
    ///
    /// ## Notes
    /// - Free-form kinds have no fixed spelling and are never returned.
    pub fn from_fixed_spelling(spelling: &str) -> Option<TokenKind> {
        registry::registry().lookup_spelling(spelling)
    }

    /// Friendly name for logging and debugging. Never empty.
    pub fn name(self) -> &'static str {
        registry::registry().name(self)
    }

    pub fn category(self) -> KindCategory {
        registry::registry().category(self)
    }

    /// Test whether this kind is a simple punctuation sequence that appears directly in source text and can be lexed
    /// unambiguously with `starts_with` logic, without looking at the characters around it.
    pub fn is_symbol(self) -> bool {
        self.category() == KindCategory::Symbol
    }

    pub fn is_keyword(self) -> bool {
        self.category() == KindCategory::Keyword
    }

    /// Test whether this kind is one half of an opening/closing pair that must balance in the token stream.
    pub fn is_grouping_symbol(self) -> bool {
        self.grouping_partner().is_some()
    }

    pub fn is_opening_symbol(self) -> bool {
        registry::registry().closing_partner(self).is_some()
    }

    pub fn is_closing_symbol(self) -> bool {
        registry::registry().opening_partner(self).is_some()
    }

    /// Return the closing symbol paired with this opening symbol.
    ///
    /// ## Panics
    /// - If `self` is not an opening symbol. This is a caller logic error; check
    ///   [`TokenKind::is_opening_symbol`] first.
    pub fn closing_symbol(self) -> TokenKind {
        match registry::registry().closing_partner(self) {
            Some(closing) => closing,
            None => panic!("`{}` is not an opening grouping symbol", self.name()),
        }
    }

    /// Return the opening symbol paired with this closing symbol.
    ///
    /// ## Panics
    /// - If `self` is not a closing symbol. This is a caller logic error; check
    ///   [`TokenKind::is_closing_symbol`] first.
    pub fn opening_symbol(self) -> TokenKind {
        match registry::registry().opening_partner(self) {
            Some(opening) => opening,
            None => panic!("`{}` is not a closing grouping symbol", self.name()),
        }
    }

    /// The other half of this kind's grouping pair, in either direction.
    pub fn grouping_partner(self) -> Option<TokenKind> {
        let reg = registry::registry();
        reg.closing_partner(self).or_else(|| reg.opening_partner(self))
    }

    /// The literal text this kind always has in source, or `""` if its text varies per occurrence.
    pub fn fixed_spelling(self) -> &'static str {
        registry::registry().fixed_spelling(self)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl From<TokenKind> for u8 {
    fn from(kind: TokenKind) -> u8 {
        kind.tag()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paren_pair() {
        assert_eq!(TokenKind::OpenParen.closing_symbol(), TokenKind::CloseParen);
        assert_eq!(TokenKind::CloseParen.opening_symbol(), TokenKind::OpenParen);
        assert!(TokenKind::OpenParen.is_grouping_symbol());
        assert!(TokenKind::CloseParen.is_grouping_symbol());
        assert_eq!(TokenKind::OpenParen.fixed_spelling(), "(");
        assert_eq!(TokenKind::CloseParen.fixed_spelling(), ")");
    }

    #[test]
    fn test_identifier_is_free_form() {
        assert!(!TokenKind::Identifier.is_grouping_symbol());
        assert!(!TokenKind::Identifier.is_symbol());
        assert!(!TokenKind::Identifier.is_keyword());
        assert_eq!(TokenKind::Identifier.fixed_spelling(), "");
        assert_eq!(TokenKind::Identifier.grouping_partner(), None);
    }

    #[test]
    fn test_if_is_keyword() {
        assert_eq!(TokenKind::If.category(), KindCategory::Keyword);
        assert!(TokenKind::If.is_keyword());
        assert!(!TokenKind::If.is_symbol());
        assert_eq!(TokenKind::If.fixed_spelling(), "if");
    }

    #[test]
    fn test_grouping_symbols_are_symbols() {
        for kind in [TokenKind::OpenCurlyBrace, TokenKind::CloseSquareBracket] {
            assert!(kind.is_symbol(), "{kind} should be a symbol");
        }
    }

    #[test]
    fn test_grouping_partner_both_directions() {
        assert_eq!(
            TokenKind::OpenSquareBracket.grouping_partner(),
            Some(TokenKind::CloseSquareBracket)
        );
        assert_eq!(
            TokenKind::CloseCurlyBrace.grouping_partner(),
            Some(TokenKind::OpenCurlyBrace)
        );
    }

    #[test]
    #[should_panic(expected = "`Identifier` is not an opening grouping symbol")]
    fn test_closing_symbol_of_identifier_panics() {
        let _ = TokenKind::Identifier.closing_symbol();
    }

    #[test]
    #[should_panic(expected = "`CloseParen` is not an opening grouping symbol")]
    fn test_closing_symbol_of_closing_kind_panics() {
        let _ = TokenKind::CloseParen.closing_symbol();
    }

    #[test]
    #[should_panic(expected = "`OpenParen` is not a closing grouping symbol")]
    fn test_opening_symbol_of_opening_kind_panics() {
        let _ = TokenKind::OpenParen.opening_symbol();
    }

    #[test]
    fn test_tag_round_trip_and_bounds() {
        assert_eq!(TokenKind::Error.tag(), 0);
        assert_eq!(TokenKind::from_tag(TokenKind::While.tag()), Some(TokenKind::While));
        assert_eq!(TokenKind::from_tag(TokenKind::COUNT as u8), None);
        assert_eq!(u8::from(TokenKind::OpenParen), TokenKind::OpenParen.tag());
    }

    #[test]
    fn test_lookup_by_name_and_spelling() {
        assert_eq!(TokenKind::from_name("MinusGreater"), Some(TokenKind::MinusGreater));
        assert_eq!(TokenKind::from_name("minusgreater"), None);
        assert_eq!(TokenKind::from_fixed_spelling("->"), Some(TokenKind::MinusGreater));
        assert_eq!(TokenKind::from_fixed_spelling("while"), Some(TokenKind::While));
        assert_eq!(TokenKind::from_fixed_spelling(""), None);
        assert_eq!(TokenKind::from_fixed_spelling("While"), None);
    }

    #[test]
    fn test_display_uses_name() {
        assert_eq!(TokenKind::EqualGreater.to_string(), "EqualGreater");
        assert_eq!(format!("{}", TokenKind::EndOfFile), "EndOfFile");
    }
}
