//! The closed set of pseudo-class names this crate evaluates natively.

use strum_macros::{Display, EnumIter, EnumString, IntoStaticStr};

/// [§ 14 Tree-Structural pseudo-classes](https://www.w3.org/TR/selectors-4/#structural-pseudos)
///
/// Built-in pseudo-class names. Parsing is ASCII case-insensitive and
/// rendering is the lowercase kebab-case form (`NthLastOfType` is
/// `nth-last-of-type`). Any other name goes to the provider registry.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, IntoStaticStr, EnumIter,
)]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
pub enum PseudoClassName {
    /// `:nth-child(An+B)`
    NthChild,
    /// `:nth-last-child(An+B)`
    NthLastChild,
    /// `:nth-of-type(An+B)`
    NthOfType,
    /// `:nth-last-of-type(An+B)`
    NthLastOfType,
    /// `:first-child`, same as `:nth-child(1)`
    FirstChild,
    /// `:last-child`, same as `:nth-last-child(1)`
    LastChild,
    /// `:first-of-type`, same as `:nth-of-type(1)`
    FirstOfType,
    /// `:last-of-type`, same as `:nth-last-of-type(1)`
    LastOfType,
    /// `:only-child`
    OnlyChild,
    /// `:only-of-type`
    OnlyOfType,
    /// `:empty`
    Empty,
}

impl PseudoClassName {
    /// The canonical lowercase spelling.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        self.into()
    }

    /// Whether this name is evaluated by position (the eight nth-family names).
    #[must_use]
    pub const fn is_positional(self) -> bool {
        !self.is_counting()
    }

    /// Whether this name is evaluated by counting siblings or children.
    #[must_use]
    pub const fn is_counting(self) -> bool {
        matches!(self, Self::OnlyChild | Self::OnlyOfType | Self::Empty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_names_round_trip_through_text() {
        for name in PseudoClassName::iter() {
            assert_eq!(name.as_str().parse::<PseudoClassName>(), Ok(name));
            assert_eq!(name.to_string(), name.as_str());
        }
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!(
            "NTH-Last-Of-Type".parse::<PseudoClassName>(),
            Ok(PseudoClassName::NthLastOfType)
        );
        assert!("hover".parse::<PseudoClassName>().is_err());
    }

    #[test]
    fn test_family_split() {
        assert_eq!(PseudoClassName::iter().filter(|n| n.is_positional()).count(), 8);
        assert_eq!(PseudoClassName::iter().filter(|n| n.is_counting()).count(), 3);
    }
}
