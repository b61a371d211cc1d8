//! [§ 14.3 Child-indexed pseudo-classes](https://www.w3.org/TR/selectors-4/#child-index)
//! and [§ 14.4 Typed child-indexed pseudo-classes](https://www.w3.org/TR/selectors-4/#typed-child-index)
//!
//! The `An+B` formula and the selector that applies it to an element's
//! position among its siblings.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use ordinal_common::node::NodeId;

use crate::element::{ElementTree, position_in, require_element};
use crate::error::{Result, SelectorError};
use crate::grammar::{NthTokens, match_nth};
use crate::name::PseudoClassName;
use crate::selector::ElementMatcher;

/// [§ 6 The An+B microsyntax](https://www.w3.org/TR/css-syntax-3/#anb-microsyntax)
///
/// "The An+B notation defines an integer step (A) and offset (B), and
/// represents the An+Bth elements in a list, for every positive integer or
/// zero value of n, with the first element in the list having index 1."
///
/// `multiplier` is A and `augend` is B. A multiplier of 0 selects the single
/// position B; a negative multiplier counts backwards from B.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NthFormula {
    multiplier: i32,
    augend: i32,
}

impl NthFormula {
    /// The formula behind `:first-child` and friends: exactly position 1.
    pub const FIRST: Self = Self::new(0, 1);

    /// Build a formula from its two coefficients.
    #[must_use]
    pub const fn new(multiplier: i32, augend: i32) -> Self {
        Self { multiplier, augend }
    }

    /// The step, A.
    #[must_use]
    pub const fn multiplier(self) -> i32 {
        self.multiplier
    }

    /// The offset, B.
    #[must_use]
    pub const fn augend(self) -> i32 {
        self.augend
    }

    /// Parse an `An+B` argument.
    ///
    /// The text is trimmed and lowercased first; `odd` and `even` stand for
    /// `2n+1` and `2n`.
    ///
    /// # Errors
    ///
    /// Returns [`SelectorError::Format`] if the text is not a valid `An+B`
    /// expression or a coefficient does not fit in an `i32`.
    pub fn parse(text: &str) -> Result<Self> {
        let normalized = text.trim().to_lowercase();
        let expanded = match normalized.as_str() {
            "odd" => "2n+1",
            "even" => "2n",
            other => other,
        };

        match match_nth(expanded) {
            Some(NthTokens::Integer(digits)) => Ok(Self::new(0, parse_int(text, digits)?)),
            Some(NthTokens::Periodic {
                coefficient,
                augend,
            }) => {
                let multiplier = match coefficient {
                    "" | "+" => 1,
                    "-" => -1,
                    digits => parse_int(text, digits)?,
                };
                let augend = match augend {
                    Some((sign, digits)) => parse_int(text, &format!("{sign}{digits}"))?,
                    None => 0,
                };
                Ok(Self::new(multiplier, augend))
            }
            None => Err(SelectorError::format(text, "expected an An+B expression")),
        }
    }

    /// Whether the element at 0-based `index` is selected.
    ///
    /// The position is made 1-based and offset by B; what remains must be a
    /// non-negative multiple of A in A's direction (or exactly zero when A
    /// is zero).
    #[must_use]
    pub fn matches_position(self, index: usize) -> bool {
        let Ok(index) = i64::try_from(index) else {
            return false;
        };
        let offset = index + 1 - i64::from(self.augend);
        let step = i64::from(self.multiplier);

        match step.cmp(&0) {
            Ordering::Equal => offset == 0,
            Ordering::Greater => offset >= 0 && offset % step == 0,
            Ordering::Less => {
                let backwards = -offset;
                backwards >= 0 && backwards % step.abs() == 0
            }
        }
    }

    /// The 0-based indices selected in a sibling list of length `len`.
    pub fn positions(self, len: usize) -> impl Iterator<Item = usize> {
        (0..len).filter(move |&index| self.matches_position(index))
    }
}

fn parse_int(input: &str, digits: &str) -> Result<i32> {
    digits
        .parse()
        .map_err(|_| SelectorError::format(input, "An+B coefficient out of range"))
}

impl FromStr for NthFormula {
    type Err = SelectorError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

/// Canonical form: `B` when A is zero, otherwise `An+B` / `An-B` with the
/// sign always written (`2n+0`, `-1n+3`).
impl fmt::Display for NthFormula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.multiplier == 0 {
            return write!(f, "{}", self.augend);
        }
        let sign = if self.augend < 0 { '-' } else { '+' };
        write!(
            f,
            "{}n{sign}{}",
            self.multiplier,
            self.augend.unsigned_abs()
        )
    }
}

/// The three switches that distinguish the eight positional pseudo-classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NthFlags {
    /// Takes an `An+B` argument (`nth-*`) rather than being fixed to position 1.
    pub nth: bool,
    /// Counts from the last sibling (`*-last-*`, `last-*`).
    pub last: bool,
    /// Only counts siblings with the same tag name (`*-of-type`).
    pub of_type: bool,
}

impl NthFlags {
    /// Derive the flags from a lowercase pseudo-class name.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        Self {
            nth: name.starts_with("nth-"),
            last: name.contains("last-"),
            of_type: name.contains("-of-type"),
        }
    }
}

/// `:nth-child`, `:nth-last-child`, `:nth-of-type`, `:nth-last-of-type`,
/// `:first-child`, `:last-child`, `:first-of-type`, `:last-of-type`.
///
/// All eight share one algorithm: build the sibling list (filtered to the
/// element's type for `*-of-type`, then reversed for `last` variants),
/// find the element's index in it, and test that index against the formula.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NthSelector {
    name: PseudoClassName,
    flags: NthFlags,
    formula: NthFormula,
}

impl NthSelector {
    /// Build a positional selector from its name and argument text.
    ///
    /// `first-*` and `last-*` take no argument (an empty one is accepted);
    /// `nth-*` require an `An+B` argument.
    ///
    /// # Errors
    ///
    /// - [`SelectorError::InternalConsistency`] if `name` is not one of the
    ///   eight positional pseudo-classes.
    /// - [`SelectorError::Format`] if an argument is missing, forbidden, or
    ///   malformed.
    pub fn new(name: &str, args: Option<&str>) -> Result<Self> {
        let internal = || SelectorError::InternalConsistency {
            name: name.to_string(),
        };
        let parsed = name
            .parse::<PseudoClassName>()
            .map_err(|_| internal())?;
        if !parsed.is_positional() {
            return Err(internal());
        }

        let flags = NthFlags::from_name(parsed.as_str());
        let args = args.filter(|a| !a.trim().is_empty());

        let formula = match (flags.nth, args) {
            (false, None) => NthFormula::FIRST,
            (false, Some(a)) => {
                return Err(SelectorError::format(
                    format!(":{parsed}({a})"),
                    "this pseudo-class does not take arguments",
                ));
            }
            (true, Some(a)) => NthFormula::parse(a)?,
            (true, None) => {
                return Err(SelectorError::format(
                    format!(":{parsed}"),
                    "missing An+B argument",
                ));
            }
        };

        Ok(Self {
            name: parsed,
            flags,
            formula,
        })
    }

    /// Which of the eight pseudo-classes this is.
    #[must_use]
    pub const fn name(&self) -> PseudoClassName {
        self.name
    }

    /// The flags derived from the name.
    #[must_use]
    pub const fn flags(&self) -> NthFlags {
        self.flags
    }

    /// The position formula; [`NthFormula::FIRST`] for `first-*`/`last-*`.
    #[must_use]
    pub const fn formula(&self) -> NthFormula {
        self.formula
    }

    /// Whether `element` sits at a selected position among its siblings.
    ///
    /// # Errors
    ///
    /// Returns [`SelectorError::InvalidArgument`] if `element` is not an
    /// element of `tree`.
    pub fn is_eligible(&self, tree: &dyn ElementTree, element: NodeId) -> Result<bool> {
        let _ = require_element(tree, element)?;

        let mut siblings = if self.flags.of_type {
            tree.siblings_of_type(element)
        } else {
            tree.element_siblings(element)
        };
        if self.flags.last {
            siblings.reverse();
        }

        let index = position_in(&siblings, element)?;
        Ok(self.formula.matches_position(index))
    }
}

impl ElementMatcher for NthSelector {
    fn is_eligible(&self, tree: &dyn ElementTree, element: NodeId) -> Result<bool> {
        Self::is_eligible(self, tree, element)
    }
}

impl fmt::Display for NthSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.flags.nth {
            write!(f, ":{}({})", self.name, self.formula)
        } else {
            write!(f, ":{}", self.name)
        }
    }
}
