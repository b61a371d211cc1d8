//! Regular-expression micro-grammars for pseudo-class text.
//!
//! Two grammars live here:
//! - the outer expression, `:name` or `:name(args)`
//! - the [`An+B` microsyntax](https://www.w3.org/TR/css-syntax-3/#anb-microsyntax)
//!   used as the argument of the `nth-*` pseudo-classes
//!
//! Both are fully anchored: text either matches entirely or is rejected.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{Result, SelectorError};

/// `:name` or `:name(args)`. `args` may be empty or contain anything,
/// including nested parentheses; its interpretation is per pseudo-class.
static PSEUDO_CLASS_EXPRESSION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s)^:(?P<name>[A-Za-z][A-Za-z0-9-]*)(?:\((?P<args>.*)\))?$").unwrap()
});

/// `B`, or `An` optionally followed by `+B` / `-B`. Expects trimmed,
/// lowercased input with the `odd`/`even` keywords already expanded.
static NTH_EXPRESSION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^(?:(?P<integer>[+-]?[0-9]+)|(?P<coefficient>[+-]?[0-9]*)n(?:\s*(?P<sign>[+-])\s*(?P<augend>[0-9]+))?)$",
    )
    .unwrap()
});

/// A pseudo-class expression split into its parts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PseudoClassExpression {
    /// The pseudo-class name, lowercased.
    pub name: String,
    /// The text between the parentheses, if there were parentheses.
    pub args: Option<String>,
    /// The expression exactly as given.
    pub raw: String,
}

impl PseudoClassExpression {
    /// Split `raw` into name and arguments.
    ///
    /// # Errors
    ///
    /// Returns [`SelectorError::InvalidArgument`] for an empty string and
    /// [`SelectorError::Format`] when `raw` is not `:name` or `:name(args)`.
    pub fn parse(raw: &str) -> Result<Self> {
        if raw.is_empty() {
            return Err(SelectorError::invalid_argument(
                "pseudo-class expression is empty",
            ));
        }

        let captures = PSEUDO_CLASS_EXPRESSION
            .captures(raw)
            .ok_or_else(|| SelectorError::format(raw, "expected ':name' or ':name(arguments)'"))?;

        Ok(Self {
            name: captures["name"].to_ascii_lowercase(),
            args: captures.name("args").map(|m| m.as_str().to_string()),
            raw: raw.to_string(),
        })
    }
}

/// The pieces of an `An+B` argument that matched [`NTH_EXPRESSION`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum NthTokens<'a> {
    /// A bare integer such as `3` or `-2`.
    Integer(&'a str),
    /// `An` with an optional signed `B`.
    Periodic {
        /// Digits with optional sign, a bare sign, or empty.
        coefficient: &'a str,
        /// Sign character and digits of `B`, whitespace already dropped.
        augend: Option<(&'a str, &'a str)>,
    },
}

/// Match normalized `An+B` text against the grammar.
pub(crate) fn match_nth(text: &str) -> Option<NthTokens<'_>> {
    let captures = NTH_EXPRESSION.captures(text)?;

    if let Some(integer) = captures.name("integer") {
        return Some(NthTokens::Integer(integer.as_str()));
    }

    let coefficient = captures.name("coefficient").map_or("", |m| m.as_str());
    let augend = captures
        .name("sign")
        .zip(captures.name("augend"))
        .map(|(sign, digits)| (sign.as_str(), digits.as_str()));

    Some(NthTokens::Periodic {
        coefficient,
        augend,
    })
}
