//! Integration tests for expression parsing and selector dispatch.

use ordinal_dom::{DomTree, NodeId};
use ordinal_selectors::{
    ElementMatcher, ElementTree, NthFormula, ProviderRegistry, PseudoClassExpression,
    PseudoClassProvider, Result, SelectorError, SelectorFactory, SelectorKind, parse_pseudo_class,
};
use pretty_assertions::assert_eq;

/// Matches elements whose tag equals the argument.
#[derive(Debug)]
struct TagIs(String);

impl ElementMatcher for TagIs {
    fn is_eligible(&self, tree: &dyn ElementTree, element: NodeId) -> Result<bool> {
        let tag = tree.tag_name(element).ok_or_else(|| {
            SelectorError::invalid_argument(format!("node {} is not an element", element.0))
        })?;
        Ok(tag.eq_ignore_ascii_case(&self.0))
    }
}

struct TagProvider;

impl PseudoClassProvider for TagProvider {
    fn create_selector(&self, name: &str, args: Option<&str>) -> Result<Box<dyn ElementMatcher>> {
        let tag = args
            .map(str::trim)
            .filter(|a| !a.is_empty())
            .ok_or_else(|| SelectorError::format(format!(":{name}"), "missing tag argument"))?;
        Ok(Box::new(TagIs(tag.to_string())))
    }
}

// =============================================================================
// Outer expression grammar
// =============================================================================

#[test]
fn test_parse_expression_without_arguments() {
    let parsed = PseudoClassExpression::parse(":First-Child").unwrap();
    assert_eq!(parsed.name, "first-child");
    assert_eq!(parsed.args, None);
    assert_eq!(parsed.raw, ":First-Child");
}

#[test]
fn test_parse_expression_with_arguments() {
    let parsed = PseudoClassExpression::parse(":nth-child( 2n + 1 )").unwrap();
    assert_eq!(parsed.name, "nth-child");
    assert_eq!(parsed.args.as_deref(), Some(" 2n + 1 "));

    let parsed = PseudoClassExpression::parse(":empty()").unwrap();
    assert_eq!(parsed.args.as_deref(), Some(""));
}

#[test]
fn test_parse_expression_rejects_non_matching_text() {
    for raw in [
        "nth-child(2)",
        "::before",
        ":1st",
        ":nth-child(2",
        ":nth child",
        ":nth-child(2) ",
        " :first-child",
        ":first-child.x",
    ] {
        assert!(
            PseudoClassExpression::parse(raw).unwrap_err().is_format(),
            "{raw:?} should be rejected"
        );
    }
}

#[test]
fn test_parse_expression_empty_is_invalid_argument() {
    assert!(matches!(
        PseudoClassExpression::parse(""),
        Err(SelectorError::InvalidArgument { .. })
    ));
    assert!(matches!(
        parse_pseudo_class(""),
        Err(SelectorError::InvalidArgument { .. })
    ));
}

// =============================================================================
// Built-in dispatch
// =============================================================================

#[test]
fn test_dispatch_positional_names() {
    let cases = [
        (":nth-child(3)", false, false, NthFormula::new(0, 3)),
        (":nth-last-child(odd)", true, false, NthFormula::new(2, 1)),
        (":nth-of-type(n)", false, true, NthFormula::new(1, 0)),
        (":nth-last-of-type(-2n+4)", true, true, NthFormula::new(-2, 4)),
        (":first-child", false, false, NthFormula::FIRST),
        (":last-child", true, false, NthFormula::FIRST),
        (":first-of-type", false, true, NthFormula::FIRST),
        (":LAST-OF-TYPE", true, true, NthFormula::FIRST),
    ];

    for (expression, last, of_type, formula) in cases {
        let selector = parse_pseudo_class(expression).unwrap();
        let SelectorKind::Nth(nth) = selector.kind() else {
            panic!("{expression} did not build a positional selector");
        };
        assert_eq!(nth.flags().last, last, "{expression}");
        assert_eq!(nth.flags().of_type, of_type, "{expression}");
        assert_eq!(nth.formula(), formula, "{expression}");
    }
}

#[test]
fn test_selector_keeps_diagnostic_text() {
    let selector = parse_pseudo_class(":NTH-Child(Odd)").unwrap();
    assert_eq!(selector.name(), "nth-child");
    assert_eq!(selector.raw(), ":NTH-Child(Odd)");
    assert_eq!(selector.to_string(), ":NTH-Child(Odd)");

    let SelectorKind::Nth(nth) = selector.kind() else {
        panic!("expected a positional selector");
    };
    assert_eq!(nth.to_string(), ":nth-child(2n+1)");
}

#[test]
fn test_create_requires_name_and_raw() {
    let factory = SelectorFactory::global();
    assert!(matches!(
        factory.create("", None, ":x"),
        Err(SelectorError::InvalidArgument { .. })
    ));
    assert!(matches!(
        factory.create("first-child", None, ""),
        Err(SelectorError::InvalidArgument { .. })
    ));
}

#[test]
fn test_create_from_parts() {
    let factory = SelectorFactory::global();
    let selector = factory
        .create("Nth-Last-Child", Some("2"), ":nth-last-child(2)")
        .unwrap();
    assert_eq!(selector.name(), "nth-last-child");
}

// =============================================================================
// Provider dispatch
// =============================================================================

#[test]
fn test_unknown_name_is_unsupported() {
    let registry = ProviderRegistry::new();
    let factory = SelectorFactory::new(&registry);
    assert!(matches!(
        factory.parse(":hover"),
        Err(SelectorError::Unsupported { name }) if name == "hover"
    ));
}

#[test]
fn test_registered_provider_builds_selector() {
    let registry = ProviderRegistry::new();
    registry.register("tag", TagProvider).unwrap();
    let factory = SelectorFactory::new(&registry);

    let mut tree = DomTree::new();
    let div = tree.append_element(NodeId::ROOT, "div");
    let li = tree.append_element(div, "li");
    let p = tree.append_element(div, "p");

    let selector = factory.parse(":TAG(li)").unwrap();
    assert!(matches!(selector.kind(), SelectorKind::Provided(_)));
    assert_eq!(selector.filter(&tree, [li, p]).unwrap(), vec![li]);
}

#[test]
fn test_provider_errors_propagate() {
    let registry = ProviderRegistry::new();
    registry.register("tag", TagProvider).unwrap();
    let factory = SelectorFactory::new(&registry);

    assert!(factory.parse(":tag").unwrap_err().is_format());
}

#[test]
fn test_closure_provider() {
    let registry = ProviderRegistry::new();
    registry
        .register(
            "any",
            |_name: &str, _args: Option<&str>| -> Result<Box<dyn ElementMatcher>> {
                Ok(Box::new(TagIs("div".to_string())))
            },
        )
        .unwrap();

    let mut tree = DomTree::new();
    let div = tree.append_element(NodeId::ROOT, "div");
    let selector = SelectorFactory::new(&registry).parse(":any").unwrap();
    assert!(selector.is_eligible(&tree, div).unwrap());
}

#[test]
fn test_builtins_never_reach_providers() {
    let registry = ProviderRegistry::new();
    assert!(
        registry
            .register("nth-child", TagProvider)
            .unwrap_err()
            .is_conflict()
    );
    assert!(!registry.contains("nth-child"));
}
