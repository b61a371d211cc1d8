//! Integration tests for `:only-child`, `:only-of-type`, and `:empty`.

use ordinal_dom::{DomTree, NodeId, NodeType};
use ordinal_selectors::{CountKind, CountSelector, SelectorError, SelectorKind, parse_pseudo_class};

fn eligible(expression: &str, tree: &DomTree, element: NodeId) -> bool {
    parse_pseudo_class(expression)
        .unwrap()
        .is_eligible(tree, element)
        .unwrap()
}

// =============================================================================
// :only-child
// =============================================================================

#[test]
fn test_only_child_single_element() {
    let mut tree = DomTree::new();
    let div = tree.append_element(NodeId::ROOT, "div");
    let p = tree.append_element(div, "p");

    // Text and comments are not siblings.
    let text = tree.alloc(NodeType::Text("text".to_string()));
    tree.append_child(div, text);
    let comment = tree.alloc(NodeType::Comment("c".to_string()));
    tree.append_child(div, comment);

    assert!(eligible(":only-child", &tree, p));
}

#[test]
fn test_only_child_with_sibling() {
    let mut tree = DomTree::new();
    let div = tree.append_element(NodeId::ROOT, "div");
    let p = tree.append_element(div, "p");
    let span = tree.append_element(div, "span");

    assert!(!eligible(":only-child", &tree, p));
    assert!(!eligible(":only-child", &tree, span));
}

// =============================================================================
// :only-of-type
// =============================================================================

#[test]
fn test_only_of_type_unique_tag() {
    let mut tree = DomTree::new();
    let div = tree.append_element(NodeId::ROOT, "div");
    let h1 = tree.append_element(div, "h1");
    let p1 = tree.append_element(div, "p");
    let p2 = tree.append_element(div, "p");

    assert!(eligible(":only-of-type", &tree, h1));
    assert!(!eligible(":only-of-type", &tree, p1));
    assert!(!eligible(":only-of-type", &tree, p2));
}

#[test]
fn test_only_of_type_is_case_insensitive() {
    let mut tree = DomTree::new();
    let div = tree.append_element(NodeId::ROOT, "div");
    let upper = tree.append_element(div, "P");
    let _lower = tree.append_element(div, "p");

    assert!(!eligible(":ONLY-OF-TYPE", &tree, upper));
}

// =============================================================================
// :empty
// =============================================================================

#[test]
fn test_empty_without_children() {
    let mut tree = DomTree::new();
    let div = tree.append_element(NodeId::ROOT, "div");
    assert!(eligible(":empty", &tree, div));
}

#[test]
fn test_empty_with_text_only() {
    let mut tree = DomTree::new();
    let div = tree.append_element(NodeId::ROOT, "div");
    let text = tree.alloc(NodeType::Text("hello".to_string()));
    tree.append_child(div, text);
    assert!(eligible(":empty", &tree, div));
}

#[test]
fn test_empty_with_child_element() {
    let mut tree = DomTree::new();
    let div = tree.append_element(NodeId::ROOT, "div");
    let _span = tree.append_element(div, "span");
    assert!(!eligible(":empty", &tree, div));
}

// =============================================================================
// Construction and errors
// =============================================================================

#[test]
fn test_count_selector_kinds() {
    let selector = parse_pseudo_class(":only-of-type").unwrap();
    assert!(matches!(
        selector.kind(),
        SelectorKind::Count(count) if count.kind() == CountKind::OnlyOfType
    ));
    assert_eq!(
        CountSelector::new("EMPTY", None).unwrap().kind(),
        CountKind::Empty
    );
}

#[test]
fn test_count_selector_rejects_arguments() {
    for expression in [
        ":only-child(1)",
        ":only-of-type(p)",
        ":empty(x)",
        ":empty()",
        ":only-child( )",
        ":only-of-type()",
    ] {
        let err = parse_pseudo_class(expression).unwrap_err();
        assert!(
            matches!(&err, SelectorError::InvalidUsage { name } if expression.contains(name.as_str())),
            "{expression}: unexpected error {err}"
        );
    }
    assert!(matches!(
        CountSelector::new("empty", Some("")),
        Err(SelectorError::InvalidUsage { name }) if name == "empty"
    ));
    assert!(CountSelector::new("empty", None).is_ok());
}

#[test]
fn test_count_selector_rejects_positional_names() {
    assert!(matches!(
        CountSelector::new("first-child", None),
        Err(SelectorError::InternalConsistency { name }) if name == "first-child"
    ));
}

#[test]
fn test_count_selector_rejects_non_elements() {
    let mut tree = DomTree::new();
    let div = tree.append_element(NodeId::ROOT, "div");
    let text = tree.alloc(NodeType::Text("t".to_string()));
    tree.append_child(div, text);

    let selector = CountSelector::new("empty", None).unwrap();
    assert!(matches!(
        selector.is_eligible(&tree, text),
        Err(SelectorError::InvalidArgument { .. })
    ));
}
