//! Ordinal CLI
//!
//! Evaluates a structural pseudo-class against a list of sibling elements
//! and shows which positions it selects.

use anyhow::{Context, Result, bail};
use clap::Parser;
use ordinal_common::warning::{clear_warnings, set_colored, warn_once};
use ordinal_dom::{DomTree, NodeId};
use ordinal_selectors::{Selector, parse_pseudo_class};
use owo_colors::OwoColorize;

/// Ordinal: test CSS structural pseudo-classes against a sibling list
#[derive(Parser, Debug)]
#[command(name = "ordinal")]
#[command(author, version, about, long_about = None)]
#[command(after_help = r#"EXAMPLES:
    # Odd items of a five-item list
    ordinal ':nth-child(odd)' li li li li li

    # Second paragraph among mixed siblings
    ordinal ':nth-of-type(2)' h2 p p h2 p

    # Which siblings are empty? (p/2 has two child elements)
    ordinal ':empty' p/2 p span/1

    # Evaluate only the fourth sibling
    ordinal --index 3 ':nth-last-child(2)' li li li li li
"#)]
struct Cli {
    /// Pseudo-class expression, e.g. ':nth-child(2n+1)'
    #[arg(value_name = "EXPRESSION")]
    expression: String,

    /// Sibling elements in order, as TAG or TAG/N for an element with N
    /// child elements
    #[arg(value_name = "SIBLING", required = true)]
    siblings: Vec<String>,

    /// Only evaluate the sibling at this 0-based index
    #[arg(short, long, value_name = "INDEX")]
    index: Option<usize>,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,
}

/// Upper bound on `N` in a `TAG/N` sibling; larger counts are clamped.
const MAX_CHILDREN: usize = 1024;

/// One sibling from the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
struct SiblingSpec {
    tag: String,
    children: usize,
}

/// Parse `TAG` or `TAG/N`. A malformed `N` is reported and treated as 0;
/// an `N` above [`MAX_CHILDREN`] is reported and clamped.
fn parse_sibling(token: &str) -> Result<SiblingSpec> {
    let (tag, children) = match token.split_once('/') {
        Some((tag, count)) => {
            let children = count.parse::<usize>().unwrap_or_else(|_| {
                warn_once(
                    "CLI",
                    &format!("sibling '{token}' has a malformed child count; using 0"),
                );
                0
            });
            if children > MAX_CHILDREN {
                warn_once(
                    "CLI",
                    &format!(
                        "sibling '{token}' asks for {children} children; using {MAX_CHILDREN}"
                    ),
                );
            }
            (tag, children.min(MAX_CHILDREN))
        }
        None => (token, 0),
    };

    if tag.is_empty() {
        bail!("sibling '{token}' has no tag name");
    }

    Ok(SiblingSpec {
        tag: tag.to_string(),
        children,
    })
}

/// Build `<parent>` holding one element per spec; returns the tree and the
/// sibling IDs in order.
fn build_tree(specs: &[SiblingSpec]) -> (DomTree, Vec<NodeId>) {
    let mut tree = DomTree::new();
    let parent = tree.append_element(NodeId::ROOT, "parent");

    let siblings = specs
        .iter()
        .map(|spec| {
            let id = tree.append_element(parent, &spec.tag);
            for _ in 0..spec.children {
                let _ = tree.append_element(id, "child");
            }
            id
        })
        .collect();

    (tree, siblings)
}

/// Evaluate `selector` for each sibling; failures are warned about and
/// count as not matched.
fn evaluate(selector: &Selector, tree: &DomTree, siblings: &[NodeId]) -> Vec<bool> {
    siblings
        .iter()
        .map(|&id| {
            selector.is_eligible(tree, id).unwrap_or_else(|e| {
                warn_once("CLI", &format!("could not evaluate node {}: {e}", id.0));
                false
            })
        })
        .collect()
}

fn print_row(index: usize, spec: &SiblingSpec, matched: bool, colored: bool) {
    let label = if spec.children > 0 {
        format!("<{}> ({} children)", spec.tag, spec.children)
    } else {
        format!("<{}>", spec.tag)
    };
    let marker = if matched { "✓" } else { "·" };
    let line = format!("  {marker} {index:>3}  {label}");

    if !colored {
        println!("{line}");
    } else if matched {
        println!("{}", line.green());
    } else {
        println!("{}", line.dimmed());
    }
}

fn run(cli: &Cli) -> Result<()> {
    let colored = !cli.no_color;
    set_colored(colored);
    clear_warnings();

    let selector = parse_pseudo_class(&cli.expression)
        .with_context(|| format!("cannot compile '{}'", cli.expression))?;

    let specs = cli
        .siblings
        .iter()
        .map(|token| parse_sibling(token))
        .collect::<Result<Vec<_>>>()?;
    let (tree, siblings) = build_tree(&specs);

    if let Some(index) = cli.index {
        let Some(&id) = siblings.get(index) else {
            bail!(
                "index {index} is out of range for {} siblings",
                siblings.len()
            );
        };
        let matched = selector
            .is_eligible(&tree, id)
            .with_context(|| format!("cannot evaluate '{selector}' at index {index}"))?;
        print_row(index, &specs[index], matched, colored);
        return Ok(());
    }

    let results = evaluate(&selector, &tree, &siblings);
    let matched: Vec<usize> = results
        .iter()
        .enumerate()
        .filter_map(|(index, &hit)| hit.then_some(index))
        .collect();

    let header = format!("{selector}");
    if colored {
        println!("{}", header.bold());
    } else {
        println!("{header}");
    }
    for (index, (spec, &hit)) in specs.iter().zip(&results).enumerate() {
        print_row(index, spec, hit, colored);
    }
    println!(
        "matched {} of {} siblings: {:?}",
        matched.len(),
        siblings.len(),
        matched
    );

    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    run(&cli)
}
