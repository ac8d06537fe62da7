//! Write-time normalization of rich-text fragments.
//!
//! Two concerns, applied in order:
//!
//! 1. **Style stripping**: inline `font-family`, `background-color`, and
//!    pt-valued `font-size` declarations never survive persistence. Pixel
//!    font sizes are deliberate (the inline font-size tool writes them) and
//!    are preserved, as is every other declaration (`color`, `text-align`,
//!    ...).
//! 2. **Wrapper collapse**: repeated paste/format cycles accumulate nested
//!    and adjacent `<span>`/`<font>` wrappers. Each pass deletes childless
//!    attribute-less wrappers, unwraps attribute-less wrappers nested
//!    directly in a same-tag wrapper, and merges adjacent same-tag wrappers
//!    with identical attribute signatures. Passes repeat until one reports
//!    no change, bounded by [`MAX_PASSES`].
//!
//! The contract: idempotent, text projection untouched, untargeted
//! attributes untouched.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;

use super::tree::{self, Element, Node};

/// Safety net for the fixpoint loop. Each productive pass strictly removes
/// a wrapper or merges two, so real content converges long before this; the
/// cap only guards against a normalization bug turning into a hang.
pub const MAX_PASSES: usize = 50;

/// Elements treated as pure styling wrappers, subject to collapse.
const WRAPPER_TAGS: [&str; 2] = ["span", "font"];

/// Style properties that never survive persistence.
const STRIPPED_PROPS: [&str; 2] = ["font-family", "background-color"];

/// A `font-size` value in point units, e.g. `12pt` or `10.5pt`.
static PT_SIZE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^\d+(\.\d+)?pt$").unwrap_or_else(|e| panic!("{e}")));

/// Sanitize one HTML fragment for persistence.
pub fn sanitize(fragment: &str) -> String {
    let mut nodes = tree::parse_fragment(fragment);
    strip_styles(&mut nodes);

    let mut passes = 0;
    while normalize_pass(&mut nodes, None) {
        passes += 1;
        if passes >= MAX_PASSES {
            tracing::warn!(
                passes,
                "wrapper normalization did not reach a fixpoint; keeping partial result"
            );
            break;
        }
    }

    tree::serialize(&nodes)
}

fn strip_styles(nodes: &mut [Node]) {
    for node in nodes {
        if let Node::Element(el) = node {
            strip_element_style(el);
            strip_styles(&mut el.children);
        }
    }
}

fn strip_element_style(el: &mut Element) {
    let Some(style) = el.attr("style") else {
        return;
    };

    let declarations = parse_declarations(style);
    let kept: Vec<&(String, String)> = declarations
        .iter()
        .filter(|(prop, value)| !is_stripped_declaration(prop, value))
        .collect();

    if kept.len() == declarations.len() {
        // Nothing to strip; leave the attribute formatting untouched
        return;
    }
    if kept.is_empty() {
        el.remove_attr("style");
        return;
    }
    let rebuilt = kept
        .iter()
        .map(|(prop, value)| format!("{prop}: {value}"))
        .collect::<Vec<_>>()
        .join("; ");
    el.set_attr("style", rebuilt);
}

fn is_stripped_declaration(prop: &str, value: &str) -> bool {
    if STRIPPED_PROPS.contains(&prop) {
        return true;
    }
    prop == "font-size" && PT_SIZE.is_match(value)
}

/// Split a style attribute into `(property, value)` pairs. Properties are
/// lowercased for matching; values keep their original spelling.
fn parse_declarations(style: &str) -> Vec<(String, String)> {
    style
        .split(';')
        .filter_map(|decl| {
            let (prop, value) = decl.split_once(':')?;
            let prop = prop.trim().to_lowercase();
            let value = value.trim().to_string();
            if prop.is_empty() {
                return None;
            }
            Some((prop, value))
        })
        .collect()
}

/// One structural normalization pass over a sibling list. Returns whether
/// anything changed; the caller loops to the fixpoint.
fn normalize_pass(nodes: &mut Vec<Node>, parent_tag: Option<&str>) -> bool {
    let mut changed = false;

    // Children first, so emptied wrappers are visible to this level
    for node in nodes.iter_mut() {
        if let Node::Element(el) = node {
            let tag = el.tag.clone();
            changed |= normalize_pass(&mut el.children, Some(&tag));
        }
    }

    let mut i = 0;
    while i < nodes.len() {
        match wrapper_action(&nodes[i], parent_tag) {
            WrapperAction::Remove => {
                nodes.remove(i);
                changed = true;
            }
            WrapperAction::Unwrap => {
                let Node::Element(el) = nodes.remove(i) else {
                    unreachable!("wrapper_action only unwraps elements");
                };
                for (offset, child) in el.children.into_iter().enumerate() {
                    nodes.insert(i + offset, child);
                }
                changed = true;
            }
            WrapperAction::Keep => {
                if merge_with_next(nodes, i) {
                    changed = true;
                } else {
                    i += 1;
                }
            }
        }
    }

    changed
}

enum WrapperAction {
    Remove,
    Unwrap,
    Keep,
}

fn wrapper_action(node: &Node, parent_tag: Option<&str>) -> WrapperAction {
    let Node::Element(el) = node else {
        return WrapperAction::Keep;
    };
    if !is_wrapper(&el.tag) || !el.attrs.is_empty() {
        return WrapperAction::Keep;
    }
    if el.children.is_empty() {
        // No attributes, no content: pure noise
        return WrapperAction::Remove;
    }
    if parent_tag == Some(el.tag.as_str()) {
        // A bare wrapper directly inside the same kind of wrapper adds
        // nothing the parent doesn't already provide
        return WrapperAction::Unwrap;
    }
    WrapperAction::Keep
}

/// Merge `nodes[i+1]` into `nodes[i]` when both are wrappers of the same
/// tag with an identical attribute signature.
fn merge_with_next(nodes: &mut Vec<Node>, i: usize) -> bool {
    let mergeable = match (nodes.get(i), nodes.get(i + 1)) {
        (Some(Node::Element(a)), Some(Node::Element(b))) => {
            a.tag == b.tag && is_wrapper(&a.tag) && attr_signature(a) == attr_signature(b)
        }
        _ => false,
    };
    if !mergeable {
        return false;
    }

    let Node::Element(second) = nodes.remove(i + 1) else {
        unreachable!("mergeability was just checked");
    };
    let Some(Node::Element(first)) = nodes.get_mut(i) else {
        unreachable!("mergeability was just checked");
    };
    first.children.extend(second.children);
    true
}

fn is_wrapper(tag: &str) -> bool {
    WRAPPER_TAGS.contains(&tag)
}

/// Attribute signature: name=value pairs, order-independent. Duplicate
/// names keep the last value, matching how browsers resolve them.
fn attr_signature(el: &Element) -> BTreeMap<&str, &str> {
    el.attrs
        .iter()
        .map(|(n, v)| (n.as_str(), v.as_str()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn strips_font_family() {
        assert_eq!(
            sanitize(r#"<span style="font-family: Arial; color: red">x</span>"#),
            r#"<span style="color: red">x</span>"#
        );
    }

    #[test]
    fn strips_background_color() {
        assert_eq!(
            sanitize(r#"<span style="background-color: yellow">x</span>"#),
            "<span>x</span>"
        );
    }

    #[test]
    fn strips_pt_font_size_keeps_px() {
        assert_eq!(
            sanitize(r#"<span style="font-size: 12pt">x</span>"#),
            "<span>x</span>"
        );
        assert_eq!(
            sanitize(r#"<span style="font-size: 14px">x</span>"#),
            r#"<span style="font-size: 14px">x</span>"#
        );
    }

    #[test]
    fn untouched_style_keeps_original_formatting() {
        let input = r#"<span style="color:red;font-size:14px">x</span>"#;
        assert_eq!(sanitize(input), input);
    }

    #[test]
    fn preserves_href_and_color() {
        let input = r#"<a href="/about" style="color: blue">about</a>"#;
        assert_eq!(sanitize(input), input);
    }

    #[test]
    fn removes_childless_wrapper() {
        assert_eq!(sanitize("a<span></span>b"), "ab");
    }

    #[test]
    fn removes_nested_childless_wrappers() {
        // Inner removal empties the outer; the fixpoint loop catches it
        assert_eq!(sanitize("a<span><span></span></span>b"), "ab");
    }

    #[test]
    fn unwraps_bare_wrapper_in_same_kind() {
        assert_eq!(
            sanitize(r#"<span style="color: red"><span>x</span></span>"#),
            r#"<span style="color: red">x</span>"#
        );
    }

    #[test]
    fn keeps_bare_wrapper_inside_other_elements() {
        let input = "<b><span>x</span></b>";
        assert_eq!(sanitize(input), input);
    }

    #[test]
    fn merges_adjacent_identical_wrappers() {
        assert_eq!(
            sanitize(r#"<span style="color: red">a</span><span style="color: red">b</span>"#),
            r#"<span style="color: red">ab</span>"#
        );
    }

    #[test]
    fn merge_is_order_independent_on_attributes() {
        assert_eq!(
            sanitize(r#"<span class="x" style="color: red">a</span><span style="color: red" class="x">b</span>"#),
            r#"<span class="x" style="color: red">ab</span>"#
        );
    }

    #[test]
    fn does_not_merge_different_signatures() {
        let input = r#"<span style="color: red">a</span><span style="color: blue">b</span>"#;
        assert_eq!(sanitize(input), input);
    }

    #[test]
    fn does_not_merge_semantic_elements() {
        let input = "<b>a</b><b>b</b>";
        assert_eq!(sanitize(input), input);
    }

    #[test]
    fn merge_chain_collapses_to_one() {
        assert_eq!(
            sanitize("<span>a</span><span>b</span><span>c</span>"),
            "<span>abc</span>"
        );
    }

    #[test]
    fn merged_wrappers_renormalize_recursively() {
        // After merging, the two bare inner spans become adjacent and merge
        // in a later pass
        assert_eq!(
            sanitize(
                r#"<span style="color: red"><span>a</span></span><span style="color: red"><span>b</span></span>"#
            ),
            r#"<span style="color: red">ab</span>"#
        );
    }

    #[test]
    fn deep_pathological_nesting_terminates() {
        let mut input = "x".to_string();
        for _ in 0..200 {
            input = format!("<span>{input}</span>");
        }
        // One top-level bare span survives (nothing above it to unwrap into)
        assert_eq!(sanitize(&input), "<span>x</span>");
    }

    #[test]
    fn idempotent_on_samples() {
        let samples = [
            r#"<span style="font-family: Arial"><span>a</span></span><span>b</span>"#,
            "plain text",
            "<b>bold</b> and <i>italic</i>",
            r#"<span style="font-size: 10pt"><span style="font-size: 10pt">x</span></span>"#,
        ];
        for s in samples {
            let once = sanitize(s);
            let twice = sanitize(&once);
            assert_eq!(once, twice, "not idempotent for {s:?}");
        }
    }

    #[test]
    fn text_projection_is_preserved() {
        let samples = [
            r#"<span style="font-family: Arial">hello <b>world</b></span>"#,
            "a<span></span>b",
            "<span><span>nested   spacing</span></span>",
        ];
        for s in samples {
            assert_eq!(
                super::super::text::plain_text(&sanitize(s)),
                super::super::text::plain_text(s),
                "text changed for {s:?}"
            );
        }
    }
}
