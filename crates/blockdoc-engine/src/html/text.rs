//! Text projection of HTML fragments: tag stripping, word counting and
//! word-limited, tag-safe truncation.
//!
//! All word semantics here operate on the *text-only* projection of a
//! fragment. A word split across inline tags (`<b>wo</b>rd`) is one word,
//! because the projection concatenates text without separators.

use std::sync::LazyLock;

use regex::Regex;

use super::tree::{self, Node};
use crate::schema::Alignment;

static TEXT_ALIGN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"text-align:\s*(left|center|right|justify)").unwrap_or_else(|e| panic!("{e}"))
});

/// The text-only projection of a fragment: tags and comments stripped,
/// entities decoded, text concatenated in order.
pub fn plain_text(fragment: &str) -> String {
    let mut out = String::new();
    collect_text(&tree::parse_fragment(fragment), &mut out);
    out
}

fn collect_text(nodes: &[Node], out: &mut String) {
    for node in nodes {
        match node {
            Node::Text(text) => out.push_str(text),
            Node::Element(el) => collect_text(&el.children, out),
            Node::Comment(_) => {}
        }
    }
}

/// Number of whitespace-separated words in the text projection.
pub fn word_count(fragment: &str) -> usize {
    plain_text(fragment).split_whitespace().count()
}

/// First `text-align` value declared in the fragment's own inline styles,
/// used as the alignment fallback when no tune is present.
pub fn inline_text_align(fragment: &str) -> Option<Alignment> {
    let captures = TEXT_ALIGN.captures(fragment)?;
    match captures.get(1)?.as_str() {
        "left" => Some(Alignment::Left),
        "center" => Some(Alignment::Center),
        "right" => Some(Alignment::Right),
        "justify" => Some(Alignment::Justify),
        _ => None,
    }
}

/// Truncate a fragment to its first `limit` words, keeping markup intact.
///
/// Returns `None` when the fragment is within the limit (render it in
/// full). The preview never cuts mid-tag or mid-word: elements are closed
/// properly and the word that reaches the limit is kept whole. Trailing
/// whitespace is trimmed; the caller appends its own ellipsis/affordance.
pub fn truncate_words(fragment: &str, limit: usize) -> Option<String> {
    if word_count(fragment) <= limit {
        return None;
    }

    let nodes = tree::parse_fragment(fragment);
    let mut budget = WordBudget {
        remaining: limit,
        in_word: false,
    };
    let mut kept = Vec::new();
    take_nodes(&nodes, &mut budget, &mut kept);
    trim_trailing_whitespace(&mut kept);
    Some(tree::serialize(&kept))
}

struct WordBudget {
    remaining: usize,
    /// Whether the last emitted character was part of a word; carries
    /// across element boundaries so tag-split words count once.
    in_word: bool,
}

/// Copy nodes until the word budget runs out. Returns `true` while the
/// budget still admits more content.
fn take_nodes(nodes: &[Node], budget: &mut WordBudget, out: &mut Vec<Node>) -> bool {
    for node in nodes {
        match node {
            Node::Text(text) => {
                let (kept, exhausted) = take_text(text, budget);
                if !kept.is_empty() {
                    out.push(Node::Text(kept));
                }
                if exhausted {
                    return false;
                }
            }
            Node::Comment(inner) => out.push(Node::Comment(inner.clone())),
            Node::Element(el) => {
                let mut taken = el.clone();
                taken.children.clear();
                let open = take_nodes(&el.children, budget, &mut taken.children);
                if !taken.children.is_empty() || el.children.is_empty() {
                    out.push(Node::Element(taken));
                }
                if !open {
                    return false;
                }
            }
        }
    }
    true
}

fn take_text(text: &str, budget: &mut WordBudget) -> (String, bool) {
    let mut kept = String::new();
    for ch in text.chars() {
        if ch.is_whitespace() {
            budget.in_word = false;
        } else if !budget.in_word {
            if budget.remaining == 0 {
                return (kept, true);
            }
            budget.remaining -= 1;
            budget.in_word = true;
        }
        kept.push(ch);
    }
    (kept, false)
}

fn trim_trailing_whitespace(nodes: &mut Vec<Node>) {
    loop {
        match nodes.last_mut() {
            Some(Node::Text(text)) => {
                let trimmed = text.trim_end();
                if trimmed.is_empty() {
                    nodes.pop();
                    continue;
                }
                *text = trimmed.to_string();
                return;
            }
            Some(Node::Element(el)) => {
                if el.children.is_empty() {
                    return;
                }
                trim_trailing_whitespace(&mut el.children);
                return;
            }
            _ => return,
        }
    }
}
