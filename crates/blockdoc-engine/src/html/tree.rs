//! A small, forgiving node tree over lexed HTML fragments.
//!
//! Parsing never fails: unclosed elements auto-close at end of input,
//! unmatched closing tags are dropped, void elements never take children,
//! and stray `<` characters are literal text. Text nodes hold decoded
//! entities; [`serialize`] re-encodes them, so `parse` + `serialize` is
//! stable on its own output.

use html_escape::{decode_html_entities, encode_double_quoted_attribute, encode_text};

use super::lexer::{Token, TokenKind, lex};

/// Elements that never have children or a closing tag.
const VOID_ELEMENTS: [&str; 13] = [
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source", "track",
    "wbr",
];

#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Element(Element),
    Text(String),
    Comment(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    /// Tag name, lowercased.
    pub tag: String,
    /// Attributes in source order, values entity-decoded. An attribute
    /// without a value is stored with an empty string.
    pub attrs: Vec<(String, String)>,
    pub children: Vec<Node>,
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn set_attr(&mut self, name: &str, value: String) {
        match self.attrs.iter_mut().find(|(n, _)| n == name) {
            Some((_, v)) => *v = value,
            None => self.attrs.push((name.to_string(), value)),
        }
    }

    pub fn remove_attr(&mut self, name: &str) {
        self.attrs.retain(|(n, _)| n != name);
    }

    pub fn is_void(&self) -> bool {
        VOID_ELEMENTS.contains(&self.tag.as_str())
    }
}

/// Parse a fragment into a sequence of sibling nodes.
pub fn parse_fragment(input: &str) -> Vec<Node> {
    let mut builder = TreeBuilder::default();

    for Token { kind, text } in lex(input) {
        match kind {
            TokenKind::OpenTag => {
                let (element, self_closing) = parse_open_tag(text);
                if self_closing || element.is_void() {
                    builder.push(Node::Element(element));
                } else {
                    builder.open(element);
                }
            }
            TokenKind::CloseTag => {
                builder.close(&close_tag_name(text));
            }
            TokenKind::Comment => {
                let inner = text
                    .strip_prefix("<!--")
                    .and_then(|t| t.strip_suffix("-->"))
                    .unwrap_or("");
                builder.push(Node::Comment(inner.to_string()));
            }
            TokenKind::Text | TokenKind::StrayLt => {
                builder.push_text(&decode_html_entities(text));
            }
        }
    }

    builder.finish()
}

/// Serialize nodes back to an HTML string, escaping text and attribute
/// values. Attribute order is preserved; value-less attributes serialize as
/// a bare name.
pub fn serialize(nodes: &[Node]) -> String {
    let mut out = String::new();
    for node in nodes {
        serialize_node(node, &mut out);
    }
    out
}

fn serialize_node(node: &Node, out: &mut String) {
    match node {
        Node::Text(text) => out.push_str(&encode_text(text)),
        Node::Comment(inner) => {
            out.push_str("<!--");
            out.push_str(inner);
            out.push_str("-->");
        }
        Node::Element(el) => {
            out.push('<');
            out.push_str(&el.tag);
            for (name, value) in &el.attrs {
                out.push(' ');
                out.push_str(name);
                if !value.is_empty() {
                    out.push_str("=\"");
                    out.push_str(&encode_double_quoted_attribute(value));
                    out.push('"');
                }
            }
            out.push('>');
            if !el.is_void() {
                for child in &el.children {
                    serialize_node(child, out);
                }
                out.push_str("</");
                out.push_str(&el.tag);
                out.push('>');
            }
        }
    }
}

#[derive(Default)]
struct TreeBuilder {
    roots: Vec<Node>,
    stack: Vec<Element>,
}

impl TreeBuilder {
    fn push(&mut self, node: Node) {
        match self.stack.last_mut() {
            Some(parent) => parent.children.push(node),
            None => self.roots.push(node),
        }
    }

    fn push_text(&mut self, text: &str) {
        let siblings = match self.stack.last_mut() {
            Some(parent) => &mut parent.children,
            None => &mut self.roots,
        };
        // Merge with a preceding text node so token boundaries don't leak
        // into the tree shape
        if let Some(Node::Text(prev)) = siblings.last_mut() {
            prev.push_str(text);
        } else {
            siblings.push(Node::Text(text.to_string()));
        }
    }

    fn open(&mut self, element: Element) {
        self.stack.push(element);
    }

    fn close(&mut self, tag: &str) {
        let Some(depth) = self.stack.iter().rposition(|el| el.tag == tag) else {
            // Unmatched closing tag, drop it
            return;
        };
        while self.stack.len() > depth {
            let el = self
                .stack
                .pop()
                .map(Node::Element)
                .unwrap_or(Node::Text(String::new()));
            self.push(el);
        }
    }

    fn finish(mut self) -> Vec<Node> {
        // Auto-close anything left open at end of input
        while let Some(el) = self.stack.pop() {
            self.push(Node::Element(el));
        }
        self.roots
    }
}

/// Split an open-tag token like `<span style="x" hidden>` into an element
/// and a self-closing flag.
fn parse_open_tag(token: &str) -> (Element, bool) {
    let inner = token
        .strip_prefix('<')
        .and_then(|t| t.strip_suffix('>'))
        .unwrap_or(token);
    let (inner, self_closing) = match inner.strip_suffix('/') {
        Some(rest) => (rest, true),
        None => (inner, false),
    };

    let mut name_end = inner.len();
    for (i, c) in inner.char_indices() {
        if c.is_whitespace() {
            name_end = i;
            break;
        }
    }
    let mut element = Element::new(inner[..name_end].to_lowercase());

    let mut rest = inner[name_end..].trim_start();
    while !rest.is_empty() {
        let name_len = rest
            .find(|c: char| c.is_whitespace() || c == '=')
            .unwrap_or(rest.len());
        let name = rest[..name_len].trim_end_matches('/');
        rest = rest[name_len..].trim_start();

        let mut value = String::new();
        if let Some(after_eq) = rest.strip_prefix('=') {
            let after_eq = after_eq.trim_start();
            if let Some(quote) = after_eq.chars().next().filter(|c| *c == '"' || *c == '\'') {
                let body = &after_eq[1..];
                let end = body.find(quote).unwrap_or(body.len());
                value = decode_html_entities(&body[..end]).into_owned();
                rest = body.get(end + 1..).unwrap_or("");
            } else {
                let end = after_eq
                    .find(|c: char| c.is_whitespace())
                    .unwrap_or(after_eq.len());
                value = decode_html_entities(&after_eq[..end]).into_owned();
                rest = &after_eq[end..];
            }
        }
        if !name.is_empty() {
            element.attrs.push((name.to_lowercase(), value));
        }
        rest = rest.trim_start();
    }

    (element, self_closing)
}

/// Extract the tag name from a close-tag token like `</span >`.
fn close_tag_name(token: &str) -> String {
    token
        .trim_start_matches("</")
        .trim_end_matches('>')
        .trim()
        .to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn roundtrip(input: &str) -> String {
        serialize(&parse_fragment(input))
    }

    #[test]
    fn parse_text_only() {
        let nodes = parse_fragment("hello world");
        assert_eq!(nodes, vec![Node::Text("hello world".into())]);
    }

    #[test]
    fn parse_decodes_entities() {
        let nodes = parse_fragment("a &amp; b");
        assert_eq!(nodes, vec![Node::Text("a & b".into())]);
    }

    #[test]
    fn serialize_reencodes_entities() {
        assert_eq!(roundtrip("a &amp; b"), "a &amp; b");
    }

    #[test]
    fn parse_nested_elements() {
        let nodes = parse_fragment("<span><b>hi</b></span>");
        let Node::Element(span) = &nodes[0] else {
            panic!("expected element");
        };
        assert_eq!(span.tag, "span");
        let Node::Element(b) = &span.children[0] else {
            panic!("expected nested element");
        };
        assert_eq!(b.tag, "b");
        assert_eq!(b.children, vec![Node::Text("hi".into())]);
    }

    #[test]
    fn parse_attributes_in_order() {
        let nodes = parse_fragment(r#"<a href="/x" title='q' hidden>t</a>"#);
        let Node::Element(a) = &nodes[0] else {
            panic!("expected element");
        };
        assert_eq!(
            a.attrs,
            vec![
                ("href".to_string(), "/x".to_string()),
                ("title".to_string(), "q".to_string()),
                ("hidden".to_string(), String::new()),
            ]
        );
    }

    #[test]
    fn unquoted_attribute_value() {
        let nodes = parse_fragment("<span style=color:red>t</span>");
        let Node::Element(el) = &nodes[0] else {
            panic!("expected element");
        };
        assert_eq!(el.attr("style"), Some("color:red"));
    }

    #[test]
    fn unclosed_element_auto_closes() {
        assert_eq!(roundtrip("<b>dangling"), "<b>dangling</b>");
    }

    #[test]
    fn unmatched_close_tag_is_dropped() {
        assert_eq!(roundtrip("text</b>more"), "textmore");
    }

    #[test]
    fn mismatched_nesting_closes_inner_elements() {
        // </span> implicitly closes the still-open <b>
        assert_eq!(roundtrip("<span><b>x</span>y"), "<span><b>x</b></span>y");
    }

    #[test]
    fn void_elements_take_no_children() {
        assert_eq!(roundtrip("a<br>b"), "a<br>b");
        assert_eq!(roundtrip("a<br/>b"), "a<br>b");
    }

    #[test]
    fn comments_pass_through() {
        assert_eq!(roundtrip("a<!-- keep -->b"), "a<!-- keep -->b");
    }

    #[test]
    fn stray_lt_becomes_text() {
        assert_eq!(roundtrip("1 < 2"), "1 &lt; 2");
    }

    #[test]
    fn serialize_escapes_attribute_values() {
        let mut el = Element::new("a");
        el.set_attr("href", "/q?a=1&b=\"2\"".to_string());
        let out = serialize(&[Node::Element(el)]);
        assert_eq!(out, r#"<a href="/q?a=1&amp;b=&quot;2&quot;"></a>"#);
    }

    #[test]
    fn serialize_parse_is_stable() {
        let cases = [
            r#"<span style="color: red">a <b>b</b></span> c"#,
            "plain &amp; <i>ital</i><br>tail",
            r#"<ul><li>one</li><li>two &lt; three</li></ul>"#,
        ];
        for case in cases {
            let once = roundtrip(case);
            let twice = serialize(&parse_fragment(&once));
            assert_eq!(once, twice, "unstable for {case:?}");
        }
    }

    #[test]
    fn set_and_remove_attr() {
        let mut el = Element::new("span");
        el.set_attr("style", "color:red".into());
        el.set_attr("style", "color:blue".into());
        assert_eq!(el.attr("style"), Some("color:blue"));
        el.remove_attr("style");
        assert_eq!(el.attr("style"), None);
    }
}
