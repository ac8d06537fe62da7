//! Tokenizing HTML fragments with the [Logos] lexer generator.
//!
//! [Logos]: https://docs.rs/logos
//!
//! The important property is that **every byte of the input appears in
//! exactly one token** - nothing is skipped or discarded, so concatenating
//! token texts reproduces the fragment:
//!
//! ```
//! use blockdoc_engine::html::lexer::lex;
//!
//! let input = "Hello <b>world</b>!";
//! let tokens = lex(input);
//! let reconstructed: String = tokens.iter().map(|t| t.text).collect();
//! assert_eq!(input, reconstructed);
//! ```
//!
//! Tokens are whole-tag granular: an open tag (attributes and all) is one
//! token, parsed further by the tree builder. Anything that does not form a
//! recognizable tag degrades to text, never an error - fragments come from
//! paste pipelines and must always lex.

use logos::Logos;

#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(skip r"")]
pub enum TokenKind {
    /// An open (or self-closing) tag, e.g. `<span style="color:red">`.
    /// Quoted attribute values may contain `>` without ending the tag.
    #[regex(r#"<[a-zA-Z][a-zA-Z0-9-]*([^<>"']|"[^"]*"|'[^']*')*>"#)]
    OpenTag,

    /// A closing tag, e.g. `</span>`.
    #[regex(r"</[a-zA-Z][a-zA-Z0-9-]*[^<>]*>")]
    CloseTag,

    /// An HTML comment, kept verbatim through sanitization.
    #[regex(r"<!--([^-]|-[^-]|--[^>])*-->")]
    Comment,

    /// A run of characters containing no `<`.
    #[regex(r"[^<]+")]
    Text,

    /// A `<` that does not open a tag; treated as literal text downstream.
    #[token("<")]
    StrayLt,
}

/// A lexed token with its kind and text slice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: TokenKind,
    pub text: &'a str,
}

/// Lex a fragment into a sequence of tokens.
///
/// Guarantees that all bytes of the input appear in the output tokens.
pub fn lex(input: &str) -> Vec<Token<'_>> {
    let mut tokens = Vec::new();
    let mut lexer = TokenKind::lexer(input);

    while let Some(result) = lexer.next() {
        let text = lexer.slice();
        let kind = match result {
            Ok(kind) => kind,
            Err(()) => {
                // Unrecognized input is literal text, never an error
                TokenKind::Text
            }
        };
        tokens.push(Token { kind, text });
    }

    tokens
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn token(kind: TokenKind, text: &str) -> Token<'_> {
        Token { kind, text }
    }

    #[test]
    fn lex_empty_input() {
        assert_eq!(lex(""), vec![]);
    }

    #[test]
    fn lex_plain_text() {
        assert_eq!(lex("hello"), vec![token(TokenKind::Text, "hello")]);
    }

    #[test]
    fn lex_simple_element() {
        assert_eq!(
            lex("<b>hi</b>"),
            vec![
                token(TokenKind::OpenTag, "<b>"),
                token(TokenKind::Text, "hi"),
                token(TokenKind::CloseTag, "</b>"),
            ]
        );
    }

    #[test]
    fn lex_tag_with_attributes() {
        let tokens = lex(r#"<span style="color: red" class="x">t</span>"#);
        assert_eq!(
            tokens[0],
            token(TokenKind::OpenTag, r#"<span style="color: red" class="x">"#)
        );
    }

    #[test]
    fn lex_quoted_gt_stays_inside_tag() {
        let tokens = lex(r#"<a title="a > b">x</a>"#);
        assert_eq!(tokens[0], token(TokenKind::OpenTag, r#"<a title="a > b">"#));
        assert_eq!(tokens[1], token(TokenKind::Text, "x"));
    }

    #[test]
    fn lex_self_closing_tag() {
        assert_eq!(lex("<br/>"), vec![token(TokenKind::OpenTag, "<br/>")]);
    }

    #[test]
    fn lex_comment() {
        assert_eq!(
            lex("a<!-- note -->b"),
            vec![
                token(TokenKind::Text, "a"),
                token(TokenKind::Comment, "<!-- note -->"),
                token(TokenKind::Text, "b"),
            ]
        );
    }

    #[test]
    fn lex_stray_lt_is_not_a_tag() {
        assert_eq!(
            lex("1 < 2"),
            vec![
                token(TokenKind::Text, "1 "),
                token(TokenKind::StrayLt, "<"),
                token(TokenKind::Text, " 2"),
            ]
        );
    }

    #[test]
    fn all_bytes_preserved() {
        let input = r#"a <span style="font-size: 14px">styled <b>text</b></span> & more"#;
        let tokens = lex(input);
        let reconstructed: String = tokens.iter().map(|t| t.text).collect();
        assert_eq!(input, reconstructed);
    }

    #[test]
    fn all_bytes_preserved_pathological() {
        let input = "<<>< <b <i>>nested<//b> <!-- -- --> tail<";
        let tokens = lex(input);
        let reconstructed: String = tokens.iter().map(|t| t.text).collect();
        assert_eq!(input, reconstructed);
    }
}
