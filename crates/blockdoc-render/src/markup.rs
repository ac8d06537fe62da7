//! Shared markup-building helpers.

use blockdoc_engine::html::inline_text_align;
use blockdoc_engine::schema::{Alignment, Tunes};

/// Escape for text content.
pub(crate) fn text(s: &str) -> String {
    html_escape::encode_text(s).into_owned()
}

/// Escape for a double-quoted attribute value.
pub(crate) fn attr(s: &str) -> String {
    html_escape::encode_double_quoted_attribute(s).into_owned()
}

/// Resolve a block's text alignment: the text-align tune wins, then the
/// fragment's own inline `text-align`, else none.
pub(crate) fn resolve_alignment(tunes: &Tunes, fragment: &str) -> Option<Alignment> {
    tunes.alignment().or_else(|| inline_text_align(fragment))
}

/// ` style="text-align:..."` for an optional alignment, or nothing.
pub(crate) fn text_align_style(alignment: Option<Alignment>) -> String {
    match alignment {
        Some(a) => format!(" style=\"text-align:{}\"", a.as_css()),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use blockdoc_engine::schema::TextAlignTune;
    use pretty_assertions::assert_eq;

    #[test]
    fn tune_wins_over_inline_style() {
        let tunes = Tunes {
            text_align: Some(TextAlignTune {
                alignment: Alignment::Right,
            }),
            ..Default::default()
        };
        let fragment = r#"<span style="text-align: center">x</span>"#;
        assert_eq!(resolve_alignment(&tunes, fragment), Some(Alignment::Right));
    }

    #[test]
    fn inline_style_is_the_fallback() {
        let tunes = Tunes::default();
        let fragment = r#"<span style="text-align: center">x</span>"#;
        assert_eq!(resolve_alignment(&tunes, fragment), Some(Alignment::Center));
    }

    #[test]
    fn no_alignment_renders_no_style() {
        assert_eq!(text_align_style(None), "");
        assert_eq!(
            text_align_style(Some(Alignment::Justify)),
            r#" style="text-align:justify""#
        );
    }
}
