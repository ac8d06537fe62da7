//! Word-limited previews with a user-toggleable expand affordance.
//!
//! Truncation operates on the word count of the text-only projection and
//! never cuts mid-tag (the engine's `truncate_words` owns that contract).
//! Within the limit, the fragment renders in full with no affordance.

use blockdoc_engine::html::truncate_words;

/// Render `fragment` inside `<tag class...>`, collapsing to a preview when
/// it exceeds `limit` words. `style_attr` is either empty or a full
/// ` style="..."` attribute.
pub(crate) fn expandable(
    out: &mut String,
    tag: &str,
    class: &str,
    style_attr: &str,
    fragment: &str,
    limit: usize,
) {
    let Some(preview) = truncate_words(fragment, limit) else {
        out.push_str(&format!(
            "<{tag} class=\"{class}\"{style_attr}>{fragment}</{tag}>"
        ));
        return;
    };

    out.push_str(&format!(
        concat!(
            "<div class=\"bd-read-more\" data-expanded=\"false\">",
            "<{tag} class=\"{class} bd-read-more-preview\"{style}>{preview}\u{2026} ",
            "<button type=\"button\" class=\"bd-read-more-toggle\">Read more</button>",
            "</{tag}>",
            "<{tag} class=\"{class} bd-read-more-full\"{style} hidden>{full} ",
            "<button type=\"button\" class=\"bd-read-more-toggle\">Read less</button>",
            "</{tag}>",
            "</div>"
        ),
        tag = tag,
        class = class,
        style = style_attr,
        preview = preview,
        full = fragment,
    ));
}
