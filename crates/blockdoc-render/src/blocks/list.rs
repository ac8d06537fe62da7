use blockdoc_engine::schema::{ListData, ListStyle, Tunes};

use crate::markup::text_align_style;

pub(crate) fn render(out: &mut String, data: &ListData, tunes: &Tunes) {
    if data.items.is_empty() {
        return;
    }
    let (tag, variant) = match data.style {
        ListStyle::Ordered => ("ol", "bd-list-ordered"),
        ListStyle::Unordered => ("ul", "bd-list-unordered"),
    };
    let style = text_align_style(tunes.alignment());
    out.push_str(&format!("<{tag} class=\"bd-list {variant}\"{style}>"));
    for item in &data.items {
        out.push_str("<li>");
        out.push_str(item);
        out.push_str("</li>");
    }
    out.push_str(&format!("</{tag}>"));
}
