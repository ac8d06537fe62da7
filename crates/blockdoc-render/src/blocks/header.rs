use blockdoc_engine::schema::{HeaderData, Tunes, MAX_HEADER_LEVEL, MIN_HEADER_LEVEL};

use crate::markup::{resolve_alignment, text_align_style};

pub(crate) fn render(out: &mut String, data: &HeaderData, tunes: &Tunes) {
    if data.text.trim().is_empty() {
        return;
    }
    // Decode normalizes the level, but a hand-built document may not have
    // passed through it
    let level = data.level.clamp(MIN_HEADER_LEVEL, MAX_HEADER_LEVEL);
    let style = text_align_style(resolve_alignment(tunes, &data.text));
    out.push_str(&format!(
        "<h{level} class=\"bd-header bd-header-{level}\"{style}>{text}</h{level}>",
        text = data.text,
    ));
}
