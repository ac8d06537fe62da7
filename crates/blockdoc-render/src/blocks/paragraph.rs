use blockdoc_engine::schema::{ParagraphData, Tunes};

use crate::markup::{resolve_alignment, text_align_style};
use crate::readmore;
use crate::RenderOptions;

pub(crate) fn render(out: &mut String, data: &ParagraphData, tunes: &Tunes, opts: &RenderOptions) {
    if data.text.trim().is_empty() {
        return;
    }
    let style = text_align_style(resolve_alignment(tunes, &data.text));
    readmore::expandable(
        out,
        "p",
        "bd-paragraph",
        &style,
        &data.text,
        opts.paragraph_preview_words,
    );
}
