use blockdoc_engine::html::inline_text_align;
use blockdoc_engine::schema::{TableData, Tunes};

use crate::markup::text_align_style;

pub(crate) fn render(out: &mut String, data: &TableData, tunes: &Tunes) {
    if data.content.is_empty() {
        return;
    }
    out.push_str("<div class=\"bd-table-wrap\"><table class=\"bd-table\">");
    for (row_index, row) in data.content.iter().enumerate() {
        let (section_open, section_close, cell_tag) = if row_index == 0 {
            ("<thead><tr>", "</tr></thead>", "th")
        } else {
            ("<tr>", "</tr>", "td")
        };
        if row_index == 1 {
            out.push_str("<tbody>");
        }
        out.push_str(section_open);
        for cell in row {
            // A cell's own inline alignment wins over the block tune.
            let alignment = inline_text_align(cell).or_else(|| tunes.alignment());
            let style = text_align_style(alignment);
            out.push_str(&format!("<{cell_tag}{style}>{cell}</{cell_tag}>"));
        }
        out.push_str(section_close);
    }
    if data.content.len() > 1 {
        out.push_str("</tbody>");
    }
    out.push_str("</table></div>");
}
