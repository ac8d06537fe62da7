use blockdoc_engine::schema::ContentCardsData;

use crate::markup::{attr, text};

pub(crate) fn render(out: &mut String, data: &ContentCardsData) {
    if data.cards.is_empty() {
        return;
    }
    out.push_str(&format!(
        concat!(
            "<div class=\"bd-cards\" ",
            "style=\"display:grid;grid-template-columns:repeat({n},1fr)\">"
        ),
        n = data.cards_per_row,
    ));
    for card in &data.cards {
        out.push_str("<div class=\"bd-card\">");
        if !card.icon.trim().is_empty() {
            let alt = card.icon_alt_text.as_deref().unwrap_or("");
            out.push_str(&format!(
                "<img class=\"bd-card-icon\" src=\"{}\" alt=\"{}\">",
                attr(&card.icon),
                attr(alt),
            ));
        }
        if !card.heading.trim().is_empty() {
            out.push_str(&format!(
                "<h4 class=\"bd-card-heading\">{}</h4>",
                text(&card.heading),
            ));
        }
        if !card.description.trim().is_empty() {
            out.push_str(&format!(
                "<p class=\"bd-card-description\">{}</p>",
                text(&card.description),
            ));
        }
        out.push_str("</div>");
    }
    out.push_str("</div>");
}
