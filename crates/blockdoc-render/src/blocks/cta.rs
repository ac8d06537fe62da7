use blockdoc_engine::media::{normalize_url, whatsapp_link};
use blockdoc_engine::schema::{CtaData, CtaKind, HorizontalAlign, LinkTarget};

use crate::markup::{attr, text};

pub(crate) fn render(out: &mut String, data: &CtaData) {
    let Some(href) = destination(data) else {
        return;
    };
    if data.text.trim().is_empty() {
        return;
    }

    let justify = match data.align {
        Some(HorizontalAlign::Center) => "center",
        Some(HorizontalAlign::Right) => "flex-end",
        Some(HorizontalAlign::Left) | None => "flex-start",
    };
    let target = match data.target {
        Some(LinkTarget::Blank) => " target=\"_blank\" rel=\"noopener noreferrer\"",
        Some(LinkTarget::SelfWindow) | None => "",
    };

    out.push_str(&format!(
        concat!(
            "<div class=\"bd-cta\" style=\"display:flex;justify-content:{justify}\">",
            "<a class=\"bd-cta-button\" href=\"{href}\"{target}>{label}</a>",
            "</div>"
        ),
        justify = justify,
        href = attr(&href),
        target = target,
        label = text(&data.text),
    ));
}

/// The link the button points at. WhatsApp CTAs synthesize a `wa.me` URL
/// from the phone number; plain CTAs normalize whatever URL was typed.
fn destination(data: &CtaData) -> Option<String> {
    match data.kind {
        CtaKind::Whatsapp => {
            let phone = data.phone.as_deref()?;
            whatsapp_link(phone, data.message.as_deref().unwrap_or(""))
        }
        CtaKind::Url => {
            let url = data.url.as_deref().filter(|u| !u.trim().is_empty())?;
            Some(normalize_url(url))
        }
    }
}
