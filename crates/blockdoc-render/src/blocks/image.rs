use blockdoc_engine::media::normalize_url;
use blockdoc_engine::schema::{HorizontalAlign, ImageData, Tunes};

use crate::markup::{attr, text};

pub(crate) fn render(out: &mut String, data: &ImageData, tunes: &Tunes) {
    let Some(url) = data.resolved_url() else {
        return;
    };

    let mut classes = String::from("bd-image");
    match data.alignment {
        Some(HorizontalAlign::Left) => classes.push_str(" bd-image-left"),
        Some(HorizontalAlign::Center) => classes.push_str(" bd-image-center"),
        Some(HorizontalAlign::Right) => classes.push_str(" bd-image-right"),
        None => {}
    }
    if data.stretched {
        classes.push_str(" bd-image-stretched");
    }
    if data.with_border {
        classes.push_str(" bd-image-border");
    }
    if data.with_background {
        classes.push_str(" bd-image-background");
    }

    let caption = data.caption.as_deref().filter(|c| !c.trim().is_empty());
    let alt = caption.unwrap_or("");
    let img = format!("<img src=\"{}\" alt=\"{}\">", attr(url), attr(alt));

    out.push_str(&format!("<figure class=\"{classes}\">"));
    match &tunes.link {
        Some(link) if !link.url.trim().is_empty() => {
            out.push_str(&format!(
                "<a href=\"{}\">{img}</a>",
                attr(&normalize_url(&link.url)),
            ));
        }
        _ => out.push_str(&img),
    }
    if let Some(caption) = caption {
        out.push_str(&format!("<figcaption>{}</figcaption>", text(caption)));
    }
    out.push_str("</figure>");
}
