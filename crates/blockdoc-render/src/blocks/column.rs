use blockdoc_engine::media::{normalize_url, youtube_embed_url, youtube_video_id};
use blockdoc_engine::schema::{ColumnData, ImagePosition};

use crate::markup::{attr, text};
use crate::readmore;
use crate::RenderOptions;

pub(crate) fn render(out: &mut String, data: &ColumnData, opts: &RenderOptions) {
    let media = media_pane(data);
    let has_text = !data.heading.trim().is_empty()
        || !data.description.trim().is_empty()
        || data.points.iter().any(|p| !p.trim().is_empty())
        || cta(data).is_some();
    if media.is_none() && !has_text {
        return;
    }

    // Media-left is the breakout layout (full-bleed background); both
    // positions carry an explicit modifier so the markup states the layout
    let mut classes = String::from("bd-column");
    match data.image_position {
        ImagePosition::Left => classes.push_str(" bd-column-breakout"),
        ImagePosition::Right => classes.push_str(" bd-column-media-right"),
    }
    out.push_str(&format!("<section class=\"{classes}\">"));

    if let Some(media) = media {
        out.push_str(&format!("<div class=\"bd-column-media\">{media}</div>"));
    }

    out.push_str("<div class=\"bd-column-body\">");
    if !data.heading.trim().is_empty() {
        out.push_str(&format!(
            "<h3 class=\"bd-column-heading\">{}</h3>",
            data.heading,
        ));
    }
    if !data.description.trim().is_empty() {
        readmore::expandable(
            out,
            "div",
            "bd-column-description",
            "",
            &data.description,
            opts.description_preview_words,
        );
    }
    let points: Vec<&String> = data.points.iter().filter(|p| !p.trim().is_empty()).collect();
    if !points.is_empty() {
        out.push_str("<ul class=\"bd-column-points\">");
        for point in points {
            out.push_str(&format!("<li>{}</li>", text(point)));
        }
        out.push_str("</ul>");
    }
    if let Some((label, url)) = cta(data) {
        out.push_str(&format!(
            "<a class=\"bd-column-cta\" href=\"{}\">{}</a>",
            attr(&normalize_url(url)),
            text(label),
        ));
    }
    out.push_str("</div></section>");
}

/// The media pane markup: an image wins over a YouTube embed, and an
/// unrecognizable YouTube URL leaves the pane out entirely.
fn media_pane(data: &ColumnData) -> Option<String> {
    if let Some(url) = data.image_url.as_deref().filter(|u| !u.trim().is_empty()) {
        return Some(format!(
            "<img class=\"bd-column-image\" src=\"{}\" alt=\"\">",
            attr(url),
        ));
    }
    let url = data.youtube_url.as_deref()?;
    let id = youtube_video_id(url)?;
    Some(format!(
        concat!(
            "<div class=\"bd-column-video\" ",
            "style=\"position:relative;padding-bottom:56.25%\">",
            "<iframe src=\"{src}\" ",
            "style=\"position:absolute;top:0;left:0;width:100%;height:100%\" ",
            "frameborder=\"0\" allowfullscreen></iframe>",
            "</div>"
        ),
        src = attr(&youtube_embed_url(&id)),
    ))
}

fn cta(data: &ColumnData) -> Option<(&str, &str)> {
    let label = data.cta_text.as_deref().filter(|t| !t.trim().is_empty())?;
    let url = data.cta_url.as_deref().filter(|u| !u.trim().is_empty())?;
    Some((label, url))
}
