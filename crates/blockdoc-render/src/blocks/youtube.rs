use blockdoc_engine::media::{youtube_embed_url, youtube_video_id};
use blockdoc_engine::schema::YoutubeData;

use crate::markup::{attr, text};

pub(crate) fn render(out: &mut String, data: &YoutubeData) {
    // No recognizable video id means no embed at all, never a broken frame.
    let Some(id) = youtube_video_id(&data.url) else {
        return;
    };

    out.push_str("<figure class=\"bd-youtube\">");
    out.push_str(&format!(
        concat!(
            "<div class=\"bd-youtube-frame\" ",
            "style=\"position:relative;padding-bottom:56.25%\">",
            "<iframe src=\"{src}\" ",
            "style=\"position:absolute;top:0;left:0;width:100%;height:100%\" ",
            "frameborder=\"0\" allowfullscreen></iframe>",
            "</div>"
        ),
        src = attr(&youtube_embed_url(&id)),
    ));
    if let Some(caption) = data.caption.as_deref().filter(|c| !c.trim().is_empty()) {
        out.push_str(&format!("<figcaption>{}</figcaption>", text(caption)));
    }
    out.push_str("</figure>");
}
