//! Rendering must degrade, never fail: unknown types and unusable media
//! drop out of the output without disturbing their neighbors.

use blockdoc_engine::schema::Document;
use blockdoc_engine::store::StoredContent;
use blockdoc_render::{render, render_stored, render_with, RenderOptions};
use pretty_assertions::assert_eq;

fn doc(json: &str) -> Document {
    serde_json::from_str(json).unwrap()
}

#[test]
fn unknown_block_types_are_skipped_silently() {
    let doc = doc(
        r#"{"blocks":[
            {"type":"paragraph","data":{"text":"before"}},
            {"type":"futureBlock","data":{"shiny":true}},
            {"type":"paragraph","data":{"text":"after"}}]}"#,
    );
    assert_eq!(
        render(&doc),
        concat!(
            r#"<p class="bd-paragraph">before</p>"#,
            r#"<p class="bd-paragraph">after</p>"#
        )
    );
}

#[test]
fn unrecognizable_youtube_url_renders_nothing() {
    let doc = doc(
        r#"{"blocks":[{"type":"youtube","data":{"url":"https://example.com/clip"}}]}"#,
    );
    assert_eq!(render(&doc), "");
}

#[test]
fn image_without_any_url_renders_nothing() {
    let doc = doc(r#"{"blocks":[{"type":"image","data":{"caption":"orphan"}}]}"#);
    assert_eq!(render(&doc), "");
}

#[test]
fn cta_without_destination_renders_nothing() {
    let doc = doc(
        r#"{"blocks":[
            {"type":"cta","data":{"text":"Chat","type":"whatsapp","phone":"ext."}},
            {"type":"cta","data":{"text":"Go","type":"url"}}]}"#,
    );
    assert_eq!(render(&doc), "");
}

#[test]
fn legacy_html_passes_through_verbatim() {
    let raw = "<p>old <font face=\"Arial\">page</font></p>";
    let content = StoredContent::LegacyHtml(raw.to_string());
    assert_eq!(render_stored(&content), raw);
}

#[test]
fn long_paragraph_collapses_to_a_preview() {
    let words: Vec<String> = (1..=61).map(|i| format!("w{i}")).collect();
    let doc = doc(&format!(
        r#"{{"blocks":[{{"type":"paragraph","data":{{"text":"{}"}}}}]}}"#,
        words.join(" ")
    ));
    let html = render(&doc);
    assert!(html.contains(r#"<div class="bd-read-more" data-expanded="false">"#));
    assert!(html.contains("Read more"));
    assert!(html.contains("w61"));

    let shorter = RenderOptions {
        paragraph_preview_words: 61,
        ..Default::default()
    };
    assert!(!render_with(&doc, &shorter).contains("Read more"));
}

#[test]
fn column_description_uses_its_own_threshold() {
    let words: Vec<String> = (1..=21).map(|i| format!("w{i}")).collect();
    let doc = doc(&format!(
        r#"{{"blocks":[{{"type":"column","data":{{"heading":"H","description":"{}"}}}}]}}"#,
        words.join(" ")
    ));
    let html = render(&doc);
    assert!(html.contains("bd-column-description bd-read-more-preview"));
    assert!(html.contains("Read more"));
}
