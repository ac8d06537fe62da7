//! External-media URL parsing and link destination synthesis.
//!
//! The YouTube patterns are a centralized, versioned list: new URL shapes
//! get a new entry and a fixture row in the tests, so old shapes never
//! regress.

use std::sync::LazyLock;

use regex::Regex;

/// Known YouTube URL shapes, tried in order. Each pattern captures the
/// 11-character video id as group 1.
static YOUTUBE_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        // watch pages: youtube.com/watch?v=ID, with v possibly not first
        r"(?:youtube\.com|youtube-nocookie\.com)/watch\?(?:[^#\s]*&)?v=([A-Za-z0-9_-]{11})",
        // short links: youtu.be/ID
        r"youtu\.be/([A-Za-z0-9_-]{11})",
        // embed urls: youtube.com/embed/ID
        r"(?:youtube\.com|youtube-nocookie\.com)/embed/([A-Za-z0-9_-]{11})",
        // shorts: youtube.com/shorts/ID
        r"(?:youtube\.com|youtube-nocookie\.com)/shorts/([A-Za-z0-9_-]{11})",
    ]
    .into_iter()
    .map(|p| Regex::new(p).unwrap_or_else(|e| panic!("{e}")))
    .collect()
});

/// Extract the 11-character video id from a YouTube URL.
///
/// Returns `None` for anything that doesn't match a known shape; the
/// youtube block renders nothing in that case.
pub fn youtube_video_id(url: &str) -> Option<String> {
    YOUTUBE_PATTERNS
        .iter()
        .find_map(|pattern| pattern.captures(url))
        .and_then(|captures| captures.get(1))
        .map(|id| id.as_str().to_string())
}

/// Embed URL for a previously extracted video id.
pub fn youtube_embed_url(video_id: &str) -> String {
    format!("https://www.youtube.com/embed/{video_id}")
}

/// Normalize a user-entered link destination.
///
/// Site-relative paths (`/...`) and fragments (`#...`) pass through, as do
/// URLs that already carry a scheme. Bare domains get `https://` prepended.
pub fn normalize_url(url: &str) -> String {
    let url = url.trim();
    if url.is_empty()
        || url.starts_with('/')
        || url.starts_with('#')
        || url.starts_with("http://")
        || url.starts_with("https://")
        || url.starts_with("mailto:")
        || url.starts_with("tel:")
    {
        return url.to_string();
    }
    format!("https://{url}")
}

/// Synthesize a `wa.me` destination from a phone number and optional
/// message. Non-digit phone characters are stripped; without any digits
/// there is no destination.
pub fn whatsapp_link(phone: &str, message: &str) -> Option<String> {
    let digits: String = phone.chars().filter(char::is_ascii_digit).collect();
    if digits.is_empty() {
        return None;
    }
    if message.is_empty() {
        return Some(format!("https://wa.me/{digits}"));
    }
    Some(format!(
        "https://wa.me/{digits}?text={}",
        urlencoding::encode(message)
    ))
}
