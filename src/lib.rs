pub mod completion;
pub mod config;
pub mod error;
pub mod output;
pub mod pipeline;
pub mod prompt;
pub mod transcript;
pub mod youtube;

use serde::Serialize;

pub use error::SummarizeError;

const SHORT_LINK_HOST: &str = "youtu.be";
const LONG_FORM_HOST: &str = "youtube.com";
const VIDEO_QUERY_KEY: &str = "v=";

/// A single captioned segment
#[derive(Debug, Clone, Serialize)]
pub struct Segment {
    pub text: String,
    pub start: f64,
    pub duration: f64,
}

/// Complete transcript for a video
#[derive(Debug, Clone, Serialize)]
pub struct Transcript {
    pub video_id: String,
    pub title: String,
    pub language: String,
    pub segments: Vec<Segment>,
}

/// Platform video identifier as it appeared in the submitted URL
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct VideoId(String);

impl VideoId {
    pub fn new(id: impl Into<String>) -> Self {
        VideoId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Canonical watch page, used for the video link and the caption lookup
    pub fn watch_url(&self) -> String {
        format!("https://www.youtube.com/watch?v={}", self.0)
    }
}

impl std::fmt::Display for VideoId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Extract the video ID from a youtu.be or youtube.com URL.
///
/// Short links win over long-form URLs, and whatever substring the rule picks
/// is returned unvalidated (it may even be empty).
pub fn extract_video_id(url: &str) -> Option<VideoId> {
    if url.contains(SHORT_LINK_HOST) {
        let id = url.rsplit_once('/').map_or(url, |(_, id)| id);
        return Some(VideoId::new(id));
    }

    if url.contains(LONG_FORM_HOST) {
        let (_, rest) = url.split_once(VIDEO_QUERY_KEY)?;
        let id = rest.split_once('&').map_or(rest, |(id, _)| id);
        return Some(VideoId::new(id));
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(url: &str) -> Option<String> {
        extract_video_id(url).map(|v| v.as_str().to_string())
    }

    #[test]
    fn test_watch_url() {
        assert_eq!(
            id("https://www.youtube.com/watch?v=dQw4w9WgXcQ"),
            Some("dQw4w9WgXcQ".to_string())
        );
    }

    #[test]
    fn test_watch_url_with_extra_params() {
        assert_eq!(
            id("https://www.youtube.com/watch?v=dQw4w9WgXcQ&t=120"),
            Some("dQw4w9WgXcQ".to_string())
        );
        assert_eq!(id("https://youtube.com/watch?v=id123&foo=bar"), Some("id123".to_string()));
    }

    #[test]
    fn test_short_url() {
        assert_eq!(id("https://youtu.be/dQw4w9WgXcQ"), Some("dQw4w9WgXcQ".to_string()));
        assert_eq!(id("https://youtu.be/XYZ"), Some("XYZ".to_string()));
    }

    #[test]
    fn test_short_url_keeps_trailing_query() {
        assert_eq!(id("https://youtu.be/abc?t=42"), Some("abc?t=42".to_string()));
    }

    #[test]
    fn test_short_link_takes_precedence() {
        assert_eq!(
            id("https://youtu.be/first?next=https://www.youtube.com/watch?v=second"),
            Some("watch?v=second".to_string())
        );
    }

    #[test]
    fn test_empty_identifier_accepted() {
        assert_eq!(id("https://youtu.be/"), Some(String::new()));
        assert_eq!(id("https://www.youtube.com/watch?v=&t=1"), Some(String::new()));
    }

    #[test]
    fn test_long_form_without_query_key() {
        assert_eq!(id("https://www.youtube.com/@somechannel"), None);
    }

    #[test]
    fn test_invalid_url() {
        assert_eq!(id("not a url"), None);
        assert_eq!(id("https://vimeo.com/12345"), None);
        assert_eq!(id("dQw4w9WgXcQ"), None);
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(id(""), None);
    }

    #[test]
    fn test_watch_url_roundtrip() {
        let video = VideoId::new("dQw4w9WgXcQ");
        assert_eq!(video.watch_url(), "https://www.youtube.com/watch?v=dQw4w9WgXcQ");
        assert_eq!(video.to_string(), "dQw4w9WgXcQ");
    }
}
