use crate::Segment;

/// Format seconds as a zero-padded MM:SS timestamp (minutes are not capped at 59)
pub fn format_timestamp(seconds: f64) -> String {
    let mins = (seconds / 60.0).floor() as u64;
    let secs = (seconds % 60.0).floor() as u64;
    format!("{mins:02}:{secs:02}")
}

/// Flatten segments into one line with a `[MM:SS]` marker before each text chunk
pub fn normalize(segments: &[Segment]) -> String {
    let mut formatted = String::new();
    for seg in segments {
        formatted.push('[');
        formatted.push_str(&format_timestamp(seg.start));
        formatted.push_str("] ");
        formatted.push_str(&seg.text);
        formatted.push(' ');
    }
    formatted.trim().to_string()
}
