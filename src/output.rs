use crate::pipeline::Summary;

/// Render the summary for the terminal
pub fn render_text(summary: &Summary) -> String {
    let mut out = String::new();
    if !summary.title.is_empty() {
        out.push_str(&format!("# {}\n\n", summary.title));
    }
    out.push_str("Summary and Key Chapters:\n\n");
    out.push_str(summary.summary.trim_end());
    out
}

/// Render the summary as pretty-printed JSON
pub fn render_json(summary: &Summary) -> String {
    serde_json::to_string_pretty(summary).unwrap_or_else(|e| format!("{{\"error\": \"{e}\"}}"))
}
