/// Character budget for the formatted transcript. The instruction text is not counted.
pub const MAX_TRANSCRIPT_CHARS: usize = 28_000;

const SUMMARY_INSTRUCTIONS: &str = "Summarize the following YouTube video transcript. \
Provide a concise summary, followed by key chapters along with start timestamps. \
The transcript includes timestamps for each text chunk.";

/// First `max_chars` characters of `text`; cuts through words and markers alike
pub fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

/// Embed the (truncated) formatted transcript into the summary instructions
pub fn build_prompt(formatted: &str, max_chars: usize) -> String {
    let transcript = truncate_chars(formatted, max_chars);
    format!("{SUMMARY_INSTRUCTIONS}\n\nTranscript:\n{transcript}\n\nSummary:\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_chars() {
        assert_eq!(truncate_chars("0123456789ABCDEF", 10), "0123456789");
        assert_eq!(truncate_chars("short", 10), "short");
        assert_eq!(truncate_chars("exact", 5), "exact");
        assert_eq!(truncate_chars("anything", 0), "");
    }

    #[test]
    fn test_truncate_counts_chars_not_bytes() {
        assert_eq!(truncate_chars("héllo wörld", 7), "héllo w");
        assert_eq!(truncate_chars("日本語のテキスト", 3), "日本語");
    }

    #[test]
    fn test_build_prompt_embeds_prefix_only() {
        let prompt = build_prompt("0123456789ABCDEF", 10);
        assert!(prompt.contains("Transcript:\n0123456789\n\nSummary:"));
        assert!(!prompt.contains("0123456789A"));
    }

    #[test]
    fn test_build_prompt_may_cut_markers() {
        let prompt = build_prompt("[00:00] a [01:05] b", 12);
        assert!(prompt.contains("Transcript:\n[00:00] a [0\n"));
    }

    #[test]
    fn test_build_prompt_instructions() {
        let prompt = build_prompt("[00:00] hello", MAX_TRANSCRIPT_CHARS);
        assert!(prompt.starts_with("Summarize the following YouTube video transcript."));
        assert!(prompt.contains("concise summary"));
        assert!(prompt.contains("key chapters along with start timestamps"));
        assert!(prompt.contains("transcript includes timestamps"));
        assert!(prompt.contains("[00:00] hello"));
    }

    #[test]
    fn test_budget_excludes_instruction_text() {
        let formatted = "x".repeat(MAX_TRANSCRIPT_CHARS + 500);
        let prompt = build_prompt(&formatted, MAX_TRANSCRIPT_CHARS);
        let embedded = prompt
            .split_once("Transcript:\n")
            .and_then(|(_, rest)| rest.split_once("\n\nSummary:"))
            .map(|(body, _)| body)
            .unwrap();
        assert_eq!(embedded.chars().count(), MAX_TRANSCRIPT_CHARS);
        assert!(prompt.chars().count() > MAX_TRANSCRIPT_CHARS);
    }
}
