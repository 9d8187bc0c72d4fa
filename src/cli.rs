use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Parser)]
#[command(
    name = "ytsum",
    about = "Summarize YouTube videos into a short overview with timestamped chapters",
    version = env!("GIT_DESCRIBE"),
)]
pub struct Cli {
    /// YouTube video URL (prompts interactively if omitted)
    pub url: Option<String>,

    /// Output format: text (default), json
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Preferred caption language [default: en]
    #[arg(short, long)]
    pub lang: Option<String>,

    /// Write the summary to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// LLM model for summarization [default: llama3.1-70b]
    #[arg(long)]
    pub model: Option<String>,

    /// Maximum transcript characters sent to the model [default: 28000]
    #[arg(long)]
    pub max_chars: Option<usize>,

    /// Show transcript and request details
    #[arg(short, long)]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_url_and_flags() {
        let cli = Cli::try_parse_from([
            "ytsum",
            "https://youtu.be/abc",
            "--format",
            "json",
            "--max-chars",
            "500",
            "-v",
        ])
        .unwrap();
        assert_eq!(cli.url.as_deref(), Some("https://youtu.be/abc"));
        assert_eq!(cli.format, OutputFormat::Json);
        assert_eq!(cli.max_chars, Some(500));
        assert!(cli.verbose);
        assert!(cli.model.is_none());
    }

    #[test]
    fn test_interactive_without_url() {
        let cli = Cli::try_parse_from(["ytsum"]).unwrap();
        assert!(cli.url.is_none());
        assert_eq!(cli.format, OutputFormat::Text);
    }
}
