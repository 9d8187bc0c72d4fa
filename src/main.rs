use std::io::{self, BufRead, IsTerminal, Write};
use std::path::PathBuf;
use std::time::Duration;

use console::style;
use eyre::Result;
use indicatif::{ProgressBar, ProgressStyle};
use log::{debug, info};

use ytsum::SummarizeError;
use ytsum::completion::{API_KEY_ENV, ChatCompletionsClient, DEFAULT_API_URL, DEFAULT_MODEL, GenerationParams};
use ytsum::config::{Config, config_path};
use ytsum::pipeline::{Stage, Summarizer, Summary};
use ytsum::prompt::MAX_TRANSCRIPT_CHARS;
use ytsum::youtube::YouTubeCaptions;

mod cli;

use cli::{Cli, OutputFormat};

const DEFAULT_LANG: &str = "en";

fn setup_logging() -> Result<()> {
    let log_dir = log_dir();
    std::fs::create_dir_all(&log_dir)?;
    let log_file = log_dir.join("ytsum.log");

    let target = Box::new(std::fs::OpenOptions::new().create(true).append(true).open(&log_file)?);

    env_logger::Builder::from_default_env()
        .target(env_logger::Target::Pipe(target))
        .init();

    info!("Logging initialized: {}", log_file.display());
    Ok(())
}

fn log_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("ytsum")
        .join("logs")
}

fn build_after_help() -> String {
    let key_set = std::env::var(API_KEY_ENV).is_ok_and(|v| !v.trim().is_empty());

    let key_line = if key_set {
        format!("  \x1b[32m✅\x1b[0m {API_KEY_ENV}")
    } else {
        format!("  \x1b[31m❌\x1b[0m {API_KEY_ENV}  (not set, or use api_key in the config file)")
    };

    format!(
        "\nREQUIRED SECRETS:\n{key_line}\n\nConfig file: {}\nLogs are written to: {}",
        config_path().display(),
        log_dir().join("ytsum.log").display()
    )
}

fn create_spinner(msg: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .tick_chars("⠁⠂⠄⡀⢀⠠⠐⠈ ")
            .template("{spinner:.cyan} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    pb.set_message(msg.to_string());
    pb.enable_steady_tick(Duration::from_millis(80));
    pb
}

/// Terminal front end: one URL per submission, one rendered response per URL
struct Shell {
    summarizer: Summarizer<YouTubeCaptions, ChatCompletionsClient>,
    format: OutputFormat,
    output: Option<PathBuf>,
    verbose: bool,
}

impl Shell {
    /// Run one request to completion. Returns false if it ended in a warning or error.
    async fn submit(&self, url: &str) -> bool {
        let mut spinner: Option<ProgressBar> = None;

        let result = self
            .summarizer
            .summarize(url, |stage| match stage {
                Stage::VideoResolved(video_id) => {
                    eprintln!("\n{} {}", style("▶ Video:").cyan().bold(), video_id.watch_url());
                }
                Stage::FetchingTranscript => {
                    spinner = Some(create_spinner("Fetching transcript..."));
                }
                Stage::Summarizing => {
                    if let Some(pb) = spinner.take() {
                        pb.finish_and_clear();
                    }
                    spinner = Some(create_spinner("Summarizing video..."));
                }
            })
            .await;

        if let Some(pb) = spinner.take() {
            pb.finish_and_clear();
        }

        match result {
            Ok(summary) => match self.emit(&summary) {
                Ok(()) => true,
                Err(e) => {
                    eprintln!("{} could not write summary: {e}", style("Error:").red().bold());
                    false
                }
            },
            Err(e) => {
                self.report(&e);
                false
            }
        }
    }

    fn emit(&self, summary: &Summary) -> Result<()> {
        if self.verbose {
            eprintln!(
                "Title: {}\nModel: {}\nTranscript: {} characters{}",
                summary.title,
                summary.model,
                summary.transcript_chars,
                if summary.truncated { " (truncated)" } else { "" },
            );
        }

        let rendered = match self.format {
            OutputFormat::Text => ytsum::output::render_text(summary),
            OutputFormat::Json => ytsum::output::render_json(summary),
        };

        if let Some(ref path) = self.output {
            std::fs::write(path, &rendered)?;
            eprintln!("Summary written to: {}", path.display());
        } else {
            println!("\n{rendered}");
        }
        Ok(())
    }

    fn report(&self, err: &SummarizeError) {
        if err.is_warning() {
            eprintln!("{} {}", style("Warning:").yellow().bold(), err.user_message());
            if self.verbose {
                eprintln!("  {err}");
            }
        } else {
            eprintln!("{} {}", style("Error:").red().bold(), err.user_message());
        }
    }

    /// Prompt on a terminal, otherwise read one URL per line until EOF
    async fn interactive(&self) -> Result<()> {
        let stdin = io::stdin();
        let prompt = stdin.is_terminal();

        if prompt {
            eprintln!("{}", style("YouTube Video Summarizer").cyan().bold());
        }

        let mut lines = stdin.lock().lines();
        loop {
            if prompt {
                eprint!("\nEnter YouTube Video URL: ");
                io::stderr().flush()?;
            }

            let Some(line) = lines.next() else {
                break;
            };
            let line = line?;
            let url = line.trim();
            if url.is_empty() {
                continue;
            }

            self.submit(url).await;
        }

        Ok(())
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    setup_logging()?;

    let after_help = build_after_help();
    let cmd = <Cli as clap::CommandFactory>::command().after_help(after_help);
    let matches = cmd.get_matches();
    let cli = <Cli as clap::FromArgMatches>::from_arg_matches(&matches)?;

    // Load config file (non-fatal if missing/invalid)
    let config = Config::load().unwrap_or_else(|e| {
        debug!("Ignoring unreadable config: {e}");
        Config::default()
    });

    if cli.verbose {
        let path = config_path();
        if path.exists() {
            eprintln!("Config: {}", path.display());
        }
    }

    // No requests are accepted without a key
    let api_key = match config.api_key() {
        Ok(key) => key,
        Err(e) => {
            eprintln!("{} {e}", style("Error:").red().bold());
            std::process::exit(1);
        }
    };

    // CLI flags take priority over the config file
    let lang = cli
        .lang
        .clone()
        .or_else(|| config.default_lang.clone())
        .unwrap_or_else(|| DEFAULT_LANG.to_string());
    let model = cli
        .model
        .clone()
        .or_else(|| config.default_model.clone())
        .unwrap_or_else(|| DEFAULT_MODEL.to_string());
    let api_url = config.api_url.clone().unwrap_or_else(|| DEFAULT_API_URL.to_string());
    let max_chars = cli
        .max_chars
        .or(config.max_transcript_chars)
        .unwrap_or(MAX_TRANSCRIPT_CHARS);

    info!("Using model {model} at {api_url}, caption language {lang}, transcript budget {max_chars}");

    let client = reqwest::Client::new();
    let summarizer = Summarizer::new(
        YouTubeCaptions::new(client.clone(), lang),
        ChatCompletionsClient::new(client, api_url, api_key),
        GenerationParams::for_model(model),
    )
    .with_max_transcript_chars(max_chars);

    let shell = Shell {
        summarizer,
        format: cli.format,
        output: cli.output.clone(),
        verbose: cli.verbose,
    };

    match cli.url.as_deref() {
        Some(url) => {
            if !shell.submit(url.trim()).await {
                std::process::exit(1);
            }
            Ok(())
        }
        None => shell.interactive().await,
    }
}
