use log::{debug, warn};
use serde::Serialize;

use crate::completion::{CompletionService, GenerationParams};
use crate::error::{Result, SummarizeError};
use crate::prompt::{MAX_TRANSCRIPT_CHARS, build_prompt};
use crate::transcript::normalize;
use crate::youtube::TranscriptService;
use crate::{VideoId, extract_video_id};

/// Progress notifications emitted while a request runs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage<'a> {
    VideoResolved(&'a VideoId),
    FetchingTranscript,
    Summarizing,
}

/// Result of one successful request
#[derive(Debug, Clone, Serialize)]
pub struct Summary {
    pub video_id: VideoId,
    pub title: String,
    pub model: String,
    pub summary: String,
    /// Length of the formatted transcript before truncation, in characters
    pub transcript_chars: usize,
    pub truncated: bool,
}

/// URL in, summary out. Holds no state between requests.
pub struct Summarizer<T, C> {
    transcripts: T,
    completions: C,
    params: GenerationParams,
    max_transcript_chars: usize,
}

impl<T: TranscriptService, C: CompletionService> Summarizer<T, C> {
    pub fn new(transcripts: T, completions: C, params: GenerationParams) -> Self {
        Self {
            transcripts,
            completions,
            params,
            max_transcript_chars: MAX_TRANSCRIPT_CHARS,
        }
    }

    pub fn with_max_transcript_chars(mut self, max_chars: usize) -> Self {
        self.max_transcript_chars = max_chars;
        self
    }

    /// Run the whole chain for one URL. Stops at the first failure; never retries.
    pub async fn summarize(&self, url: &str, on_stage: impl FnMut(Stage<'_>)) -> Result<Summary> {
        self.run(url, on_stage).await.inspect_err(|e| warn!("Request for {url:?} failed: {e}"))
    }

    async fn run(&self, url: &str, mut on_stage: impl FnMut(Stage<'_>)) -> Result<Summary> {
        let video_id = extract_video_id(url).ok_or_else(|| SummarizeError::InvalidUrl(url.to_string()))?;
        debug!("Resolved video ID {video_id:?} from {url}");
        on_stage(Stage::VideoResolved(&video_id));

        on_stage(Stage::FetchingTranscript);
        let transcript = self.transcripts.fetch_transcript(&video_id).await?;

        let formatted = normalize(&transcript.segments);
        if formatted.is_empty() {
            return Err(SummarizeError::TranscriptUnavailable {
                video_id: video_id.to_string(),
                reason: "transcript has no text".to_string(),
            });
        }

        let transcript_chars = formatted.chars().count();
        let truncated = transcript_chars > self.max_transcript_chars;
        if truncated {
            debug!(
                "Transcript truncated from {transcript_chars} to {} characters",
                self.max_transcript_chars
            );
        }
        let prompt = build_prompt(&formatted, self.max_transcript_chars);
        debug!("Prompt: {} characters, model {}", prompt.chars().count(), self.params.model);

        on_stage(Stage::Summarizing);
        let summary = self.completions.complete(&prompt, &self.params).await?;

        Ok(Summary {
            video_id,
            title: transcript.title,
            model: self.params.model.clone(),
            summary,
            transcript_chars,
            truncated,
        })
    }
}
