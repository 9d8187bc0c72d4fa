use thiserror::Error;

/// Failure kinds of a single summarization request, plus the one startup failure.
#[derive(Debug, Error)]
pub enum SummarizeError {
    #[error("invalid YouTube URL: {0}")]
    InvalidUrl(String),

    #[error("transcript unavailable for video {video_id}: {reason}")]
    TranscriptUnavailable { video_id: String, reason: String },

    #[error("summarization failed: {0}")]
    CompletionFailed(String),

    #[error("missing API key: {env_var} environment variable is not set")]
    ConfigurationMissing { env_var: String },
}

impl SummarizeError {
    /// Bad input or a video without captions; the user can just try another URL.
    pub fn is_warning(&self) -> bool {
        matches!(
            self,
            SummarizeError::InvalidUrl(_) | SummarizeError::TranscriptUnavailable { .. }
        )
    }

    /// Short message shown to the user in place of a summary
    pub fn user_message(&self) -> String {
        match self {
            SummarizeError::InvalidUrl(_) => "Invalid YouTube URL. Please enter a valid URL.".to_string(),
            SummarizeError::TranscriptUnavailable { .. } => {
                "Couldn't fetch the transcript. Please try another video.".to_string()
            }
            SummarizeError::CompletionFailed(reason) => format!("Error in summarization: {reason}"),
            SummarizeError::ConfigurationMissing { .. } => self.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, SummarizeError>;
