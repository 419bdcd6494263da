//! JSON-oriented summary service
//!
//! The caller-facing wrapper around the summarization core: resolve a
//! transcript for a video id, summarize it, and report the outcome in a
//! structured response that distinguishes "no transcript available" from
//! "summarized" from "transcript too thin to summarize".

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::config::Config;
use crate::summarizer::{Summarizer, NOT_ENOUGH_CONTENT};
use crate::transcript::TranscriptSource;

/// Outcome of a summarize-video request
#[derive(Debug, Clone, PartialEq)]
pub enum SummaryOutcome {
    /// A non-degenerate summary was produced
    Summarized(String),
    /// The video has no transcript at all
    NoTranscript,
    /// A transcript exists but yields no scorable content
    InsufficientContent,
    /// The transcript source failed; distinct from an empty summary
    Unavailable(String),
}

/// Wire shape for summary responses
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummarizeResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub generated_at: DateTime<Utc>,
}

impl SummarizeResponse {
    fn success(summary: String) -> Self {
        Self {
            success: true,
            summary: Some(summary),
            message: None,
            generated_at: Utc::now(),
        }
    }

    fn failure(message: String) -> Self {
        Self {
            success: false,
            summary: None,
            message: Some(message),
            generated_at: Utc::now(),
        }
    }
}

impl From<SummaryOutcome> for SummarizeResponse {
    fn from(outcome: SummaryOutcome) -> Self {
        match outcome {
            SummaryOutcome::Summarized(summary) => Self::success(summary),
            SummaryOutcome::NoTranscript => {
                Self::failure("No transcript is available for this video.".to_string())
            }
            SummaryOutcome::InsufficientContent => Self::failure(NOT_ENOUGH_CONTENT.to_string()),
            SummaryOutcome::Unavailable(reason) => {
                Self::failure(format!("Could not summarize: {}", reason))
            }
        }
    }
}

/// Summarizes transcripts resolved through a [`TranscriptSource`]
pub struct SummaryService {
    summarizer: Summarizer,
    request_sentences: usize,
}

impl SummaryService {
    pub fn new(config: &Config) -> Self {
        Self {
            summarizer: Summarizer::with_config(config.summarizer.clone()),
            request_sentences: config.service.request_sentences,
        }
    }

    /// Resolve and summarize the transcript for `video_id`.
    ///
    /// Fetch failures are folded into [`SummaryOutcome::Unavailable`]; this
    /// method itself never errors.
    pub async fn summarize_video(
        &self,
        source: &dyn TranscriptSource,
        video_id: &str,
    ) -> SummaryOutcome {
        let transcript = match source.get_transcript(video_id).await {
            Ok(Some(text)) => text,
            Ok(None) => {
                info!("ℹ️ No transcript available for {}", video_id);
                return SummaryOutcome::NoTranscript;
            }
            Err(e) => {
                warn!("Transcript fetch failed for {}: {}", video_id, e);
                return SummaryOutcome::Unavailable(e.to_string());
            }
        };

        let summary = self
            .summarizer
            .summarize(&transcript, self.request_sentences);
        if summary.is_empty() || summary == NOT_ENOUGH_CONTENT {
            info!("ℹ️ Transcript for {} has too little content", video_id);
            return SummaryOutcome::InsufficientContent;
        }

        info!(
            "✅ Summarized {} ({} chars -> {} chars)",
            video_id,
            transcript.len(),
            summary.len()
        );
        SummaryOutcome::Summarized(summary)
    }

    /// Same as [`summarize_video`](Self::summarize_video), serialized to
    /// the wire response shape.
    pub async fn summarize_video_response(
        &self,
        source: &dyn TranscriptSource,
        video_id: &str,
    ) -> SummarizeResponse {
        self.summarize_video(source, video_id).await.into()
    }
}
