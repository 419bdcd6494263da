//! Transcript source boundary
//!
//! The summarizer does not know where transcripts come from. Callers hand
//! it text through a [`TranscriptSource`], which reports "no captions" as
//! `Ok(None)` rather than an error so the summarizer's empty-input path is
//! exercised naturally. Fetch failures (I/O, network in other
//! implementations) surface as [`TranscriptError`].

use async_trait::async_trait;
use std::path::PathBuf;
use thiserror::Error;
use tracing::{debug, warn};

/// Errors from a transcript source
#[derive(Debug, Error)]
pub enum TranscriptError {
    #[error("transcript store I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("transcript fetch failed: {0}")]
    Fetch(String),
}

/// Supplies raw transcript text for a video identifier.
///
/// `Ok(None)` means the video has no transcript (disabled captions, no
/// captions, or an upstream fetcher that came back empty); `Err` is
/// reserved for genuine fetch failures.
#[async_trait]
pub trait TranscriptSource: Send + Sync {
    async fn get_transcript(&self, video_id: &str) -> Result<Option<String>, TranscriptError>;
}

/// Transcript source backed by plain text files on disk.
///
/// Looks up `<video_id>.txt` under a base directory. Used by the CLI and
/// tests; network-backed fetchers live outside this crate.
#[derive(Debug, Clone)]
pub struct FileTranscriptSource {
    base_dir: PathBuf,
}

impl FileTranscriptSource {
    pub fn new<P: Into<PathBuf>>(base_dir: P) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    fn transcript_path(&self, video_id: &str) -> PathBuf {
        self.base_dir.join(format!("{}.txt", video_id))
    }
}

#[async_trait]
impl TranscriptSource for FileTranscriptSource {
    async fn get_transcript(&self, video_id: &str) -> Result<Option<String>, TranscriptError> {
        let path = self.transcript_path(video_id);
        if !path.exists() {
            debug!("No transcript file at {}", path.display());
            return Ok(None);
        }

        let content = tokio::fs::read_to_string(&path).await?;
        if content.trim().is_empty() {
            warn!("Transcript file {} is empty", path.display());
            return Ok(None);
        }
        Ok(Some(content))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_missing_file_is_none_not_error() {
        let source = FileTranscriptSource::new("/nonexistent/transcripts");
        let result = source.get_transcript("abc123").await.unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn test_transcript_path_layout() {
        let source = FileTranscriptSource::new("/data/transcripts");
        assert_eq!(
            source.transcript_path("dQw4w9WgXcQ"),
            PathBuf::from("/data/transcripts/dQw4w9WgXcQ.txt")
        );
    }
}
