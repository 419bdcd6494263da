use anyhow::Result;
use clap::{Arg, Command};
use std::path::PathBuf;
use tracing::{info, warn};

use transcript_summarizer::{
    Config, FileTranscriptSource, ScoringStrategy, Summarizer, SummaryService,
};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter("transcript_summarizer=info,warn")
        .init();

    let matches = Command::new("Transcript Summarizer")
        .version("0.1.0")
        .about("Extractive summarization of video transcripts")
        .arg(
            Arg::new("file")
                .short('f')
                .long("file")
                .value_name("FILE")
                .help("Transcript text file to summarize"),
        )
        .arg(
            Arg::new("video-id")
                .short('i')
                .long("video-id")
                .value_name("ID")
                .help("Video id resolved against the transcript directory"),
        )
        .arg(
            Arg::new("transcript-dir")
                .short('d')
                .long("transcript-dir")
                .value_name("DIR")
                .help("Directory holding <video_id>.txt transcript files"),
        )
        .arg(
            Arg::new("sentences")
                .short('n')
                .long("sentences")
                .value_name("NUM")
                .help("Number of sentences in the summary")
                .default_value("5"),
        )
        .arg(
            Arg::new("strategy")
                .short('s')
                .long("strategy")
                .value_name("STRATEGY")
                .help("Scoring strategy: frequency-sum or graph-centrality"),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .help("Emit the JSON response shape instead of plain text")
                .action(clap::ArgAction::SetTrue),
        )
        .get_matches();

    let num_sentences: usize = matches
        .get_one::<String>("sentences")
        .map(|s| s.as_str())
        .unwrap_or("5")
        .parse()?;
    let as_json = matches.get_flag("json");

    // Load configuration
    let mut config = Config::load().unwrap_or_else(|e| {
        warn!("Failed to load config, using defaults: {}", e);
        Config::default()
    });
    if let Some(strategy) = matches.get_one::<String>("strategy") {
        config.summarizer.strategy = strategy.parse::<ScoringStrategy>()?;
    }
    config.service.request_sentences = num_sentences;
    config.validate()?;

    match (
        matches.get_one::<String>("file"),
        matches.get_one::<String>("video-id"),
    ) {
        (Some(file), _) => {
            let path = PathBuf::from(file);
            info!("📄 Summarizing transcript file: {}", path.display());
            let text = tokio::fs::read_to_string(&path).await?;

            let summarizer = Summarizer::with_config(config.summarizer.clone());
            let summary = summarizer.summarize(&text, num_sentences);
            info!(
                "✅ Summarized {} chars into {} chars",
                text.len(),
                summary.len()
            );
            println!("{}", summary);
        }
        (None, Some(video_id)) => {
            let dir = matches
                .get_one::<String>("transcript-dir")
                .cloned()
                .unwrap_or_else(|| config.service.transcript_dir.clone());
            info!("🎬 Summarizing video {} from {}", video_id, dir);

            let source = FileTranscriptSource::new(dir);
            let service = SummaryService::new(&config);
            let response = service.summarize_video_response(&source, video_id).await;

            if as_json {
                println!("{}", serde_json::to_string_pretty(&response)?);
            } else if let Some(summary) = response.summary {
                println!("{}", summary);
            } else {
                println!("{}", response.message.unwrap_or_default());
            }
        }
        (None, None) => {
            return Err(anyhow::anyhow!(
                "Provide either --file or --video-id (see --help)"
            ));
        }
    }

    Ok(())
}
