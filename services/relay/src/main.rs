mod config;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use avs_relay::types::AudioAnswer;
use avs_relay::{Client, FileDurationProbe};
use clap::{Parser, Subcommand};
use tracing_subscriber::fmt::time::ChronoLocal;

use crate::config::Config;

#[derive(Parser)]
#[command(version, about = "Relay spoken audio to the speech service and collect its answers")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Decode a captured response body and list its parts
    Decode {
        /// The response's Content-Type header value
        #[arg(long)]
        content_type: String,
        /// File holding the raw response body
        file: PathBuf,
    },
    /// Send audio (16 kHz mono L16) and save every spoken answer
    Recognize {
        /// File holding the audio to recognize
        audio: PathBuf,
        /// Directory the answers are written to
        #[arg(long, default_value = ".")]
        out: PathBuf,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env().context("Failed to load configuration")?;

    tracing_subscriber::fmt()
        .with_max_level(config.log_level)
        .with_timer(ChronoLocal::rfc_3339())
        .init();

    match Cli::parse().command {
        Command::Decode { content_type, file } => decode(&content_type, &file),
        Command::Recognize { audio, out } => recognize(&config, &audio, &out).await,
    }
}

fn decode(content_type: &str, file: &Path) -> Result<()> {
    let body = std::fs::read(file)
        .with_context(|| format!("Failed to read {}", file.display()))?;
    let parts = avs_relay::decode(content_type, body).context("Failed to decode response")?;

    for (index, part) in parts.iter().enumerate() {
        println!(
            "{index}\t{}\t{} bytes",
            part.content_type().unwrap_or("-"),
            part.body().len()
        );
    }
    Ok(())
}

async fn recognize(config: &Config, audio: &Path, out: &Path) -> Result<()> {
    let client = Client::new(
        avs_relay::Config::builder()
            .with_base_url(&config.base_url)
            .with_access_token(config.require_access_token()?)
            .build(),
    );

    let audio = std::fs::read(audio)
        .with_context(|| format!("Failed to read {}", audio.display()))?;
    let answers = client
        .answers(audio, &FileDurationProbe)
        .await
        .context("Failed to get answers")?;

    let stats = client.stats();
    tracing::info!(
        answers = answers.len(),
        requests = stats.requests(),
        continuations = stats.continuations(),
        "speech service replied"
    );

    for (index, answer) in answers.iter().enumerate() {
        let path = save_answer(out, index, answer)?;
        tracing::info!(duration_ms = answer.duration(), path = %path.display(), "saved answer");
    }
    Ok(())
}

fn save_answer(dir: &Path, index: usize, answer: &AudioAnswer) -> Result<PathBuf> {
    let path = dir.join(format!("answer-{index}.mp3"));
    std::fs::write(&path, answer.buffer())
        .with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(path)
}
