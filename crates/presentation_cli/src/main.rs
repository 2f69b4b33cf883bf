//! Voxlate CLI
//!
//! Interactive text & voice translator: text-to-speech, text translation
//! with spoken playback, voice translation, and speech-to-text.

#![allow(clippy::print_stdout)]

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use application::{MenuLoop, TaskService};
use clap::Parser;
use infrastructure::{
    AppConfig, PlaybackAdapter, RecognizerAdapter, SpeechSynthesisAdapter, StdConsole,
    TranslationAdapter,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Voxlate CLI
#[derive(Debug, Parser)]
#[command(name = "voxlate")]
#[command(author, version, about = "Interactive text & voice translator", long_about = None)]
struct Cli {
    /// Verbosity level
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Configuration file (default: voxlate.toml in the working directory)
    #[arg(short, long)]
    config: Option<PathBuf>,
}

/// Determine log filter level from verbosity count
const fn log_filter_from_verbosity(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Set up logging based on verbosity
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        tracing_subscriber::EnvFilter::new(log_filter_from_verbosity(cli.verbose))
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    let config =
        AppConfig::load(cli.config.as_deref()).context("Failed to load configuration")?;

    let translation =
        TranslationAdapter::new(config.translate.clone()).context("Translation service setup")?;
    let synthesis =
        SpeechSynthesisAdapter::new(config.speech.clone()).context("Speech service setup")?;
    let recognizer = RecognizerAdapter::new(config.speech.clone(), config.listen.clone())
        .context("Speech service setup")?;

    let console = Arc::new(StdConsole::new());

    let service = TaskService::with_config(
        Arc::new(translation),
        Arc::new(synthesis),
        Arc::new(recognizer),
        Arc::new(PlaybackAdapter::new()),
        console.clone(),
        config.task_config(),
    );

    let menu = MenuLoop::new(service, console);
    menu.run().await?;

    Ok(())
}
