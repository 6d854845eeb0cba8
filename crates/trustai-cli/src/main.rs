//! TrustAI terminal entry point.
//!
//! Bare invocation opens the interactive REPL; the `--text`, `--url`,
//! `--file`, and `--image` flags run a single analysis and print the
//! plain-text report to stdout.

mod controller;
mod helper;
mod render;
mod repl;

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context as _;
use clap::{ArgGroup, Parser};
use tracing::warn;
use tracing_subscriber::EnvFilter;
use trustai_core::dictation::VoiceTransport;
use trustai_core::input::AnalysisInput;
use trustai_core::service::ContentAnalyzer;
use trustai_infrastructure::{
    AppConfig, ConfigStorage, HistoryStore, InputLoader, StateStore, report_export,
    storage::SecretStorage,
};
use trustai_interaction::{
    GeminiAnalyzer, GeminiClient, GeminiNavigator, GeminiReportChat, ProcessVoiceTransport,
    resolve_credentials,
};

use crate::controller::AppController;

#[derive(Parser)]
#[command(name = "trustai", about = "Analyze content credibility from your terminal", long_about = None)]
#[command(group(ArgGroup::new("input").args(["text", "url", "file", "image"])))]
struct Cli {
    /// Analyze a piece of text and exit
    #[arg(long, value_name = "TEXT")]
    text: Option<String>,

    /// Analyze the content behind a URL and exit
    #[arg(long, value_name = "URL")]
    url: Option<String>,

    /// Analyze a plain-text file and exit
    #[arg(long, value_name = "PATH")]
    file: Option<PathBuf>,

    /// Analyze an image file and exit
    #[arg(long, value_name = "PATH")]
    image: Option<PathBuf>,

    /// Also write the report to a file (directory or full path)
    #[arg(long, value_name = "PATH", requires = "input")]
    out: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    if let Err(error) = SecretStorage::new().and_then(|storage| storage.ensure_template()) {
        warn!(%error, "could not prepare the secret file");
    }
    let config = load_config();
    let credentials = resolve_credentials().context("Gemini credentials unavailable")?;

    let client = GeminiClient::new(credentials.api_key.clone())
        .with_timeout(Duration::from_secs(config.analysis.timeout_secs));

    let mut analyzer = GeminiAnalyzer::new(client.clone());
    let text_model = config
        .analysis
        .text_model
        .clone()
        .or_else(|| credentials.model_name.clone());
    if let Some(model) = text_model {
        analyzer = analyzer.with_text_model(model);
    }
    if let Some(model) = config.analysis.image_model.clone() {
        analyzer = analyzer.with_image_model(model);
    }

    if let Some(input) = one_shot_input(&cli)? {
        return run_one_shot(&analyzer, input, cli.out.as_deref()).await;
    }

    let voice = ProcessVoiceTransport::from_settings(&config.voice)
        .map(|transport| Arc::new(transport) as Arc<dyn VoiceTransport>);
    let history = HistoryStore::new().context("cannot locate the history file")?;
    let state = StateStore::new().context("cannot locate the state file")?;

    let controller = AppController::new(
        Arc::new(analyzer),
        Arc::new(GeminiNavigator::new(client.clone())),
        Arc::new(GeminiReportChat::new(client)),
        voice,
        history,
        state,
    );
    repl::run(controller).await
}

fn init_logging() {
    let filter = EnvFilter::try_from_env("TRUSTAI_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_config() -> AppConfig {
    match ConfigStorage::new() {
        Ok(storage) => match storage.load() {
            Ok(config) => config,
            Err(error) => {
                warn!(%error, "config.toml is invalid, using defaults");
                AppConfig::default()
            }
        },
        Err(error) => {
            warn!(%error, "config directory unavailable, using defaults");
            AppConfig::default()
        }
    }
}

fn one_shot_input(cli: &Cli) -> anyhow::Result<Option<AnalysisInput>> {
    if let Some(text) = &cli.text {
        return Ok(Some(AnalysisInput::text(text)));
    }
    if let Some(url) = &cli.url {
        return Ok(Some(AnalysisInput::url(url)));
    }
    if let Some(path) = &cli.file {
        return Ok(Some(InputLoader::load_text_file(path)?.input));
    }
    if let Some(path) = &cli.image {
        return Ok(Some(InputLoader::load_image(path)?.input));
    }
    Ok(None)
}

async fn run_one_shot(
    analyzer: &GeminiAnalyzer,
    input: AnalysisInput,
    out: Option<&Path>,
) -> anyhow::Result<()> {
    let report = analyzer.analyze(&input).await?;
    print!("{}", report_export::render_report_text(&report));
    if let Some(dest) = out {
        let path = report_export::write_report(&report, Some(dest))?;
        eprintln!("Report written to {}", path.display());
    }
    Ok(())
}
