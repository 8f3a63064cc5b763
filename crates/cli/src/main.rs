use std::path::PathBuf;
use std::process;
use std::time::Duration;

use clap::Parser;

use sermontrim_core::audio::infrastructure::hound_slicer::HoundSlicer;
use sermontrim_core::pipeline::trim_sermon_use_case::{TrimOptions, TrimSermonUseCase};
use sermontrim_core::shared::config::CloudConfig;
use sermontrim_core::shared::constants::{
    DEFAULT_END_CLIP_FILE, DEFAULT_MAX_WAIT_SECS, DEFAULT_OUTPUT_FILE, DEFAULT_POLL_INTERVAL_SECS,
    DEFAULT_START_CLIP_FILE,
};
use sermontrim_core::storage::infrastructure::http_object_store::HttpObjectStore;
use sermontrim_core::transcription::domain::job_poller::JobPoller;
use sermontrim_core::transcription::infrastructure::http_transcribe_client::HttpTranscribeClient;

/// Trim a raw sermon recording down to its spoken content.
#[derive(Parser)]
#[command(name = "sermontrim")]
struct Cli {
    /// Raw input WAV file.
    raw: PathBuf,

    /// Final trimmed output file.
    #[arg(long, default_value = DEFAULT_OUTPUT_FILE)]
    output: PathBuf,

    /// Where to write the intermediate start boundary clip.
    #[arg(long, default_value = DEFAULT_START_CLIP_FILE)]
    start_clip: PathBuf,

    /// Where to write the intermediate end boundary clip.
    #[arg(long, default_value = DEFAULT_END_CLIP_FILE)]
    end_clip: PathBuf,

    /// Seconds between transcription job status checks.
    #[arg(long, default_value_t = DEFAULT_POLL_INTERVAL_SECS)]
    poll_interval: u64,

    /// Give up if the transcription jobs are still running after this many
    /// seconds.
    #[arg(long, default_value_t = DEFAULT_MAX_WAIT_SECS)]
    max_wait: u64,
}

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    if !cli.raw.exists() {
        return Err(format!("Input file not found: {}", cli.raw.display()).into());
    }

    let config = CloudConfig::from_env()?;
    let store = HttpObjectStore::new(&config)?;
    let client = HttpTranscribeClient::new(&config)?;
    let poller = JobPoller::new(
        Duration::from_secs(cli.poll_interval),
        Duration::from_secs(cli.max_wait),
    );

    let use_case = TrimSermonUseCase::new(
        Box::new(HoundSlicer::new()),
        Box::new(store),
        Box::new(client),
        poller,
    );

    let opts = TrimOptions {
        start_clip: cli.start_clip,
        end_clip: cli.end_clip,
        output: cli.output.clone(),
    };
    let window = use_case.run(&cli.raw, &opts)?;

    log::info!("Sermon start @ {}s", window.start);
    log::info!("Sermon end @ {}s", window.end);
    log::info!("Output written to {}", cli.output.display());
    Ok(())
}
