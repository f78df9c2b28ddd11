use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;
use url::Url;

use boilcheck_client::BrowserSession;
use boilcheck_core::check::CheckService;
use boilcheck_core::error::AppError;
use boilcheck_core::models::{
    CheckOptions, CheckReport, DEFAULT_DELAY_MS, DEFAULT_SAMPLE_COUNT, DEFAULT_URL, SeriesStats,
};

#[derive(Parser)]
#[command(
    name = "boilcheck",
    version,
    about = "Smoke check: the boiling-animation width slider must drive the live SVG turbulence"
)]
struct Cli {
    /// Deployed page to check
    #[arg(long, default_value = DEFAULT_URL)]
    url: String,

    /// baseFrequency samples collected per slider position
    #[arg(
        long,
        default_value_t = DEFAULT_SAMPLE_COUNT as u64,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    samples: u64,

    /// Delay between samples, in milliseconds
    #[arg(long, default_value_t = DEFAULT_DELAY_MS)]
    delay: u64,

    /// Print the report as JSON instead of the [details] lines
    #[arg(long, default_value_t = false)]
    json: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    // Load .env if present
    let _ = dotenvy::dotenv();

    // Logs go to stderr; stdout carries only the [ok]/[details]/[fail] lines.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("boilcheck=info")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let json = cli.json;

    let options = match build_options(cli) {
        Ok(options) => options,
        Err(err) => {
            println!("[fail] {err:#}");
            return ExitCode::FAILURE;
        }
    };

    match run_check(&options).await {
        Ok(report) => {
            print_report(&report, json);
            ExitCode::SUCCESS
        }
        Err(err) => {
            if err.is_contract_violation() {
                tracing::error!("Animation contract violated: {err}");
            } else {
                tracing::error!("Check infrastructure failed: {err}");
            }
            println!("[fail] {err}");
            ExitCode::FAILURE
        }
    }
}

fn build_options(cli: Cli) -> anyhow::Result<CheckOptions> {
    Url::parse(&cli.url).with_context(|| format!("Invalid --url: {}", cli.url))?;

    Ok(CheckOptions {
        url: cli.url,
        samples: cli.samples as usize,
        delay_ms: cli.delay,
    })
}

/// Run the whole check under one browser session.
///
/// The session is closed on every exit path: the check runs in an inner
/// future whose outcome is captured before the close is awaited.
async fn run_check(options: &CheckOptions) -> Result<CheckReport, AppError> {
    let session = BrowserSession::launch().await?;

    let outcome = async {
        let probe = session.open(&options.url).await?;
        CheckService::new(probe, options.clone()).run().await
    }
    .await;

    session.close().await;
    outcome
}

fn print_report(report: &CheckReport, json: bool) {
    println!("[ok] Boiling width slider updates live with the animation");

    if json {
        match serde_json::to_string_pretty(report) {
            Ok(body) => println!("{body}"),
            Err(err) => tracing::warn!("Failed to serialize report: {err}"),
        }
        return;
    }

    println!("{}", format_details("min scale", &report.min_scale));
    println!("{}", format_details("max scale", &report.max_scale));
}

fn format_details(tag: &str, stats: &SeriesStats) -> String {
    format!(
        "[details] {tag} -> min={:.6}, max={:.6}, spread={:.6}",
        stats.min, stats.max, stats.spread
    )
}
