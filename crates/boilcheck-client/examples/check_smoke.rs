/// Smoke-run of the boiling-slider check against the live deployment.
///
/// Launches a headless Chromium, opens the deployed page, and runs both
/// slider phases end to end.
///
/// Run with:
///   cargo run --example check_smoke
use boilcheck_client::BrowserSession;
use boilcheck_core::check::CheckService;
use boilcheck_core::models::CheckOptions;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().with_env_filter("info").init();

    let options = CheckOptions::default();

    println!("Launching headless browser…");
    let session = BrowserSession::launch().await?;

    let outcome = async {
        println!("Opening {} …", options.url);
        let probe = session.open(&options.url).await?;
        CheckService::new(probe, options.clone()).run().await
    }
    .await;
    session.close().await;

    let report = outcome?;
    println!(
        "OK — min-scale spread {:.6}, max-scale spread {:.6}",
        report.min_scale.spread, report.max_scale.spread
    );
    Ok(())
}
