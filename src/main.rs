pub mod analysis_core;
pub mod config;
pub mod prom_source;

use {
    analysis_core::{AnalysisWindow, LinkAnalyzer},
    config::PromConfig,
    prom_source::PromClient,
    std::env,
};

/// Scan process arguments for `--flag value`, returning the raw text.
fn arg_value(args: &[String], flag: &str) -> Option<String> {
    args.iter()
        .position(|a| a == flag)
        .and_then(|idx| args.get(idx + 1))
        .cloned()
}

#[tokio::main]
pub async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // Missing or malformed PROM_URL fails here, before any query is issued
    let config = PromConfig::from_env()?;

    let args: Vec<String> = env::args().collect();
    let seconds = arg_value(&args, "--seconds");
    let step = arg_value(&args, "--step");
    let window = AnalysisWindow::resolve(seconds.as_deref(), step.as_deref());

    log::info!(
        "🔍 Analyzing link quality over [{}..{}] at {}s steps",
        window.start,
        window.end,
        window.step
    );

    let client = PromClient::from_config(&config)?;
    let analyzer = LinkAnalyzer::new(client);
    let report = analyzer.analyze(window).await;

    println!("{}", serde_json::to_string_pretty(&report)?);

    Ok(())
}
