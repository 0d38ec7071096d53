use anyhow::{Context, Result};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use peerpath::config::Config;
use peerpath::early::RngSource;
use peerpath::snapshot::load_snapshot;
use peerpath::{build_report, Vocabulary};

fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Structured logging on stderr; stdout carries only the report
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    info!("Starting peerpath v{}", env!("CARGO_PKG_VERSION"));

    let snapshot = load_snapshot(&config.snapshot_path)?;
    if snapshot.profiles.is_empty() {
        warn!("Snapshot has no peer profiles; the report will be empty");
    }

    let vocabulary = match &config.vocabulary_path {
        Some(path) => {
            let vocabulary = Vocabulary::load(path)?;
            info!(path = %path.display(), "Loaded custom vocabulary");
            vocabulary
        }
        None => Vocabulary::default(),
    };

    let rng = match config.insight_seed {
        Some(seed) => {
            info!(seed, "Using seeded insight selection");
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_os_rng(),
    };
    let mut source = RngSource(rng);

    let report = build_report(
        &snapshot,
        config.major.as_deref(),
        &vocabulary,
        &mut source,
    );

    let json = serde_json::to_string_pretty(&report).context("failed to serialize report")?;
    println!("{json}");

    info!(
        profiles = report.analysis.total_profiles,
        phase = report.roadmap.as_ref().map(|r| r.current_phase),
        "Report written"
    );
    Ok(())
}
