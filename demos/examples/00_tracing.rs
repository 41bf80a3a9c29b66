use paddock_demos::common;
use tracing_subscriber::fmt::format::FmtSpan;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Human-friendly subscriber with env-based filtering.
    // Suggested: RUST_LOG=info,paddock=debug,paddock_openf1=debug
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .with_span_events(FmtSpan::ENTER | FmtSpan::EXIT)
        .try_init();

    let paddock = common::builder()?.build()?;

    // Two polls: the second serves race control from the cache.
    let _ = paddock.snapshot(false).await?;
    let snapshot = paddock.snapshot(false).await?;
    tracing::info!(
        drivers = snapshot.drivers.len(),
        warnings = snapshot.warnings.len(),
        "done"
    );

    Ok(())
}
