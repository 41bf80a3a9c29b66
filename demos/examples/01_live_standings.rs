use paddock::format;
use paddock_demos::common;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. Build the orchestrator (mock in CI when PADDOCK_DEMOS_USE_MOCK is set).
    let paddock = common::builder()?.build()?;

    // 2. One poll plus projection.
    let (snapshot, rows) = paddock.standings(false).await?;

    let Some(session) = &snapshot.session else {
        println!("No active session.");
        return Ok(());
    };
    println!(
        "{} {} ({}), {} drivers, fetched {}",
        session.year,
        session.session_name,
        session.circuit_short_name.as_deref().unwrap_or("?"),
        rows.len(),
        snapshot.fetched_at.format("%H:%M:%S"),
    );

    // 3. Print the table.
    println!(
        "{:>3}  {:<20} {:>4} {:>10} {:>10} {:>9} {:>9} {:>9} {:>9}",
        "POS", "DRIVER", "LAP", "LAST", "BEST", "S1", "S2", "S3", "INT"
    );
    for row in &rows {
        println!(
            "{:>3}  {:<20} {:>4} {:>10} {:>10} {:>9} {:>9} {:>9} {:>9}",
            format::position(row.position),
            row.driver.display_name(),
            row.lap_count,
            format::lap_time(row.last_lap),
            format::lap_time(row.best_lap),
            format::sector_time(row.live_sectors.s1),
            format::sector_time(row.live_sectors.s2),
            format::sector_time(row.live_sectors.s3),
            format::gap(&row.interval),
        );
    }

    for w in &snapshot.warnings {
        println!("warning: {w}");
    }
    Ok(())
}
