use paddock::format;
use paddock_core::{recent_flags, recent_race_control};
use paddock_demos::common;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let paddock = common::builder()?.build()?;

    // Force the race-control fetch so the first poll is never served stale.
    let snapshot = paddock.snapshot(true).await?;

    println!("Race control (latest 5):");
    for msg in recent_race_control(&snapshot.race_control, 5) {
        println!("  {}  [{}] {}", format::clock(msg.date), msg.category, msg.message);
    }
    let flags = recent_flags(&snapshot.race_control, 5);
    if !flags.is_empty() {
        println!("Recent flags: {}", flags.join(", "));
    }

    match &snapshot.weather {
        Some(w) => println!(
            "Track: {}  air {:.0}°C  track {:.0}°C  wind {:.1} m/s {}",
            if w.is_wet() { "wet" } else { "dry" },
            w.air_temperature.unwrap_or_default(),
            w.track_temperature.unwrap_or_default(),
            w.wind_speed.unwrap_or_default(),
            w.wind_direction.map_or("-", format::compass),
        ),
        None => println!("No weather data."),
    }
    Ok(())
}
