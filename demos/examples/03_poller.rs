use std::sync::Arc;
use std::time::Duration;

use paddock::{PollEvent, Poller, PollerConfig};
use paddock_demos::common;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut builder = common::builder()?;
    if common::use_mock() {
        builder = builder.poll_interval(Duration::from_millis(500));
    }
    let paddock = Arc::new(builder.build()?);

    let (handle, mut events) = Poller::spawn(paddock, PollerConfig::default());

    let mut seen = 0;
    while let Some(event) = events.recv().await {
        match event {
            PollEvent::Updated(snapshot) => {
                let rows = paddock_core::project_snapshot(&snapshot);
                let leader = rows.first().map_or_else(|| "-".to_string(), |r| r.driver.display_name());
                println!("update: {} rows, leader {leader}", rows.len());
            }
            PollEvent::Failed { error, last_good } => {
                println!(
                    "poll failed: {error} (keeping snapshot from {})",
                    last_good.map_or_else(|| "never".to_string(), |s| s.fetched_at.to_rfc3339()),
                );
            }
            PollEvent::Skipped => println!("tick skipped, poll still running"),
        }
        seen += 1;
        if seen == 1 {
            // manual refresh on top of the timer
            handle.refresh_now().await;
        }
        if seen >= 3 {
            break;
        }
    }

    handle.stop().await;
    Ok(())
}
