use paddock_types::{RaceControlMessage, WeatherSample};

/// The `n` most recent race-control messages, newest first.
///
/// Messages sharing a timestamp keep their arrival order.
#[must_use]
pub fn recent_race_control(messages: &[RaceControlMessage], n: usize) -> Vec<&RaceControlMessage> {
    let mut sorted: Vec<&RaceControlMessage> = messages.iter().collect();
    sorted.sort_by(|a, b| b.date.cmp(&a.date));
    sorted.truncate(n);
    sorted
}

/// Distinct flags raised by the last `window` messages in arrival order.
#[must_use]
pub fn recent_flags(messages: &[RaceControlMessage], window: usize) -> Vec<&str> {
    let start = messages.len().saturating_sub(window);
    let mut out: Vec<&str> = Vec::new();
    for flag in messages[start..].iter().filter_map(|m| m.flag.as_deref()) {
        if !out.contains(&flag) {
            out.push(flag);
        }
    }
    out
}

/// Weather sample with the greatest timestamp.
#[must_use]
pub fn latest_weather(samples: &[WeatherSample]) -> Option<&WeatherSample> {
    let mut best: Option<&WeatherSample> = None;
    for s in samples {
        match best {
            Some(b) if s.date <= b.date => {}
            _ => best = Some(s),
        }
    }
    best
}
