use paddock_core::{DriverNumber, RaceControlMessage, WeatherSample};

use super::at;

fn msg(offset: i64, category: &str, flag: Option<&str>, message: &str) -> RaceControlMessage {
    RaceControlMessage {
        date: at(offset),
        category: category.to_string(),
        flag: flag.map(str::to_string),
        scope: flag.map(|_| "Track".to_string()),
        sector: None,
        message: message.to_string(),
        driver_number: None,
        lap_number: None,
    }
}

pub fn messages() -> Vec<RaceControlMessage> {
    vec![
        msg(-300, "Flag", Some("GREEN"), "GREEN LIGHT - PIT EXIT OPEN"),
        msg(0, "Other", None, "RACE START"),
        RaceControlMessage {
            scope: Some("Sector".to_string()),
            sector: Some(7),
            lap_number: Some(2),
            ..msg(140, "Flag", Some("YELLOW"), "YELLOW IN TRACK SECTOR 7")
        },
        RaceControlMessage {
            driver_number: Some(DriverNumber(2)),
            lap_number: Some(2),
            ..msg(
                150,
                "Other",
                None,
                "CAR 2 (SAR) TIME 1:40.112 DELETED - TRACK LIMITS AT TURN 4",
            )
        },
        RaceControlMessage {
            scope: Some("Sector".to_string()),
            sector: Some(7),
            lap_number: Some(2),
            ..msg(170, "Flag", Some("CLEAR"), "CLEAR IN TRACK SECTOR 7")
        },
    ]
}

fn sample(offset: i64, air: f64, track: f64, rain: f64) -> WeatherSample {
    WeatherSample {
        date: at(offset),
        air_temperature: Some(air),
        track_temperature: Some(track),
        humidity: Some(46.0),
        pressure: Some(1017.2),
        rainfall: Some(rain),
        wind_direction: Some(182.0),
        wind_speed: Some(1.1),
    }
}

pub fn weather() -> Vec<WeatherSample> {
    vec![sample(120, 18.4, 26.1, 0.0), sample(-60, 18.9, 27.0, 0.0)]
}
