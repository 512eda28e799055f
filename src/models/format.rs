use chrono::{DateTime, TimeZone};
use std::fmt::Display;

/// Coordinates as `lat°, lng°` with a fixed number of decimals
pub fn format_coordinates(lat: f64, lng: f64, decimals: usize) -> String {
    format!("{:.*}°, {:.*}°", decimals, lat, decimals, lng)
}

/// Date for the pin list: `Jan 5, 2024`
pub fn format_list_date<Tz: TimeZone>(date: &DateTime<Tz>) -> String
where
    Tz::Offset: Display,
{
    date.format("%b %-d, %Y").to_string()
}

/// Short numeric date for the pin popup: `1/5/2024`
pub fn format_short_date<Tz: TimeZone>(date: &DateTime<Tz>) -> String
where
    Tz::Offset: Display,
{
    date.format("%-m/%-d/%Y").to_string()
}

/// Header line, e.g. `3 pins saved`
pub fn pins_saved(count: usize) -> String {
    match count {
        1 => "1 pin saved".to_string(),
        n => format!("{} pins saved", n),
    }
}
