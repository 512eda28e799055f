use chrono::Local;

use crate::models::{format_coordinates, format_list_date, format_short_date, Pin, SummaryStats};

/// One entry of the pin list: label, region, coordinates, date, id
pub fn pin_row(pin: &Pin) -> String {
    let region = pin.region_info();
    let created = pin.created_at.with_timezone(&Local);

    format!(
        "{}\n  {} {}\n  {}\n  {}  [{}]",
        pin.label,
        region.emoji,
        region.name,
        format_coordinates(pin.lat, pin.lng, 2),
        format_list_date(&created),
        pin.id,
    )
}

/// Detail view of a single pin, like the map marker popup
pub fn pin_popup(pin: &Pin) -> String {
    let region = pin.region_info();
    let created = pin.created_at.with_timezone(&Local);

    format!(
        "{}\n\n  {}\n  {} {}\n  {}\n  id {}",
        pin.label,
        format_coordinates(pin.lat, pin.lng, 4),
        region.emoji,
        region.name,
        format_short_date(&created),
        pin.id,
    )
}

/// The three stat figures under the map
pub fn stats_block(stats: &SummaryStats) -> String {
    format!(
        "  {:>6}  Total Pins\n  {:>6}  Regions Visited\n  {:>6}  Days Exploring",
        stats.count, stats.distinct_regions, stats.days_exploring
    )
}

/// Single-line label for select menus
pub fn pin_choice(pin: &Pin) -> String {
    let region = pin.region_info();
    format!(
        "{}  {} {}  ({})",
        super::ui::truncate(&pin.label, 40),
        region.emoji,
        region.name,
        format_coordinates(pin.lat, pin.lng, 2)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn london() -> Pin {
        let created = Utc.with_ymd_and_hms(2024, 1, 5, 12, 0, 0).unwrap();
        Pin::new("1704456000000".into(), 51.50739, -0.12776, "Big Ben", created).unwrap()
    }

    #[test]
    fn test_pin_row() {
        let row = pin_row(&london());
        let lines: Vec<&str> = row.lines().collect();
        assert_eq!(lines[0], "Big Ben");
        assert_eq!(lines[1], "  🇪🇺 Europe");
        assert_eq!(lines[2], "  51.51°, -0.13°");
        assert!(lines[3].ends_with("[1704456000000]"));
    }

    #[test]
    fn test_pin_row_ocean() {
        let created = Utc.with_ymd_and_hms(2024, 1, 5, 12, 0, 0).unwrap();
        let pin = Pin::new("1".into(), 0.0, 0.0, "Null Island", created).unwrap();
        assert!(pin_row(&pin).contains("🌊 Ocean"));
    }

    #[test]
    fn test_pin_popup_uses_four_decimals() {
        let popup = pin_popup(&london());
        assert!(popup.starts_with("Big Ben\n"));
        assert!(popup.contains("51.5074°, -0.1278°"));
    }

    #[test]
    fn test_stats_block() {
        let stats = SummaryStats {
            count: 3,
            distinct_regions: 2,
            days_exploring: 14,
        };
        let block = stats_block(&stats);
        assert!(block.contains("3  Total Pins"));
        assert!(block.contains("2  Regions Visited"));
        assert!(block.contains("14  Days Exploring"));
    }

    #[test]
    fn test_pin_choice() {
        assert_eq!(pin_choice(&london()), "Big Ben  🇪🇺 Europe  (51.51°, -0.13°)");
    }
}
