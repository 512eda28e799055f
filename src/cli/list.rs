use anyhow::Result;

use super::display::pin_row;
use super::Store;
use crate::models::{pins_saved, StoredPin};

/// Execute the list command: most recent pins first
pub fn run_list(store: &Store, json: bool) -> Result<()> {
    if json {
        println!("{}", list_json(store)?);
        return Ok(());
    }

    println!("{}\n", pins_saved(store.len()));

    if store.is_empty() {
        println!("No pins yet");
        println!("Start exploring with: pincmd add <lat> <lng>");
        return Ok(());
    }

    for pin in store.list_sorted_by_recency() {
        println!("{}\n", pin_row(pin));
    }

    Ok(())
}

/// The recency-ordered list as pretty JSON, in the persisted record format
pub fn list_json(store: &Store) -> Result<String> {
    let records: Vec<StoredPin> = store.list_sorted_by_recency().map(StoredPin::from).collect();
    Ok(serde_json::to_string_pretty(&records)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::Database;
    use crate::store::PinStore;
    use chrono::{Duration, TimeZone, Utc};

    #[test]
    fn test_list_json_is_recency_ordered() {
        let mut store: Store = PinStore::load(Some(Database::open_memory().unwrap()));
        let t = Utc.with_ymd_and_hms(2024, 1, 5, 12, 0, 0).unwrap();
        store.add_at(51.5, -0.1, "London", t).unwrap();
        store.add_at(40.7, -74.0, "New York", t + Duration::days(1)).unwrap();

        let json: serde_json::Value = serde_json::from_str(&list_json(&store).unwrap()).unwrap();
        assert_eq!(json[0]["label"], "New York");
        assert_eq!(json[1]["label"], "London");
        assert_eq!(json[1]["timestamp"], "2024-01-05T12:00:00.000Z");
    }

    #[test]
    fn test_list_json_empty() {
        let store: Store = PinStore::load(Some(Database::open_memory().unwrap()));
        assert_eq!(list_json(&store).unwrap(), "[]");
    }
}
