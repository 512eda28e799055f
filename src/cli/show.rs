use anyhow::{anyhow, Result};

use super::display::pin_popup;
use super::Store;

/// Execute the show command
pub fn run_show(store: &Store, id: &str) -> Result<()> {
    let id = id.trim();
    if id.is_empty() {
        return Err(anyhow!("Identifier cannot be empty."));
    }

    match store.get(id) {
        Some(pin) => println!("{}", pin_popup(pin)),
        None => println!("No pin found with ID: {}", id),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::Database;
    use crate::store::PinStore;

    #[test]
    fn test_empty_identifier_error() {
        let store: Store = PinStore::load(Some(Database::open_memory().unwrap()));
        assert!(run_show(&store, "  ").is_err());
    }

    #[test]
    fn test_show_existing_pin() {
        let mut store: Store = PinStore::load(Some(Database::open_memory().unwrap()));
        let pin = store.add(51.5, -0.1, "London").unwrap();
        assert!(run_show(&store, &format!("  {}  ", pin.id)).is_ok());
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_unknown_identifier_is_ok() {
        let store: Store = PinStore::load(Some(Database::open_memory().unwrap()));
        assert!(run_show(&store, "12345").is_ok());
    }
}
