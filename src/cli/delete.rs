use anyhow::{anyhow, Result};

use super::display::pin_popup;
use super::ui::confirm;
use super::Store;

/// Execute the delete command
pub fn run_delete(store: &mut Store, id: &str, force: bool) -> Result<()> {
    let id = id.trim();
    if id.is_empty() {
        return Err(anyhow!("Identifier cannot be empty."));
    }

    let Some(pin) = store.get(id) else {
        println!("No pin found with ID: {}", id);
        return Ok(());
    };

    if !force {
        println!("{}\n", pin_popup(pin));
        if !confirm(&format!("Delete {}?", pin.label))? {
            return Ok(());
        }
    }

    store.delete(id)?;
    println!("Deleted.");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::Database;
    use crate::store::PinStore;

    fn setup_store() -> Store {
        let mut store = PinStore::load(Some(Database::open_memory().unwrap()));
        store.add(51.5, -0.1, "London").unwrap();
        store.add(40.7, -74.0, "New York").unwrap();
        store
    }

    #[test]
    fn test_delete_force() {
        let mut store = setup_store();
        let id = store.pins()[0].id.clone();

        run_delete(&mut store, &id, true).unwrap();

        assert!(store.get(&id).is_none());
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_delete_twice() {
        let mut store = setup_store();
        let id = store.pins()[0].id.clone();

        run_delete(&mut store, &id, true).unwrap();
        run_delete(&mut store, &id, true).unwrap();
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_empty_identifier_error() {
        let mut store = setup_store();
        assert!(run_delete(&mut store, "   ", true).is_err());
    }

    #[test]
    fn test_delete_nonexistent() {
        let mut store = setup_store();
        run_delete(&mut store, "not-a-pin", true).unwrap();
        assert_eq!(store.len(), 2);
    }
}
