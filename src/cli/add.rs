use anyhow::{anyhow, Result};

use super::display::pin_popup;
use super::ui::{prompt_label, warning, FormResult};
use super::Store;
use crate::models::format_coordinates;

/// Execute the add command.
///
/// Without a label, asks for one; an empty answer or Esc cancels without
/// saving anything.
pub fn run_add(store: &mut Store, lat: f64, lng: f64, label: Option<String>) -> Result<()> {
    if !lat.is_finite() || !lng.is_finite() {
        return Err(anyhow!("Coordinates must be numbers."));
    }

    let label = match label {
        Some(label) => label,
        None => {
            println!("New pin at {}", format_coordinates(lat, lng, 4));
            match prompt_label()? {
                FormResult::Value(label) => label,
                FormResult::Cancelled => {
                    println!("Cancelled.");
                    return Ok(());
                }
            }
        }
    };

    if label.trim().is_empty() {
        return Err(anyhow!("Label cannot be empty."));
    }

    let pin = store.add(lat, lng, &label)?;
    if !pin.in_range() {
        warning("Coordinates are outside -90..90 / -180..180; saved anyway.");
    }
    if !store.has_storage() {
        warning("No storage available; this pin will not be saved.");
    }

    println!("\nPinned: {}", pin_popup(&pin));
    Ok(())
}
