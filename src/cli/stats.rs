use anyhow::Result;
use chrono::Utc;

use super::display::stats_block;
use super::Store;
use crate::models::pins_saved;

/// Execute the stats command
pub fn run_stats(store: &Store) -> Result<()> {
    let stats = store.summary(Utc::now());
    println!("{}\n", pins_saved(stats.count));
    println!("{}", stats_block(&stats));
    Ok(())
}
