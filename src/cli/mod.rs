use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::db::Database;
use crate::store::PinStore;

pub mod add;
pub mod delete;
pub mod display;
pub mod list;
pub mod menu;
pub mod show;
pub mod stats;
pub mod ui;

pub use add::run_add;
pub use delete::run_delete;
pub use list::run_list;
pub use menu::run_menu;
pub use show::run_show;
pub use stats::run_stats;

/// The store every command works against
pub type Store = PinStore<Database>;

#[derive(Parser)]
#[command(name = "pincmd")]
#[command(about = "Drop labeled pins on a world map from the command line")]
#[command(version)]
pub struct Cli {
    /// Database file (defaults to $PINCMD_DB, then the config directory)
    #[arg(long, global = true, value_name = "PATH")]
    pub db: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Drop a pin at a coordinate
    Add(AddArgs),
    /// List pins, most recent first
    List(ListArgs),
    /// Show full details for a pin
    Show(ShowArgs),
    /// Delete a pin
    Delete(DeleteArgs),
    /// Total pins, regions visited, days exploring
    Stats,
}

#[derive(Args)]
pub struct AddArgs {
    /// Latitude in degrees
    #[arg(allow_negative_numbers = true)]
    pub lat: f64,
    /// Longitude in degrees
    #[arg(allow_negative_numbers = true)]
    pub lng: f64,
    /// Label for the pin (prompted if omitted)
    #[arg(short, long)]
    pub label: Option<String>,
}

#[derive(Args)]
pub struct ListArgs {
    /// Print as JSON records
    #[arg(long)]
    pub json: bool,
}

#[derive(Args)]
pub struct ShowArgs {
    /// Pin ID
    pub id: String,
}

#[derive(Args)]
pub struct DeleteArgs {
    /// Pin ID
    pub id: String,
    /// Skip confirmation
    #[arg(short, long)]
    pub force: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_add_negative_coordinates() {
        let cli = Cli::try_parse_from(["pincmd", "add", "-33.86", "-151.2", "-l", "Somewhere"]).unwrap();
        match cli.command {
            Some(Commands::Add(args)) => {
                assert_eq!(args.lat, -33.86);
                assert_eq!(args.lng, -151.2);
                assert_eq!(args.label.as_deref(), Some("Somewhere"));
            }
            _ => panic!("expected add"),
        }
    }

    #[test]
    fn test_parse_global_db_flag() {
        let cli = Cli::try_parse_from(["pincmd", "list", "--db", "/tmp/pins.db", "--json"]).unwrap();
        assert_eq!(cli.db, Some(PathBuf::from("/tmp/pins.db")));
        assert!(matches!(cli.command, Some(Commands::List(ListArgs { json: true }))));
    }

    #[test]
    fn test_parse_no_subcommand() {
        let cli = Cli::try_parse_from(["pincmd"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_add_rejects_non_number() {
        assert!(Cli::try_parse_from(["pincmd", "add", "north", "2"]).is_err());
    }
}
