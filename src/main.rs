use clap::Parser;
use pincmd::cli::{run_add, run_delete, run_list, run_menu, run_show, run_stats, Cli, Commands, Store};
use pincmd::config::{Config, DEFAULT_LOG_FILTER};
use pincmd::db::Database;
use pincmd::store::PinStore;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(DEFAULT_LOG_FILTER))
        .init();

    let cli = Cli::parse();
    let config = Config::resolve(cli.db)?;

    // Without a usable database the store still works, it just can't save
    let db = match Database::open_at(&config.db_path) {
        Ok(db) => Some(db),
        Err(e) => {
            log::warn!("could not open {}: {e:#}", config.db_path.display());
            None
        }
    };
    let mut store: Store = PinStore::load(db);

    match cli.command {
        None => {
            // No subcommand provided - show interactive menu
            run_menu(&mut store)?;
        }
        Some(Commands::Add(args)) => {
            run_add(&mut store, args.lat, args.lng, args.label)?;
        }
        Some(Commands::List(args)) => {
            run_list(&store, args.json)?;
        }
        Some(Commands::Show(args)) => {
            run_show(&store, &args.id)?;
        }
        Some(Commands::Delete(args)) => {
            run_delete(&mut store, &args.id, args.force)?;
        }
        Some(Commands::Stats) => {
            run_stats(&store)?;
        }
    }

    Ok(())
}
