pub mod cli;
pub mod config;
pub mod db;
pub mod models;
pub mod store;

pub use db::Database;
pub use store::{PinStore, STORAGE_KEY};
