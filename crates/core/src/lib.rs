//! Core records, store contracts, and configuration for the basketball
//! statistics service.

pub mod config;
pub mod config_loader;
pub mod error;
pub mod format;
pub mod models;
pub mod procedures;
pub mod report_formatter;
pub mod traits;

pub use config::{AppConfig, DatabaseConfig, ServerConfig, StatsDefaults};
pub use config_loader::ConfigLoader;
pub use error::{StoreError, UnknownVariant};
pub use procedures::{
    NewGame, NewPlayer, ProcedureOutcome, RemoveRequest, SignRequest, TradeRequest, WaiveRequest,
};
pub use report_formatter::ReportFormatter;
pub use traits::{RosterProcedures, StatsStore, StoreResult};
