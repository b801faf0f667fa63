//! `PostgreSQL` access for the basketball statistics service.
//!
//! This crate provides:
//! - A pooled database client
//! - Row shapes and their mapping into `hoops-core` records
//! - Repositories that together implement the read-side `StatsStore`
//! - A relay for the roster stored procedures

pub mod database;
pub mod models;
pub mod procedures;
pub mod repositories;

pub use database::DatabaseClient;
pub use procedures::ProcedureRelay;
pub use repositories::{
    GameRepository, PlayerRepository, Repositories, StatsRepository, SummaryRepository,
    TeamRepository, TransactionRepository,
};
