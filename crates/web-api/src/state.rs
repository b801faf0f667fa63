use std::sync::Arc;

use hoops_core::{RosterProcedures, StatsDefaults, StatsStore};
use hoops_data::DatabaseClient;

/// Shared handler state.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn StatsStore>,
    pub procedures: Arc<dyn RosterProcedures>,
    pub defaults: StatsDefaults,
}

impl AppState {
    #[must_use]
    pub fn new(
        store: Arc<dyn StatsStore>,
        procedures: Arc<dyn RosterProcedures>,
        defaults: StatsDefaults,
    ) -> Self {
        Self {
            store,
            procedures,
            defaults,
        }
    }

    /// State backed by the Postgres repositories and procedure relay.
    #[must_use]
    pub fn from_database(db: &DatabaseClient, defaults: StatsDefaults) -> Self {
        Self::new(
            Arc::new(db.repositories()),
            Arc::new(db.procedures()),
            defaults,
        )
    }
}
