//! Raw transaction rows and their mapping into typed records.

use chrono::NaiveDate;
use hoops_core::models::PlayerTransaction;
use hoops_core::StoreError;
use rust_decimal::Decimal;

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct PlayerTransactionRow {
    pub id: i32,
    pub player_id: i32,
    pub from_team_id: Option<i32>,
    pub to_team_id: Option<i32>,
    pub transaction_type: String,
    pub date: NaiveDate,
    pub contract_value: Option<Decimal>,
    pub notes: Option<String>,
}

impl TryFrom<PlayerTransactionRow> for PlayerTransaction {
    type Error = StoreError;

    fn try_from(row: PlayerTransactionRow) -> Result<Self, Self::Error> {
        Ok(PlayerTransaction {
            id: row.id,
            player_id: row.player_id,
            from_team_id: row.from_team_id,
            to_team_id: row.to_team_id,
            transaction_type: row.transaction_type.parse()?,
            date: row.date,
            contract_value: row.contract_value,
            notes: row.notes,
        })
    }
}
