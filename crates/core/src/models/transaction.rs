//! Roster transactions.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::UnknownVariant;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TransactionType {
    Trade,
    Signing,
    Waiver,
    Draft,
}

impl TransactionType {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionType::Trade => "Trade",
            TransactionType::Signing => "Signing",
            TransactionType::Waiver => "Waiver",
            TransactionType::Draft => "Draft",
        }
    }
}

impl FromStr for TransactionType {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Trade" => Ok(TransactionType::Trade),
            "Signing" => Ok(TransactionType::Signing),
            "Waiver" => Ok(TransactionType::Waiver),
            "Draft" => Ok(TransactionType::Draft),
            other => Err(UnknownVariant::new("transaction type", other)),
        }
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A recorded roster event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerTransaction {
    pub id: i32,
    pub player_id: i32,
    /// `None` for signings and draft picks.
    pub from_team_id: Option<i32>,
    /// Waivers may carry no destination.
    pub to_team_id: Option<i32>,
    pub transaction_type: TransactionType,
    pub date: NaiveDate,
    /// Contract value in dollars.
    pub contract_value: Option<Decimal>,
    pub notes: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transaction_type_round_trip() {
        for kind in [
            TransactionType::Trade,
            TransactionType::Signing,
            TransactionType::Waiver,
            TransactionType::Draft,
        ] {
            assert_eq!(kind.as_str().parse::<TransactionType>(), Ok(kind));
        }
        assert!("Release".parse::<TransactionType>().is_err());
    }
}
