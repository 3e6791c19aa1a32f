// ── Swap transaction domain types ──

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Settlement state of a swap transaction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransactionStatus {
    Pending,
    Completed,
    Failed,
    Cancelled,
    #[default]
    #[serde(other)]
    Unknown,
}

/// One battery swap performed by a rider at a station.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub transaction_id: String,
    #[serde(default)]
    pub station_id: Option<String>,
    #[serde(default)]
    pub station_name: Option<String>,
    /// Battery handed to the rider.
    #[serde(default)]
    pub battery_issued_id: Option<String>,
    /// Battery the rider returned.
    #[serde(default)]
    pub battery_returned_id: Option<String>,
    /// Amount charged, minor currency units (VND).
    #[serde(default)]
    pub amount: i64,
    #[serde(default)]
    pub status: TransactionStatus,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}
