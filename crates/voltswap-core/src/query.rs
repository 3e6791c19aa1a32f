// ── Derived query helpers ──
//
// Pure synchronous lookups over already-fetched snapshots. No I/O, no
// store access -- callers pass the snapshot explicitly, and an absent
// collection behaves as an empty one.

use std::sync::Arc;

use crate::model::{Battery, BatteryStatus, Station, Transaction, TransactionStatus};

/// Transactions performed at one station.
pub fn transactions_by_station(
    transactions: Option<&[Arc<Transaction>]>,
    station_id: &str,
) -> Vec<Arc<Transaction>> {
    transactions
        .unwrap_or_default()
        .iter()
        .filter(|t| t.station_id.as_deref() == Some(station_id))
        .cloned()
        .collect()
}

/// Look up a transaction by id.
pub fn transaction_by_id(
    transactions: Option<&[Arc<Transaction>]>,
    transaction_id: &str,
) -> Option<Arc<Transaction>> {
    transactions
        .unwrap_or_default()
        .iter()
        .find(|t| t.transaction_id == transaction_id)
        .cloned()
}

/// Look up a station by id.
pub fn station_by_id(stations: Option<&[Arc<Station>]>, station_id: &str) -> Option<Arc<Station>> {
    stations
        .unwrap_or_default()
        .iter()
        .find(|s| s.station_id == station_id)
        .cloned()
}

/// Batteries currently in the given state.
pub fn batteries_with_status(
    batteries: Option<&[Arc<Battery>]>,
    status: BatteryStatus,
) -> Vec<Arc<Battery>> {
    batteries
        .unwrap_or_default()
        .iter()
        .filter(|b| b.status == status)
        .cloned()
        .collect()
}

/// Total amount of completed transactions, minor currency units.
pub fn total_amount(transactions: Option<&[Arc<Transaction>]>) -> i64 {
    transactions
        .unwrap_or_default()
        .iter()
        .filter(|t| t.status == TransactionStatus::Completed)
        .map(|t| t.amount)
        .sum()
}
