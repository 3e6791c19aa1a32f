// ── Central reactive data store ──
//
// One cell per entity the app caches, mutations broadcast to
// subscribers via `watch` channels. Constructed once at application
// start and shared by reference; nothing in here is a module-level
// singleton, so tests build as many fresh stores as they need.

pub(crate) mod cell;

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tokio::sync::watch;

use self::cell::{ListStore, SelectionStore};

use crate::error::SyncError;
use crate::model::{Battery, BatteryModel, Station, Transaction, UserProfile};
use crate::stream::SnapshotStream;

/// Snapshot of a cached collection. Always replaced wholesale.
pub type ListSnapshot<T> = Arc<Vec<Arc<T>>>;
/// Snapshot of a cached selection. `None` is the neutral value.
pub type SelectionSnapshot<T> = Option<Arc<T>>;

/// Central reactive store for every cached VoltSwap entity.
///
/// Reads are wait-free; writes replace whole snapshots and notify
/// subscribers. Each cell carries a `last_error` diagnostic beside its
/// snapshot so "empty because the backend said so" and "empty because
/// the fetch failed" remain distinguishable.
pub struct DataStore {
    pub(crate) battery_models: ListStore<BatteryModel>,
    pub(crate) station_batteries: ListStore<Battery>,
    pub(crate) stations: ListStore<Station>,
    pub(crate) selected_station: SelectionStore<Station>,
    pub(crate) transactions: ListStore<Transaction>,
    pub(crate) profile: SelectionStore<UserProfile>,
    pub(crate) last_sync: watch::Sender<Option<DateTime<Utc>>>,
}

impl DataStore {
    pub fn new() -> Self {
        let (last_sync, _) = watch::channel(None);

        Self {
            battery_models: ListStore::new(),
            station_batteries: ListStore::new(),
            stations: ListStore::new(),
            selected_station: SelectionStore::new(),
            transactions: ListStore::new(),
            profile: SelectionStore::new(),
            last_sync,
        }
    }

    // ── Snapshot accessors ───────────────────────────────────────────

    pub fn battery_models_snapshot(&self) -> ListSnapshot<BatteryModel> {
        self.battery_models.snapshot()
    }

    pub fn station_batteries_snapshot(&self) -> ListSnapshot<Battery> {
        self.station_batteries.snapshot()
    }

    pub fn stations_snapshot(&self) -> ListSnapshot<Station> {
        self.stations.snapshot()
    }

    pub fn selected_station_snapshot(&self) -> SelectionSnapshot<Station> {
        self.selected_station.snapshot()
    }

    pub fn transactions_snapshot(&self) -> ListSnapshot<Transaction> {
        self.transactions.snapshot()
    }

    pub fn profile_snapshot(&self) -> SelectionSnapshot<UserProfile> {
        self.profile.snapshot()
    }

    // ── Diagnostics ──────────────────────────────────────────────────

    pub fn battery_models_error(&self) -> Option<SyncError> {
        self.battery_models.last_error()
    }

    pub fn station_batteries_error(&self) -> Option<SyncError> {
        self.station_batteries.last_error()
    }

    pub fn stations_error(&self) -> Option<SyncError> {
        self.stations.last_error()
    }

    pub fn selected_station_error(&self) -> Option<SyncError> {
        self.selected_station.last_error()
    }

    pub fn transactions_error(&self) -> Option<SyncError> {
        self.transactions.last_error()
    }

    pub fn profile_error(&self) -> Option<SyncError> {
        self.profile.last_error()
    }

    // ── Subscriptions ────────────────────────────────────────────────
    // Dropping the returned stream is the unsubscribe.

    pub fn subscribe_battery_models(&self) -> SnapshotStream<ListSnapshot<BatteryModel>> {
        SnapshotStream::new(self.battery_models.subscribe())
    }

    pub fn subscribe_station_batteries(&self) -> SnapshotStream<ListSnapshot<Battery>> {
        SnapshotStream::new(self.station_batteries.subscribe())
    }

    pub fn subscribe_stations(&self) -> SnapshotStream<ListSnapshot<Station>> {
        SnapshotStream::new(self.stations.subscribe())
    }

    pub fn subscribe_selected_station(&self) -> SnapshotStream<SelectionSnapshot<Station>> {
        SnapshotStream::new(self.selected_station.subscribe())
    }

    pub fn subscribe_transactions(&self) -> SnapshotStream<ListSnapshot<Transaction>> {
        SnapshotStream::new(self.transactions.subscribe())
    }

    pub fn subscribe_profile(&self) -> SnapshotStream<SelectionSnapshot<UserProfile>> {
        SnapshotStream::new(self.profile.subscribe())
    }

    // ── Metadata ─────────────────────────────────────────────────────

    pub fn last_sync(&self) -> Option<DateTime<Utc>> {
        *self.last_sync.borrow()
    }

    /// How long ago the last successful fetch landed, or `None` if
    /// nothing has been fetched yet.
    pub fn data_age(&self) -> Option<chrono::Duration> {
        self.last_sync().map(|t| Utc::now() - t)
    }

    pub(crate) fn mark_synced(&self) {
        self.last_sync.send_replace(Some(Utc::now()));
    }
}

impl Default for DataStore {
    fn default() -> Self {
        Self::new()
    }
}
