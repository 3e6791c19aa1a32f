// ── Data synchronization actions ──
//
// One async action per entity: call the backend, cross the key
// convention boundary, replace the store snapshot, resolve with the
// result. Every fetch failure collapses into the store's neutral value
// plus a recorded diagnostic -- callers that only read snapshots see an
// empty state, callers that care inspect the store's `last_error`.

use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, warn};

use voltswap_api::{ApiClient, CredentialSource, TransportConfig};

use crate::config::AppConfig;
use crate::convert;
use crate::error::SyncError;
use crate::model::{Battery, BatteryModel, ProfileUpdate, Station, Transaction, UserProfile};
use crate::notify::{NoticeKind, Notifier};
use crate::store::cell::{ListStore, SelectionStore};
use crate::store::{DataStore, ListSnapshot, SelectionSnapshot};

/// The domain actions: entity fetches feeding the [`DataStore`] and
/// profile mutations surfacing explicit feedback.
///
/// Fetches resolve with the store's new snapshot and never error; a
/// failed fetch leaves the neutral value behind and records why in the
/// store's diagnostic. Concurrent calls to the same fetch are not
/// deduplicated or cancelled: each issues its own request, and
/// whichever response arrives last wins the snapshot, regardless of
/// call order.
pub struct SyncService {
    api: Arc<ApiClient>,
    store: Arc<DataStore>,
    notifier: Arc<dyn Notifier>,
}

impl SyncService {
    pub fn new(api: Arc<ApiClient>, store: Arc<DataStore>, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            api,
            store,
            notifier,
        }
    }

    /// Convenience constructor wiring a fresh client and store from an
    /// [`AppConfig`]. Callers that need the unauthorized hook build the
    /// [`ApiClient`] themselves and use [`new`](Self::new).
    pub fn from_config(
        config: &AppConfig,
        credentials: Arc<dyn CredentialSource>,
        notifier: Arc<dyn Notifier>,
    ) -> Result<Self, SyncError> {
        let transport = TransportConfig {
            timeout: config.timeout,
            ..TransportConfig::default()
        };
        let api = ApiClient::new(config.base_url.clone(), credentials, &transport)?;
        Ok(Self::new(
            Arc::new(api),
            Arc::new(DataStore::new()),
            notifier,
        ))
    }

    /// The store this service feeds.
    pub fn store(&self) -> &Arc<DataStore> {
        &self.store
    }

    // ── Fetch actions ────────────────────────────────────────────────

    /// Refresh the battery model catalogue.
    pub async fn fetch_battery_models(&self) -> ListSnapshot<BatteryModel> {
        let result = self.api.list_battery_models().await;
        self.apply_list(&self.store.battery_models, result, "battery models")
    }

    /// Refresh the batteries managed at one station.
    pub async fn fetch_station_batteries(&self, station_id: &str) -> ListSnapshot<Battery> {
        let result = self.api.station_batteries(station_id).await;
        self.apply_list(&self.store.station_batteries, result, "station batteries")
    }

    /// Refresh the station list.
    pub async fn fetch_stations(&self) -> ListSnapshot<Station> {
        let result = self.api.list_stations().await;
        self.apply_list(&self.store.stations, result, "stations")
    }

    /// Load one station into the selected-station slot.
    pub async fn fetch_station(&self, station_id: &str) -> SelectionSnapshot<Station> {
        let result = self.api.get_station(station_id).await;
        self.apply_selection(&self.store.selected_station, result, "station")
    }

    /// Refresh the signed-in rider's transaction history.
    pub async fn fetch_my_transactions(&self) -> ListSnapshot<Transaction> {
        let result = self.api.my_transactions().await;
        self.apply_list(&self.store.transactions, result, "transactions")
    }

    /// Refresh the signed-in rider's profile.
    pub async fn fetch_profile(&self) -> SelectionSnapshot<UserProfile> {
        let result = self.api.me().await;
        self.apply_selection(&self.store.profile, result, "profile")
    }

    /// Fetch the main app data concurrently: stations, battery models,
    /// transaction history, and profile.
    pub async fn refresh_all(&self) {
        let (stations, models, transactions, profile) = tokio::join!(
            self.fetch_stations(),
            self.fetch_battery_models(),
            self.fetch_my_transactions(),
            self.fetch_profile(),
        );

        debug!(
            stations = stations.len(),
            models = models.len(),
            transactions = transactions.len(),
            profile = profile.is_some(),
            "refresh complete"
        );
    }

    // ── Profile mutations ────────────────────────────────────────────

    /// Update the rider's profile.
    ///
    /// Success replaces the profile store and raises a success notice;
    /// failure leaves the store untouched and raises an error notice.
    pub async fn update_profile(&self, update: &ProfileUpdate) -> SelectionSnapshot<UserProfile> {
        let result = match convert::encode(update) {
            Ok(body) => self.api.update_me(&body).await.map_err(SyncError::from),
            Err(err) => Err(err),
        };
        self.apply_profile_mutation(result, "Profile updated")
    }

    /// Upload a new avatar image. The backend answers with the updated
    /// profile.
    pub async fn upload_avatar(
        &self,
        bytes: Vec<u8>,
        filename: &str,
        mime: &str,
    ) -> SelectionSnapshot<UserProfile> {
        let result = self
            .api
            .upload_avatar(bytes, filename, mime)
            .await
            .map_err(SyncError::from);
        self.apply_profile_mutation(result, "Avatar updated")
    }

    // ── Shared application logic ─────────────────────────────────────

    /// Land a list-fetch outcome in its cell. The snapshot write
    /// happens before the caller sees the returned value.
    fn apply_list<T>(
        &self,
        cell: &ListStore<T>,
        result: Result<Value, voltswap_api::Error>,
        what: &'static str,
    ) -> ListSnapshot<T>
    where
        T: DeserializeOwned + Send + Sync + 'static,
    {
        match result
            .map_err(SyncError::from)
            .and_then(convert::decode::<Vec<T>>)
        {
            Ok(items) => {
                let snap = cell.replace(items);
                self.store.mark_synced();
                snap
            }
            Err(err) => {
                warn!(what, error = %err, "fetch failed; resetting to neutral snapshot");
                cell.reset(err)
            }
        }
    }

    fn apply_selection<T>(
        &self,
        cell: &SelectionStore<T>,
        result: Result<Value, voltswap_api::Error>,
        what: &'static str,
    ) -> SelectionSnapshot<T>
    where
        T: DeserializeOwned + Send + Sync + 'static,
    {
        match result
            .map_err(SyncError::from)
            .and_then(convert::decode::<T>)
        {
            Ok(value) => {
                let arc = cell.replace(value);
                self.store.mark_synced();
                Some(arc)
            }
            Err(err) => {
                warn!(what, error = %err, "fetch failed; resetting to neutral snapshot");
                cell.reset(err);
                None
            }
        }
    }

    /// Mutation outcomes always surface a notice; only fetch failures
    /// reset stores to neutral.
    fn apply_profile_mutation(
        &self,
        result: Result<Value, SyncError>,
        success_message: &str,
    ) -> SelectionSnapshot<UserProfile> {
        match result.and_then(convert::decode::<UserProfile>) {
            Ok(profile) => {
                let arc = self.store.profile.replace(profile);
                self.notifier
                    .notify(NoticeKind::Success, success_message, None);
                Some(arc)
            }
            Err(err) => {
                warn!(error = %err, "profile mutation failed");
                self.notifier
                    .notify(NoticeKind::Error, &err.to_string(), Some("Profile"));
                None
            }
        }
    }
}
