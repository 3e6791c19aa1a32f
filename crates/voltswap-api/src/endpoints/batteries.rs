// Battery endpoints
//
// Battery model catalogue and per-station battery management data.

use serde_json::Value;
use tracing::debug;

use crate::client::ApiClient;
use crate::error::Error;

impl ApiClient {
    /// List the battery models offered on the platform.
    ///
    /// `GET /batteries/model`
    pub async fn list_battery_models(&self) -> Result<Value, Error> {
        debug!("listing battery models");
        self.get("batteries/model").await
    }

    /// List the batteries managed at a station, with charge and health
    /// telemetry.
    ///
    /// `GET /batteries/station/{id}/management`
    pub async fn station_batteries(&self, station_id: &str) -> Result<Value, Error> {
        debug!(station_id, "listing station batteries");
        self.get(&format!("batteries/station/{station_id}/management"))
            .await
    }
}
