// Station endpoints
//
// Station browsing for the swap map and station detail screens.

use serde_json::Value;
use tracing::debug;

use crate::client::ApiClient;
use crate::error::Error;

impl ApiClient {
    /// List all swap stations.
    ///
    /// `GET /stations`
    pub async fn list_stations(&self) -> Result<Value, Error> {
        debug!("listing stations");
        self.get("stations").await
    }

    /// Get a single station by id.
    ///
    /// `GET /stations/{id}`
    pub async fn get_station(&self, station_id: &str) -> Result<Value, Error> {
        debug!(station_id, "fetching station");
        self.get(&format!("stations/{station_id}")).await
    }
}
