// Transaction endpoints
//
// Swap-transaction history for the signed-in rider.

use serde_json::Value;
use tracing::debug;

use crate::client::ApiClient;
use crate::error::Error;

impl ApiClient {
    /// List the signed-in rider's swap transactions.
    ///
    /// `GET /transactions/me`
    pub async fn my_transactions(&self) -> Result<Value, Error> {
        debug!("listing own transactions");
        self.get("transactions/me").await
    }
}
