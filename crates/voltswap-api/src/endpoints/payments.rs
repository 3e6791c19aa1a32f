// Payment endpoints
//
// Payment initiation through the VNPay gateway. The returned `data` is
// the gateway payload as issued -- callers deserialize it directly,
// without the usual key-convention crossing.

use serde_json::Value;
use tracing::debug;

use crate::client::ApiClient;
use crate::error::Error;

impl ApiClient {
    /// Create a VNPay payment and receive the redirect payload.
    ///
    /// `POST /payments/vnpay/create`
    pub async fn create_vnpay_payment(&self, body: &Value) -> Result<Value, Error> {
        debug!("creating VNPay payment");
        self.post("payments/vnpay/create", body).await
    }
}
