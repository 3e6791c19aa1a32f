// ── Payment flow ──
//
// One-shot VNPay payment creation. Unlike the cached entity stores, a
// payment result is surfaced exactly once to the caller -- nothing is
// cached, and a failed attempt is never replayed automatically.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tokio::sync::watch;
use tracing::warn;

use voltswap_api::ApiClient;

use crate::convert;
use crate::error::SyncError;
use crate::notify::{NoticeKind, Notifier};

/// Observable lifecycle of the latest payment attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentState {
    Idle,
    InFlight,
    Settled,
}

/// Request to open a VNPay payment.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentRequest {
    /// Amount in minor currency units (VND).
    pub amount: i64,
    pub order_info: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bank_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

/// Redirect payload issued by the gateway.
///
/// Surfaced verbatim: the mixed key convention (`txnRef` beside
/// `payment_id`) is exactly what the gateway sends, so this payload
/// skips the usual wire-to-client crossing.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PaymentIntent {
    pub url: String,
    #[serde(rename = "txnRef")]
    pub txn_ref: String,
    pub payment_id: String,
}

/// Stateful wrapper around payment creation.
pub struct PaymentFlow {
    api: Arc<ApiClient>,
    notifier: Arc<dyn Notifier>,
    state: watch::Sender<PaymentState>,
}

impl PaymentFlow {
    pub fn new(api: Arc<ApiClient>, notifier: Arc<dyn Notifier>) -> Self {
        let (state, _) = watch::channel(PaymentState::Idle);
        Self {
            api,
            notifier,
            state,
        }
    }

    /// State of the latest attempt.
    pub fn state(&self) -> PaymentState {
        *self.state.borrow()
    }

    /// Subscribe to state transitions.
    pub fn subscribe(&self) -> watch::Receiver<PaymentState> {
        self.state.subscribe()
    }

    /// Create a VNPay payment.
    ///
    /// Resolves with the gateway redirect payload, or `None` after
    /// raising an error notice -- a business-level rejection inside a
    /// 200 body and a transport failure end the same way. No retry is
    /// attempted; each invocation is independent.
    pub async fn create_vnpay(&self, request: &PaymentRequest) -> Option<PaymentIntent> {
        self.state.send_replace(PaymentState::InFlight);

        let result = match convert::encode(request) {
            Ok(body) => self
                .api
                .create_vnpay_payment(&body)
                .await
                .map_err(SyncError::from),
            Err(err) => Err(err),
        };
        let outcome = result.and_then(|data| {
            serde_json::from_value::<PaymentIntent>(data).map_err(|e| SyncError::Malformed {
                message: e.to_string(),
            })
        });

        self.state.send_replace(PaymentState::Settled);

        match outcome {
            Ok(intent) => Some(intent),
            Err(err) => {
                warn!(error = %err, "payment creation failed");
                self.notifier
                    .notify(NoticeKind::Error, &err.to_string(), Some("Payment"));
                None
            }
        }
    }
}
