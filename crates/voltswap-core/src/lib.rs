// voltswap-core: Reactive data layer between voltswap-api and the app
// shells (mobile UI, admin panel).

pub mod config;
pub mod convert;
pub mod error;
pub mod model;
pub mod notify;
pub mod payment;
pub mod query;
pub mod store;
pub mod stream;
pub mod sync;

// ── Primary re-exports ──────────────────────────────────────────────
pub use config::AppConfig;
pub use error::SyncError;
pub use notify::{LogNotifier, NoticeKind, Notifier};
pub use payment::{PaymentFlow, PaymentIntent, PaymentRequest, PaymentState};
pub use store::{DataStore, ListSnapshot, SelectionSnapshot};
pub use stream::SnapshotStream;
pub use sync::SyncService;

// Re-export model types at the crate root for ergonomics.
pub use model::{
    Battery, BatteryModel, BatteryStatus, ProfileUpdate, Station, StationStatus, Transaction,
    TransactionStatus, UserProfile,
};
