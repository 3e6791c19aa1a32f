// ── Unified domain model ──
//
// Every type in this module is the canonical in-memory representation
// of a backend entity, keyed in the client convention. Records are
// immutable once decoded: stores replace them wholesale, nothing
// patches a field in place.

pub mod battery;
pub mod station;
pub mod transaction;
pub mod user;

// ── Re-exports ──────────────────────────────────────────────────────
// Flat access: `use voltswap_core::model::*` gives you everything.

pub use battery::{Battery, BatteryModel, BatteryStatus};
pub use station::{Station, StationStatus};
pub use transaction::{Transaction, TransactionStatus};
pub use user::{ProfileUpdate, UserProfile};
