// Backend endpoint modules
//
// Each file groups one backend domain as inherent methods on
// [`ApiClient`](crate::client::ApiClient). All methods return the
// unwrapped envelope `data` in wire convention.

mod batteries;
mod payments;
mod stations;
mod transactions;
mod users;
