// ── Battery domain types ──

use serde::{Deserialize, Serialize};

/// Lifecycle state of a physical battery pack.
///
/// The wire sends SCREAMING_SNAKE_CASE states; anything this client
/// version does not know degrades to `Unknown` instead of failing the
/// whole decode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BatteryStatus {
    Available,
    Charging,
    InUse,
    Maintenance,
    #[default]
    #[serde(other)]
    Unknown,
}

/// A battery model offered on the platform.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatteryModel {
    pub model_id: String,
    pub name: String,
    /// Usable capacity in kWh.
    #[serde(default)]
    pub capacity_kwh: Option<f64>,
    #[serde(default)]
    pub voltage: Option<f64>,
    /// Swap price in minor currency units (VND).
    #[serde(default)]
    pub swap_price: Option<i64>,
}

/// A physical battery pack managed at a station.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Battery {
    pub battery_id: String,
    #[serde(default)]
    pub model_id: Option<String>,
    #[serde(default)]
    pub status: BatteryStatus,
    /// Charge level, 0-100.
    #[serde(default)]
    pub charge_percent: Option<f64>,
    /// State of health, 0-100.
    #[serde(default)]
    pub health_percent: Option<f64>,
    #[serde(default)]
    pub station_id: Option<String>,
    #[serde(default)]
    pub slot_number: Option<u32>,
}
