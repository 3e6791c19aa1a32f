// ── Station domain types ──

use serde::{Deserialize, Serialize};

/// Operational state of a swap station.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StationStatus {
    Active,
    Inactive,
    Maintenance,
    #[default]
    #[serde(other)]
    Unknown,
}

/// A battery-swap station.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Station {
    pub station_id: String,
    pub name: String,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
    #[serde(default)]
    pub status: StationStatus,
    /// Charged batteries ready to hand out.
    #[serde(default)]
    pub available_batteries: Option<u32>,
    /// Free slots accepting a returned battery.
    #[serde(default)]
    pub empty_slots: Option<u32>,
}
