use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// SolarAI form input.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AddressInput {
    /// Free-text address, only echoed back as a label
    pub address: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, ToSchema)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrientationResult {
    pub location: String,
    pub coordinates: Coordinates,
    /// degrees from horizontal
    pub optimal_tilt: f64,
    /// degrees from north, clockwise
    pub optimal_azimuth: f64,
    pub peak_sun_hours: f64,
    /// %
    pub efficiency: f64,
    /// kWh per year
    pub energy_potential: f64,
    /// tons CO₂ per year
    pub carbon_offset: f64,
}
