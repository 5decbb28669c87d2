use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Photovoltaic cell technology. Unknown names deserialize to `Unrecognized`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "kebab-case")]
pub enum Technology {
    Monocrystalline,
    Polycrystalline,
    ThinFilm,
    Perc,
    Bifacial,
    #[serde(other)]
    Unrecognized,
}

/// GreenCell form input.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PanelInput {
    /// Purchase date, `YYYY-MM-DD`
    pub purchase_date: Option<String>,
    /// Installed capacity (kW)
    pub capacity: Option<f64>,
    pub technology: Option<Technology>,
    /// Required by the form, not used by the estimate
    pub manufacturer: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum WarrantyStatus {
    Active,
    Expired,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum RecommendedAction {
    Maintain,
    Monitor,
    Replace,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PanelResult {
    /// Whole calendar years since purchase
    pub age: i32,
    pub expected_lifespan: i32,
    pub remaining_years: i32,
    /// % of nameplate output, never below 60
    pub current_efficiency: f64,
    /// % per year
    pub degradation_rate: f64,
    pub warranty_status: WarrantyStatus,
    pub recommended_action: RecommendedAction,
    /// kg CO₂
    pub carbon_offset: f64,
    /// kWh produced so far
    pub energy_generated: f64,
    /// $
    pub replacement_cost: f64,
}
