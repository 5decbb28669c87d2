use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// EcoMeter form input.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CarbonInput {
    /// Monthly electricity bill ($)
    pub monthly_bill: Option<f64>,
    /// People living in the household; fractions are truncated
    pub household_size: Option<f64>,
    /// Electricity price ($/kWh), 0.12 when omitted
    pub electricity_rate: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum ImpactLevel {
    Low,
    Moderate,
    High,
    #[serde(rename = "Very High")]
    VeryHigh,
}

/// Household energy use, carbon footprint and the solar system that offsets it.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CarbonResult {
    pub monthly_kwh: f64,
    pub annual_kwh: f64,
    /// lbs CO₂
    pub monthly_carbon: f64,
    /// lbs CO₂
    pub annual_carbon: f64,
    /// short tons CO₂ per year
    pub carbon_tons: f64,
    pub impact_level: ImpactLevel,
    /// kW
    pub system_size: f64,
    pub system_cost: f64,
    pub annual_savings: f64,
    /// tons CO₂ avoided per year
    pub carbon_reduction: f64,
    /// years
    pub payback_period: f64,
    pub trees_equivalent: f64,
    pub car_miles: f64,
    /// tons CO₂ per household member
    pub per_person_carbon: f64,
    /// US per-person average, tons CO₂
    pub national_average: f64,
    pub savings10: f64,
    pub savings20: f64,
    /// %
    pub roi20: f64,
}
