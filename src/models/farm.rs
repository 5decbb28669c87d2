use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Dominant soil of the farm. Unknown names deserialize to `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum SoilType {
    Clay,
    Sandy,
    Loam,
    Silt,
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum Crop {
    Corn,
    Soybeans,
    Wheat,
    Alfalfa,
    Potatoes,
    Carrots,
    Peanuts,
    SweetCorn,
    Tomatoes,
    Peppers,
    Lettuce,
    Beans,
    Rice,
    Sugarcane,
    Cotton,
    Onions,
}


/// AgriSolar form input.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FarmInput {
    pub location: Option<String>,
    /// acres
    pub farm_size: Option<f64>,
    pub soil_type: Option<SoilType>,
    /// Free text, accepted but not used
    pub current_crops: Option<String>,
}

/// Site weather shown beside the analysis. Static, not fetched.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct WeatherSnapshot {
    /// °F
    pub temperature: f64,
    /// %
    pub humidity: f64,
    /// inches per month
    pub rainfall: f64,
    /// hours per day
    pub sunshine: f64,
    pub season: String,
    pub forecast: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct SeasonalRecommendations {
    pub spring: String,
    pub summer: String,
    pub fall: String,
    pub winter: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FarmResult {
    pub location: String,
    pub farm_size: f64,
    pub soil_type: SoilType,
    pub recommended_crops: Vec<Crop>,
    /// kW
    pub solar_capacity: f64,
    /// kWh per year
    pub annual_energy: f64,
    /// $ per year
    pub energy_revenue: f64,
    /// % crop yield gain under panel shade
    pub yield_increase: f64,
    /// % irrigation saved
    pub water_savings: f64,
    /// $ per year, energy plus crop uplift
    pub total_revenue: f64,
    /// tons CO₂ per year
    pub carbon_offset: f64,
    pub installation_cost: f64,
    /// years
    pub payback_period: f64,
    pub weather_optimized: bool,
    pub weather: WeatherSnapshot,
    pub seasonal_recommendations: SeasonalRecommendations,
}
