/// ============================================================
///  AgriSolar agrovoltaic estimator
///
///   1. Crop picks      – static soil → crop table
///   2. Solar capacity  – 0.5 kW per acre under panels
///   3. Energy revenue  – 1200 kWh/kW/yr sold at $0.12/kWh
///   4. Crop uplift     – 15 % yield gain on $500/acre base
///   5. Payback         – $2.50/W install cost over energy revenue
/// ============================================================

use crate::errors::ValidationError;
use crate::models::farm::{
    Crop, FarmInput, FarmResult, SeasonalRecommendations, SoilType, WeatherSnapshot,
};

const KW_PER_ACRE: f64 = 0.5;
const KWH_PER_KW_YEAR: f64 = 1200.0;
const ENERGY_PRICE: f64 = 0.12; // $/kWh
const YIELD_INCREASE_PCT: f64 = 15.0;
const WATER_SAVINGS_PCT: f64 = 20.0;
const BASE_CROP_REVENUE_PER_ACRE: f64 = 500.0;
const TONS_CO2_PER_KWH: f64 = 0.0004;
const INSTALL_COST_PER_KW: f64 = 2500.0;

const DEFAULT_CROPS: &[Crop] = &[Crop::Corn, Crop::Soybeans];

/// Crops suited to a soil, best first.
pub fn recommended_crops(soil: SoilType) -> &'static [Crop] {
    match soil {
        SoilType::Clay => &[Crop::Corn, Crop::Soybeans, Crop::Wheat, Crop::Alfalfa],
        SoilType::Sandy => &[Crop::Potatoes, Crop::Carrots, Crop::Peanuts, Crop::SweetCorn],
        SoilType::Loam => &[Crop::Tomatoes, Crop::Peppers, Crop::Lettuce, Crop::Beans],
        SoilType::Silt => &[Crop::Rice, Crop::Sugarcane, Crop::Cotton, Crop::Onions],
        SoilType::Other => DEFAULT_CROPS,
    }
}

/// Conditions displayed for any entered location.
pub fn site_weather() -> WeatherSnapshot {
    WeatherSnapshot {
        temperature: 75.0,
        humidity: 65.0,
        rainfall: 28.0,
        sunshine: 8.5,
        season: "Spring".to_string(),
        forecast: "Favorable growing conditions with adequate moisture".to_string(),
    }
}

fn seasonal_recommendations() -> SeasonalRecommendations {
    SeasonalRecommendations {
        spring: "Plant shade-tolerant crops under panels".to_string(),
        summer: "Maximize cooling benefits from panel shade".to_string(),
        fall: "Harvest with equipment clearance considerations".to_string(),
        winter: "Plan maintenance and crop rotation".to_string(),
    }
}

pub fn estimate(input: &FarmInput) -> Result<FarmResult, ValidationError> {
    let location = match input.location.as_deref().map(str::trim) {
        Some(s) if !s.is_empty() => s,
        _ => return Err(ValidationError::MissingField("location")),
    };
    let farm_size = match input.farm_size {
        None => return Err(ValidationError::MissingField("farmSize")),
        Some(v) if v > 0.0 => v,
        Some(_) => return Err(ValidationError::NonPositive("farmSize")),
    };
    let soil_type = input.soil_type.ok_or(ValidationError::MissingField("soilType"))?;

    let solar_capacity = farm_size * KW_PER_ACRE;
    let annual_energy = solar_capacity * KWH_PER_KW_YEAR;
    let energy_revenue = annual_energy * ENERGY_PRICE;
    let installation_cost = solar_capacity * INSTALL_COST_PER_KW;
    let crop_uplift = farm_size * BASE_CROP_REVENUE_PER_ACRE * (YIELD_INCREASE_PCT / 100.0);

    Ok(FarmResult {
        location: location.to_string(),
        farm_size,
        soil_type,
        recommended_crops: recommended_crops(soil_type).to_vec(),
        solar_capacity,
        annual_energy,
        energy_revenue,
        yield_increase: YIELD_INCREASE_PCT,
        water_savings: WATER_SAVINGS_PCT,
        total_revenue: energy_revenue + crop_uplift,
        carbon_offset: annual_energy * TONS_CO2_PER_KWH,
        installation_cost,
        payback_period: installation_cost / energy_revenue,
        weather_optimized: true,
        weather: site_weather(),
        seasonal_recommendations: seasonal_recommendations(),
    })
}
