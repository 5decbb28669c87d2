/// ============================================================
///  EcoMeter carbon & ROI estimator
///
///   1. Consumption   – bill / rate → kWh (monthly, annual)
///   2. Footprint     – grid emission factor 0.92 lbs CO₂/kWh
///   3. System sizing – 5 sun hours × 1.2 production ratio, $3/W
///   4. Savings       – 90 % bill reduction, 95 % carbon reduction
///   5. Equivalents   – trees and car miles per ton
/// ============================================================

use crate::errors::ValidationError;
use crate::models::carbon::{CarbonInput, CarbonResult, ImpactLevel};

pub const DEFAULT_ELECTRICITY_RATE: f64 = 0.12; // $/kWh
const EMISSION_FACTOR_LBS_PER_KWH: f64 = 0.92;
const LBS_PER_TON: f64 = 2000.0;
const PEAK_SUN_HOURS: f64 = 5.0;
const PRODUCTION_RATIO: f64 = 1.2;
const COST_PER_KW: f64 = 3000.0;
const BILL_REDUCTION: f64 = 0.9;
const CARBON_REDUCTION: f64 = 0.95;
const TREES_PER_TON: f64 = 16.0;
const CAR_MILES_PER_TON: f64 = 2400.0;
const NATIONAL_AVERAGE_TONS: f64 = 16.0;

pub fn estimate(input: &CarbonInput) -> Result<CarbonResult, ValidationError> {
    let monthly = match input.monthly_bill {
        None => return Err(ValidationError::MissingField("monthlyBill")),
        Some(v) if v > 0.0 => v,
        Some(_) => return Err(ValidationError::NonPositive("monthlyBill")),
    };
    let household = match input.household_size.map(f64::trunc) {
        None => return Err(ValidationError::MissingField("householdSize")),
        Some(n) if n >= 1.0 => n,
        Some(_) => return Err(ValidationError::NonPositive("householdSize")),
    };
    let rate = match input.electricity_rate {
        None => DEFAULT_ELECTRICITY_RATE,
        Some(v) if v > 0.0 => v,
        Some(_) => return Err(ValidationError::NonPositive("electricityRate")),
    };

    let monthly_kwh = monthly / rate;
    let annual_kwh = monthly_kwh * 12.0;

    let monthly_carbon = monthly_kwh * EMISSION_FACTOR_LBS_PER_KWH;
    let annual_carbon = annual_kwh * EMISSION_FACTOR_LBS_PER_KWH;
    let carbon_tons = annual_carbon / LBS_PER_TON;

    let system_size = annual_kwh / (365.0 * PEAK_SUN_HOURS * PRODUCTION_RATIO);
    let system_cost = system_size * COST_PER_KW;

    let annual_savings = monthly * 12.0 * BILL_REDUCTION;

    Ok(CarbonResult {
        monthly_kwh,
        annual_kwh,
        monthly_carbon,
        annual_carbon,
        carbon_tons,
        impact_level: impact_level(displayed_tons(carbon_tons)),
        system_size,
        system_cost,
        annual_savings,
        carbon_reduction: carbon_tons * CARBON_REDUCTION,
        payback_period: system_cost / annual_savings,
        trees_equivalent: carbon_tons * TREES_PER_TON,
        car_miles: carbon_tons * CAR_MILES_PER_TON,
        per_person_carbon: carbon_tons / household,
        national_average: NATIONAL_AVERAGE_TONS,
        savings10: annual_savings * 10.0,
        savings20: annual_savings * 20.0,
        roi20: (annual_savings * 20.0 - system_cost) / system_cost * 100.0,
    })
}

/// Tons as shown to the user, one decimal place.
fn displayed_tons(tons: f64) -> f64 {
    (tons * 10.0).round() / 10.0
}

/// Threshold ladder on annual tons of CO₂.
pub fn impact_level(tons: f64) -> ImpactLevel {
    if tons < 5.0 {
        ImpactLevel::Low
    } else if tons < 10.0 {
        ImpactLevel::Moderate
    } else if tons < 15.0 {
        ImpactLevel::High
    } else {
        ImpactLevel::VeryHigh
    }
}
