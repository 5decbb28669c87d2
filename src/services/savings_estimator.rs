/// ============================================================
///  SolarPay savings estimator
///
///   1. Annual bill        – monthly bill × 12
///   2. System cost        – fixed 8× the annual bill
///   3. Net savings / ROI  – over 10, 20 and 30 year horizons
///   4. Payback            – cost / annual bill, whole years
///   5. Financing          – flat 120-month split, no interest
/// ============================================================

use crate::errors::ValidationError;
use crate::models::savings::{SavingsInput, SavingsResult};

const SYSTEM_COST_MULTIPLIER: f64 = 8.0;
const FINANCING_MONTHS: f64 = 120.0;
/// Shown next to the financing offer; the payment itself is interest-free.
const ADVERTISED_APR: f64 = 3.99;

pub fn estimate(input: &SavingsInput) -> Result<SavingsResult, ValidationError> {
    let monthly = match input.monthly_bill {
        Some(v) if v > 0.0 => v,
        _ => return Err(ValidationError::InvalidBillAmount),
    };

    let annual = monthly * 12.0;
    let system_cost = annual * SYSTEM_COST_MULTIPLIER;

    let net_savings = |years: f64| annual * years - system_cost;
    let roi = |years: f64| net_savings(years) / system_cost * 100.0;

    let monthly_payment = system_cost / FINANCING_MONTHS;

    Ok(SavingsResult {
        monthly_bill: monthly,
        annual_bill: annual,
        system_cost,
        savings10: net_savings(10.0),
        savings20: net_savings(20.0),
        savings30: net_savings(30.0),
        payback_period: (system_cost / annual).round(),
        monthly_payment,
        monthly_savings: monthly - monthly_payment,
        advertised_apr: ADVERTISED_APR,
        roi10: roi(10.0),
        roi20: roi(20.0),
        roi30: roi(30.0),
    })
}
