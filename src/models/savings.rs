use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// SolarPay form input.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SavingsInput {
    /// Current monthly electricity bill ($)
    pub monthly_bill: Option<f64>,
}

/// Savings, ROI and financing figures for a rooftop system sized from the bill.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SavingsResult {
    pub monthly_bill: f64,
    pub annual_bill: f64,
    /// Installed system cost, fixed at 8× the annual bill ($)
    pub system_cost: f64,
    /// Net savings after 10/20/30 years ($)
    pub savings10: f64,
    pub savings20: f64,
    pub savings30: f64,
    /// Whole years until savings cover the system cost
    pub payback_period: f64,
    /// Flat 10-year financing payment ($/month)
    pub monthly_payment: f64,
    /// Bill minus financing payment ($/month)
    pub monthly_savings: f64,
    /// APR printed next to the financing offer; display only
    pub advertised_apr: f64,
    /// Return on investment after 10/20/30 years (%)
    pub roi10: f64,
    pub roi20: f64,
    pub roi30: f64,
}
