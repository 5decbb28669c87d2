use axum::{Json, extract::State};

use crate::errors::{Error, ErrorDto};
use crate::models::carbon::{CarbonInput, CarbonResult};
use crate::models::envelope::{EstimateEnvelope, EstimatorKind};
use crate::models::farm::{FarmInput, FarmResult};
use crate::models::orientation::{AddressInput, OrientationResult};
use crate::models::panel::{PanelInput, PanelResult};
use crate::models::savings::{SavingsInput, SavingsResult};
use crate::services::{
    carbon_estimator, farm_estimator, orientation_estimator, panel_estimator, savings_estimator,
};
use crate::shared_state::AppState;

pub static ESTIMATES_TAG: &str = "estimates";

/// Computes, logs and presents one estimate.
async fn respond<T: std::fmt::Debug>(
    state: &AppState,
    kind: EstimatorKind,
    computed: Result<T, crate::errors::ValidationError>,
) -> Result<Json<EstimateEnvelope<T>>, Error> {
    let result = computed?;
    #[cfg(feature = "verbose_log")]
    tracing::debug!("{:?} estimate: {:?}", kind, result);
    tracing::info!("{:?} estimate computed", kind);
    Ok(Json(state.presenter.present(kind, result).await))
}

/// POST /api/estimates/savings
/// SolarPay: savings, ROI and financing from a monthly bill
#[utoipa::path(
    post,
    path = "/api/estimates/savings",
    tag = ESTIMATES_TAG,
    request_body = SavingsInput,
    responses(
        (status = 200, description = "Savings estimate", body = EstimateEnvelope<SavingsResult>),
        (status = 400, description = "Missing or non-positive bill", body = ErrorDto)
    )
)]
pub async fn estimate_savings(
    State(state): State<AppState>,
    Json(input): Json<SavingsInput>,
) -> Result<Json<EstimateEnvelope<SavingsResult>>, Error> {
    respond(&state, EstimatorKind::Savings, savings_estimator::estimate(&input)).await
}

/// POST /api/estimates/carbon
/// EcoMeter: household carbon footprint and offsetting system
#[utoipa::path(
    post,
    path = "/api/estimates/carbon",
    tag = ESTIMATES_TAG,
    request_body = CarbonInput,
    responses(
        (status = 200, description = "Carbon estimate", body = EstimateEnvelope<CarbonResult>),
        (status = 400, description = "Missing bill or household size", body = ErrorDto)
    )
)]
pub async fn estimate_carbon(
    State(state): State<AppState>,
    Json(input): Json<CarbonInput>,
) -> Result<Json<EstimateEnvelope<CarbonResult>>, Error> {
    respond(&state, EstimatorKind::Carbon, carbon_estimator::estimate(&input)).await
}

/// POST /api/estimates/panel-lifespan
/// GreenCell: panel age, efficiency and replacement outlook
///
/// Age is evaluated against the server's local calendar date.
#[utoipa::path(
    post,
    path = "/api/estimates/panel-lifespan",
    tag = ESTIMATES_TAG,
    request_body = PanelInput,
    responses(
        (status = 200, description = "Panel lifespan estimate", body = EstimateEnvelope<PanelResult>),
        (status = 400, description = "Missing panel details or future purchase date", body = ErrorDto)
    )
)]
pub async fn estimate_panel_lifespan(
    State(state): State<AppState>,
    Json(input): Json<PanelInput>,
) -> Result<Json<EstimateEnvelope<PanelResult>>, Error> {
    let today = chrono::Local::now().date_naive();
    respond(&state, EstimatorKind::PanelLifespan, panel_estimator::estimate(&input, today)).await
}

/// POST /api/estimates/agrovoltaic
/// AgriSolar: crop picks and combined solar/crop revenue
#[utoipa::path(
    post,
    path = "/api/estimates/agrovoltaic",
    tag = ESTIMATES_TAG,
    request_body = FarmInput,
    responses(
        (status = 200, description = "Agrovoltaic estimate", body = EstimateEnvelope<FarmResult>),
        (status = 400, description = "Missing farm details", body = ErrorDto)
    )
)]
pub async fn estimate_agrovoltaic(
    State(state): State<AppState>,
    Json(input): Json<FarmInput>,
) -> Result<Json<EstimateEnvelope<FarmResult>>, Error> {
    respond(&state, EstimatorKind::Agrovoltaic, farm_estimator::estimate(&input)).await
}

/// POST /api/estimates/orientation
/// SolarAI: recommended tilt and azimuth (fixed reference values)
#[utoipa::path(
    post,
    path = "/api/estimates/orientation",
    tag = ESTIMATES_TAG,
    request_body = AddressInput,
    responses(
        (status = 200, description = "Orientation estimate", body = EstimateEnvelope<OrientationResult>),
        (status = 400, description = "Address required", body = ErrorDto)
    )
)]
pub async fn estimate_orientation(
    State(state): State<AppState>,
    Json(input): Json<AddressInput>,
) -> Result<Json<EstimateEnvelope<OrientationResult>>, Error> {
    respond(&state, EstimatorKind::Orientation, orientation_estimator::estimate(&input)).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::presentation::Presenter;

    fn state() -> State<AppState> {
        State(AppState::new(Presenter::default()))
    }

    #[tokio::test]
    async fn test_savings_handler_wraps_result() {
        let input = SavingsInput { monthly_bill: Some(150.0) };
        let Json(env) = estimate_savings(state(), Json(input)).await.unwrap();
        assert_eq!(env.estimator, EstimatorKind::Savings);
        assert_eq!(env.result.system_cost, 14400.0);
    }

    #[tokio::test]
    async fn test_carbon_handler_rejects_missing_household() {
        let input = CarbonInput { monthly_bill: Some(150.0), ..Default::default() };
        let err = estimate_carbon(state(), Json(input)).await.unwrap_err();
        assert!(matches!(err, Error::Validation(_)));
    }

    #[tokio::test]
    async fn test_panel_handler_uses_current_date() {
        let input = PanelInput {
            purchase_date: Some("2000-01-01".to_string()),
            capacity: Some(5.0),
            technology: Some(crate::models::panel::Technology::Perc),
            manufacturer: Some("Q Cells".to_string()),
        };
        let Json(env) = estimate_panel_lifespan(state(), Json(input)).await.unwrap();
        assert!(env.result.age >= 26);
    }

    #[tokio::test]
    async fn test_orientation_handler_echoes_address() {
        let input = AddressInput { address: Some("12 Sun Lane".to_string()) };
        let Json(env) = estimate_orientation(state(), Json(input)).await.unwrap();
        assert_eq!(env.result.location, "12 Sun Lane");
        assert_eq!(env.message, "Solar optimization results are ready!");
    }
}
