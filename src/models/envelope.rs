use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "kebab-case")]
pub enum EstimatorKind {
    Savings,
    Carbon,
    PanelLifespan,
    Agrovoltaic,
    Orientation,
}

impl EstimatorKind {
    /// Heading of the completion notice.
    pub fn title(self) -> &'static str {
        match self {
            EstimatorKind::Savings => "Calculation Complete",
            _ => "Analysis Complete",
        }
    }

    /// Body of the completion notice.
    pub fn message(self) -> &'static str {
        match self {
            EstimatorKind::Savings => "Your solar savings analysis is ready!",
            EstimatorKind::Carbon => "Your carbon footprint and ROI analysis is ready!",
            EstimatorKind::PanelLifespan => "Solar panel lifespan analysis is ready!",
            EstimatorKind::Agrovoltaic => "Your agrovoltaic farming recommendations are ready!",
            EstimatorKind::Orientation => "Solar optimization results are ready!",
        }
    }
}

/// A computed result as handed to the display layer.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EstimateEnvelope<T> {
    pub id: Uuid,
    pub estimator: EstimatorKind,
    pub title: String,
    pub message: String,
    pub computed_at: DateTime<Utc>,
    pub result: T,
}
