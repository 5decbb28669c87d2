//! Hands computed estimates to the display layer.
//!
//! Computation never waits. The optional pause happens here, after the figures
//! are final, so it can be switched off (or tested on a paused clock) without
//! touching any estimator.

use std::time::Duration;

use chrono::Utc;
use uuid::Uuid;

use crate::config::PresentationConfig;
use crate::models::envelope::{EstimateEnvelope, EstimatorKind};

#[derive(Debug, Clone, Default)]
pub struct Presenter {
    config: PresentationConfig,
}

impl Presenter {
    pub fn new(config: PresentationConfig) -> Self {
        Self { config }
    }

    /// Pause applied before `kind` results are shown.
    pub fn delay_for(&self, kind: EstimatorKind) -> Duration {
        if !self.config.simulate_delay {
            return Duration::ZERO;
        }
        let ms = match kind {
            EstimatorKind::Savings => self.config.savings_delay_ms,
            EstimatorKind::Carbon => self.config.carbon_delay_ms,
            EstimatorKind::PanelLifespan => self.config.panel_delay_ms,
            EstimatorKind::Agrovoltaic => self.config.farm_delay_ms,
            EstimatorKind::Orientation => self.config.orientation_delay_ms,
        };
        Duration::from_millis(ms)
    }

    /// Wrap `result` with its completion notice, waiting first if configured.
    pub async fn present<T>(&self, kind: EstimatorKind, result: T) -> EstimateEnvelope<T> {
        let delay = self.delay_for(kind);
        if !delay.is_zero() {
            tracing::debug!("holding {:?} result for {} ms", kind, delay.as_millis());
            tokio::time::sleep(delay).await;
        }

        EstimateEnvelope {
            id: Uuid::new_v4(),
            estimator: kind,
            title: kind.title().to_string(),
            message: kind.message().to_string(),
            computed_at: Utc::now(),
            result,
        }
    }
}
