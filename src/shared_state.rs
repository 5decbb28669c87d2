use std::sync::Arc;
use std::time::Instant;

use axum::extract::FromRef;

use crate::config::Config;
use crate::services::presentation::Presenter;

#[derive(Clone, Debug)]
pub struct AppState {
    /// Process start, for uptime reporting
    pub started_at: Instant,
    pub presenter: Arc<Presenter>,
}

impl AppState {
    pub fn new(presenter: Presenter) -> Self {
        Self {
            started_at: Instant::now(),
            presenter: Arc::new(presenter),
        }
    }

    pub fn uptime_seconds(&self) -> u64 {
        self.started_at.elapsed().as_secs()
    }
}

/// Router state. Handlers extract `State<AppState>` and/or `State<Config>`
/// through `FromRef`, so a single `.with_state(shared)` covers both.
#[derive(Clone, Debug)]
pub struct SharedState {
    pub app: AppState,
    pub config: Config,
}

impl SharedState {
    pub fn new(config: Config) -> Self {
        let presenter = Presenter::new(config.presentation.clone());
        Self {
            app: AppState::new(presenter),
            config,
        }
    }
}

impl FromRef<SharedState> for AppState {
    fn from_ref(shared: &SharedState) -> Self {
        shared.app.clone()
    }
}

impl FromRef<SharedState> for Config {
    fn from_ref(shared: &SharedState) -> Self {
        shared.config.clone()
    }
}
