//! HTTP API handlers.

use std::sync::Arc;

use axum::{extract::State, response::Html};
use tracing::debug;

use crate::env::{ReadEnv, SystemEnv};
use crate::greeting::{render_greeting, resolve_environment};
use crate::metrics;

/// Application state shared with handlers.
#[derive(Clone)]
pub struct AppState {
    /// Source of the per-request `ENV` lookup.
    pub env: Arc<dyn ReadEnv>,
}

impl AppState {
    /// State backed by the process environment.
    pub fn new() -> Self {
        Self::with_env(SystemEnv)
    }

    /// State backed by a custom environment source.
    pub fn with_env(env: impl ReadEnv + 'static) -> Self {
        Self { env: Arc::new(env) }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState").finish_non_exhaustive()
    }
}

/// Root handler - greets with the current environment name.
pub async fn home(State(state): State<AppState>) -> Html<String> {
    let _timer = metrics::timer_greeting();

    let environment = resolve_environment(state.env.as_ref());
    debug!(environment = %environment, "Serving greeting");
    metrics::inc_greetings_served(&environment);

    Html(render_greeting(&environment))
}
