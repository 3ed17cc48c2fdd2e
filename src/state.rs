//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! holds the site configuration, the upstream API client, and the live
//! scoreboard. Nothing here is mutated by handlers; the scoreboard is written
//! only by its background task.

use std::sync::Arc;

use crate::api::LeagueApi;
use crate::config::SiteConfig;
use crate::live::{self, SharedScoreboard};

/// Shared application state, injected into Axum handlers via State extractor.
/// Clone is required by Axum; all inner fields are Arc-wrapped or Clone.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<SiteConfig>,
    pub api: LeagueApi,
    pub live: SharedScoreboard,
}

impl AppState {
    #[must_use]
    pub fn new(config: SiteConfig, api: LeagueApi) -> Self {
        Self { config: Arc::new(config), api, live: live::shared() }
    }
}
