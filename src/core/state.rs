// Application state (AppState)

use crate::auth::service::AuthService;
use crate::backend::{direct::DirectBackend, rest::RestBackend, Backend};
use crate::core::config::{BackendMode, Config};
use crate::core::startup::seed_category_defaults;
use crate::report::service::ReportService;
use crate::session::store::SessionStore;
use anyhow::Result;
use std::sync::Arc;

/// Shared application state handed to every request handler.
#[derive(Clone)]
pub struct AppState {
    pub auth: Arc<AuthService>,
    pub report: Arc<ReportService>,
    pub backend: Arc<dyn Backend>,
    pub config: Arc<Config>,
}

impl AppState {
    /// Build the backend named by the config (seeding the direct-mode
    /// tables when applicable), open the session store, and wire the
    /// services on top.
    pub fn new(config: Config) -> Result<Self> {
        let config = Arc::new(config);

        let backend: Arc<dyn Backend> = match config.backend.mode {
            BackendMode::Direct => {
                let direct = DirectBackend::new(config.auth.bcrypt_cost);
                seed_category_defaults(direct.tables(), &config.seed);
                Arc::new(direct)
            }
            BackendMode::Rest => Arc::new(RestBackend::new(
                config.backend.endpoint.clone(),
                config.backend.request_timeout_secs,
            )?),
        };

        let session = Arc::new(SessionStore::open(config.auth.session_file.clone()));

        Ok(Self {
            auth: Arc::new(AuthService::new(Arc::clone(&backend), session)),
            report: Arc::new(ReportService::new(Arc::clone(&backend))),
            backend,
            config,
        })
    }
}
