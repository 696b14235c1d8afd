use std::sync::Arc;

use crate::catalog::Catalog;
use crate::config::Config;
use crate::llm_client::TextGenerator;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Read-only for the process lifetime.
    pub catalog: Arc<Catalog>,
    /// Advisory text generator. Default: `LlmClient`.
    pub generator: Arc<dyn TextGenerator>,
    pub config: Config,
}
