use pizzeria_menu::PizzaService;

use crate::config::Config;

/// Shared request-handling state.
///
/// There is no pooled connection here: each request opens its own scoped
/// store session against `config.database_path`.
pub struct AppState {
    pub config: Config,
    /// Placeholder in-memory provider, not routed anywhere yet
    #[allow(dead_code)]
    pub menu: PizzaService,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        AppState {
            config,
            menu: PizzaService::new(),
        }
    }
}
