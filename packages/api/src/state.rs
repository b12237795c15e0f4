use crate::config::{AppConfig, AppMode, FormsConfig};
use crate::forms::{ConsoleFormsService, FormsService, Web3FormsService};
use crate::ticket::TicketSigner;
use std::sync::{Arc, OnceLock};

/// Global application state containing all service implementations
pub struct AppState {
    pub forms: Arc<dyn FormsService>,
    pub tickets: TicketSigner,
    pub config: AppConfig,
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl AppState {
    /// Create AppState from configuration
    pub fn from_config(config: AppConfig) -> anyhow::Result<Self> {
        match config.mode {
            AppMode::Local => tracing::info!("🔧 App Mode: LOCAL"),
            AppMode::Production => tracing::info!("🚀 App Mode: PRODUCTION"),
        }

        let forms: Arc<dyn FormsService> = match &config.forms {
            FormsConfig::Web3Forms {
                access_key,
                endpoint,
            } => {
                tracing::info!("   Forms: Web3Forms ({})", endpoint);
                Arc::new(Web3FormsService::new(endpoint, access_key))
            }
            FormsConfig::Console => {
                tracing::info!("   Forms: Console (not sending)");
                Arc::new(ConsoleFormsService)
            }
        };

        let tickets = match &config.ticket_secret {
            Some(secret) => {
                tracing::info!("   Tickets: configured key");
                TicketSigner::new(secret.as_bytes())?
            }
            None => {
                tracing::info!("   Tickets: random per-process key");
                TicketSigner::random()?
            }
        };

        Ok(Self {
            forms,
            tickets,
            config,
        })
    }

    /// Set the global AppState instance
    ///
    /// This should be called once at server startup.
    /// Panics if called more than once.
    pub fn set_global(state: Arc<Self>) {
        STATE
            .set(state)
            .expect("AppState::set_global called more than once");
    }

    /// Get the global AppState instance
    ///
    /// Panics if called before set_global.
    pub fn global() -> Arc<Self> {
        // In tests, check thread-local state first
        if let Some(test_state) = TEST_STATE.with(|s| s.borrow().clone()) {
            return test_state;
        }

        STATE
            .get()
            .expect("AppState::global called before set_global")
            .clone()
    }
}

/// Global state storage using OnceLock for thread-safe initialization
pub(crate) static STATE: OnceLock<Arc<AppState>> = OnceLock::new();

thread_local! {
    /// Thread-local state override for testing
    pub(crate) static TEST_STATE: std::cell::RefCell<Option<Arc<AppState>>> = const { std::cell::RefCell::new(None) };
}
