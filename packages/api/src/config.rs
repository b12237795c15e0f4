#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    Local,
    Production,
}

impl AppMode {
    pub fn from_env() -> Self {
        match std::env::var("APP_MODE")
            .unwrap_or_default()
            .to_lowercase()
            .as_str()
        {
            "local" => AppMode::Local,
            _ => AppMode::Production, // Default to production for safety
        }
    }
}

pub const DEFAULT_FORMS_ENDPOINT: &str = "https://api.web3forms.com/submit";

/// Where reservation requests end up.
#[derive(Clone, PartialEq, Eq)]
pub enum FormsConfig {
    Web3Forms { access_key: String, endpoint: String },
    /// Log submissions instead of sending them.
    Console,
}

impl std::fmt::Debug for FormsConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FormsConfig::Web3Forms { endpoint, .. } => f
                .debug_struct("Web3Forms")
                .field("access_key", &"***")
                .field("endpoint", endpoint)
                .finish(),
            FormsConfig::Console => f.write_str("Console"),
        }
    }
}

#[derive(Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub mode: AppMode,
    pub forms: FormsConfig,
    /// Key for signing booking tickets. Unset means a random key per process,
    /// which is fine for a single instance.
    pub ticket_secret: Option<String>,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("mode", &self.mode)
            .field("forms", &self.forms)
            .field("ticket_secret", &self.ticket_secret.as_ref().map(|_| "***"))
            .finish()
    }
}

#[cfg(feature = "server")]
impl AppConfig {
    /// Local mode never talks to the forms API; production requires a key.
    pub fn from_env() -> anyhow::Result<Self> {
        let mode = AppMode::from_env();
        let forms = match mode {
            AppMode::Local => FormsConfig::Console,
            AppMode::Production => {
                let access_key = std::env::var("WEB3FORMS_ACCESS_KEY")
                    .ok()
                    .filter(|key| !key.trim().is_empty())
                    .ok_or_else(|| {
                        anyhow::anyhow!("WEB3FORMS_ACCESS_KEY is required in production mode")
                    })?;
                let endpoint = std::env::var("WEB3FORMS_ENDPOINT")
                    .unwrap_or_else(|_| DEFAULT_FORMS_ENDPOINT.to_string());
                FormsConfig::Web3Forms {
                    access_key,
                    endpoint,
                }
            }
        };
        let ticket_secret = std::env::var("BOOKING_TICKET_SECRET")
            .ok()
            .filter(|secret| !secret.trim().is_empty());
        Ok(Self {
            mode,
            forms,
            ticket_secret,
        })
    }
}

/// Read `.env` if present; variables already set in the environment win.
#[cfg(feature = "server")]
pub fn load_dotenv() {
    match dotenvy::dotenv() {
        Ok(path) => tracing::debug!("config.load_dotenv: loaded {}", path.display()),
        Err(e) if e.not_found() => {}
        Err(e) => tracing::warn!("config.load_dotenv: {e}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Tests below mutate process-wide environment variables.
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    #[test]
    fn test_app_mode_defaults_to_production() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        std::env::remove_var("APP_MODE");
        assert_eq!(AppMode::from_env(), AppMode::Production);
    }

    #[test]
    fn test_app_mode_local_case_insensitive() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        std::env::set_var("APP_MODE", "LOCAL");
        assert_eq!(AppMode::from_env(), AppMode::Local);
        std::env::remove_var("APP_MODE");
    }

    #[test]
    fn test_app_mode_invalid_defaults_to_production() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        std::env::set_var("APP_MODE", "invalid");
        assert_eq!(AppMode::from_env(), AppMode::Production);
        std::env::remove_var("APP_MODE");
    }

    #[test]
    fn test_forms_config_debug_hides_key() {
        let forms = FormsConfig::Web3Forms {
            access_key: "secret".to_string(),
            endpoint: DEFAULT_FORMS_ENDPOINT.to_string(),
        };
        let debug = format!("{forms:?}");
        assert!(!debug.contains("secret"));
        assert!(debug.contains("api.web3forms.com"));
    }

    #[test]
    fn test_app_config_debug_hides_ticket_secret() {
        let config = AppConfig {
            mode: AppMode::Local,
            forms: FormsConfig::Console,
            ticket_secret: Some("hunter2".to_string()),
        };
        let debug = format!("{config:?}");
        assert!(!debug.contains("hunter2"));
        assert!(debug.contains("ticket_secret"));
    }

    #[cfg(feature = "server")]
    #[test]
    fn test_ticket_secret_from_env() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        std::env::set_var("APP_MODE", "local");
        std::env::set_var("BOOKING_TICKET_SECRET", "  ");
        assert_eq!(AppConfig::from_env().unwrap().ticket_secret, None);

        std::env::set_var("BOOKING_TICKET_SECRET", "s3cret");
        assert_eq!(
            AppConfig::from_env().unwrap().ticket_secret.as_deref(),
            Some("s3cret")
        );
        std::env::remove_var("BOOKING_TICKET_SECRET");
        std::env::remove_var("APP_MODE");
    }

    #[cfg(feature = "server")]
    #[test]
    fn test_local_mode_uses_console_forms() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        std::env::set_var("APP_MODE", "local");
        let config = AppConfig::from_env().unwrap();
        assert_eq!(config.forms, FormsConfig::Console);
        std::env::remove_var("APP_MODE");
    }

    #[cfg(feature = "server")]
    #[test]
    fn test_production_requires_access_key() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        std::env::set_var("APP_MODE", "production");
        std::env::remove_var("WEB3FORMS_ACCESS_KEY");
        assert!(AppConfig::from_env().is_err());

        std::env::set_var("WEB3FORMS_ACCESS_KEY", "abc");
        std::env::remove_var("WEB3FORMS_ENDPOINT");
        let config = AppConfig::from_env().unwrap();
        assert_eq!(
            config.forms,
            FormsConfig::Web3Forms {
                access_key: "abc".to_string(),
                endpoint: DEFAULT_FORMS_ENDPOINT.to_string(),
            }
        );
        std::env::remove_var("WEB3FORMS_ACCESS_KEY");
        std::env::remove_var("APP_MODE");
    }
}
