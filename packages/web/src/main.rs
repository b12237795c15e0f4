use dioxus::prelude::*;

/// Every path lands on [`Site`]; the page and language are resolved from the
/// path itself so that `/menu`, `/menu/` and `/ru/menu/` share one entry.
#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(SiteShell)]
    #[route("/")]
    Root {},
    #[route("/:..segments")]
    Site { segments: Vec<String> },
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    install_panic_hook();

    #[cfg(feature = "server")]
    init_tracing();

    #[cfg(feature = "server")]
    init_server_state();

    #[cfg(feature = "server")]
    log_runtime_config();

    dioxus::launch(App);
}

fn install_panic_hook() {
    std::panic::set_hook(Box::new(|info| {
        eprintln!("panic: {info}");
    }));
}

#[cfg(feature = "server")]
fn init_tracing() {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

#[cfg(feature = "server")]
fn init_server_state() {
    use std::sync::Arc;

    api::config::load_dotenv();

    let state = api::config::AppConfig::from_env().and_then(api::state::AppState::from_config);
    let state = match state {
        Ok(state) => state,
        Err(e) => {
            tracing::error!("startup: configuration error: {e:#}");
            std::process::exit(1);
        }
    };

    api::state::AppState::set_global(Arc::new(state));
    tracing::info!("startup: server initialization complete");
}

#[cfg(feature = "server")]
fn log_runtime_config() {
    use std::env;

    let ip = env::var("IP").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port = env::var("PORT").unwrap_or_else(|_| "8080".to_string());
    let mode = env::var("APP_MODE").unwrap_or_else(|_| "<unset>".to_string());
    tracing::info!("startup: IP={ip} PORT={port} APP_MODE={mode}");

    if api::config::AppMode::from_env() == api::config::AppMode::Production {
        log_missing_envs("forms", &["WEB3FORMS_ACCESS_KEY"]);
    }
}

#[cfg(feature = "server")]
fn log_missing_envs(group: &str, keys: &[&str]) {
    let missing: Vec<&str> = keys
        .iter()
        .copied()
        .filter(|key| std::env::var(key).map_or(true, |v| v.trim().is_empty()))
        .collect();
    if missing.is_empty() {
        return;
    }

    tracing::warn!("startup: missing {group} envs: {}", missing.join(", "));
}

#[component]
fn App() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        ui::SiteTheme {}
        ui::ToastProvider {
            Router::<Route> {}
        }
    }
}

/// Feeds the router's path into the locale store and wraps every page.
#[component]
fn SiteShell() -> Element {
    let path = use_route::<Route>().to_string();

    rsx! {
        ui::LocaleProvider { path,
            Outlet::<Route> {}
        }
    }
}

#[component]
fn Root() -> Element {
    rsx! { ui::SitePage { path: "/".to_string() } }
}

#[component]
fn Site(segments: Vec<String>) -> Element {
    let path = format!("/{}", segments.join("/"));
    rsx! { ui::SitePage { path } }
}
