//! Language handling for the site.
//!
//! The URL is the only place the active language lives between page loads:
//! the default language is served unprefixed (`/menu/`), every other
//! language under its code (`/en/menu/`). [`path`] translates between the
//! two, [`store`] keeps the in-memory language in step with navigation and
//! [`dictionary`] holds the translated strings.

mod dictionary;
mod lang;
mod path;
mod provider;
mod store;

pub use dictionary::{lookup, t, Translations};
pub use lang::Lang;
pub use path::{canonical_path, language_of};
pub use provider::{use_lang, use_locale, Locale, LocaleProvider};
pub use store::{LanguageStore, NavigationObserver, Navigator};

/// Errors raised at the untyped edges of the locale core.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LocaleError {
    #[error("unknown language code: {0:?}")]
    UnknownLanguage(String),
}
