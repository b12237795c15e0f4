//! This crate contains all shared UI for the workspace.

pub mod locale;
pub use locale::{
    canonical_path, language_of, lookup, t, use_lang, use_locale, Lang, LanguageStore, Locale,
    LocaleError, LocaleProvider, NavigationObserver, Navigator, Translations,
};

pub mod routes;
pub use routes::{site_routes, Page, Resolved, RouteTable};

pub mod menu;

pub mod seo;
pub use seo::{Seo, SeoMeta};

pub mod venue;

mod booking_form;
pub use booking_form::BookingForm;

mod language_picker;
pub use language_picker::LanguagePicker;

mod layout;
pub use layout::{SiteFooter, SiteHeader};

pub mod pages;
pub use pages::SitePage;

mod review_button;
pub use review_button::ReviewButton;

mod theme;
pub use theme::SiteTheme;

mod toast;
pub use toast::{use_toasts, ToastKind, ToastProvider, Toasts};
