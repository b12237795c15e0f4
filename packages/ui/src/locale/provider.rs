use dioxus::prelude::*;

use super::{t, Lang, LanguageStore, NavigationObserver, Navigator, Translations};

/// Holds the navigation a store transition asked for until the store borrow
/// is released, then hands it to the router.
#[derive(Default)]
struct PendingNavigation(Option<String>);

impl Navigator for PendingNavigation {
    fn navigate(&mut self, path: &str) {
        self.0 = Some(path.to_string());
    }
}

impl PendingNavigation {
    fn flush(self) {
        if let Some(path) = self.0 {
            navigator().push(path);
        }
    }
}

/// Handle to the page's [`LanguageStore`], shared through context.
#[derive(Clone, Copy, PartialEq)]
pub struct Locale {
    store: Signal<LanguageStore>,
}

impl Locale {
    pub fn lang(&self) -> Lang {
        self.store.read().current()
    }

    pub fn tr(&self) -> &'static Translations {
        t(self.lang())
    }

    /// Link target for `path` in the current language.
    pub fn href(&self, path: &str) -> String {
        self.store.read().canonical_path_for(path, None)
    }

    /// The page currently shown, in `lang`.
    pub fn href_in(&self, lang: Lang) -> String {
        let store = self.store.read();
        store.canonical_path_for(store.path(), Some(lang))
    }

    pub fn set_language(&self, target: Lang) {
        let mut store = self.store;
        let mut pending = PendingNavigation::default();
        store.with_mut(|s| s.set_language(target, &mut pending));
        pending.flush();
    }

    fn navigated(&self, path: &str) {
        let mut store = self.store;
        if store.peek().path() == path {
            return;
        }
        store.with_mut(|s| {
            s.navigated(path);
        });
    }
}

/// Owns the page's language state.
///
/// `path` is the router's current path; every change to it is reported to
/// the store, the first render included.
#[component]
pub fn LocaleProvider(path: String, children: Element) -> Element {
    let initial = path.clone();
    let store = use_signal(move || LanguageStore::from_path(initial));
    let locale = use_context_provider(|| Locale { store });

    use_effect(use_reactive!(|path| locale.navigated(&path)));

    let lang = locale.lang();
    rsx! {
        document::Meta { name: "content-language", content: lang.code() }
        {children}
    }
}

pub fn use_locale() -> Locale {
    if let Some(locale) = try_use_context::<Locale>() {
        return locale;
    }

    tracing::warn!("locale.use_locale: missing LocaleProvider, falling back to a local store");
    let store = use_signal(|| LanguageStore::from_path("/"));
    Locale { store }
}

pub fn use_lang() -> Lang {
    use_locale().lang()
}
