use super::{canonical_path, language_of, Lang, LocaleError};

/// Issues navigations on behalf of the store.
///
/// Implemented over the router in the app and by a recorder in tests.
pub trait Navigator {
    fn navigate(&mut self, path: &str);
}

/// Receives every path change the router performs, including the initial one.
pub trait NavigationObserver {
    /// Returns the newly adopted language when the path switched it.
    fn navigated(&mut self, path: &str) -> Option<Lang>;
}

/// Which language the page is showing, and the path it was derived from.
///
/// The URL always wins: a navigation the store did not start (back/forward,
/// a plain link) is adopted as-is, and [`LanguageStore::set_language`] goes
/// through a navigation rather than around it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageStore {
    lang: Lang,
    path: String,
}

impl LanguageStore {
    pub fn from_path(path: impl Into<String>) -> Self {
        let path = path.into();
        Self {
            lang: language_of(&path),
            path,
        }
    }

    pub fn current(&self) -> Lang {
        self.lang
    }

    /// The last path seen by the store.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// `path` rewritten for `target`, or for the current language when `None`.
    pub fn canonical_path_for(&self, path: &str, target: Option<Lang>) -> String {
        canonical_path(path, target.unwrap_or(self.lang))
    }

    /// The current page in every language, in picker order.
    pub fn alternates(&self) -> impl Iterator<Item = (Lang, String)> + '_ {
        Lang::ALL
            .into_iter()
            .map(|lang| (lang, canonical_path(&self.path, lang)))
    }

    /// Switch to `target` and move the URL to the same page in that language.
    ///
    /// The language is adopted immediately; the echo of the navigation
    /// through [`NavigationObserver::navigated`] then finds nothing to change.
    pub fn set_language<N>(&mut self, target: Lang, navigator: &mut N)
    where
        N: Navigator + ?Sized,
    {
        let next = canonical_path(&self.path, target);
        tracing::debug!(
            "locale.set_language: from={} to={} path={}",
            self.lang,
            target,
            next
        );
        self.lang = target;
        if next != self.path {
            self.path.clone_from(&next);
            navigator.navigate(&next);
        }
    }

    /// [`Self::set_language`] for a raw code. Unknown codes leave the store
    /// and the URL untouched.
    pub fn set_language_code<N>(&mut self, code: &str, navigator: &mut N) -> Result<(), LocaleError>
    where
        N: Navigator + ?Sized,
    {
        match code.parse::<Lang>() {
            Ok(target) => {
                self.set_language(target, navigator);
                Ok(())
            }
            Err(err) => {
                tracing::warn!("locale.set_language: rejected code={code:?}");
                Err(err)
            }
        }
    }
}

impl NavigationObserver for LanguageStore {
    fn navigated(&mut self, path: &str) -> Option<Lang> {
        if self.path != path {
            self.path = path.to_string();
        }
        let lang = language_of(path);
        if lang == self.lang {
            return None;
        }
        tracing::debug!("locale.navigated: from={} to={} path={}", self.lang, lang, path);
        self.lang = lang;
        Some(lang)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Records navigations and, like a router, reports them back to the store.
    #[derive(Default)]
    struct History {
        pushed: Vec<String>,
    }

    impl Navigator for History {
        fn navigate(&mut self, path: &str) {
            self.pushed.push(path.to_string());
        }
    }

    fn switch(store: &mut LanguageStore, target: Lang) -> Vec<String> {
        let mut history = History::default();
        store.set_language(target, &mut history);
        for path in &history.pushed {
            store.navigated(path);
        }
        history.pushed
    }

    #[test]
    fn initial_state_comes_from_the_url() {
        assert_eq!(LanguageStore::from_path("/").current(), Lang::De);
        assert_eq!(LanguageStore::from_path("/uz/menu/").current(), Lang::Uz);
        assert_eq!(LanguageStore::from_path("/impressum").current(), Lang::De);
    }

    #[test]
    fn set_language_moves_to_the_same_page() {
        let mut store = LanguageStore::from_path("/en/menu/");
        let pushed = switch(&mut store, Lang::Ru);
        assert_eq!(pushed, vec!["/ru/menu/".to_string()]);
        assert_eq!(store.current(), Lang::Ru);
        assert_eq!(store.path(), "/ru/menu/");
    }

    #[test]
    fn set_language_to_default_drops_prefix() {
        let mut store = LanguageStore::from_path("/en/");
        let pushed = switch(&mut store, Lang::De);
        assert_eq!(pushed, vec!["/".to_string()]);
        assert_eq!(store.current(), Lang::De);
    }

    #[test]
    fn set_language_is_quiet_when_already_canonical() {
        let mut store = LanguageStore::from_path("/en/menu/");
        let pushed = switch(&mut store, Lang::En);
        assert!(pushed.is_empty());
        assert_eq!(store.current(), Lang::En);
    }

    #[test]
    fn set_language_normalizes_non_canonical_url() {
        let mut store = LanguageStore::from_path("/en/menu");
        let pushed = switch(&mut store, Lang::En);
        assert_eq!(pushed, vec!["/en/menu/".to_string()]);
    }

    #[test]
    fn unknown_code_is_rejected_without_side_effects() {
        let mut store = LanguageStore::from_path("/en/menu/");
        let mut history = History::default();
        let err = store.set_language_code("fr", &mut history).unwrap_err();
        assert_eq!(err, LocaleError::UnknownLanguage("fr".to_string()));
        assert!(history.pushed.is_empty());
        assert_eq!(store.current(), Lang::En);
        assert_eq!(store.path(), "/en/menu/");
    }

    #[test]
    fn known_code_goes_through() {
        let mut store = LanguageStore::from_path("/menu/");
        let mut history = History::default();
        store.set_language_code("uz", &mut history).unwrap();
        assert_eq!(history.pushed, vec!["/uz/menu/".to_string()]);
        assert_eq!(store.current(), Lang::Uz);
    }

    #[test]
    fn back_navigation_is_adopted() {
        let mut store = LanguageStore::from_path("/en/menu/");
        switch(&mut store, Lang::Ru);
        assert_eq!(store.navigated("/en/menu/"), Some(Lang::En));
        assert_eq!(store.current(), Lang::En);
        assert_eq!(store.path(), "/en/menu/");
    }

    #[test]
    fn navigation_within_a_language_changes_nothing() {
        let mut store = LanguageStore::from_path("/ru/");
        assert_eq!(store.navigated("/ru/menu/"), None);
        assert_eq!(store.current(), Lang::Ru);
        assert_eq!(store.path(), "/ru/menu/");
    }

    #[test]
    fn canonical_path_for_defaults_to_current_language() {
        let store = LanguageStore::from_path("/uz/");
        assert_eq!(store.canonical_path_for("/menu", None), "/uz/menu/");
        assert_eq!(store.canonical_path_for("/menu", Some(Lang::De)), "/menu/");
    }

    #[test]
    fn alternates_cover_every_language() {
        let store = LanguageStore::from_path("/ru/impressum");
        let alternates: Vec<(Lang, String)> = store.alternates().collect();
        assert_eq!(
            alternates,
            vec![
                (Lang::De, "/impressum/".to_string()),
                (Lang::En, "/en/impressum/".to_string()),
                (Lang::Ru, "/ru/impressum/".to_string()),
                (Lang::Uz, "/uz/impressum/".to_string()),
            ]
        );
    }
}
