//! Path-to-page resolution for every language variant of the site.

use std::collections::HashMap;
use std::sync::OnceLock;

use crate::locale::{canonical_path, language_of, Lang};

/// Pages registered against their unprefixed slug.
///
/// Lookups go through [`canonical_path`] in the default language, so
/// `/menu`, `/menu/`, `/en/menu` and `/ru/menu/?x=1` all hit the entry
/// registered as `/menu`.
#[derive(Debug, Clone)]
pub struct RouteTable<P> {
    routes: HashMap<String, P>,
    fallback: P,
}

/// Outcome of [`RouteTable::resolve`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolved<P> {
    pub lang: Lang,
    pub page: P,
    /// Canonical path of the request in its own language.
    pub canonical: String,
    pub matched: bool,
}

impl<P: Clone> RouteTable<P> {
    pub fn new(fallback: P) -> Self {
        Self {
            routes: HashMap::new(),
            fallback,
        }
    }

    pub fn register(&mut self, path: &str, page: P) -> &mut Self {
        self.routes.insert(canonical_path(path, Lang::DEFAULT), page);
        self
    }

    pub fn resolve(&self, path: &str) -> Resolved<P> {
        let lang = language_of(path);
        let key = canonical_path(path, Lang::DEFAULT);
        let (page, matched) = match self.routes.get(&key) {
            Some(page) => (page.clone(), true),
            None => (self.fallback.clone(), false),
        };
        Resolved {
            lang,
            page,
            canonical: canonical_path(path, lang),
            matched,
        }
    }
}

/// Every page of the site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Page {
    Home,
    Menu,
    Impressum,
    Datenschutz,
    PlovFrankfurt,
    HalalRestaurant,
    UsbekischesRestaurant,
    NotFound,
}

impl Page {
    pub const ROUTED: [Page; 7] = [
        Page::Home,
        Page::Menu,
        Page::Impressum,
        Page::Datenschutz,
        Page::PlovFrankfurt,
        Page::HalalRestaurant,
        Page::UsbekischesRestaurant,
    ];

    /// Unprefixed path of the page; the not-found page has none of its own.
    pub fn slug(self) -> &'static str {
        match self {
            Page::Home | Page::NotFound => "/",
            Page::Menu => "/menu/",
            Page::Impressum => "/impressum/",
            Page::Datenschutz => "/datenschutz/",
            Page::PlovFrankfurt => "/plov-frankfurt/",
            Page::HalalRestaurant => "/halal-restaurant-frankfurt/",
            Page::UsbekischesRestaurant => "/usbekisches-restaurant-frankfurt/",
        }
    }
}

pub fn site_routes() -> &'static RouteTable<Page> {
    static ROUTES: OnceLock<RouteTable<Page>> = OnceLock::new();
    ROUTES.get_or_init(|| {
        let mut table = RouteTable::new(Page::NotFound);
        for page in Page::ROUTED {
            table.register(page.slug(), page);
        }
        table
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slash_and_prefix_variants_resolve_to_one_page() {
        let routes = site_routes();
        for path in ["/menu", "/menu/", "/en/menu", "/ru/menu/", "/uz/menu?x=1", "//menu//"] {
            assert_eq!(routes.resolve(path).page, Page::Menu, "path={path}");
        }
    }

    #[test]
    fn resolve_reports_language_and_canonical_path() {
        let resolved = site_routes().resolve("/ru/impressum");
        assert_eq!(resolved.lang, Lang::Ru);
        assert_eq!(resolved.page, Page::Impressum);
        assert_eq!(resolved.canonical, "/ru/impressum/");
        assert!(resolved.matched);
    }

    #[test]
    fn language_roots_are_home() {
        for path in ["/", "", "/en", "/en/", "/uz/"] {
            assert_eq!(site_routes().resolve(path).page, Page::Home, "path={path}");
        }
    }

    #[test]
    fn unknown_paths_fall_back() {
        let resolved = site_routes().resolve("/en/karte");
        assert_eq!(resolved.page, Page::NotFound);
        assert_eq!(resolved.lang, Lang::En);
        assert!(!resolved.matched);
        assert_eq!(site_routes().resolve("/de/menu").page, Page::NotFound);
    }

    #[test]
    fn every_slug_is_canonical() {
        for page in Page::ROUTED {
            assert_eq!(canonical_path(page.slug(), Lang::DEFAULT), page.slug());
        }
    }

    #[test]
    fn register_normalizes_keys() {
        let mut table = RouteTable::new("missing");
        table.register("reservierung", "booking");
        assert_eq!(table.resolve("/reservierung/").page, "booking");
        assert_eq!(table.resolve("/en/reservierung").page, "booking");
    }
}
