//! Document head metadata: title, description, canonical and hreflang links.

use dioxus::prelude::*;

use crate::locale::{canonical_path, Lang};
use crate::routes::Page;

pub const SITE_URL: &str = "https://caravan-restaurant.de";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeoMeta {
    pub title: &'static str,
    pub description: &'static str,
    /// Absolute canonical URL; `None` for pages that must not be indexed.
    pub canonical: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alternate {
    /// A language code or `x-default`.
    pub hreflang: &'static str,
    pub href: String,
}

pub fn absolute_url(path: &str) -> String {
    format!("{SITE_URL}{path}")
}

impl SeoMeta {
    pub fn for_page(page: Page, lang: Lang) -> Self {
        let (title, description) = copy(page, lang);
        let canonical = match page {
            Page::NotFound => None,
            _ => Some(absolute_url(&canonical_path(page.slug(), lang))),
        };
        Self {
            title,
            description,
            canonical,
        }
    }

    pub fn indexable(&self) -> bool {
        self.canonical.is_some()
    }
}

/// One link per language, plus `x-default` pointing at the default language.
pub fn alternates(page: Page) -> Vec<Alternate> {
    if page == Page::NotFound {
        return Vec::new();
    }
    let mut links: Vec<Alternate> = Lang::ALL
        .iter()
        .map(|lang| Alternate {
            hreflang: lang.code(),
            href: absolute_url(&canonical_path(page.slug(), *lang)),
        })
        .collect();
    links.push(Alternate {
        hreflang: "x-default",
        href: absolute_url(&canonical_path(page.slug(), Lang::DEFAULT)),
    });
    links
}

fn copy(page: Page, lang: Lang) -> (&'static str, &'static str) {
    match (page, lang) {
        (Page::Home, Lang::De) => (
            "CARAVAN | Zentralasiatisches Restaurant in Frankfurt",
            "Usbekische und zentralasiatische Küche in Frankfurt am Main: Plov, Manty, Lagman und Teekultur. Jetzt Tisch reservieren.",
        ),
        (Page::Home, Lang::En) => (
            "CARAVAN | Central Asian Restaurant in Frankfurt",
            "Uzbek and Central Asian cuisine in Frankfurt am Main: plov, manty, lagman and tea culture. Book a table today.",
        ),
        (Page::Home, Lang::Ru) => (
            "CARAVAN | Ресторан центральноазиатской кухни во Франкфурте",
            "Узбекская и центральноазиатская кухня во Франкфурте-на-Майне: плов, манты, лагман и чайная культура. Забронируйте столик.",
        ),
        (Page::Home, Lang::Uz) => (
            "CARAVAN | Frankfurtdagi Markaziy Osiyo restorani",
            "Frankfurt-Maynda o'zbek va Markaziy Osiyo taomlari: osh, manti, lag'mon va choy madaniyati. Stol band qiling.",
        ),
        (Page::Menu, Lang::De) => (
            "Speisekarte | CARAVAN Frankfurt",
            "Die Speisekarte des CARAVAN: Plov, Manty, Lagman, Schaschlik, Samsa, Tee und Desserts. Alle Gerichte sind Halal.",
        ),
        (Page::Menu, Lang::En) => (
            "Menu | CARAVAN Frankfurt",
            "The CARAVAN menu: plov, manty, lagman, shashlik, samsa, tea and desserts. All dishes are halal.",
        ),
        (Page::Menu, Lang::Ru) => (
            "Меню | CARAVAN Франкфурт",
            "Меню CARAVAN: плов, манты, лагман, шашлык, самса, чай и десерты. Все блюда халяльные.",
        ),
        (Page::Menu, Lang::Uz) => (
            "Menyu | CARAVAN Frankfurt",
            "CARAVAN menyusi: osh, manti, lag'mon, shashlik, somsa, choy va shirinliklar. Barcha taomlar halol.",
        ),
        (Page::Impressum, _) => (
            "Impressum | CARAVAN Frankfurt",
            "Impressum und Kontaktangaben des CARAVAN Restaurant, Wöllstädter Str. 11, 60385 Frankfurt am Main.",
        ),
        (Page::Datenschutz, _) => (
            "Datenschutz | CARAVAN Frankfurt",
            "Datenschutzerklärung des CARAVAN Restaurant in Frankfurt am Main.",
        ),
        // The landing pages target German searches in every language.
        (Page::PlovFrankfurt, _) => (
            "Plov Frankfurt | CARAVAN Restaurant",
            "Plov in Frankfurt am Main genießen: traditionell im Kasan gegart, mit zartem Fleisch, Karotten und Gewürzen. Authentische usbekische Küche.",
        ),
        (Page::HalalRestaurant, _) => (
            "Halal Restaurant Frankfurt | CARAVAN",
            "Halal‑freundliches Restaurant in Frankfurt am Main. Zentralasiatische Küche mit frischen Zutaten, aromatischen Gewürzen und herzlichem Service.",
        ),
        (Page::UsbekischesRestaurant, _) => (
            "Usbekisches Restaurant Frankfurt | CARAVAN",
            "Authentisches usbekisches Restaurant in Frankfurt am Main: Plov, Manty, Lagman und mehr. Herzliche Gastfreundschaft, gut erreichbar in Heddernheim.",
        ),
        (Page::NotFound, lang) => (crate::locale::t(lang).not_found.title, ""),
    }
}

/// Writes the page's head tags.
#[component]
pub fn Seo(page: Page, lang: Lang) -> Element {
    let meta = SeoMeta::for_page(page, lang);
    let links = alternates(page);

    rsx! {
        document::Title { "{meta.title}" }
        document::Meta { name: "description", content: meta.description }
        document::Meta { property: "og:title", content: meta.title }
        document::Meta { property: "og:description", content: meta.description }
        document::Meta { property: "og:locale", content: lang.code() }
        document::Meta { name: "twitter:title", content: meta.title }
        document::Meta { name: "twitter:description", content: meta.description }
        if let Some(url) = meta.canonical.clone() {
            document::Link { rel: "canonical", href: "{url}" }
            document::Meta { property: "og:url", content: "{url}" }
        } else {
            document::Meta { name: "robots", content: "noindex" }
        }
        for link in links {
            document::Link {
                key: "{link.hreflang}",
                rel: "alternate",
                hreflang: link.hreflang,
                href: "{link.href}",
            }
        }
    }
}
