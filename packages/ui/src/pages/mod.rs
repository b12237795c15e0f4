//! One component per page, plus [`SitePage`] which picks the page for a path.

use dioxus::prelude::*;

mod home;
mod landing;
mod legal;
mod menu_page;

pub use home::HomePage;
pub use landing::{landing_for, Landing, LandingPage};
pub use legal::{DatenschutzPage, ImpressumPage};
pub use menu_page::MenuPage;

use crate::layout::{SiteFooter, SiteHeader};
use crate::locale::use_locale;
use crate::review_button::ReviewButton;
use crate::routes::{site_routes, Page};
use crate::seo::Seo;

/// Renders whatever page `path` resolves to, in the path's language.
#[component]
pub fn SitePage(path: String) -> Element {
    let resolved = site_routes().resolve(&path);
    if !resolved.matched {
        tracing::debug!("pages.resolve: no page for path={path}");
    }
    let page = resolved.page;

    rsx! {
        Seo { page, lang: resolved.lang }
        SiteHeader {}
        main { class: "site_main",
            match page {
                Page::Home => rsx! { HomePage {} },
                Page::Menu => rsx! { MenuPage {} },
                Page::Impressum => rsx! { ImpressumPage {} },
                Page::Datenschutz => rsx! { DatenschutzPage {} },
                Page::PlovFrankfurt | Page::HalalRestaurant | Page::UsbekischesRestaurant => {
                    rsx! { LandingPage { page } }
                }
                Page::NotFound => rsx! { NotFoundPage {} },
            }
        }
        SiteFooter {}
        ReviewButton {}
    }
}

#[component]
pub fn NotFoundPage() -> Element {
    let locale = use_locale();
    let text = &locale.tr().not_found;

    rsx! {
        div { class: "page not_found",
            h1 { {text.title} }
            p { {text.body} }
            Link { class: "btn primary", to: locale.href("/"), {text.home} }
        }
    }
}
