use dioxus::prelude::*;

use crate::language_picker::LanguagePicker;
use crate::locale::{lookup, use_locale};
use crate::venue;

const SITE_CSS: Asset = asset!("/assets/styling/site.css");

enum NavTarget {
    /// Anchor on the home page.
    Section(&'static str),
    Page(&'static str),
}

/// Header entries, labelled through their dictionary key.
const NAV_LINKS: &[(NavTarget, &str)] = &[
    (NavTarget::Section("about"), "nav.about"),
    (NavTarget::Page("/menu/"), "nav.menu"),
    (NavTarget::Section("contact"), "nav.contact"),
];

#[component]
pub fn SiteHeader() -> Element {
    let locale = use_locale();
    let lang = locale.lang();
    let home = locale.href("/");
    let mut menu_open = use_signal(|| false);

    rsx! {
        document::Link { rel: "stylesheet", href: SITE_CSS }
        header { class: "site_header",
            div { class: "site_header_inner",
                Link { class: "brand", to: home.clone(), {venue::NAME} }
                button {
                    class: "nav_toggle",
                    "aria-expanded": "{menu_open}",
                    onclick: move |_| menu_open.toggle(),
                    "☰"
                }
                nav { class: if menu_open() { "nav_links open" } else { "nav_links" },
                    for (i, (target, key)) in NAV_LINKS.iter().enumerate() {
                        match target {
                            NavTarget::Section(anchor) => rsx! {
                                a { key: "{i}", class: "nav_link", href: "{home}#{anchor}", {lookup(lang, key)} }
                            },
                            NavTarget::Page(path) => rsx! {
                                Link { key: "{i}", class: "nav_link", to: locale.href(path), {lookup(lang, key)} }
                            },
                        }
                    }
                    a { class: "btn primary", href: "{home}#reservation", {locale.tr().nav.reserve} }
                    LanguagePicker {}
                }
            }
        }
    }
}

#[component]
pub fn SiteFooter() -> Element {
    let locale = use_locale();
    let tr = locale.tr();
    let year = chrono::Utc::now().format("%Y").to_string();

    rsx! {
        footer { class: "site_footer",
            div { class: "site_footer_inner",
                div {
                    p { class: "footer_brand", {venue::NAME} }
                    p { {tr.location.address} }
                    a { href: venue::PHONE_HREF, {venue::PHONE} }
                }
                div { class: "footer_links",
                    Link { to: locale.href("/menu/"), {tr.nav.menu} }
                    Link { to: locale.href("/impressum/"), {tr.footer.impressum} }
                    Link { to: locale.href("/datenschutz/"), {tr.footer.privacy} }
                }
                div {
                    a { href: venue::mailto(), {venue::EMAIL} }
                    p { class: "footer_rights", "© {year} CARAVAN Frankfurt. {tr.footer.rights}" }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locale::Lang;

    #[test]
    fn nav_labels_resolve_in_every_language() {
        for lang in Lang::ALL {
            for (_, key) in NAV_LINKS {
                assert_ne!(lookup(lang, key), *key, "lang={lang} key={key}");
            }
        }
    }
}
