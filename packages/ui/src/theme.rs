use dioxus::prelude::*;

const THEME_CSS: Asset = asset!("/assets/styling/theme.css");

/// Site-wide palette and typography.
#[component]
pub fn SiteTheme() -> Element {
    rsx! {
        document::Link { rel: "preconnect", href: "https://fonts.googleapis.com" }
        document::Link {
            rel: "stylesheet",
            href: "https://fonts.googleapis.com/css2?family=Quando&family=Inter:wght@400;600&display=swap",
        }
        document::Link { rel: "stylesheet", href: THEME_CSS }
    }
}
