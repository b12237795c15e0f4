use dioxus::prelude::*;

use crate::locale::use_locale;
use crate::menu::{format_price, Category};

const MENU_CSS: Asset = asset!("/assets/styling/menu.css");

#[component]
pub fn MenuPage() -> Element {
    let locale = use_locale();
    let lang = locale.lang();
    let tr = locale.tr();

    rsx! {
        document::Link { rel: "stylesheet", href: MENU_CSS }
        div { class: "page",
            div { class: "page_header",
                h1 { {tr.nav.menu} }
                Link { class: "btn", to: locale.href("/"), {tr.menu.back} }
            }
            for (c, category) in Category::ALL.into_iter().enumerate() {
                section { key: "{c}", class: "menu_category",
                    h2 { {category.title(lang)} }
                    ul { class: "menu_list",
                        for (i, dish) in category.dishes().enumerate() {
                            li { key: "{i}", class: "menu_item",
                                div { class: "menu_item_top",
                                    h3 { {dish.id.text(lang).name} }
                                    span { class: "dots" }
                                    span { class: "price", {format_price(dish.price_cents, lang)} }
                                }
                                p { {dish.id.text(lang).desc} }
                            }
                        }
                    }
                }
            }
            p { class: "hint", {tr.menu.footnote} }
            p { class: "hint", {tr.menu.reservation_hint} }
        }
    }
}
