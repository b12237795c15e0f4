use dioxus::prelude::*;

use crate::booking_form::BookingForm;
use crate::locale::use_locale;
use crate::menu::{dish_by_id, format_price, DishId, HIGHLIGHTS};
use crate::venue;

const HOME_CSS: Asset = asset!("/assets/styling/home.css");

/// Gallery layout as (tile class, dish named on the tile, description).
/// Tiles without a dish carry the restaurant name.
const GALLERY: [(&str, Option<DishId>, &str); 4] = [
    (
        "gallery_tile large",
        None,
        "Uzbek and Central Asian dishes at CARAVAN Restaurant Frankfurt",
    ),
    (
        "gallery_tile",
        Some(DishId::Manty),
        "Handmade Manty dumplings with meat filling and yogurt sauce",
    ),
    (
        "gallery_tile",
        Some(DishId::Plov),
        "Plov with lamb, carrots and chickpeas cooked in a kazan",
    ),
    (
        "gallery_tile wide",
        None,
        "Interior of CARAVAN Restaurant in Heddernheim, Frankfurt",
    ),
];

#[component]
pub fn HomePage() -> Element {
    let locale = use_locale();
    let lang = locale.lang();
    let tr = locale.tr();
    let highlights = HIGHLIGHTS.iter().filter_map(|id| dish_by_id(*id));
    let tiles = GALLERY.map(|(class, dish, description)| {
        let caption = dish.map_or(venue::NAME, |id| id.text(lang).name);
        (class, caption, description)
    });

    rsx! {
        document::Link { rel: "stylesheet", href: HOME_CSS }

        section { id: "hero", class: "hero",
            div { class: "hero_inner",
                h1 { {tr.hero.title} }
                p { class: "lead", {tr.hero.subtitle} }
                div { class: "cta_row",
                    a { class: "btn primary", href: "#reservation", {tr.hero.cta_reserve} }
                    a { class: "btn", href: "#menu", {tr.hero.cta_menu} }
                }
            }
        }

        section { id: "about", class: "section",
            h2 { {tr.about.title} }
            p { class: "prose", {tr.about.content} }
        }

        section { id: "menu", class: "section",
            h2 { {tr.menu.title} }
            p { class: "hint", {tr.menu.subtitle} }
            div { class: "dish_grid",
                for (i, dish) in highlights.enumerate() {
                    article { key: "{i}", class: "dish_card",
                        div { class: "dish_top",
                            h3 { {dish.id.text(lang).name} }
                            span { class: "price", {format_price(dish.price_cents, lang)} }
                        }
                        p { {dish.id.text(lang).desc} }
                    }
                }
            }
            Link { class: "btn", to: locale.href("/menu/"), {tr.menu.full_menu} }
        }

        section { id: "gallery", class: "section gallery",
            h2 { {tr.gallery.title} }
            div { class: "gallery_grid",
                for (i, (class, caption, description)) in tiles.into_iter().enumerate() {
                    div { key: "{i}", class, role: "img", "aria-label": description,
                        span { {caption} }
                    }
                }
            }
        }

        section { id: "contact", class: "section split",
            div { class: "panel",
                h2 { {tr.hours.title} }
                dl { class: "hours",
                    dt { {tr.hours.weekdays} }
                    dd { {venue::OPENING_HOURS} }
                    dt { {tr.hours.weekend} }
                    dd { {venue::OPENING_HOURS} }
                    dt { {tr.hours.monday} }
                    dd { {tr.hours.closed} }
                }
                p { class: "hint", {tr.hours.note} }
            }
            div { class: "panel",
                h2 { {tr.location.title} }
                address { {venue::STREET} br {} {venue::CITY} }
                p { class: "hint", {tr.location.district} }
                div { class: "cta_row",
                    a {
                        class: "btn primary",
                        href: venue::directions_url(),
                        target: "_blank",
                        rel: "noopener noreferrer",
                        {tr.location.get_directions}
                    }
                    a { class: "btn", href: venue::PHONE_HREF, {tr.location.call_us} }
                }
            }
        }

        section { id: "reservation", class: "section",
            div { class: "panel narrow",
                h2 { {tr.contact.title} }
                p { class: "hint", {tr.contact.catering} }
                BookingForm {}
                div { class: "contact_fallback",
                    p { {tr.contact.fallback} }
                    a { href: venue::mailto(), {venue::EMAIL} }
                    " | "
                    a { href: venue::PHONE_HREF, {venue::PHONE} }
                }
            }
        }
    }
}
