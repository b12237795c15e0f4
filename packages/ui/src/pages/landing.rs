//! Search landing pages. Their copy is German in every language variant.

use dioxus::prelude::*;

use crate::locale::use_locale;
use crate::routes::Page;
use crate::venue;

const LANDING_CSS: Asset = asset!("/assets/styling/landing.css");

pub struct Landing {
    pub heading: &'static str,
    pub lead: &'static str,
    pub intro_title: &'static str,
    pub intro_body: &'static str,
    pub checklist: [&'static str; 4],
    pub visit_title: &'static str,
    pub district: &'static str,
    pub cards: &'static [(&'static str, &'static str)],
    pub closing_title: &'static str,
    pub closing_body: &'static str,
}

static PLOV: Landing = Landing {
    heading: "Plov in Frankfurt",
    lead: "Unser Plov wird traditionell im Kasan gekocht: duftender Reis, zarte Fleischstücke, gelbe Karotten und Gewürze – langsam gegart und voller Aroma.",
    intro_title: "Was ist Plov?",
    intro_body: "Plov ist das Nationalgericht Usbekistans. Der Reis wird zusammen mit Fleisch, Karotten, Zwiebeln und Gewürzen geschmort. So entsteht eine unverwechselbare Textur: körnig, aromatisch und herzhaft.",
    checklist: [
        "Traditionell im Kasan gekocht",
        "Ausgewogene Gewürzmischung",
        "Große Portionen zum Teilen",
        "Perfekt für Familien & Gruppen",
    ],
    visit_title: "Besuch planen",
    district: "60385 Frankfurt am Main",
    cards: &[
        ("Plov", "Langsam gegart, aromatisch und sättigend."),
        ("Manty", "Perfekte Begleitung zu einem Plov‑Abend."),
        ("Teekultur", "Traditioneller Tee rundet das Menü ab."),
    ],
    closing_title: "Plov‑Abend in Frankfurt",
    closing_body: "Genieße Plov in Frankfurt wie in Taschkent – in gemütlicher Atmosphäre, mit herzlichem Service und klassischer zentralasiatischer Gastfreundschaft.",
};

static HALAL: Landing = Landing {
    heading: "Halal Restaurant in Frankfurt",
    lead: "Zentralasiatische Küche mit frischen Zutaten, aromatischen Gewürzen und herzlichem Service.",
    intro_title: "Halal‑freundliche Küche in Frankfurt",
    intro_body: "Wir legen Wert auf transparente Zutaten und eine respektvolle Zubereitung. Unser Team beantwortet gern alle Fragen zu Allergenen, Zutaten und Halal‑Optionen.",
    checklist: [
        "Halal‑bewusste Menüauswahl",
        "Frische Zutaten & traditionelle Gewürze",
        "Familienfreundliche Atmosphäre",
        "Große Portionen zum Teilen",
    ],
    visit_title: "Besuch planen",
    district: "60385 Frankfurt am Main",
    cards: &[
        (
            "Samsa & Grillgerichte",
            "Knusprige Teigtaschen, würzige Spieße und Beilagen, die perfekt zu einer halal‑freundlichen Küche passen.",
        ),
        (
            "Teekultur & Gastlichkeit",
            "Wir servieren traditionellen Tee und hausgemachte Spezialitäten – perfekt für gemütliche Abende.",
        ),
    ],
    closing_title: "Gemeinsam essen, gemeinsam feiern",
    closing_body: "Ob Familienessen, Gruppen oder besondere Anlässe – wir schaffen einen Ort, an dem sich jeder willkommen fühlt. Sprechen Sie uns an, wir beraten gern.",
};

static UZBEK: Landing = Landing {
    heading: "Usbekisches Restaurant in Frankfurt",
    lead: "CARAVAN bringt die Seele Usbekistans nach Frankfurt: langsam geschmorter Plov, handgerollte Manty und kräftige Lagman‑Nudeln – alles frisch zubereitet.",
    intro_title: "Warum CARAVAN?",
    intro_body: "Als usbekisches Restaurant in Frankfurt setzen wir auf traditionelle Rezepte, frische Zutaten und echte Gastfreundschaft. Unser Team kocht täglich wie zu Hause: würzig, aromatisch und voller Handwerk.",
    checklist: [
        "Traditionelle Rezepte aus Usbekistan",
        "Handgemachte Teigtaschen & Nudeln",
        "Vegetarische & halal‑freundliche Optionen",
        "Gemütliches Ambiente mit zentralasiatischer Seele",
    ],
    visit_title: "Kurz & knapp",
    district: "60385 Frankfurt am Main (Heddernheim)",
    cards: &[
        ("Plov", "Das Herz der usbekischen Küche – langsam gegart im Kasan."),
        ("Manty", "Große Teigtaschen mit saftiger Füllung und Joghurt‑Dip."),
    ],
    closing_title: "Ein Ort für Familie & Genuss",
    closing_body: "Zentralasiatische Küche lebt von Gemeinschaft. Im CARAVAN servieren wir große Portionen, teilen Geschichten und bringen die Wärme usbekischer Gastlichkeit nach Frankfurt.",
};

pub fn landing_for(page: Page) -> Option<&'static Landing> {
    match page {
        Page::PlovFrankfurt => Some(&PLOV),
        Page::HalalRestaurant => Some(&HALAL),
        Page::UsbekischesRestaurant => Some(&UZBEK),
        _ => None,
    }
}

#[component]
pub fn LandingPage(page: Page) -> Element {
    let locale = use_locale();
    let Some(landing) = landing_for(page) else {
        tracing::warn!("landing.render: no landing copy for page={page:?}");
        return rsx! {};
    };

    rsx! {
        document::Link { rel: "stylesheet", href: LANDING_CSS }
        div { class: "page landing",
            section { class: "landing_hero",
                p { class: "eyebrow", "CARAVAN Frankfurt" }
                h1 { {landing.heading} }
                p { class: "lead", {landing.lead} }
                div { class: "cta_row",
                    Link { class: "btn primary", to: locale.href("/menu/"), "Speisekarte ansehen" }
                    a { class: "btn", href: venue::PHONE_HREF, {venue::PHONE} }
                }
            }
            section { class: "landing_intro split",
                div {
                    h2 { {landing.intro_title} }
                    p { {landing.intro_body} }
                    ul { class: "checklist",
                        for item in landing.checklist {
                            li { key: "{item}", "✓ {item}" }
                        }
                    }
                }
                aside { class: "panel",
                    h3 { {landing.visit_title} }
                    p { strong { {venue::STREET} } br {} {landing.district} }
                    p { strong { "Di–So 17:00–23:00" } br {} "Montag Ruhetag" }
                    p {
                        strong { "Reservierung empfohlen" }
                        br {}
                        a { href: venue::PHONE_HREF, {venue::PHONE} }
                    }
                    a {
                        href: venue::directions_url(),
                        target: "_blank",
                        rel: "noopener noreferrer",
                        "Anfahrt öffnen →"
                    }
                }
            }
            section { class: "landing_cards",
                for (title, text) in landing.cards.iter() {
                    article { key: "{title}", class: "dish_card",
                        h3 { {*title} }
                        p { {*text} }
                    }
                }
            }
            section { class: "landing_closing",
                h2 { {landing.closing_title} }
                p { {landing.closing_body} }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_landing_pages_have_landing_copy() {
        for page in Page::ROUTED {
            let expected = matches!(
                page,
                Page::PlovFrankfurt | Page::HalalRestaurant | Page::UsbekischesRestaurant
            );
            assert_eq!(landing_for(page).is_some(), expected, "{page:?}");
        }
    }

    #[test]
    fn landing_copy_is_complete() {
        for page in [Page::PlovFrankfurt, Page::HalalRestaurant, Page::UsbekischesRestaurant] {
            let landing = landing_for(page).unwrap();
            assert!(!landing.cards.is_empty());
            assert!(landing.checklist.iter().all(|item| !item.is_empty()));
        }
    }
}
