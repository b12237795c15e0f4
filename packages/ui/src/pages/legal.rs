use dioxus::prelude::*;

use crate::locale::{use_locale, Lang};
use crate::venue;

struct ImpressumText {
    title: &'static str,
    tmg: &'static str,
    contact: &'static str,
    phone: &'static str,
    responsible: &'static str,
    disclaimer: &'static str,
    content_heading: &'static str,
    content_body: &'static str,
    links_heading: &'static str,
    links_body: &'static str,
}

const CONTENT_EN: &str =
    "The content of our pages has been created with the greatest care. However, we cannot guarantee the accuracy, completeness and timeliness of the content.";
const LINKS_EN: &str =
    "Our offer contains links to external third-party websites, the content of which we have no influence on. The respective provider or operator of the pages is always responsible for the content of the linked pages.";

static IMPRESSUM_DE: ImpressumText = ImpressumText {
    title: "Impressum",
    tmg: "Angaben gemäß § 5 TMG",
    contact: "Kontakt",
    phone: "Telefon:",
    responsible: "Verantwortlich für den Inhalt nach § 55 Abs. 2 RStV",
    disclaimer: "Haftungsausschluss",
    content_heading: "Haftung für Inhalte",
    content_body: "Die Inhalte unserer Seiten wurden mit größter Sorgfalt erstellt. Für die Richtigkeit, Vollständigkeit und Aktualität der Inhalte können wir jedoch keine Gewähr übernehmen.",
    links_heading: "Haftung für Links",
    links_body: "Unser Angebot enthält Links zu externen Webseiten Dritter, auf deren Inhalte wir keinen Einfluss haben. Für die Inhalte der verlinkten Seiten ist stets der jeweilige Anbieter oder Betreiber der Seiten verantwortlich.",
};

static IMPRESSUM_EN: ImpressumText = ImpressumText {
    title: "Imprint",
    tmg: "Information according to § 5 TMG",
    contact: "Contact",
    phone: "Phone:",
    responsible: "Responsible for content according to § 55 Abs. 2 RStV",
    disclaimer: "Disclaimer",
    content_heading: "Liability for content",
    content_body: CONTENT_EN,
    links_heading: "Liability for links",
    links_body: LINKS_EN,
};

static IMPRESSUM_RU: ImpressumText = ImpressumText {
    title: "Импрессум",
    tmg: "Информация согласно § 5 TMG",
    contact: "Контакты",
    phone: "Телефон:",
    responsible: "Ответственный за содержание согласно § 55 Abs. 2 RStV",
    disclaimer: "Отказ от ответственности",
    content_heading: "Ответственность за содержание",
    content_body: "Содержание наших страниц было создано с величайшей тщательностью. Однако мы не можем гарантировать точность, полноту и актуальность содержания.",
    links_heading: "Ответственность за ссылки",
    links_body: "Наше предложение содержит ссылки на внешние веб-сайты третьих лиц, на содержание которых мы не имеем влияния. За содержание связанных страниц всегда несет ответственность соответствующий поставщик или оператор страниц.",
};

// Headings are translated; the liability paragraphs use the English text.
static IMPRESSUM_UZ: ImpressumText = ImpressumText {
    title: "Huquqiy ma’lumot",
    tmg: "§ 5 TMG ga muvofiq ma’lumot",
    contact: "Aloqa",
    phone: "Telefon:",
    responsible: "§ 55 Abs. 2 RStV bo‘yicha mazmun uchun mas’ul shaxs",
    disclaimer: "Mas’uliyatdan voz kechish",
    content_heading: "Mazmun uchun mas’uliyat",
    content_body: CONTENT_EN,
    links_heading: "Havolalar uchun mas’uliyat",
    links_body: LINKS_EN,
};

fn impressum_text(lang: Lang) -> &'static ImpressumText {
    match lang {
        Lang::De => &IMPRESSUM_DE,
        Lang::En => &IMPRESSUM_EN,
        Lang::Ru => &IMPRESSUM_RU,
        Lang::Uz => &IMPRESSUM_UZ,
    }
}

#[component]
pub fn ImpressumPage() -> Element {
    let text = impressum_text(use_locale().lang());

    rsx! {
        div { class: "page legal",
            h1 { {text.title} }
            h2 { {text.tmg} }
            p {
                strong { "CARAVAN Restaurant" }
                br {}
                {venue::STREET}
                br {}
                {venue::CITY}
                br {}
                "Deutschland"
            }
            h2 { {text.contact} }
            p {
                strong { {text.phone} }
                " "
                a { href: venue::PHONE_HREF, {venue::PHONE} }
                br {}
                strong { "E-Mail:" }
                " "
                a { href: venue::mailto(), {venue::EMAIL} }
            }
            h2 { {text.responsible} }
            p {
                "CARAVAN Restaurant"
                br {}
                {venue::STREET}
                br {}
                {venue::CITY}
            }
            h2 { {text.disclaimer} }
            h3 { {text.content_heading} }
            p { {text.content_body} }
            h3 { {text.links_heading} }
            p { {text.links_body} }
        }
    }
}

/// German is the binding version; every other language reads the English one.
const PRIVACY_DE: &[(&str, &str)] = &[
    (
        "Verantwortliche Stelle",
        "CARAVAN Restaurant, Wöllstädter Str. 11, 60385 Frankfurt am Main. E-Mail: info@restaurant-caravan.com",
    ),
    (
        "Reservierungsanfragen",
        "Wenn Sie über das Formular einen Tisch anfragen, verarbeiten wir Name, E-Mail-Adresse, Telefonnummer, Personenzahl, Datum, Uhrzeit und Ihre Nachricht ausschließlich zur Bearbeitung der Anfrage (Art. 6 Abs. 1 lit. b DSGVO). Die Übermittlung erfolgt über den Dienst Web3Forms.",
    ),
    (
        "Server-Logfiles",
        "Beim Aufruf der Website werden technisch notwendige Daten wie IP-Adresse, Zeitpunkt und aufgerufene Seite kurzzeitig gespeichert, um den Betrieb sicherzustellen.",
    ),
    (
        "Ihre Rechte",
        "Sie haben das Recht auf Auskunft, Berichtigung, Löschung und Einschränkung der Verarbeitung Ihrer Daten sowie ein Beschwerderecht bei einer Aufsichtsbehörde.",
    ),
];

const PRIVACY_EN: &[(&str, &str)] = &[
    (
        "Controller",
        "CARAVAN Restaurant, Wöllstädter Str. 11, 60385 Frankfurt am Main. Email: info@restaurant-caravan.com",
    ),
    (
        "Reservation requests",
        "When you request a table through the form we process your name, email address, phone number, party size, date, time and message solely to handle the request (Art. 6(1)(b) GDPR). The request is transmitted through the Web3Forms service.",
    ),
    (
        "Server log files",
        "When you visit the website, technically necessary data such as IP address, time and requested page are stored briefly to keep the service running.",
    ),
    (
        "Your rights",
        "You have the right to access, rectify, erase and restrict the processing of your data, and the right to lodge a complaint with a supervisory authority.",
    ),
];

fn privacy_sections(lang: Lang) -> &'static [(&'static str, &'static str)] {
    match lang {
        Lang::De => PRIVACY_DE,
        Lang::En | Lang::Ru | Lang::Uz => PRIVACY_EN,
    }
}

#[component]
pub fn DatenschutzPage() -> Element {
    let locale = use_locale();
    let sections = privacy_sections(locale.lang());

    rsx! {
        div { class: "page legal",
            h1 { {locale.tr().footer.privacy} }
            for (i, (heading, body)) in sections.iter().enumerate() {
                section { key: "{i}",
                    h2 { {*heading} }
                    p { {*body} }
                }
            }
        }
    }
}
