use dioxus::prelude::*;

use crate::locale::{use_locale, Lang};

/// Dropdown listing every language; picking one moves to the same page in
/// that language.
#[component]
pub fn LanguagePicker() -> Element {
    let locale = use_locale();
    let current = locale.lang();
    let mut open = use_signal(|| false);
    let label = locale.tr().language.label;

    rsx! {
        div { class: "lang_picker",
            button {
                class: "lang_toggle",
                "aria-label": label,
                "aria-expanded": "{open}",
                onclick: move |_| open.toggle(),
                span { class: "lang_flag", {current.flag()} }
                span { class: "lang_code", {current.code().to_uppercase()} }
            }
            if open() {
                ul { class: "lang_menu", role: "listbox",
                    for lang in Lang::ALL {
                        li { key: "{lang.code()}",
                            a {
                                class: if lang == current { "lang_option active" } else { "lang_option" },
                                href: locale.href_in(lang),
                                hreflang: lang.code(),
                                role: "option",
                                "aria-selected": lang == current,
                                onclick: move |evt: MouseEvent| {
                                    evt.prevent_default();
                                    open.set(false);
                                    locale.set_language(lang);
                                },
                                span { class: "lang_flag", {lang.flag()} }
                                span { {lang.native_name()} }
                            }
                        }
                    }
                }
            }
        }
    }
}
