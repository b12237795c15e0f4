use dioxus::prelude::*;

use crate::locale::use_locale;
use crate::venue;

const REVIEW_CSS: Asset = asset!("/assets/styling/review.css");

const DISMISSED_KEY: &str = "caravan_review_dismissed";

/// Floating invitation to leave a Google review. Starts as a small round
/// button, expands on click and stays hidden once dismissed.
#[component]
pub fn ReviewButton() -> Element {
    let locale = use_locale();
    let text = &locale.tr().review;
    // Hidden until the browser confirms it was never dismissed; keeps SSR and
    // hydration in agreement.
    let mut visible = use_signal(|| false);
    let mut expanded = use_signal(|| false);

    use_effect(move || {
        spawn(async move {
            let js = format!(
                r#"(function(){{ try {{ return localStorage.getItem("{DISMISSED_KEY}") === "true"; }} catch(e) {{ return false; }} }})()"#
            );
            match document::eval(&js).await {
                Ok(v) => visible.set(v.as_bool() != Some(true)),
                Err(e) => tracing::debug!("review_button.load: eval failed error={e:?}"),
            }
        });
    });

    let dismiss = move |evt: MouseEvent| {
        evt.prevent_default();
        evt.stop_propagation();
        visible.set(false);
        spawn(async move {
            let _ = document::eval(&format!(
                r#"(function(){{ try {{ localStorage.setItem("{DISMISSED_KEY}","true"); }} catch(e) {{}} return ""; }})()"#
            ))
            .await;
        });
    };

    if !visible() {
        return rsx! {};
    }

    rsx! {
        document::Link { rel: "stylesheet", href: REVIEW_CSS }
        div { class: "review_prompt",
            if expanded() {
                div { class: "review_card",
                    button {
                        class: "review_close",
                        "aria-label": text.close,
                        onclick: dismiss,
                        "×"
                    }
                    a {
                        href: venue::review_url(),
                        target: "_blank",
                        rel: "noopener noreferrer",
                        "aria-label": text.action,
                        span { class: "review_stars", "★★★★★" }
                        span { class: "review_teaser", {text.teaser} }
                        span { class: "review_action", {text.action} " →" }
                        span { class: "review_source", {text.source} }
                    }
                }
            } else {
                button {
                    class: "review_bubble",
                    "aria-label": text.open,
                    onclick: move |_| expanded.set(true),
                    "G"
                }
            }
        }
    }
}
