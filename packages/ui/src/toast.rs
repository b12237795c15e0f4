use dioxus::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Error,
    Success,
}

impl ToastKind {
    fn class(self) -> &'static str {
        match self {
            ToastKind::Error => "toast toast_error",
            ToastKind::Success => "toast toast_success",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub message: String,
    pub kind: ToastKind,
}

/// Feedback notices shown above the page, e.g. after a reservation request.
#[derive(Clone, Copy, PartialEq)]
pub struct Toasts {
    items: Signal<Vec<Toast>>,
    next_id: Signal<u64>,
}

impl Toasts {
    pub fn push(&self, message: impl Into<String>, kind: ToastKind) -> u64 {
        let mut next_id = self.next_id;
        let id = next_id();
        next_id.set(id + 1);
        let mut items = self.items;
        items.with_mut(|items| {
            items.push(Toast {
                id,
                message: message.into(),
                kind,
            })
        });
        id
    }

    pub fn dismiss(&self, id: u64) {
        let mut items = self.items;
        items.with_mut(|items| items.retain(|toast| toast.id != id));
    }

    pub fn error(&self, message: impl Into<String>) {
        self.push(message, ToastKind::Error);
    }

    pub fn success(&self, message: impl Into<String>) {
        self.push(message, ToastKind::Success);
    }
}

pub fn use_toasts() -> Toasts {
    use_context::<Toasts>()
}

#[component]
pub fn ToastProvider(children: Element) -> Element {
    let items = use_signal(Vec::new);
    let next_id = use_signal(|| 1_u64);
    let toasts = use_context_provider(|| Toasts { items, next_id });

    rsx! {
        {children}
        ToastRegion { toasts }
    }
}

#[component]
fn ToastRegion(toasts: Toasts) -> Element {
    let items = toasts.items.read().clone();
    rsx! {
        div { class: "toast_region", role: "status", "aria-live": "polite",
            for toast in items {
                div { key: "{toast.id}", class: toast.kind.class(),
                    p { class: "toast_message", "{toast.message}" }
                    button {
                        class: "toast_close",
                        "aria-label": "×",
                        onclick: move |_| toasts.dismiss(toast.id),
                        "×"
                    }
                }
            }
        }
    }
}
