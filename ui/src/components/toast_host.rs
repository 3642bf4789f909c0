use dioxus::prelude::*;

use crate::share::ToastCenter;
use crate::t;

#[component]
pub fn ToastHost(toasts: Signal<ToastCenter>) -> Element {
    let mut toasts = toasts;
    let Some(toast) = toasts.read().current().cloned() else {
        return rsx! {};
    };
    let id = toast.id;
    let class = format!("toast {}", toast.kind.css_class());

    rsx! {
        div { class: "{class}", role: "status",
            span { class: "toast__message", "{toast.message}" }
            button {
                r#type: "button",
                class: "toast__dismiss",
                aria_label: t!("toast-dismiss"),
                onclick: move |_| {
                    toasts.write().dismiss(id);
                },
                "×"
            }
        }
    }
}
