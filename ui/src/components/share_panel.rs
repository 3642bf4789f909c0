use dioxus::prelude::*;

use crate::core::config::PanelConfig;
use crate::core::timing;
use crate::share::{copy_preview, CopyError, ShareFormat, SystemClipboard, ToastCenter, ToastKind};
use crate::t;

/// Copy buttons for the current preview URL.
#[component]
pub fn SharePanel(
    preview_url: Option<String>,
    label: String,
    toasts: Signal<ToastCenter>,
) -> Element {
    let config = use_context::<PanelConfig>();
    let ttl_ms = config.toast_ttl_ms;

    let buttons = ShareFormat::ALL
        .into_iter()
        .map(|format| {
            let caption = match format {
                ShareFormat::Plain => t!("share-plain"),
                ShareFormat::Markdown => t!("share-markdown"),
                ShareFormat::Code => t!("share-code"),
            };
            (format, caption, preview_url.clone(), label.clone())
        })
        .collect::<Vec<_>>();

    rsx! {
        div { class: "generator-share",
            span { class: "generator-share__title", {t!("share-title")} }
            div { class: "generator-share__actions",
                for (format, caption, url, label) in buttons {
                    button {
                        r#type: "button",
                        class: "button button_outline",
                        onclick: move |_| start_copy(url.clone(), label.clone(), format, toasts, ttl_ms),
                        "{caption}"
                    }
                }
            }
        }
    }
}

fn start_copy(
    preview_url: Option<String>,
    label: String,
    format: ShareFormat,
    mut toasts: Signal<ToastCenter>,
    ttl_ms: u64,
) {
    spawn(async move {
        let outcome = copy_preview(&SystemClipboard, preview_url.as_deref(), &label, format).await;
        let (kind, message) = match outcome {
            Ok(_) => (ToastKind::Success, t!("toast-copied")),
            Err(CopyError::MissingPreview) => (ToastKind::Error, t!("toast-no-preview")),
            Err(CopyError::Clipboard(err)) => {
                tracing::warn!(%err, ?format, "clipboard write failed");
                (
                    ToastKind::Error,
                    t!("toast-copy-failed", reason = err.to_string()),
                )
            }
        };

        let id = toasts.write().show(kind, message);
        timing::sleep_ms(ttl_ms).await;
        toasts.write().dismiss(id);
    });
}
