use dioxus::prelude::*;

use crate::catalog::{OptionItem, CATEGORY_OPTIONS};
use crate::components::{CategoryPanel, SharePanel, ToastHost};
use crate::core::config::PanelConfig;
use crate::dropdown::Dropdown;
use crate::share::ToastCenter;
use crate::state::{GeneratorState, RenderPass};

#[component]
pub fn Generator() -> Element {
    // Subscribe to the global language code (if provided) so we re-render on change.
    let lang_code: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let lang_marker = lang_code.as_ref().map(|s| s()).unwrap_or_default();

    let config = use_context::<PanelConfig>();
    let mut state = use_signal(|| {
        let mut state = GeneratorState::new();
        state.render();
        state
    });
    let toasts = use_signal(ToastCenter::default);

    let (category, preview_url) = {
        let snapshot = state.read();
        (
            snapshot.category(),
            snapshot.preview().map(|path| config.endpoint_url(path)),
        )
    };

    let on_category = move |option: OptionItem| {
        let pass = state.write().select_category(option.value);
        if pass == Some(RenderPass::Built) {
            tracing::debug!(category = option.value, "category switched");
        }
    };

    rsx! {
        div { style: "display:none", "{lang_marker}" }
        section { class: "page page-generator",
            h1 { {crate::t!("generator-title")} }
            p { {crate::t!("generator-intro")} }

            div { class: "generator",
                div { class: "generator-settings",
                    div { class: "generator-category",
                        Dropdown {
                            title: crate::t!("category-title"),
                            selected: category.as_option(),
                            options: CATEGORY_OPTIONS.clone(),
                            search: true,
                            onselect: on_category,
                        }
                    }
                    CategoryPanel { state: state }
                }

                div { class: "generator-preview",
                    h2 { {crate::t!("preview-title")} }
                    if let Some(url) = preview_url.as_ref() {
                        img {
                            id: "generated-image",
                            class: "generator-preview__image",
                            src: "{url}",
                            alt: "{category.label}",
                        }
                    } else {
                        p { class: "generator-preview__placeholder",
                            {crate::t!("preview-placeholder")}
                        }
                    }
                    SharePanel {
                        preview_url: preview_url.clone(),
                        label: category.label.to_string(),
                        toasts: toasts,
                    }
                }
            }

            ToastHost { toasts: toasts }
        }
    }
}
