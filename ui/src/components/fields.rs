use dioxus::prelude::*;

use crate::catalog::{first_enabled, FieldDescriptor, FieldKind, OptionItem};
use crate::core::config::PanelConfig;
use crate::core::schedule::Debouncer;
use crate::core::timing;
use crate::dropdown::Dropdown;
use crate::state::{FieldValue, GeneratorState};

/// Controls for every field of the selected category, bound to the form store.
///
/// Rows are keyed by category and field id, so switching categories mounts
/// fresh widgets seeded from the store and drops the old ones together with
/// their pending timers.
#[component]
pub fn CategoryPanel(state: Signal<GeneratorState>) -> Element {
    let config = use_context::<PanelConfig>();

    let (category, rows) = {
        let snapshot = state.read();
        let category = snapshot.category();
        let rows = category
            .fields
            .iter()
            .map(|field| (*field, snapshot.store().get(field.id).cloned()))
            .collect::<Vec<_>>();
        (category, rows)
    };

    rsx! {
        ul {
            class: "generator-options",
            "data-category": category.value,
            for (field, value) in rows {
                li {
                    key: "{category.value}:{field.id}",
                    class: "generator-options__item",
                    {render_field(field, value, state, config.input_debounce_ms)}
                }
            }
        }
    }
}

fn render_field(
    field: FieldDescriptor,
    value: Option<FieldValue>,
    mut state: Signal<GeneratorState>,
    debounce_ms: u64,
) -> Element {
    match field.kind {
        FieldKind::Dropdown { options, search } => {
            let selected = value
                .as_ref()
                .and_then(FieldValue::as_choice)
                .or_else(|| first_enabled(options));
            let Some(selected) = selected else {
                return rsx! {};
            };
            rsx! {
                Dropdown {
                    title: field.label.to_string(),
                    selected: selected,
                    options: options.to_vec(),
                    search: search,
                    onselect: move |option: OptionItem| {
                        state.write().set_field(field.id, FieldValue::Choice(option));
                    },
                }
            }
        }
        FieldKind::TextInput { default } => {
            let initial = value
                .as_ref()
                .and_then(FieldValue::as_text)
                .unwrap_or(default)
                .to_string();
            rsx! {
                TextField {
                    field: field,
                    initial: initial,
                    debounce_ms: debounce_ms,
                    onchange: move |text: String| {
                        state.write().set_field(field.id, FieldValue::Text(text));
                    },
                }
            }
        }
        FieldKind::Checkbox { default } => {
            let checked = value
                .as_ref()
                .and_then(FieldValue::as_flag)
                .unwrap_or(default);
            rsx! {
                CheckboxField {
                    field: field,
                    checked: checked,
                    onchange: move |checked: bool| {
                        state.write().set_field(field.id, FieldValue::Flag(checked));
                    },
                }
            }
        }
    }
}

/// Text input whose displayed value follows every keystroke while `onchange`
/// only fires once typing has been quiet for `debounce_ms`.
#[component]
pub fn TextField(
    field: FieldDescriptor,
    initial: String,
    debounce_ms: u64,
    onchange: EventHandler<String>,
) -> Element {
    let mut text = use_signal(|| initial.clone());
    let debouncer = use_signal(|| Debouncer::<String>::new(debounce_ms));

    let input_id = format!("generator-{}", field.id);
    let placeholder = match field.kind {
        FieldKind::TextInput { default } => default,
        _ => "",
    };

    rsx! {
        label { r#for: "{input_id}", class: "textfield-wrapper",
            input {
                r#type: "text",
                id: "{input_id}",
                class: "textfield textfield_outline",
                placeholder: "{placeholder}",
                value: "{text}",
                oninput: move |evt: FormEvent| {
                    let value = evt.value();
                    text.set(value.clone());
                    queue_keystroke(debouncer, value, onchange);
                },
            }
            "{field.label}"
        }
    }
}

/// Hand `value` to `onchange` once no newer keystroke arrived within the delay.
///
/// The timer task belongs to the calling scope and dies with it.
fn queue_keystroke(
    mut debouncer: Signal<Debouncer<String>>,
    value: String,
    onchange: EventHandler<String>,
) {
    let ticket = debouncer.write().schedule(value);
    let delay = debouncer.peek().delay_ms();
    spawn(async move {
        timing::sleep_ms(delay).await;
        let settled = debouncer.write().fire(ticket);
        if let Some(value) = settled {
            onchange.call(value);
        }
    });
}

#[component]
pub fn CheckboxField(
    field: FieldDescriptor,
    checked: bool,
    onchange: EventHandler<bool>,
) -> Element {
    let input_id = format!("generator-{}", field.id);

    rsx! {
        label { r#for: "{input_id}", class: "checkbox-wrapper",
            input {
                r#type: "checkbox",
                id: "{input_id}",
                checked: checked,
                onchange: move |evt: FormEvent| onchange.call(evt.checked()),
            }
            "{field.label}"
        }
    }
}
