//! Reusable titled dropdown with an optional search box.
//!
//! All behaviour lives in [`DropdownMachine`]; the component only renders it
//! and carries out its listener effects. `Attach` installs a capture-phase
//! `click` listener on the document that reports clicks landing outside the
//! dropdown's root element, `Detach` removes it. Capture phase means the
//! outside control still receives its own click.

mod machine;
pub use machine::{DropdownMachine, ListenerEffect, Visibility};

use std::cell::Cell;
use std::rc::Rc;
use std::sync::atomic::{AtomicUsize, Ordering};

use dioxus::prelude::*;

use crate::catalog::OptionItem;
use crate::t;

static NEXT_DROPDOWN: AtomicUsize = AtomicUsize::new(0);

const ATTACH_SCRIPT: &str = r#"
const target = "__TARGET__";
const registry = (window.__statsCardsDropdowns ??= {});
if (registry[target]) {
    document.removeEventListener("click", registry[target], true);
}
const onClick = (event) => {
    const root = document.getElementById(target);
    if (root && root.contains(event.target)) {
        return;
    }
    document.removeEventListener("click", onClick, true);
    delete registry[target];
    dioxus.send(true);
};
registry[target] = onClick;
document.addEventListener("click", onClick, true);
"#;

const DETACH_SCRIPT: &str = r#"
const target = "__TARGET__";
const registry = window.__statsCardsDropdowns;
if (registry && registry[target]) {
    document.removeEventListener("click", registry[target], true);
    delete registry[target];
}
"#;

/// Document-level outside-click listener for one dropdown root.
#[derive(Clone)]
struct OutsideClickListener {
    target: Rc<str>,
    task: Rc<Cell<Option<Task>>>,
}

impl OutsideClickListener {
    fn new(target: &str) -> Self {
        Self {
            target: Rc::from(target),
            task: Rc::new(Cell::new(None)),
        }
    }

    fn apply(&self, effect: Option<ListenerEffect>, machine: Signal<DropdownMachine>) {
        let Some(effect) = effect else {
            return;
        };
        tracing::trace!(?effect, target = %self.target, "dropdown outside-click listener");
        match effect {
            ListenerEffect::Attach => self.attach(machine),
            ListenerEffect::Detach => self.detach(),
        }
    }

    fn attach(&self, mut machine: Signal<DropdownMachine>) {
        self.detach();
        let slot = Rc::clone(&self.task);
        let script = ATTACH_SCRIPT.replace("__TARGET__", &self.target);
        let task = spawn(async move {
            let mut listener = document::eval(&script);
            match listener.recv::<bool>().await {
                Ok(_) => {
                    // The script has already removed itself.
                    slot.set(None);
                    machine.write().outside_click();
                }
                Err(err) => tracing::debug!(?err, "outside-click listener closed"),
            }
        });
        self.task.set(Some(task));
    }

    fn detach(&self) {
        if let Some(task) = self.task.take() {
            task.cancel();
            document::eval(&DETACH_SCRIPT.replace("__TARGET__", &self.target));
        }
    }
}

#[component]
pub fn Dropdown(
    title: String,
    selected: OptionItem,
    options: Vec<OptionItem>,
    #[props(default)] search: bool,
    #[props(default = true)] arrow: bool,
    onselect: EventHandler<OptionItem>,
) -> Element {
    let mut machine = use_signal(|| DropdownMachine::new(options.clone(), selected));
    let root_id = use_hook(|| {
        format!(
            "dropdown-{}",
            NEXT_DROPDOWN.fetch_add(1, Ordering::Relaxed)
        )
    });
    let listener = use_hook(|| OutsideClickListener::new(&root_id));
    use_drop({
        let listener = listener.clone();
        move || listener.detach()
    });

    let snapshot = machine.read().clone();
    let opened = snapshot.is_open();
    let no_results = snapshot.show_no_results();
    let button_label = snapshot.button_label();
    let query = snapshot.query().to_string();
    let items = snapshot
        .options()
        .iter()
        .copied()
        .enumerate()
        .map(|(index, option)| OptionRow {
            index,
            option,
            selected: snapshot.is_selected(index),
            hidden: snapshot.is_hidden(index),
        })
        .collect::<Vec<_>>();

    rsx! {
        div { id: "{root_id}", class: "dropdown", "data-opened": "{opened}",
            span { class: "dropdown-title", "{title}" }
            button {
                r#type: "button",
                class: "button button_outline dropdown-button",
                onclick: {
                    let listener = listener.clone();
                    move |_| {
                        let effect = machine.write().toggle();
                        listener.apply(effect, machine);
                    }
                },
                span { "{button_label}" }
                if arrow {
                    span { class: "dropdown-button__icon", ArrowIcon {} }
                }
            }

            div { class: "popup dropdown-popup",
                div { class: "dropdown-content",
                    if search {
                        input {
                            r#type: "search",
                            role: "searchbox",
                            class: "search dropdown-search",
                            placeholder: t!("dropdown-search-placeholder"),
                            value: "{query}",
                            oninput: move |evt: FormEvent| {
                                machine.write().filter(&evt.value());
                            },
                        }
                        span { class: "dropdown-separator" }
                    }

                    ul { class: "dropdown-list",
                        if search {
                            span {
                                class: "dropdown-search__info",
                                hidden: !no_results,
                                {t!("dropdown-no-results")}
                            }
                        }
                        for row in items {
                            {render_option(row, machine, listener.clone(), onselect)}
                        }
                    }
                }
            }
        }
    }
}

#[derive(Clone, Copy)]
struct OptionRow {
    index: usize,
    option: OptionItem,
    selected: bool,
    hidden: bool,
}

fn render_option(
    row: OptionRow,
    mut machine: Signal<DropdownMachine>,
    listener: OutsideClickListener,
    onselect: EventHandler<OptionItem>,
) -> Element {
    let OptionRow {
        index,
        option,
        selected,
        hidden,
    } = row;

    // Disabled rows are rendered without any click handler.
    if option.disabled {
        return rsx! {
            li {
                class: "dropdown-list__item",
                "data-value": option.value,
                "data-selected": "{selected}",
                "data-disabled": "true",
                hidden: hidden,
                "{option.label}"
            }
        };
    }

    rsx! {
        li {
            class: "dropdown-list__item",
            "data-value": option.value,
            "data-selected": "{selected}",
            "data-disabled": "false",
            hidden: hidden,
            onclick: move |_| {
                let picked = machine.write().select(index);
                if let Some((picked, effect)) = picked {
                    listener.apply(effect, machine);
                    onselect.call(picked);
                }
            },
            "{option.label}"
        }
    }
}

#[component]
fn ArrowIcon() -> Element {
    rsx! {
        svg {
            width: "14",
            height: "14",
            view_box: "0 0 24 24",
            path {
                fill: "currentColor",
                d: "M13.06 16.06a1.5 1.5 0 0 1-2.12 0l-5.658-5.656a1.5 1.5 0 1 1 2.122-2.121L12 12.879l4.596-4.596a1.5 1.5 0 0 1 2.122 2.12l-5.657 5.658Z",
            }
        }
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;
    use dioxus::dioxus_core::VirtualDom;

    use crate::catalog::THEMES;

    #[test]
    fn outside_clicks_are_caught_in_capture_phase_and_inside_clicks_ignored() {
        let script = ATTACH_SCRIPT.replace("__TARGET__", "dropdown-7");
        assert!(script.contains(r#"const target = "dropdown-7";"#));
        assert!(script.contains(r#"document.addEventListener("click", onClick, true)"#));
        assert!(script.contains("root.contains(event.target)"));
        assert!(!script.contains("__TARGET__"));
    }

    #[test]
    fn detach_removes_the_listener_attach_registered() {
        let script = DETACH_SCRIPT.replace("__TARGET__", "dropdown-7");
        assert!(script.contains(r#"document.removeEventListener("click", registry[target], true)"#));
        assert!(script.contains("window.__statsCardsDropdowns"));
        assert!(ATTACH_SCRIPT.contains("window.__statsCardsDropdowns"));
    }

    #[component]
    fn ThemePicker() -> Element {
        rsx! {
            Dropdown {
                title: "Select theme".to_string(),
                selected: THEMES[0],
                options: THEMES.to_vec(),
                search: true,
                onselect: move |_: OptionItem| {},
            }
        }
    }

    #[test]
    fn root_carries_the_listener_target_and_nothing_covers_the_page() {
        let mut dom = VirtualDom::new(ThemePicker);
        dom.rebuild_in_place();
        let html = dioxus_ssr::render(&dom);

        assert!(html.contains(r#"id="dropdown-"#));
        assert!(html.contains(r#"data-opened="false""#));
        assert!(!html.contains("backdrop"));
        assert_eq!(html.matches(r#"data-selected="true""#).count(), 1);
    }
}
