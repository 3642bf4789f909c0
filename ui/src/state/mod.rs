//! Form state for the generator panel.

mod generator;
pub use generator::{GeneratorState, RenderPass};

use std::borrow::Cow;
use std::collections::HashMap;

use crate::catalog::{first_enabled, FieldDescriptor, FieldKind, OptionItem};

/// Current value of one field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    Flag(bool),
    Choice(OptionItem),
}

impl FieldValue {
    /// Declared default for a field, or `None` for a dropdown with no options.
    pub fn default_for(field: &FieldDescriptor) -> Option<Self> {
        match field.kind {
            FieldKind::Dropdown { options, .. } => first_enabled(options)
                .or_else(|| options.first().copied())
                .map(Self::Choice),
            FieldKind::TextInput { default } => Some(Self::Text(default.to_string())),
            FieldKind::Checkbox { default } => Some(Self::Flag(default)),
        }
    }

    /// The string sent to the image endpoint.
    pub fn query_value(&self) -> Cow<'_, str> {
        match self {
            Self::Text(text) => Cow::Borrowed(text),
            Self::Flag(flag) => Cow::Borrowed(if *flag { "true" } else { "false" }),
            Self::Choice(option) => Cow::Borrowed(option.value),
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            _ => None,
        }
    }

    pub fn as_flag(&self) -> Option<bool> {
        match self {
            Self::Flag(flag) => Some(*flag),
            _ => None,
        }
    }

    pub fn as_choice(&self) -> Option<OptionItem> {
        match self {
            Self::Choice(option) => Some(*option),
            _ => None,
        }
    }
}

/// Field id -> current value. Entries are created on first render and never removed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormStateStore {
    entries: HashMap<&'static str, FieldValue>,
}

impl FormStateStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, id: &str) -> Option<&FieldValue> {
        self.entries.get(id)
    }

    pub fn set(&mut self, id: &'static str, value: FieldValue) {
        self.entries.insert(id, value);
    }

    pub fn has(&self, id: &str) -> bool {
        self.entries.contains_key(id)
    }

    /// Seed the entry for `field` with its default unless one already exists.
    pub fn ensure(&mut self, field: &FieldDescriptor) -> Option<&FieldValue> {
        if !self.entries.contains_key(field.id) {
            let value = FieldValue::default_for(field)?;
            self.entries.insert(field.id, value);
        }
        self.entries.get(field.id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{find_category, LAYOUTS};

    fn field(category: &str, id: &str) -> FieldDescriptor {
        *find_category(category)
            .and_then(|c| c.fields.iter().find(|f| f.id == id))
            .expect("field exists")
    }

    #[test]
    fn dropdown_defaults_to_first_enabled_option() {
        let layout = field("languages-github", "layout");
        assert_eq!(
            FieldValue::default_for(&layout),
            Some(FieldValue::Choice(LAYOUTS[1]))
        );
    }

    #[test]
    fn dropdown_without_enabled_options_falls_back_to_first() {
        const ALL_OFF: &[OptionItem] = &[OptionItem::disabled("a", "A")];
        let descriptor = FieldDescriptor {
            id: "x",
            label: "X",
            query: "x",
            kind: FieldKind::Dropdown {
                options: ALL_OFF,
                search: false,
            },
        };
        assert_eq!(
            FieldValue::default_for(&descriptor),
            Some(FieldValue::Choice(ALL_OFF[0]))
        );

        let empty = FieldDescriptor {
            kind: FieldKind::Dropdown {
                options: &[],
                search: false,
            },
            ..descriptor
        };
        let mut store = FormStateStore::new();
        assert!(store.ensure(&empty).is_none());
        assert!(!store.has("x"));
    }

    #[test]
    fn ensure_never_overwrites_user_value() {
        let username = field("languages-github", "github-username");
        let mut store = FormStateStore::new();
        store.set("github-username", FieldValue::Text("octocat".into()));
        let value = store.ensure(&username).cloned();
        assert_eq!(value, Some(FieldValue::Text("octocat".into())));
    }

    #[test]
    fn query_values_render_scalars_and_choices() {
        assert_eq!(FieldValue::Flag(false).query_value(), "false");
        assert_eq!(FieldValue::Text("Toil".into()).query_value(), "Toil");
        assert_eq!(
            FieldValue::Choice(OptionItem::new("dark", "Dark")).query_value(),
            "dark"
        );
    }
}
