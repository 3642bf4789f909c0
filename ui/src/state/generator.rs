use crate::catalog::{default_category, find_category, Category};
use crate::preview;

use super::{FieldValue, FormStateStore};

/// Outcome of [`GeneratorState::render`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderPass {
    /// The selected category was already rendered; nothing changed.
    Skipped,
    /// Field defaults were seeded and the preview regenerated.
    Built,
}

/// Everything the generator page knows for one page session.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratorState {
    category: &'static Category,
    rendered: Option<&'static str>,
    store: FormStateStore,
    preview: Option<String>,
}

impl Default for GeneratorState {
    fn default() -> Self {
        Self::new()
    }
}

impl GeneratorState {
    pub fn new() -> Self {
        Self {
            category: default_category(),
            rendered: None,
            store: FormStateStore::new(),
            preview: None,
        }
    }

    pub fn category(&self) -> &'static Category {
        self.category
    }

    pub fn store(&self) -> &FormStateStore {
        &self.store
    }

    /// Path of the last generated preview, `None` before the first render.
    pub fn preview(&self) -> Option<&str> {
        self.preview.as_deref()
    }

    /// Category the field panel was last built for.
    pub fn rendered_category(&self) -> Option<&'static str> {
        self.rendered
    }

    /// Switch to the category with `value` and render it. Unknown values are ignored.
    pub fn select_category(&mut self, value: &str) -> Option<RenderPass> {
        let Some(category) = find_category(value) else {
            tracing::warn!(category = value, "ignoring unknown category");
            return None;
        };
        self.category = category;
        Some(self.render())
    }

    /// Seed defaults for the selected category's fields and regenerate the preview.
    ///
    /// A second call for the same category is a no-op.
    pub fn render(&mut self) -> RenderPass {
        if self.rendered == Some(self.category.value) {
            return RenderPass::Skipped;
        }

        for field in self.category.fields {
            self.store.ensure(field);
        }
        self.rendered = Some(self.category.value);
        self.regenerate_preview();
        tracing::debug!(
            category = self.category.value,
            fields = self.category.fields.len(),
            "rendered generator panel"
        );
        RenderPass::Built
    }

    /// Store a user-chosen value and refresh the preview.
    pub fn set_field(&mut self, id: &'static str, value: FieldValue) {
        tracing::debug!(field = id, value = %value.query_value(), "form value updated");
        self.store.set(id, value);
        self.regenerate_preview();
    }

    pub fn regenerate_preview(&mut self) -> &str {
        self.preview.insert(preview::build(self.category, &self.store))
    }
}
