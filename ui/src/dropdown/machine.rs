//! State machine behind [`super::Dropdown`].

use crate::catalog::OptionItem;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    Closed,
    Open,
}

/// Side effect a transition asks the view to perform on the outside-click listener.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListenerEffect {
    Attach,
    Detach,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DropdownMachine {
    options: Vec<OptionItem>,
    button_label: &'static str,
    selected: Option<usize>,
    visibility: Visibility,
    query: String,
    hidden: Vec<bool>,
    listener_attached: bool,
}

impl DropdownMachine {
    /// `selected` is matched by value; if it is not among `options`, nothing is marked.
    pub fn new(options: Vec<OptionItem>, selected: OptionItem) -> Self {
        let index = options.iter().position(|o| o.value == selected.value);
        let hidden = vec![false; options.len()];
        Self {
            options,
            button_label: selected.label,
            selected: index,
            visibility: Visibility::Closed,
            query: String::new(),
            hidden,
            listener_attached: false,
        }
    }

    pub fn options(&self) -> &[OptionItem] {
        &self.options
    }

    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    pub fn is_open(&self) -> bool {
        self.visibility == Visibility::Open
    }

    pub fn listener_attached(&self) -> bool {
        self.listener_attached
    }

    pub fn button_label(&self) -> &'static str {
        self.button_label
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    pub fn is_selected(&self, index: usize) -> bool {
        self.selected == Some(index)
    }

    pub fn is_hidden(&self, index: usize) -> bool {
        self.hidden.get(index).copied().unwrap_or(false)
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn open(&mut self) -> Option<ListenerEffect> {
        match self.visibility {
            Visibility::Open => None,
            Visibility::Closed => {
                self.visibility = Visibility::Open;
                self.listener_attached = true;
                Some(ListenerEffect::Attach)
            }
        }
    }

    pub fn close(&mut self) -> Option<ListenerEffect> {
        match self.visibility {
            Visibility::Closed => None,
            Visibility::Open => {
                self.visibility = Visibility::Closed;
                self.listener_attached = false;
                Some(ListenerEffect::Detach)
            }
        }
    }

    pub fn toggle(&mut self) -> Option<ListenerEffect> {
        match self.visibility {
            Visibility::Open => self.close(),
            Visibility::Closed => self.open(),
        }
    }

    pub fn outside_click(&mut self) -> Option<ListenerEffect> {
        self.close()
    }

    /// Pick the option at `index` and close. Disabled or out-of-range indices do nothing.
    ///
    /// Returns the picked option with the effect of closing.
    pub fn select(&mut self, index: usize) -> Option<(OptionItem, Option<ListenerEffect>)> {
        let option = *self.options.get(index)?;
        if option.disabled {
            return None;
        }
        self.selected = Some(index);
        self.button_label = option.label;
        Some((option, self.close()))
    }

    /// Hide every option whose label does not contain `query` (case-insensitive).
    ///
    /// Returns the number of options left visible.
    pub fn filter(&mut self, query: &str) -> usize {
        let needle = query.to_lowercase();
        for (hidden, option) in self.hidden.iter_mut().zip(&self.options) {
            *hidden = !option.label.to_lowercase().contains(&needle);
        }
        self.query = query.to_string();
        self.visible_count()
    }

    pub fn visible_count(&self) -> usize {
        self.hidden.iter().filter(|hidden| !**hidden).count()
    }

    pub fn show_no_results(&self) -> bool {
        self.visible_count() == 0
    }
}
