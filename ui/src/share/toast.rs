//! Single-slot transient messages.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

impl ToastKind {
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Success => "toast--success",
            Self::Error => "toast--error",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
}

/// Holds at most one visible toast; showing a new one replaces the old.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ToastCenter {
    current: Option<Toast>,
    next_id: u64,
}

impl ToastCenter {
    pub fn show(&mut self, kind: ToastKind, message: impl Into<String>) -> u64 {
        self.next_id = self.next_id.wrapping_add(1);
        let id = self.next_id;
        self.current = Some(Toast {
            id,
            kind,
            message: message.into(),
        });
        id
    }

    pub fn current(&self) -> Option<&Toast> {
        self.current.as_ref()
    }

    /// Remove toast `id` if it is still the visible one. Stale ids are ignored,
    /// so an expiry timer never closes a newer message.
    pub fn dismiss(&mut self, id: u64) -> bool {
        if self.current.as_ref().is_some_and(|toast| toast.id == id) {
            self.current = None;
            true
        } else {
            false
        }
    }
}
