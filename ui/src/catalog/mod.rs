//! Static description of every card category and its configurable fields.
//!
//! Nothing in here changes after startup. Field descriptors carry two names:
//! `id` keys the form store (so e.g. the GitHub username typed for one card is
//! reused by every GitHub card), `query` is the parameter name sent to the
//! image endpoint.

mod options;
pub use options::{HF_PIN_TYPES, LAYOUTS, PERIODS, THEMES};

use once_cell::sync::Lazy;

pub const DEFAULT_GITHUB_USERNAME: &str = "ilyhalight";
pub const DEFAULT_WAKATIME_USERNAME: &str = "Toil";
pub const DEFAULT_GITHUB_REPO: &str = "stats-cards";

/// One selectable choice inside a dropdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OptionItem {
    pub value: &'static str,
    pub label: &'static str,
    pub disabled: bool,
}

impl OptionItem {
    pub const fn new(value: &'static str, label: &'static str) -> Self {
        Self {
            value,
            label,
            disabled: false,
        }
    }

    pub const fn disabled(value: &'static str, label: &'static str) -> Self {
        Self {
            value,
            label,
            disabled: true,
        }
    }
}

/// First option a user could actually pick.
pub fn first_enabled(options: &[OptionItem]) -> Option<OptionItem> {
    options.iter().find(|option| !option.disabled).copied()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Dropdown {
        options: &'static [OptionItem],
        search: bool,
    },
    TextInput {
        default: &'static str,
    },
    Checkbox {
        default: bool,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDescriptor {
    pub id: &'static str,
    pub label: &'static str,
    pub query: &'static str,
    pub kind: FieldKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Category {
    pub value: &'static str,
    pub label: &'static str,
    /// Endpoint segment under `/v1/`.
    pub path: &'static str,
    pub fields: &'static [FieldDescriptor],
}

impl Category {
    pub fn as_option(&self) -> OptionItem {
        OptionItem::new(self.value, self.label)
    }
}

const GITHUB_USERNAME: FieldDescriptor = FieldDescriptor {
    id: "github-username",
    label: "Select username",
    query: "username",
    kind: FieldKind::TextInput {
        default: DEFAULT_GITHUB_USERNAME,
    },
};

const WAKATIME_USERNAME: FieldDescriptor = FieldDescriptor {
    id: "wakatime-username",
    label: "Select username",
    query: "username",
    kind: FieldKind::TextInput {
        default: DEFAULT_WAKATIME_USERNAME,
    },
};

const HUGGINGFACE_USERNAME: FieldDescriptor = FieldDescriptor {
    id: "huggingface-username",
    label: "Select username",
    query: "username",
    kind: FieldKind::TextInput { default: "openai" },
};

const GITHUB_REPO: FieldDescriptor = FieldDescriptor {
    id: "github-repo",
    label: "Select repository",
    query: "repo",
    kind: FieldKind::TextInput {
        default: DEFAULT_GITHUB_REPO,
    },
};

const HUGGINGFACE_REPO: FieldDescriptor = FieldDescriptor {
    id: "huggingface-repo",
    label: "Select repository",
    query: "repo",
    kind: FieldKind::TextInput {
        default: "whisper-large-v3",
    },
};

const GIST_ID: FieldDescriptor = FieldDescriptor {
    id: "gist-id",
    label: "Select gist id",
    query: "id",
    kind: FieldKind::TextInput { default: "" },
};

const HUGGINGFACE_TYPE: FieldDescriptor = FieldDescriptor {
    id: "huggingface-type",
    label: "Select type",
    query: "type",
    kind: FieldKind::Dropdown {
        options: HF_PIN_TYPES,
        search: false,
    },
};

const THEME: FieldDescriptor = FieldDescriptor {
    id: "theme",
    label: "Select theme",
    query: "theme",
    kind: FieldKind::Dropdown {
        options: THEMES,
        search: true,
    },
};

const LAYOUT: FieldDescriptor = FieldDescriptor {
    id: "layout",
    label: "Select layout",
    query: "layout",
    kind: FieldKind::Dropdown {
        options: LAYOUTS,
        search: false,
    },
};

const PERIOD: FieldDescriptor = FieldDescriptor {
    id: "period",
    label: "Select period",
    query: "period",
    kind: FieldKind::Dropdown {
        options: PERIODS,
        search: false,
    },
};

const WITH_TITLE: FieldDescriptor = FieldDescriptor {
    id: "with-title",
    label: "Show title",
    query: "with_title",
    kind: FieldKind::Checkbox { default: true },
};

const SHOW_OWNER: FieldDescriptor = FieldDescriptor {
    id: "show-owner",
    label: "Show owner",
    query: "show_owner",
    kind: FieldKind::Checkbox { default: false },
};

pub static CATEGORIES: &[Category] = &[
    Category {
        value: "languages-github",
        label: "Languages (GitHub)",
        path: "top-langs/github",
        fields: &[GITHUB_USERNAME, THEME, LAYOUT],
    },
    Category {
        value: "languages-wakatime",
        label: "Languages (WakaTime)",
        path: "top-langs/wakatime",
        fields: &[WAKATIME_USERNAME, THEME, LAYOUT],
    },
    Category {
        value: "activity-github",
        label: "Activity (GitHub)",
        path: "activity/github",
        fields: &[GITHUB_USERNAME, THEME, PERIOD, WITH_TITLE],
    },
    Category {
        value: "pin-github",
        label: "Pin (GitHub)",
        path: "pin/github",
        fields: &[GITHUB_USERNAME, GITHUB_REPO, THEME, SHOW_OWNER],
    },
    Category {
        value: "pin-gist",
        label: "Pin (Gist)",
        path: "pin/gist",
        fields: &[GIST_ID, THEME, SHOW_OWNER],
    },
    Category {
        value: "pin-huggingface",
        label: "Pin (Huggingface)",
        path: "pin/huggingface",
        fields: &[
            HUGGINGFACE_USERNAME,
            HUGGINGFACE_REPO,
            HUGGINGFACE_TYPE,
            THEME,
            SHOW_OWNER,
        ],
    },
];

/// The category list as dropdown options, in catalog order.
pub static CATEGORY_OPTIONS: Lazy<Vec<OptionItem>> =
    Lazy::new(|| CATEGORIES.iter().map(Category::as_option).collect());

pub fn default_category() -> &'static Category {
    &CATEGORIES[0]
}

pub fn find_category(value: &str) -> Option<&'static Category> {
    CATEGORIES.iter().find(|category| category.value == value)
}
