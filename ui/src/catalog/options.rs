use super::OptionItem;

pub const THEMES: &[OptionItem] = &[
    OptionItem::new("catppuccin-macchiato", "Catppuccin Macchiato"),
    OptionItem::new("catppuccin-mocha", "Catppuccin Mocha"),
    OptionItem::new("catppuccin-latte", "Catppuccin Latte"),
    OptionItem::new("catppuccin-frappe", "Catppuccin Frappe"),
    OptionItem::new("dark", "Dark"),
    OptionItem::new("white", "White"),
    OptionItem::new("onedark-pro-flat", "OneDark Pro Flat"),
    OptionItem::new("dracula", "Dracula"),
    OptionItem::new("kanagawa-wave", "Kanagawa Wave"),
    OptionItem::new("ayu-mirage", "Ayu Mirage"),
    OptionItem::new("ayu-white", "Ayu White"),
    OptionItem::new("monokai-classic", "Monokai Classic"),
];

// The service does not render the full layout yet.
pub const LAYOUTS: &[OptionItem] = &[
    OptionItem::disabled("normal", "Normal"),
    OptionItem::new("compact", "Compact"),
];

pub const PERIODS: &[OptionItem] = &[
    OptionItem::new("3_months", "3 Months"),
    OptionItem::new("6_months", "6 Months"),
    OptionItem::new("year", "Year"),
];

pub const HF_PIN_TYPES: &[OptionItem] = &[
    OptionItem::new("model", "Model"),
    OptionItem::new("dataset", "Dataset"),
    OptionItem::new("space", "Space"),
];
