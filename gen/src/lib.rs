//! Renders the language color table as a single SVG sheet, one swatch per row.
//!
//! Used to eyeball the palette the language cards draw from. Colors are
//! emitted verbatim; nothing is validated.

use std::fmt::Write as _;

use serde_json::{Map, Value};

/// Language name (lowercase) -> `#rrggbb`, in file order.
pub const LANGUAGE_COLORS_JSON: &str = include_str!("../data/lang2hex.json");

pub const SHEET_WIDTH: u32 = 512;
pub const SHEET_HEIGHT: u32 = 4096;
pub const FIRST_ROW_Y: u32 = 20;
pub const ROW_STEP: u32 = 24;

const BACKGROUND: &str = "#24273A";
const LABEL_FILL: &str = "#CAD3F5";

/// Parse a `{ "language": "color", ... }` table, keeping file order.
///
/// Non-string colors are kept as their JSON text.
pub fn parse_table(json: &str) -> Result<Vec<(String, String)>, serde_json::Error> {
    let map: Map<String, Value> = serde_json::from_str(json)?;
    Ok(map
        .into_iter()
        .map(|(lang, color)| {
            let color = match color {
                Value::String(color) => color,
                other => other.to_string(),
            };
            (lang, color)
        })
        .collect())
}

pub fn render_sheet<S: AsRef<str>>(entries: &[(S, S)]) -> String {
    let mut rows = String::new();
    let mut y = FIRST_ROW_Y;
    for (index, (lang, color)) in entries.iter().enumerate() {
        if index > 0 {
            rows.push('\n');
        }
        let (lang, color) = (lang.as_ref(), color.as_ref());
        let _ = write!(
            rows,
            r#"<g>
    <rect x="20" y="{y}" width="12" height="12" rx="6" fill="{color}" />
    <text x="38" y="{text_y}" fill="{LABEL_FILL}" class="stat-text">{lang} 99.99%</text>
  </g>"#,
            text_y = y + 11,
        );
        y += ROW_STEP;
    }

    format!(
        r#"<svg
  width="{SHEET_WIDTH}"
  height="{SHEET_HEIGHT}"
  viewBox="0 0 {SHEET_WIDTH} {SHEET_HEIGHT}"
  fill="none"
  xmlns="http://www.w3.org/2000/svg"
>
<rect width="{SHEET_WIDTH}" height="{SHEET_HEIGHT}" rx="6" fill="{BACKGROUND}" />
  <g>{rows}</g>
</svg>
"#
    )
}
