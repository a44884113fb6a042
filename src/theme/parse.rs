//! Theme file parsing.

use serde_json::{Map, Value};
use std::path::Path;

use crate::error::ThemeError;

use super::legacy::normalize_legacy;
use super::ThemeData;

/// Wallpaper recorded for themes that do not name one.
pub const NO_WALLPAPER: &str = "None";

/// Read and normalize the theme at `path`.
pub fn parse(path: &Path, default_alpha: &str) -> Result<ThemeData, ThemeError> {
    let text = std::fs::read_to_string(path)?;
    parse_str(&text, default_alpha)
}

/// Normalize theme JSON already in memory.
///
/// Fills `wallpaper` and `alpha` when absent, then converts the terminal.sexy
/// layout if a `color` key is present. Nothing else is checked: a file with
/// neither `color` nor `colors` comes back without a palette.
pub fn parse_str(text: &str, default_alpha: &str) -> Result<ThemeData, ThemeError> {
    let mut data = match serde_json::from_str::<Value>(text)? {
        Value::Object(map) => map,
        other => {
            return Err(ThemeError::MalformedTheme(format!(
                "expected a JSON object at the top level, found {}",
                json_kind(&other)
            )))
        }
    };

    fill_defaults(&mut data, default_alpha);

    if data.contains_key("color") {
        data = normalize_legacy(data)?;
    }

    Ok(ThemeData::from_map(data))
}

fn fill_defaults(data: &mut Map<String, Value>, default_alpha: &str) {
    data.entry("wallpaper")
        .or_insert_with(|| Value::String(NO_WALLPAPER.to_string()));
    data.entry("alpha")
        .or_insert_with(|| Value::String(default_alpha.to_string()));
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
