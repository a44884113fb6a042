//! terminal.sexy schema conversion.
//!
//! terminal.sexy exports `{"foreground", "background", "color": [...]}`;
//! this rewrites that into the `colors`/`special` layout.

use serde_json::{Map, Value};

use crate::error::ThemeError;

/// Index in the `color` array used as the cursor color.
const CURSOR_INDEX: usize = 9;

/// True when `data` carries a top-level `color` array.
pub fn is_legacy(data: &Map<String, Value>) -> bool {
    data.get("color").is_some_and(Value::is_array)
}

/// Add `colors` and `special` built from the legacy fields.
///
/// Other keys are left alone; existing `colors`/`special` are replaced.
pub fn normalize_legacy(mut data: Map<String, Value>) -> Result<Map<String, Value>, ThemeError> {
    let palette = match data.get("color") {
        Some(Value::Array(palette)) => palette.clone(),
        Some(_) => {
            return Err(ThemeError::MalformedTheme(
                "`color` must be an array".to_string(),
            ))
        }
        None => {
            return Err(ThemeError::MalformedTheme(
                "missing `color` array".to_string(),
            ))
        }
    };
    let Some(cursor) = palette.get(CURSOR_INDEX).cloned() else {
        return Err(ThemeError::MalformedTheme(format!(
            "`color` has {} entries, need at least {}",
            palette.len(),
            CURSOR_INDEX + 1
        )));
    };

    let mut special = Map::new();
    special.insert("foreground".to_string(), required(&data, "foreground")?);
    special.insert("background".to_string(), required(&data, "background")?);
    special.insert("cursor".to_string(), cursor);

    let colors: Map<String, Value> = palette
        .into_iter()
        .enumerate()
        .map(|(i, color)| (format!("color{i}"), color))
        .collect();

    data.insert("colors".to_string(), Value::Object(colors));
    data.insert("special".to_string(), Value::Object(special));
    Ok(data)
}

fn required(data: &Map<String, Value>, key: &str) -> Result<Value, ThemeError> {
    data.get(key)
        .cloned()
        .ok_or_else(|| ThemeError::MalformedTheme(format!("missing `{key}`")))
}
