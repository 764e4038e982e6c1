//! Type casting of textual update values
//!
//! Only the right-hand side of `path=value` expressions goes through here.
//! Values supplied already typed are stored as-is.

use crate::tree::ConfigValue;

/// Literal that casts to the absent-marker. Case-sensitive.
pub const NONE_LITERAL: &str = "None";

/// Cast a textual literal to a typed value.
///
/// First match wins:
/// 1. `None` (exact) is the absent-marker
/// 2. `true` / `false` in any ASCII casing are booleans
/// 3. a full base-10 integer (optional sign) that fits `i64`
/// 4. a full floating point literal with a finite value
/// 5. anything else is kept as text, unchanged
pub fn cast(text: &str) -> ConfigValue {
    if text == NONE_LITERAL {
        return ConfigValue::None;
    }
    if text.eq_ignore_ascii_case("true") {
        return ConfigValue::Bool(true);
    }
    if text.eq_ignore_ascii_case("false") {
        return ConfigValue::Bool(false);
    }
    if let Ok(i) = text.parse::<i64>() {
        return ConfigValue::Integer(i);
    }
    if let Some(f) = text.parse::<f64>().ok().filter(|f| f.is_finite()) {
        return ConfigValue::Float(f);
    }
    ConfigValue::Text(text.to_string())
}
