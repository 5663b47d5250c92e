use std::collections::HashMap;
use tera::{Error as TeraError, Value};

use crate::fonts::FontRegistry;

/// Create a font filter closure for Tera
///
/// # Arguments
/// * `fonts` - The registry holding the character maps
///
/// # Returns
/// A filter that transforms the input text with the map given in the "name" argument.
/// A missing or unknown map name leaves the text unchanged.
///
/// # Examples
/// ```tera
/// {{ text | font(name="bold") }}
/// ```
pub fn create_font_filter(
    fonts: &'static FontRegistry,
) -> impl Fn(&Value, &HashMap<String, Value>) -> Result<Value, TeraError> {
    move |value: &Value, args: &HashMap<String, Value>| {
        let text = tera::try_get_value!("font", "value", String, value);
        let name = args.get("name").and_then(|v| v.as_str());
        Ok(Value::String(fonts.transform(&text, name)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fonts::FONTS;

    #[test]
    fn test_font_filter() {
        let filter = create_font_filter(&FONTS);
        let mut args = HashMap::new();
        args.insert("name".to_string(), Value::String("circled".to_string()));
        let value = Value::String("Zed".to_string());

        let result = filter(&value, &args).unwrap();
        assert_eq!(result.as_str().unwrap(), "Ⓩⓔⓓ");
    }

    #[test]
    fn test_font_filter_unknown_name() {
        let filter = create_font_filter(&FONTS);
        let mut args = HashMap::new();
        args.insert("name".to_string(), Value::String("unknown".to_string()));
        let value = Value::String("Zed".to_string());

        let result = filter(&value, &args).unwrap();
        assert_eq!(result.as_str().unwrap(), "Zed");
    }

    #[test]
    fn test_font_filter_without_name() {
        let filter = create_font_filter(&FONTS);
        let value = Value::String("Zed".to_string());

        let result = filter(&value, &HashMap::new()).unwrap();
        assert_eq!(result.as_str().unwrap(), "Zed");
    }
}
