use std::collections::HashMap;
use tera::{Error as TeraError, Value};

/// Create a surround filter closure for Tera
///
/// # Returns
/// A filter that surrounds the input text with the "start" and "end" named arguments.
/// Missing arguments default to an empty string.
/// Empty input text is returned unchanged.
///
/// # Examples
/// ```tera
/// {{ text | surround(start="[", end="]") }}
/// ```
pub fn create_surround_filter(
) -> impl Fn(&Value, &HashMap<String, Value>) -> Result<Value, TeraError> {
    move |value: &Value, args: &HashMap<String, Value>| {
        let text = tera::try_get_value!("surround", "value", String, value);

        Ok(Value::String(if text.is_empty() {
            text
        } else {
            let start = args.get("start").and_then(|v| v.as_str()).unwrap_or("");
            let end = args.get("end").and_then(|v| v.as_str()).unwrap_or("");
            format!("{}{}{}", start, text, end)
        }))
    }
}
