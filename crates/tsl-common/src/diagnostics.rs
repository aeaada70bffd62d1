use serde_json::Value;

/// Interpolation data attached to a diagnostic, keyed by placeholder name.
pub type MessageData = serde_json::Map<String, Value>;

/// Render a message template, replacing `{{key}}` placeholders with values
/// from `data`. Whitespace inside the braces is ignored. Placeholders with no
/// matching key are left as written.
pub fn format_message(template: &str, data: &MessageData) -> String {
    let mut result = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find("{{") {
        result.push_str(&rest[..open]);
        let after_open = &rest[open + 2..];
        let Some(close) = after_open.find("}}") else {
            result.push_str(&rest[open..]);
            return result;
        };

        let key = after_open[..close].trim();
        match data.get(key) {
            Some(value) => result.push_str(&value_to_string(value)),
            None => result.push_str(&rest[open..open + 2 + close + 2]),
        }
        rest = &after_open[close + 2..];
    }

    result.push_str(rest);
    result
}

fn value_to_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
#[path = "../tests/diagnostics_tests.rs"]
mod diagnostics_tests;
