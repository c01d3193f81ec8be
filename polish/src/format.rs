use crate::eval::Value;

/// Renders an evaluation result as the single line shown to the user.
pub fn format_value(value: &Value) -> String {
    match value {
        Ok(n) => n.to_string(),
        Err(err) => err.to_string(),
    }
}
