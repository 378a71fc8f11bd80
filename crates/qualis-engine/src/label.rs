use qualis_types::CheckDefinition;

/// Human-readable label for a check definition.
///
/// Total over every type tag: unknown tags fall back to the tag itself
/// with underscores replaced by spaces.
pub fn check_label(check: &CheckDefinition) -> String {
    match check {
        CheckDefinition::NotNull { .. } => "Not Null".to_string(),
        CheckDefinition::Range { min, max, .. } => {
            format!("Range ({} - {})", format_number(*min), format_number(*max))
        }
        CheckDefinition::Length { max_length, .. } => {
            format!("Max Length ({})", format_number(*max_length))
        }
        CheckDefinition::Other { check_type, .. } => check_type.replace('_', " "),
    }
}

/// Shortest decimal form of a wire number: `120.0` -> "120", `1.5` -> "1.5".
pub fn format_number(value: f64) -> String {
    if value == 0.0 {
        // collapses -0.0 as well
        return "0".to_string();
    }
    value.to_string()
}
