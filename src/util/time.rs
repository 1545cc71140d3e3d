//! Timestamp display formatting.

#[cfg(test)]
#[path = "time_test.rs"]
mod time_test;

/// Format a backend timestamp for display.
///
/// The backend already serializes timestamps as `"%Y-%m-%d %H:%M:%S"`, so
/// present values pass through unchanged; absent or empty values render as
/// a placeholder dash.
pub fn format_date_time(value: Option<&str>) -> String {
    match value {
        Some(s) if !s.is_empty() => s.to_owned(),
        _ => "-".to_owned(),
    }
}
