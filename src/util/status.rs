//! Work-order status code labels.

#[cfg(test)]
#[path = "status_test.rs"]
mod status_test;

/// Human-readable label for a work-order lifecycle code.
///
/// Codes follow the backend: 0 pending, 1 assigned, 2 processing,
/// 3 completed. Anything else renders as unknown rather than panicking.
pub fn status_label(status: i32) -> &'static str {
    match status {
        0 => "Pending",
        1 => "Assigned",
        2 => "Processing",
        3 => "Completed",
        _ => "Unknown",
    }
}
