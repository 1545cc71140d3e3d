use super::*;

#[test]
fn known_codes_have_labels() {
    assert_eq!(status_label(0), "Pending");
    assert_eq!(status_label(1), "Assigned");
    assert_eq!(status_label(2), "Processing");
    assert_eq!(status_label(3), "Completed");
}

#[test]
fn unknown_code_does_not_panic() {
    assert_eq!(status_label(99), "Unknown");
    assert_eq!(status_label(-1), "Unknown");
}
