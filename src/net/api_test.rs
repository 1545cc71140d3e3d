use super::*;

// =============================================================
// Bearer credential registry
// =============================================================
// Each test runs on its own thread, so the thread_local registry
// starts empty per test.

#[test]
fn bearer_header_absent_by_default() {
    assert!(bearer_header().is_none());
}

#[test]
fn set_bearer_token_formats_authorization_value() {
    set_bearer_token("T1");
    assert_eq!(bearer_header().as_deref(), Some("Bearer T1"));
}

#[test]
fn set_bearer_token_twice_is_idempotent() {
    set_bearer_token("T1");
    let first = bearer_header();
    set_bearer_token("T1");
    assert_eq!(bearer_header(), first);
}

#[test]
fn set_bearer_token_replaces_previous_credential() {
    set_bearer_token("T1");
    set_bearer_token("T2");
    assert_eq!(bearer_header().as_deref(), Some("Bearer T2"));
}

#[test]
fn clear_bearer_token_removes_credential() {
    set_bearer_token("T1");
    clear_bearer_token();
    assert!(bearer_header().is_none());
}

#[test]
fn clear_bearer_token_twice_is_idempotent() {
    set_bearer_token("T1");
    clear_bearer_token();
    clear_bearer_token();
    assert!(bearer_header().is_none());
}

// =============================================================
// Endpoint formatting
// =============================================================

#[test]
fn work_orders_endpoint_without_filter() {
    assert_eq!(work_orders_endpoint(None), "/api/v1/work-orders");
}

#[test]
fn work_orders_endpoint_with_status_filter() {
    assert_eq!(work_orders_endpoint(Some(2)), "/api/v1/work-orders?status=2");
}

#[test]
fn work_order_endpoint_formats_expected_path() {
    assert_eq!(work_order_endpoint(42), "/api/v1/work-orders/42");
}

// =============================================================
// LoginError messages
// =============================================================

#[test]
fn rejected_401_reads_as_bad_credentials() {
    assert_eq!(
        LoginError::Rejected(401).to_string(),
        "invalid username or password"
    );
}

#[test]
fn rejected_other_status_mentions_code() {
    assert_eq!(
        LoginError::Rejected(503).to_string(),
        "login rejected with status 503"
    );
}

#[test]
fn network_error_carries_detail() {
    assert_eq!(
        LoginError::Network("timed out".to_owned()).to_string(),
        "network error: timed out"
    );
}
