use super::*;

// =============================================================
// LoginResponse decoding
// =============================================================

#[test]
fn login_response_decodes_token_and_user() {
    let raw = r#"{
        "access_token": "T1",
        "token_type": "bearer",
        "user": {"id": 7, "username": "alice", "full_name": "Alice A", "is_admin": false}
    }"#;
    let resp: LoginResponse = serde_json::from_str(raw).unwrap();
    assert_eq!(resp.access_token, "T1");
    assert_eq!(resp.token_type, "bearer");
    assert_eq!(resp.user.id, 7);
    assert_eq!(resp.user.username, "alice");
    assert_eq!(resp.user.full_name, "Alice A");
    assert!(!resp.user.is_admin);
}

#[test]
fn login_response_tolerates_missing_token_type() {
    let raw = r#"{
        "access_token": "T2",
        "user": {"id": 1, "username": "root", "full_name": "Root", "is_admin": true}
    }"#;
    let resp: LoginResponse = serde_json::from_str(raw).unwrap();
    assert_eq!(resp.token_type, "");
    assert!(resp.user.is_admin);
}

#[test]
fn login_response_missing_user_is_an_error() {
    let raw = r#"{"access_token": "T3"}"#;
    assert!(serde_json::from_str::<LoginResponse>(raw).is_err());
}

// =============================================================
// User persistence round-trip
// =============================================================

#[test]
fn user_serializes_round_trip() {
    let user = User {
        id: 7,
        username: "alice".to_owned(),
        full_name: "Alice A".to_owned(),
        is_admin: false,
    };
    let raw = serde_json::to_string(&user).unwrap();
    let back: User = serde_json::from_str(&raw).unwrap();
    assert_eq!(back, user);
}

// =============================================================
// WorkOrder decoding
// =============================================================

#[test]
fn work_order_decodes_with_nullable_fields_absent() {
    let raw = r#"{
        "id": 12,
        "order_no": "WO-20260110-0003",
        "status": 0,
        "reporter_name": "Bob",
        "contact_phone": "555-0100",
        "location": "Building 2",
        "problem_desc": "Printer offline",
        "problem_type": null,
        "assigned_to": null,
        "assigned_time": null,
        "processing_desc": null,
        "solution_type": null,
        "created_at": "2026-01-10 09:15:00",
        "modified_at": "2026-01-10 09:15:00"
    }"#;
    let order: WorkOrder = serde_json::from_str(raw).unwrap();
    assert_eq!(order.status, 0);
    assert!(order.assigned_to.is_none());
    assert!(order.problem_type.is_none());
}

#[test]
fn work_order_decodes_assignee() {
    let raw = r#"{
        "id": 13,
        "order_no": "WO-20260110-0004",
        "status": 1,
        "reporter_name": "Bob",
        "contact_phone": "555-0100",
        "location": "Building 2",
        "problem_desc": "No network",
        "problem_type": "Network",
        "assigned_to": {"id": 7, "username": "alice", "full_name": "Alice A"},
        "assigned_time": "2026-01-10 10:00:00",
        "processing_desc": null,
        "solution_type": null,
        "created_at": "2026-01-10 09:15:00",
        "modified_at": "2026-01-10 10:00:00"
    }"#;
    let order: WorkOrder = serde_json::from_str(raw).unwrap();
    let assignee = order.assigned_to.unwrap();
    assert_eq!(assignee.username, "alice");
}

// =============================================================
// Statistics decoding
// =============================================================

#[test]
fn statistics_decodes_count_maps() {
    let raw = r#"{
        "total": 10,
        "status": {"0": 4, "1": 2, "2": 1, "3": 3},
        "by_type": {"Network": 6, "Hardware": 4}
    }"#;
    let stats: Statistics = serde_json::from_str(raw).unwrap();
    assert_eq!(stats.total, 10);
    assert_eq!(stats.status.get("0"), Some(&4));
    assert_eq!(stats.by_type.get("Hardware"), Some(&4));
}

#[test]
fn statistics_tolerates_missing_maps() {
    let stats: Statistics = serde_json::from_str(r#"{"total": 0}"#).unwrap();
    assert!(stats.status.is_empty());
    assert!(stats.by_type.is_empty());
}
