use super::*;

fn sample_response() -> LoginResponse {
    serde_json::from_str(
        r#"{
            "access_token": "T1",
            "token_type": "bearer",
            "user": {"id": 7, "username": "alice", "full_name": "Alice A", "is_admin": false}
        }"#,
    )
    .unwrap()
}

// =============================================================
// Logged-out invariant
// =============================================================

#[test]
fn default_session_is_logged_out() {
    let session = Session::default();
    assert!(!session.is_authenticated());
    assert_eq!(session.token, "");
    assert_eq!(session.user_id, None);
    assert_eq!(session.username, "");
    assert_eq!(session.full_name, "");
    assert!(!session.is_admin);
}

#[test]
fn apply_login_populates_every_field_together() {
    let mut session = Session::default();
    session.apply_login(&sample_response());
    assert!(session.is_authenticated());
    assert_eq!(session.token, "T1");
    assert_eq!(session.user_id, Some(7));
    assert_eq!(session.username, "alice");
    assert_eq!(session.full_name, "Alice A");
    assert!(!session.is_admin);
}

#[test]
fn clear_resets_every_field_together() {
    let mut session = Session::default();
    session.apply_login(&sample_response());
    session.clear();
    assert_eq!(session, Session::default());
}

#[test]
fn clear_twice_equals_clear_once() {
    let mut once = Session::default();
    once.apply_login(&sample_response());
    once.clear();

    let mut twice = Session::default();
    twice.apply_login(&sample_response());
    twice.clear();
    twice.clear();

    assert_eq!(once, twice);
}

// =============================================================
// Restore from persisted keys
// =============================================================

#[test]
fn restore_with_both_keys_rebuilds_full_session() {
    let session = Session::restore(
        Some("T1".to_owned()),
        Some(r#"{"id": 7, "username": "alice", "full_name": "Alice A", "is_admin": true}"#),
    );
    assert_eq!(session.token, "T1");
    assert_eq!(session.user_id, Some(7));
    assert_eq!(session.username, "alice");
    assert!(session.is_admin);
}

#[test]
fn restore_without_user_key_keeps_token_with_default_user_fields() {
    let session = Session::restore(Some("T1".to_owned()), None);
    assert_eq!(session.token, "T1");
    assert_eq!(session.user_id, None);
    assert_eq!(session.username, "");
    assert!(!session.is_admin);
}

#[test]
fn restore_with_malformed_user_record_does_not_fail() {
    let session = Session::restore(Some("T1".to_owned()), Some("{not json"));
    assert_eq!(session.token, "T1");
    assert_eq!(session.user_id, None);
    assert!(!session.is_admin);
}

#[test]
fn restore_without_token_ignores_a_stray_user_record() {
    let session = Session::restore(
        None,
        Some(r#"{"id": 7, "username": "alice", "full_name": "Alice A", "is_admin": true}"#),
    );
    assert_eq!(session, Session::default());
}

#[test]
fn restore_with_empty_token_is_logged_out() {
    let session = Session::restore(Some(String::new()), None);
    assert_eq!(session, Session::default());
}

// =============================================================
// Login round-trip through the persisted projection
// =============================================================

#[test]
fn persisted_projection_round_trips_post_login_state() {
    let resp = sample_response();
    let mut session = Session::default();
    session.apply_login(&resp);

    // What login writes to storage.
    let user_json = serde_json::to_string(&resp.user).unwrap();

    // A fresh store built from those keys sees the same session.
    let restored = Session::restore(Some(resp.access_token.clone()), Some(&user_json));
    assert_eq!(restored, session);
}
