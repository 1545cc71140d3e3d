//! Shared wire DTOs for the backend REST boundary.
//!
//! DESIGN
//! ======
//! These types mirror the backend response schemas field-for-field so serde
//! can decode payloads without any adapter layer. Timestamps arrive as
//! preformatted `"%Y-%m-%d %H:%M:%S"` strings and are kept as strings; the
//! client only displays them.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// An authenticated account as returned inside the login response and
/// persisted to `localStorage` under the `user` key.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub full_name: String,
    pub is_admin: bool,
}

/// Success body of `POST /api/v1/auth/login`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
    /// Always `"bearer"`; kept for schema completeness.
    #[serde(default)]
    pub token_type: String,
    pub user: User,
}

/// Reduced account reference embedded in work orders (`assigned_to`).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserInfo {
    pub id: i64,
    pub username: String,
    pub full_name: String,
}

/// A work order as returned by the list and detail endpoints.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct WorkOrder {
    pub id: i64,
    pub order_no: String,
    /// Lifecycle code 0..=3; see [`crate::util::status`] for labels.
    pub status: i32,
    pub reporter_name: String,
    pub contact_phone: String,
    pub location: String,
    pub problem_desc: String,
    pub problem_type: Option<String>,
    pub assigned_to: Option<UserInfo>,
    pub assigned_time: Option<String>,
    pub processing_desc: Option<String>,
    pub solution_type: Option<String>,
    pub created_at: String,
    pub modified_at: String,
}

/// Aggregate counts from `GET /api/v1/work-orders/statistics`.
///
/// `status` is keyed by the stringified status code (`"0"`..`"3"`);
/// `by_type` by problem-type name, including the server's unclassified
/// bucket. `BTreeMap` keeps render order stable.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Statistics {
    pub total: i64,
    #[serde(default)]
    pub status: BTreeMap<String, i64>,
    #[serde(default)]
    pub by_type: BTreeMap<String, i64>,
}

/// A configured problem type from the settings endpoint.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct ProblemType {
    pub id: i64,
    pub name: String,
}
