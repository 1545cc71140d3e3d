//! Shared client-side state.
//!
//! The session is the only process-wide state this client carries; pages
//! hold their own fetch results locally.

pub mod session;
