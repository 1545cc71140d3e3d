//! Small shared helpers: persisted storage glue and display formatting.

pub mod status;
pub mod storage;
pub mod time;
