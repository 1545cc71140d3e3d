//! Routed page components.

pub mod dashboard;
pub mod login;
pub mod profile;
pub mod settings;
pub mod statistics;
pub mod users;
pub mod work_order_detail;
pub mod work_orders;
