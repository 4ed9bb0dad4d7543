//! Request handlers

pub mod dashboard;
pub mod health;
