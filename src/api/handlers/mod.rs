//! HTTP request handlers.

pub mod health;
pub mod identifier;
pub mod profile;
