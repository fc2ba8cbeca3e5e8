//! Service layer module.
//!
//! Contains business logic for identifier generation and validation.

pub mod checksum;
pub mod digits;
pub mod generator;

pub use digits::{DigitSource, ThreadRngDigits};
pub use generator::GeneratorService;
