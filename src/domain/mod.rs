//! Domain models for IBANGen.
//!
//! This module contains the core domain types representing identifier format
//! profiles, generated identifiers, and API contracts.

pub mod dto;
pub mod identifier;
pub mod profile;

pub use dto::{
    ApiResponse, HealthResponse, IdentifierRecord, IdentifierResponse, ProfileInfo,
    ProfileListResponse, ReadyResponse, ValidateRequest, ValidateResponse,
};
pub use identifier::{GeneratedIdentifier, InvalidReason, ValidationVerdict};
pub use profile::{CHECK_DIGITS_LEN, FormatProfile, PROFILE_CODE_LEN, lookup, registry};
