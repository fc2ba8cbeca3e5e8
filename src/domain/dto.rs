//! Data Transfer Objects for API requests and responses.

use serde::{Deserialize, Serialize};

use crate::domain::identifier::GeneratedIdentifier;
use crate::domain::profile::FormatProfile;

/// Standard API response wrapper.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    /// Response code (0 = success, non-zero = error).
    pub code: i32,

    /// Human-readable message.
    pub message: String,

    /// Response data (null on error).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    /// Create a success response.
    pub fn success(data: T) -> Self {
        Self {
            code: 0,
            message: "success".to_string(),
            data: Some(data),
        }
    }

    /// Create an error response.
    pub fn error(code: i32, message: impl Into<String>) -> ApiResponse<()> {
        ApiResponse {
            code,
            message: message.into(),
            data: None,
        }
    }
}

/// One generated identifier as returned to the caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IdentifierRecord {
    /// Full rendered identifier.
    pub identifier: String,

    /// Profile code the identifier was generated under.
    pub profile: String,

    /// Check digit pair embedded in the identifier.
    pub check_digits: String,
}

impl From<&GeneratedIdentifier> for IdentifierRecord {
    fn from(id: &GeneratedIdentifier) -> Self {
        Self {
            identifier: id.render(),
            profile: id.profile_code.clone(),
            check_digits: id.check_digits.clone(),
        }
    }
}

/// Response for identifier generation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IdentifierResponse {
    /// List of generated identifiers.
    pub identifiers: Vec<IdentifierRecord>,
}

impl IdentifierResponse {
    /// Build a response from generated identifiers.
    #[must_use]
    pub fn new(ids: &[GeneratedIdentifier]) -> Self {
        Self {
            identifiers: ids.iter().map(IdentifierRecord::from).collect(),
        }
    }
}

/// Request to validate a candidate identifier.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidateRequest {
    /// Candidate identifier string.
    pub identifier: String,
}

/// Response for identifier validation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidateResponse {
    /// Whether the candidate validated.
    pub valid: bool,

    /// Profile code matched (present when valid).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile: Option<String>,

    /// Rejection reason (present when invalid).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

/// Registry entry description.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileInfo {
    /// 2-letter profile code.
    pub code: String,

    /// Total rendered identifier length.
    pub total_length: usize,

    /// Payload segment lengths in order.
    pub segment_lengths: Vec<usize>,
}

impl From<&FormatProfile> for ProfileInfo {
    fn from(profile: &FormatProfile) -> Self {
        Self {
            code: profile.code.to_string(),
            total_length: profile.total_length,
            segment_lengths: profile.segment_lengths.to_vec(),
        }
    }
}

/// Response listing all registered profiles.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileListResponse {
    /// Registered profiles.
    pub profiles: Vec<ProfileInfo>,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Service status.
    pub status: String,

    /// Service version.
    pub version: String,
}

/// Readiness check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReadyResponse {
    /// Overall readiness status.
    pub ready: bool,

    /// Number of registered profiles.
    pub profiles: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_response_success() {
        let response = ApiResponse::success(vec![1, 2, 3]);
        assert_eq!(response.code, 0);
        assert_eq!(response.message, "success");
        assert_eq!(response.data, Some(vec![1, 2, 3]));
    }

    #[test]
    fn test_api_response_error() {
        let response = ApiResponse::<()>::error(1001, "unsupported profile");
        assert_eq!(response.code, 1001);
        assert_eq!(response.message, "unsupported profile");
        assert!(response.data.is_none());
    }

    #[test]
    fn test_identifier_record_from_generated() {
        let id = GeneratedIdentifier {
            profile_code: "BE".to_string(),
            check_digits: "53".to_string(),
            payload: "123456789012".to_string(),
        };
        let record = IdentifierRecord::from(&id);
        assert_eq!(record.identifier, "BE53123456789012");
        assert_eq!(record.profile, "BE");
        assert_eq!(record.check_digits, "53");
    }
}
