//! Error code constants.
//!
//! Error codes are organized by category:
//! - 1xxx: Profile errors
//! - 3xxx: Validation errors
//! - 5xxx: Internal/System errors

/// Error code type with semantic categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ErrorCode(i32);

impl ErrorCode {
    // ===== Profile Errors (1xxx) =====

    /// Requested profile code is not registered.
    pub const UNSUPPORTED_PROFILE: Self = Self(1001);

    // ===== Validation Errors (3xxx) =====

    /// Bad request / invalid parameters.
    pub const BAD_REQUEST: Self = Self(3001);

    // ===== Internal/System Errors (5xxx) =====

    /// Internal server error.
    pub const INTERNAL_ERROR: Self = Self(5002);

    /// Get the error code as an i32.
    #[must_use]
    pub const fn as_i32(self) -> i32 {
        self.0
    }

    /// Get the category of this error code.
    #[must_use]
    pub const fn category(&self) -> ErrorCategory {
        match self.0 {
            1000..=1999 => ErrorCategory::Profile,
            3000..=3999 => ErrorCategory::Validation,
            5000..=5999 => ErrorCategory::Internal,
            _ => ErrorCategory::Unknown,
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<ErrorCode> for i32 {
    fn from(code: ErrorCode) -> Self {
        code.0
    }
}

/// Error category based on error code range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Profile-related errors (1xxx).
    Profile,
    /// Validation errors (3xxx).
    Validation,
    /// Internal/system errors (5xxx).
    Internal,
    /// Unknown category.
    Unknown,
}

impl std::fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Profile => write!(f, "profile"),
            Self::Validation => write!(f, "validation"),
            Self::Internal => write!(f, "internal"),
            Self::Unknown => write!(f, "unknown"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_values() {
        assert_eq!(ErrorCode::UNSUPPORTED_PROFILE.as_i32(), 1001);
        assert_eq!(ErrorCode::BAD_REQUEST.as_i32(), 3001);
        assert_eq!(ErrorCode::INTERNAL_ERROR.as_i32(), 5002);
    }

    #[test]
    fn test_error_categories() {
        assert_eq!(
            ErrorCode::UNSUPPORTED_PROFILE.category(),
            ErrorCategory::Profile
        );
        assert_eq!(ErrorCode::BAD_REQUEST.category(), ErrorCategory::Validation);
        assert_eq!(ErrorCode::INTERNAL_ERROR.category(), ErrorCategory::Internal);
    }
}
