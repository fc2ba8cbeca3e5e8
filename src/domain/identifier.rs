//! Generated identifier value type and validation verdicts.

use crate::domain::profile::{CHECK_DIGITS_LEN, PROFILE_CODE_LEN};

/// A freshly generated identifier.
///
/// Immutable once produced. The rendered form is
/// `profile_code + check_digits + payload`; re-validating that string against
/// the mod-97 scheme always succeeds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedIdentifier {
    /// 2-letter profile code.
    pub profile_code: String,

    /// 2-digit zero-padded check digit pair.
    pub check_digits: String,

    /// Concatenated random payload segments (digits only).
    pub payload: String,
}

impl GeneratedIdentifier {
    /// Render the full identifier string.
    #[must_use]
    pub fn render(&self) -> String {
        let mut out = String::with_capacity(
            PROFILE_CODE_LEN + CHECK_DIGITS_LEN + self.payload.len(),
        );
        out.push_str(&self.profile_code);
        out.push_str(&self.check_digits);
        out.push_str(&self.payload);
        out
    }
}

impl std::fmt::Display for GeneratedIdentifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}{}", self.profile_code, self.check_digits, self.payload)
    }
}

/// Outcome of validating a candidate identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationVerdict {
    /// The candidate is well-formed and the check digits verify.
    Valid {
        /// Profile the candidate matched.
        profile_code: String,
    },
    /// The candidate failed validation.
    Invalid(InvalidReason),
}

impl ValidationVerdict {
    /// Whether the verdict is `Valid`.
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        matches!(self, Self::Valid { .. })
    }
}

/// Why a candidate identifier was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvalidReason {
    /// Too short to even carry a profile code and check digits.
    TooShort,
    /// Contains a character outside `[0-9A-Z]`.
    InvalidCharacter,
    /// The leading 2-letter code is not in the registry.
    UnknownProfile(String),
    /// Length does not match the profile's fixed total length.
    WrongLength {
        /// Length required by the profile.
        expected: usize,
        /// Length of the candidate.
        actual: usize,
    },
    /// The mod-97 remainder is not 1.
    ChecksumMismatch,
}

impl std::fmt::Display for InvalidReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TooShort => write!(f, "identifier is too short"),
            Self::InvalidCharacter => write!(f, "identifier contains invalid characters"),
            Self::UnknownProfile(code) => write!(f, "unknown profile code: {code}"),
            Self::WrongLength { expected, actual } => {
                write!(f, "wrong length: expected {expected}, got {actual}")
            }
            Self::ChecksumMismatch => write!(f, "check digits do not verify"),
        }
    }
}
