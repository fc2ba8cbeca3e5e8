//! Identifier generation service.
//!
//! Composes profile selection, random payload generation, and check digit
//! computation. Generation is synchronous and shares no state between calls;
//! each call owns its digit source, so concurrent requests are fully
//! independent.

use metrics::counter;
use rand::Rng;
use tracing::debug;

use crate::config::GeneratorConfig;
use crate::domain::{
    FormatProfile, GeneratedIdentifier, InvalidReason, ValidationVerdict, lookup, profile,
    registry,
};
use crate::error::{AppError, Result};
use crate::service::checksum;
use crate::service::digits::{DigitSource, ThreadRngDigits};

/// Service for structured identifier generation and validation.
pub struct GeneratorService {
    /// Upper bound on identifiers per request.
    max_batch_size: u32,
}

impl GeneratorService {
    /// Create a new generator service.
    #[must_use]
    pub const fn new(config: &GeneratorConfig) -> Self {
        Self {
            max_batch_size: config.max_batch_size,
        }
    }

    /// Resolve the profile to generate under.
    ///
    /// With an explicit code, the registry is consulted after uppercasing;
    /// an unknown code is the caller's error. Without one, a profile is
    /// chosen uniformly at random.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::UnsupportedProfile`] if an explicit code is not
    /// registered.
    pub fn select_profile(&self, explicit: Option<&str>) -> Result<&'static FormatProfile> {
        match explicit {
            Some(code) => {
                let normalized = code.trim().to_ascii_uppercase();
                lookup(&normalized).ok_or(AppError::UnsupportedProfile(normalized))
            }
            None => {
                let table = registry();
                let index = rand::rng().random_range(0..table.len());
                Ok(&table[index])
            }
        }
    }

    /// Produce the random payload for a profile.
    ///
    /// Each segment is an independent run of uniformly drawn decimal digits
    /// of its exact length; leading zeros are permitted. The result length is
    /// fixed by the profile.
    pub fn generate_payload(profile: &FormatProfile, source: &mut dyn DigitSource) -> String {
        let mut payload = String::with_capacity(profile.payload_length());
        for &segment_length in profile.segment_lengths {
            for _ in 0..segment_length {
                payload.push(char::from(b'0' + source.next_digit()));
            }
        }
        payload
    }

    /// Generate one identifier under a profile with a caller-supplied source.
    pub fn generate_with(
        profile: &FormatProfile,
        source: &mut dyn DigitSource,
    ) -> GeneratedIdentifier {
        let payload = Self::generate_payload(profile, source);
        let check_digits = checksum::compute_check_digits(&payload, profile.code);
        GeneratedIdentifier {
            profile_code: profile.code.to_string(),
            check_digits,
            payload,
        }
    }

    /// Generate one identifier.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::UnsupportedProfile`] if an explicit code is not
    /// registered.
    pub fn generate(&self, explicit: Option<&str>) -> Result<GeneratedIdentifier> {
        let profile = self.select_profile(explicit)?;
        let mut source = ThreadRngDigits::new();
        let id = Self::generate_with(profile, &mut source);

        counter!("ibangen_identifiers_generated_total", "profile" => profile.code).increment(1);
        Ok(id)
    }

    /// Generate a batch of identifiers.
    ///
    /// Without an explicit code, the profile is re-drawn per identifier.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::BadRequest`] if `count` is zero or exceeds the
    /// configured maximum, or [`AppError::UnsupportedProfile`] for an unknown
    /// explicit code.
    pub fn generate_batch(
        &self,
        explicit: Option<&str>,
        count: u32,
    ) -> Result<Vec<GeneratedIdentifier>> {
        if count == 0 {
            return Err(AppError::BadRequest("count must be at least 1".to_string()));
        }
        if count > self.max_batch_size {
            return Err(AppError::BadRequest(format!(
                "count cannot exceed {}",
                self.max_batch_size
            )));
        }

        let mut ids = Vec::with_capacity(count as usize);
        for _ in 0..count {
            ids.push(self.generate(explicit)?);
        }

        debug!(count, profile = ?explicit, "generated identifier batch");
        Ok(ids)
    }

    /// Validate a candidate identifier.
    ///
    /// Whitespace is stripped and the candidate uppercased before checking
    /// structure (character class, known profile, fixed length) and the
    /// mod-97 rule. Validation never fails as an operation; a malformed
    /// candidate yields an `Invalid` verdict, not an error.
    #[must_use]
    pub fn validate(&self, candidate: &str) -> ValidationVerdict {
        let normalized: String = candidate
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect::<String>()
            .to_ascii_uppercase();

        let minimum = profile::PROFILE_CODE_LEN + profile::CHECK_DIGITS_LEN + 1;
        if normalized.len() < minimum {
            return Self::rejected(InvalidReason::TooShort);
        }
        if !normalized.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Self::rejected(InvalidReason::InvalidCharacter);
        }

        let code = &normalized[..profile::PROFILE_CODE_LEN];
        let Some(profile) = lookup(code) else {
            return Self::rejected(InvalidReason::UnknownProfile(code.to_string()));
        };

        if normalized.len() != profile.total_length {
            return Self::rejected(InvalidReason::WrongLength {
                expected: profile.total_length,
                actual: normalized.len(),
            });
        }

        if !checksum::verify(&normalized) {
            return Self::rejected(InvalidReason::ChecksumMismatch);
        }

        counter!("ibangen_validations_total", "outcome" => "valid").increment(1);
        ValidationVerdict::Valid {
            profile_code: profile.code.to_string(),
        }
    }

    fn rejected(reason: InvalidReason) -> ValidationVerdict {
        counter!("ibangen_validations_total", "outcome" => "invalid").increment(1);
        ValidationVerdict::Invalid(reason)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::service::digits::testing::ScriptedDigits;

    fn service() -> GeneratorService {
        GeneratorService::new(&GeneratorConfig {
            max_batch_size: 1000,
        })
    }

    #[test]
    fn test_scripted_payload_locks_reference_identifier() {
        let profile = lookup("BE").unwrap();
        let mut source = ScriptedDigits::from_digit_str("123456789012");

        let id = GeneratorService::generate_with(profile, &mut source);
        assert_eq!(id.payload, "123456789012");
        assert_eq!(id.check_digits, "53");
        assert_eq!(id.render(), "BE53123456789012");
    }

    #[test]
    fn test_round_trip_all_profiles() {
        let service = service();
        for profile in registry() {
            for _ in 0..10_000 {
                let id = service.generate(Some(profile.code)).unwrap();

                // Re-computation reproduces the embedded check digits.
                assert_eq!(
                    checksum::compute_check_digits(&id.payload, &id.profile_code),
                    id.check_digits
                );
                // Full identifier satisfies the mod-97 rule.
                assert!(service.validate(&id.render()).is_valid());
            }
        }
    }

    #[test]
    fn test_generated_length_matches_profile() {
        let service = service();
        for profile in registry() {
            let id = service.generate(Some(profile.code)).unwrap();
            assert_eq!(id.render().len(), profile.total_length);
            assert_eq!(id.payload.len(), profile.payload_length());
        }
    }

    #[test]
    fn test_check_digits_always_in_range() {
        let service = service();
        for profile in registry() {
            for _ in 0..1000 {
                let id = service.generate(Some(profile.code)).unwrap();
                assert_eq!(id.check_digits.len(), 2);
                let value: u32 = id.check_digits.parse().unwrap();
                assert!((2..=98).contains(&value), "out of range: {value}");
            }
        }
    }

    #[test]
    fn test_unsupported_profile() {
        let service = service();
        let err = service.generate(Some("XX")).unwrap_err();
        assert!(matches!(err, AppError::UnsupportedProfile(code) if code == "XX"));
    }

    #[test]
    fn test_explicit_code_is_case_insensitive() {
        let service = service();
        let id = service.generate(Some("be")).unwrap();
        assert_eq!(id.profile_code, "BE");
    }

    #[test]
    fn test_random_profile_selection_is_registered() {
        let service = service();
        for _ in 0..100 {
            let id = service.generate(None).unwrap();
            assert!(lookup(&id.profile_code).is_some());
        }
    }

    #[test]
    fn test_batch_bounds() {
        let service = service();

        let ids = service.generate_batch(Some("DE"), 5).unwrap();
        assert_eq!(ids.len(), 5);

        assert!(matches!(
            service.generate_batch(Some("DE"), 0),
            Err(AppError::BadRequest(_))
        ));
        assert!(matches!(
            service.generate_batch(Some("DE"), 1001),
            Err(AppError::BadRequest(_))
        ));
    }

    #[test]
    fn test_validate_accepts_spaced_lowercase_input() {
        let service = service();
        let verdict = service.validate("be53 1234 5678 9012");
        assert_eq!(
            verdict,
            ValidationVerdict::Valid {
                profile_code: "BE".to_string()
            }
        );
    }

    #[test]
    fn test_validate_rejection_reasons() {
        let service = service();

        assert_eq!(
            service.validate("BE5"),
            ValidationVerdict::Invalid(InvalidReason::TooShort)
        );
        assert_eq!(
            service.validate("BE53-123456789012"),
            ValidationVerdict::Invalid(InvalidReason::InvalidCharacter)
        );
        assert_eq!(
            service.validate("XX53123456789012"),
            ValidationVerdict::Invalid(InvalidReason::UnknownProfile("XX".to_string()))
        );
        assert_eq!(
            service.validate("BE5312345678901"),
            ValidationVerdict::Invalid(InvalidReason::WrongLength {
                expected: 16,
                actual: 15
            })
        );
        assert_eq!(
            service.validate("BE54123456789012"),
            ValidationVerdict::Invalid(InvalidReason::ChecksumMismatch)
        );
    }
}
