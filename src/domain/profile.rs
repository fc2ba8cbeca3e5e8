//! Identifier format profiles.
//!
//! A profile describes the fixed layout of one class of structured identifier:
//! the 2-letter profile code, the total rendered length, and the ordered
//! lengths of the numeric payload segments (routing code, account number,
//! national check, and so on). The registry is a compile-time table; it is not
//! externally configurable.

/// Length of the profile code prefix.
pub const PROFILE_CODE_LEN: usize = 2;

/// Length of the mod-97 check digit field.
pub const CHECK_DIGITS_LEN: usize = 2;

/// Layout description for one identifier format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatProfile {
    /// 2-letter profile code (uppercase).
    pub code: &'static str,

    /// Total character length of a rendered identifier.
    pub total_length: usize,

    /// Ordered lengths of the payload segments.
    pub segment_lengths: &'static [usize],
}

impl FormatProfile {
    /// Combined length of all payload segments.
    #[must_use]
    pub fn payload_length(&self) -> usize {
        self.segment_lengths.iter().sum()
    }
}

/// Registered profiles, all with fully numeric payloads.
///
/// Layout invariant for every entry:
/// `sum(segment_lengths) == total_length - PROFILE_CODE_LEN - CHECK_DIGITS_LEN`.
static PROFILES: &[FormatProfile] = &[
    FormatProfile {
        code: "AT",
        total_length: 20,
        segment_lengths: &[5, 11],
    },
    FormatProfile {
        code: "BE",
        total_length: 16,
        segment_lengths: &[3, 7, 2],
    },
    FormatProfile {
        code: "CH",
        total_length: 21,
        segment_lengths: &[5, 12],
    },
    FormatProfile {
        code: "DE",
        total_length: 22,
        segment_lengths: &[8, 10],
    },
    FormatProfile {
        code: "EE",
        total_length: 20,
        segment_lengths: &[2, 2, 11, 1],
    },
    FormatProfile {
        code: "ES",
        total_length: 24,
        segment_lengths: &[4, 4, 2, 10],
    },
    FormatProfile {
        code: "FI",
        total_length: 18,
        segment_lengths: &[6, 7, 1],
    },
    FormatProfile {
        code: "FR",
        total_length: 27,
        segment_lengths: &[5, 5, 11, 2],
    },
    FormatProfile {
        code: "LT",
        total_length: 20,
        segment_lengths: &[5, 11],
    },
    FormatProfile {
        code: "NO",
        total_length: 15,
        segment_lengths: &[4, 6, 1],
    },
    FormatProfile {
        code: "PL",
        total_length: 28,
        segment_lengths: &[8, 16],
    },
    FormatProfile {
        code: "PT",
        total_length: 25,
        segment_lengths: &[4, 4, 11, 2],
    },
    FormatProfile {
        code: "RS",
        total_length: 22,
        segment_lengths: &[3, 13, 2],
    },
    FormatProfile {
        code: "SE",
        total_length: 24,
        segment_lengths: &[3, 16, 1],
    },
];

/// All registered profiles.
#[must_use]
pub fn registry() -> &'static [FormatProfile] {
    PROFILES
}

/// Look up a profile by its exact (uppercase) code.
#[must_use]
pub fn lookup(code: &str) -> Option<&'static FormatProfile> {
    PROFILES.iter().find(|p| p.code == code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_invariant_holds_for_all_profiles() {
        for profile in registry() {
            assert_eq!(
                profile.payload_length(),
                profile.total_length - PROFILE_CODE_LEN - CHECK_DIGITS_LEN,
                "layout invariant violated for {}",
                profile.code
            );
        }
    }

    #[test]
    fn test_codes_are_unique_and_uppercase() {
        for (i, profile) in registry().iter().enumerate() {
            assert_eq!(profile.code.len(), PROFILE_CODE_LEN);
            assert!(profile.code.chars().all(|c| c.is_ascii_uppercase()));
            assert!(
                registry()[i + 1..].iter().all(|p| p.code != profile.code),
                "duplicate profile code {}",
                profile.code
            );
        }
    }

    #[test]
    fn test_lookup() {
        let be = lookup("BE").unwrap();
        assert_eq!(be.total_length, 16);
        assert_eq!(be.segment_lengths, &[3, 7, 2]);

        assert!(lookup("XX").is_none());
        assert!(lookup("be").is_none()); // lookup is exact-match
    }
}
