//! Random digit source abstraction.
//!
//! Payload generation draws single decimal digits through this trait so that
//! tests can script the digit stream and lock the checksum algorithm against
//! fixed payloads.

use rand::Rng;
use rand::rngs::ThreadRng;

/// Source of uniformly distributed decimal digits.
pub trait DigitSource {
    /// Produce the next digit in `0..=9`.
    fn next_digit(&mut self) -> u8;
}

/// Production digit source backed by the thread-local RNG.
pub struct ThreadRngDigits {
    rng: ThreadRng,
}

impl ThreadRngDigits {
    /// Create a digit source over the calling thread's RNG.
    #[must_use]
    pub fn new() -> Self {
        Self { rng: rand::rng() }
    }
}

impl Default for ThreadRngDigits {
    fn default() -> Self {
        Self::new()
    }
}

impl DigitSource for ThreadRngDigits {
    fn next_digit(&mut self) -> u8 {
        self.rng.random_range(0..10)
    }
}


#[cfg(test)]
mod tests {
    use super::testing::ScriptedDigits;
    use super::*;

    #[test]
    fn test_thread_rng_digits_in_range() {
        let mut source = ThreadRngDigits::new();
        for _ in 0..1000 {
            assert!(source.next_digit() < 10);
        }
    }

    #[test]
    fn test_scripted_digits_replay_and_cycle() {
        let mut source = ScriptedDigits::new(&[1, 2, 3]);
        assert_eq!(source.next_digit(), 1);
        assert_eq!(source.next_digit(), 2);
        assert_eq!(source.next_digit(), 3);
        assert_eq!(source.next_digit(), 1);
    }

    #[test]
    fn test_scripted_digits_from_digit_str() {
        let mut source = ScriptedDigits::from_digit_str("90");
        assert_eq!(source.next_digit(), 9);
        assert_eq!(source.next_digit(), 0);
    }
}
