//! Reproducible PRNGs for randomized tests.
//!
//! Tests of MAC properties (tamper detection, algorithm isolation, and so
//! on) want fresh random keys on every run, but a failure is useless unless
//! it can be replayed.  Use [`testing_rng()`] instead of `rand::rng()`: it
//! picks a random seed by default, prints it, and lets you force a seed
//! through the environment.
//!
//! The `MAC_TEST_PRNG` variable may be set to:
//!   * `random` for a randomly seeded PRNG (the default);
//!   * `deterministic` for a fixed, built-in seed;
//!   * a hexadecimal string, to reuse the seed printed by an earlier run.
//!
//! # WARNING
//!
//! This is for testing only!  Never use it to generate real keys.
//!
//! # Example
//!
//! ```
//! use mac_basic_utils::test_rng::testing_rng;
//! use rand::Rng;
//! let mut rng = testing_rng();
//!
//! let key: [u8; 32] = rng.random();
//! assert_eq!(key.len(), 32);
//! ```

// Printing the seed is how this module talks to the person running the tests.
#![allow(clippy::print_stdout, clippy::print_stderr)]

use rand::{RngCore, SeedableRng};
// Named explicitly rather than via StdRng, so that seeds stay meaningful
// across rand upgrades.
pub use rand_chacha::ChaCha12Rng as TestingRng;

/// The seed type for the RNG we're returning.
type Seed = <TestingRng as SeedableRng>::Seed;

/// Seed used for `MAC_TEST_PRNG=deterministic`.
const DEFAULT_SEED: Seed = *b"mac-algorithm: fixed test seed..";

/// The environment variable that we inspect.
const PRNG_VAR: &str = "MAC_TEST_PRNG";

/// Return a new, possibly deterministic, RNG for use in tests.
///
/// This function is **only** for testing.
///
/// The seed it uses is printed to stdout, so that a failing test can be
/// rerun with `MAC_TEST_PRNG=<seed>`.
///
/// # Panics
///
/// Panics if the environment variable is set to an invalid value.
pub fn testing_rng() -> TestingRng {
    Config::from_env().unwrap_or(Config::Random).into_rng()
}

/// How [`testing_rng`] should choose its seed.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
#[non_exhaustive]
pub enum Config {
    /// Use a PRNG with a randomly chosen seed.
    Random,
    /// Use a PRNG with the built-in seed.
    Deterministic,
    /// Use a specific seed value for the PRNG.
    Seeded(Seed),
}

impl Config {
    /// Return the testing PRNG configuration from the environment, if one is set.
    ///
    /// # Panics
    ///
    /// Panics if the environment variable is set to an invalid value.
    pub fn from_env() -> Option<Self> {
        match Self::from_env_result(std::env::var(PRNG_VAR)) {
            Ok(c) => c,
            Err(e) => {
                panic!(
                    "Bad value for {}: {}\n\
                    We recognize `random`, `deterministic`, or a hexadecimal seed.",
                    PRNG_VAR, e
                );
            }
        }
    }

    /// Interpret the result of `std::env::var()`.
    ///
    /// Return None if the variable was unset or empty.
    fn from_env_result(var: Result<String, std::env::VarError>) -> Result<Option<Self>, Error> {
        match var {
            Ok(s) if s.is_empty() => Ok(None),
            Ok(s) => Ok(Some(Config::from_str(&s)?)),
            Err(std::env::VarError::NotPresent) => Ok(None),
            Err(std::env::VarError::NotUnicode(_)) => Err(Error::InvalidUnicode),
        }
    }

    /// Parse a configuration string, as described in the module docs.
    fn from_str(s: &str) -> Result<Self, Error> {
        Ok(match s {
            "random" => Self::Random,
            "deterministic" => Self::Deterministic,
            _ => Self::Seeded(
                decode_seed_bytes(s).ok_or_else(|| Error::UnrecognizedValue(s.to_string()))?,
            ),
        })
    }

    /// Consume this `Config` and return a `Seed`.
    fn into_seed(self) -> Seed {
        match self {
            Config::Deterministic => DEFAULT_SEED,
            Config::Seeded(seed) => seed,
            Config::Random => {
                let mut seed = Seed::default();
                rand::rng().fill_bytes(&mut seed[..]);
                seed
            }
        }
    }

    /// Consume this `Config` and return a `TestingRng`.
    pub fn into_rng(self) -> TestingRng {
        let seed = self.into_seed();
        println!("  Using RNG seed {}={}", PRNG_VAR, hex::encode(seed));
        TestingRng::from_seed(seed)
    }
}

/// Decode a hexadecimal seed, zero-extending or truncating it to the seed length.
///
/// The empty string is rejected.
fn decode_seed_bytes(s: &str) -> Option<Seed> {
    if s.is_empty() {
        return None;
    }
    let bytes = hex::decode(s).ok()?;
    let mut seed = Seed::default();
    let n = std::cmp::min(seed.len(), bytes.len());
    seed[..n].copy_from_slice(&bytes[..n]);
    Some(seed)
}

/// An error from trying to decode a [`Config`] from a string.
#[derive(Clone, Debug, thiserror::Error, Eq, PartialEq)]
enum Error {
    /// We got a value that wasn't unicode.
    #[error("Value was not UTF-8")]
    InvalidUnicode,
    /// We got a value that we otherwise couldn't decode.
    #[error("Could not interpret {0:?} as a PRNG seed.")]
    UnrecognizedValue(String),
}
