//! Configuration for choosing a MAC algorithm and tag length.
//!
//! A [`MacPolicyConfig`] is usually loaded from TOML, like this:
//!
//! ```toml
//! algorithm = "kmac256"
//! tag_len = 48
//! ```
//!
//! and then turned into a [`MacPolicy`], which signs and verifies tags of
//! exactly the configured length.

use derive_builder::Builder;
use mac_config::{ConfigBuildError, ConfigResolveError, impl_standard_builder};
use mac_llcrypto::rng::EntropicRng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::algorithms::MacAlgorithmName;
use crate::err::LengthOf;
use crate::{Error, Key, MacAlgorithm, Result, Tag};

/// The algorithm used when none is configured.
const DEFAULT_ALGORITHM: MacAlgorithmName = MacAlgorithmName::HmacSha256;

/// Configuration for a [`MacPolicy`].
#[derive(Debug, Clone, Builder, Eq, PartialEq)]
#[builder(build_fn(error = "ConfigBuildError", validate = "Self::validate"))]
#[builder(derive(Debug, Serialize, Deserialize))]
pub struct MacPolicyConfig {
    /// Which algorithm to use.
    #[builder(default = "DEFAULT_ALGORITHM")]
    pub(crate) algorithm: MacAlgorithmName,

    /// How long tags should be, in bytes.
    ///
    /// If unset, the algorithm's default tag size is used.
    #[builder(default)]
    pub(crate) tag_len: Option<usize>,
}
impl_standard_builder! { MacPolicyConfig }

impl MacPolicyConfigBuilder {
    /// Check that the tag length, if any, suits the algorithm.
    fn validate(&self) -> std::result::Result<(), ConfigBuildError> {
        let algorithm = self.algorithm.unwrap_or(DEFAULT_ALGORITHM).algorithm();
        if let Some(Some(len)) = self.tag_len {
            let bounds = algorithm.mac_sizes();
            if !bounds.contains(len) {
                return Err(ConfigBuildError::Inconsistent {
                    fields: vec!["algorithm".to_owned(), "tag_len".to_owned()],
                    problem: format!(
                        "{} tags must be between {} and {} bytes long, not {}",
                        algorithm.name(),
                        bounds.min(),
                        bounds.max(),
                        len
                    ),
                });
            }
        }
        Ok(())
    }
}

impl MacPolicyConfig {
    /// Return the configured algorithm.
    pub fn algorithm(&self) -> &'static MacAlgorithm {
        self.algorithm.algorithm()
    }

    /// Return the configured tag length.
    pub fn tag_len(&self) -> usize {
        self.tag_len
            .unwrap_or_else(|| self.algorithm().default_mac_size())
    }

    /// Return a [`MacPolicy`] that follows this configuration.
    pub fn policy(&self) -> MacPolicy {
        MacPolicy {
            algorithm: self.algorithm(),
            tag_len: self.tag_len(),
        }
    }
}

/// An algorithm, together with a fixed tag length.
///
/// A `MacPolicy` only produces, and only accepts, tags of its own length:
/// a shorter (but otherwise valid) tag is rejected.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct MacPolicy {
    /// The algorithm in use.
    algorithm: &'static MacAlgorithm,
    /// The length of every tag, in bytes.
    tag_len: usize,
}

impl MacPolicy {
    /// Load a policy from a TOML document.
    ///
    /// Unrecognized keys are logged, and otherwise ignored.
    pub fn from_toml(input: &str) -> std::result::Result<Self, ConfigResolveError> {
        let config: MacPolicyConfig = mac_config::resolve_toml::<MacPolicyConfigBuilder>(input)?;
        let policy = config.policy();
        debug!(
            "Using MAC policy: {} with {}-byte tags",
            policy.algorithm.name(),
            policy.tag_len
        );
        Ok(policy)
    }

    /// Return the algorithm this policy uses.
    pub fn algorithm(&self) -> &'static MacAlgorithm {
        self.algorithm
    }

    /// Return the length of the tags this policy produces and accepts.
    pub fn tag_len(&self) -> usize {
        self.tag_len
    }

    /// Generate a new key for this policy's algorithm.
    pub fn generate_key<R: EntropicRng>(&self, rng: &mut R) -> Key {
        Key::generate(self.algorithm, rng)
    }

    /// Import a key for this policy's algorithm.
    pub fn import_key(&self, bytes: &[u8]) -> Result<Key> {
        Key::import(self.algorithm, bytes)
    }

    /// Compute a tag of the configured length.
    pub fn sign(&self, key: &Key, data: &[u8]) -> Result<Tag> {
        self.algorithm.sign_with_size(key, data, self.tag_len)
    }

    /// Check whether `tag` authenticates `data` under `key`.
    ///
    /// Return `Ok(false)` for a tag of any length other than the
    /// configured one, once `key` is known to belong to this policy's
    /// algorithm.
    pub fn try_verify(&self, key: &Key, data: &[u8], tag: &[u8]) -> Result<bool> {
        self.algorithm.check_key(key)?;
        if tag.len() != self.tag_len {
            return Ok(false);
        }
        self.algorithm.try_verify(key, data, tag)
    }

    /// Check that `tag` authenticates `data` under `key`.
    ///
    /// Return [`Error::InvalidArgument`] for a tag of any length other
    /// than the configured one.
    pub fn verify(&self, key: &Key, data: &[u8], tag: &[u8]) -> Result<()> {
        self.algorithm.check_key(key)?;
        if tag.len() != self.tag_len {
            return Err(Error::InvalidArgument {
                algorithm: self.algorithm.name(),
                what: LengthOf::Tag,
                len: tag.len(),
                min: self.tag_len,
                max: self.tag_len,
            });
        }
        self.algorithm.verify(key, data, tag)
    }
}

impl From<&MacPolicyConfig> for MacPolicy {
    fn from(config: &MacPolicyConfig) -> Self {
        config.policy()
    }
}
