//! The seam between the MAC contract and the code that computes tags.

use std::fmt;

use mac_error::{ErrorKind, HasKind};

/// A single keyed function that fills a buffer with a MAC.
///
/// Each concrete algorithm supplies one of these.  Everything else (bound
/// checks, truncation, comparison, and wiping) is done by
/// [`MacAlgorithm`](crate::MacAlgorithm), so an implementation only has to
/// answer one question: what are the first `out.len()` bytes of the tag of
/// `data` under `key`?
///
/// Implementations must be deterministic, and must either fill all of `out`
/// or return an error.  The contract never asks for more than
/// [`max_mac_size`](crate::MacAlgorithm::max_mac_size) bytes, nor for fewer
/// than [`default_mac_size`](crate::MacAlgorithm::default_mac_size).
pub trait MacPrimitive: Send + Sync {
    /// Compute a MAC of `data` under `key`, writing it into `out`.
    fn compute_tag(
        &self,
        key: KeyMaterial<'_>,
        data: &[u8],
        out: &mut [u8],
    ) -> Result<(), ProviderError>;
}

/// Borrowed access to the secret bytes of a [`Key`](crate::Key).
///
/// Only this crate can create a `KeyMaterial`, and it only does so for the
/// duration of a single [`MacPrimitive::compute_tag`] call.
#[derive(Clone, Copy)]
pub struct KeyMaterial<'a>(&'a [u8]);

impl<'a> KeyMaterial<'a> {
    /// Wrap the bytes of a key.
    pub(crate) fn new(bytes: &'a [u8]) -> Self {
        KeyMaterial(bytes)
    }

    /// Return the secret key bytes.
    ///
    /// Do not copy these anywhere that outlives the call you were given
    /// them in.
    pub fn as_bytes(&self) -> &'a [u8] {
        self.0
    }

    /// Return the length of the key, in bytes.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Return true if the key is empty.
    ///
    /// (Keys built by this crate never are.)
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Debug for KeyMaterial<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyMaterial")
            .field("len", &self.len())
            .finish_non_exhaustive()
    }
}

/// An error reported by a [`MacPrimitive`].
///
/// These never contain key material or tag bytes.
#[derive(Clone, Debug, thiserror::Error)]
#[non_exhaustive]
pub enum ProviderError {
    /// The primitive was asked for more output than it can produce.
    ///
    /// This means that an algorithm's `max_mac_size` is larger than its
    /// primitive's native output.
    #[error("{algorithm} cannot produce {requested} bytes of output (at most {available})")]
    OutputLength {
        /// The algorithm that failed.
        algorithm: &'static str,
        /// The number of bytes asked for.
        requested: usize,
        /// The number of bytes the primitive can produce.
        available: usize,
    },
    /// The primitive could not be keyed with a key of this length.
    #[error("{algorithm} rejected a {len}-byte key")]
    KeyRejected {
        /// The algorithm that failed.
        algorithm: &'static str,
        /// The length of the key it was given.
        len: usize,
    },
    /// The primitive failed for some other reason.
    #[error("{algorithm} failed: {reason}")]
    Failed {
        /// The algorithm that failed.
        algorithm: &'static str,
        /// A description of what went wrong.
        reason: String,
    },
}

impl HasKind for ProviderError {
    fn kind(&self) -> ErrorKind {
        ErrorKind::CryptoProviderFailed
    }
}

#[cfg(test)]
mod test {
    // @@ begin test lint list maintained by maint/add_warning @@
    #![allow(clippy::bool_assert_comparison)]
    #![allow(clippy::clone_on_copy)]
    #![allow(clippy::dbg_macro)]
    #![allow(clippy::mixed_attributes_style)]
    #![allow(clippy::print_stderr)]
    #![allow(clippy::print_stdout)]
    #![allow(clippy::single_char_pattern)]
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::unchecked_duration_subtraction)]
    #![allow(clippy::useless_vec)]
    #![allow(clippy::needless_pass_by_value)]
    //! <!-- @@ end test lint list maintained by maint/add_warning @@ -->
    use super::*;

    #[test]
    fn material_debug() {
        let m = KeyMaterial::new(b"swordfish-swordfish");
        assert_eq!(m.len(), 19);
        assert!(!m.is_empty());
        let s = format!("{:?}", m);
        assert!(s.contains("len: 19"));
        assert!(!s.contains("swordfish"));
    }

    #[test]
    fn display() {
        let e = ProviderError::OutputLength {
            algorithm: "HMAC-SHA-256",
            requested: 48,
            available: 32,
        };
        assert_eq!(
            e.to_string(),
            "HMAC-SHA-256 cannot produce 48 bytes of output (at most 32)"
        );
        assert_eq!(e.kind(), ErrorKind::CryptoProviderFailed);
    }
}
