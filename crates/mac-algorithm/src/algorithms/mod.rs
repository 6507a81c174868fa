//! The MAC algorithms we provide.
//!
//! Each algorithm is a `static` [`MacAlgorithm`], built from one of the
//! [`MacPrimitive`] implementations in this module:
//!
//! | algorithm        | key sizes (min/default/max) | tag sizes (min/default/max) |
//! | ---------------- | --------------------------- | --------------------------- |
//! | [`HMAC_SHA256`]  | 16 / 32 / 64                | 16 / 32 / 32                |
//! | [`HMAC_SHA512`]  | 32 / 64 / 128               | 32 / 64 / 64                |
//! | [`BLAKE2B_256`]  | 16 / 32 / 64                | 16 / 32 / 32                |
//! | [`KMAC128`]      | 16 / 16 / 64                | 16 / 32 / 64                |
//! | [`KMAC256`]      | 32 / 32 / 64                | 32 / 64 / 64                |
//! | [`KMACXOF128`]   | 16 / 16 / 64                | 16 / 32 / 64                |
//! | [`KMACXOF256`]   | 32 / 32 / 64                | 32 / 64 / 64                |
//! | [`AES_CMAC`]     | 16 / 16 / 16                | 8 / 16 / 16                 |
//! | [`POLY1305`]     | 32 / 32 / 32                | 16 / 16 / 16                |
//!
//! The primitives are public too, so that a caller can describe its own
//! algorithm (say, HMAC-SHA-256 with 8-byte tags) as a new `static`.  Such
//! an algorithm is distinct from ours: keys are not shared between them.

use digest::{KeyInit, Mac};
use zeroize::Zeroize;

use crate::{KeyMaterial, MacAlgorithm, MacPrimitive, ProviderError, SizeBounds};

mod aes_cmac;
mod blake2b;
mod hmac_sha2;
mod kmac;
mod onetime;

pub use aes_cmac::AesCmac;
pub use blake2b::Blake2b256;
pub use hmac_sha2::{HmacSha256, HmacSha512};
pub use kmac::{Kmac128, Kmac256};
pub use onetime::Poly1305;

/// HMAC (RFC 2104) over SHA-256.
pub static HMAC_SHA256: MacAlgorithm = MacAlgorithm::new(
    "HMAC-SHA-256",
    SizeBounds::new(16, 32, 64),
    SizeBounds::new(16, 32, 32),
    &HmacSha256,
);

/// HMAC (RFC 2104) over SHA-512.
pub static HMAC_SHA512: MacAlgorithm = MacAlgorithm::new(
    "HMAC-SHA-512",
    SizeBounds::new(32, 64, 128),
    SizeBounds::new(32, 64, 64),
    &HmacSha512,
);

/// Keyed BLAKE2b (RFC 7693) with a 32-byte output.
pub static BLAKE2B_256: MacAlgorithm = MacAlgorithm::new(
    "BLAKE2b-256",
    SizeBounds::new(16, 32, 64),
    SizeBounds::new(16, 32, 32),
    &Blake2b256,
);

/// The primitive behind [`KMAC128`].
static KMAC128_PRIMITIVE: Kmac128 = Kmac128::new(b"");

/// KMAC128 (NIST SP 800-185) with an empty customization string.
pub static KMAC128: MacAlgorithm = MacAlgorithm::new(
    "KMAC128",
    SizeBounds::new(16, 16, 64),
    SizeBounds::new(16, 32, 64),
    &KMAC128_PRIMITIVE,
);

/// The primitive behind [`KMAC256`].
static KMAC256_PRIMITIVE: Kmac256 = Kmac256::new(b"");

/// KMAC256 (NIST SP 800-185) with an empty customization string.
pub static KMAC256: MacAlgorithm = MacAlgorithm::new(
    "KMAC256",
    SizeBounds::new(32, 32, 64),
    SizeBounds::new(32, 64, 64),
    &KMAC256_PRIMITIVE,
);

/// The primitive behind [`KMACXOF128`].
static KMACXOF128_PRIMITIVE: Kmac128 = Kmac128::new_xof(b"");

/// KMACXOF128 (NIST SP 800-185) with an empty customization string.
///
/// Unlike [`KMAC128`], every tag is a prefix of every longer tag for the
/// same key and data.
pub static KMACXOF128: MacAlgorithm = MacAlgorithm::new(
    "KMACXOF128",
    SizeBounds::new(16, 16, 64),
    SizeBounds::new(16, 32, 64),
    &KMACXOF128_PRIMITIVE,
);

/// The primitive behind [`KMACXOF256`].
static KMACXOF256_PRIMITIVE: Kmac256 = Kmac256::new_xof(b"");

/// KMACXOF256 (NIST SP 800-185) with an empty customization string.
pub static KMACXOF256: MacAlgorithm = MacAlgorithm::new(
    "KMACXOF256",
    SizeBounds::new(32, 32, 64),
    SizeBounds::new(32, 64, 64),
    &KMACXOF256_PRIMITIVE,
);

/// CMAC (RFC 4493) over AES-128.
pub static AES_CMAC: MacAlgorithm = MacAlgorithm::new(
    "AES-CMAC",
    SizeBounds::new(16, 16, 16),
    SizeBounds::new(8, 16, 16),
    &AesCmac,
);

/// The Poly1305 one-time authenticator (RFC 8439).
///
/// # Warning
///
/// A Poly1305 key must never be used for more than one message: two tags
/// under the same key are enough to forge more.  Use this only where each
/// key is derived fresh for a single message.
pub static POLY1305: MacAlgorithm = MacAlgorithm::new(
    "Poly1305",
    SizeBounds::new(32, 32, 32),
    SizeBounds::new(16, 16, 16),
    &Poly1305,
);

/// Every algorithm defined in this module.
pub static ALL_ALGORITHMS: [&MacAlgorithm; 9] = [
    &HMAC_SHA256,
    &HMAC_SHA512,
    &BLAKE2B_256,
    &KMAC128,
    &KMAC256,
    &KMACXOF128,
    &KMACXOF256,
    &AES_CMAC,
    &POLY1305,
];

/// The configuration name of one of the algorithms in this module.
#[derive(
    Clone,
    Copy,
    Debug,
    Eq,
    PartialEq,
    Hash,
    serde::Serialize,
    serde::Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[non_exhaustive]
pub enum MacAlgorithmName {
    /// [`HMAC_SHA256`]
    #[serde(rename = "hmac-sha256")]
    #[strum(serialize = "hmac-sha256")]
    HmacSha256,
    /// [`HMAC_SHA512`]
    #[serde(rename = "hmac-sha512")]
    #[strum(serialize = "hmac-sha512")]
    HmacSha512,
    /// [`BLAKE2B_256`]
    #[serde(rename = "blake2b-256")]
    #[strum(serialize = "blake2b-256")]
    Blake2b256,
    /// [`KMAC128`]
    #[serde(rename = "kmac128")]
    #[strum(serialize = "kmac128")]
    Kmac128,
    /// [`KMAC256`]
    #[serde(rename = "kmac256")]
    #[strum(serialize = "kmac256")]
    Kmac256,
    /// [`KMACXOF128`]
    #[serde(rename = "kmacxof128")]
    #[strum(serialize = "kmacxof128")]
    KmacXof128,
    /// [`KMACXOF256`]
    #[serde(rename = "kmacxof256")]
    #[strum(serialize = "kmacxof256")]
    KmacXof256,
    /// [`AES_CMAC`]
    #[serde(rename = "aes-cmac")]
    #[strum(serialize = "aes-cmac")]
    AesCmac,
    /// [`POLY1305`]
    #[serde(rename = "poly1305")]
    #[strum(serialize = "poly1305")]
    Poly1305,
}

impl MacAlgorithmName {
    /// Return the algorithm with this name.
    pub fn algorithm(self) -> &'static MacAlgorithm {
        use MacAlgorithmName as N;
        match self {
            N::HmacSha256 => &HMAC_SHA256,
            N::HmacSha512 => &HMAC_SHA512,
            N::Blake2b256 => &BLAKE2B_256,
            N::Kmac128 => &KMAC128,
            N::Kmac256 => &KMAC256,
            N::KmacXof128 => &KMACXOF128,
            N::KmacXof256 => &KMACXOF256,
            N::AesCmac => &AES_CMAC,
            N::Poly1305 => &POLY1305,
        }
    }
}

impl MacAlgorithm {
    /// Look up one of our algorithms by its configuration name, such as
    /// `"hmac-sha256"` or `"kmac128"`.
    pub fn by_name(name: &str) -> Option<&'static MacAlgorithm> {
        name.parse::<MacAlgorithmName>()
            .ok()
            .map(MacAlgorithmName::algorithm)
    }
}

/// Run the fixed-output MAC `M`, and copy a prefix of its output into `out`.
///
/// Fail if `out` is longer than the output of `M`.
fn compute_fixed<M>(
    algorithm: &'static str,
    key: KeyMaterial<'_>,
    data: &[u8],
    out: &mut [u8],
) -> Result<(), ProviderError>
where
    M: Mac + KeyInit,
{
    let mut mac = <M as Mac>::new_from_slice(key.as_bytes()).map_err(|_| {
        ProviderError::KeyRejected {
            algorithm,
            len: key.len(),
        }
    })?;
    mac.update(data);
    let mut full = mac.finalize().into_bytes();
    let result = match full.get(..out.len()) {
        Some(prefix) => {
            out.copy_from_slice(prefix);
            Ok(())
        }
        None => Err(ProviderError::OutputLength {
            algorithm,
            requested: out.len(),
            available: full.len(),
        }),
    };
    full.as_mut_slice().zeroize();
    result
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
    use std::collections::HashSet;
    use strum::IntoEnumIterator;

    #[test]
    fn names() {
        let mut seen = HashSet::new();
        for name in MacAlgorithmName::iter() {
            let alg = name.algorithm();
            assert!(seen.insert(alg.name()));
            assert!(std::ptr::eq(
                MacAlgorithm::by_name(&name.to_string()).unwrap(),
                alg
            ));
            assert!(ALL_ALGORITHMS.iter().any(|a| std::ptr::eq(*a, alg)));
        }
        assert_eq!(seen.len(), ALL_ALGORITHMS.len());

        assert_eq!(MacAlgorithmName::Kmac128.to_string(), "kmac128");
        assert!(std::ptr::eq(
            MacAlgorithm::by_name("aes-cmac").unwrap(),
            &AES_CMAC
        ));
        assert!(MacAlgorithm::by_name("hmac-md5").is_none());
        assert!(MacAlgorithm::by_name("").is_none());
    }

    #[test]
    fn distinct_identities() {
        for (i, a) in ALL_ALGORITHMS.iter().enumerate() {
            for (j, b) in ALL_ALGORITHMS.iter().enumerate() {
                assert_eq!(i == j, a == b);
            }
        }
    }

    #[test]
    fn fixed_output_too_short() {
        let key = [0x0b; 20];
        let mut out = [0; 33];
        let e = HmacSha256
            .compute_tag(KeyMaterial::new(&key), b"Hi There", &mut out)
            .unwrap_err();
        assert!(matches!(
            e,
            ProviderError::OutputLength {
                requested: 33,
                available: 32,
                ..
            }
        ));
    }
}
