//! Keyed BLAKE2b.

use mac_llcrypto::d::Blake2bMac256;

use super::compute_fixed;
use crate::{KeyMaterial, MacPrimitive, ProviderError};

/// BLAKE2b in keyed mode (RFC 7693, section 2.9), with a 32-byte digest.
///
/// Keys may be up to 64 bytes long.
#[derive(Clone, Copy, Debug)]
#[allow(clippy::exhaustive_structs)]
pub struct Blake2b256;

impl MacPrimitive for Blake2b256 {
    fn compute_tag(
        &self,
        key: KeyMaterial<'_>,
        data: &[u8],
        out: &mut [u8],
    ) -> Result<(), ProviderError> {
        compute_fixed::<Blake2bMac256>("BLAKE2b-256", key, data, out)
    }
}
