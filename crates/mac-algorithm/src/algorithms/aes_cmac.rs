//! CMAC over AES-128.

use aes::Aes128;
use cmac::Cmac;

use super::compute_fixed;
use crate::{KeyMaterial, MacPrimitive, ProviderError};

/// AES-CMAC (RFC 4493): a 16-byte key, and up to 16 bytes of output.
#[derive(Clone, Copy, Debug)]
#[allow(clippy::exhaustive_structs)]
pub struct AesCmac;

impl MacPrimitive for AesCmac {
    fn compute_tag(
        &self,
        key: KeyMaterial<'_>,
        data: &[u8],
        out: &mut [u8],
    ) -> Result<(), ProviderError> {
        compute_fixed::<Cmac<Aes128>>("AES-CMAC", key, data, out)
    }
}
