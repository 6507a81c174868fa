//! One-time authenticators.

use poly1305::universal_hash::KeyInit;
use zeroize::Zeroize;

use crate::{KeyMaterial, MacPrimitive, ProviderError};

/// The name we report in errors.
const NAME: &str = "Poly1305";

/// Poly1305 (RFC 8439, section 2.5): a 32-byte one-time key, and up to 16
/// bytes of output.
///
/// Never use a key with this primitive for more than one message.
#[derive(Clone, Copy, Debug)]
#[allow(clippy::exhaustive_structs)]
pub struct Poly1305;

impl MacPrimitive for Poly1305 {
    fn compute_tag(
        &self,
        key: KeyMaterial<'_>,
        data: &[u8],
        out: &mut [u8],
    ) -> Result<(), ProviderError> {
        let mac = poly1305::Poly1305::new_from_slice(key.as_bytes()).map_err(|_| {
            ProviderError::KeyRejected {
                algorithm: NAME,
                len: key.len(),
            }
        })?;
        let mut full = mac.compute_unpadded(data);
        let result = match full.get(..out.len()) {
            Some(prefix) => {
                out.copy_from_slice(prefix);
                Ok(())
            }
            None => Err(ProviderError::OutputLength {
                algorithm: NAME,
                requested: out.len(),
                available: full.len(),
            }),
        };
        full.as_mut_slice().zeroize();
        result
    }
}
