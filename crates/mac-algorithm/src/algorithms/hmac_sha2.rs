//! HMAC over the SHA-2 family.

use ::hmac::Hmac;
use mac_llcrypto::d::{Sha256, Sha512};

use super::compute_fixed;
use crate::{KeyMaterial, MacPrimitive, ProviderError};

/// HMAC-SHA-256: up to 32 bytes of output.
#[derive(Clone, Copy, Debug)]
#[allow(clippy::exhaustive_structs)]
pub struct HmacSha256;

/// HMAC-SHA-512: up to 64 bytes of output.
#[derive(Clone, Copy, Debug)]
#[allow(clippy::exhaustive_structs)]
pub struct HmacSha512;

impl MacPrimitive for HmacSha256 {
    fn compute_tag(
        &self,
        key: KeyMaterial<'_>,
        data: &[u8],
        out: &mut [u8],
    ) -> Result<(), ProviderError> {
        compute_fixed::<Hmac<Sha256>>("HMAC-SHA-256", key, data, out)
    }
}

impl MacPrimitive for HmacSha512 {
    fn compute_tag(
        &self,
        key: KeyMaterial<'_>,
        data: &[u8],
        out: &mut [u8],
    ) -> Result<(), ProviderError> {
        compute_fixed::<Hmac<Sha512>>("HMAC-SHA-512", key, data, out)
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
    use hex_literal::hex;

    /// Run `prim` over `key` and `data`, returning `len` bytes.
    fn run(prim: &dyn MacPrimitive, key: &[u8], data: &[u8], len: usize) -> Vec<u8> {
        let mut out = vec![0; len];
        prim.compute_tag(KeyMaterial::new(key), data, &mut out)
            .unwrap();
        out
    }

    #[test]
    fn rfc4231() {
        // Test case 1
        let key = [0x0b; 20];
        assert_eq!(
            run(&HmacSha256, &key, b"Hi There", 32),
            hex!("b0344c61d8db38535ca8afceaf0bf12b881dc200c9833da726e9376c2e32cff7")
        );
        assert_eq!(
            run(&HmacSha512, &key, b"Hi There", 64),
            hex!(
                "87aa7cdea5ef619d4ff0b4241a1d6cb02379f4e2ce4ec2787ad0b30545e17cde"
                "daa833b7d6b8a702038b274eaea3f4e4be9d914eeb61f1702e696c203a126854"
            )
        );

        // Test case 2
        assert_eq!(
            run(&HmacSha256, b"Jefe", b"what do ya want for nothing?", 32),
            hex!("5bdcc146bf60754e6a042426089575c75a003f089d2739839dec58b964ec3843")
        );

        // Test case 5: output truncated to 128 bits.
        assert_eq!(
            run(&HmacSha256, &[0x0c; 20], b"Test With Truncation", 16),
            hex!("a3b6167473100ee06e0c796c2955552b")
        );
    }
}
