//! Digests and XOFs used to build the concrete MAC algorithms.
//!
//! HMAC is instantiated over SHA2, SHAKE256 mixes entropy for key
//! generation, and the keyed BLAKE2b MAC comes straight from the `blake2`
//! crate.  We re-export them all here,
//! in forms implementing the [`digest`] traits.
//!
//! Other code should access these digests via the traits in the
//! [`digest`] crate.

pub use blake2::Blake2bMac;
pub use sha2::{Sha256, Sha512};
pub use sha3::Shake256;

/// Keyed BLAKE2b producing a 32-byte output.
pub type Blake2bMac256 = Blake2bMac<digest::consts::U32>;

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
    use digest::Digest;
    use hex_literal::hex;

    #[test]
    fn sha256_abc() {
        // FIPS 180-2, appendix B.1.
        assert_eq!(
            Sha256::digest(b"abc")[..],
            hex!("ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad")
        );
    }
}
