//! Secret keys, each bound to a single MAC algorithm.

use std::fmt;

use mac_llcrypto::rng::EntropicRng;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::err::LengthOf;
use crate::{Error, KeyMaterial, MacAlgorithm, Result};

/// A secret key for one particular [`MacAlgorithm`].
///
/// A `Key` can only be used with the algorithm instance it was made for.
/// It can't be cloned, its `Debug` output never includes the key bytes,
/// and those bytes are overwritten with zeros when it is dropped.
///
/// There is no way to get the key bytes back out of a `Key`: they are
/// only ever handed to the algorithm's [`MacPrimitive`](crate::MacPrimitive).
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct Key {
    /// The algorithm this key was made for.
    #[zeroize(skip)]
    algorithm: &'static MacAlgorithm,
    /// The secret bytes.
    bytes: Box<[u8]>,
}

impl Key {
    /// Make a key for `algorithm` from existing key material.
    ///
    /// The length of `bytes` must be between the algorithm's
    /// [`min_key_size`](MacAlgorithm::min_key_size) and
    /// [`max_key_size`](MacAlgorithm::max_key_size).
    pub fn import(algorithm: &'static MacAlgorithm, bytes: &[u8]) -> Result<Self> {
        let bounds = algorithm.key_sizes();
        if !bounds.contains(bytes.len()) {
            return Err(Error::InvalidArgument {
                algorithm: algorithm.name(),
                what: LengthOf::Key,
                len: bytes.len(),
                min: bounds.min(),
                max: bounds.max(),
            });
        }
        Ok(Key {
            algorithm,
            bytes: bytes.into(),
        })
    }

    /// Generate a new random key of
    /// [`default_key_size`](MacAlgorithm::default_key_size) bytes for `algorithm`.
    pub fn generate<R: EntropicRng>(algorithm: &'static MacAlgorithm, rng: &mut R) -> Self {
        let mut bytes = vec![0_u8; algorithm.default_key_size()].into_boxed_slice();
        rng.fill_bytes(&mut bytes);
        Key { algorithm, bytes }
    }

    /// Return the algorithm that this key belongs to.
    pub fn algorithm(&self) -> &'static MacAlgorithm {
        self.algorithm
    }

    /// Return the length of this key, in bytes.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Return true if this key is empty.  (It never is.)
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Lend the key bytes out for a single primitive call.
    pub(crate) fn material(&self) -> KeyMaterial<'_> {
        KeyMaterial::new(&self.bytes)
    }
}

impl fmt::Debug for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Key")
            .field("algorithm", &self.algorithm.name())
            .field("len", &self.bytes.len())
            .finish_non_exhaustive()
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
    use crate::algorithms::{AES_CMAC, HMAC_SHA256, KMAC256};
    use mac_basic_utils::test_rng::testing_rng;
    use mac_error::{ErrorKind, HasKind as _};
    use mac_llcrypto::rng::FakeEntropicRng;

    #[test]
    fn import_bounds() {
        assert_eq!(Key::import(&HMAC_SHA256, &[7; 16]).unwrap().len(), 16);
        assert_eq!(Key::import(&HMAC_SHA256, &[7; 64]).unwrap().len(), 64);

        for len in [0, 15, 65] {
            let e = Key::import(&HMAC_SHA256, &vec![7; len]).unwrap_err();
            assert_eq!(e.kind(), ErrorKind::BadArgument);
            assert!(matches!(
                e,
                Error::InvalidArgument {
                    what: LengthOf::Key,
                    min: 16,
                    max: 64,
                    ..
                }
            ));
        }

        assert!(Key::import(&AES_CMAC, &[1; 16]).is_ok());
        assert!(Key::import(&AES_CMAC, &[1; 24]).is_err());
    }

    #[test]
    fn generate() {
        let mut rng = FakeEntropicRng(testing_rng());
        let a = Key::generate(&KMAC256, &mut rng);
        let b = Key::generate(&KMAC256, &mut rng);
        assert_eq!(a.len(), KMAC256.default_key_size());
        assert!(std::ptr::eq(a.algorithm(), &KMAC256));
        assert_ne!(a.material().as_bytes(), b.material().as_bytes());
    }

    #[test]
    fn debug_hides_bytes() {
        let key = Key::import(&HMAC_SHA256, b"correct horse battery staple").unwrap();
        let s = format!("{:?}", key);
        assert_eq!(s, r#"Key { algorithm: "HMAC-SHA-256", len: 28, .. }"#);
    }

    #[test]
    fn explicit_wipe() {
        let mut key = Key::import(&HMAC_SHA256, &[0x5a; 32]).unwrap();
        key.zeroize();
        assert!(key.bytes.iter().all(|b| *b == 0));
    }
}
