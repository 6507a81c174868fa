//! Authentication tags.

use std::fmt;

use mac_llcrypto::util::ct::bytes_eq;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// The output of [`MacAlgorithm::sign`](crate::MacAlgorithm::sign).
///
/// Comparing two `Tag`s with `==` takes time independent of their
/// contents.  (Their lengths are not treated as secret.)  To check a tag
/// you received, use [`MacAlgorithm::verify`](crate::MacAlgorithm::verify)
/// or [`MacAlgorithm::try_verify`](crate::MacAlgorithm::try_verify), which
/// take the candidate as a byte slice.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Tag(Box<[u8]>);

impl Tag {
    /// Copy `bytes` into a new tag.
    pub(crate) fn from_slice(bytes: &[u8]) -> Self {
        Tag(bytes.into())
    }

    /// Return the length of this tag, in bytes.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Return true if this tag is empty.  (Tags from this crate never are.)
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Return a copy of the bytes of this tag.
    pub fn to_vec(&self) -> Vec<u8> {
        self.0.to_vec()
    }
}

impl AsRef<[u8]> for Tag {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl PartialEq for Tag {
    fn eq(&self, other: &Self) -> bool {
        bytes_eq(&self.0, &other.0)
    }
}
impl Eq for Tag {}

impl fmt::Debug for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tag")
            .field("len", &self.0.len())
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

    #[test]
    fn equality() {
        let a = Tag::from_slice(b"0123456789abcdef");
        let b = Tag::from_slice(b"0123456789abcdef");
        let c = Tag::from_slice(b"0123456789abcdeF");
        let d = Tag::from_slice(b"0123456789abcde");
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_ne!(a, d);
        assert_eq!(a.clone(), a);
        assert_eq!(a.len(), 16);
        assert_eq!(d.to_vec(), b"0123456789abcde".to_vec());
    }

    #[test]
    fn debug() {
        let t = Tag::from_slice(&[0xfe; 8]);
        assert_eq!(format!("{:?}", t), "Tag { len: 8, .. }");
    }
}
