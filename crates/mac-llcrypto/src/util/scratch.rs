//! A fixed-capacity stack buffer for secret-derived bytes, wiped on drop.

use std::fmt;

use zeroize::{Zeroize, ZeroizeOnDrop};

/// The largest number of bytes that a [`ScratchBuf`] can hold.
///
/// This bounds the longest tag that any MAC algorithm may produce.
pub const SCRATCH_CAPACITY: usize = 64;

/// A short-lived buffer used to hold a freshly computed MAC (or anything
/// else derived from key material) for the duration of a single call.
///
/// The storage lives inline, so a `ScratchBuf` declared as a local
/// variable stays on the stack.  All `SCRATCH_CAPACITY` bytes are
/// overwritten with zeros when the buffer is dropped, whether the owning
/// function returns normally, returns an error, or unwinds.
///
/// We never pool or reuse these: make a new one for every operation.
///
/// Note that moving a `ScratchBuf` copies its bytes and does not wipe the
/// old location.  Fill it only once it is where it will stay.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct ScratchBuf {
    /// The backing storage.  Only the first `len` bytes are in use.
    bytes: [u8; SCRATCH_CAPACITY],
    /// The number of bytes in use.
    len: usize,
}

impl ScratchBuf {
    /// Make a new zero-filled buffer holding `len` bytes.
    ///
    /// Return `None` if `len` is greater than [`SCRATCH_CAPACITY`].
    pub fn new(len: usize) -> Option<Self> {
        if len > SCRATCH_CAPACITY {
            return None;
        }
        Some(ScratchBuf {
            bytes: [0_u8; SCRATCH_CAPACITY],
            len,
        })
    }

    /// Return the number of bytes in use.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Return true if this buffer holds no bytes.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Return a mutable view of the bytes in use.
    pub fn as_mut_slice(&mut self) -> &mut [u8] {
        &mut self.bytes[..self.len]
    }

    /// Return a view of the bytes in use.
    pub fn as_slice(&self) -> &[u8] {
        &self.bytes[..self.len]
    }

    /// Return the first `n` bytes of this buffer, or `None` if `n` is
    /// greater than [`len`](ScratchBuf::len).
    pub fn prefix(&self, n: usize) -> Option<&[u8]> {
        self.as_slice().get(..n)
    }
}

impl fmt::Debug for ScratchBuf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScratchBuf")
            .field("len", &self.len)
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
    fn bounds() {
        assert!(ScratchBuf::new(SCRATCH_CAPACITY).is_some());
        assert!(ScratchBuf::new(SCRATCH_CAPACITY + 1).is_none());
        assert!(ScratchBuf::new(0).unwrap().is_empty());
    }

    #[test]
    fn prefix() {
        let mut buf = ScratchBuf::new(8).unwrap();
        buf.as_mut_slice().copy_from_slice(b"abcdefgh");
        assert_eq!(buf.len(), 8);
        assert_eq!(buf.prefix(3), Some(&b"abc"[..]));
        assert_eq!(buf.prefix(8), Some(&b"abcdefgh"[..]));
        assert_eq!(buf.prefix(9), None);
    }

    #[test]
    fn explicit_wipe() {
        // Sadly, there is no way in safe rust to test that the drop-time
        // zeroization happened.  We can check that `zeroize` clears
        // everything, which is what the drop glue calls.
        let mut buf = ScratchBuf::new(16).unwrap();
        buf.as_mut_slice().fill(0xAA);
        buf.zeroize();
        assert!(buf.bytes.iter().all(|b| *b == 0));
        assert_eq!(buf.len(), 0);
    }

    #[test]
    fn debug_hides_contents() {
        let mut buf = ScratchBuf::new(4).unwrap();
        buf.as_mut_slice().copy_from_slice(&[0xde, 0xad, 0xbe, 0xef]);
        let s = format!("{:?}", buf);
        assert!(s.contains("len: 4"));
        assert!(!s.contains("222"));
        assert!(!s.contains("de"));
    }
}
