//! The MAC contract: bound checks, truncation, and constant-time verification.

use std::cmp::max;
use std::fmt;

use mac_error::{debug_report, internal};
use mac_llcrypto::util::ct::{CtByteArray, bytes_eq};
use mac_llcrypto::util::scratch::{SCRATCH_CAPACITY, ScratchBuf};
use tracing::trace;

use crate::err::LengthOf;
use crate::{Error, Key, MacPrimitive, Result, Tag};

/// An inclusive range of sizes, in bytes, with a preferred value.
///
/// Always satisfies `0 < min <= default <= max`.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct SizeBounds {
    /// The smallest allowed size.
    min: usize,
    /// The size used when none is requested.
    default: usize,
    /// The largest allowed size.
    max: usize,
}

impl SizeBounds {
    /// Construct a new `SizeBounds`.
    ///
    /// # Panics
    ///
    /// Panics unless `0 < min <= default <= max`.  In a `static` or `const`
    /// initializer, that is a compile-time error.
    pub const fn new(min: usize, default: usize, max: usize) -> Self {
        assert!(min > 0, "minimum size must be positive");
        assert!(min <= default, "default size is below the minimum");
        assert!(default <= max, "default size is above the maximum");
        SizeBounds { min, default, max }
    }

    /// Return the smallest allowed size.
    pub const fn min(&self) -> usize {
        self.min
    }

    /// Return the size used when none is requested.
    pub const fn default(&self) -> usize {
        self.default
    }

    /// Return the largest allowed size.
    pub const fn max(&self) -> usize {
        self.max
    }

    /// Return true if `len` is within these bounds.
    pub const fn contains(&self, len: usize) -> bool {
        self.min <= len && len <= self.max
    }
}

/// A single MAC construction, and the shared logic that signs and verifies with it.
///
/// Each algorithm is a `static`; see [`algorithms`](crate::algorithms) for
/// the ones we provide.  Two `MacAlgorithm`s are the same algorithm only if
/// they are the same object: a [`Key`] made for one will be rejected by the
/// other, even if their sizes and primitives are identical.
///
/// # Tag lengths
///
/// Every operation that produces or checks a tag asks the primitive for
/// `max(len, default_mac_size)` bytes, and uses the first `len` of them.
/// So a short tag is always a prefix of the default-length tag for the
/// same key and data, and verification recomputes exactly what signing
/// produced.
///
/// The full computed output lives in a stack buffer that is wiped before
/// the call returns, whether it succeeds or not.
pub struct MacAlgorithm {
    /// A human-readable name, for messages.
    name: &'static str,
    /// Bounds on the length of keys.
    key_sizes: SizeBounds,
    /// Bounds on the length of tags.
    mac_sizes: SizeBounds,
    /// The function that actually computes tags.
    primitive: &'static dyn MacPrimitive,
}

/// The outcome of comparing a candidate tag against the expected one.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Verdict {
    /// The tag authenticates the data.
    Match,
    /// The tag has a length the algorithm never produces.
    BadLength,
    /// The tag does not authenticate the data.
    Mismatch,
}

impl MacAlgorithm {
    /// Describe a new MAC algorithm.
    ///
    /// Use this to initialize a `static`; the address of that static is the
    /// algorithm's identity.
    ///
    /// # Panics
    ///
    /// Panics if `mac_sizes.max()` is greater than [`SCRATCH_CAPACITY`].  In a
    /// `static` initializer, that is a compile-time error.
    pub const fn new(
        name: &'static str,
        key_sizes: SizeBounds,
        mac_sizes: SizeBounds,
        primitive: &'static dyn MacPrimitive,
    ) -> Self {
        assert!(
            mac_sizes.max() <= SCRATCH_CAPACITY,
            "maximum tag size does not fit in a scratch buffer"
        );
        MacAlgorithm {
            name,
            key_sizes,
            mac_sizes,
            primitive,
        }
    }

    /// Return the name of this algorithm.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Return the bounds on key sizes for this algorithm.
    pub fn key_sizes(&self) -> SizeBounds {
        self.key_sizes
    }

    /// Return the bounds on tag sizes for this algorithm.
    pub fn mac_sizes(&self) -> SizeBounds {
        self.mac_sizes
    }

    /// Return the smallest key size, in bytes.
    pub fn min_key_size(&self) -> usize {
        self.key_sizes.min
    }

    /// Return the size of newly generated keys, in bytes.
    pub fn default_key_size(&self) -> usize {
        self.key_sizes.default
    }

    /// Return the largest key size, in bytes.
    pub fn max_key_size(&self) -> usize {
        self.key_sizes.max
    }

    /// Return the shortest tag this algorithm will produce or accept.
    pub fn min_mac_size(&self) -> usize {
        self.mac_sizes.min
    }

    /// Return the length of the tags produced by [`sign`](Self::sign).
    pub fn default_mac_size(&self) -> usize {
        self.mac_sizes.default
    }

    /// Return the longest tag this algorithm will produce or accept.
    pub fn max_mac_size(&self) -> usize {
        self.mac_sizes.max
    }

    /// Compute a tag of [`default_mac_size`](Self::default_mac_size) bytes.
    pub fn sign(&self, key: &Key, data: &[u8]) -> Result<Tag> {
        self.sign_with_size(key, data, self.mac_sizes.default)
    }

    /// Compute a tag of exactly `mac_size` bytes.
    ///
    /// Return [`Error::InvalidArgument`] if `mac_size` is out of bounds for
    /// this algorithm, and [`Error::AlgorithmMismatch`] if `key` was made
    /// for some other algorithm.
    pub fn sign_with_size(&self, key: &Key, data: &[u8], mac_size: usize) -> Result<Tag> {
        self.check_key(key)?;
        self.check_tag_len(mac_size)?;
        self.with_expected_tag(key, data, mac_size, Tag::from_slice)
    }

    /// Compute a tag that fills `out`.
    ///
    /// The length of `out` is the tag size, and is checked exactly as
    /// [`sign_with_size`](Self::sign_with_size) checks `mac_size`.  On
    /// error, `out` is left untouched.
    pub fn sign_into(&self, key: &Key, data: &[u8], out: &mut [u8]) -> Result<()> {
        self.check_key(key)?;
        self.check_tag_len(out.len())?;
        self.with_expected_tag(key, data, out.len(), |tag| out.copy_from_slice(tag))
    }

    /// Compute a tag of `N` bytes, as a [`CtByteArray`].
    pub fn sign_fixed<const N: usize>(&self, key: &Key, data: &[u8]) -> Result<CtByteArray<N>> {
        let mut out = [0_u8; N];
        self.sign_into(key, data, &mut out)?;
        Ok(out.into())
    }

    /// Check whether `tag` authenticates `data` under `key`.
    ///
    /// Return `Ok(false)` if the tag does not match, or if its length is
    /// outside the bounds of this algorithm.  Return an error only if `key`
    /// belongs to some other algorithm, or the primitive fails.
    pub fn try_verify(&self, key: &Key, data: &[u8], tag: &[u8]) -> Result<bool> {
        Ok(self.check_tag(key, data, tag)? == Verdict::Match)
    }

    /// Check that `tag` authenticates `data` under `key`.
    ///
    /// Return [`Error::VerificationFailure`] if it does not,
    /// [`Error::InvalidArgument`] if its length is outside the bounds of
    /// this algorithm, and the same errors as [`try_verify`](Self::try_verify)
    /// otherwise.
    pub fn verify(&self, key: &Key, data: &[u8], tag: &[u8]) -> Result<()> {
        match self.check_tag(key, data, tag)? {
            Verdict::Match => Ok(()),
            Verdict::BadLength => Err(self.bad_tag_len(tag.len())),
            Verdict::Mismatch => Err(Error::VerificationFailure),
        }
    }

    /// Compare `candidate` against the tag we expect for `data`.
    ///
    /// Both verification entry points go through here.
    fn check_tag(&self, key: &Key, data: &[u8], candidate: &[u8]) -> Result<Verdict> {
        self.check_key(key)?;
        if !self.mac_sizes.contains(candidate.len()) {
            trace!(
                "{}: rejecting a {}-byte tag without computing anything",
                self.name,
                candidate.len()
            );
            return Ok(Verdict::BadLength);
        }
        let matched = self.with_expected_tag(key, data, candidate.len(), |expected| {
            bytes_eq(expected, candidate)
        })?;
        if matched {
            Ok(Verdict::Match)
        } else {
            trace!("{}: {}-byte tag did not verify", self.name, candidate.len());
            Ok(Verdict::Mismatch)
        }
    }

    /// Compute the first `len` bytes of the tag of `data` under `key`, and
    /// pass them to `f`.
    ///
    /// The caller must already have checked `key` and `len`.
    fn with_expected_tag<T>(
        &self,
        key: &Key,
        data: &[u8],
        len: usize,
        f: impl FnOnce(&[u8]) -> T,
    ) -> Result<T> {
        let mut scratch = ScratchBuf::new(max(len, self.mac_sizes.default))
            .ok_or_else(|| internal!("{} allows tags longer than a scratch buffer", self.name))?;
        if let Err(e) = self
            .primitive
            .compute_tag(key.material(), data, scratch.as_mut_slice())
        {
            debug_report!(&e, "{}: could not compute tag", self.name);
            return Err(e.into());
        }
        let tag = scratch
            .prefix(len)
            .ok_or_else(|| internal!("{}-byte tag longer than its scratch buffer", len))?;
        Ok(f(tag))
    }

    /// Check that `key` was made for this very algorithm.
    pub(crate) fn check_key(&self, key: &Key) -> Result<()> {
        if std::ptr::eq(key.algorithm(), self) {
            return Ok(());
        }
        let err = Error::AlgorithmMismatch {
            key: key.algorithm().name(),
            receiver: self.name,
        };
        debug_report!(&err, "Refusing to use a key");
        Err(err)
    }

    /// Check that `len` is an acceptable tag length.
    fn check_tag_len(&self, len: usize) -> Result<()> {
        if self.mac_sizes.contains(len) {
            Ok(())
        } else {
            Err(self.bad_tag_len(len))
        }
    }

    /// Return the error for a tag of `len` bytes.
    fn bad_tag_len(&self, len: usize) -> Error {
        Error::InvalidArgument {
            algorithm: self.name,
            what: LengthOf::Tag,
            len,
            min: self.mac_sizes.min,
            max: self.mac_sizes.max,
        }
    }
}

impl PartialEq for MacAlgorithm {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self, other)
    }
}
impl Eq for MacAlgorithm {}

impl fmt::Debug for MacAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MacAlgorithm")
            .field("name", &self.name)
            .field("key_sizes", &self.key_sizes)
            .field("mac_sizes", &self.mac_sizes)
            .finish_non_exhaustive()
    }
}

impl fmt::Display for MacAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}
