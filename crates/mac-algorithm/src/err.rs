//! Define an error type for the mac-algorithm crate.

use mac_error::{ErrorKind, HasKind, InternalError};

use crate::ProviderError;

/// Which length was out of bounds in an [`Error::InvalidArgument`].
#[derive(Clone, Copy, Debug, Eq, PartialEq, derive_more::Display)]
#[non_exhaustive]
pub enum LengthOf {
    /// A requested tag size, output buffer, or candidate tag.
    #[display("tag length")]
    Tag,
    /// Key material offered for import.
    #[display("key length")]
    Key,
}

/// An error that occurred while signing, verifying, or making a key.
#[derive(Clone, Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// A length was outside the bounds that the algorithm allows.
    ///
    /// Nothing was computed, and no output was written.
    #[error("Invalid {what} for {algorithm}: {len} is not in {min}..={max}")]
    InvalidArgument {
        /// The algorithm whose bounds were violated.
        algorithm: &'static str,
        /// What kind of length was wrong.
        what: LengthOf,
        /// The length we were given.
        len: usize,
        /// The smallest length allowed.
        min: usize,
        /// The largest length allowed.
        max: usize,
    },
    /// A key was used with an algorithm other than the one it was made for.
    #[error("Key for {key} used with {receiver}")]
    AlgorithmMismatch {
        /// The name of the algorithm the key belongs to.
        key: &'static str,
        /// The name of the algorithm it was offered to.
        receiver: &'static str,
    },
    /// A tag did not authenticate the data it was offered with.
    #[error("Tag did not verify")]
    VerificationFailure,
    /// The primitive computing the tag failed.
    #[error("Could not compute tag")]
    Provider(#[from] ProviderError),
    /// An internal error occurred.
    #[error("Internal error")]
    Bug(#[from] InternalError),
}

impl HasKind for Error {
    fn kind(&self) -> ErrorKind {
        use Error as E;
        use ErrorKind as EK;
        match self {
            E::InvalidArgument { .. } => EK::BadArgument,
            E::AlgorithmMismatch { .. } => EK::BadApiUsage,
            E::VerificationFailure => EK::VerificationFailed,
            E::Provider(e) => e.kind(),
            E::Bug(e) => e.kind(),
        }
    }
}

/// A Result as returned by this crate.
pub type Result<T> = std::result::Result<T, Error>;
