#![cfg_attr(docsrs, feature(doc_auto_cfg, doc_cfg))]
#![doc = include_str!("../README.md")]
// @@ begin lint list maintained by maint/add_warning @@
#![cfg_attr(not(ci_arti_stable), allow(renamed_and_removed_lints))]
#![cfg_attr(not(ci_arti_nightly), allow(unknown_lints))]
#![deny(missing_docs)]
#![warn(noop_method_call)]
#![deny(unreachable_pub)]
#![warn(clippy::all)]
#![deny(clippy::await_holding_lock)]
#![deny(clippy::cast_lossless)]
#![deny(clippy::checked_conversions)]
#![warn(clippy::cognitive_complexity)]
#![deny(clippy::debug_assert_with_mut_call)]
#![deny(clippy::exhaustive_enums)]
#![deny(clippy::exhaustive_structs)]
#![deny(clippy::expl_impl_clone_on_copy)]
#![deny(clippy::fallible_impl_from)]
#![deny(clippy::implicit_clone)]
#![deny(clippy::large_stack_arrays)]
#![warn(clippy::manual_ok_or)]
#![deny(clippy::missing_docs_in_private_items)]
#![deny(clippy::missing_panics_doc)]
#![warn(clippy::needless_borrow)]
#![warn(clippy::needless_pass_by_value)]
#![warn(clippy::option_option)]
#![warn(clippy::rc_buffer)]
#![deny(clippy::ref_option_ref)]
#![warn(clippy::semicolon_if_nothing_returned)]
#![warn(clippy::trait_duplication_in_bounds)]
#![deny(clippy::unnecessary_wraps)]
#![warn(clippy::unseparated_literal_suffix)]
#![deny(clippy::unwrap_used)]
#![allow(clippy::let_unit_value)] // This can reasonably be done for explicitness
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::significant_drop_in_scrutinee)]
#![allow(clippy::result_large_err)]
//! <!-- @@ end lint list maintained by maint/add_warning @@ -->

use derive_more::Display;

mod internal;
pub use internal::*;

mod report;
pub use report::*;

#[cfg(feature = "tracing")]
pub mod tracing;

/// Classification of an error arising from a keyed MAC operation
///
/// This `ErrorKind` should suffice for programmatic handling by most callers:
/// get the kind via [`HasKind::kind`] and compare it to the expected value(s) with equality
/// or by matching.
///
/// When forwarding or reporting errors, use the whole error, not just the kind:
/// the error itself will contain more detail and context which is useful to humans.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[non_exhaustive]
pub enum ErrorKind {
    /// Called a function with an invalid argument.
    ///
    /// For MAC operations this usually means a requested tag length, a
    /// candidate tag, an output buffer, or imported key material whose
    /// length falls outside the bounds of the algorithm in use.
    ///
    /// This kind of error is usually a programming mistake on the caller's part.
    #[display("invalid argument")]
    BadArgument,

    /// An API was used in a way that its contract forbids.
    ///
    /// The canonical example is handing a key that was created for one MAC
    /// algorithm to a different algorithm, even one with the same size
    /// bounds.  This always indicates a bug in the calling code.
    #[display("bad API usage (bug)")]
    BadApiUsage,

    /// An authentication tag did not authenticate the data it was offered with.
    ///
    /// This is an expected outcome whenever data or tags have been tampered
    /// with or corrupted.  It is not a bug, and it is never worth retrying:
    /// recomputing a MAC over the same inputs gives the same answer.
    #[display("authentication tag did not verify")]
    VerificationFailed,

    /// The underlying cryptographic implementation reported a failure.
    ///
    /// The operation was abandoned; no partial output was produced.
    #[display("cryptographic provider failed")]
    CryptoProviderFailed,

    /// One or more configuration values were invalid or incompatible.
    ///
    /// This kind of error can happen if a policy names an algorithm we
    /// do not know, or asks for a tag length that the chosen algorithm
    /// cannot produce.
    #[display("invalid configuration")]
    InvalidConfig,

    /// Internal error (bug).
    ///
    /// A supposedly impossible problem has arisen.
    #[display("internal error (bug)")]
    Internal,
}

/// Errors that can be categorized as belonging to an [`ErrorKind`]
pub trait HasKind {
    /// Return the kind of this error.
    fn kind(&self) -> ErrorKind;
}

impl ErrorKind {
    /// Return true if this [`ErrorKind`] should always be logged as
    /// a warning (or more severe).
    pub fn is_always_a_warning(&self) -> bool {
        matches!(self, ErrorKind::Internal | ErrorKind::BadApiUsage)
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
    fn display() {
        assert_eq!(ErrorKind::BadArgument.to_string(), "invalid argument");
        assert_eq!(
            ErrorKind::VerificationFailed.to_string(),
            "authentication tag did not verify"
        );
        assert_eq!(ErrorKind::Internal.to_string(), "internal error (bug)");
    }

    #[test]
    fn warnings() {
        assert!(ErrorKind::Internal.is_always_a_warning());
        assert!(ErrorKind::BadApiUsage.is_always_a_warning());
        assert!(!ErrorKind::VerificationFailed.is_always_a_warning());
        assert!(!ErrorKind::BadArgument.is_always_a_warning());
    }
}
