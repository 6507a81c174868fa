//! Support for using `mac-error` with the `tracing` crate.

#[doc(hidden)]
pub use tracing::{event, Level};

/// Log a [`Report`](crate::Report) of a provided error at a given level, or a
/// higher level if appropriate.
///
/// (If [`ErrorKind::is_always_a_warning`](crate::ErrorKind::is_always_a_warning)
/// returns true for the error's kind, we log it at WARN, unless this event is
/// already at level WARN or ERROR.)
///
/// # Examples
///
/// ```
/// # fn demo(err: &mac_error::InternalError) {
/// # let alg = "HMAC-SHA-256";
/// use mac_error::event_report;
/// use tracing::Level;
///
/// event_report!(Level::DEBUG, err, "Could not compute tag");
///
/// event_report!(Level::TRACE, err, "Could not compute {} tag", alg);
/// # }
/// ```
///
/// # Limitations
///
/// This macro does not support the full range of syntaxes supported by
/// [`tracing::event`].
//
// NOTE: tracing::event! insists on getting a const expression for its
// `Level`, so the escalation has to be an `if` around two separate events.
#[macro_export]
macro_rules! event_report {
    ($level:expr, $err:expr, $fmt:literal, $($arg:expr),* $(,)?) => {
        {
            use $crate::{tracing as tr, HasKind as _, };
            let err = $err;
            if err.kind().is_always_a_warning() && tr::Level::WARN < $level {
                $crate::event_report!(@raw tr::Level::WARN, err, $fmt, $($arg),*);
            } else {
                $crate::event_report!(@raw $level, err, $fmt, $($arg),*);
            }
        }
    };

    ($level:expr, $err:expr, $fmt:literal) => {
        $crate::event_report!($level, $err, $fmt, )
    };

    (@raw $level:expr, $err:expr, $fmt:literal $(, $arg:expr)* $(,)?) => {
        {
            use $crate::{tracing as tr, ErrorReport as _};
            tr::event!(
                $level,
                concat!($fmt, ": {}"),
                $($arg ,)*
                ($err).report()
            )
        }
    }
}

/// Log a report for `err` at level `TRACE` (or higher if it is a bug).
///
/// # Examples:
///
/// ```
/// # fn demo(err: &mac_error::InternalError) {
/// use mac_error::trace_report;
/// trace_report!(err, "Tag rejected");
/// trace_report!(err, "Tag of {} bytes rejected", 16);
/// # }
/// ```
#[macro_export]
macro_rules! trace_report {
    ( $err:expr, $($rest:expr),+ $(,)? ) => {
        $crate::event_report!($crate::tracing::Level::TRACE, $err, $($rest),+)
    }
}

/// Log a report for `err` at level `DEBUG` (or higher if it is a bug).
///
/// # Examples
///
/// ```
/// # fn demo(err: &mac_error::InternalError) {
/// # let alg = "KMAC128";
/// use mac_error::debug_report;
/// debug_report!(err, "Provider failure");
/// debug_report!(err, "Provider failure while computing {}", alg);
/// # }
/// ```
#[macro_export]
macro_rules! debug_report {
    ( $err:expr, $($rest:expr),+ $(,)? ) => {
        $crate::event_report!($crate::tracing::Level::DEBUG, $err, $($rest),+)
    }
}

/// Log a report for `err` at level `WARN`.
///
/// # Examples
///
/// ```
/// # fn demo(err: &mac_error::InternalError) {
/// # let alg = "AES-CMAC";
/// use mac_error::warn_report;
/// warn_report!(err, "Key used with the wrong algorithm");
/// warn_report!(err, "Key used with {}", alg);
/// # }
/// ```
#[macro_export]
macro_rules! warn_report {
    ( $err:expr, $($rest:expr),+ $(,)? ) => {
        // @raw, since we don't escalate warnings any higher,
        // no matter what their kind might be.
        $crate::event_report!(@raw $crate::tracing::Level::WARN, $err, $($rest),+)
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

    use crate::{ErrorKind, HasKind};
    use thiserror::Error;
    use tracing_test::traced_test;

    #[derive(Error, Debug)]
    #[error("tag mismatch")]
    struct Mismatch;

    impl HasKind for Mismatch {
        fn kind(&self) -> ErrorKind {
            ErrorKind::VerificationFailed
        }
    }

    #[test]
    #[traced_test]
    fn trace_level_kept() {
        trace_report!(Mismatch, "rejected {}-byte tag", 16);
        assert!(logs_contain("TRACE"));
        assert!(logs_contain("rejected 16-byte tag: error: tag mismatch"));
    }

    #[test]
    #[traced_test]
    fn bugs_escalate() {
        let bug = crate::internal!("scratch too short");
        debug_report!(bug, "while signing");
        assert!(logs_contain("WARN"));
        assert!(logs_contain("while signing"));
    }
}
