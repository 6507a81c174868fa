//! Errors for states that should be impossible.
//!
//! A MAC algorithm is checked when its `static` is built, and every length
//! is checked before any tag is computed, so some failures can only happen
//! if this code has a bug.  We report those as an [`InternalError`] rather
//! than panicking in the middle of handling key material.

use std::fmt;
use std::panic::Location;

use crate::{ErrorKind, HasKind};

/// What we know about the bug behind an [`InternalError`].
#[derive(Debug, Clone)]
struct BugReport {
    /// What went wrong, in words.
    message: String,
    /// Where [`internal!`] was invoked.
    location: &'static Location<'static>,
    /// The stack at that point.
    #[cfg(feature = "backtrace")]
    backtrace: backtrace::Backtrace,
}

/// An error caused by a bug in this code, not by the caller.
///
/// Never contains key material or tag bytes: only the message given to
/// [`internal!`], and where it was raised.
#[derive(Debug, Clone)]
pub struct InternalError(Box<BugReport>);

impl InternalError {
    /// Make a new `InternalError`, recording the caller's location.
    ///
    /// Usually it's more convenient to use [`internal!`].
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        InternalError(Box::new(BugReport {
            message: message.into(),
            location: Location::caller(),
            #[cfg(feature = "backtrace")]
            backtrace: backtrace::Backtrace::new(),
        }))
    }

    /// Return the message describing this bug.
    pub fn message(&self) -> &str {
        &self.0.message
    }

    /// Return the source location where this bug was detected.
    pub fn location(&self) -> &'static Location<'static> {
        self.0.location
    }
}

impl std::error::Error for InternalError {}

impl fmt::Display for InternalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "internal error (bug) at {}: {}",
            self.0.location, self.0.message
        )?;
        #[cfg(feature = "backtrace")]
        write!(f, "\n{:?}", self.0.backtrace)?;
        Ok(())
    }
}

impl HasKind for InternalError {
    fn kind(&self) -> ErrorKind {
        ErrorKind::Internal
    }
}

/// Make an [`InternalError`] from a `format!`-style message, recording
/// the call site.
///
/// With the `backtrace` feature, the stack is recorded too.
///
/// # Examples
///
/// ```
/// use mac_error::internal;
///
/// # fn main() -> Result<(), mac_error::InternalError> {
/// # let scratch = [0_u8; 4];
/// let prefix = scratch.get(..2).ok_or_else(|| internal!("scratch shorter than tag"))?;
/// # Ok(())
/// # }
/// ```
#[macro_export]
macro_rules! internal {
    { $( $arg:tt )* } => {
        $crate::InternalError::new(format!($($arg)*))
    }
}
