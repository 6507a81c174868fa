//! The Report type which reports errors nicely

use std::error::Error as StdError;
use std::fmt::{self, Debug, Display};

/// Wraps any Error, providing a nicely-reporting Display impl
#[derive(Debug, Copy, Clone)]
#[allow(clippy::exhaustive_structs)] // this is a transparent wrapper
pub struct Report<E>(pub E)
where
    E: AsRef<dyn StdError>;

impl<E> Display for Report<E>
where
    E: AsRef<dyn StdError>,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        /// Non-generic inner function avoids code bloat
        fn inner(mut e: &dyn StdError, f: &mut fmt::Formatter) -> fmt::Result {
            write!(f, "error")?;
            let mut last = String::new();
            loop {
                let this = e.to_string();
                if !last.contains(&this) {
                    write!(f, ": {}", &this)?;
                }
                last = this;

                if let Some(ne) = e.source() {
                    e = ne;
                } else {
                    break;
                }
            }
            Ok(())
        }

        inner(self.0.as_ref(), f)
    }
}

/// Helper type for reporting errors that are concrete implementors of `StdError`
///
/// Returned by [`ErrorReport::report`].
#[derive(Debug, Copy, Clone)]
pub struct ReportHelper<'e>(&'e (dyn StdError + 'static));

impl<'e> AsRef<dyn StdError + 'static> for ReportHelper<'e> {
    fn as_ref(&self) -> &(dyn StdError + 'static) {
        self.0
    }
}

/// Extension trait providing `.report()` method on concrete errors
///
/// This is implemented for types that implement `std::error::Error` and
/// `'static`.
pub trait ErrorReport: StdError + Sized + 'static {
    /// Return an object that displays the error and its causes
    fn report(&self) -> Report<ReportHelper<'_>> {
        Report(ReportHelper(self as _))
    }
}

impl<E: StdError + Sized + 'static> ErrorReport for E {}
