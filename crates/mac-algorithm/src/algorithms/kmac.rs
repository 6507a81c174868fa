//! KMAC and KMACXOF, as defined in NIST SP 800-185.
//!
//! KMAC absorbs the requested output length `L` before producing output,
//! so a KMAC output is *not* a prefix of a longer KMAC output under the
//! same key.  The contract in [`MacAlgorithm`](crate::MacAlgorithm) keeps
//! signing and verification consistent by always asking for the same
//! length.
//!
//! KMACXOF absorbs `L = 0` instead, so its outputs of every length are
//! prefixes of one another.

use tiny_keccak::{Hasher as _, IntoXof as _, Kmac, Xof as _};

use crate::{KeyMaterial, MacPrimitive, ProviderError};

/// How a KMAC instance produces its output.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Output {
    /// KMAC: the output length is bound into the result.
    Fixed,
    /// KMACXOF: the output is an extendable stream.
    Xof,
}

/// KMAC128 or KMACXOF128, with a fixed customization string.
#[derive(Clone, Copy, Debug)]
pub struct Kmac128 {
    /// The customization string `S`.
    customization: &'static [u8],
    /// Whether this is KMAC128 or KMACXOF128.
    output: Output,
}

/// KMAC256 or KMACXOF256, with a fixed customization string.
#[derive(Clone, Copy, Debug)]
pub struct Kmac256 {
    /// The customization string `S`.
    customization: &'static [u8],
    /// Whether this is KMAC256 or KMACXOF256.
    output: Output,
}

impl Kmac128 {
    /// Return a KMAC128 primitive using `customization` as its `S` parameter.
    pub const fn new(customization: &'static [u8]) -> Self {
        Kmac128 {
            customization,
            output: Output::Fixed,
        }
    }

    /// Return a KMACXOF128 primitive using `customization` as its `S` parameter.
    pub const fn new_xof(customization: &'static [u8]) -> Self {
        Kmac128 {
            customization,
            output: Output::Xof,
        }
    }
}

impl Kmac256 {
    /// Return a KMAC256 primitive using `customization` as its `S` parameter.
    pub const fn new(customization: &'static [u8]) -> Self {
        Kmac256 {
            customization,
            output: Output::Fixed,
        }
    }

    /// Return a KMACXOF256 primitive using `customization` as its `S` parameter.
    pub const fn new_xof(customization: &'static [u8]) -> Self {
        Kmac256 {
            customization,
            output: Output::Xof,
        }
    }
}

impl MacPrimitive for Kmac128 {
    fn compute_tag(
        &self,
        key: KeyMaterial<'_>,
        data: &[u8],
        out: &mut [u8],
    ) -> Result<(), ProviderError> {
        let kmac = Kmac::v128(key.as_bytes(), self.customization);
        finish(kmac, self.output, data, out);
        Ok(())
    }
}

impl MacPrimitive for Kmac256 {
    fn compute_tag(
        &self,
        key: KeyMaterial<'_>,
        data: &[u8],
        out: &mut [u8],
    ) -> Result<(), ProviderError> {
        let kmac = Kmac::v256(key.as_bytes(), self.customization);
        finish(kmac, self.output, data, out);
        Ok(())
    }
}

/// Absorb `data` into a keyed `kmac`, and fill `out`.
fn finish(mut kmac: Kmac, output: Output, data: &[u8], out: &mut [u8]) {
    kmac.update(data);
    match output {
        Output::Fixed => kmac.finalize(out),
        Output::Xof => kmac.into_xof().squeeze(out),
    }
}
