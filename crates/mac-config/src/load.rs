//! Processing a TOML document into a validated configuration
//!
//! # Example
//!
//! ```
//! # fn main() -> Result<(), anyhow::Error> {
//! use derive_builder::Builder;
//! use mac_config::{impl_standard_builder, ConfigBuildError};
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Debug, Clone, Builder, Eq, PartialEq)]
//! #[builder(build_fn(error = "ConfigBuildError"))]
//! #[builder(derive(Debug, Serialize, Deserialize))]
//! struct EmbedderConfig {
//!     #[builder(default = "3")]
//!     retries: u8,
//! }
//! impl_standard_builder! { EmbedderConfig }
//!
//! let cfg: EmbedderConfig =
//!     mac_config::load::resolve_toml::<EmbedderConfigBuilder>("retries = 5")?;
//! assert_eq!(cfg.retries, 5);
//! # Ok(())
//! # }
//! ```

use std::collections::BTreeSet;

use mac_error::{ErrorKind, HasKind};
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::warn;

use crate::ConfigBuildError;

/// Error resolving a configuration (during deserialize, or build)
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ConfigResolveError {
    /// Deserialize failed
    #[error("config contents not as expected: {0}")]
    Deserialize(#[from] toml::de::Error),

    /// Build failed
    #[error("config semantically incorrect: {0}")]
    Build(#[from] ConfigBuildError),
}

impl HasKind for ConfigResolveError {
    fn kind(&self) -> ErrorKind {
        ErrorKind::InvalidConfig
    }
}

/// A type that can be built from a builder via a build method
pub trait Builder {
    /// The type that this builder produces.
    type Built;
    /// Build into a `Built`
    ///
    /// Often shadows an inherent `build` method
    fn build(&self) -> Result<Self::Built, ConfigBuildError>;
}

/// Deserialize a builder of type `B` from a TOML document.
///
/// Return the builder along with the dotted paths of every key in the
/// document that `B` did not recognize.
pub fn builder_from_toml<B>(input: &str) -> Result<(B, Vec<String>), ConfigResolveError>
where
    B: DeserializeOwned,
{
    let table: toml::Table = input.parse()?;
    let mut ignored = BTreeSet::new();
    let mut recorder = |path: serde_ignored::Path<'_>| {
        ignored.insert(path.to_string());
    };
    let deser = serde_ignored::Deserializer::new(toml::Value::Table(table), &mut recorder);
    let builder: B = serde::Deserialize::deserialize(deser)?;
    Ok((builder, ignored.into_iter().collect()))
}

/// Deserialize and build a configuration from a TOML document.
///
/// Unrecognized keys are reported as log warning messages.
pub fn resolve_toml<B>(input: &str) -> Result<B::Built, ConfigResolveError>
where
    B: Builder + DeserializeOwned,
{
    let (val, ignored) = resolve_toml_and_ignored::<B>(input)?;
    for key in ignored {
        warn!("ignored configuration key: {}", key);
    }
    Ok(val)
}

/// Deserialize and build a configuration from a TOML document, reporting
/// unrecognized keys in the return value.
pub fn resolve_toml_and_ignored<B>(
    input: &str,
) -> Result<(B::Built, Vec<String>), ConfigResolveError>
where
    B: Builder + DeserializeOwned,
{
    let (builder, ignored) = builder_from_toml::<B>(input)?;
    Ok((builder.build()?, ignored))
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
    // impl_standard_builder! adds a `pub fn builder()` to these private types.
    #![allow(unreachable_pub)]
    use super::*;
    use crate::impl_standard_builder;
    use derive_builder::Builder;
    use serde::{Deserialize, Serialize};
    use tracing_test::traced_test;

    /// A small configuration to load.
    #[derive(Debug, Clone, Builder, Eq, PartialEq)]
    #[builder(build_fn(error = "ConfigBuildError", validate = "Self::validate"))]
    #[builder(derive(Debug, Serialize, Deserialize))]
    struct Sample {
        /// A string with a default.
        #[builder(default = "\"plain\".to_owned()")]
        flavor: String,
        /// An optional number, which must not be zero.
        #[builder(default)]
        count: Option<u32>,
    }
    impl_standard_builder! { Sample }

    impl SampleBuilder {
        /// Reject a zero `count`.
        fn validate(&self) -> Result<(), ConfigBuildError> {
            if let Some(Some(0)) = self.count {
                return Err(ConfigBuildError::Invalid {
                    field: "count".to_owned(),
                    problem: "must not be zero".to_owned(),
                });
            }
            Ok(())
        }
    }

    #[test]
    fn defaults() {
        let cfg: Sample = resolve_toml::<SampleBuilder>("").unwrap();
        assert_eq!(cfg, Sample::default());
        assert_eq!(cfg.flavor, "plain");
        assert_eq!(cfg.count, None);
    }

    #[test]
    fn values() {
        let cfg: Sample = resolve_toml::<SampleBuilder>(
            r#"
            flavor = "spicy"
            count = 7
            "#,
        )
        .unwrap();
        assert_eq!(cfg.flavor, "spicy");
        assert_eq!(cfg.count, Some(7));
    }

    #[test]
    fn ignored_keys() {
        let (cfg, ignored) = resolve_toml_and_ignored::<SampleBuilder>(
            r#"
            flavor = "sour"
            colour = "green"
            "#,
        )
        .unwrap();
        assert_eq!(cfg.flavor, "sour");
        assert_eq!(ignored, vec!["colour".to_owned()]);
    }

    #[test]
    #[traced_test]
    fn ignored_keys_are_logged() {
        let _: Sample = resolve_toml::<SampleBuilder>("texture = 3").unwrap();
        assert!(logs_contain("ignored configuration key: texture"));
    }

    #[test]
    fn errors() {
        let e = resolve_toml::<SampleBuilder>("count = 0").unwrap_err();
        assert!(matches!(e, ConfigResolveError::Build(_)));
        assert_eq!(e.kind(), ErrorKind::InvalidConfig);

        let e = resolve_toml::<SampleBuilder>("count = \"many\"").unwrap_err();
        assert!(matches!(e, ConfigResolveError::Deserialize(_)));

        let e = resolve_toml::<SampleBuilder>("this is not toml").unwrap_err();
        assert!(matches!(e, ConfigResolveError::Deserialize(_)));
    }

    /// A crate with its own one-parameter `Result` alias in scope.
    mod result_alias {
        use super::*;

        /// The kind of alias that crates define in their `err.rs`.
        type Result<T> = std::result::Result<T, ConfigBuildError>;

        /// A configuration declared next to the alias.
        #[derive(Debug, Clone, Builder, Eq, PartialEq)]
        #[builder(build_fn(error = "ConfigBuildError"))]
        #[builder(derive(Debug, Serialize, Deserialize))]
        struct Aliased {
            /// A number with a default.
            #[builder(default = "16")]
            width: usize,
        }
        impl_standard_builder! { Aliased }

        /// Load an `Aliased` through the alias.
        fn load(input: &str) -> Result<Aliased> {
            match resolve_toml::<AliasedBuilder>(input) {
                Ok(cfg) => Ok(cfg),
                Err(ConfigResolveError::Build(e)) => Err(e),
                Err(ConfigResolveError::Deserialize(e)) => panic!("{}", e),
            }
        }

        #[test]
        fn builds() {
            assert_eq!(load("").unwrap().width, 16);
            assert_eq!(load("width = 32").unwrap().width, 32);
            assert_eq!(Aliased::builder().width(8).build().unwrap().width, 8);
        }
    }
}
