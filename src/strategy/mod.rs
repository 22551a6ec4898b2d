//! Conversion strategies: how a single raw string becomes a single typed
//! value.
//!
//! Strategies are resolved through a [`StrategyRegistry`], the registry-based
//! rendition of reflective type inspection: every scalar target type is
//! registered up front (or covered by [`StrategyRegistry::with_defaults`]),
//! and resolution is a pure lookup by type identity.
pub(crate) mod convert;
mod errors;
mod registry;

pub use errors::StrategyResolutionError;
pub use registry::{StrategyEntry, StrategyRegistry};

/// The mechanism used to turn one raw string into one typed value.
///
/// Resolved once per scalar type and immutable afterwards; repeated
/// resolutions for the same type return the same strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConversionStrategy {
    /// The target is `String`: the raw value passes through unchanged.
    Identity,
    /// The target's `FromStr` implementation.
    Parse,
    /// A registered [`FromRequestString`] implementation or conversion
    /// closure.
    Factory,
}

impl ConversionStrategy {
    /// A short label for diagnostics.
    pub fn name(&self) -> &'static str {
        match self {
            ConversionStrategy::Identity => "identity",
            ConversionStrategy::Parse => "parse",
            ConversionStrategy::Factory => "factory",
        }
    }
}

/// What to do with a raw value that is present but empty.
///
/// An empty string is *not* the same thing as an absent parameter: it was
/// explicitly supplied by the request and always overrides a configured
/// default. This policy only decides what the empty string converts into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EmptyStringPolicy {
    /// Feed the empty string to the strategy like any other raw value.
    ///
    /// The strategy decides whether it converts or fails.
    #[default]
    Convert,
    /// Short-circuit to the null-equivalent value without invoking the
    /// strategy.
    ///
    /// A list element converted under this policy is `None`; a scalar
    /// binding yields a null result.
    Null,
}

/// The capability implemented by types that can be built from a raw request
/// string.
///
/// Implement it for your own types, then register them with
/// [`StrategyRegistry::register`]. Types that already implement `FromStr`
/// can skip the trait and use [`StrategyRegistry::register_parsed`] instead.
///
/// # Example
///
/// ```rust
/// use bindery::{FromRequestString, StrategyRegistry};
///
/// struct Hex(u64);
///
/// impl FromRequestString for Hex {
///     fn from_request_string(raw: &str) -> Result<Self, anyhow::Error> {
///         let digits = raw.trim_start_matches("0x");
///         Ok(Hex(u64::from_str_radix(digits, 16)?))
///     }
/// }
///
/// let registry = StrategyRegistry::new();
/// registry.register::<Hex>();
/// ```
pub trait FromRequestString: Sized + Send + 'static {
    /// Convert one raw string into a value of this type.
    ///
    /// Failures are reported to the client as a bad request: the error
    /// should describe what was wrong with the raw value, not with the
    /// server.
    fn from_request_string(raw: &str) -> Result<Self, anyhow::Error>;

    /// The policy applied when the raw value is present but empty.
    fn empty_string_policy() -> EmptyStringPolicy {
        EmptyStringPolicy::Convert
    }
}
