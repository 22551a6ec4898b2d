use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};
use std::str::FromStr;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::descriptor::ScalarType;

use super::errors::StrategyResolutionError;
use super::{ConversionStrategy, EmptyStringPolicy, FromRequestString};

/// A converted value with its concrete type erased.
///
/// It downcasts to the scalar type the producing strategy was registered for.
pub(crate) type ErasedValue = Box<dyn Any + Send>;

type ConvertFn = dyn Fn(&str) -> Result<ErasedValue, anyhow::Error> + Send + Sync;

/// A fully resolved conversion strategy for one scalar type.
///
/// Entries are immutable once built. The registry hands out shared handles,
/// so a caller can resolve once and convert many raw values against the same
/// entry.
pub struct StrategyEntry {
    pub(crate) strategy: ConversionStrategy,
    pub(crate) target: ScalarType,
    pub(crate) empty_string_policy: EmptyStringPolicy,
    pub(crate) convert: Box<ConvertFn>,
}

impl StrategyEntry {
    /// The mechanism this entry uses.
    pub fn strategy(&self) -> ConversionStrategy {
        self.strategy
    }

    /// The scalar type this entry produces.
    pub fn target(&self) -> ScalarType {
        self.target
    }
}

impl std::fmt::Debug for StrategyEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StrategyEntry")
            .field("strategy", &self.strategy)
            .field("target", &self.target)
            .field("empty_string_policy", &self.empty_string_policy)
            .finish_non_exhaustive()
    }
}

/// Maps scalar target types to the strategy used to convert raw request
/// strings into them.
///
/// Resolution is a pure lookup: the built-in identity strategy for `String`
/// is seeded at construction, every other type must be registered before it
/// can be bound. Registering a type again replaces its strategy (last write
/// wins).
///
/// The registry is the only shared state in the engine. Lookups take a read
/// lock and are safe to perform concurrently from multiple request-handling
/// threads; registration swaps a fully built entry under the write lock, so
/// a concurrent reader never observes a partially constructed strategy.
#[derive(Debug)]
pub struct StrategyRegistry {
    entries: RwLock<HashMap<TypeId, Arc<StrategyEntry>>>,
}

impl StrategyRegistry {
    /// An empty registry, apart from the built-in identity strategy for
    /// `String`.
    pub fn new() -> Self {
        let registry = Self {
            entries: RwLock::new(HashMap::new()),
        };
        registry.insert(Arc::new(StrategyEntry {
            strategy: ConversionStrategy::Identity,
            target: ScalarType::of::<String>(),
            empty_string_policy: EmptyStringPolicy::Convert,
            convert: Box::new(|raw| Ok(Box::new(raw.to_owned()) as ErasedValue)),
        }));
        registry
    }

    /// A registry pre-populated with the common scalar targets: `String`
    /// (identity) plus the standard `FromStr` primitives: `bool`, `char`,
    /// the integer types, `f32`/`f64` and the IP address types.
    pub fn with_defaults() -> Self {
        let registry = Self::new();
        registry.register_parsed::<bool>();
        registry.register_parsed::<char>();
        registry.register_parsed::<i8>();
        registry.register_parsed::<i16>();
        registry.register_parsed::<i32>();
        registry.register_parsed::<i64>();
        registry.register_parsed::<i128>();
        registry.register_parsed::<isize>();
        registry.register_parsed::<u8>();
        registry.register_parsed::<u16>();
        registry.register_parsed::<u32>();
        registry.register_parsed::<u64>();
        registry.register_parsed::<u128>();
        registry.register_parsed::<usize>();
        registry.register_parsed::<f32>();
        registry.register_parsed::<f64>();
        registry.register_parsed::<IpAddr>();
        registry.register_parsed::<Ipv4Addr>();
        registry.register_parsed::<Ipv6Addr>();
        registry
    }

    /// Register `T` via its [`FromRequestString`] implementation.
    pub fn register<T: FromRequestString>(&self) {
        self.insert(Arc::new(StrategyEntry {
            strategy: ConversionStrategy::Factory,
            target: ScalarType::of::<T>(),
            empty_string_policy: T::empty_string_policy(),
            convert: Box::new(|raw| {
                T::from_request_string(raw).map(|value| Box::new(value) as ErasedValue)
            }),
        }));
    }

    /// Register `T` via its `FromStr` implementation.
    ///
    /// The empty string is fed to `FromStr` like any other raw value; use
    /// [`register_parsed_with`](Self::register_parsed_with) to treat it as
    /// a null-equivalent instead.
    pub fn register_parsed<T>(&self)
    where
        T: FromStr + Send + 'static,
        T::Err: std::error::Error + Send + Sync + 'static,
    {
        self.register_parsed_with::<T>(EmptyStringPolicy::Convert);
    }

    /// Register `T` via its `FromStr` implementation, with an explicit
    /// empty-string policy.
    pub fn register_parsed_with<T>(&self, empty_string_policy: EmptyStringPolicy)
    where
        T: FromStr + Send + 'static,
        T::Err: std::error::Error + Send + Sync + 'static,
    {
        self.insert(Arc::new(StrategyEntry {
            strategy: ConversionStrategy::Parse,
            target: ScalarType::of::<T>(),
            empty_string_policy,
            convert: Box::new(|raw| {
                T::from_str(raw)
                    .map(|value| Box::new(value) as ErasedValue)
                    .map_err(anyhow::Error::new)
            }),
        }));
    }

    /// Register `T` via an arbitrary conversion function.
    pub fn register_fn<T, F>(&self, empty_string_policy: EmptyStringPolicy, convert: F)
    where
        T: Send + 'static,
        F: Fn(&str) -> Result<T, anyhow::Error> + Send + Sync + 'static,
    {
        self.insert(Arc::new(StrategyEntry {
            strategy: ConversionStrategy::Factory,
            target: ScalarType::of::<T>(),
            empty_string_policy,
            convert: Box::new(move |raw| convert(raw).map(|value| Box::new(value) as ErasedValue)),
        }));
    }

    /// Look up the strategy for `target`.
    ///
    /// Deterministic and idempotent: the same type resolves to the same
    /// entry until it is re-registered.
    pub fn resolve(&self, target: ScalarType) -> Result<Arc<StrategyEntry>, StrategyResolutionError> {
        match self.entries().get(&target.id()).cloned() {
            Some(entry) => Ok(entry),
            None => {
                tracing::trace!(
                    target_type = target.name(),
                    "no conversion strategy registered for the requested type"
                );
                Err(StrategyResolutionError { target })
            }
        }
    }

    fn insert(&self, entry: Arc<StrategyEntry>) {
        let key = entry.target.id();
        if let Some(previous) = self.entries_mut().insert(key, Arc::clone(&entry)) {
            tracing::debug!(
                target_type = entry.target.name(),
                previous = previous.strategy.name(),
                replacement = entry.strategy.name(),
                "replaced the conversion strategy for a registered type"
            );
        }
    }

    // A panicked writer cannot leave a partially built entry behind (entries
    // are constructed before the lock is taken), so a poisoned lock is safe
    // to recover.
    fn entries(&self) -> RwLockReadGuard<'_, HashMap<TypeId, Arc<StrategyEntry>>> {
        self.entries.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn entries_mut(&self) -> RwLockWriteGuard<'_, HashMap<TypeId, Arc<StrategyEntry>>> {
        self.entries.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for StrategyRegistry {
    fn default() -> Self {
        Self::new()
    }
}
