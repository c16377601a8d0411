//! # Environment Accessor
//!
//! Typed read-only queries over the ambient key/value store.
//!
//! All lookups are live reads through the injected [`EnvProvider`]; no value
//! is cached across calls. Every failure mode (missing key, empty value,
//! malformed number, store fault) collapses to "absent" or a caller-supplied
//! default, so callers never need error handling around an accessor call.

use crate::provider::EnvProvider;
use tracing::{debug, warn};

/// Environment name used when the designated key is not set.
pub const DEFAULT_NAME: &str = "development";

/// Key that resolves the environment name at construction time.
pub const DEFAULT_NAME_KEY: &str = "APP_ENV";

/// A raw store value counts as present only if it is non-empty and not one
/// of the literal absent-marker tokens.
fn is_present_value(value: &str) -> bool {
    !value.is_empty() && value != "undefined" && value != "null"
}

/// Feature flags are on only when the trimmed, lowercased value is exactly
/// `"true"`.
fn is_truthy(value: &str) -> bool {
    value.trim().eq_ignore_ascii_case("true")
}

/// Typed read-only accessor over the ambient key/value store.
///
/// # M-CANONICAL-DOCS
///
/// ## Purpose
/// Gives consumers consistent treatment of missing, empty, and malformed
/// environment values instead of each call site touching the store directly.
/// Built once at process startup and passed by reference to consumers; the
/// provider is injected so tests can substitute an in-memory store.
///
/// ## Usage
/// ```rust
/// use envlens::{Environment, MapEnv};
///
/// let mut store = MapEnv::new();
/// store.set("HTTP_PORT", "8080");
/// let environment = Environment::new(store);
///
/// assert_eq!(environment.name(), "development");
/// assert_eq!(environment.number_or("HTTP_PORT", 3000.0), 8080.0);
/// assert!(!environment.supports("EXPERIMENTAL_PARSER"));
/// ```
///
/// ## Error Handling
/// No operation fails. Store faults and parse errors are logged through
/// `tracing` and surfaced as absent values or the supplied default.
pub struct Environment<P> {
    name: String,
    provider: P,
}

impl<P: EnvProvider> Environment<P> {
    /// Build the accessor, resolving the environment name from
    /// [`DEFAULT_NAME_KEY`].
    pub fn new(provider: P) -> Self {
        Self::with_name_key(provider, DEFAULT_NAME_KEY)
    }

    /// Build the accessor with a custom designated environment-name key.
    pub fn with_name_key(provider: P, name_key: &str) -> Self {
        let name = match provider.get(name_key) {
            Ok(Some(value)) if is_present_value(&value) => value,
            Ok(_) => DEFAULT_NAME.to_string(),
            Err(error) => {
                warn!(name_key, %error, "store read failed, using default environment name");
                DEFAULT_NAME.to_string()
            }
        };
        debug!(%name, "resolved environment name");
        Self { name, provider }
    }

    /// The environment name resolved at construction. Always non-empty.
    pub fn name(&self) -> &str {
        debug!("reading environment name");
        &self.name
    }

    /// Live lookup of `key` in the store.
    ///
    /// Present iff the key is set to a non-empty value that is not the
    /// literal `"undefined"` or `"null"`. A store fault is logged and treated
    /// as absent. Every other accessor is built on this one.
    pub fn optional_property(&self, key: &str) -> Option<String> {
        debug!(key, "reading property from environment store");

        match self.provider.get(key) {
            Ok(Some(value)) if is_present_value(&value) => Some(value),
            Ok(_) => None,
            Err(error) => {
                warn!(key, %error, "store read failed, treating property as absent");
                None
            }
        }
    }

    /// The property value, or `default` when absent.
    pub fn property_or(&self, key: &str, default: &str) -> String {
        self.optional_property(key).unwrap_or_else(|| {
            debug!(key, default, "property absent, falling back to default");
            default.to_string()
        })
    }

    /// The property value. Use only when the key is known to be present;
    /// callers accept `None` as the absent signal.
    pub fn property(&self, key: &str) -> Option<String> {
        self.optional_property(key)
    }

    /// Whether `key` holds a present value.
    pub fn has_property(&self, key: &str) -> bool {
        debug!(key, "checking whether environment store has property");
        self.optional_property(key).is_some()
    }

    /// Whether the feature flag is on: present AND trimmed, lowercased value
    /// equal to `"true"`. Absent or any other value is off.
    pub fn supports(&self, feature: &str) -> bool {
        debug!(feature, "checking feature flag");
        self.optional_property(feature)
            .is_some_and(|value| is_truthy(&value))
    }

    /// Like [`supports`](Self::supports), but an absent flag resolves to
    /// `default`.
    ///
    /// Any present value short-circuits the default: a stored `"false"`
    /// yields `false` even when `default` is `true`.
    pub fn supports_or(&self, feature: &str, default: bool) -> bool {
        debug!(feature, default, "checking feature flag with default");
        match self.optional_property(feature) {
            Some(value) => is_truthy(&value),
            None => default,
        }
    }

    /// Live lookup of `key`, coerced to a number.
    ///
    /// Absent properties, malformed numbers, and values that parse to NaN
    /// are all absent; parse anomalies are logged, never propagated.
    pub fn optional_number(&self, key: &str) -> Option<f64> {
        let value = self.optional_property(key)?;

        // The store tolerates surrounding whitespace around numeric values.
        match value.trim().parse::<f64>() {
            Ok(number) if !number.is_nan() => Some(number),
            Ok(_) => {
                warn!(key, %value, "value parsed to NaN, treating as absent");
                None
            }
            Err(error) => {
                warn!(key, %value, %error, "malformed number, treating as absent");
                None
            }
        }
    }

    /// The numeric property value, or `default` when absent or malformed.
    pub fn number_or(&self, key: &str, default: f64) -> f64 {
        self.optional_number(key).unwrap_or_else(|| {
            debug!(key, default, "number absent, falling back to default");
            default
        })
    }

    /// The numeric property value. Use only when the key is known to hold a
    /// well-formed number.
    pub fn number(&self, key: &str) -> Option<f64> {
        self.optional_number(key)
    }

    /// Every key currently set in the store, in the store's enumeration
    /// order. An unavailable store yields an empty list, not an error.
    pub fn keys(&self) -> Vec<String> {
        debug!("enumerating environment store keys");
        match self.provider.keys() {
            Ok(keys) => keys,
            Err(error) => {
                warn!(%error, "store enumeration failed, returning no keys");
                Vec::new()
            }
        }
    }
}
