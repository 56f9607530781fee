//! Registry of validatable configuration objects and the startup gate.

use crate::core::{Validate, ValidationItem, validate_all};
use crate::error::{ConfigError, Result, ValidationFailures};
use std::fmt;
use std::sync::Arc;

/// Shared handle to a registered configuration object.
type Registered = Arc<dyn Validate + Send + Sync>;

/// An ordered set of configuration objects that are validated together.
///
/// Objects are registered after they have been bound from their sources.
/// Validation visits them in registration order, so the combined result is
/// deterministic.
///
/// # Examples
///
/// ```rust
/// use config_validation::prelude::*;
///
/// struct Cache { ttl_seconds: u32 }
///
/// impl Validate for Cache {
///     fn validate(&self) -> Vec<ValidationItem> {
///         let mut rules = ValidationCollector::new(self);
///         rules.not_zero(field!(Self, ttl_seconds), "TTL must be set.");
///         rules.into_result()
///     }
/// }
///
/// let mut registry = ValidatableRegistry::new();
/// let cache = registry.register(Cache { ttl_seconds: 0 });
/// assert_eq!(cache.ttl_seconds, 0);
///
/// let err = registry.ensure_valid().unwrap_err();
/// assert!(matches!(err, ConfigError::ValidationFailed(ref f) if f.len() == 1));
/// ```
#[derive(Clone, Default)]
pub struct ValidatableRegistry {
    entries: Vec<Registered>,
}

impl ValidatableRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Register a configuration object and get a typed handle back.
    ///
    /// The returned handle shares the registered instance, so the application
    /// can keep using the object directly.
    pub fn register<V>(&mut self, config: V) -> Arc<V>
    where
        V: Validate + Send + Sync + 'static,
    {
        let config = Arc::new(config);
        self.entries.push(Arc::clone(&config) as Registered);
        config
    }

    /// Register an object that is already shared.
    pub fn register_shared(&mut self, config: Arc<dyn Validate + Send + Sync>) {
        self.entries.push(config);
    }

    /// Number of registered objects.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing has been registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Validate every registered object and concatenate the failures.
    pub fn validate(&self) -> Vec<ValidationItem> {
        #[cfg(feature = "tracing")]
        tracing::debug!(count = self.entries.len(), "Validating configuration objects");

        let failures = validate_all(&self.entries);

        #[cfg(feature = "tracing")]
        log_outcome(&failures);

        failures
    }

    /// Startup gate: fail when any registered object is invalid.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ValidationFailed`] carrying every failure.
    pub fn ensure_valid(&self) -> Result<()> {
        into_outcome(self.validate())
    }
}

impl fmt::Debug for ValidatableRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValidatableRegistry")
            .field("entries", &self.entries.len())
            .finish()
    }
}

/// Startup gate over any set of objects.
///
/// # Errors
///
/// Returns [`ConfigError::ValidationFailed`] when at least one rule failed.
pub fn ensure_valid<I>(objects: I) -> Result<()>
where
    I: IntoIterator,
    I::Item: Validate,
{
    let failures = validate_all(objects);

    #[cfg(feature = "tracing")]
    log_outcome(&failures);

    into_outcome(failures)
}

fn into_outcome(failures: Vec<ValidationItem>) -> Result<()> {
    if failures.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationFailed(ValidationFailures::new(failures)))
    }
}

#[cfg(feature = "tracing")]
fn log_outcome(failures: &[ValidationItem]) {
    if failures.is_empty() {
        tracing::debug!("All configurations are valid");
        return;
    }

    tracing::error!(count = failures.len(), "Found problems in configuration");
    for failure in failures {
        tracing::error!(
            section = failure.section(),
            item = failure.item(),
            "{}",
            failure.message()
        );
    }
}
