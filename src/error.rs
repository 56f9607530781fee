//! Error types for config-validation.
//!
//! Failed rules are not errors: they are [`ValidationItem`]s. The types here
//! cover the two remaining cases, a caller breaking the engine's contract and
//! a startup gate refusing a set of invalid configuration objects.

use crate::core::ValidationItem;
use std::fmt;

/// Result type alias for config-validation operations.
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Errors that can occur when validating configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// One or more configuration objects reported validation failures.
    #[error("Configuration validation failed: {0}")]
    ValidationFailed(#[from] ValidationFailures),

    /// The validation engine was used in a way its contract forbids.
    #[error("Validation contract violated: {0}")]
    ContractViolation(#[from] ContractViolation),
}

/// Programmer errors in how rules are declared.
///
/// These are never produced by configuration values. They point at a bug in
/// the code declaring the rules and are expected to surface in tests.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ContractViolation {
    /// A field selector was empty.
    #[error("field selector is empty")]
    EmptySelector,

    /// A field selector was not a plain member access path.
    #[error("field selector `{selector}` is not a simple member access")]
    InvalidSelector {
        /// The offending selector text
        selector: String,
    },

    /// A section name was empty.
    #[error("section name must not be empty")]
    EmptySection,

    /// An explicitly supplied item name was empty.
    #[error("item name must not be empty")]
    EmptyItem,

    /// A rule was declared without a failure message.
    #[error("validation message for `{item}` must not be empty")]
    EmptyMessage {
        /// The item the rule was declared for
        item: String,
    },
}

/// The combined failures of one or more configuration objects.
///
/// Returned by the startup gate when at least one rule failed. Items keep the
/// order in which the objects were validated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationFailures {
    items: Vec<ValidationItem>,
}

impl ValidationFailures {
    /// Wrap a list of failures.
    pub fn new(items: Vec<ValidationItem>) -> Self {
        Self { items }
    }

    /// The individual failures.
    pub fn items(&self) -> &[ValidationItem] {
        &self.items
    }

    /// Number of failures.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether there are no failures at all.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Same failures with every offending value withheld.
    pub fn redacted(&self) -> Self {
        Self {
            items: self.items.iter().map(ValidationItem::redacted).collect(),
        }
    }

    /// Unwrap into the underlying list.
    pub fn into_items(self) -> Vec<ValidationItem> {
        self.items
    }
}

impl fmt::Display for ValidationFailures {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} problem(s) found in configuration:", self.items.len())?;
        for (i, item) in self.items.iter().enumerate() {
            writeln!(f, "  {}. {}", i + 1, item)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationFailures {}

impl IntoIterator for ValidationFailures {
    type Item = ValidationItem;
    type IntoIter = std::vec::IntoIter<ValidationItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}
