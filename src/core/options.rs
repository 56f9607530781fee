//! Options controlling how a collector labels and records failures.

use crate::core::CaseSensitivity;
use serde::{Deserialize, Serialize};

/// Settings for a [`ValidationCollector`](crate::core::ValidationCollector).
///
/// Defaults: section derived from the target type, case-insensitive
/// `starts_with`/`ends_with`, offending values captured.
///
/// Options deserialize with serde, so they can live next to the rest of an
/// application's configuration.
///
/// # Examples
///
/// ```rust
/// use config_validation::core::{CaseSensitivity, ValidationOptions};
///
/// let options = ValidationOptions::new()
///     .with_section("Payments")
///     .with_case_sensitivity(CaseSensitivity::Sensitive)
///     .with_capture_values(false);
///
/// assert_eq!(options.section.as_deref(), Some("Payments"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationOptions {
    /// Section name to report instead of the target's type name.
    pub section: Option<String>,

    /// Comparison used by `starts_with` and `ends_with`.
    pub case_sensitivity: CaseSensitivity,

    /// Record offending values in failures. Turn off for sections holding secrets.
    pub capture_values: bool,
}

impl ValidationOptions {
    /// Create options with default settings.
    pub fn new() -> Self {
        Self {
            section: None,
            case_sensitivity: CaseSensitivity::Insensitive,
            capture_values: true,
        }
    }

    /// Report failures under `section` instead of the target's type name.
    pub fn with_section(mut self, section: impl Into<String>) -> Self {
        self.section = Some(section.into());
        self
    }

    /// Set the default comparison for `starts_with` and `ends_with`.
    pub fn with_case_sensitivity(mut self, case: CaseSensitivity) -> Self {
        self.case_sensitivity = case;
        self
    }

    /// Choose whether offending values are recorded.
    pub fn with_capture_values(mut self, capture: bool) -> Self {
        self.capture_values = capture;
        self
    }
}

impl Default for ValidationOptions {
    fn default() -> Self {
        Self::new()
    }
}
