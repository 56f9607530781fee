//! # config-validation
//!
//! Declarative validation rules for strongly-typed configuration objects.
//!
//! ## Overview
//!
//! `config-validation` checks configuration after it has been bound into typed
//! structs and before the application relies on it. It provides:
//! - A [`Validate`](core::Validate) trait any configuration type can implement
//! - A [`ValidationCollector`](core::ValidationCollector) that evaluates rules
//!   against one object and collects every failure, not just the first
//! - Built-in rules: not zero, not empty, URI, e-mail, IPv4, public IPv4,
//!   prefix and suffix checks, plus arbitrary predicates
//! - Field names derived from typed selectors with [`field!`], so messages
//!   never drift from the code
//! - Structured [`ValidationItem`](core::ValidationItem) results that
//!   serialize with serde
//!
//! ## Quick Start
//!
//! ```rust
//! use config_validation::prelude::*;
//! use serde::Deserialize;
//!
//! #[derive(Debug, Deserialize, Clone)]
//! struct LogicConfig {
//!     some_value: i32,
//!     some_name: String,
//!     some_endpoint: String,
//! }
//!
//! impl Validate for LogicConfig {
//!     fn validate(&self) -> Vec<ValidationItem> {
//!         let mut rules = ValidationCollector::new(self);
//!         rules
//!             .not_zero(field!(Self, some_value), "Value must be set.")
//!             .not_null_or_empty(field!(Self, some_name), "Name must be set.")
//!             .uri(field!(Self, some_endpoint), "Endpoint is not a URI.")
//!             .starts_with(field!(Self, some_endpoint), "https", "Endpoint is not SSL secured.")
//!             .must(|c| c.some_value > 10, "some_value", "Value must exceed 10.");
//!         rules.into_result()
//!     }
//! }
//!
//! # fn main() -> config_validation::error::Result<()> {
//! let config = LogicConfig {
//!     some_value: 42,
//!     some_name: "sparta".into(),
//!     some_endpoint: "https://api.example.com/".into(),
//! };
//!
//! // Startup gate: every registered object must be valid.
//! let mut registry = ValidatableRegistry::new();
//! registry.register(config);
//! registry.ensure_valid()?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Feature Flags
//!
//! - `tracing` (default): log aggregated validation outcomes with `tracing`.

#![warn(missing_docs, rust_2024_compatibility)]
#![deny(unsafe_code)]

pub mod core;
pub mod error;

/// Convenient re-exports for common usage patterns.
pub mod prelude {
    pub use crate::core::{
        CaseSensitivity, Field, Validate, ValidatableRegistry, ValidationCollector,
        ValidationItem, ValidationOptions, ensure_valid, validate_all,
    };
    pub use crate::error::{ConfigError, ContractViolation, Result, ValidationFailures};
    pub use crate::field;
}
