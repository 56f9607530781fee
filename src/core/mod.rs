//! Core validation engine types.

mod collector;
mod field;
mod item;
mod options;
pub mod predicates;
mod registry;
mod validation;

pub use collector::ValidationCollector;
pub use field::{DisplayValue, Field, FieldText, identify};
pub use item::ValidationItem;
pub use options::ValidationOptions;
pub use predicates::{CaseSensitivity, Zeroable};
pub use registry::{ValidatableRegistry, ensure_valid};
pub use validation::{Validate, validate_all};
