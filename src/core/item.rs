//! The structured validation failure record.

use crate::error::ContractViolation;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One validation failure: which section and item failed, why, and with what value.
///
/// Items are produced by [`ValidationCollector`](crate::core::ValidationCollector)
/// and are immutable afterwards. The serialized field names and their order
/// (`section`, `item`, `message`, `value`) are stable, since renderers and
/// health payloads key off them.
///
/// Section, item and message are never empty, whether the item was built by
/// a collector, by [`ValidationItem::new`] or by deserialization.
///
/// # Examples
///
/// ```rust
/// use config_validation::core::ValidationItem;
///
/// let item = ValidationItem::new("Server", "port", "Port must not be zero.", Some("0".into()));
/// assert_eq!(item.to_string(), "Server.port: Port must not be zero.");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "ItemRecord")]
pub struct ValidationItem {
    section: String,
    item: String,
    message: String,
    value: Option<String>,
}

impl ValidationItem {
    /// Create a new validation failure record.
    ///
    /// # Panics
    ///
    /// Panics if `section`, `item` or `message` is empty or whitespace.
    pub fn new(
        section: impl Into<String>,
        item: impl Into<String>,
        message: impl Into<String>,
        value: Option<String>,
    ) -> Self {
        match Self::try_new(section, item, message, value) {
            Ok(item) => item,
            Err(violation) => panic!("{violation}"),
        }
    }

    /// Create a new validation failure record, reporting empty fields instead
    /// of panicking.
    pub fn try_new(
        section: impl Into<String>,
        item: impl Into<String>,
        message: impl Into<String>,
        value: Option<String>,
    ) -> Result<Self, ContractViolation> {
        let (section, item, message) = (section.into(), item.into(), message.into());
        if section.trim().is_empty() {
            return Err(ContractViolation::EmptySection);
        }
        if item.trim().is_empty() {
            return Err(ContractViolation::EmptyItem);
        }
        if message.trim().is_empty() {
            return Err(ContractViolation::EmptyMessage { item });
        }

        Ok(Self {
            section,
            item,
            message,
            value,
        })
    }

    /// Logical section the failing field belongs to (usually the config type name).
    pub fn section(&self) -> &str {
        &self.section
    }

    /// Name of the failing field within its section.
    pub fn item(&self) -> &str {
        &self.item
    }

    /// Human-readable explanation supplied by the rule author.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The offending value, if it was captured and was not null.
    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    /// Copy of this item without the offending value.
    ///
    /// Use this before exposing failures for fields that may hold secrets.
    pub fn redacted(&self) -> Self {
        Self {
            value: None,
            ..self.clone()
        }
    }
}

/// Unchecked wire form, validated on the way into [`ValidationItem`].
#[derive(Deserialize)]
struct ItemRecord {
    section: String,
    item: String,
    message: String,
    value: Option<String>,
}

impl TryFrom<ItemRecord> for ValidationItem {
    type Error = ContractViolation;

    fn try_from(record: ItemRecord) -> Result<Self, Self::Error> {
        Self::try_new(record.section, record.item, record.message, record.value)
    }
}

impl fmt::Display for ValidationItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}: {}", self.section, self.item, self.message)
    }
}
