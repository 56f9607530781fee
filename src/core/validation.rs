//! The validatable capability and result aggregation.

use crate::core::ValidationItem;
use std::rc::Rc;
use std::sync::Arc;

/// Trait for validatable configuration.
///
/// Implement this trait on your configuration types to have them checked
/// before they are used. An implementation usually builds a
/// [`ValidationCollector`](crate::core::ValidationCollector) over `self`,
/// declares its rules, and returns the collected failures. An empty list
/// means the configuration is valid.
///
/// # Examples
///
/// ```rust
/// use config_validation::prelude::*;
/// use serde::Deserialize;
///
/// #[derive(Debug, Deserialize, Clone)]
/// struct ServerConfig {
///     port: u16,
///     public_address: String,
/// }
///
/// impl Validate for ServerConfig {
///     fn validate(&self) -> Vec<ValidationItem> {
///         let mut rules = ValidationCollector::new(self);
///         rules
///             .not_zero(field!(Self, port), "Port must be set.")
///             .public_ipv4(field!(Self, public_address), "Address must be publicly routable.");
///         rules.into_result()
///     }
/// }
///
/// let config = ServerConfig { port: 8080, public_address: "192.168.1.10".into() };
/// let failures = config.validate();
/// assert_eq!(failures.len(), 1);
/// assert_eq!(failures[0].item(), "public_address");
/// ```
pub trait Validate {
    /// Validate the configuration.
    ///
    /// Returns every failed rule in declaration order, or an empty list.
    fn validate(&self) -> Vec<ValidationItem>;
}

impl<V: Validate + ?Sized> Validate for &V {
    fn validate(&self) -> Vec<ValidationItem> {
        (**self).validate()
    }
}

impl<V: Validate + ?Sized> Validate for Box<V> {
    fn validate(&self) -> Vec<ValidationItem> {
        (**self).validate()
    }
}

impl<V: Validate + ?Sized> Validate for Rc<V> {
    fn validate(&self) -> Vec<ValidationItem> {
        (**self).validate()
    }
}

impl<V: Validate + ?Sized> Validate for Arc<V> {
    fn validate(&self) -> Vec<ValidationItem> {
        (**self).validate()
    }
}

/// Validate every object and concatenate the failures in iteration order.
///
/// # Examples
///
/// ```rust
/// use config_validation::prelude::*;
///
/// struct AlwaysValid;
///
/// impl Validate for AlwaysValid {
///     fn validate(&self) -> Vec<ValidationItem> {
///         Vec::new()
///     }
/// }
///
/// let objects: Vec<Box<dyn Validate>> = vec![Box::new(AlwaysValid), Box::new(AlwaysValid)];
/// assert!(validate_all(&objects).is_empty());
/// ```
pub fn validate_all<I>(objects: I) -> Vec<ValidationItem>
where
    I: IntoIterator,
    I::Item: Validate,
{
    objects
        .into_iter()
        .flat_map(|object| object.validate())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixed(Vec<ValidationItem>);

    impl Validate for Fixed {
        fn validate(&self) -> Vec<ValidationItem> {
            self.0.clone()
        }
    }

    fn failure(section: &str, item: &str) -> ValidationItem {
        ValidationItem::new(section, item, "failed", None)
    }

    #[test]
    fn test_validate_all_concatenates_in_order() {
        let objects = vec![
            Fixed(Vec::new()),
            Fixed(vec![failure("B", "one"), failure("B", "two")]),
            Fixed(Vec::new()),
        ];

        let failures = validate_all(&objects);
        assert_eq!(failures, vec![failure("B", "one"), failure("B", "two")]);
    }

    #[test]
    fn test_validate_all_over_trait_objects() {
        let first: Box<dyn Validate> = Box::new(Fixed(vec![failure("A", "x")]));
        let second: Arc<dyn Validate + Send + Sync> = Arc::new(Fixed(vec![failure("C", "y")]));

        let objects: [&dyn Validate; 2] = [&*first, &*second];
        let failures = validate_all(objects);
        assert_eq!(failures, vec![failure("A", "x"), failure("C", "y")]);
    }

    #[test]
    fn test_validate_all_empty() {
        let objects: Vec<Fixed> = Vec::new();
        assert!(validate_all(&objects).is_empty());
    }
}
