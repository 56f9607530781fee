//! The per-object rule collector.

use crate::core::predicates::{self, CaseSensitivity, Zeroable};
use crate::core::{DisplayValue, Field, FieldText, ValidationItem, ValidationOptions};
use crate::error::ContractViolation;

/// Accumulates rule outcomes for one configuration object.
///
/// A collector borrows its target for the length of one validation pass. Each
/// rule method reads a field through its [`Field`] selector, applies a
/// predicate, and on failure records a [`ValidationItem`] labeled with the
/// section and the field name. Passing rules leave no trace. Failed rules never
/// return an error; they become data in [`result`](Self::result), in the order
/// the rules were invoked.
///
/// # Panics
///
/// Rule methods panic on contract violations: an empty message, an empty item
/// name given to [`must`](Self::must), or an empty section name. These are bugs
/// in the rule declarations, not configuration problems.
///
/// # Examples
///
/// ```rust
/// use config_validation::prelude::*;
///
/// struct Smtp {
///     host: String,
///     port: u16,
///     sender: String,
/// }
///
/// impl Validate for Smtp {
///     fn validate(&self) -> Vec<ValidationItem> {
///         let mut rules = ValidationCollector::new(self);
///         rules
///             .not_null_or_empty(field!(Self, host), "SMTP host is required.")
///             .not_zero(field!(Self, port), "SMTP port is required.")
///             .email(field!(Self, sender), "Sender must be an e-mail address.");
///         rules.into_result()
///     }
/// }
///
/// let smtp = Smtp { host: "mail".into(), port: 0, sender: "noreply@example.com".into() };
/// let failures = smtp.validate();
/// assert_eq!(failures.len(), 1);
/// assert_eq!(failures[0].section(), "Smtp");
/// assert_eq!(failures[0].item(), "port");
/// ```
#[derive(Debug)]
pub struct ValidationCollector<'a, T> {
    target: &'a T,
    section: String,
    options: ValidationOptions,
    items: Vec<ValidationItem>,
}

impl<'a, T> ValidationCollector<'a, T> {
    /// Create a collector whose section is the target's type name.
    pub fn new(target: &'a T) -> Self {
        Self::with_options(target, ValidationOptions::default())
    }

    /// Create a collector reporting under an explicit section name.
    ///
    /// # Panics
    ///
    /// Panics if `section` is empty or whitespace.
    pub fn with_section(target: &'a T, section: impl Into<String>) -> Self {
        Self::with_options(target, ValidationOptions::new().with_section(section))
    }

    /// Create a collector with explicit options.
    ///
    /// # Panics
    ///
    /// Panics if `options.section` is set to an empty or whitespace name.
    pub fn with_options(target: &'a T, options: ValidationOptions) -> Self {
        let section = match &options.section {
            Some(section) => section.clone(),
            None => short_type_name::<T>().to_string(),
        };
        if section.trim().is_empty() {
            panic!("{}", ContractViolation::EmptySection);
        }

        Self {
            target,
            section,
            options,
            items: Vec::new(),
        }
    }

    /// Section name failures are reported under.
    pub fn section(&self) -> &str {
        &self.section
    }

    /// Fails when an integer field is zero.
    pub fn not_zero<V>(&mut self, field: Field<T, V>, message: &str) -> &mut Self
    where
        V: Zeroable + DisplayValue,
    {
        let value = field.get(self.target);
        let passed = predicates::is_not_zero(value);
        self.record(passed, field.name(), message, || value.display_value())
    }

    /// Fails when a text field is null, empty or whitespace only.
    pub fn not_null_or_empty<V: FieldText>(&mut self, field: Field<T, V>, message: &str) -> &mut Self {
        self.check_text(field, message, predicates::is_not_null_or_empty)
    }

    /// Fails unless a text field is an absolute URI.
    pub fn uri<V: FieldText>(&mut self, field: Field<T, V>, message: &str) -> &mut Self {
        self.check_text(field, message, predicates::is_uri)
    }

    /// Fails unless a text field is a well-formed e-mail address.
    pub fn email<V: FieldText>(&mut self, field: Field<T, V>, message: &str) -> &mut Self {
        self.check_text(field, message, predicates::is_email)
    }

    /// Fails unless a text field is a well-formed IPv4 address.
    pub fn ipv4<V: FieldText>(&mut self, field: Field<T, V>, message: &str) -> &mut Self {
        self.check_text(field, message, predicates::is_ipv4)
    }

    /// Fails unless a text field is a well-formed, publicly routable IPv4 address.
    pub fn public_ipv4<V: FieldText>(&mut self, field: Field<T, V>, message: &str) -> &mut Self {
        self.check_text(field, message, predicates::is_public_ipv4)
    }

    /// Fails unless a text field begins with `prefix`, compared with the
    /// collector's default case sensitivity.
    pub fn starts_with<V: FieldText>(
        &mut self,
        field: Field<T, V>,
        prefix: &str,
        message: &str,
    ) -> &mut Self {
        let case = self.options.case_sensitivity;
        self.starts_with_case(field, prefix, case, message)
    }

    /// Like [`starts_with`](Self::starts_with) with an explicit comparison.
    pub fn starts_with_case<V: FieldText>(
        &mut self,
        field: Field<T, V>,
        prefix: &str,
        case: CaseSensitivity,
        message: &str,
    ) -> &mut Self {
        self.check_text(field, message, |v| predicates::starts_with(v, prefix, case))
    }

    /// Fails unless a text field ends with `suffix`, compared with the
    /// collector's default case sensitivity.
    pub fn ends_with<V: FieldText>(
        &mut self,
        field: Field<T, V>,
        suffix: &str,
        message: &str,
    ) -> &mut Self {
        let case = self.options.case_sensitivity;
        self.ends_with_case(field, suffix, case, message)
    }

    /// Like [`ends_with`](Self::ends_with) with an explicit comparison.
    pub fn ends_with_case<V: FieldText>(
        &mut self,
        field: Field<T, V>,
        suffix: &str,
        case: CaseSensitivity,
        message: &str,
    ) -> &mut Self {
        self.check_text(field, message, |v| predicates::ends_with(v, suffix, case))
    }

    /// Fails when `predicate` over the whole target returns `false`.
    ///
    /// The expression may span several fields, so the failing item is named
    /// explicitly and no value is recorded.
    ///
    /// # Panics
    ///
    /// Panics if `item` or `message` is empty.
    pub fn must<P>(&mut self, predicate: P, item: &str, message: &str) -> &mut Self
    where
        P: FnOnce(&T) -> bool,
    {
        if item.trim().is_empty() {
            panic!("{}", ContractViolation::EmptyItem);
        }
        let passed = predicate(self.target);
        self.record(passed, item, message, || None)
    }

    /// Fails when `predicate` over a single field returns `false`.
    pub fn must_field<V, P>(&mut self, field: Field<T, V>, predicate: P, message: &str) -> &mut Self
    where
        V: DisplayValue,
        P: FnOnce(&V) -> bool,
    {
        let value = field.get(self.target);
        let passed = predicates::satisfies(value, predicate);
        self.record(passed, field.name(), message, || value.display_value())
    }

    /// Failures recorded so far, in rule order. Does not reset the collector.
    pub fn result(&self) -> &[ValidationItem] {
        &self.items
    }

    /// Consume the collector and return its failures.
    pub fn into_result(self) -> Vec<ValidationItem> {
        self.items
    }

    /// Whether no rule has failed so far.
    pub fn is_valid(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of failed rules so far.
    pub fn failure_count(&self) -> usize {
        self.items.len()
    }

    fn check_text<V, P>(&mut self, field: Field<T, V>, message: &str, predicate: P) -> &mut Self
    where
        V: FieldText,
        P: FnOnce(Option<&str>) -> bool,
    {
        let value = field.get(self.target).text();
        let passed = predicate(value);
        self.record(passed, field.name(), message, || value.map(str::to_string))
    }

    fn record<F>(&mut self, passed: bool, item: &str, message: &str, value: F) -> &mut Self
    where
        F: FnOnce() -> Option<String>,
    {
        if message.trim().is_empty() {
            panic!(
                "{}",
                ContractViolation::EmptyMessage {
                    item: item.to_string()
                }
            );
        }

        if !passed {
            let value = if self.options.capture_values {
                value()
            } else {
                None
            };
            self.items
                .push(ValidationItem::new(&self.section, item, message, value));
        }
        self
    }
}

/// `Type` from `my_crate::config::Type<Args>`.
fn short_type_name<T>() -> &'static str {
    let full = std::any::type_name::<T>();
    let base = full.split('<').next().unwrap_or(full);
    base.rsplit("::").next().unwrap_or(base)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field;

    #[derive(Debug, Clone)]
    struct Mailer {
        retries: i32,
        host: String,
        relay: Option<String>,
        endpoint: String,
        sender: String,
        ip: String,
    }

    fn valid() -> Mailer {
        Mailer {
            retries: 3,
            host: "smtp.example.com".to_string(),
            relay: Some("relay.example.com".to_string()),
            endpoint: "https://mail.example.com/".to_string(),
            sender: "noreply@example.com".to_string(),
            ip: "8.8.8.8".to_string(),
        }
    }

    fn run_all(target: &Mailer) -> Vec<ValidationItem> {
        let mut rules = ValidationCollector::new(target);
        rules
            .not_zero(field!(Mailer, retries), "Retries must not be zero.")
            .not_null_or_empty(field!(Mailer, host), "Host is required.")
            .not_null_or_empty(field!(Mailer, relay), "Relay is required.")
            .uri(field!(Mailer, endpoint), "Endpoint must be a URI.")
            .email(field!(Mailer, sender), "Sender must be an e-mail.")
            .ipv4(field!(Mailer, ip), "IP must be IPv4.")
            .public_ipv4(field!(Mailer, ip), "IP must be public.")
            .starts_with(field!(Mailer, endpoint), "https", "Endpoint must use TLS.")
            .ends_with(field!(Mailer, endpoint), "/", "Endpoint must end with /.");
        rules.into_result()
    }

    #[test]
    fn test_valid_target_has_no_failures() {
        assert!(run_all(&valid()).is_empty());
    }

    #[test]
    fn test_section_is_type_name() {
        let target = valid();
        let rules = ValidationCollector::new(&target);
        assert_eq!(rules.section(), "Mailer");
    }

    #[test]
    fn test_section_override() {
        let target = valid();
        let rules = ValidationCollector::with_section(&target, "Notifications:Mail");
        assert_eq!(rules.section(), "Notifications:Mail");
    }

    #[test]
    fn test_short_type_name_strips_generics() {
        assert_eq!(short_type_name::<Vec<String>>(), "Vec");
        assert_eq!(short_type_name::<Mailer>(), "Mailer");
    }

    #[test]
    fn test_failure_records_section_item_message_value() {
        let target = Mailer {
            retries: 0,
            ..valid()
        };
        let failures = run_all(&target);

        assert_eq!(failures.len(), 1);
        let failure = &failures[0];
        assert_eq!(failure.section(), "Mailer");
        assert_eq!(failure.item(), "retries");
        assert_eq!(failure.message(), "Retries must not be zero.");
        assert_eq!(failure.value(), Some("0"));
    }

    #[test]
    fn test_failures_follow_rule_order() {
        let target = Mailer {
            retries: 0,
            host: "  ".to_string(),
            relay: None,
            endpoint: "not a uri".to_string(),
            sender: "a@@b".to_string(),
            ip: "999.1.1.1".to_string(),
        };
        let failures = run_all(&target);

        let items: Vec<&str> = failures.iter().map(ValidationItem::item).collect();
        assert_eq!(
            items,
            vec![
                "retries", "host", "relay", "endpoint", "sender", "ip", "ip", "endpoint",
                "endpoint",
            ]
        );
        assert_eq!(failures[2].value(), None);
    }

    #[test]
    fn test_negative_values_pass_not_zero() {
        let target = Mailer {
            retries: -1,
            ..valid()
        };
        assert!(run_all(&target).is_empty());
    }

    #[test]
    fn test_private_ip_fails_only_public_rule() {
        let target = Mailer {
            ip: "10.0.0.5".to_string(),
            ..valid()
        };
        let failures = run_all(&target);
        assert_eq!(failures.len(), 1);
        assert_eq!(failures[0].message(), "IP must be public.");
        assert_eq!(failures[0].value(), Some("10.0.0.5"));
    }

    #[test]
    fn test_starts_with_ignores_case_by_default() {
        let target = Mailer {
            endpoint: "HTTPS://MAIL.EXAMPLE.COM/".to_string(),
            ..valid()
        };
        assert!(run_all(&target).is_empty());
    }

    #[test]
    fn test_case_sensitive_options() {
        let target = Mailer {
            endpoint: "HTTPS://MAIL.EXAMPLE.COM/".to_string(),
            ..valid()
        };
        let options = ValidationOptions::new().with_case_sensitivity(CaseSensitivity::Sensitive);
        let mut rules = ValidationCollector::with_options(&target, options);
        rules.starts_with(field!(Mailer, endpoint), "https", "Endpoint must use TLS.");
        rules.starts_with_case(
            field!(Mailer, endpoint),
            "https",
            CaseSensitivity::Insensitive,
            "Endpoint must use TLS.",
        );

        assert_eq!(rules.failure_count(), 1);
    }

    #[test]
    fn test_capture_values_disabled() {
        let target = Mailer {
            sender: "secret-but-wrong".to_string(),
            ..valid()
        };
        let options = ValidationOptions::new().with_capture_values(false);
        let mut rules = ValidationCollector::with_options(&target, options);
        rules.email(field!(Mailer, sender), "Sender must be an e-mail.");

        assert_eq!(rules.result().len(), 1);
        assert_eq!(rules.result()[0].value(), None);
    }

    #[test]
    fn test_must_uses_explicit_item() {
        let target = Mailer {
            retries: 2,
            ..valid()
        };
        let mut rules = ValidationCollector::new(&target);
        rules.must(
            |m| m.host.contains("example") && m.retries > 10,
            "retries",
            "Combined validations failed.",
        );

        let failures = rules.result();
        assert_eq!(failures.len(), 1);
        assert_eq!(failures[0].item(), "retries");
        assert_eq!(failures[0].value(), None);
    }

    #[test]
    fn test_must_field_records_value() {
        let target = valid();
        let mut rules = ValidationCollector::new(&target);
        rules
            .must_field(field!(Mailer, retries), |r| *r <= 5, "Too many retries.")
            .must_field(field!(Mailer, retries), |r| *r > 5, "Too few retries.");

        assert_eq!(rules.failure_count(), 1);
        assert_eq!(rules.result()[0].message(), "Too few retries.");
        assert_eq!(rules.result()[0].value(), Some("3"));
    }

    #[test]
    fn test_result_is_repeatable() {
        let target = Mailer {
            retries: 0,
            ..valid()
        };
        let mut rules = ValidationCollector::new(&target);
        rules.not_zero(field!(Mailer, retries), "Retries must not be zero.");

        assert_eq!(rules.result().len(), 1);
        assert_eq!(rules.result().len(), 1);
        assert!(!rules.is_valid());

        rules.not_null_or_empty(field!(Mailer, host), "Host is required.");
        assert_eq!(rules.result().len(), 1);
    }

    #[test]
    fn test_collector_does_not_mutate_target() {
        let target = valid();
        let before = format!("{target:?}");
        let _ = run_all(&target);
        assert_eq!(format!("{target:?}"), before);
    }

    #[test]
    #[should_panic(expected = "must not be empty")]
    fn test_empty_message_panics() {
        let target = valid();
        let mut rules = ValidationCollector::new(&target);
        rules.not_zero(field!(Mailer, retries), "");
    }

    #[test]
    #[should_panic(expected = "item name must not be empty")]
    fn test_must_without_item_panics() {
        let target = valid();
        let mut rules = ValidationCollector::new(&target);
        rules.must(|_| true, "", "Never shown.");
    }

    #[test]
    #[should_panic(expected = "section name must not be empty")]
    fn test_empty_section_panics() {
        let target = valid();
        let _ = ValidationCollector::with_section(&target, " ");
    }
}
