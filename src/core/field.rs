//! Typed field selectors and field name derivation.

use crate::error::ContractViolation;
use std::fmt;
use std::marker::PhantomData;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};
use std::path::PathBuf;

/// Build a [`Field`] selector from a member access path.
///
/// The first argument is the type the path is rooted at (often `Self`), the
/// second a dotted path of field names. The display name of the field is the
/// last segment of the path, so renaming the field in code renames it in the
/// reported failures too.
///
/// Only plain identifier paths are accepted. Anything computed (method calls,
/// arithmetic, indexing) does not match the macro and fails to compile.
///
/// # Examples
///
/// ```rust
/// use config_validation::field;
///
/// struct Server { tls: Tls }
/// struct Tls { cert_path: String }
///
/// let selector = field!(Server, tls.cert_path);
/// assert_eq!(selector.name(), "cert_path");
/// ```
#[macro_export]
macro_rules! field {
    ($target:ty, $($segment:ident).+) => {
        $crate::core::Field::<$target, _>::new(
            stringify!($($segment).+),
            |target: &$target| &target.$($segment).+,
        )
    };
}

/// A named, strongly-typed accessor from a target of type `T` to one of its fields.
///
/// Usually created with the [`field!`](crate::field) macro.
pub struct Field<T, V> {
    name: &'static str,
    get: fn(&T) -> &V,
    _target: PhantomData<fn(&T)>,
}

impl<T, V> Field<T, V> {
    /// Create a selector from its source path and accessor.
    ///
    /// # Panics
    ///
    /// Panics if `selector` is not a simple member access path. This is a bug
    /// in the code declaring the rule, never a configuration problem.
    pub fn new(selector: &'static str, get: fn(&T) -> &V) -> Self {
        match Self::try_new(selector, get) {
            Ok(field) => field,
            Err(violation) => panic!("{violation}"),
        }
    }

    /// Create a selector, reporting an invalid path instead of panicking.
    pub fn try_new(selector: &'static str, get: fn(&T) -> &V) -> Result<Self, ContractViolation> {
        let name = identify(selector)?;
        Ok(Self {
            name,
            get,
            _target: PhantomData,
        })
    }

    /// Display name of the field (last segment of the selector path).
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Read the field from `target`.
    pub fn get<'t>(&self, target: &'t T) -> &'t V {
        (self.get)(target)
    }
}

impl<T, V> Clone for Field<T, V> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T, V> Copy for Field<T, V> {}

impl<T, V> fmt::Debug for Field<T, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Field").field("name", &self.name).finish()
    }
}

/// Derive a field's display name from a member access path.
///
/// Returns the terminal segment of a dotted identifier path such as
/// `some_endpoint`, `self.server.port` or `c.tls.cert_path`. Whitespace around
/// the dots is tolerated, since `stringify!` may emit it. Raw identifiers are
/// reported without their `r#` prefix.
///
/// # Errors
///
/// Returns a [`ContractViolation`] when the selector is empty or contains
/// anything besides identifiers separated by dots.
///
/// # Examples
///
/// ```rust
/// use config_validation::core::identify;
///
/// assert_eq!(identify("server.port").unwrap(), "port");
/// assert!(identify("port + 1").is_err());
/// ```
pub fn identify(selector: &str) -> Result<&str, ContractViolation> {
    if selector.trim().is_empty() {
        return Err(ContractViolation::EmptySelector);
    }

    let mut last = "";
    for segment in selector.split('.') {
        let segment = segment.trim();
        if !is_identifier(segment) {
            return Err(ContractViolation::InvalidSelector {
                selector: selector.to_string(),
            });
        }
        last = segment.strip_prefix("r#").unwrap_or(segment);
    }
    Ok(last)
}

fn is_identifier(segment: &str) -> bool {
    let segment = segment.strip_prefix("r#").unwrap_or(segment);
    let mut chars = segment.chars();
    match chars.next() {
        Some(first) if first == '_' || first.is_alphabetic() => {}
        _ => return false,
    }
    if segment == "_" {
        return false;
    }
    chars.all(|c| c == '_' || c.is_alphanumeric())
}

/// Field types that text rules can inspect.
///
/// `None` stands for a null value and fails every text rule.
pub trait FieldText {
    /// The field's text, or `None` when the field is null.
    fn text(&self) -> Option<&str>;
}

impl FieldText for String {
    fn text(&self) -> Option<&str> {
        Some(self)
    }
}

impl FieldText for &str {
    fn text(&self) -> Option<&str> {
        Some(self)
    }
}

impl FieldText for Option<String> {
    fn text(&self) -> Option<&str> {
        self.as_deref()
    }
}

impl FieldText for Option<&str> {
    fn text(&self) -> Option<&str> {
        *self
    }
}

/// Field types whose value can be recorded in a failure.
pub trait DisplayValue {
    /// The value rendered for display, or `None` when the field is null.
    fn display_value(&self) -> Option<String>;
}

macro_rules! impl_display_value {
    ($($ty:ty),* $(,)?) => {
        $(
            impl DisplayValue for $ty {
                fn display_value(&self) -> Option<String> {
                    Some(self.to_string())
                }
            }
        )*
    };
}

impl_display_value!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, bool, char,
    String, &str, IpAddr, Ipv4Addr, Ipv6Addr,
);

impl DisplayValue for PathBuf {
    fn display_value(&self) -> Option<String> {
        Some(self.display().to_string())
    }
}

impl<V: DisplayValue> DisplayValue for Option<V> {
    fn display_value(&self) -> Option<String> {
        self.as_ref().and_then(DisplayValue::display_value)
    }
}

impl<V: DisplayValue> DisplayValue for Vec<V> {
    fn display_value(&self) -> Option<String> {
        let rendered: Vec<String> = self
            .iter()
            .map(|v| v.display_value().unwrap_or_else(|| "null".to_string()))
            .collect();
        Some(format!("[{}]", rendered.join(", ")))
    }
}
