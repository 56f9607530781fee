//! Built-in rule predicates.
//!
//! Every predicate is a pure function returning `true` when the value is
//! acceptable. Text predicates take `Option<&str>` and treat `None` as invalid.
//! Parse failures count as a failed check; nothing here panics or errors.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::net::Ipv4Addr;
use std::sync::LazyLock;

/// WHATWG "valid e-mail address" grammar: `local-part@domain`, domain made of
/// dot-separated labels of at most 63 characters.
static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$",
    )
    .expect("email pattern is valid")
});

/// RFC 3986 absolute URI: a scheme, then only unreserved, reserved and
/// percent-encoded characters.
static URI_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z][A-Za-z0-9+.\-]*:(?:[A-Za-z0-9\-._~:/?#\[\]@!$&'()*+,;=]|%[0-9A-Fa-f]{2})*$")
        .expect("uri pattern is valid")
});

/// IPv4 blocks that are not publicly routable.
///
/// Taken from the IANA IPv4 Special-Purpose Address Registry, plus multicast
/// and the reserved 240.0.0.0/4 block (which covers limited broadcast).
pub const RESERVED_IPV4_BLOCKS: &[(Ipv4Addr, u8)] = &[
    (Ipv4Addr::new(0, 0, 0, 0), 8),      // "this network"
    (Ipv4Addr::new(10, 0, 0, 0), 8),     // private
    (Ipv4Addr::new(100, 64, 0, 0), 10),  // shared address space (CGNAT)
    (Ipv4Addr::new(127, 0, 0, 0), 8),    // loopback
    (Ipv4Addr::new(169, 254, 0, 0), 16), // link-local
    (Ipv4Addr::new(172, 16, 0, 0), 12),  // private
    (Ipv4Addr::new(192, 0, 0, 0), 24),   // IETF protocol assignments
    (Ipv4Addr::new(192, 0, 2, 0), 24),   // TEST-NET-1
    (Ipv4Addr::new(192, 88, 99, 0), 24), // 6to4 relay anycast
    (Ipv4Addr::new(192, 168, 0, 0), 16), // private
    (Ipv4Addr::new(198, 18, 0, 0), 15),  // benchmarking
    (Ipv4Addr::new(198, 51, 100, 0), 24), // TEST-NET-2
    (Ipv4Addr::new(203, 0, 113, 0), 24), // TEST-NET-3
    (Ipv4Addr::new(224, 0, 0, 0), 4),    // multicast
    (Ipv4Addr::new(240, 0, 0, 0), 4),    // reserved, broadcast
];

/// How `starts_with`/`ends_with` compare text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CaseSensitivity {
    /// Compare ignoring letter case.
    #[default]
    Insensitive,
    /// Compare exactly.
    Sensitive,
}

/// Integer types that the not-zero rule applies to.
pub trait Zeroable {
    /// Whether the value equals zero.
    fn is_zero(&self) -> bool;
}

macro_rules! impl_zeroable {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Zeroable for $ty {
                fn is_zero(&self) -> bool {
                    *self == 0
                }
            }
        )*
    };
}

impl_zeroable!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

/// `true` unless the value is zero. Negative values pass.
pub fn is_not_zero<V: Zeroable + ?Sized>(value: &V) -> bool {
    !value.is_zero()
}

/// `true` when the text is present and contains something besides whitespace.
pub fn is_not_null_or_empty(value: Option<&str>) -> bool {
    value.is_some_and(|v| !v.trim().is_empty())
}

/// `true` when the text is a well-formed absolute URI (RFC 3986).
///
/// The text must match the URI grammar as written. An authority is only
/// accepted when it is introduced by `//`, so inputs like `https:example.com`
/// fail even though a browser would repair them.
pub fn is_uri(value: Option<&str>) -> bool {
    value.is_some_and(|v| {
        if !URI_RE.is_match(v) {
            return false;
        }
        match url::Url::parse(v) {
            Ok(url) => !url.has_authority() || v[url.scheme().len() + 1..].starts_with("//"),
            Err(_) => false,
        }
    })
}

/// `true` when the text is a well-formed e-mail address.
pub fn is_email(value: Option<&str>) -> bool {
    value.is_some_and(|v| EMAIL_RE.is_match(v))
}

/// `true` when the text is four dot-separated decimal octets in 0-255.
pub fn is_ipv4(value: Option<&str>) -> bool {
    parse_ipv4(value).is_some()
}

/// `true` when the text is a well-formed IPv4 address outside every
/// [reserved block](RESERVED_IPV4_BLOCKS).
pub fn is_public_ipv4(value: Option<&str>) -> bool {
    parse_ipv4(value).is_some_and(|addr| !is_reserved_ipv4(addr))
}

/// Whether `addr` falls into one of the [reserved blocks](RESERVED_IPV4_BLOCKS).
pub fn is_reserved_ipv4(addr: Ipv4Addr) -> bool {
    let addr = u32::from(addr);
    RESERVED_IPV4_BLOCKS.iter().any(|&(network, prefix)| {
        let mask = u32::MAX << (32 - u32::from(prefix));
        addr & mask == u32::from(network)
    })
}

/// `true` when the text begins with `prefix`.
pub fn starts_with(value: Option<&str>, prefix: &str, case: CaseSensitivity) -> bool {
    value.is_some_and(|v| match case {
        CaseSensitivity::Sensitive => v.starts_with(prefix),
        CaseSensitivity::Insensitive => v.to_lowercase().starts_with(&prefix.to_lowercase()),
    })
}

/// `true` when the text ends with `suffix`.
pub fn ends_with(value: Option<&str>, suffix: &str, case: CaseSensitivity) -> bool {
    value.is_some_and(|v| match case {
        CaseSensitivity::Sensitive => v.ends_with(suffix),
        CaseSensitivity::Insensitive => v.to_lowercase().ends_with(&suffix.to_lowercase()),
    })
}

/// Apply an arbitrary predicate to a value.
pub fn satisfies<V: ?Sized, P>(value: &V, predicate: P) -> bool
where
    P: FnOnce(&V) -> bool,
{
    predicate(value)
}

fn parse_ipv4(value: Option<&str>) -> Option<Ipv4Addr> {
    value.and_then(|v| v.parse::<Ipv4Addr>().ok())
}
