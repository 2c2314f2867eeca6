//! Per-component validators.
//!
//! Each function checks a single component against its grammar and has no
//! side effects. Percent-encoded octets are accepted wherever RFC 3986
//! allows them, but are not decoded.

use crate::{
    ip,
    parser::parse_authority,
    table::{PATH, QUERY_FRAGMENT, REG_NAME, SCHEME, USERINFO},
};

/// Maximum length of a host in bytes.
pub const MAX_HOST_LEN: usize = 253;

/// Maximum length of a host label in bytes.
pub const MAX_LABEL_LEN: usize = 63;

/// Checks whether a string is a valid scheme.
///
/// ```
/// use uri_ref::validate::is_valid_scheme;
///
/// assert!(is_valid_scheme("svn+ssh"));
/// assert!(!is_valid_scheme("1http"));
/// assert!(!is_valid_scheme(""));
/// ```
#[must_use]
pub fn is_valid_scheme(scheme: &str) -> bool {
    matches!(scheme.as_bytes(), [first, rem @ ..]
        if first.is_ascii_alphabetic() && SCHEME.validate(rem))
}

/// Checks whether a string is a valid user name.
#[must_use]
pub fn is_valid_user(user: &str) -> bool {
    USERINFO.validate(user.as_bytes())
}

/// Checks whether a string is a valid password.
#[must_use]
pub fn is_valid_pass(pass: &str) -> bool {
    USERINFO.validate(pass.as_bytes())
}

/// Checks whether a string is a valid userinfo, i.e., `user[:pass]`.
#[must_use]
pub fn is_valid_userinfo(userinfo: &str) -> bool {
    match userinfo.split_once(':') {
        Some((user, pass)) => is_valid_user(user) && is_valid_pass(pass),
        None => is_valid_user(userinfo),
    }
}

/// Checks whether a string is a valid host.
///
/// The host is tried as an IPv6 literal when it starts with `[`, as a
/// dotted-quad IPv4 address when it starts with a digit, and as a sequence
/// of dot-separated labels otherwise. Every label must be 1 to 63 bytes
/// long and the whole host at most 253 bytes.
///
/// A host starting with a digit is never checked against the label rules,
/// so `256.1.1.1` and `1example.com` are both rejected.
///
/// ```
/// use uri_ref::validate::is_valid_host;
///
/// assert!(is_valid_host("[::1]"));
/// assert!(is_valid_host("127.0.0.1"));
/// assert!(is_valid_host("example.com"));
/// assert!(!is_valid_host("256.1.1.1"));
/// assert!(!is_valid_host("example..com"));
/// ```
#[must_use]
pub fn is_valid_host(host: &str) -> bool {
    if host.is_empty() || host.len() > MAX_HOST_LEN {
        return false;
    }

    if let Some(rem) = host.strip_prefix('[') {
        return match rem.strip_suffix(']') {
            Some(addr) => ip::parse_v6(addr.as_bytes()).is_some(),
            None => false,
        };
    }

    if host.as_bytes()[0].is_ascii_digit() {
        return ip::parse_v4(host.as_bytes()).is_some();
    }

    host.split('.').all(|label| {
        !label.is_empty() && label.len() <= MAX_LABEL_LEN && REG_NAME.validate(label.as_bytes())
    })
}

/// Checks whether a port number is within `0..=65535`.
#[must_use]
pub fn is_valid_port(port: u64) -> bool {
    port <= u16::MAX as u64
}

/// Checks whether a string is a valid authority, i.e., `[userinfo@]host[:port]`.
///
/// An empty authority is valid.
#[must_use]
pub fn is_valid_authority(authority: &str) -> bool {
    authority.is_empty() || parse_authority(authority, true).is_ok()
}

/// Checks whether a string is a valid path.
#[must_use]
pub fn is_valid_path(path: &str) -> bool {
    PATH.validate(path.as_bytes())
}

/// Checks whether a string is a valid query.
#[must_use]
pub fn is_valid_query(query: &str) -> bool {
    QUERY_FRAGMENT.validate(query.as_bytes())
}

/// Checks whether a string is a valid fragment.
#[must_use]
pub fn is_valid_fragment(fragment: &str) -> bool {
    QUERY_FRAGMENT.validate(fragment.as_bytes())
}
