//! Typed views of URI components.

use crate::{ip, validate::is_valid_scheme};
use ref_cast::{ref_cast_custom, RefCastCustom};
use std::net::{Ipv4Addr, Ipv6Addr};

/// A [scheme] component.
///
/// [scheme]: https://datatracker.ietf.org/doc/html/rfc3986#section-3.1
///
/// # Comparison
///
/// `Scheme`s are compared case-insensitively. You should do a case-insensitive
/// comparison if the scheme specification allows both letter cases in the scheme name.
///
/// # Examples
///
/// ```
/// use uri_ref::{component::Scheme, Uri};
///
/// let uri = Uri::parse("HTTP://EXAMPLE.COM/")?;
/// let scheme = uri.scheme().unwrap();
///
/// // Case-insensitive comparison.
/// assert_eq!(scheme, Scheme::new("http").unwrap());
/// // Case-sensitive comparison.
/// assert_eq!(scheme.as_str(), "HTTP");
/// # Ok::<_, uri_ref::ParseError>(())
/// ```
#[derive(RefCastCustom)]
#[repr(transparent)]
pub struct Scheme {
    inner: str,
}

impl Scheme {
    #[ref_cast_custom]
    #[inline]
    pub(crate) const fn new_validated(scheme: &str) -> &Scheme;

    /// Converts a string slice to `&Scheme`, returning `None` if it is not a valid scheme.
    #[inline]
    #[must_use]
    pub fn new(s: &str) -> Option<&Scheme> {
        is_valid_scheme(s).then(|| Scheme::new_validated(s))
    }

    /// Returns the scheme component as a string slice.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.inner
    }
}

impl PartialEq for Scheme {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.inner.eq_ignore_ascii_case(&other.inner)
    }
}

impl Eq for Scheme {}

/// A [path] component.
///
/// [path]: https://datatracker.ietf.org/doc/html/rfc3986#section-3.3
#[derive(RefCastCustom)]
#[repr(transparent)]
pub struct Path {
    inner: str,
}

impl Path {
    #[ref_cast_custom]
    #[inline]
    pub(crate) const fn new(path: &str) -> &Path;

    /// Returns the path component as a string slice.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.inner
    }

    /// Checks whether the path is empty.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Checks whether the path is absolute, i.e., starting with `'/'`.
    #[inline]
    #[must_use]
    pub fn is_absolute(&self) -> bool {
        self.inner.starts_with('/')
    }

    /// Checks whether the path is rootless, i.e., not starting with `'/'`
    /// and not empty.
    #[inline]
    #[must_use]
    pub fn is_rootless(&self) -> bool {
        !self.inner.is_empty() && !self.is_absolute()
    }

    /// Returns an iterator over the path segments, separated by `'/'`,
    /// if the path is absolute.
    ///
    /// # Examples
    ///
    /// ```
    /// use uri_ref::Uri;
    ///
    /// // The empty string before a leading '/' is not a segment.
    /// // However, segments can be empty in the other cases.
    /// let uri = Uri::parse("file:///path/to//dir/")?;
    /// let path = uri.path().unwrap();
    /// assert!(path.segments_if_absolute().unwrap().eq(["path", "to", "", "dir", ""]));
    ///
    /// let uri = Uri::parse("foo:bar/baz")?;
    /// assert!(uri.path().unwrap().segments_if_absolute().is_none());
    /// # Ok::<_, uri_ref::ParseError>(())
    /// ```
    #[must_use]
    pub fn segments_if_absolute(&self) -> Option<core::str::Split<'_, char>> {
        self.inner.strip_prefix('/').map(|s| s.split('/'))
    }
}

impl PartialEq for Path {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.inner == other.inner
    }
}

impl Eq for Path {}

impl PartialEq<str> for Path {
    fn eq(&self, other: &str) -> bool {
        self.inner == *other
    }
}

impl PartialEq<&str> for Path {
    fn eq(&self, other: &&str) -> bool {
        self.inner == **other
    }
}

/// A parsed host component.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Host<'a> {
    /// An IPv4 address.
    Ipv4(Ipv4Addr),
    /// An IPv6 address.
    Ipv6(Ipv6Addr),
    /// A registered name, possibly empty or percent-encoded.
    RegName(&'a str),
}

impl<'a> Host<'a> {
    /// Parses a host, falling back to a registered name if it is not an IP address.
    ///
    /// ```
    /// use std::net::Ipv6Addr;
    /// use uri_ref::component::Host;
    ///
    /// assert_eq!(Host::parse("[::1]"), Host::Ipv6(Ipv6Addr::LOCALHOST));
    /// assert_eq!(Host::parse("localhost"), Host::RegName("localhost"));
    /// ```
    #[must_use]
    pub fn parse(host: &'a str) -> Host<'a> {
        if let Some(addr) = host
            .strip_prefix('[')
            .and_then(|s| s.strip_suffix(']'))
            .and_then(|s| ip::parse_v6(s.as_bytes()))
        {
            Host::Ipv6(addr)
        } else if let Some(addr) = ip::parse_v4(host.as_bytes()) {
            Host::Ipv4(addr)
        } else {
            Host::RegName(host)
        }
    }
}
