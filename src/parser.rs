use crate::{
    error::{AuthorityError, AuthorityErrorKind, Component, ParseError, ParseErrorKind},
    normalize::remove_dot_segments,
    validate::{
        is_valid_authority, is_valid_fragment, is_valid_host, is_valid_pass, is_valid_path,
        is_valid_port, is_valid_query, is_valid_scheme, is_valid_user,
    },
    Components,
};

type Result<T, E = ParseError> = core::result::Result<T, E>;

/// Returns immediately with an invalid component error.
macro_rules! err {
    ($index:expr, $component:ident) => {
        return Err(ParseError::invalid($index, Component::$component))
    };
}

/// A configurable URI reference parser.
///
/// Both options default to `true`.
///
/// # Examples
///
/// ```
/// use uri_ref::Parser;
///
/// let c = Parser::new().expand_authority(false).parse("http://user@example.com:81/")?;
/// assert_eq!(c.authority.as_deref(), Some("user@example.com:81"));
/// assert_eq!(c.host, None);
///
/// let c = Parser::new().parse("http://user@example.com:81/")?;
/// assert_eq!(c.authority, None);
/// assert_eq!(c.host.as_deref(), Some("example.com"));
/// assert_eq!(c.port, Some(81));
/// # Ok::<_, uri_ref::ParseError>(())
/// ```
#[derive(Clone, Copy, Debug)]
#[must_use]
pub struct Parser {
    expand_authority: bool,
    validate: bool,
}

impl Parser {
    /// Creates a new `Parser` with default configuration.
    pub fn new() -> Self {
        Self {
            expand_authority: true,
            validate: true,
        }
    }

    /// Sets whether to decompose the authority into user, password, host and port.
    ///
    /// When set to `false`, the authority is kept as is in [`Components::authority`].
    pub fn expand_authority(mut self, value: bool) -> Self {
        self.expand_authority = value;
        self
    }

    /// Sets whether to validate each component against its grammar.
    ///
    /// The structure of the authority and the range of the port are
    /// checked regardless of this setting.
    pub fn validate(mut self, value: bool) -> Self {
        self.validate = value;
        self
    }

    /// Parses a URI reference into its components.
    ///
    /// The path is normalized with [`remove_dot_segments`] if a scheme or
    /// an authority is present, and left as is otherwise.
    ///
    /// # Errors
    ///
    /// Returns `Err` if any component is invalid. No partial result is produced.
    pub fn parse(&self, s: &str) -> Result<Components> {
        let raw = split(s)?;
        let mut out = Components::default();

        if let Some(scheme) = raw.scheme {
            if self.validate && !is_valid_scheme(scheme) {
                err!(0, Scheme);
            }
            out.scheme = Some(scheme.to_owned());
        }

        if let Some((start, authority)) = raw.authority {
            if authority.is_empty() {
                if self.expand_authority {
                    out.host = Some(String::new());
                } else {
                    out.authority = Some(String::new());
                }
            } else if self.expand_authority {
                let parts = parse_authority(authority, self.validate)
                    .map_err(|e| ParseError::from_authority(start, e))?;
                out.user = parts.user;
                out.pass = parts.pass;
                out.host = Some(parts.host);
                out.port = parts.port;
            } else {
                if self.validate && !is_valid_authority(authority) {
                    err!(start, Authority);
                }
                out.authority = Some(authority.to_owned());
            }
        }

        let (start, path) = raw.path;
        if self.validate && !is_valid_path(path) {
            err!(start, Path);
        }
        out.path = Some(if out.scheme.is_some() || out.has_authority() {
            remove_dot_segments(path)
        } else {
            path.to_owned()
        });

        if let Some((start, query)) = raw.query {
            if self.validate && !is_valid_query(query) {
                err!(start, Query);
            }
            out.query = Some(query.to_owned());
        }

        if let Some((start, fragment)) = raw.fragment {
            if self.validate && !is_valid_fragment(fragment) {
                err!(start, Fragment);
            }
            out.fragment = Some(fragment.to_owned());
        }

        Ok(out)
    }
}

impl Default for Parser {
    fn default() -> Self {
        Self::new()
    }
}

/// Parses a URI reference into its components with the default configuration.
///
/// This is a shorthand for `Parser::new().parse(s)`.
///
/// # Errors
///
/// Returns `Err` if any component is invalid.
pub fn parse_components(s: &str) -> Result<Components> {
    Parser::new().parse(s)
}

/// Raw components of a URI reference, each paired with its start index.
///
/// `None` means the component (and its delimiter) is absent, which is
/// different from being present but empty.
struct RawParts<'a> {
    scheme: Option<&'a str>,
    authority: Option<(usize, &'a str)>,
    path: (usize, &'a str),
    query: Option<(usize, &'a str)>,
    fragment: Option<(usize, &'a str)>,
}

/// Splits a URI reference according to the generic syntax in
/// [Appendix B of RFC 3986](https://datatracker.ietf.org/doc/html/rfc3986/#appendix-B):
///
/// ```text
/// ^(([^:/?#]+):)?(//([^/?#]*))?([^?#]*)(\?([^#]*))?(#(.*))?
/// ```
fn split(s: &str) -> Result<RawParts<'_>> {
    let mut pos = 0;

    let scheme = match s.find([':', '/', '?', '#']) {
        Some(i) if i > 0 && s.as_bytes()[i] == b':' => {
            pos = i + 1;
            Some(&s[..i])
        }
        _ => None,
    };

    let authority = match s[pos..].strip_prefix("//") {
        Some(rem) => {
            let start = pos + 2;
            let len = rem.find(['/', '?', '#']).unwrap_or(rem.len());
            pos = start + len;
            Some((start, &rem[..len]))
        }
        None => None,
    };

    let len = s[pos..].find(['?', '#']).unwrap_or(s.len() - pos);
    let path = (pos, &s[pos..pos + len]);
    pos += len;

    let query = match s[pos..].strip_prefix('?') {
        Some(rem) => {
            let start = pos + 1;
            let len = rem.find('#').unwrap_or(rem.len());
            pos = start + len;
            Some((start, &rem[..len]))
        }
        None => None,
    };

    let fragment = match s[pos..].strip_prefix('#') {
        // The generic syntax pattern does not match line feeds in the fragment.
        Some(rem) if rem.contains('\n') => {
            return Err(ParseError {
                index: pos,
                kind: ParseErrorKind::Malformed,
            })
        }
        Some(rem) => Some((pos + 1, rem)),
        None => None,
    };

    Ok(RawParts {
        scheme,
        authority,
        path,
        query,
        fragment,
    })
}

/// Decomposed parts of an authority.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthorityParts {
    /// The user, present if the authority has a userinfo.
    pub user: Option<String>,
    /// The password, present if the userinfo contains a colon.
    pub pass: Option<String>,
    /// The host.
    pub host: String,
    /// The port.
    pub port: Option<u16>,
}

/// Decomposes a non-empty authority into user, password, host and port.
///
/// The authority must be of the form `[userinfo "@"] host [":" port]`,
/// where the userinfo is non-empty, the host is either a bracketed IP literal
/// or a non-empty run of characters other than `:`, and the port is made of
/// one or more digits. The userinfo is split on its first `:` into user
/// and password.
///
/// Checks run in the order port, userinfo, host. The port must fit in
/// `0..=65535` even when `validate` is `false`.
///
/// # Errors
///
/// Returns `Err` if the authority is malformed or if any part is invalid.
///
/// # Examples
///
/// ```
/// use uri_ref::{parse_authority, AuthorityErrorKind, Component};
///
/// let parts = parse_authority("user:@[::1]:8080", true)?;
/// assert_eq!(parts.user.as_deref(), Some("user"));
/// assert_eq!(parts.pass.as_deref(), Some(""));
/// assert_eq!(parts.host, "[::1]");
/// assert_eq!(parts.port, Some(8080));
///
/// let e = parse_authority("example.com:65536", false).unwrap_err();
/// assert_eq!(e.kind(), AuthorityErrorKind::InvalidComponent(Component::Port));
/// assert_eq!(e.index(), 12);
/// # Ok::<_, uri_ref::AuthorityError>(())
/// ```
pub fn parse_authority(
    authority: &str,
    validate: bool,
) -> Result<AuthorityParts, AuthorityError> {
    let malformed = |index| AuthorityError {
        index,
        kind: AuthorityErrorKind::Malformed,
    };
    let invalid = |index, component| AuthorityError {
        index,
        kind: AuthorityErrorKind::InvalidComponent(component),
    };

    let (userinfo, host_start) = match authority.find('@') {
        Some(i) if i > 0 => (Some(&authority[..i]), i + 1),
        _ => (None, 0),
    };
    let rem = &authority[host_start..];

    let host_len = if rem.starts_with('[') {
        match rem.find(']') {
            Some(i) => i + 1,
            None => return Err(malformed(host_start)),
        }
    } else {
        rem.find(':').unwrap_or(rem.len())
    };
    if host_len == 0 {
        return Err(malformed(host_start));
    }
    let host = &rem[..host_len];

    let port_start = host_start + host_len + 1;
    let port = match &rem[host_len..] {
        "" => None,
        s => match s.strip_prefix(':') {
            Some(digits) if !digits.is_empty() && digits.bytes().all(|x| x.is_ascii_digit()) => {
                Some(digits)
            }
            _ => return Err(malformed(port_start - 1)),
        },
    };

    let port = match port {
        Some(digits) => {
            // Leading zeros are allowed, so overflow only means out of range.
            let n = digits.parse::<u64>().unwrap_or(u64::MAX);
            if !is_valid_port(n) {
                return Err(invalid(port_start, Component::Port));
            }
            Some(n as u16)
        }
        None => None,
    };

    let (user, pass) = match userinfo {
        Some(userinfo) => {
            let (user, pass) = match userinfo.split_once(':') {
                Some((user, pass)) => (user, Some(pass)),
                None => (userinfo, None),
            };
            if validate && !is_valid_user(user) {
                return Err(invalid(0, Component::User));
            }
            if let Some(pass) = pass {
                if validate && !is_valid_pass(pass) {
                    return Err(invalid(user.len() + 1, Component::Pass));
                }
            }
            (Some(user.to_owned()), pass.map(str::to_owned))
        }
        None => (None, None),
    };

    if validate && !is_valid_host(host) {
        return Err(invalid(host_start, Component::Host));
    }

    Ok(AuthorityParts {
        user,
        pass,
        host: host.to_owned(),
        port,
    })
}
