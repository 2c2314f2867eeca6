//! Error types.

use core::fmt;

/// A component of a URI reference, used to tell which part failed validation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Component {
    /// The scheme, e.g. `http`.
    Scheme,
    /// The user part of the userinfo.
    User,
    /// The password part of the userinfo.
    Pass,
    /// The host, including the brackets of an IP literal.
    Host,
    /// The port.
    Port,
    /// The path.
    Path,
    /// The query, without the leading `?`.
    Query,
    /// The fragment, without the leading `#`.
    Fragment,
    /// The undecomposed authority.
    Authority,
}

impl Component {
    fn as_str(self) -> &'static str {
        match self {
            Self::Scheme => "scheme",
            Self::User => "user",
            Self::Pass => "password",
            Self::Host => "host",
            Self::Port => "port",
            Self::Path => "path",
            Self::Query => "query",
            Self::Fragment => "fragment",
            Self::Authority => "authority",
        }
    }
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Detailed cause of an [`AuthorityError`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthorityErrorKind {
    /// The authority is not of the form `[userinfo "@"] host [":" port]`.
    ///
    /// This covers an empty host, an unclosed IP literal, and a port
    /// that is empty or not made of digits.
    Malformed,
    /// A decomposed part of the authority failed validation.
    InvalidComponent(Component),
}

/// An error occurred when decomposing an authority.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AuthorityError {
    pub(crate) index: usize,
    pub(crate) kind: AuthorityErrorKind,
}

impl AuthorityError {
    /// Returns the index in the authority where the offending part starts.
    #[inline]
    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Returns the detailed cause of the error.
    #[inline]
    #[must_use]
    pub fn kind(&self) -> AuthorityErrorKind {
        self.kind
    }
}

impl fmt::Display for AuthorityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            AuthorityErrorKind::Malformed => {
                write!(f, "malformed authority at index {}", self.index)
            }
            AuthorityErrorKind::InvalidComponent(c) => {
                write!(f, "invalid {c} in authority at index {}", self.index)
            }
        }
    }
}

#[cfg(feature = "impl-error")]
impl std::error::Error for AuthorityError {}

/// Detailed cause of a [`ParseError`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// The input does not match the generic URI syntax.
    Malformed,
    /// A component failed validation.
    ///
    /// The error index points to the start of the component.
    InvalidComponent(Component),
    /// The authority could not be decomposed.
    ///
    /// The error index points to the offending part inside the authority.
    InvalidAuthority(AuthorityErrorKind),
}

/// An error occurred when parsing a URI reference.
///
/// No partially parsed value is ever returned alongside it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ParseError {
    pub(crate) index: usize,
    pub(crate) kind: ParseErrorKind,
}

impl ParseError {
    pub(crate) fn invalid(index: usize, component: Component) -> Self {
        ParseError {
            index,
            kind: ParseErrorKind::InvalidComponent(component),
        }
    }

    /// Wraps an authority error, shifting its index by the start of the authority.
    pub(crate) fn from_authority(offset: usize, e: AuthorityError) -> Self {
        ParseError {
            index: offset + e.index,
            kind: ParseErrorKind::InvalidAuthority(e.kind),
        }
    }

    /// Returns the index where the error occurred in the input string.
    #[inline]
    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Returns the detailed cause of the error.
    #[inline]
    #[must_use]
    pub fn kind(&self) -> ParseErrorKind {
        self.kind
    }

    /// Returns the component that failed, if any single one did.
    #[must_use]
    pub fn component(&self) -> Option<Component> {
        match self.kind {
            ParseErrorKind::Malformed => None,
            ParseErrorKind::InvalidComponent(c) => Some(c),
            ParseErrorKind::InvalidAuthority(AuthorityErrorKind::InvalidComponent(c)) => Some(c),
            ParseErrorKind::InvalidAuthority(AuthorityErrorKind::Malformed) => {
                Some(Component::Authority)
            }
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            ParseErrorKind::Malformed => write!(f, "malformed URI reference"),
            ParseErrorKind::InvalidComponent(c) => write!(f, "invalid {c} at index {}", self.index),
            ParseErrorKind::InvalidAuthority(AuthorityErrorKind::Malformed) => {
                write!(f, "malformed authority at index {}", self.index)
            }
            ParseErrorKind::InvalidAuthority(AuthorityErrorKind::InvalidComponent(c)) => {
                write!(f, "invalid {c} in authority at index {}", self.index)
            }
        }
    }
}

#[cfg(feature = "impl-error")]
impl std::error::Error for ParseError {}
