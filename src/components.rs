use crate::{
    error::ParseError,
    parser::{parse_authority, Parser},
    Uri,
};
use std::borrow::Cow;

/// The components of a URI reference.
///
/// Every optional string field distinguishes an absent component (`None`)
/// from a present but empty one (`Some("")`). In particular, `host` being
/// `Some("")` means that the authority is present but empty, as in
/// `file:///etc`, whereas `None` means there is no authority at all.
///
/// The authority is either decomposed into `user`, `pass`, `host` and `port`,
/// or kept undecomposed in `authority` when parsed with
/// [`Parser::expand_authority(false)`](Parser::expand_authority).
/// The two forms are not meant to be mixed.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Components {
    /// The scheme, never empty when present.
    pub scheme: Option<String>,
    /// The user of the userinfo.
    pub user: Option<String>,
    /// The password of the userinfo, only present along with `user`.
    pub pass: Option<String>,
    /// The host, including the brackets of an IP literal.
    pub host: Option<String>,
    /// The port.
    pub port: Option<u16>,
    /// The undecomposed authority.
    pub authority: Option<String>,
    /// The path.
    pub path: Option<String>,
    /// The query.
    pub query: Option<String>,
    /// The fragment.
    pub fragment: Option<String>,
}

impl Components {
    /// Checks whether an authority is present, in either form.
    #[inline]
    #[must_use]
    pub fn has_authority(&self) -> bool {
        self.host.is_some() || self.authority.is_some()
    }

    /// Checks whether a scheme is present.
    #[inline]
    #[must_use]
    pub fn is_absolute(&self) -> bool {
        self.scheme.is_some()
    }

    /// Decomposes the undecomposed authority, if any.
    ///
    /// When `host` is already present, the undecomposed authority is
    /// discarded in favor of the decomposed fields.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the undecomposed authority is malformed or invalid.
    pub fn expand_authority(mut self) -> Result<Components, ParseError> {
        let Some(authority) = self.authority.take() else {
            return Ok(self);
        };
        if self.host.is_some() {
            return Ok(self);
        }

        if authority.is_empty() {
            self.user = None;
            self.pass = None;
            self.host = Some(authority);
            self.port = None;
        } else {
            let parts =
                parse_authority(&authority, true).map_err(|e| ParseError::from_authority(0, e))?;
            self.user = parts.user;
            self.pass = parts.pass;
            self.host = Some(parts.host);
            self.port = parts.port;
        }
        Ok(self)
    }
}

/// A source of decomposed components to resolve with.
///
/// This is implemented for strings, which are parsed with the default
/// [`Parser`], for [`Uri`], and for [`Components`], whose undecomposed
/// authority is expanded.
pub trait ToComponents {
    /// Returns the components with a decomposed authority.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the source cannot be parsed.
    fn to_components(&self) -> Result<Cow<'_, Components>, ParseError>;
}

impl ToComponents for str {
    fn to_components(&self) -> Result<Cow<'_, Components>, ParseError> {
        Parser::new().parse(self).map(Cow::Owned)
    }
}

impl ToComponents for String {
    fn to_components(&self) -> Result<Cow<'_, Components>, ParseError> {
        self.as_str().to_components()
    }
}

impl ToComponents for Uri {
    fn to_components(&self) -> Result<Cow<'_, Components>, ParseError> {
        Ok(Cow::Borrowed(self.components()))
    }
}

impl ToComponents for Components {
    fn to_components(&self) -> Result<Cow<'_, Components>, ParseError> {
        if self.authority.is_none() {
            Ok(Cow::Borrowed(self))
        } else {
            self.clone().expand_authority().map(Cow::Owned)
        }
    }
}

impl<T: ToComponents + ?Sized> ToComponents for &T {
    fn to_components(&self) -> Result<Cow<'_, Components>, ParseError> {
        (**self).to_components()
    }
}
