use crate::{
    component::{Host, Path, Scheme},
    components::ToComponents,
    error::{Component, ParseError},
    fmt::DisplayAuthority,
    parser::Parser,
    resolve::merge_components,
    validate::{
        is_valid_fragment, is_valid_host, is_valid_pass, is_valid_path, is_valid_query,
        is_valid_scheme, is_valid_user,
    },
    Components,
};
use std::{hash, str::FromStr, sync::OnceLock};

/// An immutable URI reference.
///
/// A `Uri` always holds a decomposed authority. Its string form is built
/// on first use and cached for the lifetime of the value.
///
/// # Examples
///
/// ```
/// use uri_ref::Uri;
///
/// let uri = Uri::parse("foo://user@example.com:8042/over/./there?name=ferret#nose")?;
///
/// assert_eq!(uri.scheme().unwrap().as_str(), "foo");
/// assert_eq!(uri.authority().as_deref(), Some("user@example.com:8042"));
/// assert_eq!(uri.user(), Some("user"));
/// assert_eq!(uri.host(), Some("example.com"));
/// assert_eq!(uri.port(), Some(8042));
/// assert_eq!(uri.path().unwrap(), "/over/there");
/// assert_eq!(uri.query(), Some("name=ferret"));
/// assert_eq!(uri.fragment(), Some("nose"));
///
/// assert_eq!(uri.as_str(), "foo://user@example.com:8042/over/there?name=ferret#nose");
/// # Ok::<_, uri_ref::ParseError>(())
/// ```
#[derive(Clone)]
pub struct Uri {
    components: Components,
    serialized: OnceLock<String>,
}

impl Uri {
    /// Parses a URI reference into a `Uri` with the default [`Parser`].
    ///
    /// # Errors
    ///
    /// Returns `Err` if any component is invalid.
    pub fn parse(s: &str) -> Result<Uri, ParseError> {
        Parser::new().parse(s).map(Uri::from_decomposed)
    }

    /// Creates a `Uri` from components, decomposing the authority if needed.
    ///
    /// Every component is validated as [`Uri::parse`] would, and the
    /// components must serialize to a string that parses back to them:
    ///
    /// - A password needs a user, and a user or port needs a non-empty host.
    /// - A non-empty path after an authority must start with `/`.
    /// - Without scheme and authority, the first path segment must not
    ///   contain `:`.
    ///
    /// The path is taken as it is, without removing dot segments. Since there
    /// is no input string, the index of a returned error is always 0.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the undecomposed authority is malformed or if any
    /// component is invalid.
    ///
    /// # Examples
    ///
    /// ```
    /// use uri_ref::{Component, Components, Uri};
    ///
    /// let c = Components {
    ///     host: Some("example.com".to_owned()),
    ///     pass: Some("secret".to_owned()),
    ///     ..Components::default()
    /// };
    /// let e = Uri::from_components(c).unwrap_err();
    /// assert_eq!(e.component(), Some(Component::Pass));
    /// ```
    pub fn from_components(components: Components) -> Result<Uri, ParseError> {
        let components = components.expand_authority()?;
        check_components(&components)?;
        Ok(Uri::from_decomposed(components))
    }

    pub(crate) fn from_decomposed(components: Components) -> Uri {
        debug_assert!(components.authority.is_none());
        Uri {
            components,
            serialized: OnceLock::new(),
        }
    }

    /// Returns the scheme component.
    #[must_use]
    pub fn scheme(&self) -> Option<&Scheme> {
        self.components
            .scheme
            .as_deref()
            .map(Scheme::new_validated)
    }

    /// Returns the user of the userinfo.
    #[must_use]
    pub fn user(&self) -> Option<&str> {
        self.components.user.as_deref()
    }

    /// Returns the password of the userinfo.
    #[must_use]
    pub fn pass(&self) -> Option<&str> {
        self.components.pass.as_deref()
    }

    /// Returns the userinfo, i.e., `user[:pass]`.
    #[must_use]
    pub fn userinfo(&self) -> Option<String> {
        let user = self.components.user.as_deref()?;
        Some(match &self.components.pass {
            Some(pass) => format!("{user}:{pass}"),
            None => user.to_owned(),
        })
    }

    /// Returns the host, `Some("")` if the authority is present but empty.
    #[must_use]
    pub fn host(&self) -> Option<&str> {
        self.components.host.as_deref()
    }

    /// Returns the host, parsed as an IP address where possible.
    ///
    /// ```
    /// use std::net::Ipv4Addr;
    /// use uri_ref::{component::Host, Uri};
    ///
    /// let uri = Uri::parse("telnet://192.0.2.16:80/")?;
    /// assert_eq!(uri.host_parsed(), Some(Host::Ipv4(Ipv4Addr::new(192, 0, 2, 16))));
    /// # Ok::<_, uri_ref::ParseError>(())
    /// ```
    #[must_use]
    pub fn host_parsed(&self) -> Option<Host<'_>> {
        self.host().map(Host::parse)
    }

    /// Returns the port.
    #[must_use]
    pub fn port(&self) -> Option<u16> {
        self.components.port
    }

    /// Returns the authority rebuilt as `[userinfo@]host[:port]`.
    #[must_use]
    pub fn authority(&self) -> Option<String> {
        self.components
            .has_authority()
            .then(|| DisplayAuthority(&self.components).to_string())
    }

    /// Returns the path component.
    ///
    /// The path is `None` only for a `Uri` built from components without a path.
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        self.components.path.as_deref().map(Path::new)
    }

    /// Returns the query component.
    #[must_use]
    pub fn query(&self) -> Option<&str> {
        self.components.query.as_deref()
    }

    /// Returns the fragment component.
    #[must_use]
    pub fn fragment(&self) -> Option<&str> {
        self.components.fragment.as_deref()
    }

    /// Returns the components.
    #[must_use]
    pub fn components(&self) -> &Components {
        &self.components
    }

    /// Consumes the `Uri` and returns its components.
    #[must_use]
    pub fn into_components(self) -> Components {
        self.components
    }

    /// Checks whether the scheme is present.
    #[must_use]
    pub fn is_absolute(&self) -> bool {
        self.components.is_absolute()
    }

    /// Returns the string form of the `Uri`.
    ///
    /// Absent components contribute nothing, not even their delimiter,
    /// whereas empty ones still contribute their delimiter.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.serialized
            .get_or_init(|| self.components.to_string())
    }

    /// Resolves a reference using `self` as the base.
    ///
    /// Returns a clone of `self` if the reference cannot be parsed.
    ///
    /// # Examples
    ///
    /// ```
    /// use uri_ref::Uri;
    ///
    /// let base = Uri::parse("http://a/b/c/d;p?q")?;
    /// assert_eq!(base.resolve_ref("../g"), "http://a/b/g");
    /// assert_eq!(base.resolve_ref("#s"), "http://a/b/c/d;p?q#s");
    /// assert_eq!(base.resolve_ref("g h"), base);
    /// # Ok::<_, uri_ref::ParseError>(())
    /// ```
    #[must_use]
    pub fn resolve_ref<R: ToComponents + ?Sized>(&self, reference: &R) -> Uri {
        match reference.to_components() {
            Ok(r) => Uri::from_decomposed(merge_components(&r, &self.components)),
            Err(_e) => {
                #[cfg(feature = "tracing")]
                tracing::debug!(error = %_e, base = %self, "unparsable reference, resolution skipped");
                self.clone()
            }
        }
    }

    /// Resolves `self` as a reference against the given base.
    ///
    /// Returns a clone of `self` if it is already absolute or if the base
    /// cannot be parsed.
    ///
    /// # Examples
    ///
    /// ```
    /// use uri_ref::Uri;
    ///
    /// let r = Uri::parse("../g?y")?;
    /// assert!(!r.is_absolute());
    /// assert_eq!(r.resolve("http://a/b/c/d;p?q"), "http://a/b/g?y");
    /// assert_eq!(r.resolve("http://a/%zz"), r);
    /// # Ok::<_, uri_ref::ParseError>(())
    /// ```
    #[must_use]
    pub fn resolve<B: ToComponents + ?Sized>(&self, base: &B) -> Uri {
        if self.is_absolute() {
            return self.clone();
        }
        match base.to_components() {
            Ok(base) => Uri::from_decomposed(merge_components(&self.components, &base)),
            Err(_e) => {
                #[cfg(feature = "tracing")]
                tracing::debug!(error = %_e, reference = %self, "unparsable base, resolution skipped");
                self.clone()
            }
        }
    }
}

/// Checks decomposed components that did not come from the parser.
fn check_components(c: &Components) -> Result<(), ParseError> {
    let invalid = |component| Err(ParseError::invalid(0, component));

    if let Some(scheme) = &c.scheme {
        if !is_valid_scheme(scheme) {
            return invalid(Component::Scheme);
        }
    }

    match (&c.user, &c.pass) {
        (None, Some(_)) => return invalid(Component::Pass),
        (Some(user), pass) => {
            if !is_valid_user(user) {
                return invalid(Component::User);
            }
            if pass.as_deref().is_some_and(|pass| !is_valid_pass(pass)) {
                return invalid(Component::Pass);
            }
        }
        (None, None) => {}
    }

    match c.host.as_deref() {
        None if c.user.is_some() => return invalid(Component::User),
        None if c.port.is_some() => return invalid(Component::Port),
        // An empty host is only allowed as an empty authority.
        Some("") if c.user.is_some() || c.port.is_some() => return invalid(Component::Host),
        Some(host) if !host.is_empty() && !is_valid_host(host) => {
            return invalid(Component::Host)
        }
        _ => {}
    }

    if let Some(path) = &c.path {
        if !is_valid_path(path) {
            return invalid(Component::Path);
        }
        if c.has_authority() {
            if !path.is_empty() && !path.starts_with('/') {
                return invalid(Component::Path);
            }
        } else if c.scheme.is_none() && path.split('/').next().is_some_and(|s| s.contains(':')) {
            // Would be read back as a scheme.
            return invalid(Component::Path);
        }
    }

    if c.query.as_deref().is_some_and(|q| !is_valid_query(q)) {
        return invalid(Component::Query);
    }
    if c.fragment.as_deref().is_some_and(|f| !is_valid_fragment(f)) {
        return invalid(Component::Fragment);
    }
    Ok(())
}

impl FromStr for Uri {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uri::parse(s)
    }
}

impl TryFrom<Components> for Uri {
    type Error = ParseError;

    fn try_from(components: Components) -> Result<Self, Self::Error> {
        Uri::from_components(components)
    }
}

impl From<Uri> for Components {
    fn from(uri: Uri) -> Self {
        uri.components
    }
}

impl PartialEq for Uri {
    fn eq(&self, other: &Self) -> bool {
        self.components == other.components
    }
}

impl Eq for Uri {}

impl PartialEq<str> for Uri {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl PartialEq<&str> for Uri {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

impl hash::Hash for Uri {
    fn hash<H: hash::Hasher>(&self, state: &mut H) {
        self.components.hash(state);
    }
}

impl AsRef<str> for Uri {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
