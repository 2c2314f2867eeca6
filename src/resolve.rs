//! Module for reference resolution.

use crate::{
    components::ToComponents, error::ParseError, normalize::remove_dot_segments, Components, Uri,
};

/// A URI reference resolver against a fixed base.
///
/// Unlike [`Uri::resolve_ref`], which falls back to the base when the
/// reference cannot be parsed, this resolver reports the parse error.
///
/// # Examples
///
/// ```
/// use uri_ref::{resolve::Resolver, Uri};
///
/// let base = Uri::parse("http://example.com/foo/bar")?;
/// let resolver = Resolver::with_base(base);
///
/// assert_eq!(resolver.resolve("baz")?, "http://example.com/foo/baz");
/// assert_eq!(resolver.resolve("../baz")?, "http://example.com/baz");
/// assert_eq!(resolver.resolve("?baz")?, "http://example.com/foo/bar?baz");
/// assert!(resolver.resolve("ba^z").is_err());
/// # Ok::<_, uri_ref::ParseError>(())
/// ```
#[derive(Clone, Debug)]
#[must_use]
pub struct Resolver {
    base: Uri,
}

impl Resolver {
    /// Creates a new `Resolver` with the given base.
    pub fn with_base(base: Uri) -> Self {
        Self { base }
    }

    /// Returns the base.
    #[must_use]
    pub fn base(&self) -> &Uri {
        &self.base
    }

    /// Resolves the given reference against the base.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the reference cannot be parsed.
    pub fn resolve<R: ToComponents + ?Sized>(&self, reference: &R) -> Result<Uri, ParseError> {
        let r = reference.to_components()?;
        Ok(Uri::from_decomposed(merge_components(
            &r,
            self.base.components(),
        )))
    }
}

fn copy_authority(dest: &mut Components, src: &Components) {
    dest.user.clone_from(&src.user);
    dest.pass.clone_from(&src.pass);
    dest.host.clone_from(&src.host);
    dest.port = src.port;
    dest.authority.clone_from(&src.authority);
}

/// Merges a reference with a base, as described in
/// [Section 5.2.2 of RFC 3986](https://datatracker.ietf.org/doc/html/rfc3986/#section-5.2.2).
///
/// The authority is copied as a unit, in whichever form it is. The path of
/// the result, if any, has its dot segments removed. The fragment is always
/// taken from the reference.
///
/// A relative path reference is merged with everything before the last `/`
/// of the base path, followed by a `/`. Therefore, when the base path
/// contains no `/` the result is `"/" + reference path`.
///
/// # Examples
///
/// ```
/// use uri_ref::{parse_components, resolve::merge_components};
///
/// let base = parse_components("http://a/b/c/d;p?q#f")?;
/// let r = parse_components("../g?y")?;
///
/// let t = merge_components(&r, &base);
/// assert_eq!(t.host.as_deref(), Some("a"));
/// assert_eq!(t.path.as_deref(), Some("/b/g"));
/// assert_eq!(t.query.as_deref(), Some("y"));
/// assert_eq!(t.fragment, None);
/// # Ok::<_, uri_ref::ParseError>(())
/// ```
#[must_use]
pub fn merge_components(r: &Components, base: &Components) -> Components {
    let mut t;

    if r.scheme.is_some() {
        t = r.clone();
    } else {
        t = Components {
            scheme: base.scheme.clone(),
            ..Components::default()
        };

        if r.has_authority() {
            copy_authority(&mut t, r);
            t.path.clone_from(&r.path);
            t.query.clone_from(&r.query);
        } else {
            copy_authority(&mut t, base);

            let r_path = r.path.as_deref().unwrap_or("");
            let base_path = base.path.as_deref().unwrap_or("");

            if r_path.is_empty() {
                t.path = Some(base_path.to_owned());
                t.query = r.query.clone().or_else(|| base.query.clone());
            } else {
                t.path = Some(if r_path.starts_with('/') {
                    r_path.to_owned()
                } else if base.has_authority() && base_path.is_empty() {
                    format!("/{r_path}")
                } else {
                    let dir = match base_path.rfind('/') {
                        Some(i) => &base_path[..i],
                        None => "",
                    };
                    format!("{dir}/{r_path}")
                });
                t.query.clone_from(&r.query);
            }
        }
    }

    if let Some(path) = t.path.as_mut() {
        *path = remove_dot_segments(path);
    }
    t.fragment.clone_from(&r.fragment);

    t
}
