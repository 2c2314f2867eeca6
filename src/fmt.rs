use crate::{
    component::{Path, Scheme},
    Components, Uri,
};
use core::fmt::{self, Write};

/// Displays the authority of components as `[user[:pass]@]host[:port]`.
pub(crate) struct DisplayAuthority<'a>(pub(crate) &'a Components);

impl fmt::Display for DisplayAuthority<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_authority(f, self.0)
    }
}

/// Writes the authority as `[user[:pass]@]host[:port]`, or the undecomposed
/// authority if there is one.
pub(crate) fn write_authority<W: Write>(w: &mut W, c: &Components) -> fmt::Result {
    if let Some(authority) = &c.authority {
        return w.write_str(authority);
    }
    if let Some(user) = &c.user {
        w.write_str(user)?;
        if let Some(pass) = &c.pass {
            w.write_char(':')?;
            w.write_str(pass)?;
        }
        w.write_char('@')?;
    }
    if let Some(host) = &c.host {
        w.write_str(host)?;
    }
    if let Some(port) = c.port {
        write!(w, ":{port}")?;
    }
    Ok(())
}

impl fmt::Display for Components {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(scheme) = &self.scheme {
            f.write_str(scheme)?;
            f.write_char(':')?;
        }

        let has_authority = self.has_authority();
        if has_authority {
            f.write_str("//")?;
            write_authority(f, self)?;
        }

        if let Some(path) = &self.path {
            // Keep the path from being read back as an authority.
            if !has_authority && path.starts_with("//") {
                f.write_str("/.")?;
            }
            f.write_str(path)?;
        }

        if let Some(query) = &self.query {
            f.write_char('?')?;
            f.write_str(query)?;
        }

        if let Some(fragment) = &self.fragment {
            f.write_char('#')?;
            f.write_str(fragment)?;
        }
        Ok(())
    }
}

impl fmt::Debug for Uri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Uri")
            .field("scheme", &self.scheme())
            .field("user", &self.user())
            .field("pass", &self.pass())
            .field("host", &self.host())
            .field("port", &self.port())
            .field("path", &self.path())
            .field("query", &self.query())
            .field("fragment", &self.fragment())
            .finish()
    }
}

impl fmt::Display for Uri {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.as_str(), f)
    }
}

impl fmt::Display for Scheme {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.as_str(), f)
    }
}

impl fmt::Debug for Scheme {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self.as_str(), f)
    }
}

impl fmt::Display for Path {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.as_str(), f)
    }
}

impl fmt::Debug for Path {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self.as_str(), f)
    }
}

#[cfg(feature = "serde")]
mod serde_impl {
    use crate::Uri;
    use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

    impl Serialize for Uri {
        fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            serializer.serialize_str(self.as_str())
        }
    }

    impl<'de> Deserialize<'de> for Uri {
        fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
        where
            D: Deserializer<'de>,
        {
            let s = String::deserialize(deserializer)?;
            Uri::parse(&s).map_err(|e| {
                de::Error::custom(format_args!("failed to parse {s:?} as URI reference: {e}"))
            })
        }
    }
}
