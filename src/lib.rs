#![warn(missing_debug_implementations, missing_docs, rust_2018_idioms)]
#![deny(unsafe_op_in_unsafe_fn)]

//! A URI reference parser and resolver following IETF [RFC 3986].
//!
//! [RFC 3986]: https://datatracker.ietf.org/doc/html/rfc3986/
//!
//! A URI reference is split into scheme, authority, path, query and fragment
//! by the generic syntax, each component is validated against its grammar,
//! and the authority is decomposed into user, password, host and port.
//! Absent components are kept apart from empty ones throughout:
//!
//! ```
//! use uri_ref::Uri;
//!
//! let with_empty_host = Uri::parse("file:///etc")?;
//! assert_eq!(with_empty_host.host(), Some(""));
//! assert_eq!(with_empty_host, "file:///etc");
//!
//! let without_authority = Uri::parse("file:/etc")?;
//! assert_eq!(without_authority.host(), None);
//! assert_eq!(without_authority, "file:/etc");
//! # Ok::<_, uri_ref::ParseError>(())
//! ```
//!
//! See [`Uri::resolve_ref`] and [`resolve::merge_components`] for reference
//! resolution, and [`percent_encoded`] for turning an IRI into something
//! the parser accepts.
//!
//! # Feature flags
//!
//! - `impl-error` (default): Implements [`std::error::Error`] for the error types.
//! - `serde`: Implements `Serialize` and `Deserialize` for [`Uri`] through its string form.
//! - `tracing`: Emits a `debug` event when resolution skips an unparsable counterpart.

pub mod component;
mod components;
mod enc;
mod error;
mod fmt;
mod ip;
mod normalize;
mod parser;
pub mod resolve;
pub mod table;
mod uri;
pub mod validate;

pub use components::{Components, ToComponents};
pub use enc::percent_encoded;
pub use error::{AuthorityError, AuthorityErrorKind, Component, ParseError, ParseErrorKind};
pub use normalize::remove_dot_segments;
pub use parser::{parse_authority, parse_components, AuthorityParts, Parser};
pub use uri::Uri;
