//! Byte pattern tables from RFC 3986.
//!
//! The predefined table constants in this module are documented with
//! the ABNF notation of [RFC 5234].
//!
//! [RFC 5234]: https://datatracker.ietf.org/doc/html/rfc5234

/// A table determining the byte patterns allowed in a string.
///
/// It is guaranteed that the unencoded bytes allowed are ASCII and that
/// an unencoded `%` is not allowed.
#[derive(Clone, Copy, Debug)]
pub struct Table {
    arr: [bool; 128],
    allows_pct_encoded: bool,
}

impl Table {
    /// Generates a table that only allows the given unencoded bytes.
    ///
    /// # Panics
    ///
    /// Panics if any of the bytes is not ASCII or is `%`.
    #[must_use]
    pub const fn new(mut bytes: &[u8]) -> Table {
        let mut arr = [false; 128];
        while let [cur, rem @ ..] = bytes {
            assert!(cur.is_ascii() && *cur != b'%', "non-ASCII or %");
            arr[*cur as usize] = true;
            bytes = rem;
        }
        Table {
            arr,
            allows_pct_encoded: false,
        }
    }

    /// Marks this table as allowing percent-encoded octets.
    #[must_use]
    pub const fn or_pct_encoded(mut self) -> Table {
        self.allows_pct_encoded = true;
        self
    }

    /// Combines two tables into one.
    ///
    /// Returns a new table that allows all the byte patterns allowed
    /// either by `self` or by `other`.
    #[must_use]
    pub const fn or(mut self, other: Table) -> Table {
        let mut i = 0;
        while i < 128 {
            self.arr[i] |= other.arr[i];
            i += 1;
        }
        self.allows_pct_encoded |= other.allows_pct_encoded;
        self
    }

    /// Returns `true` if an unencoded byte is allowed by the table.
    #[inline]
    #[must_use]
    pub const fn allows(&self, x: u8) -> bool {
        x < 128 && self.arr[x as usize]
    }

    /// Returns `true` if percent-encoded octets are allowed by the table.
    #[inline]
    #[must_use]
    pub const fn allows_pct_encoded(&self) -> bool {
        self.allows_pct_encoded
    }

    /// Validates the given string with the table.
    ///
    /// An empty string is always valid.
    #[must_use]
    pub const fn validate(&self, s: &[u8]) -> bool {
        let mut i = 0;
        while i < s.len() {
            let x = s[i];
            if x == b'%' {
                if !self.allows_pct_encoded || i + 2 >= s.len() {
                    return false;
                }
                if !(HEXDIG.allows(s[i + 1]) && HEXDIG.allows(s[i + 2])) {
                    return false;
                }
                i += 3;
            } else {
                if !self.allows(x) {
                    return false;
                }
                i += 1;
            }
        }
        true
    }
}

const fn new(bytes: &[u8]) -> Table {
    Table::new(bytes)
}

/// `ALPHA = %x41-5A / %x61-7A`
pub const ALPHA: Table = new(b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz");

/// `DIGIT = %x30-39`
pub const DIGIT: Table = new(b"0123456789");

/// `HEXDIG = DIGIT / "A" / "B" / "C" / "D" / "E" / "F"`
pub const HEXDIG: Table = DIGIT.or(new(b"ABCDEFabcdef"));

/// `sub-delims = "!" / "$" / "&" / "'" / "(" / ")" / "*" / "+" / "," / ";" / "="`
pub const SUB_DELIMS: Table = new(b"!$&'()*+,;=");

/// `unreserved = ALPHA / DIGIT / "-" / "." / "_" / "~"`
pub const UNRESERVED: Table = ALPHA.or(DIGIT).or(new(b"-._~"));

/// `pchar = unreserved / pct-encoded / sub-delims / ":" / "@"`
pub const PCHAR: Table = UNRESERVED.or(SUB_DELIMS).or(new(b":@")).or_pct_encoded();

/// `scheme = ALPHA *( ALPHA / DIGIT / "+" / "-" / "." )`
///
/// Only the part after the leading `ALPHA` is covered.
pub const SCHEME: Table = ALPHA.or(DIGIT).or(new(b"+-."));

/// `userinfo = *( unreserved / pct-encoded / sub-delims / ":" )`
pub const USERINFO: Table = UNRESERVED.or(SUB_DELIMS).or(new(b":")).or_pct_encoded();

/// `reg-name = *( unreserved / pct-encoded / sub-delims )`
pub const REG_NAME: Table = UNRESERVED.or(SUB_DELIMS).or_pct_encoded();

/// `path = *( pchar / "/" )`
pub const PATH: Table = PCHAR.or(new(b"/"));

/// `query = fragment = *( pchar / "/" / "?" )`
pub const QUERY_FRAGMENT: Table = PCHAR.or(new(b"/?"));
