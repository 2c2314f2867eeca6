//! Percent-encoding of IRIs into URIs.

use core::str;

pub(crate) fn encode_byte(x: u8) -> &'static str {
    const TABLE: &[u8; 256 * 3] = &{
        const HEX_DIGITS: &[u8; 16] = b"0123456789ABCDEF";

        let mut i = 0;
        let mut table = [0; 256 * 3];
        while i < 256 {
            table[i * 3] = b'%';
            table[i * 3 + 1] = HEX_DIGITS[i >> 4];
            table[i * 3 + 2] = HEX_DIGITS[i & 0b1111];
            i += 1;
        }
        table
    };

    const TABLE_STR: &str = match str::from_utf8(TABLE) {
        Ok(s) => s,
        Err(_) => unreachable!(),
    };

    &TABLE_STR[x as usize * 3..x as usize * 3 + 3]
}

/// Percent-encodes every non-ASCII character of a string.
///
/// Each non-ASCII character is encoded as UTF-8 and every byte of it
/// is written as `%XX` with uppercase hexadecimal digits. ASCII characters,
/// including `%` and those not allowed in a URI, are left untouched, so the
/// result still has to be validated by the parser.
///
/// # Examples
///
/// ```
/// use uri_ref::{percent_encoded, Uri};
///
/// let s = percent_encoded("http://例え.jp/ü?q=ä");
/// assert_eq!(s, "http://%E4%BE%8B%E3%81%88.jp/%C3%BC?q=%C3%A4");
/// assert!(Uri::parse(&s).is_ok());
/// ```
#[must_use]
pub fn percent_encoded(iri: &str) -> String {
    let mut buf = String::with_capacity(iri.len());
    for ch in iri.chars() {
        if ch.is_ascii() {
            buf.push(ch);
        } else {
            let mut bytes = [0; 4];
            for &x in ch.encode_utf8(&mut bytes).as_bytes() {
                buf.push_str(encode_byte(x));
            }
        }
    }
    buf
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode_byte_table() {
        assert_eq!(encode_byte(0x00), "%00");
        assert_eq!(encode_byte(0x2f), "%2F");
        assert_eq!(encode_byte(0xff), "%FF");
    }

    #[test]
    fn encode_non_ascii_only() {
        assert_eq!(percent_encoded(""), "");
        assert_eq!(percent_encoded("a b%20"), "a b%20");
        assert_eq!(percent_encoded("é"), "%C3%A9");
        assert_eq!(percent_encoded("€"), "%E2%82%AC");
        assert_eq!(percent_encoded("😃"), "%F0%9F%98%83");
    }
}
