use crate::table::HEXDIG;
use std::net::{Ipv4Addr, Ipv6Addr};

// dec-octet = DIGIT             ; 0-9
//           / %x31-39 DIGIT     ; 10-99
//           / "1" 2DIGIT        ; 100-199
//           / "2" %x30-34 DIGIT ; 200-249
//           / "25" %x30-35      ; 250-255
fn parse_dec_octet(s: &[u8]) -> Option<u8> {
    match s {
        [] | [b'0', _, ..] => None,
        _ if s.len() > 3 => None,
        _ => {
            let mut x = 0u16;
            for &b in s {
                if !b.is_ascii_digit() {
                    return None;
                }
                x = x * 10 + (b - b'0') as u16;
            }
            u8::try_from(x).ok()
        }
    }
}

/// Parses a dotted-quad IPv4 address.
///
/// `Ipv4Addr::from_str` is not used here since the octets must follow
/// the `dec-octet` rule exactly.
pub(crate) fn parse_v4(s: &[u8]) -> Option<Ipv4Addr> {
    let mut octets = [0u8; 4];
    let mut parts = s.split(|&b| b == b'.');
    for octet in &mut octets {
        *octet = parse_dec_octet(parts.next()?)?;
    }
    if parts.next().is_some() {
        return None;
    }
    Some(Ipv4Addr::from(octets))
}

// h16 = 1*4HEXDIG
fn parse_h16(s: &[u8]) -> Option<u16> {
    if !matches!(s.len(), 1..=4) {
        return None;
    }
    let mut x = 0u16;
    for &b in s {
        if !HEXDIG.allows(b) {
            return None;
        }
        let digit = match b {
            b'0'..=b'9' => b - b'0',
            b'a'..=b'f' => b - b'a' + 10,
            _ => b - b'A' + 10,
        };
        x = (x << 4) | digit as u16;
    }
    Some(x)
}

/// Reads colon-separated groups into `out`, returning how many were written.
///
/// A trailing IPv4 address occupies two groups and is only accepted
/// when `allow_v4` is set.
fn parse_groups(s: &[u8], out: &mut [u16; 8], allow_v4: bool) -> Option<usize> {
    if s.is_empty() {
        return Some(0);
    }

    let mut n = 0;
    let mut parts = s.split(|&b| b == b':').peekable();
    while let Some(part) = parts.next() {
        if allow_v4 && parts.peek().is_none() && part.contains(&b'.') {
            if n > 6 {
                // Not enough space
                return None;
            }
            let [a, b, c, d] = parse_v4(part)?.octets();
            out[n] = u16::from_be_bytes([a, b]);
            out[n + 1] = u16::from_be_bytes([c, d]);
            n += 2;
        } else {
            if n == 8 {
                return None;
            }
            out[n] = parse_h16(part)?;
            n += 1;
        }
    }
    Some(n)
}

/// Parses an IPv6 address without the enclosing brackets.
pub(crate) fn parse_v6(s: &[u8]) -> Option<Ipv6Addr> {
    let mut segs = [0u16; 8];

    match s.windows(2).position(|w| w == b"::") {
        None => {
            if parse_groups(s, &mut segs, true)? != 8 {
                // Too short
                return None;
            }
        }
        Some(i) => {
            let mut tail = [0u16; 8];
            let head_len = parse_groups(&s[..i], &mut segs, false)?;
            let tail_len = parse_groups(&s[i + 2..], &mut tail, true)?;
            if head_len + tail_len > 7 {
                // `::` must elide at least one group
                return None;
            }
            segs[8 - tail_len..].copy_from_slice(&tail[..tail_len]);
        }
    }

    Some(Ipv6Addr::from(segs))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_dec_octet() {
        for i in 0..=u8::MAX {
            let s = i.to_string();
            assert_eq!(Some(i), parse_dec_octet(s.as_bytes()));
        }
        assert!(parse_dec_octet(b"256").is_none());
        assert!(parse_dec_octet(b"01").is_none());
        assert!(parse_dec_octet(b"0255").is_none());
        assert!(parse_dec_octet(b"").is_none());
        assert!(parse_dec_octet(b"1a").is_none());
    }

    #[test]
    fn test_parse_v4() {
        assert_eq!(Some(Ipv4Addr::new(127, 0, 0, 1)), parse_v4(b"127.0.0.1"));
        assert_eq!(
            Some(Ipv4Addr::new(255, 255, 255, 255)),
            parse_v4(b"255.255.255.255")
        );
        assert_eq!(Some(Ipv4Addr::new(0, 0, 0, 0)), parse_v4(b"0.0.0.0"));

        // out of range
        assert!(parse_v4(b"256.0.0.1").is_none());
        // too short
        assert!(parse_v4(b"255.0.0").is_none());
        // too long
        assert!(parse_v4(b"255.0.0.1.2").is_none());
        // no number between dots
        assert!(parse_v4(b"255.0..1").is_none());
        // octal
        assert!(parse_v4(b"255.0.0.01").is_none());
        assert!(parse_v4(b"255.0.00.0").is_none());
        // preceding dot
        assert!(parse_v4(b".0.0.0.0").is_none());
        // trailing dot
        assert!(parse_v4(b"0.0.0.0.").is_none());
    }

    #[test]
    fn test_parse_v6() {
        assert_eq!(
            Some(Ipv6Addr::new(0, 0, 0, 0, 0, 0, 0, 0)),
            parse_v6(b"0:0:0:0:0:0:0:0")
        );
        assert_eq!(
            Some(Ipv6Addr::new(1, 2, 3, 4, 5, 6, 7, 8)),
            parse_v6(b"1:02:003:0004:0005:006:07:8")
        );
        assert_eq!(
            Some(Ipv6Addr::new(0, 0, 0, 0, 0, 0, 0, 1)),
            parse_v6(b"::1")
        );
        assert_eq!(
            Some(Ipv6Addr::new(1, 0, 0, 0, 0, 0, 0, 0)),
            parse_v6(b"1::")
        );
        assert_eq!(Some(Ipv6Addr::new(0, 0, 0, 0, 0, 0, 0, 0)), parse_v6(b"::"));
        assert_eq!(
            Some(Ipv6Addr::new(0x2a02, 0x6b8, 0, 0, 0, 0, 0x11, 0x11)),
            parse_v6(b"2a02:6b8::11:11")
        );
        assert_eq!(
            Some(Ipv6Addr::new(1, 2, 3, 4, 0, 6, 7, 8)),
            parse_v6(b"1:2:3:4::6:7:8")
        );
        assert_eq!(
            Some(Ipv6Addr::new(0xabcd, 0, 0, 0, 0, 0, 0, 0xEF)),
            parse_v6(b"ABCD::eF")
        );

        // only a colon
        assert!(parse_v6(b":").is_none());
        // too long group
        assert!(parse_v6(b"::00000").is_none());
        // too short
        assert!(parse_v6(b"1:2:3:4:5:6:7").is_none());
        // too long
        assert!(parse_v6(b"1:2:3:4:5:6:7:8:9").is_none());
        // triple colon
        assert!(parse_v6(b"1:2:::6:7:8").is_none());
        assert!(parse_v6(b":::").is_none());
        // two double colons
        assert!(parse_v6(b"1:2::6::8").is_none());
        // `::` indicating zero groups of zeros
        assert!(parse_v6(b"1:2:3:4::5:6:7:8").is_none());
        // preceding colon
        assert!(parse_v6(b":1:2:3:4:5:6:7:8").is_none());
        // trailing colon
        assert!(parse_v6(b"1:2:3:4:5:6:7:8:").is_none());
        // not hex
        assert!(parse_v6(b"::g").is_none());
    }

    #[test]
    fn test_parse_v4_in_v6() {
        assert_eq!(
            Some(Ipv6Addr::new(0, 0, 0, 0, 0, 0xFFFF, 49152, 545)),
            parse_v6(b"::FFFF:192.0.2.33")
        );
        assert_eq!(
            Some(Ipv6Addr::new(
                0x2001, 0xdb8, 0x122, 0xc000, 0x2, 0x2100, 49152, 545
            )),
            parse_v6(b"2001:db8:122:c000:2:2100:192.0.2.33")
        );

        // colon after v4
        assert!(parse_v6(b"::127.0.0.1:").is_none());
        // v4 before the ellipsis
        assert!(parse_v6(b"127.0.0.1::").is_none());
        // not enough groups
        assert!(parse_v6(b"1:2:3:4:5:127.0.0.1").is_none());
        // too many groups
        assert!(parse_v6(b"1:2:3:4:5:6:7:127.0.0.1").is_none());
    }
}
