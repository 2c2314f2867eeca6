use uri_ref::{percent_encoded, table::*, Uri};

const RAW: &str = "http://例え.テスト/パス?q=値#frag😃";
const ENCODED: &str = "http://%E4%BE%8B%E3%81%88.%E3%83%86%E3%82%B9%E3%83%88/\
%E3%83%91%E3%82%B9?q=%E5%80%A4#frag%F0%9F%98%83";

#[test]
fn encode_iri() {
    let s = percent_encoded(RAW);
    assert_eq!(s, ENCODED);
    assert!(s.is_ascii());

    let u = Uri::parse(&s).unwrap();
    assert_eq!(u.host(), Some("%E4%BE%8B%E3%81%88.%E3%83%86%E3%82%B9%E3%83%88"));
    assert_eq!(u.path().unwrap(), "/%E3%83%91%E3%82%B9");
    assert_eq!(u.query(), Some("q=%E5%80%A4"));
    assert_eq!(u.fragment(), Some("frag%F0%9F%98%83"));

    assert!(Uri::parse(RAW).is_err());
}

#[test]
fn encode_keeps_ascii() {
    // Nothing ASCII is touched, even if invalid.
    let s = "http://a/b c?%zz#<>";
    assert_eq!(percent_encoded(s), s);
    assert!(Uri::parse(&percent_encoded(s)).is_err());

    assert_eq!(percent_encoded("/ä/%C3%A4"), "/%C3%A4/%C3%A4");
}

#[test]
fn tables() {
    assert!(UNRESERVED.allows(b'~'));
    assert!(!UNRESERVED.allows(b'%'));
    assert!(!UNRESERVED.allows_pct_encoded());
    assert!(PCHAR.allows(b':'));
    assert!(PCHAR.allows(b'@'));
    assert!(!PCHAR.allows(b'/'));
    assert!(PATH.allows(b'/'));
    assert!(!PATH.allows(b'?'));
    assert!(QUERY_FRAGMENT.allows(b'?'));
    assert!(!QUERY_FRAGMENT.allows(b'#'));
    assert!(!USERINFO.allows(b'@'));
    assert!(!REG_NAME.allows(b':'));
    assert!(!SCHEME.allows(b'_'));
    assert!(!PATH.allows(0x80));

    assert!(PATH.validate(b"/a%2Fb%2f"));
    assert!(!PATH.validate(b"/a%2"));
    assert!(!PATH.validate(b"/a%G0"));
    assert!(!SCHEME.validate(b"a%20"));
}
