use uri_ref::validate::*;

#[test]
fn scheme() {
    for s in ["http", "HTTPS", "svn+ssh", "a", "z39.50r", "x-y"] {
        assert!(is_valid_scheme(s), "{s:?}");
    }
    for s in ["", "1http", "+a", "ht tp", "ht_tp", "é", "a:"] {
        assert!(!is_valid_scheme(s), "{s:?}");
    }
}

#[test]
fn userinfo() {
    assert!(is_valid_user(""));
    assert!(is_valid_user("user.name-1_~!$&'()*+,;="));
    assert!(is_valid_user("%E4%BD%A0"));
    assert!(!is_valid_user("us er"));
    assert!(!is_valid_user("a@b"));
    assert!(!is_valid_user("%4"));

    assert!(is_valid_pass(""));
    assert!(is_valid_pass("p:a:s:s"));
    assert!(!is_valid_pass("p/w"));

    assert!(is_valid_userinfo("user"));
    assert!(is_valid_userinfo("user:"));
    assert!(is_valid_userinfo(":pass"));
    assert!(is_valid_userinfo("user:pa:ss"));
    assert!(!is_valid_userinfo("user:p w"));
    assert!(!is_valid_userinfo("u ser:pw"));
}

#[test]
fn host() {
    for s in [
        "localhost",
        "example.com",
        "EXAMPLE.COM",
        "a-b_c~d.e",
        "xn--fsqu00a.xn--3lr804guic",
        "%E4%BE%8B.jp",
        "0.0.0.0",
        "127.0.0.1",
        "255.255.255.255",
        "[::]",
        "[::1]",
        "[2001:db8::7]",
        "[::ffff:192.0.2.1]",
        "[1:2:3:4:5:6:7:8]",
    ] {
        assert!(is_valid_host(s), "{s:?}");
    }

    for s in [
        "",
        "exa mple.com",
        "example..com",
        ".example.com",
        "example.com.",
        "ex@mple.com",
        "ex:ample",
        // Hosts starting with a digit must be dotted-quad addresses.
        "256.1.1.1",
        "1.2.3",
        "01.2.3.4",
        "1example.com",
        "[::1",
        "::1",
        "[::1]x",
        "[1:2:3:4:5:6:7:8:9]",
        "[1::2::3]",
        "[v1.fe80::a]",
    ] {
        assert!(!is_valid_host(s), "{s:?}");
    }
}

#[test]
fn host_length() {
    let label = "a".repeat(MAX_LABEL_LEN);
    assert!(is_valid_host(&label));
    assert!(!is_valid_host(&format!("{label}a")));

    // 4 labels of 63 bytes and 3 dots make 255 bytes.
    let host = [label.as_str(); 4].join(".");
    assert!(!is_valid_host(&host));
    assert!(is_valid_host(&host[..MAX_HOST_LEN]));
    assert!(!is_valid_host(&host[..MAX_HOST_LEN + 1]));
}

#[test]
fn port() {
    assert!(is_valid_port(0));
    assert!(is_valid_port(80));
    assert!(is_valid_port(65535));
    assert!(!is_valid_port(65536));
    assert!(!is_valid_port(u64::MAX));
}

#[test]
fn authority() {
    for s in [
        "",
        "example.com",
        "example.com:80",
        "user@example.com",
        "user:pass@example.com:8080",
        "[::1]:0",
        "127.0.0.1:65535",
    ] {
        assert!(is_valid_authority(s), "{s:?}");
    }
    for s in [
        "example.com:",
        "example.com:65536",
        "example.com:8a",
        "@example.com",
        "user@",
        ":80",
        "a:b:c",
        "us er@example.com",
        "[::1",
    ] {
        assert!(!is_valid_authority(s), "{s:?}");
    }
}

#[test]
fn path_query_fragment() {
    assert!(is_valid_path(""));
    assert!(is_valid_path("/a/b;c=d/%20:@!$&'()*+,"));
    assert!(is_valid_path("//a"));
    assert!(!is_valid_path("/a?b"));
    assert!(!is_valid_path("/a#b"));
    assert!(!is_valid_path("/a b"));
    assert!(!is_valid_path("/%"));
    assert!(!is_valid_path("/%g0"));
    assert!(!is_valid_path("/ü"));

    assert!(is_valid_query(""));
    assert!(is_valid_query("a=b&c=d/e?f"));
    assert!(!is_valid_query("a#b"));
    assert!(!is_valid_query("a[b]"));

    assert!(is_valid_fragment(""));
    assert!(is_valid_fragment("section/1?x"));
    assert!(!is_valid_fragment("a#b"));
    assert!(!is_valid_fragment("{}"));
}
