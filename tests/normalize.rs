use uri_ref::{remove_dot_segments, Uri};

#[test]
fn dot_segments() {
    // Examples from Section 5.2.4 of RFC 3986.
    assert_eq!(remove_dot_segments("/a/b/c/./../../g"), "/a/g");
    assert_eq!(remove_dot_segments("mid/content=5/../6"), "mid/6");

    assert_eq!(remove_dot_segments("/a/b/c/.."), "/a/b/");
    assert_eq!(remove_dot_segments("/a/b/c/."), "/a/b/c/");
    assert_eq!(remove_dot_segments("/a/../../.."), "/");
    assert_eq!(remove_dot_segments("/.."), "/");
    assert_eq!(remove_dot_segments("../.."), "");
    assert_eq!(remove_dot_segments("a/b/../../.."), "/");
    assert_eq!(remove_dot_segments("/a/.b/..c/...d"), "/a/.b/..c/...d");
}

#[test]
fn no_dot_segments_left() {
    let paths = [
        "/a/./b/../c/./d/..",
        "../a/../../b/./c",
        "/./../.././x/y/..",
        "a/./../b/././c/../..",
        "/a//./..//b",
    ];
    for path in paths {
        let out = remove_dot_segments(path);
        let mut segments = out.split('/');
        if out.starts_with('/') {
            segments.next();
        }
        assert!(
            segments.all(|s| s != "." && s != ".."),
            "{path:?} -> {out:?}"
        );
        assert_eq!(remove_dot_segments(&out), out, "{path:?}");
    }
}

#[test]
fn parse_serialize_round_trip() {
    for s in [
        "http://a/b/c/./../../g",
        "http://a/b/c/d;p?q=./..#./..",
        "foo:a/./b/..",
        "//h/..",
        "file:///../etc/./passwd",
    ] {
        let once = Uri::parse(s).unwrap();
        let twice = Uri::parse(once.as_str()).unwrap();
        assert_eq!(once, twice, "{s:?}");
        assert_eq!(once.as_str(), twice.as_str(), "{s:?}");
    }
}
