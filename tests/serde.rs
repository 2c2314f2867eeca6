#![cfg(feature = "serde")]

use serde_json::json;
use uri_ref::Uri;

#[test]
fn serialize() {
    let u = Uri::parse("http://user@example.com:0080/a/./b?q#f").unwrap();
    assert_eq!(
        serde_json::to_value(&u).unwrap(),
        json!("http://user@example.com:80/a/b?q#f")
    );
}

#[test]
fn deserialize() {
    let u: Uri = serde_json::from_str("\"file:///etc/hosts\"").unwrap();
    assert_eq!(u.host(), Some(""));
    assert_eq!(u.path().unwrap(), "/etc/hosts");

    let v: Vec<Uri> = serde_json::from_value(json!(["a/b", "//h", "?q"])).unwrap();
    assert_eq!(v[0], "a/b");
    assert_eq!(v[1].host(), Some("h"));
    assert_eq!(v[2].query(), Some("q"));

    let e = serde_json::from_str::<Uri>("\"http://h:99999\"").unwrap_err();
    assert!(e.to_string().contains("invalid port in authority at index 9"));

    assert!(serde_json::from_str::<Uri>("42").is_err());
}
