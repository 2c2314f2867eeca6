#![no_main]
use libfuzzer_sys::fuzz_target;
use uri_ref::{percent_encoded, Uri};

fuzz_target!(|data: &str| {
    let s = percent_encoded(data);
    assert!(s.is_ascii());
    assert_eq!(percent_encoded(&s), s);

    // Encoding never turns a valid reference into an invalid one.
    if Uri::parse(data).is_ok() {
        assert_eq!(s, data);
    }
});
