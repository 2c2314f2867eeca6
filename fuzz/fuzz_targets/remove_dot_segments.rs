#![no_main]
use libfuzzer_sys::fuzz_target;
use uri_ref::remove_dot_segments;

fuzz_target!(|data: &str| {
    let out = remove_dot_segments(data);
    assert!(out.len() <= data.len() + 1);
    assert_eq!(remove_dot_segments(&out), out);

    let mut segments = out.split('/');
    if out.starts_with('/') {
        segments.next();
    }
    assert!(segments.all(|s| s != "." && s != ".."));
});
