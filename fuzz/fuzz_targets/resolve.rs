#![no_main]
use libfuzzer_sys::fuzz_target;
use uri_ref::{resolve::Resolver, Uri};

fuzz_target!(|data: (&str, &str)| {
    let Ok(base) = Uri::parse(data.0) else {
        return;
    };

    // Never panics, whether or not the reference parses.
    let u1 = base.resolve_ref(data.1);
    let Ok(r) = Uri::parse(data.1) else {
        assert_eq!(u1, base);
        return;
    };

    assert_eq!(u1, r.resolve(&base));
    assert_eq!(u1, Resolver::with_base(base.clone()).resolve(data.1).unwrap());

    // A relative result may start with a segment containing a colon.
    if base.is_absolute() {
        assert!(u1.is_absolute());
        let u2 = Uri::parse(u1.as_str()).unwrap();
        assert_eq!(u1, u2);
    }
    assert_eq!(u1.fragment(), r.fragment());
});
