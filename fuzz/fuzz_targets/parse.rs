#![no_main]
use libfuzzer_sys::fuzz_target;
use uri_ref::{Parser, Uri};

fuzz_target!(|data: &str| {
    let Ok(u1) = Uri::parse(data) else {
        return;
    };

    // Serialization is stable and parses back to the same components.
    let u2 = Uri::parse(u1.as_str()).unwrap();
    assert_eq!(u1, u2);
    assert_eq!(u1.as_str(), u2.as_str());

    // Expanding the authority later gives the same components.
    let raw = Parser::new().expand_authority(false).parse(data).unwrap();
    assert_eq!(raw.expand_authority().unwrap(), *u1.components());

    // Validation only ever rejects more.
    let lax = Parser::new().validate(false).parse(data).unwrap();
    assert_eq!(lax, *u1.components());
});
