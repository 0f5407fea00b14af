#![no_main]

use libfuzzer_sys::fuzz_target;

use agentx_oidlist::oid::Oid;

fuzz_target!(|data: &[u8]| {
    // Anything that parses must print back to an equal OID
    if let Ok(s) = std::str::from_utf8(data)
        && let Ok(oid) = Oid::parse(s)
    {
        assert_eq!(Oid::parse(&oid.to_string()).ok(), Some(oid));
    }
});
