#![no_main]

use libfuzzer_sys::fuzz_target;

use agentx_oidlist::{ListHandler, Oid};

/// Split the input into short OIDs, one arc per byte, `0xFF` ending each OID.
fn oids(data: &[u8]) -> Vec<Oid> {
    data.split(|&b| b == 0xFF)
        .map(|chunk| Oid::new(chunk.iter().map(|&b| u32::from(b % 16))))
        .collect()
}

fuzz_target!(|data: &[u8]| {
    let oids = oids(data);
    let Some((queries, registered)) = oids.split_first_chunk::<2>() else {
        return;
    };

    let mut list = ListHandler::new();
    for oid in registered {
        list.insert(oid.clone());
    }

    let [from, to] = queries;
    for include_from in [false, true] {
        let result = list.get_next(from, include_from, to).unwrap();
        let expected = list
            .oids()
            .find(|k| agentx_oidlist::handler::oid_within(k, from, include_from, to));
        assert_eq!(result.oid(), expected);
    }
});
