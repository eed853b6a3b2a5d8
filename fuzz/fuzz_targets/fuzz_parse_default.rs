#![no_main]
use libfuzzer_sys::fuzz_target;
use csvdoc::{Document, Error};

fuzz_target!(|data: &[u8]| {
    let mut doc = Document::new();
    match doc.parse(data, true) {
        Ok(()) => {
            assert_eq!(doc.to_array().len(), doc.len());
            let header = doc.header().expect("header requested");
            for row in doc.iter() {
                let shared = row.header().expect("row shares header");
                assert!(std::sync::Arc::ptr_eq(header, shared));
            }
        }
        // only decoding may fail
        Err(Error::Encoding(_)) => assert!(std::str::from_utf8(data).is_err()),
        Err(e) => panic!("unexpected parse error: {e}"),
    }
});
