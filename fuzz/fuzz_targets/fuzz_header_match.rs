#![no_main]

use libfuzzer_sys::fuzz_target;
use magic_detect::{FileSignature, FileType, SignatureRegistry};

fuzz_target!(|data: &[u8]| {
    let registry = SignatureRegistry::standard();

    if let Ok(token) = std::str::from_utf8(data) {
        if let Ok(sig) = registry.signature_for(token) {
            assert_eq!(sig.file_type().token(), token);
        }
    }

    for file_type in FileType::ALL {
        let sig = FileSignature::new(file_type);
        let head = &data[..data.len().min(sig.len())];
        assert_eq!(sig.matches_header(head), head == sig.header());
    }
});
