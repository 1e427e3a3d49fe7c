#![no_main]
use libfuzzer_sys::fuzz_target;
use mdt_utils::{dna_hash, dna_hash_strict, is_single_byte};

fuzz_target!(|data: &str| {
    let hash = dna_hash(data);
    if is_single_byte(data) {
        assert_eq!(hash.len(), 2 * data.chars().count());
        assert_eq!(dna_hash_strict(data).ok().as_deref(), Some(hash.as_str()));
    } else {
        assert!(dna_hash_strict(data).is_err());
    }
});
