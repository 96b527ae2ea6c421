#![deny(unsafe_code)]
#![no_main]

//! Fuzz testing for the counter KDF
//!
//! Tests that derivation handles arbitrary keys, labels, contexts and
//! lengths without panicking, honours the requested length and is
//! deterministic.

use fdo_kdf::{HashAlgorithm, KdfError, counter_kdf, counter_kdf_named, max_output_len};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if data.len() < 4 {
        return;
    }

    let alg = if data[0] & 1 == 0 { HashAlgorithm::Sha256 } else { HashAlgorithm::Sha384 };
    let size = usize::from(u16::from_be_bytes([data[1], data[2]]));
    let rest = &data[3..];

    // Split the remainder into key, label, context and context_rand
    let quarter = rest.len() / 4;
    let key = &rest[..quarter];
    let label = &rest[quarter..2 * quarter];
    let context = &rest[2 * quarter..3 * quarter];
    let context_rand = &rest[3 * quarter..];

    test_counter_kdf(size, alg, key, label, context, context_rand);
    test_named(key, label);
});

fn test_counter_kdf(
    size: usize,
    alg: HashAlgorithm,
    key: &[u8],
    label: &[u8],
    context: &[u8],
    context_rand: &[u8],
) {
    match counter_kdf(size, alg, key, label, context, Some(context_rand)) {
        Ok(derived) => {
            assert!(size >= 1 && size <= max_output_len(alg));
            assert_eq!(derived.len(), size, "Output length must match requested");

            if let Ok(again) = counter_kdf(size, alg, key, label, context, Some(context_rand)) {
                assert_eq!(derived, again, "Counter KDF must be deterministic");
            }
        }
        Err(KdfError::InvalidLength { requested, max }) => {
            assert_eq!(requested, size);
            assert!(size == 0 || size > max);
        }
        Err(e) => panic!("unexpected error: {}", e),
    }
}

fn test_named(key: &[u8], name: &[u8]) {
    let Ok(name) = std::str::from_utf8(name) else {
        return;
    };
    if let Err(e) = counter_kdf_named(32, name, key, b"label", b"context", None) {
        assert!(matches!(e, KdfError::UnknownAlgorithm(_)));
    }
}
