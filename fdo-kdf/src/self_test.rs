//! Power-Up Self-Test Module
//!
//! Known Answer Tests (KATs) for the counter KDF. A caller that must not
//! hand out keys from a broken build runs these once at start-up and refuses
//! to proceed on failure.
//!
//! ## Tests
//!
//! - Counter KDF with HMAC-SHA256, one block (FDO label/context, zero key)
//! - Counter KDF with HMAC-SHA256, two blocks truncated to 40 bytes
//! - Counter KDF with HMAC-SHA384, two blocks with a random context extension
//!
//! ## Usage
//!
//! ```
//! use fdo_kdf::self_test::{run_power_up_tests, SelfTestResult};
//!
//! let result = run_power_up_tests();
//! assert_eq!(result, SelfTestResult::Pass);
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::panic)]

use subtle::ConstantTimeEq;
use tracing::{error, instrument};

use crate::error::{KdfError, Result};
use crate::hash::HashAlgorithm;
use crate::kdf::{FDO_KDF_CONTEXT, FDO_KDF_LABEL, counter_kdf};

/// Result of a self-test operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelfTestResult {
    /// All tests passed successfully
    Pass,
    /// One or more tests failed with the given error message
    Fail(String),
}

impl SelfTestResult {
    /// Returns true if the self-test passed
    #[must_use]
    pub fn is_pass(&self) -> bool {
        matches!(self, SelfTestResult::Pass)
    }

    /// Returns true if the self-test failed
    #[must_use]
    pub fn is_fail(&self) -> bool {
        matches!(self, SelfTestResult::Fail(_))
    }

    /// Converts the result to a standard Result type
    ///
    /// # Errors
    /// Returns `KdfError::SelfTestFailed` if the self-test failed
    pub fn to_result(&self) -> Result<()> {
        match self {
            SelfTestResult::Pass => Ok(()),
            SelfTestResult::Fail(msg) => Err(KdfError::SelfTestFailed(msg.clone())),
        }
    }
}

struct KnownAnswer {
    name: &'static str,
    hash_alg: HashAlgorithm,
    key: &'static [u8],
    context_rand: &'static [u8],
    expected: &'static [u8],
}

const ZERO_KEY: [u8; 32] = [0u8; 32];

const CONTEXT_RAND: [u8; 8] = [0xAA; 8];

const SHA384_KEY: [u8; 48] = [
    0x00, 0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08, 0x09, 0x0a, 0x0b, 0x0c, 0x0d, 0x0e, 0x0f,
    0x10, 0x11, 0x12, 0x13, 0x14, 0x15, 0x16, 0x17, 0x18, 0x19, 0x1a, 0x1b, 0x1c, 0x1d, 0x1e, 0x1f,
    0x20, 0x21, 0x22, 0x23, 0x24, 0x25, 0x26, 0x27, 0x28, 0x29, 0x2a, 0x2b, 0x2c, 0x2d, 0x2e, 0x2f,
];

const KNOWN_ANSWERS: [KnownAnswer; 3] = [
    KnownAnswer {
        name: "Counter KDF HMAC-SHA256 single block",
        hash_alg: HashAlgorithm::Sha256,
        key: &ZERO_KEY,
        context_rand: &[],
        expected: &[
            0x2d, 0x4c, 0xdb, 0xa2, 0xb9, 0xf9, 0xb2, 0xb7, 0x37, 0x9f, 0x20, 0x94, 0x29, 0xf2,
            0x5c, 0x1b, 0xe0, 0xad, 0x19, 0x27, 0x48, 0xc9, 0x37, 0xf8, 0xa5, 0x06, 0x8c, 0x48,
            0x9b, 0x26, 0x3e, 0xb6,
        ],
    },
    KnownAnswer {
        name: "Counter KDF HMAC-SHA256 two blocks",
        hash_alg: HashAlgorithm::Sha256,
        key: &ZERO_KEY,
        context_rand: &[],
        expected: &[
            0xa2, 0x16, 0x1a, 0x2f, 0xb4, 0x92, 0xf4, 0xef, 0x0c, 0x20, 0x37, 0xce, 0x61, 0x04,
            0x05, 0x0c, 0x1d, 0xe9, 0xd5, 0x78, 0x96, 0x71, 0xd3, 0x2a, 0x88, 0x11, 0x9a, 0x7a,
            0x79, 0x38, 0xfe, 0x87, 0xb9, 0xe3, 0x76, 0x7f, 0xa9, 0xba, 0x18, 0x23,
        ],
    },
    KnownAnswer {
        name: "Counter KDF HMAC-SHA384 with context extension",
        hash_alg: HashAlgorithm::Sha384,
        key: &SHA384_KEY,
        context_rand: &CONTEXT_RAND,
        expected: &[
            0x7f, 0xe9, 0x5a, 0x49, 0x6a, 0x49, 0x55, 0x50, 0xdf, 0xff, 0x7a, 0x9d, 0x10, 0xec,
            0x91, 0x28, 0xa6, 0x8a, 0xc2, 0x81, 0x4b, 0x0d, 0x9d, 0x2a, 0xff, 0x75, 0x89, 0xf5,
            0x3b, 0xb0, 0xe3, 0x90, 0xb7, 0x3a, 0xbf, 0x3a, 0x0a, 0x7e, 0x89, 0x5f, 0x9a, 0xef,
            0xf1, 0x68, 0xe4, 0x70, 0xc8, 0x56, 0xc6, 0xf8, 0x34, 0x8d, 0x55, 0x8e, 0x24, 0xda,
            0x26, 0xd8, 0xb3, 0x4b, 0x12, 0x40, 0x69, 0x11,
        ],
    },
];

/// Run all power-up self-tests
///
/// Any failure stops further tests and is reported by name.
#[must_use]
#[instrument(level = "debug")]
pub fn run_power_up_tests() -> SelfTestResult {
    for kat in &KNOWN_ANSWERS {
        if let Err(e) = check(kat) {
            error!(test = kat.name, error = %e, "power-up self-test failed");
            return SelfTestResult::Fail(format!("{} KAT failed: {}", kat.name, e));
        }
    }
    SelfTestResult::Pass
}

fn check(kat: &KnownAnswer) -> Result<()> {
    let derived = counter_kdf(
        kat.expected.len(),
        kat.hash_alg,
        kat.key,
        FDO_KDF_LABEL,
        FDO_KDF_CONTEXT,
        Some(kat.context_rand),
    )?;

    if bool::from(derived.key().ct_eq(kat.expected)) {
        Ok(())
    } else {
        Err(KdfError::SelfTestFailed("output does not match known answer".to_string()))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_power_up_tests_pass() {
        let result = run_power_up_tests();
        assert!(result.is_pass(), "self-test failed: {:?}", result);
        assert!(result.to_result().is_ok());
    }

    #[test]
    fn test_each_known_answer() {
        for kat in &KNOWN_ANSWERS {
            check(kat).unwrap();
        }
    }

    #[test]
    fn test_mismatch_detected() {
        let kat = KnownAnswer {
            name: "corrupted",
            hash_alg: HashAlgorithm::Sha256,
            key: &ZERO_KEY,
            context_rand: &[],
            expected: &[0u8; 32],
        };
        assert!(matches!(check(&kat), Err(KdfError::SelfTestFailed(_))));
    }

    #[test]
    fn test_fail_converts_to_error() {
        let result = SelfTestResult::Fail("boom".to_string());
        assert!(result.is_fail());
        assert_eq!(result.to_result(), Err(KdfError::SelfTestFailed("boom".to_string())));
    }
}
