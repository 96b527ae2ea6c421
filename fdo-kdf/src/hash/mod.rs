#![deny(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::panic)]

//! Hash Algorithm Selection
//!
//! The closed set of hash functions the HMAC pseudorandom function can be
//! instantiated with. Textual identifiers follow the names used by FDO
//! implementations (`"sha256"`, `"sha384"`).

use std::fmt;
use std::str::FromStr;

use crate::error::KdfError;

/// Hash function underlying the HMAC PRF
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HashAlgorithm {
    /// SHA-256 (FIPS 180-4), 256-bit output
    Sha256,
    /// SHA-384 (FIPS 180-4), 384-bit output
    Sha384,
}

impl HashAlgorithm {
    /// All supported algorithms.
    pub const ALL: [HashAlgorithm; 2] = [HashAlgorithm::Sha256, HashAlgorithm::Sha384];

    /// HMAC output size in bits (`h`).
    #[must_use]
    pub const fn output_bits(self) -> usize {
        match self {
            HashAlgorithm::Sha256 => 256,
            HashAlgorithm::Sha384 => 384,
        }
    }

    /// HMAC output size in bytes.
    #[must_use]
    pub const fn output_len(self) -> usize {
        self.output_bits() / 8
    }

    /// Canonical lowercase identifier.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            HashAlgorithm::Sha256 => "sha256",
            HashAlgorithm::Sha384 => "sha384",
        }
    }
}

impl fmt::Display for HashAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for HashAlgorithm {
    type Err = KdfError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "sha256" | "sha-256" => Ok(HashAlgorithm::Sha256),
            "sha384" | "sha-384" => Ok(HashAlgorithm::Sha384),
            _ => Err(KdfError::UnknownAlgorithm(s.to_string())),
        }
    }
}

impl TryFrom<&str> for HashAlgorithm {
    type Error = KdfError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        s.parse()
    }
}
