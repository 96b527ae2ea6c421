#![deny(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::panic)]

//! HMAC (Hash-based Message Authentication Code)
//!
//! HMAC over SHA-256 and SHA-384 using the audited `hmac` crate from RustCrypto
//! (FIPS 198-1). The message is supplied as a sequence of chunks which are fed
//! to the MAC in order, so callers never need to concatenate secret-bearing
//! buffers.
//!
//! Keys of any length are accepted: keys longer than the hash block size are
//! hashed first, shorter keys (including the empty key) are zero-padded.

use hmac::{Hmac, Mac};
use sha2::{Sha256, Sha384};

use crate::error::{KdfError, Result};
use crate::hash::HashAlgorithm;

/// HMAC-SHA256 type alias using the audited hmac crate
pub type HmacSha256 = Hmac<Sha256>;

/// HMAC-SHA384 type alias using the audited hmac crate
pub type HmacSha384 = Hmac<Sha384>;

/// Compute `HMAC(alg, key, chunks[0] || chunks[1] || ...)`.
///
/// The returned tag is exactly `alg.output_len()` bytes.
///
/// # Errors
/// Returns `KdfError::InvalidKey` if the MAC cannot be keyed. HMAC accepts
/// keys of every length, so this only surfaces a failure of the underlying
/// crate.
pub fn hmac_chunks(alg: HashAlgorithm, key: &[u8], chunks: &[&[u8]]) -> Result<Vec<u8>> {
    match alg {
        HashAlgorithm::Sha256 => compute::<HmacSha256>(key, chunks),
        HashAlgorithm::Sha384 => compute::<HmacSha384>(key, chunks),
    }
}

fn compute<M>(key: &[u8], chunks: &[&[u8]]) -> Result<Vec<u8>>
where
    M: Mac + hmac::digest::KeyInit,
{
    let mut mac = <M as Mac>::new_from_slice(key)
        .map_err(|e| KdfError::InvalidKey(e.to_string()))?;
    for chunk in chunks {
        mac.update(chunk);
    }
    Ok(mac.finalize().into_bytes().to_vec())
}
