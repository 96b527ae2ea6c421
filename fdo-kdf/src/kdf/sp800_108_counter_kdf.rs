#![deny(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::panic)]

//! SP 800-108: Counter-based Key Derivation Function
//!
//! NIST SP 800-108 specifies key derivation using pseudorandom functions.
//! This implementation provides the counter mode KDF (counter placed before
//! the fixed input data) using HMAC-SHA256 or HMAC-SHA384 as the PRF.
//!
//! Each block is computed as:
//! K(i) = PRF(KI, [i]_1 || Label || 0x00 || Context || ContextRand || [L]_2)
//!
//! Where:
//! - KI: Keying material input
//! - i: Counter, a single byte starting at 0
//! - Label: Purpose of the derived key
//! - Context: Usage context of the derived key
//! - ContextRand: Optional per-session bytes appended to the context
//! - L: Output length in bits (16-bit big-endian)
//!
//! The output is the first `size_bytes` bytes of K(0) || K(1) || ... || K(n-1).
//!
//! The one-byte counter and the two-byte length field are kept as deployed
//! FDO implementations encode them. Together they cap the output at
//! [`max_output_len`] bytes (8191 for both SHA-256 and SHA-384); larger
//! requests are rejected rather than wrapped.

use std::fmt;

use subtle::ConstantTimeEq;
use tracing::{debug, instrument};
use zeroize::{Zeroize, Zeroizing};

use crate::error::{KdfError, Result};
use crate::hash::HashAlgorithm;
use crate::mac::hmac::hmac_chunks;

/// Number of distinct values of the one-byte block counter.
pub const MAX_ITERATIONS: usize = 256;

/// Largest bit length representable in the two-byte `[L]_2` field.
const MAX_LENGTH_BITS: usize = u16::MAX as usize;

/// Separator between label and context.
const SEPARATOR: [u8; 1] = [0x00];

/// Largest output length, in bytes, the construction can produce for `alg`.
#[must_use]
pub const fn max_output_len(alg: HashAlgorithm) -> usize {
    let by_counter = MAX_ITERATIONS * alg.output_len();
    let by_length_field = MAX_LENGTH_BITS / 8;
    if by_counter < by_length_field { by_counter } else { by_length_field }
}

/// Derived key material
///
/// Zeroized on drop. Equality is constant-time and `Debug` never prints
/// the key bytes.
#[derive(Clone)]
pub struct DerivedKey {
    key: Vec<u8>,
}

impl Zeroize for DerivedKey {
    fn zeroize(&mut self) {
        self.key.zeroize();
    }
}

impl Drop for DerivedKey {
    fn drop(&mut self) {
        self.zeroize();
    }
}

impl DerivedKey {
    /// Get the derived key
    #[must_use]
    pub fn key(&self) -> &[u8] {
        &self.key
    }

    /// Length of the derived key in bytes
    #[must_use]
    pub fn len(&self) -> usize {
        self.key.len()
    }

    /// Whether the derived key is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.key.is_empty()
    }
}

impl AsRef<[u8]> for DerivedKey {
    fn as_ref(&self) -> &[u8] {
        &self.key
    }
}

impl fmt::Debug for DerivedKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DerivedKey").field("len", &self.key.len()).finish_non_exhaustive()
    }
}

impl ConstantTimeEq for DerivedKey {
    fn ct_eq(&self, other: &Self) -> subtle::Choice {
        self.key.as_slice().ct_eq(other.key.as_slice())
    }
}

impl PartialEq for DerivedKey {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl Eq for DerivedKey {}

/// Counter-based KDF parameters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CounterKdfParams {
    /// Label identifying the purpose of key derivation
    pub label: Vec<u8>,
    /// Context-specific information
    pub context: Vec<u8>,
    /// Caller-supplied random bytes appended after the context
    pub context_rand: Vec<u8>,
}

impl CounterKdfParams {
    /// Create new KDF parameters with custom label
    #[must_use]
    pub fn new(label: &[u8]) -> Self {
        Self { label: label.to_vec(), context: vec![], context_rand: vec![] }
    }

    /// Set context information
    #[must_use]
    pub fn with_context(mut self, context: &[u8]) -> Self {
        self.context = context.to_vec();
        self
    }

    /// Set the random context extension
    #[must_use]
    pub fn with_context_rand(mut self, context_rand: &[u8]) -> Self {
        self.context_rand = context_rand.to_vec();
        self
    }
}

/// SP 800-108 Counter-based Key Derivation Function
///
/// Derives `size_bytes` bytes from `key` using HMAC with `hash_alg` as the
/// PRF. `context_rand` of `None` is equivalent to an empty slice.
///
/// # Arguments
/// * `size_bytes` - Desired output length in bytes
/// * `hash_alg` - Hash function for the HMAC PRF
/// * `key` - Keying material input (any length)
/// * `label` - Purpose of the derived key
/// * `context` - Usage context of the derived key
/// * `context_rand` - Optional random context extension
///
/// # Example
/// ```
/// use fdo_kdf::{counter_kdf, HashAlgorithm};
///
/// let key = [0x42u8; 32];
/// let derived = counter_kdf(40, HashAlgorithm::Sha256, &key, b"label", b"context", None)?;
/// assert_eq!(derived.len(), 40);
/// # Ok::<(), fdo_kdf::KdfError>(())
/// ```
///
/// # Errors
/// Returns `KdfError::InvalidLength` if `size_bytes` is zero or exceeds
/// [`max_output_len`]. Nothing is computed in that case.
#[instrument(
    level = "debug",
    skip(key, label, context, context_rand),
    fields(algorithm = %hash_alg, key_len = key.len(), has_context_rand = context_rand.is_some())
)]
pub fn counter_kdf(
    size_bytes: usize,
    hash_alg: HashAlgorithm,
    key: &[u8],
    label: &[u8],
    context: &[u8],
    context_rand: Option<&[u8]>,
) -> Result<DerivedKey> {
    let max = max_output_len(hash_alg);
    if size_bytes == 0 || size_bytes > max {
        debug!(requested = size_bytes, max, "rejecting counter KDF output length");
        return Err(KdfError::InvalidLength { requested: size_bytes, max });
    }

    let context_rand = context_rand.unwrap_or_default();

    // Bounded by max_output_len: l <= 65535 and n <= 256
    let l_bits = size_bytes * 8;
    let length_field = u16::try_from(l_bits)
        .map_err(|_e| KdfError::InvalidLength { requested: size_bytes, max })?
        .to_be_bytes();
    let iterations = l_bits.div_ceil(hash_alg.output_bits());

    let mut output = Zeroizing::new(Vec::with_capacity(iterations * hash_alg.output_len()));
    for i in 0..iterations {
        let counter = [u8::try_from(i)
            .map_err(|_e| KdfError::InvalidLength { requested: size_bytes, max })?];
        let message: [&[u8]; 6] =
            [&counter, label, &SEPARATOR, context, context_rand, &length_field];

        let mut block = hmac_chunks(hash_alg, key, &message)?;
        output.extend_from_slice(&block);
        block.zeroize();
    }
    output.truncate(size_bytes);

    Ok(DerivedKey { key: std::mem::take(&mut *output) })
}

/// Counter KDF taking the hash algorithm by its textual identifier
///
/// Accepts `"sha256"` and `"sha384"` (see [`HashAlgorithm`]'s `FromStr`).
///
/// # Errors
/// Returns `KdfError::UnknownAlgorithm` before any computation if `hash_alg`
/// is not recognised, otherwise the errors of [`counter_kdf`].
pub fn counter_kdf_named(
    size_bytes: usize,
    hash_alg: &str,
    key: &[u8],
    label: &[u8],
    context: &[u8],
    context_rand: Option<&[u8]>,
) -> Result<DerivedKey> {
    let hash_alg = hash_alg.parse::<HashAlgorithm>().inspect_err(|e| {
        debug!(error = %e, "rejecting counter KDF hash algorithm");
    })?;
    counter_kdf(size_bytes, hash_alg, key, label, context, context_rand)
}

/// Counter KDF with label and context taken from `params`
///
/// # Errors
/// Same as [`counter_kdf`].
pub fn counter_kdf_with_params(
    size_bytes: usize,
    hash_alg: HashAlgorithm,
    key: &[u8],
    params: &CounterKdfParams,
) -> Result<DerivedKey> {
    counter_kdf(
        size_bytes,
        hash_alg,
        key,
        &params.label,
        &params.context,
        Some(params.context_rand.as_slice()),
    )
}
