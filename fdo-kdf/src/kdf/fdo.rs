#![deny(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::panic)]

//! FIDO Device Onboard tunnel key derivation
//!
//! FDO derives its TO2 session keys from the key-exchange shared secret with
//! the counter KDF, binding them to a fixed label and context. The shared
//! secret's random suffix, when present, is passed as `context_rand`.

use tracing::instrument;

use super::sp800_108_counter_kdf::{CounterKdfParams, DerivedKey, counter_kdf};
use crate::error::Result;
use crate::hash::HashAlgorithm;

/// KDF label used by FDO (UTF-8 `"FIDO-KDF"`)
pub const FDO_KDF_LABEL: &[u8] = b"FIDO-KDF";

/// KDF context used by FDO for the onboarding tunnel (UTF-8 `"AutomaticOnboardTunnel"`)
pub const FDO_KDF_CONTEXT: &[u8] = b"AutomaticOnboardTunnel";

impl CounterKdfParams {
    /// Parameters for FDO tunnel key derivation
    #[must_use]
    pub fn fdo_tunnel() -> Self {
        Self::new(FDO_KDF_LABEL).with_context(FDO_KDF_CONTEXT)
    }
}

/// Derive FDO tunnel key material
///
/// Equivalent to [`counter_kdf`] with [`FDO_KDF_LABEL`] and [`FDO_KDF_CONTEXT`].
///
/// # Errors
/// Same as [`counter_kdf`].
#[instrument(level = "debug", skip(key, context_rand), fields(algorithm = %hash_alg))]
pub fn fdo_tunnel_kdf(
    size_bytes: usize,
    hash_alg: HashAlgorithm,
    key: &[u8],
    context_rand: Option<&[u8]>,
) -> Result<DerivedKey> {
    counter_kdf(size_bytes, hash_alg, key, FDO_KDF_LABEL, FDO_KDF_CONTEXT, context_rand)
}
