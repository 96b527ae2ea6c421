#![deny(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::panic)]

//! # fdo-kdf
//!
//! NIST SP 800-108 counter-mode key derivation with an HMAC PRF, as used by
//! FIDO Device Onboard (FDO) to derive its onboarding tunnel keys.
//!
//! ## Modules
//!
//! - **kdf::sp800_108_counter_kdf**: the general counter KDF
//! - **kdf::fdo**: the FDO tunnel binding (`"FIDO-KDF"` / `"AutomaticOnboardTunnel"`)
//! - **hash**: supported hash algorithms (SHA-256, SHA-384)
//! - **mac**: HMAC (FIPS 198-1) over chunked messages
//! - **self_test**: Known Answer Tests for start-up verification
//!
//! ## Example
//!
//! ```
//! use fdo_kdf::{fdo_tunnel_kdf, HashAlgorithm};
//!
//! let shared_secret = [0x5au8; 32];
//! let session_key = fdo_tunnel_kdf(32, HashAlgorithm::Sha256, &shared_secret, None)?;
//! assert_eq!(session_key.len(), 32);
//! # Ok::<(), fdo_kdf::KdfError>(())
//! ```
//!
//! Every entry point is a pure function with no shared state and is safe to
//! call from any number of threads.

pub mod error;
pub mod hash;
pub mod kdf;
pub mod mac;
pub mod self_test;

pub use error::{KdfError, Result};
pub use hash::HashAlgorithm;
pub use kdf::{
    CounterKdfParams, DerivedKey, FDO_KDF_CONTEXT, FDO_KDF_LABEL, MAX_ITERATIONS, counter_kdf,
    counter_kdf_named, counter_kdf_with_params, fdo_tunnel_kdf, max_output_len,
};
