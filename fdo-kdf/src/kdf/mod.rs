#![deny(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::panic)]

//! Key Derivation Functions
//!
//! ## Supported Algorithms
//!
//! - **SP 800-108 Counter KDF**: Counter-based Key Derivation (NIST SP 800-108)
//!   with HMAC-SHA256 or HMAC-SHA384
//! - **FDO tunnel KDF**: the counter KDF bound to the FDO label and context

pub mod fdo;
pub mod sp800_108_counter_kdf;

pub use fdo::*;
pub use sp800_108_counter_kdf::*;
