//! Message Authentication Codes

pub mod hmac;
