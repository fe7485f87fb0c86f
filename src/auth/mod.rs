//! Authentication module for Poloniex API.
//!
//! This module provides:
//! - Credential management with secure secret storage
//! - Nonce generation for replay attack prevention
//! - Parameter encoding and HMAC-SHA512 signature generation
//! - [`RequestSigner`], which combines the above into a signed request

mod credentials;
mod nonce;
mod signature;
mod signer;

pub use credentials::{
    API_KEY_VAR, API_SECRET_VAR, Credentials, CredentialsProvider, EnvCredentials,
    StaticCredentials,
};
pub use nonce::{IncreasingNonce, NonceProvider};
pub use signature::{
    AuthHeaders, KEY_HEADER, SIGN_HEADER, build_headers, encode_params, sign,
};
pub use signer::{NONCE_PARAM, RequestSigner, SignedRequest};
