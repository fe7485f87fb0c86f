//! Turns a parameter mapping into an authenticated request envelope.

use std::sync::Arc;

use crate::auth::{
    AuthHeaders, Credentials, CredentialsProvider, IncreasingNonce, NonceProvider,
    build_headers, encode_params, sign,
};
use crate::error::PoloniexError;
use crate::types::Params;

/// Name of the nonce parameter injected into every private request.
pub const NONCE_PARAM: &str = "nonce";

/// A private request ready to be sent.
#[derive(Debug, Clone)]
pub struct SignedRequest {
    /// The nonce embedded in `body`.
    pub nonce: u64,
    /// The url-encoded body. This is exactly the signed message.
    pub body: String,
    /// The `Key`/`Sign` header pair.
    pub headers: AuthHeaders,
}

/// Signs private requests with one set of credentials.
///
/// Owns the nonce state for those credentials. Clones share the provider, so
/// every request signed through any clone gets a distinct, increasing nonce.
#[derive(Clone)]
pub struct RequestSigner {
    credentials: Option<Arc<dyn CredentialsProvider>>,
    nonce_provider: Arc<dyn NonceProvider>,
}

impl RequestSigner {
    /// Create a signer from optional credentials and a nonce provider.
    pub fn new(
        credentials: Option<Arc<dyn CredentialsProvider>>,
        nonce_provider: Arc<dyn NonceProvider>,
    ) -> Self {
        Self {
            credentials,
            nonce_provider,
        }
    }

    /// Create a signer with the default time-based nonce provider.
    pub fn with_credentials(credentials: Arc<dyn CredentialsProvider>) -> Self {
        Self::new(Some(credentials), Arc::new(IncreasingNonce::new()))
    }

    /// Whether usable credentials are configured.
    pub fn has_credentials(&self) -> bool {
        self.credentials().is_ok()
    }

    /// The configured credentials, if both key and secret are non-empty.
    pub fn credentials(&self) -> Result<&Credentials, PoloniexError> {
        let creds = self
            .credentials
            .as_ref()
            .ok_or(PoloniexError::MissingCredentials)?
            .get_credentials();
        if !creds.is_complete() {
            return Err(PoloniexError::MissingCredentials);
        }
        Ok(creds)
    }

    /// Allocate the next nonce.
    pub fn next_nonce(&self) -> Result<u64, PoloniexError> {
        self.nonce_provider.next_nonce()
    }

    /// Inject a fresh nonce into `params`, encode and sign them.
    ///
    /// Credentials are checked before a nonce is consumed.
    pub fn sign_params(&self, mut params: Params) -> Result<SignedRequest, PoloniexError> {
        let creds = self.credentials()?;

        let nonce = self.next_nonce()?;
        params.insert(NONCE_PARAM, nonce);

        let body = encode_params(&params)?;
        let signature = sign(body.as_bytes(), creds.expose_secret().as_bytes())?;

        Ok(SignedRequest {
            nonce,
            body,
            headers: build_headers(creds.api_key.clone(), signature),
        })
    }
}

impl std::fmt::Debug for RequestSigner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RequestSigner")
            .field("has_credentials", &self.has_credentials())
            .finish()
    }
}
