//! Poloniex REST API client implementation.

use std::sync::Arc;
use std::time::Duration;

use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderValue, USER_AGENT};
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};
use reqwest_tracing::TracingMiddleware;
use serde_json::Value;
use url::Url;

use crate::auth::{
    CredentialsProvider, IncreasingNonce, NonceProvider, RequestSigner, encode_params,
};
use crate::clock::{Clock, SystemClock};
use crate::error::PoloniexError;
use crate::rest::endpoints::{POLONIEX_PRIVATE_URL, POLONIEX_PUBLIC_URL};
use crate::rest::private::PrivateCommand;
use crate::rest::public::PublicCommand;
use crate::rest::traits::PoloniexApi;

/// The Poloniex REST API client.
///
/// Public commands are sent as `GET {public_url}?command=...`; private
/// commands as a signed `POST {private_url}`. Response bodies are returned
/// as parsed JSON, unmodified. An exchange error such as
/// `{"error": "Invalid currency pair."}` is a successful result; see
/// [`ApiError::from_response`](crate::error::ApiError::from_response).
///
/// Nothing is retried. Clones share the nonce provider.
///
/// # Example
///
/// ```rust,no_run
/// use poloniex_api_client::rest::{OrderBookRequest, PoloniexClient};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     // Create a client for public commands only
///     let client = PoloniexClient::new();
///
///     let book = client
///         .return_order_book(&OrderBookRequest::new("btc_eth").depth(10))
///         .await?;
///     println!("Asks: {}", book["asks"]);
///
///     Ok(())
/// }
/// ```
///
/// For private commands, provide credentials:
///
/// ```rust,no_run
/// use poloniex_api_client::rest::PoloniexClient;
/// use poloniex_api_client::auth::StaticCredentials;
/// use std::sync::Arc;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let credentials = Arc::new(StaticCredentials::new("api_key", "api_secret"));
///     let client = PoloniexClient::builder()
///         .credentials(credentials)
///         .build();
///
///     let balances = client.return_balances().await?;
///     println!("Balances: {}", balances);
///
///     Ok(())
/// }
/// ```
#[derive(Clone)]
pub struct PoloniexClient {
    http_client: ClientWithMiddleware,
    public_url: String,
    private_url: String,
    signer: RequestSigner,
    clock: Arc<dyn Clock>,
}

impl PoloniexClient {
    /// Create a new client with default settings.
    ///
    /// This client can only access public commands.
    /// Use [`PoloniexClient::builder()`] to configure credentials.
    pub fn new() -> Self {
        Self::builder().build()
    }

    /// Create a new client builder.
    pub fn builder() -> PoloniexClientBuilder {
        PoloniexClientBuilder::new()
    }

    /// Whether usable credentials are configured.
    pub fn has_credentials(&self) -> bool {
        self.signer.has_credentials()
    }

    /// Send a public command.
    pub async fn send_public(&self, command: &PublicCommand) -> Result<Value, PoloniexError> {
        let params = command.params(self.clock.as_ref())?;

        let mut url = Url::parse(&self.public_url)?;
        url.set_query(Some(&encode_params(&params)?));

        tracing::debug!(command = command.name(), "sending public command");
        let response = self.http_client.get(url).send().await?;
        self.parse_response(response).await
    }

    /// Send a private command.
    ///
    /// Credentials and arguments are checked before a nonce is allocated or
    /// anything is sent.
    pub async fn send_private(&self, command: &PrivateCommand) -> Result<Value, PoloniexError> {
        self.signer.credentials()?;
        let params = command.params(self.clock.as_ref())?;
        let url = Url::parse(&self.private_url)?;

        let signed = self.signer.sign_params(params)?;

        tracing::debug!(
            command = command.name(),
            nonce = signed.nonce,
            "sending private command"
        );

        let mut request = self
            .http_client
            .post(url)
            .header(CONTENT_TYPE, "application/x-www-form-urlencoded");
        for (name, value) in signed.headers.pairs() {
            request = request.header(name, value);
        }

        let response = request.body(signed.body).send().await?;
        self.parse_response(response).await
    }

    /// Parse a response body as JSON.
    async fn parse_response(&self, response: reqwest::Response) -> Result<Value, PoloniexError> {
        let status = response.status();
        let body = response.text().await?;

        serde_json::from_str(&body).map_err(|e| {
            PoloniexError::InvalidResponse(format!(
                "HTTP {}: failed to parse response: {}. Body: {}",
                status, e, body
            ))
        })
    }
}

impl Default for PoloniexClient {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for PoloniexClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PoloniexClient")
            .field("public_url", &self.public_url)
            .field("private_url", &self.private_url)
            .field("has_credentials", &self.has_credentials())
            .finish()
    }
}

impl PoloniexApi for PoloniexClient {
    async fn send_public(&self, command: &PublicCommand) -> Result<Value, PoloniexError> {
        PoloniexClient::send_public(self, command).await
    }

    async fn send_private(&self, command: &PrivateCommand) -> Result<Value, PoloniexError> {
        PoloniexClient::send_private(self, command).await
    }
}

/// Builder for [`PoloniexClient`].
pub struct PoloniexClientBuilder {
    public_url: String,
    private_url: String,
    credentials: Option<Arc<dyn CredentialsProvider>>,
    nonce_provider: Option<Arc<dyn NonceProvider>>,
    clock: Option<Arc<dyn Clock>>,
    user_agent: Option<String>,
    timeout: Option<Duration>,
}

impl PoloniexClientBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            public_url: POLONIEX_PUBLIC_URL.to_string(),
            private_url: POLONIEX_PRIVATE_URL.to_string(),
            credentials: None,
            nonce_provider: None,
            clock: None,
            user_agent: None,
            timeout: None,
        }
    }

    /// Point both endpoints at `{url}/public` and `{url}/tradingApi`
    /// (useful for testing with a mock server).
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        let url = url.into();
        let url = url.trim_end_matches('/');
        self.public_url = format!("{url}/public");
        self.private_url = format!("{url}/tradingApi");
        self
    }

    /// Set the public endpoint URL.
    pub fn public_url(mut self, url: impl Into<String>) -> Self {
        self.public_url = url.into();
        self
    }

    /// Set the private endpoint URL.
    pub fn private_url(mut self, url: impl Into<String>) -> Self {
        self.private_url = url.into();
        self
    }

    /// Set the credentials provider for authenticated requests.
    pub fn credentials(mut self, credentials: Arc<dyn CredentialsProvider>) -> Self {
        self.credentials = Some(credentials);
        self
    }

    /// Set a custom nonce provider.
    ///
    /// Share one provider between all clients using the same API key.
    pub fn nonce_provider(mut self, provider: Arc<dyn NonceProvider>) -> Self {
        self.nonce_provider = Some(provider);
        self
    }

    /// Set the clock used to fill in default time ranges.
    pub fn clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = Some(clock);
        self
    }

    /// Set a custom user agent.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Set a timeout applied to every request.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Build the client.
    pub fn build(self) -> PoloniexClient {
        // Build default headers.
        let mut headers = HeaderMap::new();
        let user_agent = self
            .user_agent
            .unwrap_or_else(|| format!("poloniex-api-client/{}", env!("CARGO_PKG_VERSION")));
        let header_value = HeaderValue::from_str(&user_agent)
            .unwrap_or_else(|_| HeaderValue::from_static("poloniex-api-client"));
        headers.insert(USER_AGENT, header_value);

        let mut reqwest_builder = reqwest::Client::builder().default_headers(headers);
        if let Some(timeout) = self.timeout {
            reqwest_builder = reqwest_builder.timeout(timeout);
        }
        let reqwest_client = reqwest_builder.build().unwrap_or_else(|error| {
            tracing::warn!(
                %error,
                "failed to build configured HTTP client; timeout and user agent are not applied"
            );
            reqwest::Client::new()
        });

        let client = ClientBuilder::new(reqwest_client)
            .with(TracingMiddleware::default())
            .build();

        let nonce_provider = self
            .nonce_provider
            .unwrap_or_else(|| Arc::new(IncreasingNonce::new()));

        PoloniexClient {
            http_client: client,
            public_url: self.public_url,
            private_url: self.private_url,
            signer: RequestSigner::new(self.credentials, nonce_provider),
            clock: self.clock.unwrap_or_else(|| Arc::new(SystemClock)),
        }
    }
}

impl Default for PoloniexClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::StaticCredentials;
    use crate::rest::public::ChartDataRequest;

    #[test]
    fn test_base_url_sets_both_endpoints() {
        let client = PoloniexClient::builder()
            .base_url("http://127.0.0.1:8080/")
            .build();
        assert_eq!(client.public_url, "http://127.0.0.1:8080/public");
        assert_eq!(client.private_url, "http://127.0.0.1:8080/tradingApi");
    }

    #[test]
    fn test_default_endpoints() {
        let client = PoloniexClient::new();
        assert_eq!(client.public_url, POLONIEX_PUBLIC_URL);
        assert_eq!(client.private_url, POLONIEX_PRIVATE_URL);
        assert!(!client.has_credentials());
    }

    #[test]
    fn test_debug_hides_credentials() {
        let client = PoloniexClient::builder()
            .credentials(Arc::new(StaticCredentials::new("my_key", "super_secret")))
            .build();
        let debug_str = format!("{:?}", client);
        assert!(debug_str.contains("has_credentials: true"));
        assert!(!debug_str.contains("super_secret"));
    }

    #[test]
    fn test_private_without_credentials_fails_locally() {
        // Unroutable URL: reaching the network would surface a different error.
        let client = PoloniexClient::builder().base_url("http://0.0.0.0:1").build();
        let err = tokio_test::block_on(client.return_balances()).unwrap_err();
        assert!(matches!(err, PoloniexError::MissingCredentials));
    }

    #[test]
    fn test_bad_period_fails_locally() {
        let client = PoloniexClient::builder().base_url("http://0.0.0.0:1").build();
        let err = tokio_test::block_on(
            client.return_chart_data(&ChartDataRequest::new("BTC_ETH", 123)),
        )
        .unwrap_err();
        assert!(matches!(err, PoloniexError::Validation(_)));
    }
}
