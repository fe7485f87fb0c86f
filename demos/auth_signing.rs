//! Example: Authentication helpers and signing.
//!
//! Run with: cargo run --example auth_signing

use std::sync::Arc;

use poloniex_api_client::auth::{
    IncreasingNonce, NonceProvider, RequestSigner, StaticCredentials, encode_params, sign,
};
use poloniex_api_client::types::Params;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Nonce generation for authenticated requests.
    let nonce = IncreasingNonce::new();
    println!("Next nonce: {}", nonce.next_nonce()?);

    // Low-level: encode and sign by hand.
    let params = Params::new()
        .with("command", "returnBalances")
        .with("nonce", 1_500_000_000_000_000u64);
    let body = encode_params(&params)?;
    println!("Body: {body}");
    println!("Sign: {}", sign(body.as_bytes(), b"api_secret")?);

    // High-level: the signer injects the nonce and builds the headers.
    let signer = RequestSigner::with_credentials(Arc::new(StaticCredentials::new(
        "api_key",
        "api_secret",
    )));
    let signed = signer.sign_params(Params::new().with("command", "returnFeeInfo"))?;
    println!("Signed body: {}", signed.body);
    for (name, value) in signed.headers.pairs() {
        println!("{name}: {value}");
    }

    Ok(())
}
