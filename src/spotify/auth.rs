use base64::{Engine, engine::general_purpose::STANDARD};
use reqwest::{Client, header};
use serde_json::Value;

use crate::config;

use super::DEFAULT_TIMEOUT;

/// Exchanges a refresh token for a new access token.
///
/// Performs the OAuth 2.0 refresh-token grant against the Spotify token
/// endpoint. The request authenticates with an HTTP Basic header built from
/// the client id and secret (`base64(id:secret)`) and posts a form-encoded
/// body:
///
/// ```text
/// grant_type=refresh_token&refresh_token=<token>
/// ```
///
/// # Arguments
///
/// * `client_id` - Spotify application client id
/// * `client_secret` - Spotify application client secret
/// * `refresh_token` - Long-lived refresh token to exchange
///
/// # Returns
///
/// Returns a `Result` containing:
/// - `Ok(Value)` - The parsed response body. On success it carries
///   `access_token` and `expires_in`; on rejection it carries `error` and
///   usually `error_description`. Interpreting the body is the token
///   manager's job, so rejected exchanges still return `Ok` here.
/// - `Err(String)` - Transport failure (no connection, timeout, unreadable
///   body) described as text.
///
/// # Timeout
///
/// The request uses the fixed 10-second transfer timeout shared by all
/// outgoing requests.
///
/// # Example
///
/// ```
/// let json = exchange_refresh_token(&id, &secret, &refresh).await?;
/// if let Some(token) = json["access_token"].as_str() {
///     println!("token expires in {}", json["expires_in"]);
/// }
/// ```
pub async fn exchange_refresh_token(
    client_id: &str,
    client_secret: &str,
    refresh_token: &str,
) -> Result<Value, String> {
    let credentials = STANDARD.encode(format!("{}:{}", client_id, client_secret));

    let client = Client::new();
    let res = client
        .post(&config::spotify_token_url())
        .header(header::AUTHORIZATION, format!("Basic {}", credentials))
        .form(&[
            ("grant_type", "refresh_token"),
            ("refresh_token", refresh_token),
        ])
        .timeout(DEFAULT_TIMEOUT)
        .send()
        .await
        .map_err(|e| e.to_string())?;

    res.json::<Value>().await.map_err(|e| e.to_string())
}
