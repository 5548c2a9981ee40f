use chrono::{DateTime, Duration, Utc};
use serde_json::Value;

use crate::spotify;

/// Owns the Spotify session credentials and the derived access token.
///
/// Credentials are supplied by configuration and may be replaced at runtime
/// through the setters. The access token and its expiry are derived state,
/// refreshed on demand via [`TokenManager::refresh`]. `SpotifyClient` keeps
/// the manager behind a mutex so overlapping invocations cannot race a
/// refresh.
pub struct TokenManager {
    client_id: String,
    client_secret: String,
    refresh_token: String,
    access_token: String,
    expires_at: Option<DateTime<Utc>>,
    last_error: String,
}

impl TokenManager {
    pub fn new(client_id: String, client_secret: String, refresh_token: String) -> Self {
        TokenManager {
            client_id,
            client_secret,
            refresh_token,
            access_token: String::new(),
            expires_at: None,
            last_error: String::new(),
        }
    }

    /// True when no usable access token is held: either none was ever
    /// obtained, or its expiry time has passed.
    pub fn is_expired(&self) -> bool {
        if self.access_token.is_empty() {
            return true;
        }

        match self.expires_at {
            Some(at) => Utc::now() >= at,
            None => true,
        }
    }

    /// Exchanges the refresh token for a new access token.
    ///
    /// Returns true when a non-empty access token is held after the call.
    /// On failure the access token is cleared; a rejection records the
    /// server-provided error text in [`TokenManager::last_error`], while a
    /// transport failure leaves it empty so callers fall back to their
    /// generic connectivity message.
    pub async fn refresh(&mut self) -> bool {
        let response = spotify::auth::exchange_refresh_token(
            &self.client_id,
            &self.client_secret,
            &self.refresh_token,
        )
        .await;

        match response {
            Ok(json) => self.apply_refresh_response(&json),
            Err(_) => {
                self.access_token.clear();
                self.expires_at = None;
                // No server-provided text exists for a transport failure.
                self.last_error.clear();
                false
            }
        }
    }

    /// Interprets a token-endpoint response body and updates the session
    /// state accordingly. Split out of [`TokenManager::refresh`] so the
    /// interpretation is testable without a network.
    pub fn apply_refresh_response(&mut self, json: &Value) -> bool {
        match json["access_token"].as_str() {
            Some(token) if !token.is_empty() => {
                // A response without a lifetime counts as already expired;
                // the next operation triggers another refresh.
                let expires_in = json["expires_in"].as_i64().unwrap_or(0);
                self.access_token = token.to_string();
                self.expires_at = Some(Utc::now() + Duration::seconds(expires_in));
                self.last_error.clear();
                true
            }
            _ => {
                self.access_token.clear();
                self.expires_at = None;
                self.last_error = json["error_description"]
                    .as_str()
                    .or_else(|| json["error"].as_str())
                    .unwrap_or_default()
                    .to_string();
                false
            }
        }
    }

    pub fn access_token(&self) -> &str {
        &self.access_token
    }

    /// String description of the most recent refresh failure. Empty after a
    /// successful refresh.
    pub fn last_error(&self) -> &str {
        &self.last_error
    }

    pub fn client_id(&self) -> &str {
        &self.client_id
    }

    /// Replaces the client id. Returns whether the value changed, so the
    /// calling layer can decide whether to persist its configuration.
    pub fn set_client_id(&mut self, id: &str) -> bool {
        if self.client_id == id {
            return false;
        }
        self.client_id = id.to_string();
        true
    }

    pub fn client_secret(&self) -> &str {
        &self.client_secret
    }

    pub fn set_client_secret(&mut self, secret: &str) -> bool {
        if self.client_secret == secret {
            return false;
        }
        self.client_secret = secret.to_string();
        true
    }

    pub fn refresh_token(&self) -> &str {
        &self.refresh_token
    }

    pub fn set_refresh_token(&mut self, token: &str) -> bool {
        if self.refresh_token == token {
            return false;
        }
        self.refresh_token = token.to_string();
        true
    }
}
