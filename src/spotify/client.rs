use std::time::{Duration, Instant};

use reqwest::{Client, Method, RequestBuilder, header};
use tokio::sync::Mutex;
use tokio::time::sleep;

use crate::{
    config,
    management::TokenManager,
    types::{Device, DevicesResponse, SearchResponse, Track},
    warning,
};

use super::DEFAULT_TIMEOUT;

/// Total time budget for the wait-for-device poll loop.
const DEVICE_WAIT_BUDGET: Duration = Duration::from_secs(60);
/// Delay between device polls while waiting for a device to register.
const DEVICE_POLL_INTERVAL: Duration = Duration::from_secs(1);

/// Client facade for the Spotify Web API playback surface.
///
/// Composes the HTTP transport and the token manager into the operations the
/// launcher needs: search, device listing, queueing, playback and the
/// wait-for-device path. The token manager sits behind a mutex, so a refresh
/// triggered by one invocation cannot race a refresh triggered by another.
///
/// Every operation awaits its network round trip to completion before
/// returning; callers observe a strictly sequential request flow.
pub struct SpotifyClient {
    http: Client,
    tokens: Mutex<TokenManager>,
}

impl SpotifyClient {
    pub fn new(client_id: String, client_secret: String, refresh_token: String) -> Self {
        SpotifyClient {
            http: Client::new(),
            tokens: Mutex::new(TokenManager::new(client_id, client_secret, refresh_token)),
        }
    }

    /// Builds a client from the credentials in the environment configuration.
    pub fn from_config() -> Self {
        Self::new(
            config::spotify_client_id(),
            config::spotify_client_secret(),
            config::spotify_refresh_token(),
        )
    }

    /// True when no usable access token is currently held.
    pub async fn is_token_expired(&self) -> bool {
        self.tokens.lock().await.is_expired()
    }

    /// Runs a refresh-token exchange and stores the resulting access token.
    ///
    /// Returns true when a usable access token is held afterwards. On failure
    /// the server-provided error text is available via
    /// [`SpotifyClient::last_error`]. The token lock is held for the whole
    /// exchange, serializing concurrent refresh attempts.
    pub async fn refresh_access_token(&self) -> bool {
        self.tokens.lock().await.refresh().await
    }

    /// Description of the most recent token refresh failure, empty when the
    /// last refresh succeeded.
    pub async fn last_error(&self) -> String {
        self.tokens.lock().await.last_error().to_string()
    }

    /// Replaces the client id. Returns whether the value changed, so a host
    /// embedding the client can decide whether to persist its settings.
    pub async fn set_client_id(&self, id: &str) -> bool {
        self.tokens.lock().await.set_client_id(id)
    }

    /// Replaces the client secret. Returns whether the value changed.
    pub async fn set_client_secret(&self, secret: &str) -> bool {
        self.tokens.lock().await.set_client_secret(secret)
    }

    /// Replaces the refresh token. Returns whether the value changed.
    pub async fn set_refresh_token(&self, token: &str) -> bool {
        self.tokens.lock().await.set_refresh_token(token)
    }

    /// Probes whether the Spotify accounts server answers at all.
    ///
    /// Issues a plain GET against the token endpoint, not to obtain a token
    /// but merely to check reachability. Returns true iff any response bytes
    /// arrived; every transport failure is caught and yields false, never an
    /// error.
    pub async fn check_server_response(&self) -> bool {
        let res = self
            .http
            .get(&config::spotify_token_url())
            .timeout(DEFAULT_TIMEOUT)
            .send()
            .await;

        match res {
            Ok(response) => match response.bytes().await {
                Ok(bytes) => !bytes.is_empty(),
                Err(_) => false,
            },
            Err(_) => false,
        }
    }

    /// Searches Spotify for tracks matching a query.
    ///
    /// Builds the search request with the URL-encoded query, `type=track`
    /// and the requested result limit, and parses the response into domain
    /// [`Track`] values.
    ///
    /// # Arguments
    ///
    /// * `query` - Free-text search query
    /// * `limit` - Maximum number of tracks to return
    ///
    /// # Returns
    ///
    /// Returns a `Result` containing:
    /// - `Ok(Vec<Track>)` - Parsed tracks in API order; a response with no
    ///   result items yields an empty vector.
    /// - `Err(reqwest::Error)` - Network error, HTTP error or malformed body.
    ///
    /// # Example
    ///
    /// ```
    /// let tracks = client.search_tracks("random access memories", 5).await?;
    /// for track in &tracks {
    ///     println!("{} - {}", track.name, track.artists);
    /// }
    /// ```
    pub async fn search_tracks(
        &self,
        query: &str,
        limit: u32,
    ) -> Result<Vec<Track>, reqwest::Error> {
        let limit = limit.to_string();
        let request = self
            .request(Method::GET, &config::spotify_search_url())
            .await
            .query(&[("q", query), ("type", "track"), ("limit", limit.as_str())]);

        let json = request.send().await?.json::<SearchResponse>().await?;

        Ok(json.tracks.items.into_iter().map(Track::from).collect())
    }

    /// Returns the playback devices currently registered with the user's
    /// account.
    ///
    /// The list is a transient snapshot; devices appear and disappear as
    /// Spotify clients start and stop. An account with no running client
    /// yields an empty vector, which callers treat as "launch one locally".
    ///
    /// # Returns
    ///
    /// Returns a `Result` containing:
    /// - `Ok(Vec<Device>)` - Devices in API order
    /// - `Err(reqwest::Error)` - Network error, HTTP error or malformed body
    pub async fn get_devices(&self) -> Result<Vec<Device>, reqwest::Error> {
        let request = self
            .request(Method::GET, &config::spotify_devices_url())
            .await;

        let json = request.send().await?.json::<DevicesResponse>().await?;

        Ok(json.devices.into_iter().map(Device::from).collect())
    }

    /// Adds a track to the playback queue of the active device.
    ///
    /// Fire-and-forget: the call awaits the round trip but failures are
    /// reported through the `warning!` hook and never propagated, so a
    /// failed queue request cannot break the surrounding result flow.
    pub async fn add_track_to_queue(&self, track: &Track) {
        let request = self
            .request(Method::POST, &config::spotify_queue_url())
            .await
            .query(&[("uri", &track.uri)]);

        match request.send().await {
            Ok(res) if !res.status().is_success() => {
                warning!("Queue request returned {}", res.status());
            }
            Err(e) => warning!("Queue request failed: {}", e),
            _ => {}
        }
    }

    /// Starts playback of a track on a specific device.
    ///
    /// Issues a PUT against the play endpoint scoped to `device_id` with the
    /// body `{"uris": ["<uri>"]}`. Fire-and-forget with the same failure
    /// reporting as [`SpotifyClient::add_track_to_queue`].
    pub async fn play_track(&self, track: &Track, device_id: &str) {
        let request = self
            .request(Method::PUT, &config::spotify_play_url())
            .await
            .query(&[("device_id", device_id)])
            .json(&serde_json::json!({ "uris": [track.uri] }));

        match request.send().await {
            Ok(res) if !res.status().is_success() => {
                warning!("Play request returned {}", res.status());
            }
            Err(e) => warning!("Play request failed: {}", e),
            _ => {}
        }
    }

    /// Waits for a playback device to register, then plays a track on it.
    ///
    /// Intended for the moment right after a local Spotify client was
    /// launched and has not yet shown up in the device list: the devices
    /// endpoint is polled once per second until the list is non-empty, then
    /// the track is played on the first device returned.
    ///
    /// The wait is bounded by a 60-second budget with a 1-second poll
    /// interval; a device that never appears yields `false` instead of an
    /// endless poll. Poll round trips that fail are treated as "no device
    /// yet" and consume budget like any other attempt.
    ///
    /// # Returns
    ///
    /// True when a device appeared and the play request was issued, false
    /// when the budget ran out.
    pub async fn wait_for_device_and_play(&self, track: &Track) -> bool {
        self.wait_for_device_and_play_within(track, DEVICE_WAIT_BUDGET, DEVICE_POLL_INTERVAL)
            .await
    }

    /// [`SpotifyClient::wait_for_device_and_play`] with an explicit time
    /// budget and poll interval.
    pub async fn wait_for_device_and_play_within(
        &self,
        track: &Track,
        budget: Duration,
        interval: Duration,
    ) -> bool {
        let start = Instant::now();

        while start.elapsed() < budget {
            if let Ok(devices) = self.get_devices().await {
                if let Some(device) = devices.first() {
                    self.play_track(track, &device.id).await;
                    return true;
                }
            }
            sleep(interval).await;
        }

        false
    }

    /// Builds an authorized API request: bearer token from the current
    /// session, JSON accept/content-type headers and the fixed timeout.
    async fn request(&self, method: Method, url: &str) -> RequestBuilder {
        let token = self.tokens.lock().await.access_token().to_string();

        self.http
            .request(method, url)
            .bearer_auth(token)
            .header(header::ACCEPT, "application/json")
            .header(header::CONTENT_TYPE, "application/json")
            .timeout(DEFAULT_TIMEOUT)
    }
}
