//! Configuration management for the Spotify playback launcher.
//!
//! This module handles loading and accessing configuration values from
//! environment variables and `.env` files. It provides a centralized way to
//! manage application configuration including Spotify API credentials,
//! result-list behavior, the local playback fallback and cache locations.
//!
//! The configuration system follows a hierarchical approach:
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the local data directory
//! 3. Application defaults (where applicable)

use dotenv;
use std::{env, path::PathBuf};

const DEFAULT_TOKEN_URL: &str = "https://accounts.spotify.com/api/token";
const DEFAULT_SEARCH_URL: &str = "https://api.spotify.com/v1/search";
const DEFAULT_DEVICES_URL: &str = "https://api.spotify.com/v1/me/player/devices";
const DEFAULT_QUEUE_URL: &str = "https://api.spotify.com/v1/me/player/queue";
const DEFAULT_PLAY_URL: &str = "https://api.spotify.com/v1/me/player/play";

/// Loads environment variables from a `.env` file in the local data directory.
///
/// Creates the necessary directory structure if it doesn't exist and loads
/// environment variables from a `.env` file located in the platform-specific
/// local data directory under `spotlaunch/.env`. This allows users to store
/// credentials without hardcoding sensitive values.
///
/// # Directory Structure
///
/// The function looks for the `.env` file in:
/// - Linux: `~/.local/share/spotlaunch/.env`
/// - macOS: `~/Library/Application Support/spotlaunch/.env`
/// - Windows: `%LOCALAPPDATA%/spotlaunch/.env`
///
/// A missing `.env` file is not an error; configuration may come entirely
/// from process environment variables.
///
/// # Returns
///
/// Returns `Ok(())` if the environment is ready, or an error string if
/// directory creation fails.
///
/// # Example
///
/// ```
/// use spotlaunch::config;
///
/// #[tokio::main]
/// async fn main() {
///     if let Err(e) = config::load_env().await {
///         eprintln!("Configuration error: {}", e);
///     }
/// }
/// ```
pub async fn load_env() -> Result<(), String> {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("spotlaunch/.env");
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent)
            .await
            .map_err(|e| e.to_string())?;
    }

    if path.is_file() {
        dotenv::from_path(path).map_err(|e| e.to_string())?;
    }
    Ok(())
}

/// Returns the Spotify API client ID for authentication.
///
/// Retrieves the `SPOTIFY_API_CLIENT_ID` environment variable which contains
/// the client ID obtained when registering the application with Spotify's
/// developer platform.
///
/// # Panics
///
/// Panics if the `SPOTIFY_API_CLIENT_ID` environment variable is not set.
pub fn spotify_client_id() -> String {
    env::var("SPOTIFY_API_CLIENT_ID").expect("SPOTIFY_API_CLIENT_ID must be set")
}

/// Returns the Spotify API client secret for authentication.
///
/// Retrieves the `SPOTIFY_API_CLIENT_SECRET` environment variable. Together
/// with the client ID it forms the HTTP Basic credentials presented to the
/// token endpoint during refresh-token exchange.
///
/// # Panics
///
/// Panics if the `SPOTIFY_API_CLIENT_SECRET` environment variable is not set.
///
/// # Security Note
///
/// The client secret should be kept confidential and never exposed in logs
/// or version control.
pub fn spotify_client_secret() -> String {
    env::var("SPOTIFY_API_CLIENT_SECRET").expect("SPOTIFY_API_CLIENT_SECRET must be set")
}

/// Returns the long-lived Spotify refresh token.
///
/// Retrieves the `SPOTIFY_API_REFRESH_TOKEN` environment variable. The
/// refresh token is exchanged for short-lived access tokens; obtaining one in
/// the first place is outside the scope of this tool.
///
/// # Panics
///
/// Panics if the `SPOTIFY_API_REFRESH_TOKEN` environment variable is not set.
pub fn spotify_refresh_token() -> String {
    env::var("SPOTIFY_API_REFRESH_TOKEN").expect("SPOTIFY_API_REFRESH_TOKEN must be set")
}

/// Returns the maximum number of tracks a search should yield.
///
/// Reads `SPOTLAUNCH_RESULT_LIMIT`, defaulting to 5 when unset or
/// unparseable.
pub fn result_limit() -> u32 {
    env::var("SPOTLAUNCH_RESULT_LIMIT")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(5)
}

/// Returns whether explicit tracks should appear in results.
///
/// Reads `SPOTLAUNCH_ALLOW_EXPLICIT`, defaulting to true. Any value other
/// than `false`/`0` counts as allowed.
pub fn allow_explicit() -> bool {
    match env::var("SPOTLAUNCH_ALLOW_EXPLICIT") {
        Ok(v) => !matches!(v.to_lowercase().as_str(), "false" | "0"),
        Err(_) => true,
    }
}

/// Returns the command used to launch a local Spotify client.
///
/// Reads `SPOTLAUNCH_SPOTIFY_EXECUTABLE`, defaulting to `spotify`. The
/// command is spawned detached when playback is requested and no device is
/// registered with the user's account.
pub fn spotify_executable() -> String {
    env::var("SPOTLAUNCH_SPOTIFY_EXECUTABLE").unwrap_or_else(|_| "spotify".to_string())
}

/// Returns the directory where downloaded cover images are cached.
///
/// Reads `SPOTLAUNCH_COVERS_DIR`, defaulting to `spotlaunch/covers` under the
/// platform cache directory. The cache holds one JPEG per album id; files are
/// immutable once written.
pub fn covers_dir() -> PathBuf {
    if let Ok(dir) = env::var("SPOTLAUNCH_COVERS_DIR") {
        return PathBuf::from(dir);
    }

    let mut path = dirs::cache_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("spotlaunch/covers");
    path
}

/// Returns the Spotify OAuth token exchange URL.
///
/// Reads `SPOTIFY_API_TOKEN_URL`, defaulting to the documented endpoint
/// `https://accounts.spotify.com/api/token`. The override exists for testing
/// against a local stand-in server.
pub fn spotify_token_url() -> String {
    env::var("SPOTIFY_API_TOKEN_URL").unwrap_or_else(|_| DEFAULT_TOKEN_URL.to_string())
}

/// Returns the Spotify track search URL.
///
/// Reads `SPOTIFY_API_SEARCH_URL`, defaulting to
/// `https://api.spotify.com/v1/search`.
pub fn spotify_search_url() -> String {
    env::var("SPOTIFY_API_SEARCH_URL").unwrap_or_else(|_| DEFAULT_SEARCH_URL.to_string())
}

/// Returns the Spotify player devices URL.
///
/// Reads `SPOTIFY_API_DEVICES_URL`, defaulting to
/// `https://api.spotify.com/v1/me/player/devices`.
pub fn spotify_devices_url() -> String {
    env::var("SPOTIFY_API_DEVICES_URL").unwrap_or_else(|_| DEFAULT_DEVICES_URL.to_string())
}

/// Returns the Spotify player queue URL.
///
/// Reads `SPOTIFY_API_QUEUE_URL`, defaulting to
/// `https://api.spotify.com/v1/me/player/queue`.
pub fn spotify_queue_url() -> String {
    env::var("SPOTIFY_API_QUEUE_URL").unwrap_or_else(|_| DEFAULT_QUEUE_URL.to_string())
}

/// Returns the Spotify player play URL.
///
/// Reads `SPOTIFY_API_PLAY_URL`, defaulting to
/// `https://api.spotify.com/v1/me/player/play`.
pub fn spotify_play_url() -> String {
    env::var("SPOTIFY_API_PLAY_URL").unwrap_or_else(|_| DEFAULT_PLAY_URL.to_string())
}
