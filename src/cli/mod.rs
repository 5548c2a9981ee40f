//! # CLI Module
//!
//! This module provides the command-line interface layer for spotlaunch. It
//! stands in for the launcher host: each command runs one request sequence
//! against the Spotify client and renders the outcome, exactly the way a
//! launcher trigger invocation would.
//!
//! ## Commands
//!
//! - [`play`] - Search for a track and start playback, picking a device via
//!   the selection policy or launching a local client when none exists
//! - [`queue`] - Add the top search result to the playback queue
//! - [`search`] - Show matching tracks as a table, warming the cover cache
//! - [`devices`] - List the playback devices registered with the account
//! - [`check`] - Verify credentials and connectivity with a token refresh
//!
//! ## Shared flow
//!
//! Commands that talk to the Web API share one preamble: probe the accounts
//! server for reachability, then refresh the access token if it is missing
//! or expired. Both failure modes surface as informational messages rather
//! than errors; raw transport errors never reach the user.

mod check;
mod devices;
mod play;
mod queue;
mod search;

pub use check::check;
pub use devices::devices;
pub use play::play;
pub use queue::queue;
pub use search::search;

use crate::{info, spotify::SpotifyClient, warning};

/// Runs the connectivity probe and token-expiry preamble shared by all
/// API-facing commands. Returns false (after printing guidance) when the
/// server is unreachable or the credentials are rejected.
pub(crate) async fn ensure_ready(client: &SpotifyClient) -> bool {
    if !client.check_server_response().await {
        info!("Can't get an answer from the server. Please, check your internet connection.");
        return false;
    }

    if client.is_token_expired().await {
        if !client.refresh_access_token().await {
            let err = client.last_error().await;
            if err.is_empty() {
                warning!("Wrong credentials. Please, check the configuration.");
            } else {
                warning!("Wrong credentials. Spotify Web API returns: \"{}\"", err);
            }
            return false;
        }
    }

    true
}
