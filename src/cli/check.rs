use crate::{spotify::SpotifyClient, success, warning};

/// Verifies the configured credentials by running a token refresh.
///
/// Mirrors a "test connection" button: a successful refresh confirms the
/// client id, secret and refresh token are all accepted. On failure the
/// server-provided error text is shown when available, otherwise a generic
/// connectivity hint.
pub async fn check() {
    let client = SpotifyClient::from_config();

    if client.refresh_access_token().await {
        success!("Everything is set up correctly.");
        return;
    }

    let err = client.last_error().await;
    if err.is_empty() {
        warning!("Can't get an answer from the server. Please, check your internet connection.");
    } else {
        warning!(
            "Spotify Web API returns: \"{}\". Please, check all input fields.",
            err
        );
    }
}
