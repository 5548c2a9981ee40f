use std::time::{Duration, Instant};

use spotlaunch::spotify::SpotifyClient;
use spotlaunch::types::Track;

// Binds an ephemeral port and releases it again, yielding an address that
// refuses connections immediately.
fn unreachable_url(path: &str) -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind probe port");
    let addr = listener.local_addr().expect("probe port addr");
    drop(listener);
    format!("http://{}/{}", addr, path)
}

fn create_test_track() -> Track {
    Track {
        id: "track1".to_string(),
        name: "Test Track".to_string(),
        artists: "Test Artist".to_string(),
        album_id: "album1".to_string(),
        album_name: "Test Album".to_string(),
        uri: "spotify:track:track1".to_string(),
        image_url: String::new(),
        is_explicit: false,
    }
}

fn create_test_client() -> SpotifyClient {
    SpotifyClient::new(
        "client-id".to_string(),
        "client-secret".to_string(),
        "refresh-token".to_string(),
    )
}

#[tokio::test]
async fn test_device_wait_gives_up_when_budget_runs_out() {
    unsafe {
        std::env::set_var("SPOTIFY_API_DEVICES_URL", unreachable_url("devices"));
    }

    let client = create_test_client();
    let budget = Duration::from_millis(300);
    let start = Instant::now();

    let played = client
        .wait_for_device_and_play_within(&create_test_track(), budget, Duration::from_millis(50))
        .await;

    // No device ever appears, so the poll must stop on its own.
    assert!(!played);
    assert!(start.elapsed() >= budget);
}

#[tokio::test]
async fn test_refresh_transport_failure_leaves_no_server_error() {
    unsafe {
        std::env::set_var("SPOTIFY_API_TOKEN_URL", unreachable_url("token"));
    }

    let client = create_test_client();

    let refreshed = client.refresh_access_token().await;

    assert!(!refreshed);
    // No server answered, so there is no server-provided text; callers
    // show their generic connectivity message instead.
    assert_eq!(client.last_error().await, "");
}
