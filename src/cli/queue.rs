use crate::{config, info, spotify::SpotifyClient, success, warning};

/// Adds the top search result for a query to the playback queue.
pub async fn queue(query: String) {
    let client = SpotifyClient::from_config();
    if !super::ensure_ready(&client).await {
        return;
    }

    let tracks = match client.search_tracks(&query, config::result_limit()).await {
        Ok(tracks) => tracks,
        Err(e) => {
            warning!("Search failed. Err: {}", e);
            return;
        }
    };

    let tracks = super::search::filter_explicit(tracks);
    let Some(track) = tracks.first() else {
        info!("No tracks found for \"{}\".", query);
        return;
    };

    client.add_track_to_queue(track).await;
    success!("Queued {} - {}", track.name, track.artists);
}
