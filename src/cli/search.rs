use tabled::Table;

use crate::{
    config, info,
    spotify::{CoverCache, SpotifyClient},
    types::{Track, TrackTableRow},
    warning,
};

/// Searches Spotify for tracks and prints them as a table.
///
/// Results honor the explicit-content setting, and each result's album
/// cover is downloaded into the cache so a launcher frontend rendering the
/// same query finds the images already on disk.
pub async fn search(query: String, limit: Option<u32>) {
    let client = SpotifyClient::from_config();
    if !super::ensure_ready(&client).await {
        return;
    }

    let limit = limit.unwrap_or_else(config::result_limit);
    let tracks = match client.search_tracks(&query, limit).await {
        Ok(tracks) => tracks,
        Err(e) => {
            warning!("Search failed. Err: {}", e);
            return;
        }
    };

    let tracks = filter_explicit(tracks);
    if tracks.is_empty() {
        info!("No tracks found for \"{}\".", query);
        return;
    }

    let covers = CoverCache::from_config();
    for track in &tracks {
        if let Err(e) = covers.download_for_album(&track.image_url, &track.album_id).await {
            warning!("Cover download failed for {}. Err: {}", track.album_name, e);
        }
    }

    let table_rows: Vec<TrackTableRow> = tracks
        .into_iter()
        .map(|t| TrackTableRow {
            track: t.name,
            album: t.album_name,
            artists: t.artists,
            explicit: if t.is_explicit { "E".to_string() } else { String::new() },
        })
        .collect();

    let table = Table::new(table_rows);
    println!("{}", table);
}

/// Drops explicit tracks unless the configuration allows them.
pub(crate) fn filter_explicit(tracks: Vec<Track>) -> Vec<Track> {
    if config::allow_explicit() {
        return tracks;
    }
    tracks.into_iter().filter(|t| !t.is_explicit).collect()
}
