use serde::{Deserialize, Serialize};
use tabled::Tabled;

/// A single playable track as returned by track search. Immutable once
/// parsed; the caller owns the value after it leaves the client.
#[derive(Debug, Clone, PartialEq)]
pub struct Track {
    pub id: String,
    pub name: String,
    /// All artist names joined with ", " in API order.
    pub artists: String,
    pub album_id: String,
    pub album_name: String,
    pub uri: String,
    /// URL of the album's third-smallest cover image. Empty when the album
    /// carries fewer than three images.
    pub image_url: String,
    pub is_explicit: bool,
}

/// A playback endpoint registered with the user's Spotify account. A
/// transient snapshot of one device-list fetch; the list has no identity
/// beyond that.
#[derive(Debug, Clone, PartialEq)]
pub struct Device {
    pub id: String,
    pub name: String,
    pub kind: String,
    pub is_active: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub tracks: TrackPage,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TrackPage {
    #[serde(default)]
    pub items: Vec<TrackObject>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TrackObject {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub uri: String,
    #[serde(default)]
    pub explicit: bool,
    #[serde(default)]
    pub artists: Vec<ArtistObject>,
    #[serde(default)]
    pub album: AlbumObject,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ArtistObject {
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AlbumObject {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub images: Vec<ImageObject>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ImageObject {
    #[serde(default)]
    pub url: String,
    pub width: Option<u32>,
    pub height: Option<u32>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DevicesResponse {
    #[serde(default)]
    pub devices: Vec<DeviceObject>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DeviceObject {
    // The API may report devices with a null id (e.g. restricted devices).
    pub id: Option<String>,
    #[serde(default)]
    pub name: String,
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub is_active: bool,
}

impl From<TrackObject> for Track {
    fn from(raw: TrackObject) -> Self {
        let artists = raw
            .artists
            .iter()
            .map(|a| a.name.as_str())
            .collect::<Vec<_>>()
            .join(", ");

        let image_url = raw
            .album
            .images
            .get(2)
            .map(|i| i.url.clone())
            .unwrap_or_default();

        Track {
            id: raw.id,
            name: raw.name,
            artists,
            album_id: raw.album.id,
            album_name: raw.album.name,
            uri: raw.uri,
            image_url,
            is_explicit: raw.explicit,
        }
    }
}

impl From<DeviceObject> for Device {
    fn from(raw: DeviceObject) -> Self {
        Device {
            id: raw.id.unwrap_or_default(),
            name: raw.name,
            kind: raw.kind,
            is_active: raw.is_active,
        }
    }
}

#[derive(Tabled)]
pub struct TrackTableRow {
    pub track: String,
    pub album: String,
    pub artists: String,
    pub explicit: String,
}

#[derive(Tabled)]
pub struct DeviceTableRow {
    pub name: String,
    pub kind: String,
    pub active: String,
}
