use spotlaunch::types::{Device, DevicesResponse, SearchResponse, Track};

// Builds a search response fixture with the given number of album images.
fn track_json(id: &str, image_count: usize) -> String {
    let images: Vec<String> = (0..image_count)
        .map(|i| format!(r#"{{"url": "https://img.example/{id}/{i}.jpeg", "width": 64, "height": 64}}"#))
        .collect();

    format!(
        r#"{{
            "id": "{id}",
            "name": "Track {id}",
            "uri": "spotify:track:{id}",
            "explicit": false,
            "artists": [{{"name": "First Artist"}}, {{"name": "Second Artist"}}],
            "album": {{
                "id": "album_{id}",
                "name": "Album {id}",
                "images": [{images}]
            }}
        }}"#,
        images = images.join(",")
    )
}

fn search_response(items: &[String]) -> SearchResponse {
    let json = format!(r#"{{"tracks": {{"items": [{}]}}}}"#, items.join(","));
    serde_json::from_str(&json).expect("fixture must parse")
}

#[test]
fn test_search_response_preserves_item_count_and_order() {
    let response = search_response(&[
        track_json("aaa", 3),
        track_json("bbb", 3),
        track_json("ccc", 3),
    ]);

    let tracks: Vec<Track> = response.tracks.items.into_iter().map(Track::from).collect();

    assert_eq!(tracks.len(), 3);
    assert_eq!(tracks[0].id, "aaa");
    assert_eq!(tracks[1].id, "bbb");
    assert_eq!(tracks[2].id, "ccc");
}

#[test]
fn test_track_fields_are_mapped() {
    let response = search_response(&[track_json("aaa", 3)]);
    let track = Track::from(response.tracks.items[0].clone());

    assert_eq!(track.name, "Track aaa");
    assert_eq!(track.uri, "spotify:track:aaa");
    assert_eq!(track.album_id, "album_aaa");
    assert_eq!(track.album_name, "Album aaa");
    assert!(!track.is_explicit);
}

#[test]
fn test_artists_joined_in_api_order() {
    let response = search_response(&[track_json("aaa", 3)]);
    let track = Track::from(response.tracks.items[0].clone());

    assert_eq!(track.artists, "First Artist, Second Artist");
}

#[test]
fn test_image_url_uses_third_image() {
    let response = search_response(&[track_json("aaa", 4)]);
    let track = Track::from(response.tracks.items[0].clone());

    assert_eq!(track.image_url, "https://img.example/aaa/2.jpeg");
}

#[test]
fn test_image_url_empty_when_fewer_than_three_images() {
    for count in 0..3 {
        let response = search_response(&[track_json("aaa", count)]);
        let track = Track::from(response.tracks.items[0].clone());

        assert_eq!(track.image_url, "", "image count {}", count);
    }
}

#[test]
fn test_empty_items_yield_empty_track_list() {
    let response: SearchResponse =
        serde_json::from_str(r#"{"tracks": {"items": []}}"#).expect("fixture must parse");

    assert!(response.tracks.items.is_empty());
}

#[test]
fn test_missing_tracks_object_yields_empty_track_list() {
    let response: SearchResponse = serde_json::from_str(r#"{}"#).expect("fixture must parse");

    assert!(response.tracks.items.is_empty());
}

#[test]
fn test_devices_response_is_mapped() {
    let json = r#"{
        "devices": [
            {"id": "dev1", "name": "Desktop", "type": "Computer", "is_active": true},
            {"id": "dev2", "name": "Phone", "type": "Smartphone", "is_active": false}
        ]
    }"#;

    let response: DevicesResponse = serde_json::from_str(json).expect("fixture must parse");
    let devices: Vec<Device> = response.devices.into_iter().map(Device::from).collect();

    assert_eq!(devices.len(), 2);
    assert_eq!(devices[0].id, "dev1");
    assert_eq!(devices[0].kind, "Computer");
    assert!(devices[0].is_active);
    assert!(!devices[1].is_active);
}

#[test]
fn test_device_with_null_id_maps_to_empty_string() {
    let json = r#"{"devices": [{"id": null, "name": "Restricted", "type": "Speaker", "is_active": false}]}"#;

    let response: DevicesResponse = serde_json::from_str(json).expect("fixture must parse");
    let device = Device::from(response.devices[0].clone());

    assert_eq!(device.id, "");
    assert_eq!(device.name, "Restricted");
}

#[test]
fn test_empty_devices_array_yields_empty_device_list() {
    let response: DevicesResponse =
        serde_json::from_str(r#"{"devices": []}"#).expect("fixture must parse");

    assert!(response.devices.is_empty());
}
