use std::process::{Command, Stdio};
use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

use crate::{
    config, info,
    management::{DeviceChoice, DeviceStateManager, choose_device},
    spotify::{CoverCache, SpotifyClient},
    success,
    types::{Device, Track},
    warning,
};

/// Searches for a track and starts playback.
///
/// The full launcher flow: connectivity probe, token refresh if needed,
/// search, explicit-content filter, cover-cache warmup for the chosen track,
/// then device selection. With `--device` the track is played on the named
/// device and that device becomes the remembered one. Otherwise the
/// selection policy picks a target, and when no device exists at all the
/// configured local Spotify client is launched and playback starts as soon
/// as it registers.
pub async fn play(query: String, device: Option<String>) {
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
    let Some(track) = tracks.into_iter().next() else {
        info!("No tracks found for \"{}\".", query);
        return;
    };

    let covers = CoverCache::from_config();
    if let Err(e) = covers.download_for_album(&track.image_url, &track.album_id).await {
        warning!("Cover download failed for {}. Err: {}", track.album_name, e);
    }

    let mut state = match DeviceStateManager::load().await {
        Ok(state) => state,
        Err(e) => {
            warning!("Failed to load device state. Err: {}", e);
            DeviceStateManager::new()
        }
    };

    let devices = match client.get_devices().await {
        Ok(devices) => devices,
        Err(e) => {
            warning!("Failed to fetch devices. Err: {}", e);
            Vec::new()
        }
    };

    if let Some(target) = device {
        play_on_named_device(&client, &track, &devices, &target, &mut state).await;
        return;
    }

    match choose_device(&devices, state.last_device_id()) {
        DeviceChoice::NoDevices => {
            launch_local_and_play(&client, &track).await;
        }
        DeviceChoice::Use { device, remember } => {
            client.play_track(&track, &device.id).await;
            success!("Playing {} on {} ({})", track.name, device.name, device.kind);
            if remember {
                remember_device(&mut state, &device.id).await;
            }
        }
    }
}

/// Explicit "play on this device" action: match by id or name, play there
/// and remember the device.
async fn play_on_named_device(
    client: &SpotifyClient,
    track: &Track,
    devices: &[Device],
    target: &str,
    state: &mut DeviceStateManager,
) {
    let found = devices.iter().find(|d| d.id == target || d.name == target);

    let Some(device) = found else {
        warning!("No device \"{}\" found.", target);
        return;
    };

    client.play_track(track, &device.id).await;
    success!("Playing {} on {} ({})", track.name, device.name, device.kind);
    remember_device(state, &device.id).await;
}

/// Launches the configured local Spotify client detached and plays the
/// track once it registers as a device.
async fn launch_local_and_play(client: &SpotifyClient, track: &Track) {
    let command = config::spotify_executable();
    let spawned = Command::new(&command)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn();

    if let Err(e) = spawned {
        warning!("Failed to launch \"{}\". Err: {}", command, e);
        return;
    }

    let pb = ProgressBar::new_spinner();
    pb.set_message("Waiting for a Spotify device...");
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_style(
        ProgressStyle::with_template("{spinner:.blue} {msg}")
            .unwrap()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
    );

    let played = client.wait_for_device_and_play(track).await;
    pb.finish_and_clear();

    if played {
        success!("Playing {} on local Spotify.", track.name);
    } else {
        warning!("No device appeared in time. Is \"{}\" installed?", command);
    }
}

async fn remember_device(state: &mut DeviceStateManager, device_id: &str) {
    if state.set_last_device_id(device_id) {
        if let Err(e) = state.persist().await {
            warning!("Failed to persist device state. Err: {}", e);
        }
    }
}
