use tabled::Table;

use crate::{
    info,
    spotify::SpotifyClient,
    types::DeviceTableRow,
    warning,
};

/// Lists the playback devices currently registered with the account.
pub async fn devices() {
    let client = SpotifyClient::from_config();
    if !super::ensure_ready(&client).await {
        return;
    }

    let devices = match client.get_devices().await {
        Ok(devices) => devices,
        Err(e) => {
            warning!("Failed to fetch devices. Err: {}", e);
            return;
        }
    };

    if devices.is_empty() {
        info!("No devices available. Start a Spotify client somewhere first.");
        return;
    }

    let table_rows: Vec<DeviceTableRow> = devices
        .into_iter()
        .map(|d| DeviceTableRow {
            name: d.name,
            kind: d.kind,
            active: if d.is_active { "✓".to_string() } else { String::new() },
        })
        .collect();

    let table = Table::new(table_rows);
    println!("{}", table);
}
