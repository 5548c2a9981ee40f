use crate::types::Device;

/// Outcome of the device-selection policy.
#[derive(Debug, Clone, PartialEq)]
pub enum DeviceChoice {
    /// No device is registered with the account. The caller should launch a
    /// local client and use the wait-and-play path.
    NoDevices,
    /// Play on `device`. When `remember` is set the caller persists the
    /// device id as the new last-used device.
    Use { device: Device, remember: bool },
}

/// Chooses which device to target for playback.
///
/// Pure function of the current device list and the persisted last-used
/// device id:
///
/// 1. empty list: no devices available;
/// 2. an active device wins, and becomes the remembered choice;
/// 3. a device matching the last-used id is taken without updating the
///    remembered choice (it already is the remembered choice);
/// 4. otherwise the first device in API order, remembered.
pub fn choose_device(devices: &[Device], last_device_id: Option<&str>) -> DeviceChoice {
    if devices.is_empty() {
        return DeviceChoice::NoDevices;
    }

    if let Some(active) = devices.iter().find(|d| d.is_active) {
        return DeviceChoice::Use {
            device: active.clone(),
            remember: true,
        };
    }

    if let Some(id) = last_device_id {
        if let Some(known) = devices.iter().find(|d| d.id == id) {
            return DeviceChoice::Use {
                device: known.clone(),
                remember: false,
            };
        }
    }

    DeviceChoice::Use {
        device: devices[0].clone(),
        remember: true,
    }
}
