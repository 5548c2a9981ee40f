use spotlaunch::management::{DeviceChoice, choose_device};
use spotlaunch::types::Device;

// Helper function to create a test device
fn create_test_device(id: &str, active: bool) -> Device {
    Device {
        id: id.to_string(),
        name: format!("Device {}", id),
        kind: "Computer".to_string(),
        is_active: active,
    }
}

#[test]
fn test_empty_device_list_signals_no_devices() {
    let choice = choose_device(&[], Some("a"));

    assert_eq!(choice, DeviceChoice::NoDevices);
}

#[test]
fn test_active_device_wins_over_last_used() {
    let devices = vec![
        create_test_device("a", false),
        create_test_device("b", true),
    ];

    let choice = choose_device(&devices, Some("a"));

    match choice {
        DeviceChoice::Use { device, remember } => {
            assert_eq!(device.id, "b");
            // The active pick becomes the new remembered device.
            assert!(remember);
        }
        DeviceChoice::NoDevices => panic!("expected a device"),
    }
}

#[test]
fn test_last_used_device_chosen_without_remembering() {
    let devices = vec![
        create_test_device("a", false),
        create_test_device("c", false),
    ];

    let choice = choose_device(&devices, Some("a"));

    match choice {
        DeviceChoice::Use { device, remember } => {
            assert_eq!(device.id, "a");
            // Already the remembered choice, no persistence update.
            assert!(!remember);
        }
        DeviceChoice::NoDevices => panic!("expected a device"),
    }
}

#[test]
fn test_first_device_is_fallback_and_remembered() {
    let devices = vec![
        create_test_device("x", false),
        create_test_device("y", false),
    ];

    let choice = choose_device(&devices, Some("gone"));

    match choice {
        DeviceChoice::Use { device, remember } => {
            assert_eq!(device.id, "x");
            assert!(remember);
        }
        DeviceChoice::NoDevices => panic!("expected a device"),
    }
}

#[test]
fn test_no_last_used_falls_back_to_first_device() {
    let devices = vec![
        create_test_device("x", false),
        create_test_device("y", false),
    ];

    let choice = choose_device(&devices, None);

    match choice {
        DeviceChoice::Use { device, remember } => {
            assert_eq!(device.id, "x");
            assert!(remember);
        }
        DeviceChoice::NoDevices => panic!("expected a device"),
    }
}

#[test]
fn test_single_active_device_is_chosen() {
    let devices = vec![create_test_device("only", true)];

    let choice = choose_device(&devices, None);

    match choice {
        DeviceChoice::Use { device, remember } => {
            assert_eq!(device.id, "only");
            assert!(remember);
        }
        DeviceChoice::NoDevices => panic!("expected a device"),
    }
}
