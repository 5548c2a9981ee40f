use std::{io::Error, io::ErrorKind, path::PathBuf};

#[derive(Debug)]
pub enum StateError {
    IoError(Error),
    SerdeError(serde_json::Error),
}

impl From<Error> for StateError {
    fn from(err: Error) -> Self {
        StateError::IoError(err)
    }
}

impl std::fmt::Display for StateError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StateError::IoError(e) => write!(f, "io error: {}", e),
            StateError::SerdeError(e) => write!(f, "serde error: {}", e),
        }
    }
}

/// Persists the last-used playback device id between runs. Consulted by the
/// device-selection policy as a fallback when no device is active.
pub struct DeviceStateManager {
    last_device_id: Option<String>,
}

impl DeviceStateManager {
    pub fn new() -> Self {
        Self {
            last_device_id: None,
        }
    }

    pub async fn load() -> Result<Self, StateError> {
        let path = Self::get_path();
        let json = match async_fs::read_to_string(path).await {
            Ok(json) => json,
            // No remembered device yet is a normal first-run condition.
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Ok(Self::new());
            }
            Err(e) => return Err(StateError::IoError(e)),
        };

        let last_device_id: Option<String> =
            serde_json::from_str(&json).map_err(|e| StateError::SerdeError(e))?;
        Ok(Self { last_device_id })
    }

    pub async fn persist(&self) -> Result<(), StateError> {
        let path = Self::get_path();
        if let Some(parent) = path.parent() {
            async_fs::create_dir_all(parent)
                .await
                .map_err(|e| StateError::IoError(e))?;
        }

        let json = serde_json::to_string_pretty(&self.last_device_id)
            .map_err(|e| StateError::SerdeError(e))?;
        async_fs::write(path, json)
            .await
            .map_err(|e| StateError::IoError(e))
    }

    pub fn last_device_id(&self) -> Option<&str> {
        self.last_device_id.as_deref()
    }

    pub fn set_last_device_id(&mut self, id: &str) -> bool {
        if self.last_device_id.as_deref() == Some(id) {
            return false;
        }
        self.last_device_id = Some(id.to_string());
        true
    }

    fn get_path() -> PathBuf {
        let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
        path.push("spotlaunch/state/last_device.json");
        path
    }
}

impl Default for DeviceStateManager {
    fn default() -> Self {
        Self::new()
    }
}
