mod auth;
mod device;
mod state;

pub use auth::TokenManager;
pub use device::{DeviceChoice, choose_device};
pub use state::{DeviceStateManager, StateError};
