// src/common/mod.rs

// --- Declare all public modules within common ---
pub mod config;
pub mod error;
pub mod hal_traits;
pub mod registers;
pub mod types;

// --- Re-export key types/traits for easier access ---

pub use config::Config;
pub use error::Max30100Error;
pub use hal_traits::RegisterBus;
pub use registers::{Register, DEVICE_ADDRESS, EXPECTED_PART_ID, FIFO_DEPTH};
pub use types::{LedCurrent, Mode, PulseWidth, SampleRate, SensorReading, Temperature};

// --- Feature-gated re-exports ---

// Native HAL adapter (from hal_traits.rs)
#[cfg(feature = "impl-native")]
pub use hal_traits::I2cBus;
