// src/lib.rs

//! Driver for the Maxim MAX30100 pulse oximetry and heart-rate sensor.
//!
//! The chip is reached through any [`RegisterBus`]; with the `impl-native`
//! feature, `I2cBus` wraps an embedded-hal 1.0 I2C peripheral.

#![no_std] // Specify no_std at the crate root

pub mod common;
pub mod driver;

// Re-export key types for convenience
pub use common::{Config, LedCurrent, Max30100Error, Mode, PulseWidth, RegisterBus, SampleRate, SensorReading};
pub use driver::SyncMax30100;

#[cfg(feature = "impl-native")]
pub use common::I2cBus;
