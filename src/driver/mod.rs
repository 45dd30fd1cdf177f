// src/driver/mod.rs

// Blocking driver and its helpers
pub mod sync_driver;

// Re-export the public driver struct
pub use sync_driver::{RegisterDump, SyncMax30100};
