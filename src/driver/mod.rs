// src/driver/mod.rs

// Blocking, poll-driven driver
pub mod sync_driver;

// Re-export the public Wtc401 struct
pub use sync_driver::Wtc401;
