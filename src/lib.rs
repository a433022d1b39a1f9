// src/lib.rs

#![no_std] // Specify no_std at the crate root

pub mod common;
pub mod driver;

#[cfg(feature = "impl-generic-hal")]
pub mod adapter;

// Re-export key types for convenience
pub use common::{BusPins, Event, KeyId, Wtc401Config, Wtc401Error};
pub use driver::Wtc401;
