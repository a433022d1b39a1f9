// src/common/mod.rs

// --- Declare all public modules within common ---
pub mod config;
pub mod error;
pub mod event;
pub mod frame;
pub mod hal_traits;
pub mod pins;
pub mod timing;

// --- Re-export key types/traits/functions for easier access ---

// From config.rs
pub use config::Wtc401Config;

// From error.rs
pub use error::Wtc401Error;

// From event.rs
pub use event::{Event, EventHandler, EventKind, KeyId, NoopHandler};

// From frame.rs
pub use frame::{slider_percent, ButtonCode, Frame};

// From hal_traits.rs
pub use hal_traits::{Millis, MillisFn, Wtc401Bus, Wtc401Clock, Wtc401Instant};

// From pins.rs
pub use pins::{BusPins, PinDirection, PinId};

// From timing.rs (constants - users can access via common::timing::*)
