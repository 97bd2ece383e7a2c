//! afk_core - Core types for the AFK presence engine
//!
//! This crate provides the foundational types used across all AFK-related crates:
//! - `presence` - the persisted PresenceState record
//! - `duration` - compact elapsed-time formatting
//! - `clock` - the injectable time source
//! - `config` - runtime configuration

pub mod clock;
pub mod config;
pub mod duration;
pub mod presence;

// Re-export commonly used types
pub use clock::{Clock, SystemClock};
pub use config::{AfkConfig, ConfigError};
pub use duration::format_duration;
pub use presence::PresenceState;
