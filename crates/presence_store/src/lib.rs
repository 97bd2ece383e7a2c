//! presence_store - Durable storage for the AFK presence state
//!
//! Owns the on-disk representation of the presence record: load with
//! per-field defaulting and corruption recovery, save with full-record
//! replacement that readers never observe half-written.

pub mod error;
pub mod store;

pub use error::{Result, StoreError};
pub use store::{FileStateStore, StateStore};
