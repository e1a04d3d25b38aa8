//! # Shared Shipbox Types
//!
//! Types used by every layer of the application.
//!
//! * **[`shipping`]**: the domain models (countries, boxes, colors).
//! * **[`storage`]**: the outbound port for the persisted box slot.
//! * **[`error`]**: error types shared between crates.
//! * **[`config`]**: runtime configuration built by the command line.

pub mod config;
pub mod error;
pub mod shipping;
pub mod storage;
