//! Shared types for the telegram-files settings subsystem.
//!
//! Holds the closed set of setting keys, the structured records some settings
//! decode into, and the error type used across the workspace. The registry and
//! service live in `tgfiles-settings`.

#![forbid(unsafe_code)]

pub mod error;
pub mod prelude;
pub mod records;
pub mod types;
pub mod version;

// vim: ts=4
