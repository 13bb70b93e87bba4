//! Settings subsystem: key catalog, raw value decoding and defaults
//!
//! # Architecture
//!
//! - **Types** (`types.rs`): values, definitions and the registry
//! - **Convert** (`convert.rs`): raw string decoders and their encoders
//! - **Store** (`store.rs`): persistence seam and an in-memory store
//! - **Service** (`service.rs`): store + registry composition
//!
//! Values are never cached. A stored value that fails to decode is reported
//! as a conversion error and is never replaced by the default.

pub mod convert;
pub mod service;
pub mod store;
pub mod types;

pub use service::SettingsService;
pub use store::{MemorySettingsStore, SettingsStore};
pub use types::{
	FromSettingValue, FrozenSettingsRegistry, SettingDecoder, SettingDefinition,
	SettingDefinitionBuilder, SettingKind, SettingValue, SettingsRegistry,
};

// vim: ts=4
