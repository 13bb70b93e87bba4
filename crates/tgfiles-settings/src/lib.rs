//! Typed setting registry for telegram-files.
//!
//! Every setting is stored as a raw string. The registry binds each key of the
//! closed [`SettingKey`] catalog to a decoder and an optional default, and
//! [`FrozenSettingsRegistry::resolve`] turns the stored string (or its absence)
//! into a typed [`SettingValue`]. [`SettingsService`] composes the registry
//! with a [`SettingsStore`] for callers that own persistence.

#![deny(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![forbid(unsafe_code)]

pub mod catalog;
pub mod prelude;
pub mod settings;

pub use settings::{
	FromSettingValue, FrozenSettingsRegistry, MemorySettingsStore, SettingDefinition,
	SettingDefinitionBuilder, SettingKind, SettingValue, SettingsRegistry, SettingsService,
	SettingsStore,
};
pub use tgfiles_types::types::SettingKey;

/// Build the frozen registry holding the full setting catalog
pub fn build_registry() -> tgfiles_types::error::TfResult<FrozenSettingsRegistry> {
	let mut registry = SettingsRegistry::new();
	catalog::register_settings(&mut registry)?;
	registry.freeze()
}

// vim: ts=4
