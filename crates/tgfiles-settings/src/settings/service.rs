//! Settings service: reads raw values from a store and resolves them

use std::sync::Arc;

use super::store::SettingsStore;
use super::types::{FromSettingValue, FrozenSettingsRegistry, SettingValue};
use crate::prelude::*;

/// Settings service - main interface for reading and writing settings
pub struct SettingsService {
	registry: Arc<FrozenSettingsRegistry>,
	store: Arc<dyn SettingsStore>,
}

impl SettingsService {
	pub fn new(registry: Arc<FrozenSettingsRegistry>, store: Arc<dyn SettingsStore>) -> Self {
		Self { registry, store }
	}

	/// Get setting value (stored -> default)
	pub async fn get(&self, key: SettingKey) -> TfResult<Option<SettingValue>> {
		let raw = self.store.read_setting(key).await?;
		self.registry.resolve(key, raw.as_deref()).inspect_err(|e| {
			warn!("Stored value of setting '{}' is unusable: {}", key, e);
		})
	}

	/// Get setting value as a concrete type
	pub async fn get_as<T: FromSettingValue>(&self, key: SettingKey) -> TfResult<Option<T>> {
		let raw = self.store.read_setting(key).await?;
		self.registry.resolve_as::<T>(key, raw.as_deref()).inspect_err(|e| {
			warn!("Stored value of setting '{}' is unusable: {}", key, e);
		})
	}

	/// Resolve several settings, in the order given
	pub async fn get_many(
		&self,
		keys: &[SettingKey],
	) -> TfResult<Vec<(SettingKey, Option<SettingValue>)>> {
		let mut values = Vec::with_capacity(keys.len());
		for &key in keys {
			values.push((key, self.get(key).await?));
		}
		Ok(values)
	}

	/// Set setting value
	pub async fn set(&self, key: SettingKey, value: impl Into<SettingValue>) -> TfResult<()> {
		let raw = self.registry.encode(key, &value.into())?;
		self.store.update_setting(key, Some(raw)).await?;

		info!("Setting '{}' updated", key);
		Ok(())
	}

	/// Delete a stored value (falls back to the default)
	pub async fn delete(&self, key: SettingKey) -> TfResult<()> {
		self.store.update_setting(key, None).await?;

		info!("Setting '{}' deleted", key);
		Ok(())
	}

	/// Type-safe getters (required - returns error if there is no value)
	pub async fn get_string(&self, key: SettingKey) -> TfResult<String> {
		self.get_as(key).await?.ok_or(Error::NotConfigured(key))
	}

	pub async fn get_int(&self, key: SettingKey) -> TfResult<i64> {
		self.get_as(key).await?.ok_or(Error::NotConfigured(key))
	}

	pub async fn get_bool(&self, key: SettingKey) -> TfResult<bool> {
		self.get_as(key).await?.ok_or(Error::NotConfigured(key))
	}

	/// Type-safe optional getters (None if nothing is stored and there is no default)
	/// Still returns error if the stored value is malformed or of another type
	pub async fn get_string_opt(&self, key: SettingKey) -> TfResult<Option<String>> {
		self.get_as(key).await
	}

	pub async fn get_int_opt(&self, key: SettingKey) -> TfResult<Option<i64>> {
		self.get_as(key).await
	}

	pub async fn get_bool_opt(&self, key: SettingKey) -> TfResult<Option<bool>> {
		self.get_as(key).await
	}

	/// Get reference to registry (for listing all settings)
	pub fn registry(&self) -> &Arc<FrozenSettingsRegistry> {
		&self.registry
	}
}

// vim: ts=4
