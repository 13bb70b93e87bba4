//! Persistence seam for raw setting values

use async_trait::async_trait;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::fmt::Debug;

use crate::prelude::*;

/// Key-value store holding the raw string of each setting
#[async_trait]
pub trait SettingsStore: Debug + Send + Sync {
	/// Read the raw value stored for `key`
	async fn read_setting(&self, key: SettingKey) -> TfResult<Option<String>>;

	/// Store a raw value, `None` removes it
	async fn update_setting(&self, key: SettingKey, value: Option<String>) -> TfResult<()>;
}

/// In-process store
#[derive(Debug, Default)]
pub struct MemorySettingsStore {
	values: RwLock<HashMap<SettingKey, String>>,
}

impl MemorySettingsStore {
	pub fn new() -> Self {
		Self::default()
	}

	/// Create a store pre-filled with raw values
	pub fn with_values<I, S>(values: I) -> Self
	where
		I: IntoIterator<Item = (SettingKey, S)>,
		S: Into<String>,
	{
		let values = values.into_iter().map(|(k, v)| (k, v.into())).collect();
		Self { values: RwLock::new(values) }
	}

	/// Raw value currently stored, bypassing the async interface
	pub fn raw(&self, key: SettingKey) -> Option<String> {
		self.values.read().get(&key).cloned()
	}
}

#[async_trait]
impl SettingsStore for MemorySettingsStore {
	async fn read_setting(&self, key: SettingKey) -> TfResult<Option<String>> {
		Ok(self.raw(key))
	}

	async fn update_setting(&self, key: SettingKey, value: Option<String>) -> TfResult<()> {
		let mut values = self.values.write();
		match value {
			Some(value) => {
				values.insert(key, value);
			}
			None => {
				values.remove(&key);
			}
		}
		Ok(())
	}
}

// vim: ts=4
