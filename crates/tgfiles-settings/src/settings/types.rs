//! Settings types and definitions
//!
//! Core types for the setting registry: the tagged value type, per-key
//! definitions and the mutable/frozen registry pair.

use serde::Serialize;
use std::collections::HashMap;
use std::fmt::Debug;

use super::convert;
use crate::prelude::*;

/// Decoder from a raw stored string. `Ok(None)` decodes to "no value";
/// `Err` carries the reason the text was rejected.
pub type SettingDecoder = fn(&str) -> Result<Option<SettingValue>, String>;

/// Kind of value a setting holds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum SettingKind {
	Bool,
	Int,
	String,
	Version,
	List,
	Automation,
	TimeLimitedDownload,
	Proxies,
}

impl SettingKind {
	/// Get the type name for error messages
	pub fn type_name(self) -> &'static str {
		match self {
			SettingKind::Bool => "bool",
			SettingKind::Int => "int",
			SettingKind::String => "string",
			SettingKind::Version => "version",
			SettingKind::List => "list",
			SettingKind::Automation => "automation",
			SettingKind::TimeLimitedDownload => "timeLimitedDownload",
			SettingKind::Proxies => "proxies",
		}
	}
}

/// Setting value types
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)] // No type tag - type known from SettingDefinition
pub enum SettingValue {
	Bool(bool),
	Int(i64),
	String(String),
	Version(Version),
	List(Vec<String>),
	Automation(AutoRecords),
	TimeLimitedDownload(TimeLimitedDownload),
	Proxies(ProxyRecords),
}

impl SettingValue {
	pub fn kind(&self) -> SettingKind {
		match self {
			SettingValue::Bool(_) => SettingKind::Bool,
			SettingValue::Int(_) => SettingKind::Int,
			SettingValue::String(_) => SettingKind::String,
			SettingValue::Version(_) => SettingKind::Version,
			SettingValue::List(_) => SettingKind::List,
			SettingValue::Automation(_) => SettingKind::Automation,
			SettingValue::TimeLimitedDownload(_) => SettingKind::TimeLimitedDownload,
			SettingValue::Proxies(_) => SettingKind::Proxies,
		}
	}

	/// Check if this value matches the type of another value
	pub fn matches_type(&self, other: &SettingValue) -> bool {
		self.kind() == other.kind()
	}

	/// Get the type name for error messages
	pub fn type_name(&self) -> &'static str {
		self.kind().type_name()
	}
}

macro_rules! setting_value_conversions {
	($($ty:ty => $variant:ident),* $(,)?) => {
		$(
			impl From<$ty> for SettingValue {
				fn from(value: $ty) -> Self {
					SettingValue::$variant(value)
				}
			}

			impl FromSettingValue for $ty {
				const KIND: SettingKind = SettingKind::$variant;

				fn from_setting_value(value: SettingValue) -> Option<Self> {
					match value {
						SettingValue::$variant(v) => Some(v),
						_ => None,
					}
				}
			}
		)*
	};
}

/// Rust types a setting value can be extracted as
pub trait FromSettingValue: Sized {
	const KIND: SettingKind;

	fn from_setting_value(value: SettingValue) -> Option<Self>;
}

setting_value_conversions! {
	bool => Bool,
	i64 => Int,
	String => String,
	Version => Version,
	Vec<String> => List,
	AutoRecords => Automation,
	TimeLimitedDownload => TimeLimitedDownload,
	ProxyRecords => Proxies,
}

/// Setting definition - decoder and default bound to one key
#[derive(Clone)]
pub struct SettingDefinition {
	pub key: SettingKey,

	/// Human-readable description
	pub description: String,

	/// Kind of value the decoder produces
	pub kind: SettingKind,

	/// Returned when nothing is stored. None resolves to no value.
	pub default: Option<SettingValue>,

	pub decoder: SettingDecoder,
}

impl Debug for SettingDefinition {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("SettingDefinition")
			.field("key", &self.key)
			.field("description", &self.description)
			.field("kind", &self.kind)
			.field("default", &self.default)
			.finish_non_exhaustive()
	}
}

impl SettingDefinition {
	/// Create a builder for constructing a SettingDefinition
	pub fn builder(key: SettingKey) -> SettingDefinitionBuilder {
		SettingDefinitionBuilder::new(key)
	}

	/// Decode a stored raw value (no default fallback)
	pub fn decode(&self, raw: &str) -> TfResult<Option<SettingValue>> {
		(self.decoder)(raw).map_err(|reason| Error::ConversionError {
			key: self.key,
			raw: raw.into(),
			reason,
		})
	}
}

/// Builder for SettingDefinition with fluent API
pub struct SettingDefinitionBuilder {
	key: SettingKey,
	description: Option<String>,
	decoder: Option<(SettingKind, SettingDecoder)>,
	default: Option<SettingValue>,
}

impl SettingDefinitionBuilder {
	pub fn new(key: SettingKey) -> Self {
		Self { key, description: None, decoder: None, default: None }
	}

	/// Set the description (required)
	pub fn description(mut self, description: impl Into<String>) -> Self {
		self.description = Some(description.into());
		self
	}

	/// Set the decoder and the kind of value it produces (required)
	pub fn decoder(mut self, kind: SettingKind, decoder: SettingDecoder) -> Self {
		self.decoder = Some((kind, decoder));
		self
	}

	/// Set the default value (optional)
	pub fn default(mut self, value: impl Into<SettingValue>) -> Self {
		self.default = Some(value.into());
		self
	}

	/// Build the SettingDefinition
	pub fn build(self) -> TfResult<SettingDefinition> {
		let description = self.description.ok_or_else(|| {
			Error::ConfigError(format!("Setting '{}' needs a description", self.key))
		})?;
		let (kind, decoder) = self.decoder.ok_or_else(|| {
			Error::ConfigError(format!("Setting '{}' needs a decoder", self.key))
		})?;

		if let Some(default) = &self.default
			&& default.kind() != kind
		{
			return Err(Error::ConfigError(format!(
				"Default of setting '{}' is {}, but the setting holds {}",
				self.key,
				default.type_name(),
				kind.type_name()
			)));
		}

		Ok(SettingDefinition { key: self.key, description, kind, default: self.default, decoder })
	}
}

/// Mutable registry used during initialization
pub struct SettingsRegistry {
	definitions: HashMap<SettingKey, SettingDefinition>,
}

impl SettingsRegistry {
	pub fn new() -> Self {
		Self { definitions: HashMap::new() }
	}

	/// Register a new setting definition
	pub fn register(&mut self, def: SettingDefinition) -> TfResult<()> {
		if self.definitions.contains_key(&def.key) {
			return Err(Error::ConfigError(format!("Setting '{}' is already registered", def.key)));
		}

		debug!("Registering setting: {}", def.key);
		self.definitions.insert(def.key, def);
		Ok(())
	}

	/// Freeze the registry (make it immutable).
	/// Fails if any key of the catalog has no definition.
	pub fn freeze(self) -> TfResult<FrozenSettingsRegistry> {
		let missing: Vec<&str> = SettingKey::ALL
			.into_iter()
			.filter(|key| !self.definitions.contains_key(key))
			.map(SettingKey::as_str)
			.collect();
		if !missing.is_empty() {
			return Err(Error::ConfigError(format!(
				"Settings without definition: {}",
				missing.join(", ")
			)));
		}

		info!("Freezing settings registry with {} definitions", self.definitions.len());
		Ok(FrozenSettingsRegistry { definitions: self.definitions })
	}

	/// Get number of registered settings
	pub fn len(&self) -> usize {
		self.definitions.len()
	}

	/// Check if registry is empty
	pub fn is_empty(&self) -> bool {
		self.definitions.is_empty()
	}
}

impl Default for SettingsRegistry {
	fn default() -> Self {
		Self::new()
	}
}

/// Immutable registry covering every key of the catalog
pub struct FrozenSettingsRegistry {
	definitions: HashMap<SettingKey, SettingDefinition>,
}

impl FrozenSettingsRegistry {
	/// Get a setting definition by key
	pub fn get(&self, key: SettingKey) -> Option<&SettingDefinition> {
		self.definitions.get(&key)
	}

	fn definition(&self, key: SettingKey) -> TfResult<&SettingDefinition> {
		self.get(key)
			.ok_or_else(|| Error::ConfigError(format!("Setting '{}' is not registered", key)))
	}

	/// Resolve a setting from its stored raw value.
	///
	/// An absent value resolves to the default (or to no value when the key has
	/// none). A present value goes through the key's decoder; a decode failure
	/// is returned as [`Error::ConversionError`] and never replaced by the default.
	pub fn resolve(&self, key: SettingKey, raw: Option<&str>) -> TfResult<Option<SettingValue>> {
		let def = self.definition(key)?;
		match raw {
			None => Ok(def.default.clone()),
			Some(raw) => def.decode(raw),
		}
	}

	/// Resolve a setting as a concrete type.
	/// Asking for a type the key does not hold is a [`Error::TypeMismatch`].
	pub fn resolve_as<T: FromSettingValue>(
		&self,
		key: SettingKey,
		raw: Option<&str>,
	) -> TfResult<Option<T>> {
		let def = self.definition(key)?;
		if def.kind != T::KIND {
			return Err(Error::TypeMismatch {
				key,
				expected: def.kind.type_name(),
				got: T::KIND.type_name(),
			});
		}

		match self.resolve(key, raw)? {
			None => Ok(None),
			Some(value) => {
				let got = value.type_name();
				T::from_setting_value(value).map(Some).ok_or(Error::TypeMismatch {
					key,
					expected: T::KIND.type_name(),
					got,
				})
			}
		}
	}

	/// Encode a value into the raw string stored for `key`
	pub fn encode(&self, key: SettingKey, value: &SettingValue) -> TfResult<String> {
		let def = self.definition(key)?;
		if value.kind() != def.kind {
			return Err(Error::TypeMismatch {
				key,
				expected: def.kind.type_name(),
				got: value.type_name(),
			});
		}
		convert::encode(key, value)
	}

	/// List all registered settings in catalog order
	pub fn list(&self) -> impl Iterator<Item = &SettingDefinition> {
		SettingKey::ALL.into_iter().filter_map(|key| self.definitions.get(&key))
	}

	/// Get number of registered settings
	pub fn len(&self) -> usize {
		self.definitions.len()
	}

	/// Check if registry is empty
	pub fn is_empty(&self) -> bool {
		self.definitions.is_empty()
	}
}


// vim: ts=4
