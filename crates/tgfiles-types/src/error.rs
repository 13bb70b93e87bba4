//! Error type shared by the settings crates

use std::fmt;

use crate::types::SettingKey;

pub type TfResult<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
	/// A stored raw value could not be decoded into the key's type.
	/// This is the only error resolution itself can produce.
	ConversionError { key: SettingKey, raw: Box<str>, reason: String },

	/// The value has a different kind than the one the key holds
	TypeMismatch { key: SettingKey, expected: &'static str, got: &'static str },

	/// Value is well-typed but cannot be stored or used as given
	ValidationError(String),

	/// Registry construction failed (duplicate or missing key, bad default)
	ConfigError(String),

	/// A key name outside the closed setting catalog
	UnknownSetting(String),

	/// A required value is neither stored nor defaulted
	NotConfigured(SettingKey),

	/// Backing store failure
	DbError(String),
}

impl Error {
	/// Key the error refers to, if any
	pub fn key(&self) -> Option<SettingKey> {
		match self {
			Error::ConversionError { key, .. }
			| Error::TypeMismatch { key, .. }
			| Error::NotConfigured(key) => Some(*key),
			_ => None,
		}
	}
}

impl fmt::Display for Error {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Error::ConversionError { key, raw, reason } => {
				write!(f, "Cannot convert value {:?} of setting '{}': {}", raw, key, reason)
			}
			Error::TypeMismatch { key, expected, got } => {
				write!(f, "Type mismatch for setting '{}': expected {}, got {}", key, expected, got)
			}
			Error::ValidationError(msg) => write!(f, "Validation error: {}", msg),
			Error::ConfigError(msg) => write!(f, "Configuration error: {}", msg),
			Error::UnknownSetting(name) => write!(f, "Unknown setting: {}", name),
			Error::NotConfigured(key) => {
				write!(f, "Setting '{}' has no default and must be configured", key)
			}
			Error::DbError(msg) => write!(f, "Database error: {}", msg),
		}
	}
}

impl std::error::Error for Error {}

// vim: ts=4
