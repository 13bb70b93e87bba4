//! Raw string decoders and their inverse encoders
//!
//! Scalar decoders are lenient: they accept the textual forms the application
//! itself may have written over time. Blank text decodes to `false` for
//! booleans, is kept as given by the string passthrough and the version
//! parser, and decodes to no value everywhere else.

use serde::de::DeserializeOwned;

use super::types::SettingValue;
use crate::prelude::*;

const TRUE_TOKENS: &[&str] = &["true", "yes", "y", "t", "ok", "1", "on", "是", "对", "對", "真", "√"];
const FALSE_TOKENS: &[&str] = &["false", "no", "n", "f", "0", "off", "否", "错", "錯", "假", "×"];

/// Separator of list values
pub const LIST_SEPARATOR: &str = ",";

/// Blank text is `false`
pub fn to_bool(raw: &str) -> Result<Option<SettingValue>, String> {
	let token = raw.trim().to_lowercase();
	if token.is_empty() {
		return Ok(Some(SettingValue::Bool(false)));
	}
	if TRUE_TOKENS.contains(&token.as_str()) {
		Ok(Some(SettingValue::Bool(true)))
	} else if FALSE_TOKENS.contains(&token.as_str()) {
		Ok(Some(SettingValue::Bool(false)))
	} else {
		Err(format!("'{}' is not a boolean", raw.trim()))
	}
}

pub fn to_int(raw: &str) -> Result<Option<SettingValue>, String> {
	let text = raw.trim();
	if text.is_empty() {
		return Ok(None);
	}
	parse_int(text).map(|n| Some(SettingValue::Int(n)))
}

fn parse_int(text: &str) -> Result<i64, String> {
	if let Ok(n) = text.parse::<i64>() {
		return Ok(n);
	}

	let (negative, unsigned) = match text.as_bytes().first() {
		Some(b'-') => (true, &text[1..]),
		Some(b'+') => (false, &text[1..]),
		_ => (false, text),
	};
	if let Some(hex) = unsigned.strip_prefix("0x").or_else(|| unsigned.strip_prefix("0X")) {
		if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
			return Err(format!("'{}' is not a hexadecimal integer", text));
		}
		let n = i64::from_str_radix(hex, 16)
			.map_err(|e| format!("'{}' is not a hexadecimal integer: {}", text, e))?;
		return Ok(if negative { -n } else { n });
	}

	// Decimal notation is truncated toward zero
	if let Some((digits, fraction)) = unsigned.split_once('.')
		&& !digits.is_empty()
		&& digits.bytes().all(|b| b.is_ascii_digit())
		&& fraction.bytes().all(|b| b.is_ascii_digit())
	{
		// Sign and integer digits, without the fraction
		let int_part = &text[..text.len() - fraction.len() - 1];
		return int_part
			.parse::<i64>()
			.map_err(|e| format!("'{}' is out of integer range: {}", text, e));
	}

	Err(format!("'{}' is not an integer", text))
}

/// Passthrough, the stored text is the value
pub fn to_string(raw: &str) -> Result<Option<SettingValue>, String> {
	Ok(Some(SettingValue::String(raw.to_string())))
}

pub fn to_version(raw: &str) -> Result<Option<SettingValue>, String> {
	Ok(Some(SettingValue::Version(Version::new(raw))))
}

/// Split on the separator. Segments are kept as stored, empty ones included.
pub fn to_list(raw: &str) -> Result<Option<SettingValue>, String> {
	if raw.trim().is_empty() {
		return Ok(None);
	}
	Ok(Some(SettingValue::List(raw.split(LIST_SEPARATOR).map(str::to_string).collect())))
}

fn from_json<T: DeserializeOwned>(raw: &str) -> Result<Option<T>, String> {
	if raw.trim().is_empty() {
		return Ok(None);
	}
	serde_json::from_str(raw).map(Some).map_err(|e| format!("invalid JSON payload: {}", e))
}

pub fn to_automation(raw: &str) -> Result<Option<SettingValue>, String> {
	Ok(from_json::<AutoRecords>(raw)?.map(SettingValue::Automation))
}

pub fn to_time_limited_download(raw: &str) -> Result<Option<SettingValue>, String> {
	Ok(from_json::<TimeLimitedDownload>(raw)?.map(SettingValue::TimeLimitedDownload))
}

pub fn to_proxies(raw: &str) -> Result<Option<SettingValue>, String> {
	Ok(from_json::<ProxyRecords>(raw)?.map(SettingValue::Proxies))
}

/// Encode a value into its stored raw form
pub fn encode(key: SettingKey, value: &SettingValue) -> TfResult<String> {
	let json_err =
		|e: serde_json::Error| Error::ValidationError(format!("Cannot encode '{}': {}", key, e));

	match value {
		SettingValue::Bool(b) => Ok(b.to_string()),
		SettingValue::Int(n) => Ok(n.to_string()),
		SettingValue::String(s) => Ok(s.clone()),
		SettingValue::Version(v) => Ok(v.to_string()),
		SettingValue::List(items) => {
			if let Some(item) = items.iter().find(|item| item.contains(LIST_SEPARATOR)) {
				return Err(Error::ValidationError(format!(
					"Item '{}' of setting '{}' contains '{}'",
					item, key, LIST_SEPARATOR
				)));
			}
			let joined = items.join(LIST_SEPARATOR);
			// Blank text reads back as no value
			if joined.trim().is_empty() {
				return Err(Error::ValidationError(format!(
					"Setting '{}' cannot store a blank list, delete it instead",
					key
				)));
			}
			Ok(joined)
		}
		SettingValue::Automation(v) => serde_json::to_string(v).map_err(json_err),
		SettingValue::TimeLimitedDownload(v) => serde_json::to_string(v).map_err(json_err),
		SettingValue::Proxies(v) => serde_json::to_string(v).map_err(json_err),
	}
}


// vim: ts=4
