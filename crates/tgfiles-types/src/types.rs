//! Setting keys

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// Closed set of setting identities.
///
/// The serialized form is the name the value is stored under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SettingKey {
	Version,
	UniqueOnly,
	ImageLoadSize,
	AlwaysHide,
	ShowSensitiveContent,
	Automation,
	/// Auto download limit for each telegram account
	AutoDownloadLimit,
	AutoDownloadTimeLimited,
	Proxys,
	/// Interval for calculating average speed, in seconds
	AvgSpeedInterval,
	Tags,
}

impl SettingKey {
	/// Every key, in declaration order
	pub const ALL: [SettingKey; 11] = [
		SettingKey::Version,
		SettingKey::UniqueOnly,
		SettingKey::ImageLoadSize,
		SettingKey::AlwaysHide,
		SettingKey::ShowSensitiveContent,
		SettingKey::Automation,
		SettingKey::AutoDownloadLimit,
		SettingKey::AutoDownloadTimeLimited,
		SettingKey::Proxys,
		SettingKey::AvgSpeedInterval,
		SettingKey::Tags,
	];

	pub fn as_str(self) -> &'static str {
		match self {
			SettingKey::Version => "version",
			SettingKey::UniqueOnly => "uniqueOnly",
			SettingKey::ImageLoadSize => "imageLoadSize",
			SettingKey::AlwaysHide => "alwaysHide",
			SettingKey::ShowSensitiveContent => "showSensitiveContent",
			SettingKey::Automation => "automation",
			SettingKey::AutoDownloadLimit => "autoDownloadLimit",
			SettingKey::AutoDownloadTimeLimited => "autoDownloadTimeLimited",
			SettingKey::Proxys => "proxys",
			SettingKey::AvgSpeedInterval => "avgSpeedInterval",
			SettingKey::Tags => "tags",
		}
	}
}

impl fmt::Display for SettingKey {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl FromStr for SettingKey {
	type Err = Error;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		SettingKey::ALL
			.into_iter()
			.find(|key| key.as_str() == s)
			.ok_or_else(|| Error::UnknownSetting(s.to_string()))
	}
}


// vim: ts=4
