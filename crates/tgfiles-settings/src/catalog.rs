//! Setting catalog registration
//!
//! One entry per key of the closed catalog: how its raw value decodes and what
//! it falls back to when nothing is stored.

use crate::prelude::*;
use crate::settings::convert;
use crate::settings::{SettingDefinition, SettingKind, SettingsRegistry};

/// Default interval for calculating average speed: 5 minutes
pub const DEFAULT_AVG_SPEED_INTERVAL: i64 = 5 * 60;

/// Register all settings
pub fn register_settings(registry: &mut SettingsRegistry) -> TfResult<()> {
	registry.register(
		SettingDefinition::builder(SettingKey::Version)
			.description("Version the stored data was last migrated to")
			.decoder(SettingKind::Version, convert::to_version)
			.build()?,
	)?;

	registry.register(
		SettingDefinition::builder(SettingKey::UniqueOnly)
			.description("Show only one file of those sharing the same unique id")
			.decoder(SettingKind::Bool, convert::to_bool)
			.default(false)
			.build()?,
	)?;

	registry.register(
		SettingDefinition::builder(SettingKey::ImageLoadSize)
			.description("Size of the image variant loaded for previews")
			.decoder(SettingKind::String, convert::to_string)
			.build()?,
	)?;

	registry.register(
		SettingDefinition::builder(SettingKey::AlwaysHide)
			.description("Always hide downloaded files")
			.decoder(SettingKind::Bool, convert::to_bool)
			.default(false)
			.build()?,
	)?;

	registry.register(
		SettingDefinition::builder(SettingKey::ShowSensitiveContent)
			.description("Show sensitive content without blurring")
			.decoder(SettingKind::Bool, convert::to_bool)
			.default(false)
			.build()?,
	)?;

	// JSON records: blank means nothing stored
	registry.register(
		SettingDefinition::builder(SettingKey::Automation)
			.description("Per-chat preload, download and transfer automation")
			.decoder(SettingKind::Automation, convert::to_automation)
			.build()?,
	)?;

	registry.register(
		SettingDefinition::builder(SettingKey::AutoDownloadLimit)
			.description("Auto download limit for each telegram account")
			.decoder(SettingKind::Int, convert::to_int)
			.build()?,
	)?;

	registry.register(
		SettingDefinition::builder(SettingKey::AutoDownloadTimeLimited)
			.description("Daily time window in which automatic downloads run")
			.decoder(SettingKind::TimeLimitedDownload, convert::to_time_limited_download)
			.build()?,
	)?;

	registry.register(
		SettingDefinition::builder(SettingKey::Proxys)
			.description("Proxies available to telegram accounts")
			.decoder(SettingKind::Proxies, convert::to_proxies)
			.build()?,
	)?;

	registry.register(
		SettingDefinition::builder(SettingKey::AvgSpeedInterval)
			.description("Interval for calculating average speed, in seconds")
			.decoder(SettingKind::Int, convert::to_int)
			.default(DEFAULT_AVG_SPEED_INTERVAL)
			.build()?,
	)?;

	registry.register(
		SettingDefinition::builder(SettingKey::Tags)
			.description("Tags that can be attached to files, comma separated")
			.decoder(SettingKind::List, convert::to_list)
			.build()?,
	)?;

	Ok(())
}

// vim: ts=4
