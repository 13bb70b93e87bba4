use chrono::NaiveTime;

use tgfiles_settings::{FrozenSettingsRegistry, SettingKey, SettingKind, SettingValue, build_registry};
use tgfiles_types::error::Error;
use tgfiles_types::records::{
	AutoRecord, AutoRecords, DownloadRule, FileType, Proxy, ProxyRecords, ProxyType,
	TimeLimitedDownload,
};
use tgfiles_types::version::Version;

fn registry() -> FrozenSettingsRegistry {
	build_registry().unwrap()
}

const BOOL_KEYS: [SettingKey; 3] =
	[SettingKey::UniqueOnly, SettingKey::AlwaysHide, SettingKey::ShowSensitiveContent];
const JSON_KEYS: [SettingKey; 3] =
	[SettingKey::Automation, SettingKey::AutoDownloadTimeLimited, SettingKey::Proxys];

#[test]
fn test_catalog_is_complete() {
	let registry = registry();
	assert_eq!(registry.len(), SettingKey::ALL.len());
	let listed: Vec<SettingKey> = registry.list().map(|def| def.key).collect();
	assert_eq!(listed, SettingKey::ALL.to_vec());
	for def in registry.list() {
		assert!(!def.description.is_empty(), "{} has no description", def.key);
	}
}

#[test]
fn test_absent_resolves_to_default() {
	let registry = registry();
	for key in SettingKey::ALL {
		let def = registry.get(key).unwrap();
		assert_eq!(registry.resolve(key, None).unwrap(), def.default, "{}", key);
	}
}

#[test]
fn test_registered_defaults() {
	let registry = registry();
	for key in BOOL_KEYS {
		assert_eq!(registry.resolve(key, None).unwrap(), Some(SettingValue::Bool(false)));
	}
	assert_eq!(
		registry.resolve(SettingKey::AvgSpeedInterval, None).unwrap(),
		Some(SettingValue::Int(300))
	);
	for key in [
		SettingKey::Version,
		SettingKey::ImageLoadSize,
		SettingKey::Automation,
		SettingKey::AutoDownloadLimit,
		SettingKey::AutoDownloadTimeLimited,
		SettingKey::Proxys,
		SettingKey::Tags,
	] {
		assert_eq!(registry.resolve(key, None).unwrap(), None, "{}", key);
	}
}

#[test]
fn test_bool_settings() {
	let registry = registry();
	for key in BOOL_KEYS {
		for (raw, expected) in [("true", true), ("TRUE", true), ("false", false), ("False", false)]
		{
			assert_eq!(registry.resolve_as::<bool>(key, Some(raw)).unwrap(), Some(expected));
		}
	}
}

#[test]
fn test_avg_speed_interval() {
	let registry = registry();
	assert_eq!(registry.resolve_as::<i64>(SettingKey::AvgSpeedInterval, None).unwrap(), Some(300));
	assert_eq!(
		registry.resolve_as::<i64>(SettingKey::AvgSpeedInterval, Some("120")).unwrap(),
		Some(120)
	);
}

#[test]
fn test_tags() {
	let registry = registry();
	assert_eq!(
		registry.resolve_as::<Vec<String>>(SettingKey::Tags, Some("a,b,c")).unwrap(),
		Some(vec!["a".to_string(), "b".to_string(), "c".to_string()])
	);
	assert_eq!(registry.resolve(SettingKey::Tags, Some("")).unwrap(), None);
	assert_eq!(registry.resolve(SettingKey::Tags, None).unwrap(), None);
}

#[test]
fn test_json_settings_blank_is_none() {
	let registry = registry();
	for key in JSON_KEYS {
		assert_eq!(registry.resolve(key, Some("")).unwrap(), None, "{}", key);
		assert_eq!(registry.resolve(key, Some("   ")).unwrap(), None, "{}", key);
	}
}

#[test]
fn test_malformed_json_is_conversion_error() {
	let registry = registry();
	for key in JSON_KEYS {
		match registry.resolve(key, Some("{\"items\": [")) {
			Err(Error::ConversionError { key: err_key, raw, .. }) => {
				assert_eq!(err_key, key);
				assert_eq!(&*raw, "{\"items\": [");
			}
			other => panic!("{}: expected conversion error, got {:?}", key, other),
		}
	}
}

#[test]
fn test_non_numeric_limit_is_conversion_error() {
	let registry = registry();
	let err = registry.resolve(SettingKey::AutoDownloadLimit, Some("not-a-number")).unwrap_err();
	assert!(matches!(err, Error::ConversionError { .. }));
	assert_eq!(err.key(), Some(SettingKey::AutoDownloadLimit));
	assert!(err.to_string().contains("autoDownloadLimit"));
}

#[test]
fn test_malformed_value_does_not_fall_back_to_default() {
	let registry = registry();
	assert!(registry.resolve(SettingKey::AvgSpeedInterval, Some("five minutes")).is_err());
	assert!(registry.resolve(SettingKey::UniqueOnly, Some("maybe")).is_err());
}

#[test]
fn test_version_and_passthrough() {
	let registry = registry();
	let version = registry.resolve_as::<Version>(SettingKey::Version, Some("0.1.15")).unwrap();
	assert_eq!(version, Some(Version::new("0.1.15")));
	assert!(version.unwrap() < Version::new("0.2.0"));

	assert_eq!(
		registry.resolve_as::<String>(SettingKey::ImageLoadSize, Some("m")).unwrap(),
		Some("m".to_string())
	);
}

#[test]
fn test_each_key_uses_its_own_decoder() {
	let registry = registry();
	for key in SettingKey::ALL {
		let def = registry.get(key).unwrap();
		assert_eq!(def.key, key);
		if let Some(value) = registry.resolve(key, Some("1")).unwrap_or(None) {
			assert_eq!(value.kind(), def.kind, "{}", key);
		}
	}
	assert_eq!(registry.get(SettingKey::Tags).unwrap().kind, SettingKind::List);
	assert_eq!(registry.get(SettingKey::Proxys).unwrap().kind, SettingKind::Proxies);
}

#[test]
fn test_resolve_as_wrong_type() {
	let registry = registry();
	let res = registry.resolve_as::<String>(SettingKey::AvgSpeedInterval, None);
	assert!(matches!(
		res,
		Err(Error::TypeMismatch { key: SettingKey::AvgSpeedInterval, expected: "int", got: "string" })
	));
}

#[test]
fn test_encode_checks_kind() {
	let registry = registry();
	let res = registry.encode(SettingKey::AutoDownloadLimit, &SettingValue::Bool(true));
	assert!(matches!(res, Err(Error::TypeMismatch { .. })));
}

fn sample_values() -> Vec<(SettingKey, SettingValue)> {
	let mut auto = AutoRecord::new(42, -1001);
	auto.download.enabled = true;
	auto.download.rule = Some(DownloadRule {
		query: "lecture".into(),
		file_types: vec![FileType::Video, FileType::File],
		download_history: true,
		download_comment_files: false,
	});
	let automation = AutoRecords { items: vec![auto] };

	let window = TimeLimitedDownload::new(
		NaiveTime::from_hms_opt(1, 0, 0).unwrap(),
		NaiveTime::from_hms_opt(7, 30, 0).unwrap(),
	);

	let proxies = ProxyRecords {
		items: vec![Proxy {
			name: "local".into(),
			server: "127.0.0.1".into(),
			port: 1080,
			username: None,
			password: Some("secret".into()),
			typ: ProxyType::Socks5,
		}],
	};

	vec![
		(SettingKey::Version, SettingValue::Version(Version::new("0.1.15"))),
		(SettingKey::UniqueOnly, SettingValue::Bool(true)),
		(SettingKey::ImageLoadSize, SettingValue::String("m".into())),
		(SettingKey::AlwaysHide, SettingValue::Bool(false)),
		(SettingKey::ShowSensitiveContent, SettingValue::Bool(true)),
		(SettingKey::Automation, SettingValue::Automation(automation)),
		(SettingKey::AutoDownloadLimit, SettingValue::Int(5)),
		(SettingKey::AutoDownloadTimeLimited, SettingValue::TimeLimitedDownload(window)),
		(SettingKey::Proxys, SettingValue::Proxies(proxies)),
		(SettingKey::AvgSpeedInterval, SettingValue::Int(60)),
		(SettingKey::Tags, SettingValue::List(vec!["work".into(), "music".into()])),
	]
}

#[test]
fn test_encoded_values_resolve_back() {
	let registry = registry();
	for (key, value) in sample_values() {
		let raw = registry.encode(key, &value).unwrap();
		assert_eq!(registry.resolve(key, Some(&raw)).unwrap(), Some(value), "{}", key);
	}
}

#[test]
fn test_blank_lists_are_not_encodable() {
	let registry = registry();
	for items in [vec![], vec![String::new()], vec![" ".to_string()]] {
		let value = SettingValue::List(items);
		let res = registry.encode(SettingKey::Tags, &value);
		assert!(matches!(res, Err(Error::ValidationError(_))), "{:?}", value);
	}

	// Lists with empty items still read back unchanged
	let value = SettingValue::List(vec![String::new(), "b".into(), String::new()]);
	let raw = registry.encode(SettingKey::Tags, &value).unwrap();
	assert_eq!(registry.resolve(SettingKey::Tags, Some(&raw)).unwrap(), Some(value));
}

#[test]
fn test_blank_bool_reads_as_false() {
	let registry = registry();
	for key in BOOL_KEYS {
		assert_eq!(registry.resolve_as::<bool>(key, Some("")).unwrap(), Some(false), "{}", key);
		assert_eq!(registry.resolve_as::<bool>(key, Some(" ")).unwrap(), Some(false), "{}", key);
	}
}

#[test]
fn test_stored_json_round_trips() {
	let registry = registry();
	let raw = r#"{"items":[{"telegramId":1,"chatId":2,"preload":{"enabled":true},"download":{"enabled":false},"transfer":{"enabled":true,"rule":{"destination":"/mnt/media","transferPolicy":"GROUP_BY_CHAT","duplicationPolicy":"SKIP","transferHistory":true}}}]}"#;
	let value = registry.resolve(SettingKey::Automation, Some(raw)).unwrap().unwrap();
	let encoded = registry.encode(SettingKey::Automation, &value).unwrap();

	let original: serde_json::Value = serde_json::from_str(raw).unwrap();
	let reencoded: serde_json::Value = serde_json::from_str(&encoded).unwrap();
	assert_eq!(original, reencoded);
}

// vim: ts=4
