//! Structured records stored as JSON settings
//!
//! Field names follow the stored camelCase form. Unknown fields are ignored and
//! missing flags default to off, so values written by older releases still load.

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use crate::prelude::*;

// Automation
//************

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileType {
	Photo,
	Video,
	Audio,
	File,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransferPolicy {
	GroupByChat,
	GroupByType,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DuplicationPolicy {
	Overwrite,
	Rename,
	Skip,
	Hash,
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreloadConfig {
	#[serde(default)]
	pub enabled: bool,
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DownloadRule {
	pub query: String,
	pub file_types: Vec<FileType>,
	pub download_history: bool,
	pub download_comment_files: bool,
}

#[skip_serializing_none]
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DownloadConfig {
	#[serde(default)]
	pub enabled: bool,
	#[serde(default)]
	pub rule: Option<DownloadRule>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransferRule {
	pub destination: String,
	pub transfer_policy: TransferPolicy,
	pub duplication_policy: DuplicationPolicy,
	#[serde(default)]
	pub transfer_history: bool,
}

#[skip_serializing_none]
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransferConfig {
	#[serde(default)]
	pub enabled: bool,
	#[serde(default)]
	pub rule: Option<TransferRule>,
}

/// Automation settings of one chat of one telegram account
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AutoRecord {
	pub telegram_id: i64,
	pub chat_id: i64,
	#[serde(default)]
	pub preload: PreloadConfig,
	#[serde(default)]
	pub download: DownloadConfig,
	#[serde(default)]
	pub transfer: TransferConfig,
}

impl AutoRecord {
	pub fn new(telegram_id: i64, chat_id: i64) -> Self {
		Self {
			telegram_id,
			chat_id,
			preload: PreloadConfig::default(),
			download: DownloadConfig::default(),
			transfer: TransferConfig::default(),
		}
	}

	/// True when no automation is switched on for the chat
	pub fn is_idle(&self) -> bool {
		!self.preload.enabled && !self.download.enabled && !self.transfer.enabled
	}
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AutoRecords {
	#[serde(default)]
	pub items: Vec<AutoRecord>,
}

impl AutoRecords {
	pub fn get(&self, telegram_id: i64, chat_id: i64) -> Option<&AutoRecord> {
		self.items.iter().find(|r| r.telegram_id == telegram_id && r.chat_id == chat_id)
	}

	/// Insert or replace the record for the same account/chat pair.
	/// Idle records are dropped instead of stored.
	pub fn upsert(&mut self, record: AutoRecord) {
		self.remove(record.telegram_id, record.chat_id);
		if !record.is_idle() {
			self.items.push(record);
		}
	}

	pub fn remove(&mut self, telegram_id: i64, chat_id: i64) -> Option<AutoRecord> {
		let idx =
			self.items.iter().position(|r| r.telegram_id == telegram_id && r.chat_id == chat_id)?;
		Some(self.items.remove(idx))
	}

	pub fn preload_enabled(&self) -> impl Iterator<Item = &AutoRecord> {
		self.items.iter().filter(|r| r.preload.enabled)
	}

	pub fn download_enabled(&self) -> impl Iterator<Item = &AutoRecord> {
		self.items.iter().filter(|r| r.download.enabled)
	}

	pub fn transfer_enabled(&self) -> impl Iterator<Item = &AutoRecord> {
		self.items.iter().filter(|r| r.transfer.enabled)
	}
}

// Time limited download
//***********************

const TIME_FORMAT: &str = "%H:%M";

/// Daily window in which automatic downloads may run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeLimitedDownload {
	/// "HH:mm"
	pub start_time: String,
	/// "HH:mm"
	pub end_time: String,
}

impl TimeLimitedDownload {
	pub fn new(start: NaiveTime, end: NaiveTime) -> Self {
		Self {
			start_time: start.format(TIME_FORMAT).to_string(),
			end_time: end.format(TIME_FORMAT).to_string(),
		}
	}

	/// Parsed (start, end) of the window
	pub fn window(&self) -> TfResult<(NaiveTime, NaiveTime)> {
		Ok((parse_time(&self.start_time)?, parse_time(&self.end_time)?))
	}

	/// Whether `time` falls in the window. The start is inclusive, the end
	/// exclusive. An end before the start wraps past midnight; equal bounds
	/// cover the whole day.
	pub fn contains(&self, time: NaiveTime) -> TfResult<bool> {
		let (start, end) = self.window()?;
		Ok(match start.cmp(&end) {
			std::cmp::Ordering::Equal => true,
			std::cmp::Ordering::Less => start <= time && time < end,
			std::cmp::Ordering::Greater => time >= start || time < end,
		})
	}
}

fn parse_time(s: &str) -> TfResult<NaiveTime> {
	NaiveTime::parse_from_str(s.trim(), TIME_FORMAT)
		.map_err(|e| Error::ValidationError(format!("Invalid time '{}': {}", s, e)))
}

// Proxies
//*********

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProxyType {
	Http,
	Socks5,
	Mtproto,
}

#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Proxy {
	pub name: String,
	pub server: String,
	pub port: u16,
	#[serde(default)]
	pub username: Option<String>,
	#[serde(default)]
	pub password: Option<String>,
	#[serde(rename = "type")]
	pub typ: ProxyType,
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProxyRecords {
	#[serde(default)]
	pub items: Vec<Proxy>,
}

impl ProxyRecords {
	pub fn get(&self, name: &str) -> Option<&Proxy> {
		self.items.iter().find(|p| p.name == name)
	}
}


// vim: ts=4
