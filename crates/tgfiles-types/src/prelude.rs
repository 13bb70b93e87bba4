pub use crate::error::{Error, TfResult};
pub use crate::types::SettingKey;

// vim: ts=4
