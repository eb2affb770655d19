use std::fs::read_to_string;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use anyhow::Context;
use serde::Deserialize;
use serde::Serialize;

use crate::config::settings_path;
use crate::config::Destination;

#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct SettingsInner {
	#[serde(default)]
	pub webhook_url: Option<String>,
}

#[derive(Debug, Clone)]
pub struct Settings {
	path: PathBuf,
	inner: Arc<Mutex<SettingsInner>>,
}

impl Settings {
	pub fn load() -> anyhow::Result<Self> {
		Self::load_from(settings_path())
	}

	/// Missing file gives defaults. Any other read failure, or a file that
	/// does not parse, is an error.
	pub fn load_from<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
		let path = path.as_ref().to_owned();
		let inner: SettingsInner = match read_to_string(&path) {
			Ok(text) => serde_json::from_str(&text)
				.with_context(|| format!("invalid settings file {}", path.display()))?,
			Err(e) if e.kind() == ErrorKind::NotFound => SettingsInner::default(),
			Err(e) => {
				return Err(e).with_context(|| format!("cannot read {}", path.display()));
			}
		};
		Ok(Self {
			path,
			inner: Arc::new(Mutex::new(inner)),
		})
	}

	pub fn save(&self) -> anyhow::Result<()> {
		let text = serde_json::to_string(&self.snapshot())?;
		std::fs::write(&self.path, text)
			.with_context(|| format!("cannot write {}", self.path.display()))?;
		Ok(())
	}

	pub fn set_webhook_url(&self, url: Option<String>) {
		self.lock().webhook_url = url;
	}

	pub fn snapshot(&self) -> SettingsInner {
		self.lock().clone()
	}

	fn lock(&self) -> std::sync::MutexGuard<'_, SettingsInner> {
		self.inner.lock().unwrap_or_else(|e| e.into_inner())
	}
}

impl Destination for Settings {
	fn webhook_url(&self) -> Option<String> {
		self.lock().webhook_url.clone()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use tempfile::TempDir;

	#[test]
	fn missing_file_is_disabled() {
		let dir = TempDir::new().unwrap();
		let settings = Settings::load_from(dir.path().join("settings.json")).unwrap();
		assert_eq!(settings.webhook_url(), None);
	}

	#[test]
	fn reads_webhook_url() {
		let dir = TempDir::new().unwrap();
		let path = dir.path().join("settings.json");
		std::fs::write(&path, "{\"webhook_url\":\"http://localhost:9/hook\"}").unwrap();
		let settings = Settings::load_from(&path).unwrap();
		assert_eq!(settings.webhook_url().as_deref(), Some("http://localhost:9/hook"));
	}

	#[test]
	fn unknown_fields_and_missing_url() {
		let dir = TempDir::new().unwrap();
		let path = dir.path().join("settings.json");
		std::fs::write(&path, "{\"other\":1}").unwrap();
		let settings = Settings::load_from(&path).unwrap();
		assert_eq!(settings.webhook_url(), None);
	}

	#[test]
	fn malformed_file_errors() {
		let dir = TempDir::new().unwrap();
		let path = dir.path().join("settings.json");
		std::fs::write(&path, "{not json").unwrap();
		assert!(Settings::load_from(&path).is_err());
	}

	#[test]
	fn invalid_utf8_errors() {
		let dir = TempDir::new().unwrap();
		let path = dir.path().join("settings.json");
		std::fs::write(&path, b"{\"webhook_url\":\"\xff\xfe\"}").unwrap();
		assert!(Settings::load_from(&path).is_err());
	}

	#[test]
	fn directory_at_path_errors() {
		let dir = TempDir::new().unwrap();
		assert!(Settings::load_from(dir.path()).is_err());
	}

	#[test]
	fn save_round_trips() {
		let dir = TempDir::new().unwrap();
		let path = dir.path().join("settings.json");
		let settings = Settings::load_from(&path).unwrap();
		settings.set_webhook_url(Some("http://example.invalid/hook".into()));
		settings.save().unwrap();
		let reloaded = Settings::load_from(&path).unwrap();
		assert_eq!(
			reloaded.webhook_url().as_deref(),
			Some("http://example.invalid/hook")
		);
	}

	#[test]
	#[serial_test::serial]
	fn load_uses_settings_path() {
		let dir = TempDir::new().unwrap();
		let path = dir.path().join("custom.json");
		std::fs::write(&path, "{\"webhook_url\":\"http://a/b\"}").unwrap();
		std::env::set_var("SETTINGS_PATH", &path);
		let settings = Settings::load().unwrap();
		std::env::remove_var("SETTINGS_PATH");
		assert_eq!(settings.webhook_url().as_deref(), Some("http://a/b"));
	}
}
