use std::path::{Path, PathBuf};

pub const WEBHOOK_URL_VAR: &str = "WEBHOOK_URL";

pub fn settings_path() -> PathBuf {
	match std::env::var("SETTINGS_PATH") {
		Ok(val) => Path::new(&val).to_owned(),
		Err(_) => Path::new("./settings.json").to_owned(),
	}
}

/// Source of the webhook URL. Consulted on every notification, so changes
/// show up on the next call. Absent or empty means notifications are off.
pub trait Destination: Send + Sync {
	fn webhook_url(&self) -> Option<String>;
}

impl Destination for Option<String> {
	fn webhook_url(&self) -> Option<String> {
		self.clone()
	}
}

impl Destination for String {
	fn webhook_url(&self) -> Option<String> {
		Some(self.clone())
	}
}

#[derive(Debug, Clone)]
pub struct EnvDestination {
	var: String,
}

impl EnvDestination {
	pub fn new(var: impl Into<String>) -> Self {
		Self { var: var.into() }
	}
}

impl Default for EnvDestination {
	fn default() -> Self {
		Self::new(WEBHOOK_URL_VAR)
	}
}

impl Destination for EnvDestination {
	fn webhook_url(&self) -> Option<String> {
		std::env::var(&self.var).ok()
	}
}
