use std::error::Error;

use reqwest::StatusCode;

pub const LOG_TARGET: &str = "hooknotify::webhook";

pub trait Reporter: Send + Sync {
	fn rejected(&self, status: StatusCode);
	fn failed(&self, err: &reqwest::Error);
}

#[derive(Debug, Default, Clone, Copy)]
pub struct LogReporter;

impl Reporter for LogReporter {
	fn rejected(&self, status: StatusCode) {
		log::warn!(
			target: LOG_TARGET,
			"Failed to send webhook. Response code: {}",
			status.as_u16()
		);
	}

	fn failed(&self, err: &reqwest::Error) {
		let mut detail = err.to_string();
		let mut source = err.source();
		while let Some(cause) = source {
			detail.push_str(": ");
			detail.push_str(&cause.to_string());
			source = cause.source();
		}
		log::error!(target: LOG_TARGET, "Error sending webhook: {}", detail);
	}
}
