use std::sync::Arc;

use reqwest::header;
use reqwest::Client;
use reqwest::StatusCode;

use crate::config::Destination;
use crate::config::EnvDestination;
use crate::error::DeliveryError;
use crate::payload::build_payload;
use crate::payload::CONTENT_TYPE;
use crate::payload::USER_AGENT;
use crate::report::LogReporter;
use crate::report::Reporter;
use crate::spawn::Spawn;
use crate::spawn::TokioSpawner;

/// Sends one POST with the payload for `content` and classifies the reply.
pub async fn deliver(client: &Client, url: &str, content: &str) -> Result<StatusCode, DeliveryError> {
	let res = client
		.post(url)
		.header(header::CONTENT_TYPE, CONTENT_TYPE)
		.header(header::USER_AGENT, USER_AGENT)
		.body(build_payload(content))
		.send()
		.await?;
	let status = res.status();
	if status.as_u16() >= 400 {
		return Err(DeliveryError::Rejected(status));
	}
	Ok(status)
}

/// Fire-and-forget webhook sender. Delivery outcomes go to the [`Reporter`]
/// and never back to the caller of `notify`.
#[derive(Clone)]
pub struct WebhookNotifier {
	destination: Arc<dyn Destination>,
	spawner: Arc<dyn Spawn>,
	reporter: Arc<dyn Reporter>,
	client: Client,
}

impl WebhookNotifier {
	pub fn new(
		destination: Arc<dyn Destination>,
		spawner: Arc<dyn Spawn>,
		reporter: Arc<dyn Reporter>,
	) -> Self {
		Self::with_client(destination, spawner, reporter, Client::new())
	}

	pub fn with_client(
		destination: Arc<dyn Destination>,
		spawner: Arc<dyn Spawn>,
		reporter: Arc<dyn Reporter>,
		client: Client,
	) -> Self {
		Self {
			destination,
			spawner,
			reporter,
			client,
		}
	}

	/// `None` outside a tokio runtime.
	pub fn from_env() -> Option<Self> {
		let spawner = TokioSpawner::current()?;
		Some(Self::new(
			Arc::new(EnvDestination::default()),
			Arc::new(spawner),
			Arc::new(LogReporter),
		))
	}

	pub fn notify(&self, content: &str) {
		let url = match self.destination.webhook_url() {
			Some(url) if !url.is_empty() => url,
			_ => return,
		};
		let client = self.client.clone();
		let reporter = self.reporter.clone();
		let content = content.to_owned();
		self.spawner.spawn(Box::pin(async move {
			match deliver(&client, &url, &content).await {
				Ok(_) => {}
				Err(DeliveryError::Rejected(status)) => reporter.rejected(status),
				Err(DeliveryError::Transport(err)) => reporter.failed(&err),
			}
		}));
	}
}

impl std::fmt::Debug for WebhookNotifier {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		// the url may embed a secret token
		f.debug_struct("WebhookNotifier").finish_non_exhaustive()
	}
}
