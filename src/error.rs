use reqwest::StatusCode;

#[derive(Debug, thiserror::Error)]
pub enum DeliveryError {
	#[error("webhook rejected with status {0}")]
	Rejected(StatusCode),
	#[error("webhook transport failure: {0}")]
	Transport(#[from] reqwest::Error),
}
