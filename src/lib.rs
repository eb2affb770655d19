pub mod config;
pub mod error;
pub mod escape;
pub mod notifier;
pub mod payload;
pub mod report;
pub mod settings;
pub mod spawn;

pub use config::{Destination, EnvDestination};
pub use error::DeliveryError;
pub use escape::escape_json;
pub use notifier::{deliver, WebhookNotifier};
pub use payload::build_payload;
pub use report::{LogReporter, Reporter};
pub use settings::Settings;
pub use spawn::{Spawn, TokioSpawner, TrackedSpawner};
