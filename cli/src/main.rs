use std::sync::Arc;

use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand};
use hooknotify::{
	build_payload, Destination, EnvDestination, LogReporter, Settings, TrackedSpawner,
	WebhookNotifier,
};

#[derive(Parser)]
#[command(author, version, about = "Send a message to a chat webhook", long_about = None)]
struct Cli {
	/// Log at debug level
	#[arg(long, global = true)]
	verbose: bool,
	#[command(subcommand)]
	subcommand: Commands,
}

#[derive(Subcommand)]
enum Commands {
	/// Send one message and wait for the attempt to finish
	Send {
		/// Message content
		message: String,
		/// Webhook URL. Falls back to WEBHOOK_URL, then the settings file.
		#[arg(long)]
		url: Option<String>,
	},
	/// Print the JSON body that would be sent
	Escape {
		text: String,
	},
}

fn resolve_url(url: Option<String>) -> Result<Option<String>> {
	let non_empty = |u: &String| !u.is_empty();
	if let Some(url) = url.filter(non_empty) {
		return Ok(Some(url));
	}
	if let Some(url) = EnvDestination::default().webhook_url().filter(non_empty) {
		return Ok(Some(url));
	}
	let settings = Settings::load().context("cannot load settings")?;
	Ok(settings.webhook_url().filter(non_empty))
}

fn escape_output(text: &str) -> String {
	build_payload(text)
}

async fn send(message: &str, url: Option<String>) -> Result<()> {
	let url = match resolve_url(url)? {
		Some(url) => url,
		None => {
			log::info!("no webhook url configured, nothing sent");
			return Ok(());
		}
	};
	let spawner = TrackedSpawner::current().ok_or_else(|| anyhow!("no tokio runtime"))?;
	let notifier = WebhookNotifier::new(
		Arc::new(url),
		Arc::new(spawner.clone()),
		Arc::new(LogReporter),
	);
	notifier.notify(message);
	log::debug!("waiting for {} notification(s)", spawner.in_flight());
	spawner.drain().await;
	Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
	let cli = Cli::parse();
	let level = if cli.verbose {
		log::LevelFilter::Debug
	} else {
		log::LevelFilter::Info
	};
	simple_logger::SimpleLogger::new().with_level(level).init().ok();

	match cli.subcommand {
		Commands::Send { message, url } => send(&message, url).await?,
		Commands::Escape { text } => println!("{}", escape_output(&text)),
	}
	Ok(())
}
