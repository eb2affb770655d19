use std::sync::Arc;

use futures::future::BoxFuture;
use tokio::runtime::Handle;
use tokio::sync::Mutex;
use tokio_util::task::TaskTracker;

pub trait Spawn: Send + Sync {
	fn spawn(&self, task: BoxFuture<'static, ()>);
}

#[derive(Debug, Clone)]
pub struct TokioSpawner {
	handle: Handle,
}

impl TokioSpawner {
	pub fn new(handle: Handle) -> Self {
		Self { handle }
	}

	pub fn current() -> Option<Self> {
		Handle::try_current().ok().map(Self::new)
	}
}

impl Spawn for TokioSpawner {
	fn spawn(&self, task: BoxFuture<'static, ()>) {
		self.handle.spawn(task);
	}
}

#[derive(Debug, Clone)]
pub struct TrackedSpawner {
	handle: Handle,
	tracker: TaskTracker,
	draining: Arc<Mutex<()>>,
}

impl TrackedSpawner {
	pub fn new(handle: Handle) -> Self {
		Self {
			handle,
			tracker: TaskTracker::new(),
			draining: Arc::new(Mutex::new(())),
		}
	}

	pub fn current() -> Option<Self> {
		Handle::try_current().ok().map(Self::new)
	}

	pub fn in_flight(&self) -> usize {
		self.tracker.len()
	}

	/// Waits until every task spawned so far has finished. Tasks spawned
	/// while waiting are waited for too. Overlapping drains run one after
	/// the other.
	pub async fn drain(&self) {
		let _draining = self.draining.lock().await;
		self.tracker.close();
		self.tracker.wait().await;
		self.tracker.reopen();
	}
}

impl Spawn for TrackedSpawner {
	fn spawn(&self, task: BoxFuture<'static, ()>) {
		self.tracker.spawn_on(task, &self.handle);
	}
}
