//! Time source and the single-slot debounce timer.

use std::sync::{Arc, Mutex, PoisonError};
use std::time::{Duration, Instant};

/// Quiet interval before a remote search is dispatched.
pub const DEBOUNCE_DELAY: Duration = Duration::from_millis(500);

/// Source of the current time for deadline checks.
pub trait Clock: Send + Sync {
	fn now(&self) -> Instant;
}

/// Wall clock backed by [`Instant::now`].
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
	fn now(&self) -> Instant {
		Instant::now()
	}
}

/// Clock that only moves when told to. Clones share the same time.
#[derive(Debug, Clone)]
pub struct ManualClock {
	now: Arc<Mutex<Instant>>,
}

impl ManualClock {
	pub fn new() -> Self {
		Self {
			now: Arc::new(Mutex::new(Instant::now())),
		}
	}

	pub fn advance(&self, by: Duration) {
		let mut now = self.now.lock().unwrap_or_else(PoisonError::into_inner);
		*now += by;
	}
}

impl Default for ManualClock {
	fn default() -> Self {
		Self::new()
	}
}

impl Clock for ManualClock {
	fn now(&self) -> Instant {
		*self.now.lock().unwrap_or_else(PoisonError::into_inner)
	}
}

#[derive(Debug)]
struct Pending<T> {
	deadline: Instant,
	payload: T,
}

/// Holds at most one pending payload until its quiet interval has elapsed.
///
/// Scheduling again before the deadline replaces the payload and restarts the
/// wait, so a burst of calls yields a single due payload.
#[derive(Debug)]
pub struct DebounceTimer<T> {
	delay: Duration,
	pending: Option<Pending<T>>,
}

impl<T> DebounceTimer<T> {
	pub fn new(delay: Duration) -> Self {
		Self {
			delay,
			pending: None,
		}
	}

	pub fn delay(&self) -> Duration {
		self.delay
	}

	/// Arm the timer with `payload`. Returns `true` when a pending payload was
	/// superseded.
	pub fn schedule(&mut self, now: Instant, payload: T) -> bool {
		let superseded = self.pending.is_some();
		self.pending = Some(Pending {
			deadline: now + self.delay,
			payload,
		});
		superseded
	}

	/// Take the payload once its deadline has been reached.
	pub fn take_due(&mut self, now: Instant) -> Option<T> {
		let due = self
			.pending
			.as_ref()
			.is_some_and(|pending| now >= pending.deadline);
		if !due {
			return None;
		}
		self.pending.take().map(|pending| pending.payload)
	}

	/// Drop the pending payload. Returns `true` if one was armed.
	pub fn cancel(&mut self) -> bool {
		self.pending.take().is_some()
	}

	pub fn is_pending(&self) -> bool {
		self.pending.is_some()
	}

	pub fn deadline(&self) -> Option<Instant> {
		self.pending.as_ref().map(|pending| pending.deadline)
	}

	/// Time left until the pending payload becomes due.
	pub fn remaining(&self, now: Instant) -> Option<Duration> {
		self.deadline()
			.map(|deadline| deadline.saturating_duration_since(now))
	}
}

impl<T> Default for DebounceTimer<T> {
	fn default() -> Self {
		Self::new(DEBOUNCE_DELAY)
	}
}
