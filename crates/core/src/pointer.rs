//! Page-wide pointer-down broadcasting.
//!
//! A host owns one [`PointerBus`] and broadcasts every pointer-down it sees.
//! Each controller that wants outside-interaction dismissal holds a
//! [`PointerSubscription`]; dropping the subscription detaches it.

use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};
use std::sync::{Arc, Mutex, PoisonError, Weak};

/// Cell coordinates of a pointer-down.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointerEvent {
	pub column: u16,
	pub row: u16,
}

impl PointerEvent {
	pub fn new(column: u16, row: u16) -> Self {
		Self { column, row }
	}
}

/// Rectangle covering a widget's interactive area.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Region {
	pub x: u16,
	pub y: u16,
	pub width: u16,
	pub height: u16,
}

impl Region {
	pub fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
		Self {
			x,
			y,
			width,
			height,
		}
	}

	pub fn contains(&self, event: PointerEvent) -> bool {
		let column = u32::from(event.column);
		let row = u32::from(event.row);
		column >= u32::from(self.x)
			&& column < u32::from(self.x) + u32::from(self.width)
			&& row >= u32::from(self.y)
			&& row < u32::from(self.y) + u32::from(self.height)
	}
}

#[derive(Default)]
struct BusInner {
	next_id: u64,
	subscribers: Vec<(u64, Sender<PointerEvent>)>,
}

/// Fan-out of pointer-down events to subscribed controllers.
#[derive(Clone, Default)]
pub struct PointerBus {
	inner: Arc<Mutex<BusInner>>,
}

impl PointerBus {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn subscribe(&self) -> PointerSubscription {
		let (tx, rx) = mpsc::channel();
		let mut inner = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
		inner.next_id = inner.next_id.wrapping_add(1);
		let id = inner.next_id;
		inner.subscribers.push((id, tx));
		PointerSubscription {
			id,
			rx,
			bus: Arc::downgrade(&self.inner),
		}
	}

	/// Deliver `event` to every live subscriber and return how many received it.
	pub fn broadcast(&self, event: PointerEvent) -> usize {
		let mut inner = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
		inner.subscribers.retain(|(_, tx)| tx.send(event).is_ok());
		inner.subscribers.len()
	}

	pub fn subscriber_count(&self) -> usize {
		self.inner
			.lock()
			.unwrap_or_else(PoisonError::into_inner)
			.subscribers
			.len()
	}
}

/// Handle for one attached listener. Detaches on drop.
pub struct PointerSubscription {
	id: u64,
	rx: Receiver<PointerEvent>,
	bus: Weak<Mutex<BusInner>>,
}

impl PointerSubscription {
	pub fn try_recv(&self) -> Option<PointerEvent> {
		match self.rx.try_recv() {
			Ok(event) => Some(event),
			Err(TryRecvError::Empty | TryRecvError::Disconnected) => None,
		}
	}

	pub fn drain(&self) -> Vec<PointerEvent> {
		self.rx.try_iter().collect()
	}
}

impl Drop for PointerSubscription {
	fn drop(&mut self) {
		if let Some(bus) = self.bus.upgrade() {
			let mut inner = bus.lock().unwrap_or_else(PoisonError::into_inner);
			inner.subscribers.retain(|(id, _)| *id != self.id);
		}
	}
}
