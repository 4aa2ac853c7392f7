/// Highlighted position within an open results list.
///
/// Movement wraps in both directions. Moving up with nothing highlighted jumps
/// straight to the last entry.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Cursor {
	index: Option<usize>,
}

impl Cursor {
	pub fn index(&self) -> Option<usize> {
		self.index
	}

	pub fn reset(&mut self) {
		self.index = None;
	}

	/// Advance within a list of `len` entries. No-op on an empty list.
	pub fn down(&mut self, len: usize) -> Option<usize> {
		if len == 0 {
			return self.index;
		}
		self.index = Some(match self.index {
			Some(index) if index + 1 < len => index + 1,
			_ => 0,
		});
		self.index
	}

	/// Retreat within a list of `len` entries. No-op on an empty list.
	pub fn up(&mut self, len: usize) -> Option<usize> {
		if len == 0 {
			return self.index;
		}
		self.index = Some(match self.index {
			Some(index) if index > 0 && index < len => index - 1,
			_ => len - 1,
		});
		self.index
	}
}
