//! In-process navigation history.
//!
//! An entry stack with a cursor. Pushing after going back discards the
//! forward branch; traversals past either end are no-ops, matching
//! browser history semantics. The hosting application may mirror this
//! into a platform history; that mirroring is outside the coordinator.

use crate::request::RouteLocation;
use crate::scroll::ScrollPosition;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One settled navigation in the history stack.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
	/// The resolved location this entry settled on.
	pub location: RouteLocation,
	/// Scroll position recorded when this entry was last left, offered
	/// to the scroll policy when traversal returns here.
	pub saved_scroll: Option<ScrollPosition>,
	/// Opaque application payload carried with the entry.
	pub state: Value,
}

impl HistoryEntry {
	/// Creates an entry with no saved scroll and a null state payload.
	pub fn new(location: RouteLocation) -> Self {
		Self {
			location,
			saved_scroll: None,
			state: Value::Null,
		}
	}

	/// Attaches an application state payload.
	pub fn with_state(mut self, state: Value) -> Self {
		self.state = state;
		self
	}
}

/// Entry stack plus cursor.
///
/// The cursor always points at a valid entry while the history is
/// non-empty.
#[derive(Debug, Default)]
pub struct History {
	entries: Vec<HistoryEntry>,
	/// Index of the current entry; `None` only while empty.
	cursor: Option<usize>,
}

impl History {
	/// Creates an empty history.
	pub fn new() -> Self {
		Self::default()
	}

	/// Appends an entry after the cursor, discarding any forward
	/// branch, and moves the cursor onto it.
	pub fn push(&mut self, entry: HistoryEntry) {
		match self.cursor {
			Some(cursor) => {
				self.entries.truncate(cursor + 1);
				self.entries.push(entry);
				self.cursor = Some(cursor + 1);
			}
			None => {
				self.entries.push(entry);
				self.cursor = Some(0);
			}
		}
	}

	/// Replaces the current entry in place; pushes when empty.
	pub fn replace(&mut self, entry: HistoryEntry) {
		match self.cursor {
			Some(cursor) => self.entries[cursor] = entry,
			None => self.push(entry),
		}
	}

	/// The current entry.
	pub fn current(&self) -> Option<&HistoryEntry> {
		self.cursor.map(|cursor| &self.entries[cursor])
	}

	/// The entry a `back` traversal would land on.
	pub fn peek_back(&self) -> Option<&HistoryEntry> {
		let cursor = self.cursor?;
		if cursor == 0 {
			return None;
		}
		self.entries.get(cursor - 1)
	}

	/// The entry a `forward` traversal would land on.
	pub fn peek_forward(&self) -> Option<&HistoryEntry> {
		let cursor = self.cursor?;
		self.entries.get(cursor + 1)
	}

	/// Moves the cursor to the previous entry. No-op at the start.
	pub fn back(&mut self) -> Option<&HistoryEntry> {
		let cursor = self.cursor?;
		if cursor == 0 {
			return None;
		}
		self.cursor = Some(cursor - 1);
		self.current()
	}

	/// Moves the cursor to the next entry. No-op at the end.
	pub fn forward(&mut self) -> Option<&HistoryEntry> {
		let cursor = self.cursor?;
		if cursor + 1 >= self.entries.len() {
			return None;
		}
		self.cursor = Some(cursor + 1);
		self.current()
	}

	/// Records the scroll position on the current entry, for restore
	/// when a traversal returns here.
	pub fn save_scroll(&mut self, position: ScrollPosition) {
		if let Some(cursor) = self.cursor {
			self.entries[cursor].saved_scroll = Some(position);
		}
	}

	/// Whether a `back` traversal has somewhere to go.
	pub fn can_go_back(&self) -> bool {
		self.peek_back().is_some()
	}

	/// Whether a `forward` traversal has somewhere to go.
	pub fn can_go_forward(&self) -> bool {
		self.peek_forward().is_some()
	}

	/// Number of entries.
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	/// Whether the history holds no entries.
	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}
}
