//! The UI chrome capability.
//!
//! Document title and viewport scroll are process-wide UI state owned by
//! the hosting runtime. The coordinator reaches them only through this
//! capability object, so the effects are testable without a real UI.

use crate::scroll::ScrollPosition;
use parking_lot::Mutex;

/// Capability handle on the hosting UI's chrome state.
pub trait UiChrome: Send + Sync {
	/// The current document title.
	fn title(&self) -> String;

	/// Overwrites the document title.
	fn set_title(&self, title: &str);

	/// The current viewport scroll position.
	fn scroll_position(&self) -> ScrollPosition;

	/// Scrolls the viewport.
	fn scroll_to(&self, position: ScrollPosition);
}

#[derive(Debug, Default)]
struct ChromeState {
	title: String,
	scroll: ScrollPosition,
}

/// Headless chrome implementation holding title and scroll in memory.
///
/// The default chrome, and the test double for asserting title and
/// scroll effects.
#[derive(Debug, Default)]
pub struct InMemoryChrome {
	state: Mutex<ChromeState>,
}

impl InMemoryChrome {
	pub fn new() -> Self {
		Self::default()
	}

	/// Creates a chrome with an initial title.
	pub fn with_title(title: impl Into<String>) -> Self {
		Self {
			state: Mutex::new(ChromeState {
				title: title.into(),
				scroll: ScrollPosition::default(),
			}),
		}
	}
}

impl UiChrome for InMemoryChrome {
	fn title(&self) -> String {
		self.state.lock().title.clone()
	}

	fn set_title(&self, title: &str) {
		self.state.lock().title = title.to_string();
	}

	fn scroll_position(&self) -> ScrollPosition {
		self.state.lock().scroll
	}

	fn scroll_to(&self, position: ScrollPosition) {
		self.state.lock().scroll = position;
	}
}

/// Chrome that discards writes and reports defaults.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopChrome;

impl UiChrome for NoopChrome {
	fn title(&self) -> String {
		String::new()
	}

	fn set_title(&self, _title: &str) {}

	fn scroll_position(&self) -> ScrollPosition {
		ScrollPosition::ORIGIN
	}

	fn scroll_to(&self, _position: ScrollPosition) {}
}
