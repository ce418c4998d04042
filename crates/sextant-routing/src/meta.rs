//! Per-route metadata.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// Metadata key under which the display title is stored.
const TITLE_KEY: &str = "title";

/// Auxiliary attributes attached to a route, outside the path pattern.
///
/// Keys are unique. The display title used by the post-navigation title
/// effect lives under the `title` key; everything else is free-form.
///
/// # Example
///
/// ```
/// use sextant_routing::RouteMeta;
///
/// let meta = RouteMeta::new()
///     .with_title("Dashboard")
///     .with("requires_layout", "wide");
///
/// assert_eq!(meta.title(), Some("Dashboard"));
/// assert!(meta.contains("requires_layout"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RouteMeta {
	entries: HashMap<String, Value>,
}

impl RouteMeta {
	/// Creates empty metadata.
	pub fn new() -> Self {
		Self::default()
	}

	/// Sets the display title.
	pub fn with_title(self, title: impl Into<String>) -> Self {
		self.with(TITLE_KEY, title.into())
	}

	/// Sets an arbitrary metadata entry, replacing any previous value
	/// under the same key.
	pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
		self.entries.insert(key.into(), value.into());
		self
	}

	/// The display title, when present and non-empty.
	///
	/// An empty string is treated the same as an absent title: no title
	/// change is requested.
	pub fn title(&self) -> Option<&str> {
		match self.entries.get(TITLE_KEY) {
			Some(Value::String(s)) if !s.is_empty() => Some(s.as_str()),
			_ => None,
		}
	}

	/// Looks up a metadata entry by key.
	pub fn get(&self, key: &str) -> Option<&Value> {
		self.entries.get(key)
	}

	/// Whether a metadata entry exists under `key`.
	pub fn contains(&self, key: &str) -> bool {
		self.entries.contains_key(key)
	}

	/// Number of metadata entries.
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	/// Whether there are no metadata entries.
	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_title_present() {
		let meta = RouteMeta::new().with_title("Dashboard");
		assert_eq!(meta.title(), Some("Dashboard"));
	}

	#[test]
	fn test_title_absent() {
		assert_eq!(RouteMeta::new().title(), None);
	}

	#[test]
	fn test_empty_title_is_absent() {
		let meta = RouteMeta::new().with_title("");
		assert_eq!(meta.title(), None);
	}

	#[test]
	fn test_non_string_title_is_absent() {
		let meta = RouteMeta::new().with(TITLE_KEY, 42);
		assert_eq!(meta.title(), None);
	}

	#[test]
	fn test_with_replaces_existing_key() {
		let meta = RouteMeta::new().with("k", "a").with("k", "b");
		assert_eq!(meta.len(), 1);
		assert_eq!(meta.get("k"), Some(&Value::String("b".to_string())));
	}

	#[test]
	fn test_serde_round_trip() {
		let meta = RouteMeta::new().with_title("Home").with("order", 3);
		let json = serde_json::to_string(&meta).unwrap();
		let back: RouteMeta = serde_json::from_str(&json).unwrap();
		assert_eq!(back, meta);
	}
}
