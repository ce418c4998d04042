//! Navigation requests and route location snapshots.

use serde::{Deserialize, Serialize};
use sextant_routing::{RouteMatch, RouteMeta};
use std::collections::HashMap;

/// A view-free snapshot of a resolved navigation target.
///
/// This is what guards and lifecycle hooks see: path, optional route
/// name, extracted parameters, parsed query and route metadata — but no
/// view factory, so those layers stay independent of the application's
/// view type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteLocation {
	/// The matched path, query string stripped.
	pub path: String,
	/// The matched route's name, when set.
	pub name: Option<String>,
	/// Extracted path parameters.
	pub params: HashMap<String, String>,
	/// Parsed query parameters.
	pub query: HashMap<String, String>,
	/// The matched route's metadata.
	pub meta: RouteMeta,
}

impl RouteLocation {
	/// Builds a location snapshot from a table match.
	pub fn from_match(route_match: &RouteMatch) -> Self {
		Self {
			path: route_match.path.clone(),
			name: route_match.name.clone(),
			params: route_match.params.clone(),
			query: route_match.query.clone(),
			meta: route_match.meta.clone(),
		}
	}

	/// The full navigation target: path plus re-serialized query string.
	pub fn target(&self) -> String {
		if self.query.is_empty() {
			return self.path.clone();
		}
		match serde_urlencoded::to_string(&self.query) {
			Ok(query) => format!("{}?{}", self.path, query),
			Err(_) => self.path.clone(),
		}
	}
}

/// How a navigation reached the coordinator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NavigationKind {
	/// A new history entry.
	Push,
	/// Replaces the current history entry.
	Replace,
	/// Cursor traversal to the previous entry.
	Back,
	/// Cursor traversal to the next entry.
	Forward,
}

impl NavigationKind {
	/// Whether this navigation traverses existing history entries.
	pub fn is_traversal(self) -> bool {
		matches!(self, Self::Back | Self::Forward)
	}
}

/// A single navigation in flight.
///
/// Created when a navigation starts, handed to the guard chain and both
/// hook stages, and discarded once the navigation settles.
#[derive(Debug, Clone)]
pub struct NavigationRequest {
	/// The target route.
	pub to: RouteLocation,
	/// The previously active route, absent on the first navigation.
	pub from: Option<RouteLocation>,
	/// How the navigation was initiated.
	pub kind: NavigationKind,
}

#[cfg(test)]
mod tests {
	use super::*;

	fn location(path: &str) -> RouteLocation {
		RouteLocation {
			path: path.to_string(),
			name: None,
			params: HashMap::new(),
			query: HashMap::new(),
			meta: RouteMeta::new(),
		}
	}

	#[test]
	fn test_target_without_query() {
		assert_eq!(location("/users/").target(), "/users/");
	}

	#[test]
	fn test_target_with_query() {
		let mut loc = location("/search/");
		loc.query.insert("q".to_string(), "rust".to_string());
		assert_eq!(loc.target(), "/search/?q=rust");
	}

	#[test]
	fn test_kind_is_traversal() {
		assert!(NavigationKind::Back.is_traversal());
		assert!(NavigationKind::Forward.is_traversal());
		assert!(!NavigationKind::Push.is_traversal());
		assert!(!NavigationKind::Replace.is_traversal());
	}

	#[test]
	fn test_location_serde_round_trip() {
		let mut loc = location("/users/42/");
		loc.params.insert("id".to_string(), "42".to_string());
		let json = serde_json::to_string(&loc).unwrap();
		let back: RouteLocation = serde_json::from_str(&json).unwrap();
		assert_eq!(back, loc);
	}
}
