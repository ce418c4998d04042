//! Viewport scroll policy.

use crate::request::NavigationRequest;
use serde::{Deserialize, Serialize};

/// A viewport scroll position.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ScrollPosition {
	pub x: f64,
	pub y: f64,
}

impl ScrollPosition {
	/// The top-left of the viewport.
	pub const ORIGIN: Self = Self { x: 0.0, y: 0.0 };

	pub fn new(x: f64, y: f64) -> Self {
		Self { x, y }
	}
}

/// Decides where the viewport scrolls after a navigation commits.
///
/// `saved` carries the position recorded when the target history entry
/// was last left, present only on back/forward traversals. Returning
/// `None` leaves the viewport alone.
pub trait ScrollBehavior: Send + Sync {
	fn resolve(
		&self,
		request: &NavigationRequest,
		saved: Option<ScrollPosition>,
	) -> Option<ScrollPosition>;
}

/// The default policy: always scroll to the top-left of the viewport,
/// ignoring any saved position.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScrollToTop;

impl ScrollBehavior for ScrollToTop {
	fn resolve(
		&self,
		_request: &NavigationRequest,
		_saved: Option<ScrollPosition>,
	) -> Option<ScrollPosition> {
		Some(ScrollPosition::ORIGIN)
	}
}

/// Restores the saved position on back/forward traversals and scrolls
/// to the top otherwise.
#[derive(Debug, Clone, Copy, Default)]
pub struct RestoreSaved;

impl ScrollBehavior for RestoreSaved {
	fn resolve(
		&self,
		request: &NavigationRequest,
		saved: Option<ScrollPosition>,
	) -> Option<ScrollPosition> {
		if request.kind.is_traversal() {
			Some(saved.unwrap_or(ScrollPosition::ORIGIN))
		} else {
			Some(ScrollPosition::ORIGIN)
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::request::{NavigationKind, RouteLocation};
	use rstest::rstest;
	use sextant_routing::RouteMeta;
	use std::collections::HashMap;

	fn request(kind: NavigationKind) -> NavigationRequest {
		NavigationRequest {
			to: RouteLocation {
				path: "/".to_string(),
				name: None,
				params: HashMap::new(),
				query: HashMap::new(),
				meta: RouteMeta::new(),
			},
			from: None,
			kind,
		}
	}

	#[rstest]
	#[case(NavigationKind::Push)]
	#[case(NavigationKind::Replace)]
	#[case(NavigationKind::Back)]
	#[case(NavigationKind::Forward)]
	fn test_scroll_to_top_ignores_saved_position(#[case] kind: NavigationKind) {
		let policy = ScrollToTop;
		let saved = Some(ScrollPosition::new(0.0, 800.0));

		assert_eq!(
			policy.resolve(&request(kind), saved),
			Some(ScrollPosition::ORIGIN)
		);
	}

	#[test]
	fn test_restore_saved_on_traversal() {
		let policy = RestoreSaved;
		let saved = Some(ScrollPosition::new(0.0, 800.0));

		assert_eq!(policy.resolve(&request(NavigationKind::Back), saved), saved);
		assert_eq!(
			policy.resolve(&request(NavigationKind::Push), saved),
			Some(ScrollPosition::ORIGIN)
		);
	}

	#[test]
	fn test_restore_saved_without_saved_position() {
		let policy = RestoreSaved;
		assert_eq!(
			policy.resolve(&request(NavigationKind::Back), None),
			Some(ScrollPosition::ORIGIN)
		);
	}
}
