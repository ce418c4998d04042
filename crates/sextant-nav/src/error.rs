use sextant_routing::RoutingError;
use thiserror::Error;

/// Error type for coordinator operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum NavError {
	/// No route in the table matches the target path.
	#[error("no route matches path: {0}")]
	NotFound(String),
	/// Guard redirects exceeded the configured cap.
	#[error("redirect limit ({limit}) exceeded while navigating to {start}")]
	RedirectLoop { start: String, limit: usize },
	/// A route table operation failed.
	#[error(transparent)]
	Routing(#[from] RoutingError),
}
