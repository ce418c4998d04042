use thiserror::Error;

/// Error type for route table operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RoutingError {
	/// No route is registered under the given name.
	#[error("unknown route name: {0}")]
	UnknownRouteName(String),
	/// Reverse URL generation was missing a required parameter.
	#[error("missing parameter `{param}` for route `{route}`")]
	MissingParameter { route: String, param: String },
}
