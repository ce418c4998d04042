//! Route definitions.

use crate::meta::RouteMeta;
use crate::pattern::PathPattern;
use crate::table::RouteMatch;
use std::sync::Arc;

/// Factory producing the view for a matched route.
pub type ViewFactory<V> = Arc<dyn Fn(&RouteMatch) -> V + Send + Sync>;

/// Per-route guard predicate, checked during table resolution.
pub(crate) type RoutePredicate = Arc<dyn Fn(&RouteMatch) -> bool + Send + Sync>;

/// A single route table entry: a path pattern, an associated view
/// factory, and a metadata mapping.
pub struct Route<V> {
	pattern: PathPattern,
	name: Option<String>,
	meta: RouteMeta,
	factory: ViewFactory<V>,
	predicate: Option<RoutePredicate>,
}

impl<V> Clone for Route<V> {
	fn clone(&self) -> Self {
		Self {
			pattern: self.pattern.clone(),
			name: self.name.clone(),
			meta: self.meta.clone(),
			factory: Arc::clone(&self.factory),
			predicate: self.predicate.as_ref().map(Arc::clone),
		}
	}
}

impl<V> std::fmt::Debug for Route<V> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Route")
			.field("pattern", &self.pattern)
			.field("name", &self.name)
			.field("meta", &self.meta)
			.field("has_predicate", &self.predicate.is_some())
			.finish()
	}
}

impl<V> Route<V> {
	/// Creates a new route.
	pub fn new<F>(pattern: &str, factory: F) -> Self
	where
		F: Fn(&RouteMatch) -> V + Send + Sync + 'static,
	{
		Self {
			pattern: PathPattern::new(pattern),
			name: None,
			meta: RouteMeta::new(),
			factory: Arc::new(factory),
			predicate: None,
		}
	}

	/// Creates a named route.
	pub fn named<F>(name: impl Into<String>, pattern: &str, factory: F) -> Self
	where
		F: Fn(&RouteMatch) -> V + Send + Sync + 'static,
	{
		let mut route = Self::new(pattern, factory);
		route.name = Some(name.into());
		route
	}

	/// Attaches metadata to this route.
	pub fn with_meta(mut self, meta: RouteMeta) -> Self {
		self.meta = meta;
		self
	}

	/// Attaches a guard predicate checked during resolution.
	///
	/// A rejecting predicate makes the table skip this route and keep
	/// scanning, as if the entry were not present.
	pub fn with_predicate<P>(mut self, predicate: P) -> Self
	where
		P: Fn(&RouteMatch) -> bool + Send + Sync + 'static,
	{
		self.predicate = Some(Arc::new(predicate));
		self
	}

	/// The route name, when set.
	pub fn name(&self) -> Option<&str> {
		self.name.as_deref()
	}

	/// The route's metadata.
	pub fn meta(&self) -> &RouteMeta {
		&self.meta
	}

	/// The compiled path pattern.
	pub fn pattern(&self) -> &PathPattern {
		&self.pattern
	}

	/// Renders the route's view for a match.
	pub fn render(&self, route_match: &RouteMatch) -> V {
		(self.factory)(route_match)
	}

	/// Checks the guard predicate; routes without one always pass.
	pub fn check_predicate(&self, route_match: &RouteMatch) -> bool {
		self.predicate
			.as_ref()
			.map(|p| p(route_match))
			.unwrap_or(true)
	}
}
