//! The ordered route table.

use crate::error::RoutingError;
use crate::meta::RouteMeta;
use crate::route::Route;
use std::collections::HashMap;

/// A matched route with extracted parameters.
///
/// This is a view-free snapshot: it carries everything guards and hooks
/// need (path, name, params, query, metadata) without referencing the
/// route's view factory.
#[derive(Debug, Clone)]
pub struct RouteMatch {
	/// Position of the matched route in the table.
	index: usize,
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

/// Ordered sequence of routes; resolution is first-match-wins over
/// registration order.
///
/// `V` is the hosting application's view type.
pub struct RouteTable<V> {
	routes: Vec<Route<V>>,
	/// Name → table index. A later registration under an existing name
	/// replaces the binding; both routes stay in scan order.
	named: HashMap<String, usize>,
}

impl<V> std::fmt::Debug for RouteTable<V> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("RouteTable")
			.field("routes", &self.routes.len())
			.field("named", &self.named.keys().collect::<Vec<_>>())
			.finish()
	}
}

impl<V> Default for RouteTable<V> {
	fn default() -> Self {
		Self::new()
	}
}

impl<V> RouteTable<V> {
	/// Creates an empty table.
	pub fn new() -> Self {
		Self {
			routes: Vec::new(),
			named: HashMap::new(),
		}
	}

	/// Appends a route.
	pub fn add(mut self, route: Route<V>) -> Self {
		if let Some(name) = route.name() {
			self.named.insert(name.to_string(), self.routes.len());
		}
		self.routes.push(route);
		self
	}

	/// Appends an anonymous route.
	pub fn route<F>(self, pattern: &str, factory: F) -> Self
	where
		F: Fn(&RouteMatch) -> V + Send + Sync + 'static,
	{
		self.add(Route::new(pattern, factory))
	}

	/// Appends a named route.
	pub fn named_route<F>(self, name: &str, pattern: &str, factory: F) -> Self
	where
		F: Fn(&RouteMatch) -> V + Send + Sync + 'static,
	{
		self.add(Route::named(name, pattern, factory))
	}

	/// Appends an anonymous route carrying metadata.
	pub fn route_with_meta<F>(self, pattern: &str, factory: F, meta: RouteMeta) -> Self
	where
		F: Fn(&RouteMatch) -> V + Send + Sync + 'static,
	{
		self.add(Route::new(pattern, factory).with_meta(meta))
	}

	/// Appends a named route carrying metadata.
	pub fn named_route_with_meta<F>(
		self,
		name: &str,
		pattern: &str,
		factory: F,
		meta: RouteMeta,
	) -> Self
	where
		F: Fn(&RouteMatch) -> V + Send + Sync + 'static,
	{
		self.add(Route::named(name, pattern, factory).with_meta(meta))
	}

	/// Resolves a target path against the table.
	///
	/// The query string (`?k=v&…`) is stripped before matching and
	/// parsed into [`RouteMatch::query`]. Routes whose guard predicate
	/// rejects are skipped and the scan continues down the table.
	pub fn resolve(&self, target: &str) -> Option<RouteMatch> {
		let (path, query) = split_query(target);
		let query = parse_query(query);

		for (index, route) in self.routes.iter().enumerate() {
			if let Some(params) = route.pattern().matches(path) {
				let route_match = RouteMatch {
					index,
					path: path.to_string(),
					name: route.name().map(|s| s.to_string()),
					params,
					query: query.clone(),
					meta: route.meta().clone(),
				};

				if route.check_predicate(&route_match) {
					return Some(route_match);
				}
			}
		}
		None
	}

	/// Renders the view for a previously resolved match.
	pub fn render(&self, route_match: &RouteMatch) -> Option<V> {
		self.routes
			.get(route_match.index)
			.map(|route| route.render(route_match))
	}

	/// Generates a URL by route name with parameters.
	pub fn reverse(&self, name: &str, params: &[(&str, &str)]) -> Result<String, RoutingError> {
		let index = self
			.named
			.get(name)
			.ok_or_else(|| RoutingError::UnknownRouteName(name.to_string()))?;

		let route = &self.routes[*index];
		let params_map: HashMap<String, String> = params
			.iter()
			.map(|(k, v)| (k.to_string(), v.to_string()))
			.collect();

		route.pattern().reverse(&params_map).ok_or_else(|| {
			let missing = route
				.pattern()
				.param_names()
				.iter()
				.find(|p| !params_map.contains_key(*p))
				.cloned()
				.unwrap_or_default();
			RoutingError::MissingParameter {
				route: name.to_string(),
				param: missing,
			}
		})
	}

	/// Whether a route name is registered.
	pub fn has_route(&self, name: &str) -> bool {
		self.named.contains_key(name)
	}

	/// Number of registered routes.
	pub fn len(&self) -> usize {
		self.routes.len()
	}

	/// Whether the table is empty.
	pub fn is_empty(&self) -> bool {
		self.routes.is_empty()
	}
}

/// Splits `path?query` into its two halves.
fn split_query(target: &str) -> (&str, &str) {
	match target.split_once('?') {
		Some((path, query)) => (path, query),
		None => (target, ""),
	}
}

/// Parses a query string; malformed input yields no parameters.
fn parse_query(query: &str) -> HashMap<String, String> {
	if query.is_empty() {
		return HashMap::new();
	}
	serde_urlencoded::from_str(query).unwrap_or_default()
}

#[cfg(test)]
mod tests {
	use super::*;

	fn home(_m: &RouteMatch) -> &'static str {
		"Home"
	}

	fn users(_m: &RouteMatch) -> &'static str {
		"Users"
	}

	fn user_detail(m: &RouteMatch) -> String {
		format!("User {}", m.params.get("id").map(String::as_str).unwrap_or(""))
	}

	#[test]
	fn test_first_match_wins() {
		let table = RouteTable::new()
			.route("/users/{id}/", |_| "param")
			.route("/users/me/", |_| "literal");

		// The parameterized route is registered first and shadows the
		// literal one.
		let m = table.resolve("/users/me/").unwrap();
		assert_eq!(table.render(&m), Some("param"));
	}

	#[test]
	fn test_resolve_exact() {
		let table = RouteTable::new().route("/", home).route("/users/", users);

		assert!(table.resolve("/").is_some());
		assert!(table.resolve("/users/").is_some());
		assert!(table.resolve("/nonexistent/").is_none());
	}

	#[test]
	fn test_resolve_params() {
		let table: RouteTable<String> = RouteTable::new().route("/users/{id}/", user_detail);

		let m = table.resolve("/users/42/").unwrap();
		assert_eq!(m.params.get("id"), Some(&"42".to_string()));
		assert_eq!(table.render(&m), Some("User 42".to_string()));
	}

	#[test]
	fn test_resolve_query() {
		let table = RouteTable::new().route("/search/", |_| "Search");

		let m = table.resolve("/search/?q=rust&page=2").unwrap();
		assert_eq!(m.path, "/search/");
		assert_eq!(m.query.get("q"), Some(&"rust".to_string()));
		assert_eq!(m.query.get("page"), Some(&"2".to_string()));
	}

	#[test]
	fn test_resolve_malformed_query() {
		let table = RouteTable::new().route("/search/", |_| "Search");

		let m = table.resolve("/search/?%GG").unwrap();
		assert!(m.query.is_empty());
	}

	#[test]
	fn test_predicate_skips_and_continues() {
		let table = RouteTable::new()
			.add(Route::new("/admin/", |_| "Admin").with_predicate(|_| false))
			.route("/{rest}/", |_| "Fallback");

		let m = table.resolve("/admin/").unwrap();
		assert_eq!(table.render(&m), Some("Fallback"));
	}

	#[test]
	fn test_reverse() {
		let table = RouteTable::new()
			.named_route("home", "/", home)
			.named_route("user_detail", "/users/{id}/", |_| "User");

		assert_eq!(table.reverse("home", &[]).unwrap(), "/");
		assert_eq!(
			table.reverse("user_detail", &[("id", "42")]).unwrap(),
			"/users/42/"
		);
	}

	#[test]
	fn test_reverse_unknown_name() {
		let table: RouteTable<&'static str> = RouteTable::new();
		assert!(matches!(
			table.reverse("nope", &[]),
			Err(RoutingError::UnknownRouteName(_))
		));
	}

	#[test]
	fn test_reverse_missing_param() {
		let table = RouteTable::new().named_route("user_detail", "/users/{id}/", |_| "User");

		let err = table.reverse("user_detail", &[]).unwrap_err();
		assert_eq!(
			err,
			RoutingError::MissingParameter {
				route: "user_detail".to_string(),
				param: "id".to_string(),
			}
		);
	}

	#[test]
	fn test_duplicate_name_last_wins() {
		let table = RouteTable::new()
			.named_route("dash", "/dashboard/", |_| "Old")
			.named_route("dash", "/dash/", |_| "New");

		assert_eq!(table.len(), 2);
		assert_eq!(table.reverse("dash", &[]).unwrap(), "/dash/");
	}

	#[test]
	fn test_match_carries_meta_and_name() {
		let table = RouteTable::new().named_route_with_meta(
			"dashboard",
			"/dashboard/",
			|_| "Dashboard",
			RouteMeta::new().with_title("Dashboard"),
		);

		let m = table.resolve("/dashboard/").unwrap();
		assert_eq!(m.name.as_deref(), Some("dashboard"));
		assert_eq!(m.meta.title(), Some("Dashboard"));
	}
}
