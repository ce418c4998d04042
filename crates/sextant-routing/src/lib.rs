//! # Sextant Routing
//!
//! Route table primitives for the Sextant navigation coordinator.
//!
//! This crate owns the declarative half of navigation: path patterns,
//! per-route metadata, and the ordered route table with named reverse
//! lookups. It knows nothing about history, guards or lifecycle hooks —
//! those live in `sextant-nav`.
//!
//! ## Overview
//!
//! - [`PathPattern`]: `{name}`-parameterized path patterns with forward
//!   matching and reverse URL generation
//! - [`RouteMeta`]: per-route metadata mapping (display title and
//!   arbitrary auxiliary attributes)
//! - [`Route`]: one table entry binding a pattern to a view factory
//! - [`RouteTable`]: ordered, first-match-wins route registry
//!
//! ## Example
//!
//! ```
//! use sextant_routing::{RouteMeta, RouteTable};
//!
//! let table: RouteTable<&'static str> = RouteTable::new()
//!     .named_route("home", "/", |_| "Home")
//!     .named_route("user_detail", "/users/{id}/", |_| "User")
//!     .route_with_meta(
//!         "/dashboard/",
//!         |_| "Dashboard",
//!         RouteMeta::new().with_title("Dashboard"),
//!     );
//!
//! let matched = table.resolve("/users/42/").unwrap();
//! assert_eq!(matched.params.get("id").map(String::as_str), Some("42"));
//! assert_eq!(table.reverse("user_detail", &[("id", "42")]).unwrap(), "/users/42/");
//! ```

mod error;
mod meta;
mod pattern;
mod route;
mod table;

pub use error::RoutingError;
pub use meta::RouteMeta;
pub use pattern::PathPattern;
pub use route::{Route, ViewFactory};
pub use table::{RouteMatch, RouteTable};
