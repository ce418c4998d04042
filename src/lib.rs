//! # Sextant
//!
//! Client-side navigation coordination for Rust UI applications.
//!
//! Sextant binds a route table, an in-process navigation history and a
//! fixed sequence of lifecycle hooks (pre-navigation guards, scroll
//! policy, post-navigation effects such as the document title) into one
//! [`NavigationCoordinator`] handle that the hosting application mounts
//! at startup.
//!
//! ## Core Principles
//!
//! - **Explicit capabilities**: UI chrome (document title, viewport) is
//!   reached only through the [`UiChrome`] capability object, never an
//!   ambient global — the effects are testable without a UI runtime
//! - **Explicit policies**: guards and scroll behavior are policy
//!   objects with always-allow / scroll-to-top defaults, not anonymous
//!   inline callbacks
//! - **Fixed stage order**: every navigation runs the same pipeline —
//!   guards, before hooks, commit, scroll, title, after hooks
//!
//! ## Example
//!
//! ```
//! use sextant::{NavigationCoordinator, RouteMeta, RouteTable, UiChrome};
//!
//! let table = RouteTable::new()
//!     .named_route("home", "/", |_| "Home")
//!     .route_with_meta(
//!         "/dashboard/",
//!         |_| "Dashboard",
//!         RouteMeta::new().with_title("Dashboard"),
//!     );
//!
//! let nav = NavigationCoordinator::builder(table).build();
//! nav.push("/dashboard/").unwrap();
//!
//! assert_eq!(nav.chrome().title(), "Dashboard");
//! assert_eq!(nav.render_current(), Some("Dashboard"));
//! ```

pub mod nav;
pub mod routing;

// Flatten the common surface for applications.
pub use sextant_nav::{
	AllowAll, GuardFn, GuardVerdict, HistoryEntry, HookId, InMemoryChrome, NavError,
	NavigationCoordinator, NavigationGuard, NavigationKind, NavigationOutcome, NavigationRequest,
	NavigationStage, NoopChrome, RestoreSaved, RouteLocation, ScrollBehavior, ScrollPosition,
	ScrollToTop, UiChrome,
};
pub use sextant_routing::{PathPattern, Route, RouteMatch, RouteMeta, RouteTable, RoutingError};
