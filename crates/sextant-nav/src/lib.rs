//! # Sextant Nav
//!
//! The navigation coordinator: binds a route table, an in-process
//! navigation history and a fixed sequence of lifecycle hooks into one
//! handle the hosting application attaches at startup.
//!
//! Each navigation runs the same pipeline, in fixed order:
//!
//! ```text
//! resolve → guards → before hooks → commit → scroll policy → title → after hooks
//! ```
//!
//! ## Modules
//!
//! - [`request`]: the transient [`NavigationRequest`] consumed by guards
//!   and hooks, and the view-free [`RouteLocation`] snapshot
//! - [`guard`]: pre-navigation policy objects (`allow | deny | redirect`)
//! - [`hooks`]: per-stage handler registries
//! - [`scroll`]: viewport scroll policy after navigation
//! - [`chrome`]: the UI chrome capability (document title, viewport)
//! - [`history`]: entry stack with cursor-based back/forward traversal
//! - [`coordinator`]: the [`NavigationCoordinator`] itself
//!
//! ## Example
//!
//! ```
//! use sextant_nav::{NavigationCoordinator, UiChrome};
//! use sextant_routing::{RouteMeta, RouteTable};
//!
//! let table = RouteTable::new()
//!     .route("/", |_| "Home")
//!     .route_with_meta("/dashboard/", |_| "Dashboard", RouteMeta::new().with_title("Dashboard"));
//!
//! let nav = NavigationCoordinator::builder(table).build();
//! nav.push("/dashboard/").unwrap();
//!
//! assert_eq!(nav.chrome().title(), "Dashboard");
//! assert_eq!(nav.render_current(), Some("Dashboard"));
//! ```

pub mod chrome;
pub mod coordinator;
pub mod guard;
pub mod history;
pub mod hooks;
pub mod request;
pub mod scroll;

mod error;

pub use chrome::{InMemoryChrome, NoopChrome, UiChrome};
pub use coordinator::{CoordinatorBuilder, NavigationCoordinator, NavigationOutcome};
pub use error::NavError;
pub use guard::{AllowAll, GuardFn, GuardVerdict, NavigationGuard};
pub use history::{History, HistoryEntry};
pub use hooks::{HookId, HookRegistry, NavigationStage};
pub use request::{NavigationKind, NavigationRequest, RouteLocation};
pub use scroll::{RestoreSaved, ScrollBehavior, ScrollPosition, ScrollToTop};
