//! The navigation coordinator.
//!
//! Binds a route table, the navigation history and the lifecycle hooks
//! into the single handle the hosting application mounts at startup.
//! Every navigation, whether a push, a replace or a history traversal,
//! runs the same fixed pipeline:
//!
//! 1. Resolve the target against the route table
//! 2. Guard chain rules allow / deny / redirect
//! 3. Before-stage hooks fire
//! 4. Commit to history (recording the outgoing scroll position)
//! 5. Scroll policy resolves and the chrome scrolls
//! 6. The target's metadata title, when present, overwrites the chrome
//!    title
//! 7. After-stage hooks fire

use crate::chrome::{InMemoryChrome, UiChrome};
use crate::error::NavError;
use crate::guard::{AllowAll, GuardVerdict, NavigationGuard};
use crate::history::{History, HistoryEntry};
use crate::hooks::{HookId, HookRegistry, NavigationStage};
use crate::request::{NavigationKind, NavigationRequest, RouteLocation};
use crate::scroll::{ScrollBehavior, ScrollPosition, ScrollToTop};
use parking_lot::RwLock;
use sextant_routing::RouteTable;
use std::sync::Arc;

/// How a navigation settled.
#[derive(Debug, Clone, PartialEq)]
pub enum NavigationOutcome {
	/// The navigation committed; `to` is the settled location (the
	/// redirect target when a guard redirected).
	Completed { to: RouteLocation },
	/// A guard denied the navigation; nothing was committed.
	Denied {
		/// Name of the denying guard.
		guard: String,
		/// Reason supplied by the guard, when any.
		reason: Option<String>,
	},
	/// A traversal ran off the end of the history; nothing happened.
	AtBoundary,
}

impl NavigationOutcome {
	/// Whether the navigation committed.
	pub fn is_completed(&self) -> bool {
		matches!(self, Self::Completed { .. })
	}
}

/// Result of the guard chain, with the ruling guard's name attached.
enum GuardRuling {
	Allow,
	Deny {
		guard: String,
		reason: Option<String>,
	},
	Redirect {
		guard: String,
		to: String,
	},
}

/// The navigation handle exposed to the hosting application.
///
/// `V` is the application's view type; everything below the view
/// factories (guards, hooks, history, chrome) is independent of it.
pub struct NavigationCoordinator<V> {
	table: RouteTable<V>,
	history: RwLock<History>,
	guards: Vec<Arc<dyn NavigationGuard>>,
	before: HookRegistry,
	after: HookRegistry,
	scroll: Arc<dyn ScrollBehavior>,
	chrome: Arc<dyn UiChrome>,
	not_found: Option<Arc<dyn Fn() -> V + Send + Sync>>,
	max_redirects: usize,
}

impl<V> std::fmt::Debug for NavigationCoordinator<V> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("NavigationCoordinator")
			.field("table", &self.table)
			.field("guards", &self.guards.len())
			.field("before_hooks", &self.before.len())
			.field("after_hooks", &self.after.len())
			.field("max_redirects", &self.max_redirects)
			.finish()
	}
}

impl<V> NavigationCoordinator<V> {
	/// Starts building a coordinator over a route table.
	pub fn builder(table: RouteTable<V>) -> CoordinatorBuilder<V> {
		CoordinatorBuilder::new(table)
	}

	/// Navigates to a target path, pushing a history entry.
	pub fn push(&self, target: &str) -> Result<NavigationOutcome, NavError> {
		self.navigate(target, NavigationKind::Push, 0)
	}

	/// Navigates to a target path, replacing the current history entry.
	pub fn replace(&self, target: &str) -> Result<NavigationOutcome, NavError> {
		self.navigate(target, NavigationKind::Replace, 0)
	}

	/// Traverses to the previous history entry.
	///
	/// A no-op ([`NavigationOutcome::AtBoundary`]) at the start of the
	/// history.
	pub fn back(&self) -> Result<NavigationOutcome, NavError> {
		self.traverse(NavigationKind::Back)
	}

	/// Traverses to the next history entry.
	pub fn forward(&self) -> Result<NavigationOutcome, NavError> {
		self.traverse(NavigationKind::Forward)
	}

	/// The currently settled location.
	pub fn current(&self) -> Option<RouteLocation> {
		self.history.read().current().map(|e| e.location.clone())
	}

	/// Renders the view for the current location, falling back to the
	/// not-found view when nothing matches (or nothing has been
	/// navigated to yet).
	pub fn render_current(&self) -> Option<V> {
		let rendered = self
			.current()
			.and_then(|location| self.table.resolve(&location.target()))
			.and_then(|route_match| self.table.render(&route_match));

		match rendered {
			Some(view) => Some(view),
			None => self.not_found.as_ref().map(|factory| factory()),
		}
	}

	/// Generates a URL by route name with parameters.
	pub fn reverse(&self, name: &str, params: &[(&str, &str)]) -> Result<String, NavError> {
		self.table.reverse(name, params).map_err(NavError::from)
	}

	/// Connects a before-stage hook.
	pub fn on_before<F>(&self, hook: F) -> HookId
	where
		F: Fn(&NavigationRequest) + Send + Sync + 'static,
	{
		self.before.connect(hook)
	}

	/// Connects an after-stage hook.
	pub fn on_after<F>(&self, hook: F) -> HookId
	where
		F: Fn(&NavigationRequest) + Send + Sync + 'static,
	{
		self.after.connect(hook)
	}

	/// Disconnects a hook from a stage.
	pub fn off(&self, stage: NavigationStage, id: HookId) -> bool {
		match stage {
			NavigationStage::Before => self.before.disconnect(id),
			NavigationStage::After => self.after.disconnect(id),
		}
	}

	/// The chrome the coordinator writes title and scroll through.
	pub fn chrome(&self) -> &Arc<dyn UiChrome> {
		&self.chrome
	}

	/// The underlying route table.
	pub fn table(&self) -> &RouteTable<V> {
		&self.table
	}

	/// Whether a back traversal has somewhere to go.
	pub fn can_go_back(&self) -> bool {
		self.history.read().can_go_back()
	}

	/// Whether a forward traversal has somewhere to go.
	pub fn can_go_forward(&self) -> bool {
		self.history.read().can_go_forward()
	}

	/// Number of history entries.
	pub fn history_len(&self) -> usize {
		self.history.read().len()
	}

	fn navigate(
		&self,
		target: &str,
		kind: NavigationKind,
		mut hops: usize,
	) -> Result<NavigationOutcome, NavError> {
		let mut current_target = target.to_string();

		loop {
			let route_match = self
				.table
				.resolve(&current_target)
				.ok_or_else(|| NavError::NotFound(current_target.clone()))?;

			let request = NavigationRequest {
				to: RouteLocation::from_match(&route_match),
				from: self.current(),
				kind,
			};

			match self.run_guards(&request) {
				GuardRuling::Allow => {}
				GuardRuling::Deny { guard, reason } => {
					tracing::debug!(to = %request.to.path, guard = %guard, "navigation denied");
					return Ok(NavigationOutcome::Denied { guard, reason });
				}
				GuardRuling::Redirect { guard, to } => {
					hops += 1;
					if hops > self.max_redirects {
						return Err(NavError::RedirectLoop {
							start: target.to_string(),
							limit: self.max_redirects,
						});
					}
					tracing::debug!(from = %current_target, to = %to, guard = %guard, "guard redirected navigation");
					current_target = to;
					continue;
				}
			}

			self.before.emit(&request);

			{
				let mut history = self.history.write();
				history.save_scroll(self.chrome.scroll_position());
				let entry = HistoryEntry::new(request.to.clone());
				match kind {
					NavigationKind::Replace => history.replace(entry),
					_ => history.push(entry),
				}
			}

			self.settle(&request, None);
			tracing::debug!(to = %request.to.path, kind = ?kind, "navigation completed");
			return Ok(NavigationOutcome::Completed {
				to: request.to.clone(),
			});
		}
	}

	fn traverse(&self, kind: NavigationKind) -> Result<NavigationOutcome, NavError> {
		let peeked = {
			let history = self.history.read();
			let entry = match kind {
				NavigationKind::Back => history.peek_back(),
				_ => history.peek_forward(),
			};
			entry.map(|e| (e.location.clone(), e.saved_scroll))
		};

		let Some((to, saved_scroll)) = peeked else {
			tracing::trace!(kind = ?kind, "traversal at history boundary");
			return Ok(NavigationOutcome::AtBoundary);
		};

		let request = NavigationRequest {
			to,
			from: self.current(),
			kind,
		};

		match self.run_guards(&request) {
			GuardRuling::Allow => {}
			GuardRuling::Deny { guard, reason } => {
				tracing::debug!(to = %request.to.path, guard = %guard, "traversal denied");
				return Ok(NavigationOutcome::Denied { guard, reason });
			}
			GuardRuling::Redirect { guard, to } => {
				// A redirected traversal becomes a fresh push navigation
				// to the redirect target.
				tracing::debug!(to = %to, guard = %guard, "guard redirected traversal");
				return self.navigate(&to, NavigationKind::Push, 1);
			}
		}

		self.before.emit(&request);

		{
			let mut history = self.history.write();
			history.save_scroll(self.chrome.scroll_position());
			match kind {
				NavigationKind::Back => history.back(),
				_ => history.forward(),
			};
		}

		self.settle(&request, saved_scroll);
		tracing::debug!(to = %request.to.path, kind = ?kind, "traversal completed");
		Ok(NavigationOutcome::Completed {
			to: request.to.clone(),
		})
	}

	/// Runs the guard chain; the first non-allow verdict wins.
	fn run_guards(&self, request: &NavigationRequest) -> GuardRuling {
		for guard in &self.guards {
			match guard.decide(request) {
				GuardVerdict::Allow => continue,
				GuardVerdict::Deny { reason } => {
					return GuardRuling::Deny {
						guard: guard.name().to_string(),
						reason,
					};
				}
				GuardVerdict::Redirect { to } => {
					return GuardRuling::Redirect {
						guard: guard.name().to_string(),
						to,
					};
				}
			}
		}
		GuardRuling::Allow
	}

	/// The post-commit stages: scroll policy, title effect, after hooks.
	fn settle(&self, request: &NavigationRequest, saved_scroll: Option<ScrollPosition>) {
		if let Some(position) = self.scroll.resolve(request, saved_scroll) {
			self.chrome.scroll_to(position);
		}

		if let Some(title) = request.to.meta.title() {
			self.chrome.set_title(title);
		}

		self.after.emit(request);
	}
}

/// Builder wiring a [`NavigationCoordinator`].
///
/// Defaults: an [`AllowAll`] guard, [`ScrollToTop`] scroll policy, an
/// [`InMemoryChrome`], no not-found view, redirect cap of 8.
pub struct CoordinatorBuilder<V> {
	table: RouteTable<V>,
	guards: Vec<Arc<dyn NavigationGuard>>,
	scroll: Arc<dyn ScrollBehavior>,
	chrome: Arc<dyn UiChrome>,
	not_found: Option<Arc<dyn Fn() -> V + Send + Sync>>,
	max_redirects: usize,
}

impl<V> CoordinatorBuilder<V> {
	fn new(table: RouteTable<V>) -> Self {
		Self {
			table,
			guards: Vec::new(),
			scroll: Arc::new(ScrollToTop),
			chrome: Arc::new(InMemoryChrome::new()),
			not_found: None,
			max_redirects: 8,
		}
	}

	/// Appends a guard to the chain.
	pub fn guard<G>(mut self, guard: G) -> Self
	where
		G: NavigationGuard + 'static,
	{
		self.guards.push(Arc::new(guard));
		self
	}

	/// Replaces the scroll policy.
	pub fn scroll_behavior<S>(mut self, scroll: S) -> Self
	where
		S: ScrollBehavior + 'static,
	{
		self.scroll = Arc::new(scroll);
		self
	}

	/// Replaces the chrome capability.
	pub fn chrome(mut self, chrome: Arc<dyn UiChrome>) -> Self {
		self.chrome = chrome;
		self
	}

	/// Sets the not-found fallback view.
	pub fn not_found<F>(mut self, factory: F) -> Self
	where
		F: Fn() -> V + Send + Sync + 'static,
	{
		self.not_found = Some(Arc::new(factory));
		self
	}

	/// Caps how many guard redirects one navigation may follow.
	pub fn max_redirects(mut self, max_redirects: usize) -> Self {
		self.max_redirects = max_redirects;
		self
	}

	/// Builds the coordinator.
	///
	/// A coordinator built without any guard gets the explicit
	/// [`AllowAll`] placeholder.
	pub fn build(self) -> NavigationCoordinator<V> {
		let guards = if self.guards.is_empty() {
			vec![Arc::new(AllowAll) as Arc<dyn NavigationGuard>]
		} else {
			self.guards
		};

		NavigationCoordinator {
			table: self.table,
			history: RwLock::new(History::new()),
			guards,
			before: HookRegistry::new(),
			after: HookRegistry::new(),
			scroll: self.scroll,
			chrome: self.chrome,
			not_found: self.not_found,
			max_redirects: self.max_redirects,
		}
	}
}
