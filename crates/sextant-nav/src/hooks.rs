//! Lifecycle hook registries.
//!
//! Navigation is a finite sequence of named stages. The two open stages
//! (before and after the commit) each carry a registry of handlers,
//! invoked in connection order. Scroll policy and the title effect are
//! dedicated pipeline steps, not free-form hooks.

use crate::request::NavigationRequest;
use parking_lot::RwLock;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

/// Handler invoked with the navigation request at its stage.
pub type NavigationHook = Arc<dyn Fn(&NavigationRequest) + Send + Sync>;

/// The open hook stages of the navigation pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NavigationStage {
	/// After the guard chain allows, before the commit.
	Before,
	/// After the navigation has settled.
	After,
}

/// Opaque handle identifying a connected hook.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HookId(u64);

/// A registry of handlers for one stage.
///
/// Handlers fire in connection order. They run outside the registry
/// lock, so a handler may connect or disconnect hooks (including
/// itself) while firing.
#[derive(Default)]
pub struct HookRegistry {
	hooks: RwLock<Vec<(HookId, NavigationHook)>>,
	next_id: AtomicU64,
}

impl HookRegistry {
	/// Creates an empty registry.
	pub fn new() -> Self {
		Self::default()
	}

	/// Connects a handler; the returned id disconnects it.
	pub fn connect<F>(&self, hook: F) -> HookId
	where
		F: Fn(&NavigationRequest) + Send + Sync + 'static,
	{
		let id = HookId(self.next_id.fetch_add(1, Ordering::Relaxed));
		self.hooks.write().push((id, Arc::new(hook)));
		id
	}

	/// Disconnects a handler. Returns whether it was connected.
	pub fn disconnect(&self, id: HookId) -> bool {
		let mut hooks = self.hooks.write();
		let before = hooks.len();
		hooks.retain(|(hook_id, _)| *hook_id != id);
		hooks.len() < before
	}

	/// Fires every connected handler with the request, in connection
	/// order.
	pub fn emit(&self, request: &NavigationRequest) {
		let snapshot: Vec<NavigationHook> = self
			.hooks
			.read()
			.iter()
			.map(|(_, hook)| Arc::clone(hook))
			.collect();
		for hook in snapshot {
			hook(request);
		}
	}

	/// Number of connected handlers.
	pub fn len(&self) -> usize {
		self.hooks.read().len()
	}

	/// Whether no handlers are connected.
	pub fn is_empty(&self) -> bool {
		self.hooks.read().is_empty()
	}
}

impl std::fmt::Debug for HookRegistry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("HookRegistry")
			.field("hooks", &self.len())
			.finish()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::request::{NavigationKind, RouteLocation};
	use parking_lot::Mutex;
	use sextant_routing::RouteMeta;
	use std::collections::HashMap;

	fn request() -> NavigationRequest {
		NavigationRequest {
			to: RouteLocation {
				path: "/".to_string(),
				name: None,
				params: HashMap::new(),
				query: HashMap::new(),
				meta: RouteMeta::new(),
			},
			from: None,
			kind: NavigationKind::Push,
		}
	}

	#[test]
	fn test_emit_in_connection_order() {
		let registry = HookRegistry::new();
		let seen = Arc::new(Mutex::new(Vec::new()));

		for label in ["first", "second", "third"] {
			let seen = Arc::clone(&seen);
			registry.connect(move |_| seen.lock().push(label));
		}

		registry.emit(&request());
		assert_eq!(*seen.lock(), vec!["first", "second", "third"]);
	}

	#[test]
	fn test_disconnect() {
		let registry = HookRegistry::new();
		let count = Arc::new(Mutex::new(0u32));

		let counter = Arc::clone(&count);
		let id = registry.connect(move |_| *counter.lock() += 1);

		registry.emit(&request());
		assert!(registry.disconnect(id));
		assert!(!registry.disconnect(id));
		registry.emit(&request());

		assert_eq!(*count.lock(), 1);
		assert!(registry.is_empty());
	}

	#[test]
	fn test_hook_may_disconnect_itself() {
		let registry = Arc::new(HookRegistry::new());
		let slot: Arc<Mutex<Option<HookId>>> = Arc::new(Mutex::new(None));

		let registry_ref = Arc::clone(&registry);
		let slot_ref = Arc::clone(&slot);
		let id = registry.connect(move |_| {
			if let Some(id) = *slot_ref.lock() {
				registry_ref.disconnect(id);
			}
		});
		*slot.lock() = Some(id);

		registry.emit(&request());
		assert!(registry.is_empty());
	}

	#[test]
	fn test_hook_observes_request() {
		let registry = HookRegistry::new();
		let seen = Arc::new(Mutex::new(None));

		let seen_ref = Arc::clone(&seen);
		registry.connect(move |req: &NavigationRequest| {
			*seen_ref.lock() = Some((req.to.path.clone(), req.kind));
		});

		registry.emit(&request());
		assert_eq!(
			*seen.lock(),
			Some(("/".to_string(), NavigationKind::Push))
		);
	}
}
