//! Pre-navigation guard policies.
//!
//! A guard is an explicit policy object asked to rule on every
//! navigation before it commits. The default, [`AllowAll`], is the
//! pass-through placeholder where access-control logic would attach.

use crate::request::NavigationRequest;

/// A guard's ruling on a navigation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardVerdict {
	/// Let the navigation proceed.
	Allow,
	/// Stop the navigation; nothing is committed.
	Deny {
		/// Optional human-readable reason, surfaced in the outcome.
		reason: Option<String>,
	},
	/// Abandon this navigation and start one to `to` instead.
	Redirect {
		/// The redirect target path.
		to: String,
	},
}

impl GuardVerdict {
	/// A `Deny` verdict with a reason attached.
	pub fn deny(reason: impl Into<String>) -> Self {
		Self::Deny {
			reason: Some(reason.into()),
		}
	}

	/// A `Redirect` verdict.
	pub fn redirect(to: impl Into<String>) -> Self {
		Self::Redirect { to: to.into() }
	}
}

/// A pre-navigation policy object.
///
/// Guards run in registration order; the first verdict other than
/// [`GuardVerdict::Allow`] ends the chain. Deciding is total: there is
/// no error path, only the three verdicts.
pub trait NavigationGuard: Send + Sync {
	/// Rules on a navigation request.
	fn decide(&self, request: &NavigationRequest) -> GuardVerdict;

	/// Guard name used in navigation outcomes and logging.
	fn name(&self) -> &str {
		"guard"
	}
}

/// The default guard: permits every navigation unconditionally.
///
/// No authentication check, no cancellation, no redirect — an explicit
/// pass-through kept as the attachment point for future policies.
#[derive(Debug, Clone, Copy, Default)]
pub struct AllowAll;

impl NavigationGuard for AllowAll {
	fn decide(&self, _request: &NavigationRequest) -> GuardVerdict {
		GuardVerdict::Allow
	}

	fn name(&self) -> &str {
		"allow_all"
	}
}

/// Adapter turning a closure into a named guard.
///
/// # Example
///
/// ```
/// use sextant_nav::{GuardFn, GuardVerdict, NavigationGuard};
///
/// let guard = GuardFn::new("admin_gate", |request| {
///     if request.to.path.starts_with("/admin/") {
///         GuardVerdict::redirect("/login/")
///     } else {
///         GuardVerdict::Allow
///     }
/// });
/// assert_eq!(guard.name(), "admin_gate");
/// ```
pub struct GuardFn {
	name: String,
	decide: Box<dyn Fn(&NavigationRequest) -> GuardVerdict + Send + Sync>,
}

impl GuardFn {
	/// Wraps a closure as a guard.
	pub fn new<F>(name: impl Into<String>, decide: F) -> Self
	where
		F: Fn(&NavigationRequest) -> GuardVerdict + Send + Sync + 'static,
	{
		Self {
			name: name.into(),
			decide: Box::new(decide),
		}
	}
}

impl NavigationGuard for GuardFn {
	fn decide(&self, request: &NavigationRequest) -> GuardVerdict {
		(self.decide)(request)
	}

	fn name(&self) -> &str {
		&self.name
	}
}

impl std::fmt::Debug for GuardFn {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("GuardFn").field("name", &self.name).finish()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::request::{NavigationKind, RouteLocation};
	use sextant_routing::RouteMeta;
	use std::collections::HashMap;

	fn request(path: &str) -> NavigationRequest {
		NavigationRequest {
			to: RouteLocation {
				path: path.to_string(),
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
	fn test_allow_all_always_allows() {
		let guard = AllowAll;
		for path in ["/", "/admin/", "/users/42/"] {
			assert_eq!(guard.decide(&request(path)), GuardVerdict::Allow);
		}
	}

	#[test]
	fn test_guard_fn_deny() {
		let guard = GuardFn::new("lockout", |_| GuardVerdict::deny("locked"));
		assert_eq!(
			guard.decide(&request("/")),
			GuardVerdict::Deny {
				reason: Some("locked".to_string())
			}
		);
	}

	#[test]
	fn test_guard_fn_redirect() {
		let guard = GuardFn::new("gate", |req| {
			if req.to.path == "/old/" {
				GuardVerdict::redirect("/new/")
			} else {
				GuardVerdict::Allow
			}
		});
		assert_eq!(
			guard.decide(&request("/old/")),
			GuardVerdict::Redirect {
				to: "/new/".to_string()
			}
		);
		assert_eq!(guard.decide(&request("/new/")), GuardVerdict::Allow);
	}
}
