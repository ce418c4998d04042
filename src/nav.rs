//! Navigation module.
//!
//! The coordinator, history, guards, lifecycle hook registries, scroll
//! policy and the UI chrome capability.

pub use sextant_nav::*;
