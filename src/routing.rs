//! Route table module.
//!
//! Path patterns, per-route metadata and the ordered route table with
//! named reverse lookups.

pub use sextant_routing::*;
