//! Path pattern compilation and matching.
//!
//! Patterns are plain paths whose segments may be `{name}` parameters:
//! `/users/{id}/` matches `/users/42/` and extracts `id = "42"`.
//! Matching is anchored at both ends and the trailing slash is
//! significant.

use regex::Regex;
use std::collections::HashMap;

/// A compiled path pattern.
///
/// # Example
///
/// ```
/// use sextant_routing::PathPattern;
///
/// let pattern = PathPattern::new("/users/{id}/");
/// let params = pattern.matches("/users/42/").unwrap();
/// assert_eq!(params.get("id").map(String::as_str), Some("42"));
/// assert!(pattern.matches("/users/42").is_none());
/// ```
#[derive(Debug, Clone)]
pub struct PathPattern {
	/// The raw pattern as registered.
	raw: String,
	/// Compiled matcher. `None` when the pattern failed to compile,
	/// in which case the pattern never matches.
	regex: Option<Regex>,
	/// Parameter names in the order they appear in the pattern.
	param_names: Vec<String>,
}

impl PathPattern {
	/// Compiles a pattern.
	///
	/// An empty pattern normalizes to `/`; a missing leading slash is
	/// added. A segment is a parameter when it has the exact form
	/// `{name}`; anything else is matched literally. A parameter name
	/// that appears twice captures the last occurrence.
	pub fn new(pattern: &str) -> Self {
		let raw = normalize(pattern);

		let mut param_names = Vec::new();
		let mut regex_parts = Vec::new();
		for segment in raw.split('/') {
			if let Some(name) = param_name(segment) {
				param_names.push(name.to_string());
				regex_parts.push("([^/]+)".to_string());
			} else {
				regex_parts.push(regex::escape(segment));
			}
		}

		let full_pattern = format!("^{}$", regex_parts.join("/"));
		let regex = Regex::new(&full_pattern).ok();

		Self {
			raw,
			regex,
			param_names,
		}
	}

	/// Matches a path against this pattern, extracting parameters.
	///
	/// Parameter values are percent-decoded. Returns `None` when the
	/// path does not match.
	pub fn matches(&self, path: &str) -> Option<HashMap<String, String>> {
		let regex = self.regex.as_ref()?;
		let captures = regex.captures(path)?;

		let mut params = HashMap::new();
		for (i, name) in self.param_names.iter().enumerate() {
			if let Some(value) = captures.get(i + 1) {
				let decoded = urlencoding::decode(value.as_str())
					.map(|cow| cow.into_owned())
					.unwrap_or_else(|_| value.as_str().to_string());
				params.insert(name.clone(), decoded);
			}
		}
		Some(params)
	}

	/// Generates a path by substituting parameters into the pattern.
	///
	/// Returns `None` when a required parameter is absent from `params`.
	pub fn reverse(&self, params: &HashMap<String, String>) -> Option<String> {
		let mut parts = Vec::new();
		for segment in self.raw.split('/') {
			if let Some(name) = param_name(segment) {
				let value = params.get(name)?;
				parts.push(urlencoding::encode(value).into_owned());
			} else {
				parts.push(segment.to_string());
			}
		}
		Some(parts.join("/"))
	}

	/// Parameter names in pattern order.
	pub fn param_names(&self) -> &[String] {
		&self.param_names
	}

	/// The raw pattern as registered.
	pub fn raw(&self) -> &str {
		&self.raw
	}
}

fn normalize(pattern: &str) -> String {
	if pattern.is_empty() {
		return "/".to_string();
	}
	if pattern.starts_with('/') {
		pattern.to_string()
	} else {
		format!("/{}", pattern)
	}
}

/// Returns the parameter name when `segment` has the form `{name}`.
fn param_name(segment: &str) -> Option<&str> {
	let inner = segment.strip_prefix('{')?.strip_suffix('}')?;
	if inner.is_empty() { None } else { Some(inner) }
}
