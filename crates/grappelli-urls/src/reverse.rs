//! URL reverse resolution.
//!
//! The inverse of routing: given a route's symbolic name (optionally
//! namespace-qualified, `"polls:detail"`) and parameter values, produce the
//! concrete path. Inspired by Django's `django.urls.reverse()`.

use crate::pattern::validate_reverse_param;
use crate::route::Route;
use aho_corasick::AhoCorasick;
use grappelli_exception::{Error, Result};
use std::collections::HashMap;

/// Extract `{name}` placeholder names from a reverse template.
///
/// # Examples
///
/// ```
/// use grappelli_urls::extract_param_names;
///
/// let names = extract_param_names("{question_id}/results/");
/// assert_eq!(names, vec!["question_id"]);
/// ```
pub fn extract_param_names(template: &str) -> Vec<String> {
	let mut names = Vec::new();
	let mut chars = template.chars();
	while let Some(c) = chars.next() {
		if c == '{' {
			let name: String = chars.by_ref().take_while(|&c| c != '}').collect();
			if !name.is_empty() {
				names.push(name);
			}
		}
	}
	names
}

/// Single-pass placeholder substitution.
///
/// Walks the template once, appending literal characters and looked-up
/// parameter values. A missing parameter leaves its placeholder in place;
/// callers that care validate beforehand.
pub fn reverse_single_pass(template: &str, params: &HashMap<String, String>) -> String {
	let mut result = String::with_capacity(template.len());
	let mut chars = template.chars();
	while let Some(c) = chars.next() {
		if c == '{' {
			let name: String = chars.by_ref().take_while(|&c| c != '}').collect();
			match params.get(&name) {
				Some(value) => result.push_str(value),
				None => {
					result.push('{');
					result.push_str(&name);
					result.push('}');
				}
			}
		} else {
			result.push(c);
		}
	}
	result
}

/// Multi-placeholder substitution via an Aho-Corasick automaton.
///
/// All placeholders are located in one pass over the template, then
/// replaced right-to-left so match positions stay valid. Worth it once a
/// template carries several parameters; behaviorally identical to
/// [`reverse_single_pass`].
pub fn reverse_with_aho_corasick(template: &str, params: &HashMap<String, String>) -> String {
	let names = extract_param_names(template);
	if names.is_empty() {
		return template.to_string();
	}

	let placeholders: Vec<String> = names.iter().map(|n| format!("{{{}}}", n)).collect();
	let ac = match AhoCorasick::new(&placeholders) {
		Ok(ac) => ac,
		Err(_) => return reverse_single_pass(template, params),
	};

	let mut replacements = Vec::new();
	for mat in ac.find_iter(template) {
		let name = &names[mat.pattern().as_usize()];
		let value = params
			.get(name)
			.cloned()
			.unwrap_or_else(|| format!("{{{}}}", name));
		replacements.push((mat.start(), mat.end(), value));
	}

	let mut result = template.to_string();
	for (start, end, value) in replacements.into_iter().rev() {
		result.replace_range(start..end, &value);
	}
	result
}

/// Name-to-path resolver over registered routes.
#[derive(Default)]
pub struct UrlReverser {
	/// Routes keyed by their fully qualified name.
	routes: HashMap<String, Route>,
}

impl UrlReverser {
	pub fn new() -> Self {
		Self::default()
	}

	/// Register a route for reverse lookup. Routes without a name are
	/// silently ignored; they cannot be addressed anyway.
	pub fn register(&mut self, route: Route) {
		if let Some(full_name) = route.full_name() {
			self.routes.insert(full_name, route);
		}
	}

	/// Resolve a route name to a concrete path.
	///
	/// # Examples
	///
	/// ```
	/// use grappelli_urls::{UrlReverser, path, function};
	/// use grappelli_http::{Request, Response, Result};
	/// use std::collections::HashMap;
	///
	/// # async fn detail(_req: Request) -> Result<Response> { Ok(Response::ok()) }
	/// let mut reverser = UrlReverser::new();
	/// reverser.register(
	///     path("{question_id:int}/", function(detail))
	///         .unwrap()
	///         .with_name("detail")
	///         .with_namespace("polls"),
	/// );
	///
	/// let mut params = HashMap::new();
	/// params.insert("question_id".to_string(), "5".to_string());
	/// assert_eq!(reverser.reverse("polls:detail", &params).unwrap(), "5/");
	/// ```
	pub fn reverse(&self, name: &str, params: &HashMap<String, String>) -> Result<String> {
		let route = self
			.routes
			.get(name)
			.ok_or_else(|| Error::NotFound(name.to_string()))?;

		let template = route.pattern().reverse_template().ok_or_else(|| {
			Error::Pattern(format!("route '{}' has a non-reversible pattern", name))
		})?;

		let names = route.pattern().param_names();
		for param_name in &names {
			if !params.contains_key(*param_name) {
				return Err(Error::MissingParameter(param_name.to_string()));
			}
		}
		for (param_name, value) in params {
			if !validate_reverse_param(value) {
				return Err(Error::Validation(format!(
					"invalid value for parameter '{}': contains path or query delimiters",
					param_name
				)));
			}
		}

		if names.len() > 1 {
			Ok(reverse_with_aho_corasick(template, params))
		} else {
			Ok(reverse_single_pass(template, params))
		}
	}

	/// Convenience form taking key-value pairs instead of a map.
	pub fn reverse_with<S: AsRef<str>>(&self, name: &str, params: &[(S, S)]) -> Result<String> {
		let map: HashMap<String, String> = params
			.iter()
			.map(|(k, v)| (k.as_ref().to_string(), v.as_ref().to_string()))
			.collect();
		self.reverse(name, &map)
	}

	pub fn has_route(&self, name: &str) -> bool {
		self.routes.contains_key(name)
	}

	pub fn route_names(&self) -> Vec<String> {
		self.routes.keys().cloned().collect()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::helpers::{function, path, re_path};
	use grappelli_http::{Request, Response};

	async fn dummy(_req: Request) -> grappelli_exception::Result<Response> {
		Ok(Response::ok())
	}

	fn params(pairs: &[(&str, &str)]) -> HashMap<String, String> {
		pairs
			.iter()
			.map(|(k, v)| (k.to_string(), v.to_string()))
			.collect()
	}

	#[test]
	fn test_reverse_static_route() {
		let mut reverser = UrlReverser::new();
		reverser.register(path("", function(dummy)).unwrap().with_name("index"));
		assert_eq!(reverser.reverse("index", &HashMap::new()).unwrap(), "");
	}

	#[test]
	fn test_has_route_and_route_names() {
		let mut reverser = UrlReverser::new();
		assert!(reverser.route_names().is_empty());

		reverser.register(path("", function(dummy)).unwrap().with_name("index"));
		reverser.register(
			path("{question_id:int}/", function(dummy))
				.unwrap()
				.with_name("detail")
				.with_namespace("polls"),
		);
		// Unnamed routes are not registered.
		reverser.register(path("about/", function(dummy)).unwrap());

		assert!(reverser.has_route("index"));
		assert!(reverser.has_route("polls:detail"));
		assert!(!reverser.has_route("detail"));

		let mut names = reverser.route_names();
		names.sort();
		assert_eq!(names, vec!["index", "polls:detail"]);
	}

	#[test]
	fn test_reverse_with_parameter() {
		let mut reverser = UrlReverser::new();
		reverser.register(
			path("{question_id:int}/", function(dummy))
				.unwrap()
				.with_name("detail"),
		);
		assert_eq!(
			reverser
				.reverse("detail", &params(&[("question_id", "5")]))
				.unwrap(),
			"5/"
		);
	}

	#[test]
	fn test_reverse_namespaced_name() {
		let mut reverser = UrlReverser::new();
		reverser.register(
			path("{question_id:int}/results/", function(dummy))
				.unwrap()
				.with_name("results")
				.with_namespace("polls"),
		);
		assert_eq!(
			reverser
				.reverse_with("polls:results", &[("question_id", "12")])
				.unwrap(),
			"12/results/"
		);
		// The bare name is not registered once a namespace is set.
		assert!(reverser.reverse("results", &HashMap::new()).is_err());
	}

	#[test]
	fn test_reverse_regex_route_through_derived_template() {
		let mut reverser = UrlReverser::new();
		reverser.register(
			re_path(r"^(?P<question_id>[0-9]+)/vote/$", function(dummy))
				.unwrap()
				.with_name("vote"),
		);
		assert_eq!(
			reverser
				.reverse_with("vote", &[("question_id", "5")])
				.unwrap(),
			"5/vote/"
		);
	}

	#[test]
	fn test_reverse_unknown_name() {
		let reverser = UrlReverser::new();
		assert!(matches!(
			reverser.reverse("nonexistent", &HashMap::new()),
			Err(Error::NotFound(_))
		));
	}

	#[test]
	fn test_reverse_missing_parameter() {
		let mut reverser = UrlReverser::new();
		reverser.register(
			path("{question_id:int}/", function(dummy))
				.unwrap()
				.with_name("detail"),
		);
		assert!(matches!(
			reverser.reverse("detail", &HashMap::new()),
			Err(Error::MissingParameter(_))
		));
	}

	#[test]
	fn test_reverse_rejects_injection_values() {
		let mut reverser = UrlReverser::new();
		reverser.register(
			path("{question_id:int}/", function(dummy))
				.unwrap()
				.with_name("detail"),
		);
		for bad in ["5/../admin", "5?admin=true", "5#frag", "5%2f.."] {
			assert!(matches!(
				reverser.reverse("detail", &params(&[("question_id", bad)])),
				Err(Error::Validation(_))
			));
		}
	}

	#[test]
	fn test_substitution_functions_agree() {
		let template = "{a}/x/{b}/";
		let params = params(&[("a", "1"), ("b", "2")]);
		assert_eq!(reverse_single_pass(template, &params), "1/x/2/");
		assert_eq!(reverse_with_aho_corasick(template, &params), "1/x/2/");
	}

	#[test]
	fn test_substitution_preserves_missing_placeholder() {
		let empty = HashMap::new();
		assert_eq!(reverse_single_pass("{id}/", &empty), "{id}/");
		assert_eq!(reverse_with_aho_corasick("{id}/", &empty), "{id}/");
	}

	#[test]
	fn test_extract_param_names_multiple() {
		assert_eq!(
			extract_param_names("{user_id}/posts/{post_id}/"),
			vec!["user_id", "post_id"]
		);
		assert!(extract_param_names("static/").is_empty());
	}
}
