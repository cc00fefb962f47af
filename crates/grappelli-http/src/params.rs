//! Typed path parameters extracted from a matched URL.

use grappelli_exception::{Error, Result};
use std::collections::HashMap;

/// A single converted path-segment value.
///
/// Typed-template routes (`{question_id:int}/`) convert at match time and
/// store the native variant. Regex routes capture raw strings; the typed
/// accessors on [`PathParams`] parse those on access, so handlers observe
/// the same types either way.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathValue {
	Int(i64),
	Str(String),
	Uuid(uuid::Uuid),
}

impl PathValue {
	/// Render the value the way it appeared in the path.
	pub fn as_path_segment(&self) -> String {
		match self {
			Self::Int(n) => n.to_string(),
			Self::Str(s) => s.clone(),
			Self::Uuid(u) => u.to_string(),
		}
	}
}

impl std::fmt::Display for PathValue {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}", self.as_path_segment())
	}
}

/// Parameters captured from a matched path, keyed by segment name.
///
/// Produced per-request by the router and discarded after the handler call
/// returns.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PathParams {
	values: HashMap<String, PathValue>,
}

impl PathParams {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn insert(&mut self, name: impl Into<String>, value: PathValue) {
		self.values.insert(name.into(), value);
	}

	pub fn get(&self, name: &str) -> Option<&PathValue> {
		self.values.get(name)
	}

	pub fn is_empty(&self) -> bool {
		self.values.is_empty()
	}

	pub fn len(&self) -> usize {
		self.values.len()
	}

	pub fn names(&self) -> impl Iterator<Item = &str> {
		self.values.keys().map(String::as_str)
	}

	/// Get a parameter as an integer.
	///
	/// `Str` values that parse as integers are accepted, so parameters
	/// captured by regex routes with numeric groups read back as integers.
	///
	/// # Examples
	///
	/// ```
	/// use grappelli_http::{PathParams, PathValue};
	///
	/// let mut params = PathParams::new();
	/// params.insert("question_id", PathValue::Int(5));
	/// assert_eq!(params.get_int("question_id").unwrap(), 5);
	///
	/// params.insert("page", PathValue::Str("12".to_string()));
	/// assert_eq!(params.get_int("page").unwrap(), 12);
	/// ```
	pub fn get_int(&self, name: &str) -> Result<i64> {
		match self.values.get(name) {
			Some(PathValue::Int(n)) => Ok(*n),
			Some(PathValue::Str(s)) => s.parse::<i64>().map_err(|_| {
				Error::Validation(format!("parameter '{}' is not an integer: {}", name, s))
			}),
			Some(other) => Err(Error::Validation(format!(
				"parameter '{}' is not an integer: {}",
				name, other
			))),
			None => Err(Error::MissingParameter(name.to_string())),
		}
	}

	/// Get a parameter as a string slice, whatever its captured type.
	pub fn get_str(&self, name: &str) -> Result<String> {
		self.values
			.get(name)
			.map(PathValue::as_path_segment)
			.ok_or_else(|| Error::MissingParameter(name.to_string()))
	}

	/// Get a parameter as a UUID.
	pub fn get_uuid(&self, name: &str) -> Result<uuid::Uuid> {
		match self.values.get(name) {
			Some(PathValue::Uuid(u)) => Ok(*u),
			Some(PathValue::Str(s)) => uuid::Uuid::parse_str(s).map_err(|_| {
				Error::Validation(format!("parameter '{}' is not a UUID: {}", name, s))
			}),
			Some(other) => Err(Error::Validation(format!(
				"parameter '{}' is not a UUID: {}",
				name, other
			))),
			None => Err(Error::MissingParameter(name.to_string())),
		}
	}
}

impl FromIterator<(String, PathValue)> for PathParams {
	fn from_iter<I: IntoIterator<Item = (String, PathValue)>>(iter: I) -> Self {
		Self {
			values: iter.into_iter().collect(),
		}
	}
}
