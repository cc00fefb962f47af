//! Path converters for typed URL segments.
//!
//! Each converter pairs a regex fragment (what the segment may look like)
//! with a conversion (what the handler receives). The set mirrors Django's
//! `django.urls.converters`: `int`, `str`, `slug`, `uuid`, `path`.

use grappelli_exception::{Error, Result};
use grappelli_http::PathValue;

/// A typed path-segment converter.
///
/// `regex()` returns an unanchored fragment with no capture groups of its
/// own; the pattern compiler wraps it in a named group. `convert()` runs on
/// the captured text, which is guaranteed to have matched the fragment.
pub trait Converter: Send + Sync {
	fn regex(&self) -> &'static str;
	fn convert(&self, raw: &str) -> Result<PathValue>;
}

/// `int`: non-negative decimal integers, converted to `i64`.
pub struct IntegerConverter;

impl Converter for IntegerConverter {
	fn regex(&self) -> &'static str {
		"[0-9]+"
	}

	fn convert(&self, raw: &str) -> Result<PathValue> {
		// The fragment only admits digits; overflow is the one way out.
		raw.parse::<i64>()
			.map(PathValue::Int)
			.map_err(|_| Error::Validation(format!("integer segment out of range: {}", raw)))
	}
}

/// `str`: any text without a path separator. The default when a template
/// parameter names no converter.
pub struct StringConverter;

impl Converter for StringConverter {
	fn regex(&self) -> &'static str {
		"[^/]+"
	}

	fn convert(&self, raw: &str) -> Result<PathValue> {
		Ok(PathValue::Str(raw.to_string()))
	}
}

/// `slug`: ASCII letters, numbers, hyphens, underscores.
pub struct SlugConverter;

impl Converter for SlugConverter {
	fn regex(&self) -> &'static str {
		"[-a-zA-Z0-9_]+"
	}

	fn convert(&self, raw: &str) -> Result<PathValue> {
		Ok(PathValue::Str(raw.to_string()))
	}
}

/// `uuid`: canonical hyphenated, lowercase form.
pub struct UuidConverter;

impl Converter for UuidConverter {
	fn regex(&self) -> &'static str {
		"[0-9a-f]{8}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{12}"
	}

	fn convert(&self, raw: &str) -> Result<PathValue> {
		uuid::Uuid::parse_str(raw)
			.map(PathValue::Uuid)
			.map_err(|_| Error::Validation(format!("invalid UUID segment: {}", raw)))
	}
}

/// `path`: any non-empty text, including path separators. Matches the rest
/// of the URL, so it belongs at the end of a template.
pub struct PathConverter;

impl Converter for PathConverter {
	fn regex(&self) -> &'static str {
		".+"
	}

	fn convert(&self, raw: &str) -> Result<PathValue> {
		Ok(PathValue::Str(raw.to_string()))
	}
}

/// Look up a converter by its template name.
///
/// `*` is an alias for `path`, keeping the wildcard spelling `{name:*}`
/// working alongside `{name:path}`.
pub fn converter_by_name(name: &str) -> Option<&'static dyn Converter> {
	match name {
		"int" => Some(&IntegerConverter),
		"str" => Some(&StringConverter),
		"slug" => Some(&SlugConverter),
		"uuid" => Some(&UuidConverter),
		"path" | "*" => Some(&PathConverter),
		_ => None,
	}
}
