//! URL pattern compilation and matching.
//!
//! Two spellings compile into the same [`PathPattern`]:
//!
//! - typed templates, `"{question_id:int}/results/"` — each `{name}` or
//!   `{name:converter}` segment becomes a named regex group backed by a
//!   converter from [`crate::converters`];
//! - raw regexes with named groups, `r"^(?P<question_id>[0-9]+)/vote/$"` —
//!   the Django `re_path` escape hatch, whose captures stay strings.
//!
//! Matching is anchored and pure: a segment that fails its converter simply
//! does not match, it never raises.

use crate::converters::{Converter, StringConverter, converter_by_name};
use grappelli_exception::{Error, Result};
use grappelli_http::{PathParams, PathValue};
use regex::{Regex, RegexBuilder};

/// Maximum allowed length for a pattern string in bytes.
const MAX_PATTERN_LENGTH: usize = 1024;

/// Maximum allowed number of path segments in a template pattern.
const MAX_PATH_SEGMENTS: usize = 32;

/// Maximum allowed size for a compiled pattern regex (in bytes).
const MAX_REGEX_SIZE: usize = 1 << 20; // 1 MiB

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PatternKind {
	Template,
	Regex,
}

struct ParamSpec {
	name: String,
	/// `None` for raw-regex captures, which stay strings.
	converter: Option<&'static dyn Converter>,
}

impl Clone for ParamSpec {
	fn clone(&self) -> Self {
		Self {
			name: self.name.clone(),
			converter: self.converter,
		}
	}
}

/// A compiled URL pattern.
#[derive(Clone)]
pub struct PathPattern {
	/// The pattern as the caller wrote it (template text or raw regex).
	source: String,
	kind: PatternKind,
	regex: Regex,
	params: Vec<ParamSpec>,
	/// Placeholder form used for reverse lookup, e.g. `"{question_id}/vote/"`.
	/// `None` when the pattern cannot be reversed (unnamed regex groups).
	reverse_template: Option<String>,
}

impl PathPattern {
	/// Compile a typed-segment template.
	///
	/// # Template syntax
	///
	/// - `{name}` — one segment, default `str` converter (no `/`)
	/// - `{name:int}`, `{name:slug}`, `{name:uuid}`, `{name:path}` — one
	///   segment through the named converter
	/// - `{name:*}` — alias for `{name:path}`, matches across `/`
	/// - anything else matches literally
	///
	/// # Examples
	///
	/// ```
	/// use grappelli_urls::PathPattern;
	///
	/// let pattern = PathPattern::parse("{question_id:int}/").unwrap();
	/// let params = pattern.matches("5/").unwrap();
	/// assert_eq!(params.get_int("question_id").unwrap(), 5);
	/// assert!(pattern.matches("abc/").is_none());
	/// ```
	pub fn parse(template: &str) -> Result<Self> {
		check_length(template)?;
		let segment_count = template.split('/').count();
		if segment_count > MAX_PATH_SEGMENTS {
			return Err(Error::Pattern(format!(
				"pattern has {} path segments, exceeding maximum of {}",
				segment_count, MAX_PATH_SEGMENTS
			)));
		}

		let mut regex_str = String::from("^");
		let mut reverse_template = String::new();
		let mut params: Vec<ParamSpec> = Vec::new();
		let mut chars = template.chars().peekable();

		while let Some(c) = chars.next() {
			if c == '{' {
				let mut name = String::new();
				let mut spec = String::new();
				let mut in_spec = false;
				let mut closed = false;
				for next in chars.by_ref() {
					match next {
						'}' => {
							closed = true;
							break;
						}
						':' if !in_spec => in_spec = true,
						_ if in_spec => spec.push(next),
						_ => name.push(next),
					}
				}
				if !closed {
					return Err(Error::Pattern(format!(
						"unterminated parameter in pattern: {}",
						template
					)));
				}
				if name.is_empty() || !is_valid_param_name(&name) {
					return Err(Error::Pattern(format!(
						"invalid parameter name '{}' in pattern: {}",
						name, template
					)));
				}
				if params.iter().any(|p| p.name == name) {
					return Err(Error::Pattern(format!(
						"duplicate parameter name '{}' in pattern: {}",
						name, template
					)));
				}
				let converter: &'static dyn Converter = if spec.is_empty() {
					&StringConverter
				} else {
					converter_by_name(&spec).ok_or_else(|| {
						Error::Pattern(format!("unknown path converter '{}'", spec))
					})?
				};
				regex_str.push_str(&format!("(?P<{}>{})", name, converter.regex()));
				reverse_template.push('{');
				reverse_template.push_str(&name);
				reverse_template.push('}');
				params.push(ParamSpec {
					name,
					converter: Some(converter),
				});
			} else {
				push_escaped(&mut regex_str, c);
				reverse_template.push(c);
			}
		}
		regex_str.push('$');

		Ok(Self {
			source: template.to_string(),
			kind: PatternKind::Template,
			regex: build_regex(&regex_str)?,
			params,
			reverse_template: Some(reverse_template),
		})
	}

	/// Compile a raw regular expression with named capture groups.
	///
	/// The expression is anchored if it is not already. A reverse template
	/// is derived by replacing each `(?P<name>...)` group with `{name}`;
	/// patterns containing unnamed groups match normally but cannot be
	/// reversed.
	///
	/// # Examples
	///
	/// ```
	/// use grappelli_urls::PathPattern;
	///
	/// let pattern = PathPattern::regex(r"^(?P<question_id>[0-9]+)/vote/$").unwrap();
	/// let params = pattern.matches("5/vote/").unwrap();
	/// assert_eq!(params.get_int("question_id").unwrap(), 5);
	/// assert_eq!(pattern.reverse_template(), Some("{question_id}/vote/"));
	/// ```
	pub fn regex(expr: &str) -> Result<Self> {
		check_length(expr)?;

		let mut anchored = String::with_capacity(expr.len() + 2);
		if !expr.starts_with('^') {
			anchored.push('^');
		}
		anchored.push_str(expr);
		if !expr.ends_with('$') {
			anchored.push('$');
		}
		let regex = build_regex(&anchored)?;

		let (params, reverse_template) = derive_regex_template(expr);

		Ok(Self {
			source: expr.to_string(),
			kind: PatternKind::Regex,
			regex,
			params,
			reverse_template,
		})
	}

	/// The pattern string as originally written.
	pub fn source(&self) -> &str {
		&self.source
	}

	/// Parameter names in the order they appear.
	pub fn param_names(&self) -> Vec<&str> {
		self.params.iter().map(|p| p.name.as_str()).collect()
	}

	/// The `{name}` placeholder form used by reverse lookup, if this
	/// pattern is reversible.
	pub fn reverse_template(&self) -> Option<&str> {
		self.reverse_template.as_deref()
	}

	/// Whether the pattern would match the path, without extracting.
	pub fn is_match(&self, path: &str) -> bool {
		self.matches(path).is_some()
	}

	/// Match a path and extract converted parameters.
	///
	/// Returns `None` when the path does not match structurally or when a
	/// captured segment fails its converter (an out-of-range integer, say).
	pub fn matches(&self, path: &str) -> Option<PathParams> {
		let caps = self.regex.captures(path)?;
		let mut params = PathParams::new();
		for spec in &self.params {
			let raw = caps.name(&spec.name)?.as_str();
			let value = match spec.converter {
				Some(converter) => converter.convert(raw).ok()?,
				None => PathValue::Str(raw.to_string()),
			};
			params.insert(spec.name.clone(), value);
		}
		Some(params)
	}

	/// Rebuild this pattern under a mount prefix.
	///
	/// `"{question_id:int}/"` mounted at `"/polls"` becomes
	/// `"/polls/{question_id:int}/"`; a raw regex is re-anchored after the
	/// prefix is spliced in front of it.
	pub fn with_prefix(&self, prefix: &str) -> Result<Self> {
		match self.kind {
			PatternKind::Template => Self::parse(&join_prefix(prefix, &self.source)),
			PatternKind::Regex => {
				let inner = self.source.strip_prefix('^').unwrap_or(&self.source);
				Self::regex(&join_prefix(prefix, inner))
			}
		}
	}
}

impl PartialEq for PathPattern {
	fn eq(&self, other: &Self) -> bool {
		self.kind == other.kind && self.source == other.source
	}
}

impl Eq for PathPattern {}

impl std::fmt::Display for PathPattern {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}", self.source)
	}
}

impl std::fmt::Debug for PathPattern {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("PathPattern")
			.field("source", &self.source)
			.field("kind", &self.kind)
			.finish()
	}
}

/// Validate a reverse-lookup parameter value.
///
/// Substituted values must not smuggle in path separators, query or
/// fragment delimiters, or percent-encoded sequences.
pub fn validate_reverse_param(value: &str) -> bool {
	!value
		.chars()
		.any(|c| matches!(c, '/' | '?' | '#' | '\\' | '%'))
}

fn check_length(pattern: &str) -> Result<()> {
	if pattern.len() > MAX_PATTERN_LENGTH {
		return Err(Error::Pattern(format!(
			"pattern length {} exceeds maximum allowed length of {} bytes",
			pattern.len(),
			MAX_PATTERN_LENGTH
		)));
	}
	Ok(())
}

fn build_regex(regex_str: &str) -> Result<Regex> {
	RegexBuilder::new(regex_str)
		.size_limit(MAX_REGEX_SIZE)
		.build()
		.map_err(|e| Error::Pattern(format!("failed to compile pattern regex: {}", e)))
}

fn is_valid_param_name(name: &str) -> bool {
	let mut chars = name.chars();
	match chars.next() {
		Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
		_ => return false,
	}
	chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

fn push_escaped(regex_str: &mut String, c: char) {
	if matches!(
		c,
		'/' | '.' | '+' | '*' | '?' | '(' | ')' | '[' | ']' | '^' | '$' | '|' | '\\' | '}'
	) {
		regex_str.push('\\');
	}
	regex_str.push(c);
}

fn join_prefix(prefix: &str, rest: &str) -> String {
	format!(
		"{}/{}",
		prefix.trim_end_matches('/'),
		rest.trim_start_matches('/')
	)
}

/// Walk a raw regex and replace each named group with a `{name}`
/// placeholder, collecting parameter names along the way.
///
/// Returns `None` for the template when the expression contains unnamed
/// capture groups, which makes substitution ambiguous.
fn derive_regex_template(expr: &str) -> (Vec<ParamSpec>, Option<String>) {
	let inner = expr
		.strip_prefix('^')
		.unwrap_or(expr)
		.strip_suffix('$')
		.unwrap_or_else(|| expr.strip_prefix('^').unwrap_or(expr));

	let mut params = Vec::new();
	let mut template = String::new();
	let mut reversible = true;
	let chars: Vec<char> = inner.chars().collect();
	let mut i = 0;

	while i < chars.len() {
		let c = chars[i];
		if c == '\\' && i + 1 < chars.len() {
			// Escaped literal: keep the character, drop the backslash.
			template.push(chars[i + 1]);
			i += 2;
		} else if c == '(' {
			if chars[i..].starts_with(&['(', '?', 'P', '<']) {
				// Named group: read the name, then skip the group body.
				let mut j = i + 4;
				let mut name = String::new();
				while j < chars.len() && chars[j] != '>' {
					name.push(chars[j]);
					j += 1;
				}
				j += 1; // consume '>'
				let mut depth = 1;
				while j < chars.len() && depth > 0 {
					match chars[j] {
						'\\' => j += 1,
						'(' => depth += 1,
						')' => depth -= 1,
						_ => {}
					}
					j += 1;
				}
				template.push('{');
				template.push_str(&name);
				template.push('}');
				params.push(ParamSpec {
					name,
					converter: None,
				});
				i = j;
			} else if chars[i..].starts_with(&['(', '?', ':']) {
				// Non-capturing group: contributes literal structure we
				// cannot reconstruct for reversal.
				reversible = false;
				i += 1;
			} else {
				// Unnamed capture group: match-only pattern.
				reversible = false;
				i += 1;
			}
		} else if matches!(c, ')' | '*' | '+' | '?' | '[' | ']' | '|') {
			// Bare regex metacharacters make the literal form unclear.
			if !matches!(c, ')') {
				reversible = false;
			}
			i += 1;
		} else {
			template.push(c);
			i += 1;
		}
	}

	let template = if reversible { Some(template) } else { None };
	(params, template)
}
