//! Shared error types for Grappelli.
//!
//! Every fallible operation in the workspace returns [`Result`], mirroring
//! Django's exception hierarchy with a single flat enum.

use thiserror::Error;

/// Framework-wide error type.
#[derive(Debug, Error)]
pub enum Error {
	/// No route matched the given path, or a name lookup failed.
	/// The dispatcher turns this into a user-visible 404.
	#[error("Not found: {0}")]
	NotFound(String),

	/// A URL pattern could not be compiled.
	#[error("Invalid pattern: {0}")]
	Pattern(String),

	/// A required reverse-lookup parameter was not supplied.
	#[error("Missing parameter: {0}")]
	MissingParameter(String),

	/// Input failed validation (bad parameter value, wrong type).
	#[error("Validation error: {0}")]
	Validation(String),

	/// Generic HTTP-level failure.
	#[error("HTTP error: {0}")]
	Http(String),
}

pub type Result<T> = std::result::Result<T, Error>;
