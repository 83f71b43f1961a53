//! Library-wide error type.
//!
//! Underlying errors pass through unchanged, there is no retry or recovery
//! beyond what the caller decides to do.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
	/// Errors returned by the database driver while connecting or querying.
	#[error("database error: {0}")]
	Sql(#[from] postgres::Error),

	/// File errors while writing generated code or persisting an `AttrDict`.
	#[error("io error: {0}")]
	Io(#[from] std::io::Error),

	/// Serialization failures from `serde_json`.
	#[error("json error: {0}")]
	Json(#[from] serde_json::Error),

	/// `get_by_id` was called for a table the reflection found no key on.
	#[error("table {0} has no primary key")]
	NoPrimaryKey(&'static str),

	/// An `AttrDict` can only be built from a JSON object.
	#[error("expected a json object, found {0}")]
	NotAMapping(&'static str),
}

/// Convenience alias for library results.
pub type Result<T> = std::result::Result<T, Error>;
