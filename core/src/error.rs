use std::io;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, TranscodeError>;

/// Reasons a single resource record fails to transcode. Any of these leaves the record untouched.
#[derive(Debug, Error)]
pub enum TranscodeError {
	#[error("I/O error")]
	IO {
		#[from]
		source: io::Error,
	},
	#[error("Malformed input at {offset:#x}: {reason}")]
	MalformedInput {
		offset: u64,
		reason: String,
	},
	#[error("Unsupported {table} value: {value}")]
	UnsupportedValue {
		table: &'static str,
		value: String,
	},
}

impl TranscodeError {
	pub fn malformed<S>(offset: u64, reason: S) -> TranscodeError
	where
		S: Into<String>,
	{
		TranscodeError::MalformedInput {
			offset: offset,
			reason: reason.into(),
		}
	}
}
