use std::collections::TryReserveError;

/// A buffer could not be grown.
#[derive(thiserror::Error, Debug)]
#[error("could not grow {what}: {source}")]
pub struct OutOfMemory {
	/// Name of the buffer.
	what:   &'static str,
	#[source]
	source: TryReserveError,
}

impl OutOfMemory {
	pub fn new(what: &'static str, source: TryReserveError) -> Self { Self { what, source } }
}
