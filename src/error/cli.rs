/// Command line arguments that cannot be turned into a run.
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum ArgumentError {
	#[error("no function given")]
	MissingFunction,
	#[error("no starting value given")]
	MissingGuess,
	#[error("starting value '{0}' is not a number")]
	InvalidGuess(String),
}
