use thiserror::Error;

/// Rejections from the board builder, shown inline under the grid.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum BoardError {
	#[error("Invalid board size. Please enter valid numbers for rows and columns.")]
	InvalidSize,

	#[error("Please select a color first.")]
	NoColorSelected,

	#[error("You can only place two dots of the same color.")]
	ColorFull,
}

#[derive(Debug, Error)]
pub enum ApiError {
	#[error("request failed: {0}")]
	Request(#[from] gloo_net::Error),

	#[error("server answered {status}: {body}")]
	Status { status: u16, body: String },

	#[error("missing CSRF token")]
	MissingCsrfToken,
}

#[derive(Debug, Error)]
pub enum NotificationError {
	#[error("unknown notification event `{0}`")]
	UnknownEvent(String),

	#[error("malformed notification payload: {0}")]
	Payload(#[from] serde_json::Error),
}
