/// Errors produced by a chat turn.
///
/// The UI treats every variant the same way; the distinction only shows up
/// in the diagnostic log.
#[derive(Debug, thiserror::Error)]
pub enum ChatError {
    /// The request could not be built or completed.
    #[error("chat request failed: {0}")]
    Transport(String),

    /// The endpoint answered with a non-success HTTP status.
    #[error("chat endpoint returned status {status}")]
    Status { status: u16 },

    /// A success response whose body is not the expected JSON.
    #[error("chat response parse failed: {0}")]
    Decode(#[from] serde_json::Error),
}
