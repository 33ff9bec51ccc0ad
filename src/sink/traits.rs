//! Trait abstraction for the submission sink to enable mocking in tests

use crate::state::Submission;
use thiserror::Error;

/// Failures a sink may report; the forms log them and move on
#[derive(Debug, Error)]
pub enum SinkError {
    #[error("failed to encode submission: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Receiver of validated form data. Fire-and-forget: no response is awaited.
#[cfg_attr(test, mockall::automock)]
pub trait SubmissionSink {
    fn send(&mut self, submission: &Submission) -> Result<(), SinkError>;
}
