//! Sink that writes each submission to the log

use super::traits::{SinkError, SubmissionSink};
use crate::state::Submission;

/// Replacement shown for password values when redaction is on
pub const REDACTED: &str = "********";

/// Logs every submission as a JSON record at `info` level
#[derive(Debug, Clone)]
pub struct LogSink {
    redact_passwords: bool,
    sent: usize,
}

impl LogSink {
    pub fn new(redact_passwords: bool) -> Self {
        Self {
            redact_passwords,
            sent: 0,
        }
    }

    /// JSON text that will be logged for `submission`
    pub fn render(&self, submission: &Submission) -> Result<String, SinkError> {
        if self.redact_passwords {
            let redacted = Submission {
                email: submission.email.clone(),
                password: REDACTED.to_string(),
                duplicate_password: REDACTED.to_string(),
            };
            Ok(serde_json::to_string(&redacted)?)
        } else {
            Ok(serde_json::to_string(submission)?)
        }
    }
}

impl Default for LogSink {
    fn default() -> Self {
        Self::new(true)
    }
}

impl SubmissionSink for LogSink {
    fn send(&mut self, submission: &Submission) -> Result<(), SinkError> {
        let record = self.render(submission)?;
        self.sent += 1;
        tracing::info!(target: "signup_tui::submission", seq = self.sent, "{record}");
        Ok(())
    }
}
