//! Per-user conversation state.

use crate::task::LegalTask;

/// A generated response and the task that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    pub task: LegalTask,
    pub text: String,
}

/// State carried between generations.
///
/// Starts empty, is overwritten by every successful generation and is only
/// emptied by [`Session::clear`].
#[derive(Debug, Clone, Default)]
pub struct Session {
    last: Option<Response>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the stored response.
    pub fn record(&mut self, task: LegalTask, text: impl Into<String>) {
        self.last = Some(Response {
            task,
            text: text.into(),
        });
    }

    /// Forget the stored response.
    pub fn clear(&mut self) {
        self.last = None;
    }

    pub fn last_response(&self) -> Option<&Response> {
        self.last.as_ref()
    }

    pub fn has_response(&self) -> bool {
        self.last.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_empty() {
        let session = Session::new();
        assert!(!session.has_response());
        assert!(session.last_response().is_none());
    }

    #[test]
    fn test_record_overwrites() {
        let mut session = Session::new();
        session.record(LegalTask::Research, "first");
        session.record(LegalTask::Draft, "second");

        let last = session.last_response().unwrap();
        assert_eq!(last.task, LegalTask::Draft);
        assert_eq!(last.text, "second");
    }

    #[test]
    fn test_clear() {
        let mut session = Session::new();
        session.record(LegalTask::Review, "issues");
        session.clear();
        assert!(!session.has_response());
    }
}
