//! Notifications raised by picks.

use serde::Serialize;

use crate::rules::ChoiceOutcome;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum NoticeKind {
    Success,
    Error,
}

/// A short-lived popup message.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub kind: NoticeKind,
    pub title: &'static str,
    pub description: String,
}

impl Notice {
    fn success(title: &'static str, description: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            title,
            description: description.into(),
        }
    }

    fn error(title: &'static str, description: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            title,
            description: description.into(),
        }
    }

    /// Notices to show for an outcome, in display order.
    ///
    /// Ignored picks produce none.
    #[must_use]
    pub fn for_outcome(outcome: &ChoiceOutcome) -> Vec<Notice> {
        match outcome {
            ChoiceOutcome::Ignored(_) => Vec::new(),
            ChoiceOutcome::Advancing { text, .. } => {
                vec![Notice::success("Success! Moving forward...", text.as_str())]
            }
            ChoiceOutcome::Won { text } => vec![
                Notice::success("Success! Moving forward...", text.as_str()),
                Notice::success(
                    "🎉 Congratulations!",
                    "You've successfully pushed to production!",
                ),
            ],
            ChoiceOutcome::Lost { text } => {
                vec![Notice::error("Oh no! Development blocked!", text.as_str())]
            }
        }
    }
}
