use std::fmt;

use crate::draw::SelectionResult;
use crate::error::{FetchError, FetchErrorKind};
use crate::replies::Participant;

/// What the user is told after a draw.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DrawMessage {
    Winner(Participant),
    NoParticipants,
    Error(FetchErrorKind),
}

impl DrawMessage {
    pub fn is_error(&self) -> bool {
        matches!(self, DrawMessage::Error(_))
    }
}

impl From<SelectionResult> for DrawMessage {
    fn from(result: SelectionResult) -> Self {
        match result {
            SelectionResult::Winner(p) => DrawMessage::Winner(p),
            SelectionResult::NoParticipants => DrawMessage::NoParticipants,
        }
    }
}

impl From<&FetchError> for DrawMessage {
    fn from(err: &FetchError) -> Self {
        DrawMessage::Error(err.kind())
    }
}

impl fmt::Display for DrawMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DrawMessage::Winner(p) => write!(
                f,
                "The winner is: {} with the comment: {}",
                p.author_id, p.text
            ),
            DrawMessage::NoParticipants => f.write_str("No participants found."),
            DrawMessage::Error(kind) => write!(f, "An error occurred: {}", kind),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_winner_message() {
        let msg = DrawMessage::from(SelectionResult::Winner(Participant::new("u1", "hi")));
        assert_eq!(msg.to_string(), "The winner is: u1 with the comment: hi");
        assert!(!msg.is_error());
    }

    #[test]
    fn test_winner_message_with_empty_text() {
        let msg = DrawMessage::Winner(Participant::new("u9", ""));
        assert_eq!(msg.to_string(), "The winner is: u9 with the comment: ");
    }

    #[test]
    fn test_no_participants_message() {
        let msg = DrawMessage::from(SelectionResult::NoParticipants);
        assert_eq!(msg.to_string(), "No participants found.");
    }

    #[test]
    fn test_error_message_uses_kind_only() {
        let err = FetchError::InvalidQuery("conversation_id: is not valid".to_string());
        let msg = DrawMessage::from(&err);
        assert!(msg.is_error());
        assert_eq!(msg.to_string(), "An error occurred: invalid post reference");
    }
}
