//! The ways an operation can fail.
//!
//! Failures are never fatal: every public operation folds its [`OpError`] into an
//! `Error`-kind [`Message`] and hands back the unchanged structure.

use crate::message::Message;
use std::fmt;
use thiserror::Error;

/// The structure an operation was applied to. Used to word error messages.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Structure {
    Array,
    Stack,
    Queue,
    Deque,
    LinkedList,
    Bst,
    Heap,
    Tree,
    Graph,
}

impl fmt::Display for Structure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Structure::Array => "array",
            Structure::Stack => "stack",
            Structure::Queue => "queue",
            Structure::Deque => "deque",
            Structure::LinkedList => "linked list",
            Structure::Bst => "BST",
            Structure::Heap => "heap",
            Structure::Tree => "tree",
            Structure::Graph => "graph",
        };
        f.write_str(name)
    }
}

/// The error taxonomy, without the details.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    OutOfRange,
    EmptyStructure,
    NotFound,
    DuplicateIdentity,
    InvalidOperationForState,
}

/// An operation that could not be performed.
/// The `Display` text is what ends up in the user-visible message.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum OpError {
    #[error("Invalid index: {index}. Index must be between 0 and {max}.")]
    OutOfRange { index: isize, max: isize },

    #[error("Cannot {action} an empty {structure}.")]
    EmptyStructure {
        action: &'static str,
        structure: Structure,
    },

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    DuplicateIdentity(String),

    #[error("{0}")]
    InvalidOperationForState(String),
}

impl OpError {
    pub fn empty(action: &'static str, structure: Structure) -> OpError {
        OpError::EmptyStructure { action, structure }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            OpError::OutOfRange { .. } => ErrorKind::OutOfRange,
            OpError::EmptyStructure { .. } => ErrorKind::EmptyStructure,
            OpError::NotFound(_) => ErrorKind::NotFound,
            OpError::DuplicateIdentity(_) => ErrorKind::DuplicateIdentity,
            OpError::InvalidOperationForState(_) => ErrorKind::InvalidOperationForState,
        }
    }
}

impl From<OpError> for Message {
    fn from(err: OpError) -> Message {
        Message::error(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::message::MessageKind;

    #[test]
    fn error_texts() {
        let err = OpError::OutOfRange { index: 5, max: 0 };
        assert_eq!(
            err.to_string(),
            "Invalid index: 5. Index must be between 0 and 0."
        );
        assert_eq!(err.kind(), ErrorKind::OutOfRange);

        let err = OpError::empty("pop from", Structure::Stack);
        assert_eq!(err.to_string(), "Cannot pop from an empty stack.");

        let message: Message = OpError::NotFound("gone".into()).into();
        assert_eq!(message.kind, MessageKind::Error);
        assert_eq!(message.text, "gone");
    }
}
