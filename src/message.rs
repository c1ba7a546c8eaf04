//! Outcome messages and the [`Outcome`] every operation returns.

use crate::error::{ErrorKind, OpError};
use log::{debug, info, warn};

/// How a message should be presented.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MessageKind {
    Info,
    Success,
    Error,
    Warning,
}

/// A human-readable description of what an operation did.
/// The core keeps no history of these; appending them to a log is up to the caller.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Message {
    pub text: String,
    pub kind: MessageKind,
}

impl Message {
    pub fn new(text: impl Into<String>, kind: MessageKind) -> Message {
        Message {
            text: text.into(),
            kind,
        }
    }

    pub fn info(text: impl Into<String>) -> Message {
        Message::new(text, MessageKind::Info)
    }

    pub fn success(text: impl Into<String>) -> Message {
        Message::new(text, MessageKind::Success)
    }

    pub fn error(text: impl Into<String>) -> Message {
        Message::new(text, MessageKind::Error)
    }

    pub fn warning(text: impl Into<String>) -> Message {
        Message::new(text, MessageKind::Warning)
    }

    pub fn is_error(&self) -> bool {
        self.kind == MessageKind::Error
    }

    fn log(&self) {
        match self.kind {
            MessageKind::Error => warn!("{}", self.text),
            MessageKind::Success | MessageKind::Warning => info!("{}", self.text),
            MessageKind::Info => debug!("{}", self.text),
        }
    }
}

/// The result of one operation: the structure after the operation
/// (unchanged if it failed), the operation's output, and a message describing it.
///
/// `output` is whatever the operation produces besides the new state:
/// the removed value, the peeked value, whether a value was found, and so on.
/// Mutations with nothing else to report use `()`.
#[derive(destructure, Clone, Debug)]
pub struct Outcome<S, R = ()> {
    pub state: S,
    pub output: R,
    pub message: Message,
    error: Option<ErrorKind>,
}

impl<S, R> Outcome<S, R> {
    /// A successful outcome. The message is logged once here.
    pub fn new(state: S, output: R, message: Message) -> Outcome<S, R> {
        message.log();
        Outcome {
            state,
            output,
            message,
            error: None,
        }
    }

    /// A failed outcome. `state` should be the untouched input state.
    pub fn failed(state: S, output: R, err: OpError) -> Outcome<S, R> {
        let kind = err.kind();
        let message: Message = err.into();
        message.log();
        Outcome {
            state,
            output,
            message,
            error: Some(kind),
        }
    }

    /// Folds the result of an internal step into an outcome.
    /// On failure `fallback` provides the unchanged state and the empty output.
    pub(crate) fn from_result(
        res: Result<(S, R, Message), OpError>,
        fallback: impl FnOnce() -> (S, R),
    ) -> Outcome<S, R> {
        match res {
            Ok((state, output, message)) => Outcome::new(state, output, message),
            Err(err) => {
                let (state, output) = fallback();
                Outcome::failed(state, output, err)
            }
        }
    }

    /// The error taxonomy kind, if the operation failed.
    pub fn error(&self) -> Option<ErrorKind> {
        self.error
    }

    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }

    /// Splits the outcome into the new state, the output and the message.
    pub fn into_parts(self) -> (S, R, Message) {
        let (state, output, message, _) = self.destructure();
        (state, output, message)
    }

    pub fn map_state<T>(self, f: impl FnOnce(S) -> T) -> Outcome<T, R> {
        let (state, output, message, error) = self.destructure();
        Outcome {
            state: f(state),
            output,
            message,
            error,
        }
    }
}

#[test]
fn outcome_parts() {
    let outcome = Outcome::new(vec![1], Some(1), Message::success("done"));
    assert!(outcome.is_ok());
    let (state, output, message) = outcome.into_parts();
    assert_eq!(state, vec![1]);
    assert_eq!(output, Some(1));
    assert_eq!(message.kind, MessageKind::Success);

    let outcome: Outcome<Vec<i32>, Option<i32>> =
        Outcome::failed(vec![], None, OpError::NotFound("nope".into()));
    assert_eq!(outcome.error(), Some(ErrorKind::NotFound));
    assert!(outcome.message.is_error());
}
