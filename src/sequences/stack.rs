//! Last in, first out.

use super::*;

derive_sequence_wrapper! {
    /// A stack. The top of the stack is the end of the sequence.
    Stack, Structure::Stack, "Stack has been reset."
}

impl Stack {
    pub fn push(&self, value: impl Into<Value>) -> Outcome<Stack> {
        let value = value.into();
        let message = Message::success(format!("Pushed {} to the stack.", value));
        Outcome::new(Stack::from_seq(self.seq.push_back(value)), (), message)
    }

    /// Removes the top value, returning it as the output.
    pub fn pop(&self) -> Outcome<Stack, Option<Value>> {
        let res = match self.seq.pop_back() {
            Some((seq, popped)) => {
                let message = Message::success(format!("Popped {} from the stack.", popped));
                Ok((Stack::from_seq(seq), Some(popped), message))
            }
            None => Err(OpError::empty("pop from", Structure::Stack)),
        };
        Outcome::from_result(res, || (self.clone(), None))
    }

    /// Looks at the top value. The stack is returned unchanged.
    pub fn peek(&self) -> Outcome<Stack, Option<Value>> {
        let res = match self.seq.last() {
            Some(top) => {
                let message = Message::info(format!("Top of stack is {}.", top));
                Ok((self.clone(), Some(top.clone()), message))
            }
            None => Err(OpError::empty("peek", Structure::Stack)),
        };
        Outcome::from_result(res, || (self.clone(), None))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn push_then_pop_restores() {
        let stack: Stack = vec![1, 2].into_iter().collect();
        let pushed = stack.push("top").state;
        assert_eq!(pushed.peek().output, Some(Value::from("top")));

        let (state, popped, message) = pushed.pop().into_parts();
        assert_eq!(popped, Some(Value::from("top")));
        assert_eq!(message.text, "Popped top from the stack.");
        assert_eq!(state, stack);
    }

    #[test]
    fn empty_stack() {
        let stack = Stack::new();
        let outcome = stack.pop();
        assert_eq!(outcome.error(), Some(ErrorKind::EmptyStructure));
        assert_eq!(outcome.message.text, "Cannot pop from an empty stack.");
        assert_eq!(outcome.output, None);

        let outcome = stack.peek();
        assert_eq!(outcome.message.text, "Cannot peek an empty stack.");
        assert!(outcome.state.is_empty());
    }
}
