//! Double ended queue.

use super::*;

derive_sequence_wrapper! {
    /// A deque. The front is index `0`, the rear is the end of the sequence.
    Deque, Structure::Deque, "Deque has been reset."
}

impl Deque {
    pub fn add_front(&self, value: impl Into<Value>) -> Outcome<Deque> {
        let value = value.into();
        let message = Message::success(format!("Added {} to the front of the deque.", value));
        Outcome::new(Deque::from_seq(self.seq.push_front(value)), (), message)
    }

    pub fn add_rear(&self, value: impl Into<Value>) -> Outcome<Deque> {
        let value = value.into();
        let message = Message::success(format!("Added {} to the rear of the deque.", value));
        Outcome::new(Deque::from_seq(self.seq.push_back(value)), (), message)
    }

    pub fn remove_front(&self) -> Outcome<Deque, Option<Value>> {
        self.remove_end(self.seq.pop_front(), End::Front)
    }

    pub fn remove_rear(&self) -> Outcome<Deque, Option<Value>> {
        self.remove_end(self.seq.pop_back(), End::Rear)
    }

    pub fn peek_front(&self) -> Outcome<Deque, Option<Value>> {
        self.peek_end(self.seq.first(), End::Front)
    }

    pub fn peek_rear(&self) -> Outcome<Deque, Option<Value>> {
        self.peek_end(self.seq.last(), End::Rear)
    }

    fn remove_end(&self, popped: Option<(Sequence, Value)>, end: End) -> Outcome<Deque, Option<Value>> {
        let res = match popped {
            Some((seq, removed)) => {
                let message = Message::success(format!(
                    "Removed {} from the {} of the deque.",
                    removed,
                    end.name()
                ));
                Ok((Deque::from_seq(seq), Some(removed), message))
            }
            None => Err(OpError::empty(end.remove_action(), Structure::Deque)),
        };
        Outcome::from_result(res, || (self.clone(), None))
    }

    fn peek_end(&self, value: Option<&Value>, end: End) -> Outcome<Deque, Option<Value>> {
        let res = match value {
            Some(value) => {
                let message = Message::info(format!("{} of deque is {}.", end.title(), value));
                Ok((self.clone(), Some(value.clone()), message))
            }
            None => Err(OpError::empty(end.peek_action(), Structure::Deque)),
        };
        Outcome::from_result(res, || (self.clone(), None))
    }
}

#[derive(Clone, Copy)]
enum End {
    Front,
    Rear,
}

impl End {
    fn name(self) -> &'static str {
        match self {
            End::Front => "front",
            End::Rear => "rear",
        }
    }

    fn title(self) -> &'static str {
        match self {
            End::Front => "Front",
            End::Rear => "Rear",
        }
    }

    fn remove_action(self) -> &'static str {
        match self {
            End::Front => "remove from the front of",
            End::Rear => "remove from the rear of",
        }
    }

    fn peek_action(self) -> &'static str {
        match self {
            End::Front => "peek the front of",
            End::Rear => "peek the rear of",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn both_ends() {
        let deque = Deque::new().add_rear(2).state.add_front(1).state.add_rear(3).state;
        let values: Vec<_> = deque.iter().cloned().collect();
        assert_eq!(values, vec![Value::from(1), Value::from(2), Value::from(3)]);

        let outcome = deque.peek_front();
        assert_eq!(outcome.message.text, "Front of deque is 1.");
        let outcome = deque.peek_rear();
        assert_eq!(outcome.message.text, "Rear of deque is 3.");

        let (deque, front, _) = deque.remove_front().into_parts();
        assert_eq!(front, Some(Value::from(1)));
        let (deque, rear, message) = deque.remove_rear().into_parts();
        assert_eq!(rear, Some(Value::from(3)));
        assert_eq!(message.text, "Removed 3 from the rear of the deque.");
        assert_eq!(deque.len(), 1);
    }

    #[test]
    fn empty_deque() {
        let deque = Deque::new();
        assert_eq!(
            deque.remove_front().message.text,
            "Cannot remove from the front of an empty deque."
        );
        assert_eq!(
            deque.remove_rear().message.text,
            "Cannot remove from the rear of an empty deque."
        );
        assert_eq!(
            deque.peek_rear().message.text,
            "Cannot peek the rear of an empty deque."
        );
        assert!(deque.peek_front().output.is_none());
    }
}
