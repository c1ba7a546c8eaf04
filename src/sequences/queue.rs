//! First in, first out.

use super::*;

derive_sequence_wrapper! {
    /// A queue. Values are enqueued at the end and dequeued from the front.
    Queue, Structure::Queue, "Queue has been reset."
}

impl Queue {
    pub fn enqueue(&self, value: impl Into<Value>) -> Outcome<Queue> {
        let value = value.into();
        let message = Message::success(format!("Enqueued {} to the queue.", value));
        Outcome::new(Queue::from_seq(self.seq.push_back(value)), (), message)
    }

    /// Removes the front value, returning it as the output.
    pub fn dequeue(&self) -> Outcome<Queue, Option<Value>> {
        let res = match self.seq.pop_front() {
            Some((seq, dequeued)) => {
                let message = Message::success(format!("Dequeued {} from the queue.", dequeued));
                Ok((Queue::from_seq(seq), Some(dequeued), message))
            }
            None => Err(OpError::empty("dequeue from", Structure::Queue)),
        };
        Outcome::from_result(res, || (self.clone(), None))
    }

    pub fn peek(&self) -> Outcome<Queue, Option<Value>> {
        let res = match self.seq.first() {
            Some(front) => {
                let message = Message::info(format!("Front of queue is {}.", front));
                Ok((self.clone(), Some(front.clone()), message))
            }
            None => Err(OpError::empty("peek", Structure::Queue)),
        };
        Outcome::from_result(res, || (self.clone(), None))
    }
}
