use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Error, Diagnostic, PartialEq, Eq)]
pub enum QueueError {
    #[error("dequeue from an empty queue")]
    Underflow,

    #[error("enqueue onto a full queue (capacity {capacity})")]
    Overflow { capacity: usize },

    #[error("flush needs {needed} slots but the output buffer only has {available}")]
    BufferTooSmall { needed: usize, available: usize },
}

/// A fixed-capacity FIFO of chars over caller-owned storage.
///
/// The queue never allocates; its capacity is the length of the borrowed
/// slice. Used as a scratch buffer when tokenizing `key:value` text one
/// character at a time.
#[derive(Debug)]
pub struct CharQueue<'a> {
    items: &'a mut [char],
    front: usize,
    len: usize,
}

impl<'a> CharQueue<'a> {
    /// Creates an empty queue over `storage`. Existing contents of the
    /// slice are ignored.
    pub fn new(storage: &'a mut [char]) -> Self {
        Self {
            items: storage,
            front: 0,
            len: 0,
        }
    }

    pub fn capacity(&self) -> usize {
        self.items.len()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn is_full(&self) -> bool {
        self.len == self.items.len()
    }

    /// Appends `value` at the rear of the queue.
    pub fn enqueue(&mut self, value: char) -> Result<(), QueueError> {
        if self.is_full() {
            return Err(QueueError::Overflow {
                capacity: self.capacity(),
            });
        }
        let rear = (self.front + self.len) % self.items.len();
        self.items[rear] = value;
        self.len += 1;
        Ok(())
    }

    /// Removes and returns the oldest queued char.
    pub fn dequeue(&mut self) -> Result<char, QueueError> {
        if self.is_empty() {
            return Err(QueueError::Underflow);
        }
        let value = self.items[self.front];
        self.front = (self.front + 1) % self.items.len();
        self.len -= 1;
        Ok(value)
    }

    /// Drains every queued char in FIFO order into `out`, writes a `'\0'`
    /// terminator if a slot remains, and resets the queue to empty.
    /// Returns the number of payload chars written (the terminator does
    /// not count).
    ///
    /// Fails with [`QueueError::BufferTooSmall`] before draining anything
    /// when `out` cannot hold the whole queue, so the queue is left
    /// untouched on failure.
    pub fn flush(&mut self, out: &mut [char]) -> Result<usize, QueueError> {
        if self.len > out.len() {
            return Err(QueueError::BufferTooSmall {
                needed: self.len,
                available: out.len(),
            });
        }
        let mut written = 0;
        while !self.is_empty() {
            out[written] = self.dequeue()?;
            written += 1;
        }
        if written < out.len() {
            out[written] = '\0';
        }
        self.reset();
        Ok(written)
    }

    /// Force-empties the queue without draining it.
    pub fn reset(&mut self) {
        self.front = 0;
        self.len = 0;
    }
}
