//! Bounded message queue
//!
//! Single-producer, single-consumer FIFO owned by the receiving task. Only the
//! partner task's `snd` pushes into it, only the owner's `rcv` pops from it.

use std::collections::VecDeque;

use super::task::TaskId;
use crate::vm::errors::{VMError, VMResult};

/// A bounded FIFO of pending messages.
///
/// Backed by a ring buffer; pushing past `capacity` is a fatal
/// [`VMError::QueueOverflow`] rather than a silent drop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageQueue {
    /// Task that owns (receives from) this queue
    owner: TaskId,
    /// Maximum number of pending messages
    capacity: usize,
    /// Pending messages, oldest first
    inner: VecDeque<i64>,
}

impl MessageQueue {
    /// Create an empty queue for `owner` holding at most `capacity` messages.
    pub fn new(
        owner: TaskId,
        capacity: usize,
    ) -> Self {
        Self {
            owner,
            capacity,
            inner: VecDeque::new(),
        }
    }

    /// Push a message to the back of the queue.
    #[inline]
    pub fn push(
        &mut self,
        value: i64,
    ) -> VMResult<()> {
        if self.inner.len() >= self.capacity {
            return Err(VMError::QueueOverflow {
                task: self.owner,
                capacity: self.capacity,
            });
        }
        self.inner.push_back(value);
        Ok(())
    }

    /// Pop the oldest message.
    #[inline]
    pub fn pop(&mut self) -> Option<i64> {
        self.inner.pop_front()
    }

    /// Get the number of pending messages.
    #[inline]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Check if the queue is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Maximum number of pending messages.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}
