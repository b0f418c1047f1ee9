use std::sync::Arc;

use spin::Mutex;
use tracing::trace;

use super::queue_core::{QueueCore, ReceiveStart, SendStart};
use crate::queue::QueueError;


/// Bounded, order-preserving queue that applies backpressure between
/// producers and consumers running at different speeds.
///
/// A `send` on a full buffer suspends the producer until a consumer frees
/// space; a `receive` on an empty queue suspends the consumer until a
/// producer delivers. A waiting receiver is always satisfied before a value
/// is placed in the buffer, and all hand-offs are strict FIFO, so consumers
/// observe values in exactly the order they were sent — whether a given
/// value passed through the buffer or was hand-delivered.
///
/// The handle is cheap to clone; all clones coordinate through the same
/// queue. Every operation acquires the queue's single mutex, decides, and
/// releases it before suspending, so state mutations are atomic with
/// respect to each other.
///
/// A capacity of zero makes the queue a pure rendezvous point: every `send`
/// suspends until a `receive` takes the value directly.
///
/// `close` permanently shuts the queue down: parked receivers drain any
/// remaining buffered values and then fail, parked senders fail with their
/// values handed back, and every later `send` is refused. Values buffered
/// before the close are still delivered to later `receive` calls. An
/// individual in-flight operation cannot be cancelled other than by
/// dropping its future; closing the whole queue is the only way to settle
/// waiters from outside.
pub struct BackpressureQueue<T> {
  core: Arc<Mutex<QueueCore<T>>>,
}

impl<T> Clone for BackpressureQueue<T> {
  fn clone(&self) -> Self {
    Self { core: self.core.clone() }
  }
}

impl<T> BackpressureQueue<T> {
  /// Creates a queue bounded at `capacity` buffered values.
  #[must_use]
  pub fn new(capacity: usize) -> Self {
    Self { core: Arc::new(Mutex::new(QueueCore::new(capacity))) }
  }

  /// Delivers a value to the queue, suspending while the buffer is full.
  ///
  /// If a receiver is already waiting the value bypasses the buffer and
  /// goes straight to it.
  ///
  /// # Errors
  ///
  /// Returns [`QueueError::Closed`] (with the value) when the queue is
  /// already closed, or [`QueueError::ClosedWhileSending`] when the queue
  /// is closed while this send is parked.
  pub async fn send(&self, value: T) -> Result<(), QueueError<T>> {
    let started = self.core.lock().begin_send(value);
    match started {
      | SendStart::Delivered => Ok(()),
      | SendStart::Rejected(error) => Err(error),
      | SendStart::Parked(handle) => {
        trace!("send parked: buffer full");
        handle.await
      },
    }
  }

  /// Takes the next value, suspending while the queue is empty.
  ///
  /// # Errors
  ///
  /// Returns [`QueueError::Disconnected`] when the queue is closed and
  /// fully drained.
  pub async fn receive(&self) -> Result<T, QueueError<T>> {
    let started = self.core.lock().begin_receive();
    match started {
      | ReceiveStart::Ready(value) => Ok(value),
      | ReceiveStart::Rejected(error) => Err(error),
      | ReceiveStart::Parked(handle) => {
        trace!("receive parked: queue empty");
        handle.await
      },
    }
  }

  /// Non-suspending variant of [`send`](Self::send).
  ///
  /// # Errors
  ///
  /// Returns [`QueueError::Full`] (with the value) where `send` would have
  /// parked, and [`QueueError::Closed`] when the queue is closed.
  pub fn try_send(&self, value: T) -> Result<(), QueueError<T>> {
    self.core.lock().try_send(value)
  }

  /// Non-suspending variant of [`receive`](Self::receive).
  ///
  /// # Errors
  ///
  /// Returns [`QueueError::Empty`] where `receive` would have parked, and
  /// [`QueueError::Disconnected`] when the queue is closed and drained.
  pub fn try_receive(&self) -> Result<T, QueueError<T>> {
    self.core.lock().try_receive()
  }

  /// Closes the queue, settling every parked operation before returning.
  ///
  /// Idempotent: later calls are no-ops.
  pub fn close(&self) {
    let summary = self.core.lock().close();
    if let Some(summary) = summary {
      trace!(
        settled_receivers = summary.settled_receivers,
        failed_senders = summary.failed_senders,
        remaining = summary.remaining,
        "queue closed"
      );
    }
  }

  /// Number of buffered values (waiting records are not counted).
  #[must_use]
  pub fn len(&self) -> usize {
    self.core.lock().len()
  }

  /// The buffer capacity the queue was created with.
  #[must_use]
  pub fn capacity(&self) -> usize {
    self.core.lock().capacity()
  }

  /// Indicates whether no values are buffered.
  #[must_use]
  pub fn is_empty(&self) -> bool {
    self.core.lock().is_empty()
  }

  /// Indicates whether the buffer is at capacity.
  #[must_use]
  pub fn is_full(&self) -> bool {
    self.core.lock().is_full()
  }

  /// Indicates whether [`close`](Self::close) has been called.
  #[must_use]
  pub fn is_closed(&self) -> bool {
    self.core.lock().is_closed()
  }

  /// Indicates whether the queue is closed and fully drained.
  #[must_use]
  pub fn is_done(&self) -> bool {
    self.core.lock().is_done()
  }
}
