use crate::{
  collections::{GrowableRing, RingBuffer},
  queue::{PendingReceive, PendingSend, QueueError},
  wait::CompletionHandle,
};

/// Initial capacity of each wait list; they grow on demand.
const INITIAL_WAITER_CAPACITY: usize = 16;

/// Mutable queue state, always manipulated under the owning queue's lock
/// so that no operation partially mutates it across a suspension point.
pub(super) struct QueueCore<T> {
  items:             RingBuffer<T>,
  pending_senders:   GrowableRing<PendingSend<T>>,
  pending_receivers: GrowableRing<PendingReceive<T>>,
  closed:            bool,
}

/// Immediate outcome of starting a `send`.
pub(super) enum SendStart<T> {
  /// Handed to a receiver or buffered; the send is complete.
  Delivered,
  /// Refused synchronously.
  Rejected(QueueError<T>),
  /// Parked on a full buffer; the caller awaits the handle.
  Parked(CompletionHandle<(), QueueError<T>>),
}

/// Immediate outcome of starting a `receive`.
pub(super) enum ReceiveStart<T> {
  /// A value was available.
  Ready(T),
  /// Refused synchronously.
  Rejected(QueueError<T>),
  /// Parked on an empty queue; the caller awaits the handle.
  Parked(CompletionHandle<T, QueueError<T>>),
}

/// What `close` settled, for the caller's trace event.
pub(super) struct CloseSummary {
  pub(super) settled_receivers: usize,
  pub(super) failed_senders:    usize,
  pub(super) remaining:         usize,
}

impl<T> QueueCore<T> {
  pub(super) fn new(capacity: usize) -> Self {
    Self {
      items:             RingBuffer::new(capacity),
      pending_senders:   GrowableRing::new(INITIAL_WAITER_CAPACITY),
      pending_receivers: GrowableRing::new(INITIAL_WAITER_CAPACITY),
      closed:            false,
    }
  }

  /// Non-suspending send: hand off, buffer, or refuse.
  pub(super) fn try_send(&mut self, value: T) -> Result<(), QueueError<T>> {
    if self.closed {
      return Err(QueueError::Closed(value));
    }
    match self.hand_to_waiting_receiver(value) {
      | Ok(()) => Ok(()),
      | Err(value) => {
        if self.items.is_full() {
          return Err(QueueError::Full(value));
        }
        self.items.insert(value);
        Ok(())
      },
    }
  }

  /// Non-suspending receive: buffered value, rendezvous take, or refuse.
  pub(super) fn try_receive(&mut self) -> Result<T, QueueError<T>> {
    if let Some(value) = self.items.remove() {
      self.promote_parked_sender();
      return Ok(value);
    }
    // Only a zero-capacity queue reaches a parked sender with nothing
    // buffered; the value moves straight across without touching the ring.
    if let Some(value) = self.take_from_parked_sender() {
      return Ok(value);
    }
    if self.closed {
      Err(QueueError::Disconnected)
    } else {
      Err(QueueError::Empty)
    }
  }

  pub(super) fn begin_send(&mut self, value: T) -> SendStart<T> {
    match self.try_send(value) {
      | Ok(()) => SendStart::Delivered,
      | Err(QueueError::Full(value)) => {
        let (record, handle) = PendingSend::new(value);
        self.pending_senders.enqueue(record);
        SendStart::Parked(handle)
      },
      | Err(error) => SendStart::Rejected(error),
    }
  }

  pub(super) fn begin_receive(&mut self) -> ReceiveStart<T> {
    match self.try_receive() {
      | Ok(value) => ReceiveStart::Ready(value),
      | Err(QueueError::Empty) => {
        let (record, handle) = PendingReceive::new();
        self.pending_receivers.enqueue(record);
        ReceiveStart::Parked(handle)
      },
      | Err(error) => ReceiveStart::Rejected(error),
    }
  }

  /// Marks the queue closed and settles every parked operation: receivers
  /// drain remaining buffered values oldest-first and then fail, senders
  /// fail with their value handed back. Idempotent; returns `None` when
  /// already closed.
  pub(super) fn close(&mut self) -> Option<CloseSummary> {
    if self.closed {
      return None;
    }
    self.closed = true;

    let mut settled_receivers = 0usize;
    while let Some(receiver) = self.pending_receivers.dequeue() {
      let completed = if self.items.is_empty() {
        receiver.complete.complete(Err(QueueError::Disconnected))
      } else {
        let items = &mut self.items;
        // the value is only popped once the receiver is known live
        receiver.complete.complete_with(|| match items.remove() {
          | Some(value) => Ok(value),
          | None => Err(QueueError::Disconnected),
        })
      };
      if completed {
        settled_receivers += 1;
      }
    }

    let mut failed_senders = 0usize;
    while let Some(sender) = self.pending_senders.dequeue() {
      let PendingSend { value, complete } = sender;
      if complete.complete(Err(QueueError::ClosedWhileSending(value))) {
        failed_senders += 1;
      }
    }

    Some(CloseSummary { settled_receivers, failed_senders, remaining: self.items.len() })
  }

  pub(super) fn len(&self) -> usize {
    self.items.len()
  }

  pub(super) fn capacity(&self) -> usize {
    self.items.capacity()
  }

  pub(super) fn is_empty(&self) -> bool {
    self.items.is_empty()
  }

  pub(super) fn is_full(&self) -> bool {
    self.items.is_full()
  }

  pub(super) fn is_closed(&self) -> bool {
    self.closed
  }

  pub(super) fn is_done(&self) -> bool {
    self.closed && self.items.is_empty()
  }

  /// Delivers `value` to the longest-waiting live receiver, skipping
  /// cancelled ones. Gives the value back when nobody is waiting.
  fn hand_to_waiting_receiver(&mut self, value: T) -> Result<(), T> {
    let mut slot = Some(value);
    while let Some(receiver) = self.pending_receivers.dequeue() {
      debug_assert!(slot.is_some());
      let delivered = receiver.complete.complete_with(|| match slot.take() {
        | Some(value) => Ok(value),
        | None => Err(QueueError::Disconnected),
      });
      if delivered {
        return Ok(());
      }
    }
    match slot.take() {
      | Some(value) => Err(value),
      | None => Ok(()),
    }
  }

  /// Moves the longest-waiting live sender's value into the slot freed by a
  /// removal, completing that sender's send. Cancelled senders forfeit
  /// their values.
  fn promote_parked_sender(&mut self) {
    while let Some(sender) = self.pending_senders.dequeue() {
      let PendingSend { value, complete } = sender;
      if complete.complete(Ok(())) {
        debug_assert!(!self.items.is_full());
        self.items.insert(value);
        return;
      }
    }
  }

  /// Takes a value directly from the longest-waiting live sender without
  /// touching the ring (zero-capacity hand-off).
  fn take_from_parked_sender(&mut self) -> Option<T> {
    while let Some(sender) = self.pending_senders.dequeue() {
      let PendingSend { value, complete } = sender;
      if complete.complete(Ok(())) {
        return Some(value);
      }
    }
    None
  }
}
