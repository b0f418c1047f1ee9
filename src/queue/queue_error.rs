use core::fmt;

/// Errors reported by [`BackpressureQueue`](crate::BackpressureQueue)
/// operations.
///
/// All variants are terminal: nothing is retried internally, and a closed
/// queue never reopens. Variants that reject a value hand it back to the
/// caller instead of dropping it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueueError<T> {
  /// `send` was called on a queue that is already closed. Queue state is
  /// unchanged; the rejected value is handed back.
  Closed(T),
  /// A `send` that was parked waiting for buffer space was settled by
  /// `close`. The undelivered value is handed back.
  ClosedWhileSending(T),
  /// `receive` found the queue closed with no buffered values remaining.
  Disconnected,
  /// `try_send` found the buffer full with no receiver waiting. Contains
  /// the rejected value; a suspending `send` would have parked instead.
  Full(T),
  /// `try_receive` found nothing buffered and no parked sender. A
  /// suspending `receive` would have parked instead.
  Empty,
}

impl<T> QueueError<T> {
  /// Extracts the value carried by variants that preserve it on failure.
  #[must_use]
  pub fn into_item(self) -> Option<T> {
    match self {
      | Self::Closed(item) | Self::ClosedWhileSending(item) | Self::Full(item) => Some(item),
      | Self::Disconnected | Self::Empty => None,
    }
  }
}

impl<T> fmt::Display for QueueError<T> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      | Self::Closed(_) => write!(f, "queue is closed"),
      | Self::ClosedWhileSending(_) => write!(f, "queue closed while a send was waiting for space"),
      | Self::Disconnected => write!(f, "queue is closed and fully drained"),
      | Self::Full(_) => write!(f, "queue buffer is full"),
      | Self::Empty => write!(f, "queue has no value to consume"),
    }
  }
}

impl<T: fmt::Debug> core::error::Error for QueueError<T> {}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn closed_hands_the_value_back() {
    let error = QueueError::Closed(42);
    assert_eq!(error.into_item(), Some(42));
  }

  #[test]
  fn closed_while_sending_hands_the_value_back() {
    let error = QueueError::ClosedWhileSending("pending");
    assert_eq!(error.into_item(), Some("pending"));
  }

  #[test]
  fn full_hands_the_value_back() {
    let error = QueueError::Full(7);
    assert_eq!(error.into_item(), Some(7));
  }

  #[test]
  fn receive_side_variants_carry_nothing() {
    assert_eq!(QueueError::<u8>::Disconnected.into_item(), None);
    assert_eq!(QueueError::<u8>::Empty.into_item(), None);
  }

  #[test]
  fn display_names_the_failure() {
    assert_eq!(QueueError::Closed(1).to_string(), "queue is closed");
    assert_eq!(QueueError::<u8>::Disconnected.to_string(), "queue is closed and fully drained");
  }
}
