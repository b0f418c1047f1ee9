use core::task::{Context, Poll, Waker};

use portable_atomic::{AtomicU8, Ordering};
use spin::Mutex;

#[cfg(test)]
mod tests;

const STATE_PENDING: u8 = 0;
const STATE_COMPLETED: u8 = 1;
const STATE_CANCELLED: u8 = 2;

/// Shared core of a single-fire completion: one suspended caller on one
/// side, the queue coordinator on the other.
///
/// Exactly one of `complete*` or `cancel` wins the state transition out of
/// pending. The result slot is written under its lock before completion is
/// observable, so a poller that sees the completed state always finds the
/// result.
#[derive(Debug)]
pub(crate) struct CompletionNode<V, E> {
  state:  AtomicU8,
  waker:  Mutex<Option<Waker>>,
  result: Mutex<Option<Result<V, E>>>,
}

impl<V, E> CompletionNode<V, E> {
  pub(crate) const fn new() -> Self {
    Self { state: AtomicU8::new(STATE_PENDING), waker: Mutex::new(None), result: Mutex::new(None) }
  }

  /// Completes the waiter with a lazily produced result.
  ///
  /// The producer runs only when the pending-to-completed transition wins,
  /// so a caller can pop a value from shared storage inside the closure
  /// without risking loss to an already-cancelled waiter. Returns whether
  /// the waiter was completed.
  pub(crate) fn complete_with<F>(&self, make: F) -> bool
  where
    F: FnOnce() -> Result<V, E>, {
    let mut result_guard = self.result.lock();
    if self.state.compare_exchange(STATE_PENDING, STATE_COMPLETED, Ordering::AcqRel, Ordering::Acquire).is_err() {
      return false;
    }
    *result_guard = Some(make());
    drop(result_guard);

    if let Some(waker) = self.waker.lock().take() {
      waker.wake();
    }
    true
  }

  /// Completes the waiter with an already-built result.
  pub(crate) fn complete(&self, result: Result<V, E>) -> bool {
    self.complete_with(|| result)
  }

  /// Marks the waiter as cancelled; a cancelled waiter can no longer be
  /// completed and is skipped by the coordinator.
  pub(crate) fn cancel(&self) {
    if self.state.compare_exchange(STATE_PENDING, STATE_CANCELLED, Ordering::AcqRel, Ordering::Acquire).is_ok() {
      self.waker.lock().take();
    }
  }

  /// Polls for the completion result, registering the caller's waker while
  /// still pending.
  pub(crate) fn poll(&self, cx: &mut Context<'_>) -> Poll<Result<V, E>> {
    match self.state.load(Ordering::Acquire) {
      | STATE_COMPLETED => self.take_result(),
      | STATE_CANCELLED => Poll::Pending,
      | _ => {
        *self.waker.lock() = Some(cx.waker().clone());
        // completion may have raced the waker store
        if self.state.load(Ordering::Acquire) == STATE_COMPLETED {
          self.take_result()
        } else {
          Poll::Pending
        }
      },
    }
  }

  fn take_result(&self) -> Poll<Result<V, E>> {
    match self.result.lock().take() {
      | Some(result) => Poll::Ready(result),
      | None => {
        debug_assert!(false, "completed waiter polled after its result was taken");
        Poll::Pending
      },
    }
  }
}

impl<V, E> Default for CompletionNode<V, E> {
  fn default() -> Self {
    Self::new()
  }
}
