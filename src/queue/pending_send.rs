use std::sync::Arc;

use crate::{
  queue::QueueError,
  wait::{CompletionHandle, CompletionNode},
};

/// Wait-list record for a producer parked on a full buffer.
///
/// The value travels with the record; the completion only carries the
/// acknowledgment (or the close error, which returns the value).
pub(crate) struct PendingSend<T> {
  pub(crate) value:    T,
  pub(crate) complete: Arc<CompletionNode<(), QueueError<T>>>,
}

impl<T> PendingSend<T> {
  /// Creates the record plus the handle the suspended sender awaits.
  pub(crate) fn new(value: T) -> (Self, CompletionHandle<(), QueueError<T>>) {
    let node = Arc::new(CompletionNode::new());
    let handle = CompletionHandle::new(node.clone());
    (Self { value, complete: node }, handle)
  }
}
