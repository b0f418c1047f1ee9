use std::sync::Arc;

use crate::{
  queue::QueueError,
  wait::{CompletionHandle, CompletionNode},
};

/// Wait-list record for a consumer parked on an empty buffer.
pub(crate) struct PendingReceive<T> {
  pub(crate) complete: Arc<CompletionNode<T, QueueError<T>>>,
}

impl<T> PendingReceive<T> {
  /// Creates the record plus the handle the suspended receiver awaits.
  pub(crate) fn new() -> (Self, CompletionHandle<T, QueueError<T>>) {
    let node = Arc::new(CompletionNode::new());
    let handle = CompletionHandle::new(node.clone());
    (Self { complete: node }, handle)
  }
}
