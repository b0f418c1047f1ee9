use core::{
  future::Future,
  pin::Pin,
  task::{Context, Poll},
};
use std::sync::Arc;

use super::CompletionNode;

/// Future side of a single-fire completion, owned by the suspended caller.
///
/// Dropping the handle cancels its node, so an abandoned `send` or `receive`
/// is skipped by the coordinator instead of being completed into the void.
pub(crate) struct CompletionHandle<V, E> {
  node: Arc<CompletionNode<V, E>>,
}

impl<V, E> CompletionHandle<V, E> {
  pub(crate) const fn new(node: Arc<CompletionNode<V, E>>) -> Self {
    Self { node }
  }
}

impl<V, E> Unpin for CompletionHandle<V, E> {}

impl<V, E> Future for CompletionHandle<V, E> {
  type Output = Result<V, E>;

  fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
    self.get_mut().node.poll(cx)
  }
}

impl<V, E> Drop for CompletionHandle<V, E> {
  fn drop(&mut self) {
    self.node.cancel();
  }
}
