use std::sync::Arc;
use std::task::{Context, Poll};

use futures::task::noop_waker;

use super::*;
use crate::wait::CompletionHandle;

#[test]
fn completes_exactly_once() {
  let node: CompletionNode<u32, ()> = CompletionNode::new();
  assert!(node.complete(Ok(1)));
  assert!(!node.complete(Ok(2)));

  let waker = noop_waker();
  let mut cx = Context::from_waker(&waker);
  assert_eq!(node.poll(&mut cx), Poll::Ready(Ok(1)));
}

#[test]
fn cancelled_node_rejects_completion() {
  let node: CompletionNode<u32, ()> = CompletionNode::new();
  node.cancel();
  assert!(!node.complete(Ok(1)));
}

#[test]
fn complete_with_skips_producer_when_cancelled() {
  let node: CompletionNode<u32, ()> = CompletionNode::new();
  node.cancel();
  let mut produced = false;
  assert!(!node.complete_with(|| {
    produced = true;
    Ok(9)
  }));
  assert!(!produced);
}

#[test]
fn poll_is_pending_until_completed() {
  let node: CompletionNode<u32, ()> = CompletionNode::new();
  let waker = noop_waker();
  let mut cx = Context::from_waker(&waker);
  assert_eq!(node.poll(&mut cx), Poll::Pending);
  assert!(node.complete(Err(())));
  assert_eq!(node.poll(&mut cx), Poll::Ready(Err(())));
}

#[test]
fn dropping_handle_cancels_node() {
  let node: Arc<CompletionNode<u32, ()>> = Arc::new(CompletionNode::new());
  let handle = CompletionHandle::new(node.clone());
  drop(handle);
  assert!(!node.complete(Ok(1)));
}
