//! Single-fire completion primitives binding a parked caller to its result.

mod completion_handle;
mod completion_node;

pub(crate) use completion_handle::CompletionHandle;
pub(crate) use completion_node::CompletionNode;
