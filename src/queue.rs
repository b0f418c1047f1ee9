//! The backpressure coordinator and its error taxonomy.

mod backpressure_queue;
mod pending_receive;
mod pending_send;
mod queue_core;
mod queue_error;

pub use backpressure_queue::BackpressureQueue;
pub use queue_error::QueueError;

pub(crate) use pending_receive::PendingReceive;
pub(crate) use pending_send::PendingSend;
