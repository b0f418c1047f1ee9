#![deny(missing_docs)]

//! Bounded, order-preserving coordination queue with backpressure.
//!
//! The crate is built from three layered components:
//!
//! - [`RingBuffer`] — fixed-capacity FIFO storage that overwrites its oldest
//!   entry when a caller inserts into a full buffer.
//! - [`GrowableRing`] — the same ring mechanics, but growing (doubling by
//!   default) instead of overwriting, so no entry is ever lost. Holds the
//!   queue's pending-operation records.
//! - [`BackpressureQueue`] — the coordinator. One ring buffer for items, two
//!   growable rings for parked senders and parked receivers, and a closed
//!   flag. Producers that outrun consumers are suspended instead of
//!   overflowing the buffer; consumers that outrun producers are suspended
//!   instead of spinning.
//!
//! Hand-offs are strict FIFO: the longest-waiting sender is always matched to
//! the longest-waiting receiver, and buffered values drain in insertion
//! order, so consumers observe values in exactly the order they were sent.
//!
//! ```
//! use backflow_rs::BackpressureQueue;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let queue = BackpressureQueue::new(8);
//! let producer = queue.clone();
//!
//! tokio::spawn(async move {
//!   for n in 0..32u32 {
//!     producer.send(n).await.unwrap();
//!   }
//!   producer.close();
//! });
//!
//! let mut received = Vec::new();
//! while let Ok(n) = queue.receive().await {
//!   received.push(n);
//! }
//! assert_eq!(received, (0..32).collect::<Vec<_>>());
//! assert!(queue.is_done());
//! # }
//! ```

pub mod collections;
pub mod queue;
mod wait;

pub use collections::{DEFAULT_GROWTH_FACTOR, GrowableRing, RingBuffer};
pub use queue::{BackpressureQueue, QueueError};
