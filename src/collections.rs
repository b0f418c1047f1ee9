//! Ring-based storage primitives backing the backpressure queue.

mod growable_ring;
mod ring_buffer;

pub use growable_ring::{DEFAULT_GROWTH_FACTOR, GrowableRing};
pub use ring_buffer::RingBuffer;
