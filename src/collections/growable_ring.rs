use core::cmp;

#[cfg(test)]
mod tests;

/// Growth multiplier applied when a full ring must accept another element.
pub const DEFAULT_GROWTH_FACTOR: usize = 2;

/// FIFO ring that grows instead of evicting.
///
/// Shares the slot-ring mechanics of [`RingBuffer`](crate::RingBuffer), but
/// when an enqueue would exceed the current capacity the ring multiplies its
/// capacity by the growth factor, copies every live element into a fresh
/// zero-based layout (preserving relative order), and resets `head` to 0.
/// No element is ever lost; growth is amortized O(1) per enqueue.
///
/// The backpressure queue uses this to hold pending-operation records in
/// arrival order while the bounded [`RingBuffer`](crate::RingBuffer)
/// enforces the queue's real capacity limit.
pub struct GrowableRing<E> {
  storage:       Box<[Option<E>]>,
  head:          usize,
  size:          usize,
  growth_factor: usize,
}

impl<E> GrowableRing<E> {
  /// Creates a ring with the given initial capacity and the default growth
  /// factor.
  #[must_use]
  pub fn new(capacity: usize) -> Self {
    Self::with_growth_factor(capacity, DEFAULT_GROWTH_FACTOR)
  }

  /// Creates a ring with an explicit growth factor. Factors below 2 are
  /// clamped to 2 so that growth always makes progress.
  #[must_use]
  pub fn with_growth_factor(capacity: usize, growth_factor: usize) -> Self {
    let mut storage = Vec::with_capacity(capacity);
    storage.resize_with(capacity, || None);
    Self { storage: storage.into_boxed_slice(), head: 0, size: 0, growth_factor: cmp::max(growth_factor, 2) }
  }

  /// Adds an element at the logical end, growing the ring if necessary.
  pub fn enqueue(&mut self, element: E) {
    if self.size == self.capacity() {
      self.grow();
    }
    let capacity = self.capacity();
    let tail = (self.head + self.size) % capacity;
    self.storage[tail] = Some(element);
    self.size += 1;
  }

  /// Removes and returns the oldest element, or `None` when empty.
  pub fn dequeue(&mut self) -> Option<E> {
    if self.size == 0 {
      return None;
    }
    let element = self.storage[self.head].take();
    self.head = (self.head + 1) % self.capacity();
    self.size -= 1;
    element
  }

  /// Returns a reference to the oldest element without removing it.
  #[must_use]
  pub fn peek(&self) -> Option<&E> {
    if self.size == 0 {
      None
    } else {
      self.storage[self.head].as_ref()
    }
  }

  /// Returns the number of stored elements.
  #[must_use]
  pub const fn len(&self) -> usize {
    self.size
  }

  /// Returns the current capacity.
  #[must_use]
  pub fn capacity(&self) -> usize {
    self.storage.len()
  }

  /// Indicates whether the ring holds no elements.
  #[must_use]
  pub const fn is_empty(&self) -> bool {
    self.size == 0
  }

  /// Returns the configured growth factor.
  #[must_use]
  pub const fn growth_factor(&self) -> usize {
    self.growth_factor
  }

  fn grow(&mut self) {
    let old_capacity = self.capacity();
    let next = cmp::max(old_capacity, 1).saturating_mul(self.growth_factor);
    let mut storage = Vec::with_capacity(next);
    storage.resize_with(next, || None);
    let mut storage = storage.into_boxed_slice();
    for index in 0..self.size {
      storage[index] = self.storage[(self.head + index) % old_capacity].take();
    }
    self.storage = storage;
    self.head = 0;
  }
}
