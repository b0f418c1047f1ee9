
/// Fixed-capacity FIFO storage over a ring of slots.
///
/// `size` values occupy the slots `[head, head + size) mod capacity`.
/// Inserting into a full buffer overwrites the logically oldest value and
/// advances `head`, so `insert` is total: it never fails and never grows the
/// allocation. Callers that must not lose values (the backpressure queue)
/// are responsible for never inserting while [`is_full`](Self::is_full)
/// reports `true`.
///
/// A zero-capacity buffer is permitted: it reports both empty and full, and
/// every insert discards its value immediately.
pub struct RingBuffer<T> {
  storage: Box<[Option<T>]>,
  head:    usize,
  size:    usize,
}

impl<T> RingBuffer<T> {
  /// Creates a buffer with the given fixed capacity.
  #[must_use]
  pub fn new(capacity: usize) -> Self {
    let mut storage = Vec::with_capacity(capacity);
    storage.resize_with(capacity, || None);
    Self { storage: storage.into_boxed_slice(), head: 0, size: 0 }
  }

  /// Adds a value at the logical end of the buffer.
  ///
  /// When the buffer is full the oldest value is silently evicted, which
  /// makes the buffer usable as a bounded most-recent-history log.
  pub fn insert(&mut self, value: T) {
    let capacity = self.capacity();
    if capacity == 0 {
      return;
    }
    if self.size == capacity {
      self.storage[self.head] = Some(value);
      self.head = (self.head + 1) % capacity;
    } else {
      let tail = (self.head + self.size) % capacity;
      self.storage[tail] = Some(value);
      self.size += 1;
    }
  }

  /// Removes and returns the oldest value, or `None` when empty.
  pub fn remove(&mut self) -> Option<T> {
    if self.size == 0 {
      return None;
    }
    let value = self.storage[self.head].take();
    self.head = (self.head + 1) % self.capacity();
    self.size -= 1;
    value
  }

  /// Returns a reference to the oldest value without removing it.
  #[must_use]
  pub fn peek(&self) -> Option<&T> {
    if self.size == 0 {
      None
    } else {
      self.storage[self.head].as_ref()
    }
  }

  /// Returns the number of stored values.
  #[must_use]
  pub const fn len(&self) -> usize {
    self.size
  }

  /// Returns the fixed capacity.
  #[must_use]
  pub fn capacity(&self) -> usize {
    self.storage.len()
  }

  /// Indicates whether the buffer holds no values.
  #[must_use]
  pub const fn is_empty(&self) -> bool {
    self.size == 0
  }

  /// Indicates whether the next insert would evict the oldest value.
  #[must_use]
  pub fn is_full(&self) -> bool {
    self.size == self.storage.len()
  }
}
