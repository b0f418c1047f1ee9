use super::*;

#[test]
fn grows_instead_of_dropping() {
  let mut ring = GrowableRing::new(8);
  for n in 0..16 {
    ring.enqueue(n);
  }
  assert_eq!(ring.len(), 16);
  assert_eq!(ring.capacity(), 16);

  let mut drained = Vec::new();
  while let Some(n) = ring.dequeue() {
    drained.push(n);
  }
  assert_eq!(drained, (0..16).collect::<Vec<_>>());
}

#[test]
fn preserves_order_across_interleaved_growth() {
  let mut ring = GrowableRing::new(8);
  for n in 0..16 {
    ring.enqueue(n);
  }
  for n in 0..8 {
    assert_eq!(ring.dequeue(), Some(n));
  }
  for n in 16..32 {
    ring.enqueue(n);
  }
  assert_eq!(ring.len(), 24);

  let mut drained = Vec::new();
  while let Some(n) = ring.dequeue() {
    drained.push(n);
  }
  assert_eq!(drained, (8..32).collect::<Vec<_>>());
}

#[test]
fn growth_copies_wrapped_layout_into_zero_based_layout() {
  let mut ring = GrowableRing::new(4);
  for n in 0..4 {
    ring.enqueue(n);
  }
  assert_eq!(ring.dequeue(), Some(0));
  assert_eq!(ring.dequeue(), Some(1));
  // head is now in the middle of the slots; the next enqueues wrap
  ring.enqueue(4);
  ring.enqueue(5);
  ring.enqueue(6); // forces growth while wrapped
  assert_eq!(ring.capacity(), 8);

  let mut drained = Vec::new();
  while let Some(n) = ring.dequeue() {
    drained.push(n);
  }
  assert_eq!(drained, vec![2, 3, 4, 5, 6]);
}

#[test]
fn custom_growth_factor() {
  let mut ring = GrowableRing::with_growth_factor(2, 4);
  assert_eq!(ring.growth_factor(), 4);
  ring.enqueue(0);
  ring.enqueue(1);
  ring.enqueue(2);
  assert_eq!(ring.capacity(), 8);
}

#[test]
fn growth_factor_below_two_is_clamped() {
  let ring: GrowableRing<u8> = GrowableRing::with_growth_factor(1, 0);
  assert_eq!(ring.growth_factor(), 2);
}

#[test]
fn zero_capacity_ring_grows_on_first_enqueue() {
  let mut ring = GrowableRing::new(0);
  ring.enqueue(42);
  assert_eq!(ring.len(), 1);
  assert_eq!(ring.capacity(), 2);
  assert_eq!(ring.peek(), Some(&42));
  assert_eq!(ring.dequeue(), Some(42));
  assert!(ring.is_empty());
}
