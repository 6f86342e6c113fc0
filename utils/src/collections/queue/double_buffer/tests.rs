use std::collections::VecDeque;
use std::rc::Rc;

use super::*;

#[test]
fn test_enqueue_dequeue_in_order() {
  let mut queue = DoubleBuffer::new(2);
  for i in 1..=10 {
    queue.enqueue(i);
  }
  for i in 1..=10 {
    assert_eq!(queue.dequeue(), Some(i));
  }
  assert_eq!(queue.dequeue(), None);
  assert_eq!(queue.dequeue_or_default(), (0, false));
}

#[test]
fn test_dequeue_on_empty_leaves_state_untouched() {
  let mut queue = DoubleBuffer::<i32>::new(1);
  assert_eq!(queue.dequeue(), None);
  assert_eq!(queue.dequeue_or_default(), (0, false));
  assert_eq!((queue.head, queue.tail), (0, 0));
  assert_eq!(queue.capacity(), 2);

  queue.enqueue(42);
  assert_eq!(queue.dequeue_or_default(), (42, true));
  assert_eq!(queue.dequeue_or_default(), (0, false));
}

#[test]
fn test_swap_and_grow_preserve_order() {
  let mut queue = DoubleBuffer::new(2);
  for i in 1..=5 {
    queue.enqueue(i);
  }
  // two slots in primary, two in secondary, one appended
  assert_eq!(queue.secondary.len(), 3);
  assert_eq!(queue.len(), 5);

  assert_eq!(queue.dequeue(), Some(1));
  assert_eq!(queue.dequeue(), Some(2));
  // head ran off primary: buffers exchanged
  assert_eq!(queue.primary.len(), 3);
  assert_eq!((queue.head, queue.tail), (0, 3));

  for i in 3..=5 {
    assert_eq!(queue.dequeue(), Some(i));
  }
  assert!(queue.is_empty());
  assert_eq!(queue.dequeue(), None);
}

#[test]
fn test_steady_state_does_not_grow() {
  let mut queue = DoubleBuffer::new(2);
  for i in 0..100 {
    queue.enqueue(i);
    assert_eq!(queue.dequeue(), Some(i));
  }
  assert_eq!(queue.capacity(), 4);
  assert!(queue.head < queue.primary.len());
}

#[test]
fn test_interleaved_operations_match_vec_deque() {
  let mut queue = DoubleBuffer::new(1);
  let mut model = VecDeque::new();
  let mut next = 0;
  for round in 0..200 {
    for _ in 0..(round % 7 + 1) {
      queue.enqueue(next);
      model.push_back(next);
      next += 1;
    }
    for _ in 0..(round % 5 + 1) {
      assert_eq!(queue.dequeue(), model.pop_front());
    }
    assert_eq!(queue.len(), model.len());
  }
  while let Some(expected) = model.pop_front() {
    assert_eq!(queue.dequeue(), Some(expected));
  }
  assert_eq!(queue.dequeue(), None);
}

#[test]
fn test_dequeue_releases_slot() {
  let tracked = Rc::new(());
  let mut queue = DoubleBuffer::new(4);
  queue.enqueue(tracked.clone());
  queue.enqueue(tracked.clone());
  assert_eq!(Rc::strong_count(&tracked), 3);

  drop(queue.dequeue());
  assert_eq!(Rc::strong_count(&tracked), 2);
  assert!(queue.primary[0].is_none());
}

#[test]
fn test_clean_up() {
  let tracked = Rc::new(());
  let mut queue = DoubleBuffer::new(1);
  for _ in 0..3 {
    queue.enqueue(tracked.clone());
  }
  let capacity = queue.capacity();

  queue.clean_up();
  assert_eq!(Rc::strong_count(&tracked), 1);
  assert_eq!(queue.len(), 0);
  assert_eq!(queue.capacity(), capacity);
  assert!(queue.dequeue().is_none());

  queue.enqueue(tracked.clone());
  assert!(queue.dequeue().is_some());
}

#[test]
fn test_zero_capacity_is_raised_to_minimum() {
  let queue = DoubleBuffer::<u8>::new(0);
  assert_eq!(queue.capacity_per_buffer(), MIN_CAPACITY_PER_BUFFER);
  assert_eq!(queue.capacity(), 2 * MIN_CAPACITY_PER_BUFFER);
}

#[test]
fn test_trait_access() {
  fn drain<Q: QueueReader<u32>>(queue: &mut Q) -> Vec<u32> {
    let mut out = Vec::new();
    while let Some(element) = queue.dequeue_mut() {
      out.push(element);
    }
    out
  }

  let mut queue: DoubleBuffer<u32> = DoubleBuffer::default();
  assert_eq!(queue.capacity_per_buffer(), DEFAULT_CAPACITY_PER_BUFFER);
  for i in 0..5 {
    queue.enqueue_mut(i);
  }
  assert_eq!(QueueBase::<u32>::len(&queue), 5);
  assert_eq!(drain(&mut queue), vec![0, 1, 2, 3, 4]);
  assert!(QueueBase::<u32>::is_empty(&queue));
}
