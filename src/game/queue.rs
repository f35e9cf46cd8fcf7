//! First-in-first-out queue backed by a circular buffer
//!
//! The buffer doubles its capacity when full, so the queue never rejects an
//! element.

/// Slots allocated by a fresh queue
pub const INITIAL_QUEUE_CAPACITY: usize = 7;

/// Circular-buffer FIFO queue
#[derive(Debug, Clone)]
pub struct RingQueue<T> {
    slots: Vec<Option<T>>,
    /// Index of the front element
    start: usize,
    len: usize,
}

impl<T> Default for RingQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> RingQueue<T> {
    pub fn new() -> Self {
        Self::with_capacity(INITIAL_QUEUE_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        let mut slots = Vec::with_capacity(capacity.max(1));
        slots.resize_with(capacity.max(1), || None);
        Self {
            slots,
            start: 0,
            len: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub fn enqueue(&mut self, value: T) {
        if self.len == self.capacity() {
            self.grow();
        }
        let end = (self.start + self.len) % self.capacity();
        self.slots[end] = Some(value);
        self.len += 1;
    }

    pub fn dequeue(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        let value = self.slots[self.start].take();
        self.start = (self.start + 1) % self.capacity();
        self.len -= 1;
        value
    }

    pub fn peek(&self) -> Option<&T> {
        if self.is_empty() {
            return None;
        }
        self.slots[self.start].as_ref()
    }

    /// Elements from front to back
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        (0..self.len).filter_map(move |offset| {
            self.slots[(self.start + offset) % self.slots.len()].as_ref()
        })
    }

    /// Double the buffer, unwrapping the elements so the front lands at slot 0
    fn grow(&mut self) {
        let capacity = self.capacity();
        let mut slots = Vec::with_capacity(capacity * 2);
        for offset in 0..self.len {
            slots.push(self.slots[(self.start + offset) % capacity].take());
        }
        slots.resize_with(capacity * 2, || None);
        self.slots = slots;
        self.start = 0;
    }
}
