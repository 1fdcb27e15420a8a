//! FIFO load-order queue with a single-flight batch flag.

use imagery_core::LoadOrder;
use std::collections::VecDeque;

/// An order taken off the queue, tagged with the generation it started in.
#[derive(Debug)]
pub struct ActiveBatch {
    pub order: LoadOrder,
    pub generation: u64,
}

/// Pending load orders plus the "batch active" flag.
///
/// The queue starts held: orders are accepted but none is handed out until
/// [`LoadOrderQueue::release`] is called at the end of startup.
#[derive(Debug, Default)]
pub struct LoadOrderQueue {
    orders: VecDeque<LoadOrder>,
    batch_active: bool,
    released: bool,
    generation: u64,
}

impl LoadOrderQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an order. Returns true when the caller should start a drain.
    pub fn enqueue(&mut self, order: LoadOrder) -> bool {
        self.orders.push_back(order);
        self.released && !self.batch_active
    }

    /// Put an order ahead of everything already pending.
    pub fn enqueue_front(&mut self, order: LoadOrder) -> bool {
        self.orders.push_front(order);
        self.released && !self.batch_active
    }

    /// Allow orders to be handed out. Returns true when a drain should start.
    pub fn release(&mut self) -> bool {
        self.released = true;
        !self.batch_active && !self.orders.is_empty()
    }

    pub fn is_released(&self) -> bool {
        self.released
    }

    /// Take the next order and mark a batch active.
    ///
    /// Returns `None` while held, while a batch is already active, or when
    /// nothing is pending.
    pub fn begin_next(&mut self) -> Option<ActiveBatch> {
        if !self.released || self.batch_active {
            return None;
        }
        let order = self.orders.pop_front()?;
        self.batch_active = true;
        Some(ActiveBatch {
            order,
            generation: self.generation,
        })
    }

    /// Mark the batch started in `generation` as finished.
    ///
    /// Returns false if the queue was cleared in the meantime, in which case
    /// the flag already belongs to nobody and is left alone.
    pub fn finish(&mut self, generation: u64) -> bool {
        if generation != self.generation {
            return false;
        }
        self.batch_active = false;
        true
    }

    /// Whether a batch started in `generation` is still current.
    pub fn is_current(&self, generation: u64) -> bool {
        self.batch_active && generation == self.generation
    }

    /// Drop every pending order and the active flag unconditionally.
    ///
    /// Returns the number of orders dropped.
    pub fn clear(&mut self) -> usize {
        let dropped = self.orders.len();
        self.orders.clear();
        self.batch_active = false;
        self.generation += 1;
        dropped
    }

    pub fn is_idle(&self) -> bool {
        self.orders.is_empty() && !self.batch_active
    }

    pub fn is_batch_active(&self) -> bool {
        self.batch_active
    }

    pub fn pending_orders(&self) -> usize {
        self.orders.len()
    }
}
