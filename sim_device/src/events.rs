//! Bounded event queue.
//!
//! Overflow is reported in-band: when a push finds the queue full, the
//! newest slot is replaced by the overflow marker so the consumer learns
//! records were lost. The queue never grows past its capacity and never
//! turns overflow into an error return.

use host_types::EventRecord;
use std::collections::VecDeque;

/// Number of records the queue holds before overflowing.
pub const EVENT_QUEUE_CAPACITY: usize = 64;

/// FIFO of pending event records, drained destructively.
#[derive(Debug, Default)]
pub struct EventQueue {
    queue: VecDeque<EventRecord>,
}

impl EventQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a record, replacing the newest slot with the overflow
    /// marker when the queue is full.
    pub fn push(&mut self, record: EventRecord) {
        if self.queue.len() < EVENT_QUEUE_CAPACITY {
            self.queue.push_back(record);
        } else {
            self.queue.pop_back();
            self.queue.push_back(EventRecord::overflow());
        }
    }

    /// Removes and returns the oldest record.
    pub fn pop(&mut self) -> Option<EventRecord> {
        self.queue.pop_front()
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use host_types::GuiEventType;

    #[test]
    fn test_fifo_order() {
        let mut queue = EventQueue::new();
        queue.push(EventRecord::int(GuiEventType::GuiButton, 1));
        queue.push(EventRecord::int(GuiEventType::GuiButton, 2));

        assert_eq!(queue.pop().unwrap().as_number().unwrap(), host_types::EventNumber::Int(1));
        assert_eq!(queue.pop().unwrap().as_number().unwrap(), host_types::EventNumber::Int(2));
        assert!(queue.pop().is_none());
    }

    #[test]
    fn test_overflow_replaces_newest_with_marker() {
        let mut queue = EventQueue::new();
        for i in 0..EVENT_QUEUE_CAPACITY {
            queue.push(EventRecord::int(GuiEventType::GuiButton, i as i32));
        }
        queue.push(EventRecord::int(GuiEventType::GuiButton, 999));
        assert_eq!(queue.len(), EVENT_QUEUE_CAPACITY);

        // Oldest records survive untouched.
        assert_eq!(
            queue.pop().unwrap().as_number().unwrap(),
            host_types::EventNumber::Int(0)
        );
        // Drain to the end: the last record is the overflow marker.
        let mut last = None;
        while let Some(record) = queue.pop() {
            last = Some(record);
        }
        assert_eq!(
            last.unwrap().event_type(),
            GuiEventType::EventFifoOverflow
        );
    }
}
