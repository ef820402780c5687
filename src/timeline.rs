//! Cancellable queue of typed tasks keyed by deadline.
//!
//! Time is a plain millisecond counter owned by the caller. Nothing here
//! sleeps, the owner pulls due tasks out with [`Timeline::pop_due`].

use std::collections::{BTreeMap, HashMap};

/// Handle to a scheduled task, used to cancel it.
#[derive(Hash, Eq, PartialEq, Ord, PartialOrd, Copy, Clone, Debug)]
pub struct TaskHandle {
    id: u64,
}

#[derive(Debug)]
pub struct Timeline<T> {
    // (deadline, id) keeps deadline order with FIFO ties
    queue: BTreeMap<(u64, u64), T>,
    deadlines: HashMap<u64, u64>,
    next_id: u64,
}

impl<T> Default for Timeline<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Timeline<T> {
    pub fn new() -> Self {
        Timeline {
            queue: BTreeMap::new(),
            deadlines: HashMap::new(),
            next_id: 0,
        }
    }

    pub fn schedule(&mut self, now: u64, delay: u64, task: T) -> TaskHandle {
        let id = self.next_id;
        self.next_id += 1;

        let deadline = now.saturating_add(delay);
        self.queue.insert((deadline, id), task);
        self.deadlines.insert(id, deadline);

        TaskHandle { id }
    }

    /// Returns false if the task already fired or was cancelled.
    pub fn cancel(&mut self, handle: TaskHandle) -> bool {
        match self.deadlines.remove(&handle.id) {
            Some(deadline) => self.queue.remove(&(deadline, handle.id)).is_some(),
            None => false,
        }
    }

    pub fn cancel_all(&mut self) {
        self.queue.clear();
        self.deadlines.clear();
    }

    /// Takes the earliest task whose deadline is at or before `now`.
    pub fn pop_due(&mut self, now: u64) -> Option<(u64, T)> {
        let &(deadline, id) = self.queue.keys().next()?;
        if deadline > now {
            return None;
        }

        self.deadlines.remove(&id);
        self.queue.remove(&(deadline, id)).map(|task| (deadline, task))
    }

    pub fn is_pending(&self, handle: TaskHandle) -> bool {
        self.deadlines.contains_key(&handle.id)
    }

    pub fn next_deadline(&self) -> Option<u64> {
        self.queue.keys().next().map(|&(deadline, _)| deadline)
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}
