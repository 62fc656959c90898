//! Virtual clock and task scheduler.
//!
//! The game never reads wall-clock time. Hosts call
//! [`MemoryGame::advance`](crate::games::memory::MemoryGame::advance) and the
//! scheduler hands back every task that became due, one at a time, in due
//! order. Tasks due at the same instant fire in the order they were scheduled.
//!
//! Every task is stamped with the deal [`Generation`] it was scheduled under.
//! The scheduler does not interpret generations; the consumer drops tasks
//! whose generation is no longer current.
//!
//! ```
//! use std::time::Duration;
//! use memory_match::core::{Generation, Scheduler, Task};
//!
//! let mut clock = Scheduler::new();
//! let gen = Generation::initial();
//! clock.schedule_repeating(Duration::from_secs(1), gen, Task::Tick);
//!
//! let target = clock.now() + Duration::from_millis(2500);
//! let mut ticks = 0;
//! while let Some(fired) = clock.pop_due(target) {
//!     assert_eq!(fired.task, Task::Tick);
//!     ticks += 1;
//! }
//! clock.advance_to(target);
//!
//! assert_eq!(ticks, 2);
//! assert_eq!(clock.now(), Duration::from_millis(2500));
//! ```

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::entity::{Generation, InstanceId};

/// Handle for cancelling a scheduled task.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TaskId(pub u64);

/// Work the game schedules for later.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Task {
    /// One elapsed-time second.
    Tick,
    /// Flip a mismatched pair face down again.
    RevertMismatch {
        first: InstanceId,
        second: InstanceId,
    },
    /// Show the win summary.
    ShowWinPopup { elapsed_seconds: u32 },
}

/// A task that came due.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FiredTask {
    pub id: TaskId,
    pub generation: Generation,
    pub task: Task,
    /// Virtual time at which the task fired.
    pub at: Duration,
}

#[derive(Clone, Debug)]
struct Entry {
    id: TaskId,
    due: Duration,
    /// Insertion order, breaks ties between equal `due` values.
    seq: u64,
    period: Option<Duration>,
    generation: Generation,
    task: Task,
}

/// Single-threaded scheduler over virtual time.
#[derive(Clone, Debug, Default)]
pub struct Scheduler {
    now: Duration,
    next_id: u64,
    next_seq: u64,
    entries: Vec<Entry>,
}

impl Scheduler {
    /// Create a scheduler at virtual time zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current virtual time.
    #[must_use]
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Number of tasks waiting to fire.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.entries.len()
    }

    /// Check whether a task is still scheduled.
    #[must_use]
    pub fn is_scheduled(&self, id: TaskId) -> bool {
        self.entries.iter().any(|e| e.id == id)
    }

    /// Schedule a task to fire once after `delay`.
    pub fn schedule_once(&mut self, delay: Duration, generation: Generation, task: Task) -> TaskId {
        self.insert(delay, None, generation, task)
    }

    /// Schedule a task to fire every `period`, first after one period.
    ///
    /// Panics if `period` is zero.
    pub fn schedule_repeating(
        &mut self,
        period: Duration,
        generation: Generation,
        task: Task,
    ) -> TaskId {
        assert!(!period.is_zero(), "repeating task period must be non-zero");
        self.insert(period, Some(period), generation, task)
    }

    /// Cancel a scheduled task. Returns `false` if it was not scheduled.
    pub fn cancel(&mut self, id: TaskId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e.id != id);
        before != self.entries.len()
    }

    /// Remove and return the earliest task due at or before `until`.
    ///
    /// Virtual time moves forward to the task's due time. Repeating tasks are
    /// re-armed for their next period before being returned.
    pub fn pop_due(&mut self, until: Duration) -> Option<FiredTask> {
        let index = self
            .entries
            .iter()
            .enumerate()
            .filter(|(_, e)| e.due <= until)
            .min_by_key(|(_, e)| (e.due, e.seq))
            .map(|(i, _)| i)?;

        let fired = match self.entries[index].period {
            Some(period) => {
                let seq = self.bump_seq();
                let entry = &mut self.entries[index];
                let fired = FiredTask {
                    id: entry.id,
                    generation: entry.generation,
                    task: entry.task.clone(),
                    at: entry.due,
                };
                entry.due += period;
                entry.seq = seq;
                fired
            }
            None => {
                let entry = self.entries.swap_remove(index);
                FiredTask {
                    id: entry.id,
                    generation: entry.generation,
                    task: entry.task,
                    at: entry.due,
                }
            }
        };

        self.now = self.now.max(fired.at);
        Some(fired)
    }

    /// Move virtual time forward without firing anything.
    ///
    /// Call after draining [`pop_due`](Self::pop_due) for the same target.
    /// Time never moves backwards.
    pub fn advance_to(&mut self, target: Duration) {
        self.now = self.now.max(target);
    }

    fn insert(
        &mut self,
        delay: Duration,
        period: Option<Duration>,
        generation: Generation,
        task: Task,
    ) -> TaskId {
        let id = TaskId(self.next_id);
        self.next_id += 1;
        let seq = self.bump_seq();
        self.entries.push(Entry {
            id,
            due: self.now + delay,
            seq,
            period,
            generation,
            task,
        });
        id
    }

    fn bump_seq(&mut self) -> u64 {
        let seq = self.next_seq;
        self.next_seq += 1;
        seq
    }
}
