// SPDX-License-Identifier: MPL-2.0
//! Deferred callbacks for auto-dismiss.
//!
//! The controller never sleeps or spawns anything itself. It hands a
//! [`TimerToken`] to a [`Scheduler`], and the scheduler delivers the token
//! back after the delay (in Iced, as a message on the UI thread).
//!
//! - [`TaskScheduler`] turns pending timers into an Iced [`Task`].
//! - [`ManualScheduler`] is a fake clock advanced by hand, for tests.

use iced::Task;
use std::time::Duration;

/// Identifies the presentation cycle a timer was scheduled for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerToken {
    generation: u64,
}

impl TimerToken {
    pub(crate) fn new(generation: u64) -> Self {
        Self { generation }
    }

    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// Schedules a token to be delivered back after `delay`.
pub trait Scheduler {
    fn schedule(&mut self, delay: Duration, token: TimerToken);
}

/// Collects timers until the host turns them into a [`Task`].
#[derive(Debug, Default)]
pub struct TaskScheduler {
    pending: Vec<(Duration, TimerToken)>,
}

impl TaskScheduler {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    /// Drains pending timers into a task that yields one message per timer.
    ///
    /// Call after every controller update and return the task from the host's
    /// `update` so Iced runs it.
    pub fn take_task<Message, F>(&mut self, map: F) -> Task<Message>
    where
        Message: Send + 'static,
        F: Fn(TimerToken) -> Message + Clone + Send + 'static,
    {
        if self.pending.is_empty() {
            return Task::none();
        }

        let tasks: Vec<Task<Message>> = self
            .pending
            .drain(..)
            .map(|(delay, token)| {
                let map = map.clone();
                Task::perform(
                    async move {
                        tokio::time::sleep(delay).await;
                        token
                    },
                    map,
                )
            })
            .collect();

        Task::batch(tasks)
    }
}

impl Scheduler for TaskScheduler {
    fn schedule(&mut self, delay: Duration, token: TimerToken) {
        self.pending.push((delay, token));
    }
}

/// Fake clock: timers fire only when [`ManualScheduler::advance`] passes them.
#[derive(Debug, Default)]
pub struct ManualScheduler {
    now: Duration,
    timers: Vec<(Duration, TimerToken)>,
}

impl ManualScheduler {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Time elapsed since the scheduler was created.
    #[must_use]
    pub fn now(&self) -> Duration {
        self.now
    }

    #[must_use]
    pub fn pending_count(&self) -> usize {
        self.timers.len()
    }

    /// Moves the clock forward and returns the tokens that came due, in
    /// deadline order.
    pub fn advance(&mut self, by: Duration) -> Vec<TimerToken> {
        self.now += by;
        let now = self.now;

        let mut due: Vec<(Duration, TimerToken)> = Vec::new();
        self.timers.retain(|&(deadline, token)| {
            if deadline <= now {
                due.push((deadline, token));
                false
            } else {
                true
            }
        });
        due.sort_by_key(|&(deadline, _)| deadline);
        due.into_iter().map(|(_, token)| token).collect()
    }
}

impl Scheduler for ManualScheduler {
    fn schedule(&mut self, delay: Duration, token: TimerToken) {
        self.timers.push((self.now + delay, token));
    }
}
