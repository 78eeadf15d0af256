//! Deterministic platform for tests
//!
//! `ManualPlatform` keeps a virtual clock and a task queue. Sleeping
//! advances the clock instead of waiting, and spawned tasks only run when
//! the test calls [`ManualPlatform::run_until_idle`].

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::future::Future;
use std::rc::Rc;
use std::task::{Context, Poll};

use futures_util::task::noop_waker;

use crate::ports::outbound::{LocalTask, PlatformPort};

/// Upper bound on polls per `run_until_idle`, so a task that never becomes
/// ready fails the test instead of hanging it.
const MAX_POLLS: usize = 10_000;

#[derive(Default)]
pub struct ManualPlatform {
    now: Rc<Cell<u64>>,
    queue: RefCell<VecDeque<LocalTask>>,
    sleeps: Rc<RefCell<Vec<u64>>>,
}

impl ManualPlatform {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_now(&self, millis: u64) {
        self.now.set(millis);
    }

    pub fn advance(&self, millis: u64) {
        self.now.set(self.now.get() + millis);
    }

    /// Durations of every sleep that has been awaited, in order
    pub fn sleeps(&self) -> Vec<u64> {
        self.sleeps.borrow().clone()
    }

    pub fn pending_tasks(&self) -> usize {
        self.queue.borrow().len()
    }

    /// Poll queued tasks (including ones they spawn) until none are left.
    pub fn run_until_idle(&self) {
        let waker = noop_waker();
        let mut cx = Context::from_waker(&waker);
        let mut polls = 0;

        loop {
            let next = self.queue.borrow_mut().pop_front();
            let Some(mut task) = next else {
                break;
            };
            polls += 1;
            assert!(polls <= MAX_POLLS, "ManualPlatform: task never completed");
            if let Poll::Pending = task.as_mut().poll(&mut cx) {
                self.queue.borrow_mut().push_back(task);
            }
        }
    }
}

impl PlatformPort for ManualPlatform {
    fn now_millis(&self) -> u64 {
        self.now.get()
    }

    fn sleep_ms(&self, ms: u64) -> LocalTask {
        let now = Rc::clone(&self.now);
        let sleeps = Rc::clone(&self.sleeps);
        Box::pin(async move {
            sleeps.borrow_mut().push(ms);
            now.set(now.get() + ms);
        })
    }

    fn spawn_local(&self, task: LocalTask) {
        self.queue.borrow_mut().push_back(task);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sleeping_advances_the_virtual_clock() {
        let platform = Rc::new(ManualPlatform::new());
        platform.set_now(1_000);

        let sleep = platform.sleep_ms(250);
        let inner = Rc::clone(&platform);
        platform.spawn_local(Box::pin(async move {
            sleep.await;
            let again = inner.sleep_ms(50);
            again.await;
        }));

        assert_eq!(platform.pending_tasks(), 1);
        platform.run_until_idle();

        assert_eq!(platform.now_millis(), 1_300);
        assert_eq!(platform.sleeps(), vec![250, 50]);
        assert_eq!(platform.pending_tasks(), 0);
    }

    #[test]
    fn tasks_spawned_while_running_are_drained() {
        let platform = Rc::new(ManualPlatform::new());
        let hits = Rc::new(Cell::new(0));

        let inner = Rc::clone(&platform);
        let outer_hits = Rc::clone(&hits);
        platform.spawn_local(Box::pin(async move {
            outer_hits.set(outer_hits.get() + 1);
            let nested_hits = Rc::clone(&outer_hits);
            inner.spawn_local(Box::pin(async move {
                nested_hits.set(nested_hits.get() + 1);
            }));
        }));

        platform.run_until_idle();

        assert_eq!(hits.get(), 2);
    }
}
