//! Task-producing combinations of an [OptionPair]
//!
//! The plain forms evaluate on the calling thread and hand back an
//! already-completed [Task], holding the failure if the function panicked.
//! The `_async` forms submit the work to a background worker. When the presence
//! gate is not met every form returns an already-completed, empty task.

use crate::{
    pair::{OptionPair, Slots},
    presence::Gate,
    task::{Schedule, Task},
};

impl<T, R> OptionPair<T, R> {
    /// Combines both values with `f` on the calling thread.
    pub fn then_combine<U, F>(self, f: F) -> Task<U>
    where
        F: FnOnce(T, R) -> U,
    {
        Task::evaluate(|| self.reduce(f))
    }

    /// Applies `f` to the left value, if present, on the calling thread.
    pub fn then_apply_left<U, F>(self, f: F) -> Task<U>
    where
        F: FnOnce(T) -> U,
    {
        Task::evaluate(|| self.reduce_if_left_present(f))
    }

    /// Applies `f` to the left value on the calling thread when it is the
    /// only value of the pair.
    pub fn then_apply_if_only_left_present<U, F>(self, f: F) -> Task<U>
    where
        F: FnOnce(T) -> U,
    {
        Task::evaluate(|| self.reduce_if_only_left_present(f))
    }

    /// Applies `f` to the right value, if present, on the calling thread.
    pub fn then_apply_right<U, F>(self, f: F) -> Task<U>
    where
        F: FnOnce(R) -> U,
    {
        Task::evaluate(|| self.reduce_if_right_present(f))
    }

    /// Applies `f` to the right value on the calling thread when it is the
    /// only value of the pair.
    pub fn then_apply_if_only_right_present<U, F>(self, f: F) -> Task<U>
    where
        F: FnOnce(R) -> U,
    {
        Task::evaluate(|| self.reduce_if_only_right_present(f))
    }
}

impl<T, R> OptionPair<T, R>
where
    T: Send + 'static,
    R: Send + 'static,
{
    /// Combines both values with `f`, evaluated according to `schedule`.
    pub fn then_combine_on<U, F>(self, schedule: Schedule, f: F) -> Task<U>
    where
        U: Send + 'static,
        F: FnOnce(T, R) -> U + Send + 'static,
    {
        match self.into_slots() {
            Slots::Both(l, r) => Task::schedule(schedule, move || f(l, r)),
            Slots::Left(_) | Slots::Right(_) | Slots::Neither => Task::empty(),
        }
    }

    /// Applies `f` to the left value if it passes `gate`, evaluated according
    /// to `schedule`.
    pub fn then_apply_left_on<U, F>(self, gate: Gate, schedule: Schedule, f: F) -> Task<U>
    where
        U: Send + 'static,
        F: FnOnce(T) -> U + Send + 'static,
    {
        match self.gated_left(gate) {
            Some(l) => Task::schedule(schedule, move || f(l)),
            None => Task::empty(),
        }
    }

    /// Applies `f` to the right value if it passes `gate`, evaluated according
    /// to `schedule`.
    pub fn then_apply_right_on<U, F>(self, gate: Gate, schedule: Schedule, f: F) -> Task<U>
    where
        U: Send + 'static,
        F: FnOnce(R) -> U + Send + 'static,
    {
        match self.gated_right(gate) {
            Some(r) => Task::schedule(schedule, move || f(r)),
            None => Task::empty(),
        }
    }

    /// Combines both values with `f` on a background worker.
    pub fn then_combine_async<U, F>(self, f: F) -> Task<U>
    where
        U: Send + 'static,
        F: FnOnce(T, R) -> U + Send + 'static,
    {
        self.then_combine_on(Schedule::Background, f)
    }

    /// Applies `f` to the left value, if present, on a background worker.
    pub fn then_apply_left_async<U, F>(self, f: F) -> Task<U>
    where
        U: Send + 'static,
        F: FnOnce(T) -> U + Send + 'static,
    {
        self.then_apply_left_on(Gate::Present, Schedule::Background, f)
    }

    /// Applies `f` on a background worker when the left value is the only one.
    pub fn then_apply_if_only_left_present_async<U, F>(self, f: F) -> Task<U>
    where
        U: Send + 'static,
        F: FnOnce(T) -> U + Send + 'static,
    {
        self.then_apply_left_on(Gate::Only, Schedule::Background, f)
    }

    /// Applies `f` to the right value, if present, on a background worker.
    pub fn then_apply_right_async<U, F>(self, f: F) -> Task<U>
    where
        U: Send + 'static,
        F: FnOnce(R) -> U + Send + 'static,
    {
        self.then_apply_right_on(Gate::Present, Schedule::Background, f)
    }

    /// Applies `f` on a background worker when the right value is the only one.
    pub fn then_apply_if_only_right_present_async<U, F>(self, f: F) -> Task<U>
    where
        U: Send + 'static,
        F: FnOnce(R) -> U + Send + 'static,
    {
        self.then_apply_right_on(Gate::Only, Schedule::Background, f)
    }
}
