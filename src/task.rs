//! Units of work that are either already complete or running on a worker
//!
//! Background work goes to rayon's global pool when the `parallel` feature is
//! enabled, and to a dedicated thread otherwise.

use std::{
    any::Any,
    fmt,
    future::Future,
    panic::{self, AssertUnwindSafe},
    pin::Pin,
    task::{Context, Poll},
    thread,
};

use futures::channel::oneshot;
use log::trace;

use crate::error::TaskError;

/// Where the work behind a [Task] is evaluated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Schedule {
    /// On the calling thread, before the task is returned
    #[default]
    Inline,
    /// On a background worker
    Background,
}

/// The eventual, possibly empty, result of a unit of work.
///
/// Awaiting a task (or calling [Task::wait]) yields `Ok(None)` for a task
/// created empty, `Ok(Some(_))` once the work produced a value, and an error if
/// the work panicked, whether inline or on a worker.
#[must_use = "a task does nothing observable unless awaited"]
pub struct Task<U> {
    state: State<U>,
    completed_at_creation: bool,
}

enum State<U> {
    /// `None` once the outcome has been handed out
    Done(Option<Result<Option<U>, TaskError>>),
    Scheduled(oneshot::Receiver<thread::Result<U>>),
}

impl<U> Task<U> {
    /// An already-completed task holding `value`.
    pub fn ready(value: U) -> Self {
        Self::completed(Some(value))
    }

    /// An already-completed task with an empty result.
    pub fn empty() -> Self {
        Self::completed(None)
    }

    /// An already-completed task holding `value`, if any.
    pub fn completed(value: Option<U>) -> Self {
        Self::settled(Ok(value))
    }

    /// Runs `job` on the calling thread and wraps its outcome in an
    /// already-completed task.
    ///
    /// A panic inside `job` does not reach the caller, it is reported as
    /// [TaskError::Panicked] when the task is awaited.
    pub fn evaluate<F>(job: F) -> Self
    where
        F: FnOnce() -> Option<U>,
    {
        match panic::catch_unwind(AssertUnwindSafe(job)) {
            Ok(value) => Self::completed(value),
            Err(payload) => Self::settled(Err(TaskError::Panicked(panic_message(&*payload)))),
        }
    }

    fn settled(outcome: Result<Option<U>, TaskError>) -> Self {
        Self {
            state: State::Done(Some(outcome)),
            completed_at_creation: true,
        }
    }

    fn scheduled(rx: oneshot::Receiver<thread::Result<U>>) -> Self {
        Self {
            state: State::Scheduled(rx),
            completed_at_creation: false,
        }
    }

    /// Whether the task was completed without being scheduled.
    ///
    /// Stays true after the outcome has been taken out.
    pub fn is_ready(&self) -> bool {
        self.completed_at_creation
    }

    /// Blocks the current thread until the task's outcome is known.
    pub fn wait(self) -> Result<Option<U>, TaskError> {
        futures::executor::block_on(self)
    }
}

impl<U: Send + 'static> Task<U> {
    /// Submits `job` to a background worker.
    ///
    /// A panic inside `job` is caught on the worker and reported as
    /// [TaskError::Panicked] when the task is awaited.
    pub fn spawn<F>(job: F) -> Self
    where
        F: FnOnce() -> U + Send + 'static,
    {
        let (tx, rx) = oneshot::channel();
        let work = move || {
            let outcome = panic::catch_unwind(AssertUnwindSafe(job));
            // the task may have been dropped, nobody wants the outcome then
            let _ = tx.send(outcome);
        };

        trace!("submitting task to background worker");
        #[cfg(feature = "parallel")]
        rayon::spawn(work);
        #[cfg(not(feature = "parallel"))]
        let _detached = thread::spawn(work);

        Self::scheduled(rx)
    }

    /// Evaluates `job` according to `schedule`.
    pub fn schedule<F>(schedule: Schedule, job: F) -> Self
    where
        F: FnOnce() -> U + Send + 'static,
    {
        match schedule {
            Schedule::Inline => Self::evaluate(|| Some(job())),
            Schedule::Background => Self::spawn(job),
        }
    }
}

// `U` is never pinned
impl<U> Unpin for Task<U> {}

impl<U> Future for Task<U> {
    type Output = Result<Option<U>, TaskError>;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let this = &mut *self;
        match &mut this.state {
            State::Done(outcome) => match outcome.take() {
                Some(outcome) => Poll::Ready(outcome),
                None => panic!("`Task` polled after completion"),
            },
            State::Scheduled(rx) => match Pin::new(rx).poll(cx) {
                Poll::Pending => Poll::Pending,
                Poll::Ready(received) => {
                    this.state = State::Done(None);
                    Poll::Ready(match received {
                        Ok(Ok(value)) => Ok(Some(value)),
                        Ok(Err(payload)) => Err(TaskError::Panicked(panic_message(&*payload))),
                        Err(oneshot::Canceled) => Err(TaskError::Canceled),
                    })
                }
            },
        }
    }
}

impl<U> fmt::Debug for Task<U> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = match self.state {
            State::Done(Some(_)) => "Done",
            State::Done(None) => "Finished",
            State::Scheduled(_) => "Scheduled",
        };
        f.debug_struct("Task").field("state", &state).finish()
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(msg) = payload.downcast_ref::<&str>() {
        msg.to_string()
    } else if let Some(msg) = payload.downcast_ref::<String>() {
        msg.clone()
    } else {
        "unknown panic payload".to_string()
    }
}

#[cfg(test)]
mod tests {
    use futures::FutureExt;

    use super::*;

    #[test]
    fn completed_tasks_resolve_immediately() {
        let task = Task::ready(3);
        assert!(task.is_ready());
        assert_eq!(task.now_or_never(), Some(Ok(Some(3))));

        assert_eq!(Task::<i32>::empty().now_or_never(), Some(Ok(None)));
        assert_eq!(Task::completed(Some('x')).wait(), Ok(Some('x')));
    }

    #[test]
    fn stays_ready_after_outcome_is_taken() {
        let mut task = Task::ready(3);
        assert_eq!((&mut task).now_or_never(), Some(Ok(Some(3))));
        assert!(task.is_ready());
        assert_eq!(format!("{task:?}"), "Task { state: \"Finished\" }");
    }

    #[test]
    fn spawned_task_runs_off_thread() {
        let caller = thread::current().id();
        let task = Task::spawn(move || thread::current().id() != caller);
        assert!(!task.is_ready());
        assert_eq!(task.wait(), Ok(Some(true)));
    }

    #[test]
    fn inline_schedule_runs_on_caller() {
        let caller = thread::current().id();
        let task = Task::schedule(Schedule::Inline, move || thread::current().id() == caller);
        assert!(task.is_ready());
        assert_eq!(task.wait(), Ok(Some(true)));
    }

    #[test]
    fn background_panic_surfaces_on_wait() {
        let task = Task::<i32>::spawn(|| panic!("worker blew up"));
        assert_eq!(
            task.wait(),
            Err(TaskError::Panicked("worker blew up".to_string()))
        );

        let task = Task::<i32>::spawn(|| panic!("code {}", 7));
        assert_eq!(task.wait(), Err(TaskError::Panicked("code 7".to_string())));
    }

    #[test]
    fn inline_panic_is_held_by_task() {
        let task = Task::<i32>::schedule(Schedule::Inline, || panic!("inline failure"));
        assert!(task.is_ready());
        assert_eq!(
            task.now_or_never(),
            Some(Err(TaskError::Panicked("inline failure".to_string())))
        );

        let task = Task::<i32>::evaluate(|| panic!("code {}", 3));
        assert_eq!(task.wait(), Err(TaskError::Panicked("code 3".to_string())));
    }

    #[test]
    fn dropped_worker_reports_canceled() {
        let (tx, rx) = oneshot::channel::<thread::Result<i32>>();
        drop(tx);
        let task = Task::scheduled(rx);
        assert!(!task.is_ready());
        assert_eq!(task.wait(), Err(TaskError::Canceled));
    }

    #[test]
    fn debug_names_state() {
        assert_eq!(format!("{:?}", Task::ready(1)), "Task { state: \"Done\" }");
    }
}
