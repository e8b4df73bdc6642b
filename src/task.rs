//! Single-result suspended computations.
//!
//! A [`Task`] owns one frame and is driven only by its caller: nothing runs
//! unless [`Task::resume`], [`Task::wait`], an outer `.await`, or one of the
//! [`concurrent`](crate::concurrent) combinators asks for a step.
//!
//! ```rust
//! use cotask::prelude::*;
//!
//! let mut sum: Task<i32> = task(async {
//!     suspend().await;
//!     Ok(6 + 7)
//! });
//!
//! assert!(!sum.done()?);
//! sum.resume()?;
//! assert!(sum.done()?);
//! assert_eq!(sum.wait()?, 13);
//! assert!(sum.is_empty());
//! # Ok::<(), cotask::Error<std::convert::Infallible>>(())
//! ```

use std::{
    convert::Infallible,
    fmt,
    future::Future,
    pin::Pin,
    task::{Context, Poll},
};

use tracing::trace;

use crate::{
    concurrent::Resumable,
    coroutine::Coroutine,
    error::{AccessError, Error},
    frame::Frame,
};

type TaskFrame<'a, T, E> = Frame<T, E, dyn Coroutine<Yield = (), Return = Result<T, E>> + 'a>;

/// When a task's body starts running.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Start {
    /// Run to the first suspension point during construction.
    #[default]
    Eager,
    /// Run nothing until the first resume.
    Lazy,
}

/// Handle to a computation that produces a single `Result<T, E>`.
///
/// The handle exclusively owns its frame. Dropping a handle that still holds
/// a frame discards the computation wherever it is paused, along with any
/// value or error it produced but nobody observed.
pub struct Task<'a, T, E = Infallible> {
    frame: Option<Box<TaskFrame<'a, T, E>>>,
}

impl<'a, T, E> Task<'a, T, E> {
    /// Take ownership of `body`, starting it according to `start`.
    pub fn new<C>(start: Start, body: C) -> Self
    where
        C: Coroutine<Yield = (), Return = Result<T, E>> + 'a,
    {
        trace!(?start, "task frame created");
        let mut frame: Box<TaskFrame<'a, T, E>> = Box::new(Frame::new(body));
        if start == Start::Eager {
            frame.step();
        }
        Task { frame: Some(frame) }
    }

    /// Whether the handle owns no frame.
    pub fn is_empty(&self) -> bool {
        self.frame.is_none()
    }

    /// Whether the body has finished with a value or an error.
    pub fn done(&self) -> Result<bool, AccessError> {
        Ok(self.frame()?.is_done())
    }

    /// Run one continuation step; does nothing once the task is done.
    pub fn resume(&mut self) -> Result<(), AccessError> {
        self.frame_mut()?.step();
        Ok(())
    }

    /// Drive the task to completion and consume its outcome.
    ///
    /// The handle is empty afterwards whether the body succeeded or failed,
    /// so a second call reports [`AccessError::Empty`].
    pub fn wait(&mut self) -> Result<T, Error<E>> {
        let mut frame = self.frame.take().ok_or(AccessError::Empty)?;
        loop {
            if let Some(outcome) = frame.slot.take() {
                return outcome.map_err(Error::Failed);
            }
            frame.step();
        }
    }

    /// Same as [`wait`](Task::wait).
    pub fn get(&mut self) -> Result<T, Error<E>> {
        self.wait()
    }

    fn frame(&self) -> Result<&TaskFrame<'a, T, E>, AccessError> {
        self.frame.as_deref().ok_or(AccessError::Empty)
    }

    fn frame_mut(&mut self) -> Result<&mut TaskFrame<'a, T, E>, AccessError> {
        self.frame.as_deref_mut().ok_or(AccessError::Empty)
    }
}

impl<T, E> Default for Task<'_, T, E> {
    /// An empty handle.
    fn default() -> Self {
        Task { frame: None }
    }
}

impl<T, E> Drop for Task<'_, T, E> {
    fn drop(&mut self) {
        if let Some(frame) = &self.frame {
            trace!(done = frame.is_done(), "discarding unconsumed task frame");
        }
    }
}

impl<T, E> fmt::Debug for Task<'_, T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = match &self.frame {
            None => "empty",
            Some(frame) if frame.is_done() => "done",
            Some(_) => "suspended",
        };
        f.debug_struct("Task").field("state", &state).finish()
    }
}

/// Awaiting a task from another body steps it once per poll.
///
/// The outer body stays suspended until the inner task is done, then receives
/// its outcome; the inner handle is consumed exactly as by [`Task::wait`].
impl<T, E> Future for Task<'_, T, E> {
    type Output = Result<T, Error<E>>;

    fn poll(self: Pin<&mut Self>, _cx: &mut Context<'_>) -> Poll<Self::Output> {
        let task = self.get_mut();
        let Some(frame) = task.frame.as_deref_mut() else {
            return Poll::Ready(Err(AccessError::Empty.into()));
        };
        frame.step();
        if frame.is_done() {
            Poll::Ready(task.wait())
        } else {
            Poll::Pending
        }
    }
}

impl<T, E> Resumable for Task<'_, T, E> {
    fn done(&self) -> Result<bool, AccessError> {
        Task::done(self)
    }

    fn resume(&mut self) -> Result<(), AccessError> {
        Task::resume(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::build::{from_fn, lazy_task, suspend, task};
    use crate::Step;
    use std::cell::Cell;

    struct DropFlag<'a>(&'a Cell<bool>);

    impl Drop for DropFlag<'_> {
        fn drop(&mut self) {
            self.0.set(true);
        }
    }

    #[test]
    fn test_eager_task_without_suspension_is_done_at_construction() {
        let p = Cell::new(4);
        let mut co: Task<()> = task(async {
            p.set(44);
            Ok(())
        });

        assert_eq!(co.done(), Ok(true));
        assert_eq!(p.get(), 44);
        assert_eq!(co.wait(), Ok(()));
        assert_eq!(p.get(), 44);
    }

    #[test]
    fn test_lazy_task_runs_nothing_until_resumed() {
        let p = Cell::new(6);
        let mut co: Task<()> = lazy_task(async {
            p.set(77);
            Ok(())
        });

        assert_eq!(co.done(), Ok(false));
        assert_eq!(p.get(), 6);
        co.resume().unwrap();
        assert_eq!(co.done(), Ok(true));
        assert_eq!(p.get(), 77);
    }

    #[test]
    fn test_lazy_task_wait_runs_to_completion() {
        let p = Cell::new(6);
        let mut co: Task<()> = lazy_task(async {
            suspend().await;
            p.set(77);
            Ok(())
        });

        assert_eq!(p.get(), 6);
        co.wait().unwrap();
        assert_eq!(p.get(), 77);
    }

    #[test]
    fn test_wait_returns_value() {
        let add = |a: i32, b: i32| -> Task<'static, i32> { task(async move { Ok(a + b) }) };
        assert_eq!(add(6, 7).wait(), Ok(13));
    }

    #[test]
    fn test_failure_surfaces_in_every_flavour() {
        let eager: Task<i32, i32> = task(async { Err(6) });
        let lazy: Task<i32, i32> = lazy_task(async { Err(6) });
        let eager_void: Task<(), i32> = task(async { Err(6) });
        let lazy_void: Task<(), i32> = lazy_task(async { Err(6) });

        assert_eq!(eager.into_outcome(), Err(Error::Failed(6)));
        assert_eq!(lazy.into_outcome(), Err(Error::Failed(6)));
        assert_eq!(eager_void.into_outcome(), Err(Error::Failed(6)));
        assert_eq!(lazy_void.into_outcome(), Err(Error::Failed(6)));
    }

    impl<T, E> Task<'_, T, E> {
        fn into_outcome(mut self) -> Result<T, Error<E>> {
            self.wait()
        }
    }

    #[test]
    fn test_wait_is_single_shot() {
        let mut ok: Task<i32> = task(async { Ok(1) });
        assert_eq!(ok.wait(), Ok(1));
        assert_eq!(ok.wait(), Err(Error::Access(AccessError::Empty)));

        let mut failed: Task<i32, &str> = task(async { Err("no") });
        assert_eq!(failed.get(), Err(Error::Failed("no")));
        assert!(failed.is_empty());
        assert_eq!(failed.get(), Err(Error::Access(AccessError::Empty)));
    }

    #[test]
    fn test_empty_handle_rejects_every_operation() {
        let mut empty: Task<i32> = Task::default();

        assert!(empty.is_empty());
        assert_eq!(empty.done(), Err(AccessError::Empty));
        assert_eq!(empty.resume(), Err(AccessError::Empty));
        assert_eq!(empty.wait(), Err(Error::Access(AccessError::Empty)));
    }

    #[test]
    fn test_resume_steps_once_and_is_idempotent_when_done() {
        let steps = Cell::new(0);
        let mut co: Task<i32> = lazy_task(async {
            steps.set(1);
            suspend().await;
            steps.set(2);
            Ok(steps.get() * 10)
        });

        co.resume().unwrap();
        assert_eq!((co.done(), steps.get()), (Ok(false), 1));
        co.resume().unwrap();
        assert_eq!((co.done(), steps.get()), (Ok(true), 2));
        co.resume().unwrap();
        co.resume().unwrap();
        assert_eq!((co.done(), steps.get()), (Ok(true), 2));
        assert_eq!(co.wait(), Ok(20));
    }

    #[test]
    fn test_step_closure_body() {
        let mut countdown = 3;
        let mut co: Task<&str> = Task::new(
            Start::Lazy,
            from_fn(move || {
                if countdown == 0 {
                    Step::Complete(Ok("zero"))
                } else {
                    countdown -= 1;
                    Step::Yielded(())
                }
            }),
        );

        for _ in 0..3 {
            co.resume().unwrap();
            assert_eq!(co.done(), Ok(false));
        }
        co.resume().unwrap();
        assert_eq!(co.done(), Ok(true));
        assert_eq!(co.wait(), Ok("zero"));
    }

    #[test]
    fn test_take_leaves_moved_from_handle_empty() {
        let mut source: Task<i32> = task(async { Ok(5) });
        let mut target = std::mem::take(&mut source);

        assert!(source.is_empty());
        assert_eq!(source.done(), Err(AccessError::Empty));
        assert_eq!(target.wait(), Ok(5));
    }

    #[test]
    fn test_drop_discards_suspended_frame() {
        let dropped = Cell::new(false);
        let finished = Cell::new(false);
        let co: Task<()> = task(async {
            let _flag = DropFlag(&dropped);
            suspend().await;
            finished.set(true);
            Ok(())
        });

        assert!(!dropped.get());
        drop(co);
        assert!(dropped.get());
        assert!(!finished.get());
    }

    #[test]
    fn test_assignment_discards_previous_frame() {
        let dropped = Cell::new(false);
        let mut co: Task<i32> = task(async {
            let _flag = DropFlag(&dropped);
            suspend().await;
            Ok(1)
        });
        assert_eq!(co.done(), Ok(false));

        co = task(async { Ok(2) });
        assert!(dropped.get());
        assert_eq!(co.wait(), Ok(2));
    }

    #[test]
    fn test_drop_discards_unobserved_error() {
        let co: Task<(), &str> = task(async { Err("never seen") });
        assert_eq!(co.done(), Ok(true));
        drop(co);
    }

    #[test]
    fn test_reference_results() {
        let mut target = 1;
        let shared = String::from("kept");

        let shared_ref = &shared;
        let mut by_ref: Task<&String> = task(async move { Ok(shared_ref) });
        assert!(std::ptr::eq(by_ref.wait().unwrap(), &shared));

        let unique_ref = &mut target;
        let mut by_mut: Task<&mut i32> = lazy_task(async move { Ok(unique_ref) });
        *by_mut.wait().unwrap() += 41;
        drop(by_mut);
        assert_eq!(target, 42);
    }

    #[test]
    fn test_awaiting_task_suspends_outer_until_inner_is_done() {
        let inner: Task<i32> = lazy_task(async {
            suspend().await;
            suspend().await;
            Ok(5)
        });
        let mut outer: Task<i32, Error<Infallible>> = task(async move {
            let v = inner.await?;
            Ok(v * 2)
        });

        assert_eq!(outer.done(), Ok(false));
        outer.resume().unwrap();
        assert_eq!(outer.done(), Ok(false));
        outer.resume().unwrap();
        assert_eq!(outer.done(), Ok(true));
        assert_eq!(outer.wait(), Ok(10));
    }

    #[test]
    fn test_awaiting_done_task_completes_without_suspending() {
        let inner: Task<i32> = task(async { Ok(3) });
        let mut outer: Task<i32, Error<Infallible>> = task(async move { Ok(inner.await? + 1) });

        assert_eq!(outer.done(), Ok(true));
        assert_eq!(outer.wait(), Ok(4));
    }

    #[test]
    fn test_awaited_failure_propagates_to_outer() {
        let mut inner: Task<i32, &str> = task(async {
            suspend().await;
            Err("boom")
        });
        let mut outer: Task<i32, Error<&str>> = task(async { (&mut inner).await });

        assert_eq!(outer.wait(), Err(Error::Failed(Error::Failed("boom"))));
        drop(outer);
        assert!(inner.is_empty());
    }

    #[test]
    fn test_awaiting_empty_task_reports_empty_access() {
        let mut empty: Task<i32> = Task::default();
        let mut outer: Task<bool> = task(async { Ok((&mut empty).await.is_err()) });

        assert_eq!(outer.wait(), Ok(true));
    }

    #[test]
    fn test_debug_reports_state() {
        let mut co: Task<i32> = lazy_task(async { Ok(1) });
        assert_eq!(format!("{co:?}"), "Task { state: \"suspended\" }");
        co.resume().unwrap();
        assert_eq!(format!("{co:?}"), "Task { state: \"done\" }");
        co.wait().unwrap();
        assert_eq!(format!("{co:?}"), "Task { state: \"empty\" }");
    }
}
