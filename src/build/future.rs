//! Async bodies as coroutines.
//!
//! An `async` block is a compiler-generated state machine; polling it once is
//! exactly one continuation step. Nothing here registers wakeups: the handle
//! that owns the coroutine decides when the next poll happens.

use std::{
    future::Future,
    pin::Pin,
    task::{Context, Poll, Waker},
};

use crate::{Coroutine, Step};

/// A coroutine that polls a future once per resume.
///
/// `Poll::Pending` is a suspension point and `Poll::Ready` completes the
/// coroutine with the future's output.
pub struct FromFuture<F> {
    future: Pin<Box<F>>,
}

/// Wrap a future so it can be driven by [`Coroutine::resume`].
///
/// ```rust
/// use cotask::prelude::*;
///
/// let mut body = from_future(async {
///     suspend().await;
///     7
/// });
/// assert_eq!(body.resume(), Step::Yielded(()));
/// assert_eq!(body.resume(), Step::Complete(7));
/// ```
pub fn from_future<F>(future: F) -> FromFuture<F>
where
    F: Future,
{
    FromFuture {
        future: Box::pin(future),
    }
}

impl<F> Coroutine for FromFuture<F>
where
    F: Future,
{
    type Yield = ();
    type Return = F::Output;

    fn resume(&mut self) -> Step<(), F::Output> {
        match poll_once(self.future.as_mut()) {
            Poll::Ready(output) => Step::Complete(output),
            Poll::Pending => Step::Yielded(()),
        }
    }
}

pub(crate) fn poll_once<F>(future: Pin<&mut F>) -> Poll<F::Output>
where
    F: Future + ?Sized,
{
    let mut cx = Context::from_waker(Waker::noop());
    future.poll(&mut cx)
}

/// Future returned by [`suspend`].
#[must_use = "a suspension point does nothing unless awaited"]
#[derive(Debug, Default)]
pub struct Suspend {
    suspended: bool,
}

/// A suspension point for async bodies: pending exactly once.
///
/// Inside a [`Task`](crate::Task) body, `suspend().await` hands control back
/// to whoever called `resume`.
pub fn suspend() -> Suspend {
    Suspend { suspended: false }
}

impl Future for Suspend {
    type Output = ();

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<()> {
        if self.suspended {
            Poll::Ready(())
        } else {
            self.suspended = true;
            // keeps the future well-behaved under a real executor
            cx.waker().wake_by_ref();
            Poll::Pending
        }
    }
}
