//! Yield handles for async generator bodies.

use std::{
    cell::Cell,
    fmt,
    future::Future,
    pin::Pin,
    rc::Rc,
    task::{Context, Poll},
};

use super::future::poll_once;
use crate::{Coroutine, Step};

/// Handle through which an async generator body yields elements.
///
/// The handle and the coroutine that owns the body share one element cell;
/// it never leaves the thread that created it.
pub struct Co<Y> {
    yielded: Rc<Cell<Option<Y>>>,
}

impl<Y> Co<Y> {
    /// Suspend the body until the next advance, producing `value`.
    ///
    /// Nothing is produced unless the returned future is awaited.
    pub fn yield_(&self, value: Y) -> Yielding<'_, Y> {
        Yielding {
            yielded: &self.yielded,
            value: Some(value),
        }
    }
}

/// Future returned by [`Co::yield_`].
///
/// Its first poll deposits the element and suspends; the second completes.
#[must_use = "an element is only produced when its yield is awaited"]
pub struct Yielding<'c, Y> {
    yielded: &'c Cell<Option<Y>>,
    value: Option<Y>,
}

// `value` is never pinned in place
impl<Y> Unpin for Yielding<'_, Y> {}

impl<Y> Future for Yielding<'_, Y> {
    type Output = ();

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<()> {
        let this = self.get_mut();
        match this.value.take() {
            Some(value) => {
                this.yielded.set(Some(value));
                cx.waker().wake_by_ref();
                Poll::Pending
            }
            None => Poll::Ready(()),
        }
    }
}

impl<Y> fmt::Debug for Yielding<'_, Y> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Yielding")
            .field("deposited", &self.value.is_none())
            .finish()
    }
}

impl<Y> fmt::Debug for Co<Y> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Co").finish_non_exhaustive()
    }
}

/// A generator body built from an async closure that receives a [`Co`].
///
/// A step that stops at `co.yield_(v).await` yields `Some(v)`; a step that
/// stops at any other pending await (a nested task, [`suspend`](super::suspend)) yields
/// `None`.
pub struct FromCo<Y, F> {
    yielded: Rc<Cell<Option<Y>>>,
    future: Pin<Box<F>>,
}

/// Build a generator body from an async closure.
///
/// ```rust
/// use cotask::prelude::*;
/// use std::convert::Infallible;
///
/// let mut body = from_co(|co| async move {
///     co.yield_(1).await;
///     co.yield_(2).await;
///     Ok::<(), Infallible>(())
/// });
/// assert_eq!(body.resume(), Step::Yielded(Some(1)));
/// assert_eq!(body.resume(), Step::Yielded(Some(2)));
/// assert_eq!(body.resume(), Step::Complete(Ok(())));
/// ```
pub fn from_co<Y, F, Fut>(f: F) -> FromCo<Y, Fut>
where
    F: FnOnce(Co<Y>) -> Fut,
    Fut: Future,
{
    let yielded = Rc::new(Cell::new(None));
    let co = Co {
        yielded: Rc::clone(&yielded),
    };
    FromCo {
        yielded,
        future: Box::pin(f(co)),
    }
}

impl<Y, F> Coroutine for FromCo<Y, F>
where
    F: Future,
{
    type Yield = Option<Y>;
    type Return = F::Output;

    fn resume(&mut self) -> Step<Option<Y>, F::Output> {
        match poll_once(self.future.as_mut()) {
            Poll::Ready(output) => Step::Complete(output),
            Poll::Pending => Step::Yielded(self.yielded.take()),
        }
    }
}
