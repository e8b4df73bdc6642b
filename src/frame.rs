//! The owned unit of paused execution state.

use crate::{coroutine::Coroutine, slot::Slot, step::Step};

/// A coroutine body together with the slot its outcome lands in.
///
/// Handles keep frames as `Box<Frame<.., dyn Coroutine + 'a>>`: one
/// allocation per computation, moved between handles by pointer and never
/// shared. `body` stays the last field so the box can be unsized.
pub(crate) struct Frame<T, E, C: ?Sized> {
    pub(crate) slot: Slot<T, E>,
    pub(crate) body: C,
}

impl<T, E, C> Frame<T, E, C> {
    pub(crate) fn new(body: C) -> Self {
        Frame {
            slot: Slot::Pending,
            body,
        }
    }
}

impl<T, E, C> Frame<T, E, C>
where
    C: Coroutine<Yield = (), Return = Result<T, E>> + ?Sized,
{
    /// Whether the body has produced its value or error.
    pub(crate) fn is_done(&self) -> bool {
        !self.slot.is_pending()
    }

    /// One continuation step; a finished frame is left untouched.
    pub(crate) fn step(&mut self) {
        if self.is_done() {
            return;
        }
        if let Step::Complete(outcome) = self.body.resume() {
            self.slot.complete(outcome);
        }
    }
}
