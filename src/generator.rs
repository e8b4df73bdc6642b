//! Lazily produced sequences and their single-pass cursors.
//!
//! A [`Generator`] starts suspended. [`Generator::begin`] hands its frame to
//! an [`Iter`] cursor and fetches the first element; each
//! [`Iter::advance`] fetches the next one. The frame is owned by exactly one
//! of them at a time, so a second `begin` only ever sees the end.
//!
//! ```rust
//! use cotask::prelude::*;
//!
//! let mut numbers: Generator<i32> = generator(|co| async move {
//!     for n in 1..=3 {
//!         co.yield_(n).await;
//!     }
//!     Ok(())
//! });
//!
//! let mut seen = Vec::new();
//! let mut it = numbers.begin();
//! while it != numbers.end() {
//!     seen.push(*it.get()?);
//!     it.advance()?;
//! }
//! assert_eq!(seen, [1, 2, 3]);
//! assert!(numbers.begin() == numbers.end());
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
    coroutine::Coroutine,
    error::{AccessError, Error},
    frame::Frame,
    iter::IntoIter,
    step::Step,
};

pub(crate) type GenFrame<'a, Y, E> =
    Frame<Y, E, dyn Coroutine<Yield = Option<Y>, Return = Result<(), E>> + 'a>;

/// Handle to a suspended computation that yields a sequence of `Y`.
///
/// The body yields `Some(y)` to produce an element and `None` to suspend
/// without producing one (for instance while awaiting a nested task). It
/// finishes with `Ok(())` at the end of the sequence or `Err(e)` on failure.
pub struct Generator<'a, Y, E = Infallible> {
    frame: Option<Box<GenFrame<'a, Y, E>>>,
}

impl<'a, Y, E> Generator<'a, Y, E> {
    /// Take ownership of `body` without running any of it.
    pub fn from_coroutine<C>(body: C) -> Self
    where
        C: Coroutine<Yield = Option<Y>, Return = Result<(), E>> + 'a,
    {
        trace!("generator frame created");
        Generator {
            frame: Some(Box::new(Frame::new(body))),
        }
    }

    /// Whether the frame has already been handed to an iterator.
    pub fn is_empty(&self) -> bool {
        self.frame.is_none()
    }

    /// Move the frame into a cursor positioned on the first element.
    ///
    /// Calling this again returns an end cursor: the frame cannot be
    /// duplicated.
    pub fn begin(&mut self) -> Iter<'a, Y, E> {
        Iter::new(self.frame.take())
    }

    /// The end cursor. Leaves the generator untouched.
    pub fn end(&self) -> Iter<'a, Y, E> {
        Iter::end()
    }
}

impl<Y, E> Default for Generator<'_, Y, E> {
    fn default() -> Self {
        Generator { frame: None }
    }
}

impl<Y, E> fmt::Debug for Generator<'_, Y, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Generator")
            .field("empty", &self.is_empty())
            .finish()
    }
}

impl<'a, Y, E> IntoIterator for Generator<'a, Y, E> {
    type Item = Result<Y, E>;
    type IntoIter = IntoIter<'a, Y, E>;

    fn into_iter(mut self) -> IntoIter<'a, Y, E> {
        IntoIter::new(self.frame.take())
    }
}

/// Single-pass cursor over a generator's elements.
///
/// A cursor either owns the frame (positioned on an element, or on the error
/// that ended the sequence) or is at the end. Only two end cursors compare
/// equal.
pub struct Iter<'a, Y, E = Infallible> {
    frame: Option<Box<GenFrame<'a, Y, E>>>,
}

impl<'a, Y, E> Iter<'a, Y, E> {
    fn new(frame: Option<Box<GenFrame<'a, Y, E>>>) -> Self {
        let mut iter = Iter { frame };
        while !iter.step() {}
        iter
    }

    /// A cursor that is already at the end.
    pub fn end() -> Self {
        Iter { frame: None }
    }

    pub fn is_end(&self) -> bool {
        self.frame.is_none()
    }

    /// The current element.
    ///
    /// If the sequence ended with an error, that error is returned once and
    /// the cursor moves to the end.
    pub fn get(&mut self) -> Result<&Y, Error<E>> {
        if self.frame.as_ref().is_some_and(|frame| frame.slot.is_error()) {
            return Err(self.take_error());
        }
        self.frame
            .as_deref()
            .and_then(|frame| frame.slot.value())
            .ok_or_else(|| AccessError::Empty.into())
    }

    /// Consume the cursor, moving the current element out.
    pub fn into_inner(mut self) -> Result<Y, Error<E>> {
        let frame = self.frame.as_deref_mut().ok_or(AccessError::Empty)?;
        match frame.slot.take() {
            Some(Ok(value)) => Ok(value),
            Some(Err(error)) => Err(Error::Failed(error)),
            None => Err(AccessError::Empty.into()),
        }
    }

    /// Begin advancing to the next element.
    ///
    /// Dropping the returned token finishes the advance on the spot; awaiting
    /// it from another body finishes it one step per resume of that body.
    pub fn advance(&mut self) -> Result<Advance<'_, 'a, Y, E>, AccessError> {
        if self.is_end() {
            return Err(AccessError::InvalidIncrement);
        }
        Ok(Advance {
            iter: self,
            polled: false,
            finished: false,
        })
    }

    fn take_error(&mut self) -> Error<E> {
        match self.frame.take().and_then(|mut frame| frame.slot.take()) {
            Some(Err(error)) => Error::Failed(error),
            _ => AccessError::Empty.into(),
        }
    }

    /// One step of an advance; `true` once the advance is over.
    fn step(&mut self) -> bool {
        let Some(frame) = self.frame.as_deref_mut() else {
            return true;
        };
        // the body already finished with an error
        if frame.slot.is_error() {
            self.frame = None;
            return true;
        }
        match frame.body.resume() {
            Step::Yielded(Some(value)) => {
                frame.slot.put_value(value);
                true
            }
            Step::Yielded(None) => false,
            Step::Complete(Ok(())) => {
                self.frame = None;
                true
            }
            Step::Complete(Err(error)) => {
                frame.slot.put_error(error);
                true
            }
        }
    }
}

impl<Y, E> PartialEq for Iter<'_, Y, E> {
    fn eq(&self, other: &Self) -> bool {
        self.is_end() && other.is_end()
    }
}

impl<Y, E> Drop for Iter<'_, Y, E> {
    fn drop(&mut self) {
        if self.frame.is_some() {
            trace!("discarding generator frame before the end of its sequence");
        }
    }
}

impl<Y, E> fmt::Debug for Iter<'_, Y, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = match &self.frame {
            None => "end",
            Some(frame) if frame.slot.is_error() => "failed",
            Some(_) => "active",
        };
        f.debug_struct("Iter").field("state", &state).finish()
    }
}

/// An advance of an [`Iter`] that is in progress.
///
/// Dropped without being awaited, it completes the advance synchronously.
/// Awaited from inside another body, it completes one step per poll and
/// keeps the outer body suspended in between; dropping it after the first
/// poll leaves the iterator wherever that body's last resume stopped it.
pub struct Advance<'i, 'a, Y, E> {
    iter: &'i mut Iter<'a, Y, E>,
    polled: bool,
    finished: bool,
}

impl<Y, E> Future for Advance<'_, '_, Y, E> {
    type Output = ();

    fn poll(self: Pin<&mut Self>, _cx: &mut Context<'_>) -> Poll<()> {
        let advance = self.get_mut();
        advance.polled = true;
        if !advance.finished {
            advance.finished = advance.iter.step();
        }
        if advance.finished {
            Poll::Ready(())
        } else {
            Poll::Pending
        }
    }
}

impl<Y, E> Drop for Advance<'_, '_, Y, E> {
    fn drop(&mut self) {
        // an awaited advance belongs to the awaiting body
        if self.polled {
            return;
        }
        while !self.finished {
            self.finished = self.iter.step();
        }
    }
}

impl<Y, E> fmt::Debug for Advance<'_, '_, Y, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Advance")
            .field("polled", &self.polled)
            .field("finished", &self.finished)
            .finish()
    }
}
