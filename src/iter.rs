//! Standard iteration over a generator.
//!
//! Consuming a [`Generator`](crate::Generator) with `into_iter` gives an
//! ordinary [`Iterator`] of `Result<Y, E>`: each element arrives as `Ok`, a
//! failing body ends the iteration with one final `Err`.
//!
//! ```rust
//! use cotask::prelude::*;
//!
//! let squares: Generator<u32> = generator(|co| async move {
//!     for n in 1..=4 {
//!         co.yield_(n * n).await;
//!     }
//!     Ok(())
//! });
//!
//! let values: Result<Vec<_>, _> = squares.into_iter().collect();
//! assert_eq!(values, Ok(vec![1, 4, 9, 16]));
//! ```

use std::iter::FusedIterator;

use tracing::trace;

use crate::{generator::GenFrame, step::Step};

/// Owning iterator over a generator's elements.
pub struct IntoIter<'a, Y, E> {
    state: IntoIterState<'a, Y, E>,
}

enum IntoIterState<'a, Y, E> {
    Active(Box<GenFrame<'a, Y, E>>),
    Complete,
}

impl<'a, Y, E> IntoIter<'a, Y, E> {
    pub(crate) fn new(frame: Option<Box<GenFrame<'a, Y, E>>>) -> Self {
        let state = match frame {
            Some(frame) => IntoIterState::Active(frame),
            None => IntoIterState::Complete,
        };
        IntoIter { state }
    }

    /// Check if the body has finished, successfully or not.
    pub fn is_complete(&self) -> bool {
        matches!(self.state, IntoIterState::Complete)
    }
}

impl<Y, E> Iterator for IntoIter<'_, Y, E> {
    type Item = Result<Y, E>;

    fn next(&mut self) -> Option<Self::Item> {
        let IntoIterState::Active(frame) = &mut self.state else {
            return None;
        };
        loop {
            match frame.body.resume() {
                Step::Yielded(Some(value)) => return Some(Ok(value)),
                Step::Yielded(None) => {}
                Step::Complete(outcome) => {
                    self.state = IntoIterState::Complete;
                    return outcome.err().map(Err);
                }
            }
        }
    }
}

impl<Y, E> FusedIterator for IntoIter<'_, Y, E> {}

impl<Y, E> Drop for IntoIter<'_, Y, E> {
    fn drop(&mut self) {
        if !self.is_complete() {
            trace!("discarding generator frame before the end of its sequence");
        }
    }
}
