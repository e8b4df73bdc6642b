//! The step-function trait behind every suspended computation.
//!
//! A [`Coroutine`] is the explicit form of a resumable function body: its
//! captured locals live in `self`, and [`Coroutine::resume`] runs the body from
//! its current suspension point to the next one (or to the end).
//!
//! [`Task`](crate::Task) and [`Generator`](crate::Generator) own a coroutine
//! and decide when it is resumed; user code only supplies one, usually through
//! the builders in [`build`](crate::build).
//!
//! ```rust
//! use cotask::prelude::*;
//!
//! let mut left = 2;
//! let mut body = from_fn(move || {
//!     if left == 0 {
//!         Step::Complete("finished")
//!     } else {
//!         left -= 1;
//!         Step::Yielded(left)
//!     }
//! });
//!
//! assert_eq!(body.resume(), Step::Yielded(1));
//! assert_eq!(body.resume(), Step::Yielded(0));
//! assert_eq!(body.resume(), Step::Complete("finished"));
//! ```

use either::Either;

use crate::step::Step;

/// A computation that advances one suspension point per [`resume`](Coroutine::resume).
pub trait Coroutine {
    /// Value handed to the driver at each suspension point
    type Yield;
    /// Value produced when the body runs to its end
    type Return;

    /// Run the body until it suspends or completes.
    ///
    /// Once `Complete` has been returned the body is finished; resuming it
    /// again is a caller error and implementations may panic.
    fn resume(&mut self) -> Step<Self::Yield, Self::Return>;

    /// Erase the concrete body type.
    fn boxed<'a>(self) -> Box<dyn Coroutine<Yield = Self::Yield, Return = Self::Return> + 'a>
    where
        Self: Sized + 'a,
    {
        Box::new(self)
    }
}

impl<C> Coroutine for Box<C>
where
    C: Coroutine + ?Sized,
{
    type Yield = C::Yield;
    type Return = C::Return;

    fn resume(&mut self) -> Step<Self::Yield, Self::Return> {
        (**self).resume()
    }
}

impl<C> Coroutine for &'_ mut C
where
    C: Coroutine + ?Sized,
{
    type Yield = C::Yield;
    type Return = C::Return;

    fn resume(&mut self) -> Step<Self::Yield, Self::Return> {
        (**self).resume()
    }
}

impl<L, R> Coroutine for Either<L, R>
where
    L: Coroutine,
    R: Coroutine<Yield = L::Yield, Return = L::Return>,
{
    type Yield = L::Yield;
    type Return = L::Return;

    fn resume(&mut self) -> Step<Self::Yield, Self::Return> {
        match self {
            Either::Left(l) => l.resume(),
            Either::Right(r) => r.resume(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::build::from_fn;

    fn countdown(mut n: u32) -> impl Coroutine<Yield = u32, Return = &'static str> {
        from_fn(move || {
            if n == 0 {
                Step::Complete("liftoff")
            } else {
                n -= 1;
                Step::Yielded(n)
            }
        })
    }

    fn first_step<C: Coroutine>(mut body: C) -> Step<C::Yield, C::Return> {
        body.resume()
    }

    #[test]
    fn test_resume_through_mut_ref() {
        let mut body = countdown(1);

        assert_eq!(first_step(&mut body), Step::Yielded(0));
        assert_eq!(body.resume(), Step::Complete("liftoff"));
    }

    #[test]
    fn test_boxed_keeps_state() {
        let mut body = countdown(2).boxed();

        assert_eq!(body.resume(), Step::Yielded(1));
        assert_eq!(body.resume(), Step::Yielded(0));
        assert_eq!(body.resume(), Step::Complete("liftoff"));
    }

    #[test]
    fn test_either_dispatches_to_chosen_body() {
        let pick = |short: bool| {
            if short {
                Either::Left(countdown(0))
            } else {
                Either::Right(from_fn(|| Step::<u32, &'static str>::Yielded(99)))
            }
        };

        assert_eq!(pick(true).resume(), Step::Complete("liftoff"));
        assert_eq!(pick(false).resume(), Step::Yielded(99));
    }
}
