use crate::{Coroutine, Step};

/// A coroutine whose step function is a closure.
///
/// The closure owns the computation's locals; each call is one continuation
/// step.
pub struct FromFn<F>(F);

impl<Y, R, F> Coroutine for FromFn<F>
where
    F: FnMut() -> Step<Y, R>,
{
    type Yield = Y;
    type Return = R;

    fn resume(&mut self) -> Step<Self::Yield, Self::Return> {
        (self.0)()
    }
}

/// Create a coroutine from a step closure.
///
/// ```rust
/// use cotask::prelude::*;
///
/// let mut flips = 0;
/// let mut toggle = from_fn(move || {
///     flips += 1;
///     if flips < 3 { Step::Yielded(flips) } else { Step::Complete(flips) }
/// });
/// assert_eq!(toggle.resume(), Step::Yielded(1));
/// assert_eq!(toggle.resume(), Step::Yielded(2));
/// assert_eq!(toggle.resume(), Step::Complete(3));
/// ```
pub fn from_fn<Y, R, F>(f: F) -> FromFn<F>
where
    F: FnMut() -> Step<Y, R>,
{
    FromFn(f)
}

/// A coroutine with no suspension points: completes on its first resume.
pub struct Ready<Y, R> {
    value: Option<R>,
    _yield: std::marker::PhantomData<fn() -> Y>,
}

/// Create a coroutine that completes with `value` as soon as it is resumed.
///
/// # Panics
///
/// Resuming it a second time panics.
pub fn ready<Y, R>(value: R) -> Ready<Y, R> {
    Ready {
        value: Some(value),
        _yield: std::marker::PhantomData,
    }
}

impl<Y, R> Coroutine for Ready<Y, R> {
    type Yield = Y;
    type Return = R;

    fn resume(&mut self) -> Step<Y, R> {
        match self.value.take() {
            Some(value) => Step::Complete(value),
            None => panic!("`Ready` resumed after completion"),
        }
    }
}
