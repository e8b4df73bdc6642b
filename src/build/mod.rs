//! Building suspended computations
//!
//! Coroutine bodies come in three shapes: a step closure ([`from_fn`]), an
//! async block ([`from_future`]) and an async generator body ([`from_co`]).
//! The shorthand constructors at the bottom wrap them straight into handles.

mod co;
mod func;
mod future;

pub use co::{from_co, Co, FromCo, Yielding};
pub use func::{from_fn, ready, FromFn, Ready};
pub use future::{from_future, suspend, FromFuture, Suspend};

use std::future::Future;

use crate::{Generator, Start, Task};

/// Start an async body now, running it up to its first suspension point.
pub fn task<'a, T, E, F>(future: F) -> Task<'a, T, E>
where
    F: Future<Output = Result<T, E>> + 'a,
    T: 'a,
    E: 'a,
{
    Task::new(Start::Eager, from_future(future))
}

/// Wrap an async body without running any of it.
pub fn lazy_task<'a, T, E, F>(future: F) -> Task<'a, T, E>
where
    F: Future<Output = Result<T, E>> + 'a,
    T: 'a,
    E: 'a,
{
    Task::new(Start::Lazy, from_future(future))
}

/// Wrap an async generator body; no element is produced until requested.
pub fn generator<'a, Y, E, F, Fut>(f: F) -> Generator<'a, Y, E>
where
    F: FnOnce(Co<Y>) -> Fut,
    Fut: Future<Output = Result<(), E>> + 'a,
    Y: 'a,
    E: 'a,
{
    Generator::from_coroutine(from_co(f))
}
