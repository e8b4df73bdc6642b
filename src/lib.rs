//! # Cotask: Suspendable Tasks and Generators
//!
//! Single-threaded computations that pause at suspension points and are moved
//! forward only by an explicit resume. There is no scheduler and no thread
//! pool: whoever holds a handle decides when its computation runs.
//!
//! ## Core Types
//!
//! - **[`Task`]**: a computation producing one value or one error. It starts
//!   [eagerly](Start::Eager) (runs to its first suspension at construction) or
//!   [lazily](Start::Lazy) (runs nothing until first resumed).
//! - **[`Generator`]**: a lazily produced sequence, read through a single-pass
//!   [`Iter`] cursor or as a standard iterator with `into_iter`.
//! - **[`Coroutine`]**: the resume protocol both handles are built on.
//!
//! ## Example
//!
//! ```
//! use cotask::prelude::*;
//!
//! let mut job: Task<i32> = lazy_task(async {
//!     suspend().await;
//!     Ok(21 * 2)
//! });
//!
//! assert_eq!(job.done(), Ok(false));
//! job.resume()?;
//! job.resume()?;
//! assert_eq!(job.done(), Ok(true));
//! assert_eq!(job.wait(), Ok(42));
//! # Ok::<(), cotask::AccessError>(())
//! ```
//!
//! ## Common Functions
//!
//! **Building:**
//! - [`task(fut)`](task()) / [`lazy_task(fut)`](lazy_task()) - Task from an async body
//! - [`generator(f)`](generator()) - Generator from a body given a yield handle [`Co`]
//! - [`from_fn(f)`](from_fn()) - Coroutine from a step closure
//! - [`suspend()`](suspend()) - Suspension point inside an async body
//!
//! **Waiting:**
//! - [`wait_all!`] / [`wait_any!`] - Round-robin over several tasks

pub mod build;
pub mod concurrent;
mod coroutine;
mod error;
mod frame;
pub mod generator;
pub mod iter;
pub mod prelude;
mod slot;
mod step;
pub mod task;

pub use build::{
    from_co, from_fn, from_future, generator, lazy_task, ready, suspend, task, Co, FromCo,
    FromFn, FromFuture, Ready, Suspend, Yielding,
};
pub use concurrent::{wait_all, wait_any, Resumable};
pub use coroutine::Coroutine;
pub use error::{AccessError, Error};
pub use generator::{Advance, Generator, Iter};
pub use iter::IntoIter;
pub use step::Step;
pub use task::{Start, Task};
