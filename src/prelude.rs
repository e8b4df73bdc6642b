//! Commonly used imports
//!
//! Use `use cotask::prelude::*;` for quick access to the handles and the
//! functions that build them.

// Core types
pub use crate::{Coroutine, Generator, Start, Step, Task};

// Errors
pub use crate::{AccessError, Error};

// Most common constructors
pub use crate::build::{from_co, from_fn, from_future, generator, lazy_task, suspend, task, Co};

// Waiting, both the functions and the macros
pub use crate::{wait_all, wait_any};
