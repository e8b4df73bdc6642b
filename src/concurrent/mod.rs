//! Drive several tasks to completion on the current thread.
//!
//! Nothing here runs in parallel: [`wait_all`] and [`wait_any`] resume each
//! unfinished task once per pass, in argument order, so the suspensions of
//! all tasks interleave deterministically.

mod wait;

pub use wait::{wait_all, wait_any, Resumable};
