//! Round-robin waiting over a fixed set of handles.

use tracing::trace;

use crate::error::AccessError;

/// A handle that can be stepped and asked whether it has finished.
///
/// Implemented by [`Task`](crate::Task) for every result and error type, so
/// tasks of different types can share one `wait_all` call.
pub trait Resumable {
    fn done(&self) -> Result<bool, AccessError>;

    /// Run the computation up to its next suspension point.
    fn resume(&mut self) -> Result<(), AccessError>;
}

/// Resume every unfinished task once, in order. Returns whether all of them
/// were already done before the pass.
fn pass(tasks: &mut [&mut dyn Resumable]) -> Result<bool, AccessError> {
    let mut all_done = true;
    for task in tasks.iter_mut() {
        if !task.done()? {
            all_done = false;
            task.resume()?;
        }
    }
    Ok(all_done)
}

/// Block until every task is done.
///
/// Each pass resumes the unfinished tasks once in slice order. Results stay in
/// the tasks and are retrieved afterwards with [`Task::wait`](crate::Task::wait).
///
/// # Errors
///
/// [`AccessError::Empty`] if the slice is empty or any handle is empty.
///
/// ```rust
/// use std::cell::RefCell;
/// use cotask::prelude::*;
///
/// let entries = RefCell::new(Vec::new());
/// let log = &entries;
/// let step = move |name: &'static str| -> Task<usize> {
///     task(async move {
///         log.borrow_mut().push(name);
///         suspend().await;
///         log.borrow_mut().push(name);
///         Ok(name.len())
///     })
/// };
/// let mut short = step("ab");
/// let mut long = step("abcd");
///
/// wait_all!(short, long)?;
/// assert_eq!(*entries.borrow(), ["ab", "abcd", "ab", "abcd"]);
/// assert_eq!(short.wait(), Ok(2));
/// assert_eq!(long.wait(), Ok(4));
/// # Ok::<(), cotask::AccessError>(())
/// ```
pub fn wait_all(tasks: &mut [&mut dyn Resumable]) -> Result<(), AccessError> {
    if tasks.is_empty() {
        return Err(AccessError::Empty);
    }
    let mut passes = 0usize;
    while !pass(tasks)? {
        passes += 1;
    }
    trace!(tasks = tasks.len(), passes, "wait_all finished");
    Ok(())
}

/// Block until at least one task is done and return the lowest index among
/// the done ones.
///
/// At least one pass always runs, so every unfinished task is resumed at
/// least once even when another one was done on entry. Tasks still
/// unfinished after the deciding pass are left where it stopped them.
///
/// # Errors
///
/// [`AccessError::Empty`] if the slice is empty or any handle is empty.
pub fn wait_any(tasks: &mut [&mut dyn Resumable]) -> Result<usize, AccessError> {
    if tasks.is_empty() {
        return Err(AccessError::Empty);
    }
    let mut passes = 0usize;
    loop {
        pass(tasks)?;
        passes += 1;
        for (index, task) in tasks.iter().enumerate() {
            if task.done()? {
                trace!(tasks = tasks.len(), passes, index, "wait_any finished");
                return Ok(index);
            }
        }
    }
}

/// Wait for every listed task, see [`wait_all`].
///
/// Accepts handles of different result types.
#[macro_export]
macro_rules! wait_all {
    ($($task:expr),+ $(,)?) => {
        $crate::concurrent::wait_all(
            &mut [$(&mut $task as &mut dyn $crate::concurrent::Resumable),+]
        )
    };
}

/// Wait for the first listed task to finish, see [`wait_any`].
#[macro_export]
macro_rules! wait_any {
    ($($task:expr),+ $(,)?) => {
        $crate::concurrent::wait_any(
            &mut [$(&mut $task as &mut dyn $crate::concurrent::Resumable),+]
        )
    };
}
