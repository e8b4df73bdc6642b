//! Terminal-outcome storage for a frame.

use std::mem;

/// Holds what a computation has produced so far.
///
/// A task's slot leaves `Pending` exactly once. A generator's slot is
/// overwritten in place by each element, and ends with an `Error` if the body
/// failed.
#[derive(Debug)]
pub(crate) enum Slot<T, E> {
    Pending,
    Value(T),
    Error(E),
}

impl<T, E> Default for Slot<T, E> {
    fn default() -> Self {
        Slot::Pending
    }
}

impl<T, E> Slot<T, E> {
    pub(crate) fn is_pending(&self) -> bool {
        matches!(self, Slot::Pending)
    }

    pub(crate) fn is_error(&self) -> bool {
        matches!(self, Slot::Error(_))
    }

    /// Record the final outcome of a body.
    pub(crate) fn complete(&mut self, outcome: Result<T, E>) {
        debug_assert!(self.is_pending(), "result slot completed twice");
        *self = match outcome {
            Ok(value) => Slot::Value(value),
            Err(error) => Slot::Error(error),
        };
    }

    /// Store the next element, reusing the current one's storage.
    pub(crate) fn put_value(&mut self, value: T) {
        match self {
            Slot::Value(current) => *current = value,
            _ => *self = Slot::Value(value),
        }
    }

    pub(crate) fn put_error(&mut self, error: E) {
        *self = Slot::Error(error);
    }

    pub(crate) fn value(&self) -> Option<&T> {
        match self {
            Slot::Value(value) => Some(value),
            _ => None,
        }
    }

    /// Move the outcome out, leaving `Pending` behind.
    pub(crate) fn take(&mut self) -> Option<Result<T, E>> {
        match mem::take(self) {
            Slot::Pending => None,
            Slot::Value(value) => Some(Ok(value)),
            Slot::Error(error) => Some(Err(error)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_complete_then_take() {
        let mut slot: Slot<i32, &str> = Slot::Pending;
        assert_eq!(slot.take(), None);

        slot.complete(Ok(3));
        assert_eq!(slot.value(), Some(&3));
        assert_eq!(slot.take(), Some(Ok(3)));
        assert!(slot.is_pending());
    }

    #[test]
    fn test_error_outcome() {
        let mut slot: Slot<i32, &str> = Slot::Pending;
        slot.complete(Err("bad"));
        assert!(slot.is_error());
        assert_eq!(slot.value(), None);
        assert_eq!(slot.take(), Some(Err("bad")));
    }

    #[test]
    fn test_put_value_overwrites_previous_element() {
        let mut slot: Slot<String, ()> = Slot::Pending;
        slot.put_value("one".into());
        slot.put_value("two".into());
        assert_eq!(slot.value().map(String::as_str), Some("two"));

        slot.put_error(());
        assert!(slot.is_error());
    }
}
