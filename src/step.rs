/// Outcome of running a suspended computation for one continuation step.
///
/// A step either reaches a suspension point, handing `Y` back to the driver,
/// or runs the body to its end and hands back the final `R`.
///
/// # Examples
///
/// ```rust
/// use cotask::Step;
///
/// let paused: Step<u8, &str> = Step::Yielded(1);
/// let finished: Step<u8, &str> = Step::Complete("done");
///
/// assert!(paused.is_yielded());
/// assert_eq!(finished.map_complete(str::len), Step::Complete(4));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Step<Y, R> {
    /// The computation suspended with an intermediate value
    Yielded(Y),
    /// The computation ran to its end
    Complete(R),
}

impl<Y, R> Step<Y, R> {
    /// Returns `true` if the step stopped at a suspension point.
    #[inline]
    pub const fn is_yielded(&self) -> bool {
        matches!(self, Step::Yielded(_))
    }

    /// Returns `true` if the step finished the computation.
    #[inline]
    pub const fn is_complete(&self) -> bool {
        matches!(self, Step::Complete(_))
    }

    /// Converts into `Option<Y>`, discarding a final value.
    #[inline]
    pub fn yielded_value(self) -> Option<Y> {
        match self {
            Step::Yielded(y) => Some(y),
            Step::Complete(_) => None,
        }
    }

    /// Converts into `Option<R>`, discarding a yielded value.
    #[inline]
    pub fn complete_value(self) -> Option<R> {
        match self {
            Step::Yielded(_) => None,
            Step::Complete(r) => Some(r),
        }
    }

    /// Maps the yielded value, leaving a final value untouched.
    ///
    /// ```rust
    /// use cotask::Step;
    ///
    /// let y: Step<i32, ()> = Step::Yielded(21);
    /// assert_eq!(y.map_yielded(|v| v * 2), Step::Yielded(42));
    /// ```
    #[inline]
    pub fn map_yielded<Y2, F>(self, f: F) -> Step<Y2, R>
    where
        F: FnOnce(Y) -> Y2,
    {
        match self {
            Step::Yielded(y) => Step::Yielded(f(y)),
            Step::Complete(r) => Step::Complete(r),
        }
    }

    /// Maps the final value, leaving a yielded value untouched.
    #[inline]
    pub fn map_complete<R2, F>(self, f: F) -> Step<Y, R2>
    where
        F: FnOnce(R) -> R2,
    {
        match self {
            Step::Yielded(y) => Step::Yielded(y),
            Step::Complete(r) => Step::Complete(f(r)),
        }
    }

    /// Converts from `&Step<Y, R>` to `Step<&Y, &R>`.
    #[inline]
    pub const fn as_ref(&self) -> Step<&Y, &R> {
        match self {
            Step::Yielded(y) => Step::Yielded(y),
            Step::Complete(r) => Step::Complete(r),
        }
    }

    /// Returns the yielded value.
    ///
    /// # Panics
    ///
    /// Panics if the step is `Complete`.
    #[inline]
    pub fn unwrap_yielded(self) -> Y {
        match self {
            Step::Yielded(y) => y,
            Step::Complete(_) => panic!("called `Step::unwrap_yielded()` on a `Complete` value"),
        }
    }

    /// Returns the final value.
    ///
    /// # Panics
    ///
    /// Panics if the step is `Yielded`.
    #[inline]
    pub fn unwrap_complete(self) -> R {
        match self {
            Step::Yielded(_) => panic!("called `Step::unwrap_complete()` on a `Yielded` value"),
            Step::Complete(r) => r,
        }
    }
}
