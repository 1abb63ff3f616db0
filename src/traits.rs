/// Represents a value that is either known exactly or only approximately.
///
/// Transreal numbers carry this as a provenance flag, [Approximation] is how
/// the flag is surfaced when a value leaves the transreal world (see
/// [Transreal::to_rational][crate::Transreal::to_rational]).
#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub enum Approximation<T> {
    Approximated(T),
    Exact(T),
}

impl<T> Approximation<T> {
    /// Get the wrapped value regardless of whether it's exact
    #[inline]
    pub fn value(self) -> T {
        match self {
            Approximation::Approximated(v) => v,
            Approximation::Exact(v) => v,
        }
    }

    #[inline]
    pub fn is_exact(&self) -> bool {
        matches!(self, Approximation::Exact(_))
    }

    /// Wrap a value, marking it approximated if `approximate` is true
    #[inline]
    pub(crate) fn new(value: T, approximate: bool) -> Self {
        if approximate {
            Approximation::Approximated(value)
        } else {
            Approximation::Exact(value)
        }
    }

    /// Apply a function on the wrapped value, keeping the exactness
    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Approximation<U> {
        match self {
            Approximation::Approximated(v) => Approximation::Approximated(f(v)),
            Approximation::Exact(v) => Approximation::Exact(f(v)),
        }
    }
}
