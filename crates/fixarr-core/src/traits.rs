//! Core abstraction traits.

/// A source of indices for random element access.
///
/// Implemented by the seeded sampler in `fixarr-array` and by the
/// deterministic mocks in `fixarr-test-utils`. Arrays never trust the
/// returned index: an out-of-range pick is reported as an error rather
/// than read.
pub trait IndexSource {
    /// Pick an index from `0..len`.
    ///
    /// Callers guarantee `len > 0`.
    fn pick(&mut self, len: usize) -> usize;
}

impl<S: IndexSource + ?Sized> IndexSource for &mut S {
    fn pick(&mut self, len: usize) -> usize {
        (**self).pick(len)
    }
}

impl<S: IndexSource + ?Sized> IndexSource for Box<S> {
    fn pick(&mut self, len: usize) -> usize {
        (**self).pick(len)
    }
}
