//! Non-empty pools that requests are spread across.

use rand::Rng;

/// An immutable, non-empty sequence of interchangeable values.
///
/// Every request draws one value uniformly at random; there is no affinity
/// between consecutive draws.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pool<T> {
    items: Vec<T>,
}

impl<T> Pool<T> {
    /// Returns `None` when `items` is empty.
    pub fn new(items: Vec<T>) -> Option<Self> {
        if items.is_empty() {
            None
        } else {
            Some(Self { items })
        }
    }

    /// Pick one value using the thread-local RNG.
    pub fn sample(&self) -> &T {
        self.sample_with(&mut rand::thread_rng())
    }

    /// Pick one value using the given RNG.
    #[allow(clippy::indexing_slicing)]
    pub fn sample_with<R: Rng + ?Sized>(&self, rng: &mut R) -> &T {
        // items is never empty, so the range is never empty either
        &self.items[rng.gen_range(0..self.items.len())]
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }
}
