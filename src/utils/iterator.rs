//! Iterator utilities for parallel and sequential iterators according to the feature flag `parallel`

#[cfg(feature = "parallel")]
pub(crate) use rayon::iter::ParallelIterator;

#[cfg(not(feature = "parallel"))]
/// Get an enumerated iterator for the slice
pub(crate) fn get_enumerated_iterator<V>(
    slice: &[V],
) -> std::iter::Enumerate<std::slice::Iter<'_, V>> {
    slice.iter().enumerate()
}

#[cfg(feature = "parallel")]
/// Get an enumerated parallel iterator for the slice
pub(crate) fn get_enumerated_iterator<V: Sync>(
    slice: &[V],
) -> rayon::iter::Enumerate<rayon::slice::Iter<'_, V>> {
    use rayon::iter::{IndexedParallelIterator as _, IntoParallelRefIterator as _};
    slice.par_iter().enumerate()
}
