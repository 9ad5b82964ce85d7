/// Splits a slice into consecutive subslices of at most `size` elements.
///
/// The iterator borrows the input, so nothing is materialized up front and
/// calling `chunks` again on the same slice yields the same sequence. The
/// final chunk may be shorter than `size`.
///
/// # Panics
/// Panics if `size` is zero. Callers take the size from validated
/// configuration, where zero is rejected.
pub fn chunks<T>(items: &[T], size: usize) -> impl Iterator<Item = &[T]> + Clone {
    items.chunks(size)
}
