use core::ptr::NonNull;

/// `wrapping_byte_add` for `NonNull`, which only raw pointers have.
///
/// Used for the zero-sized-element iterator cursors, whose "pointers" are
/// really counters offset from a dangling base and may exceed `isize::MAX`.
#[must_use]
#[inline(always)]
pub(crate) fn wrapping_byte_add<T>(ptr: NonNull<T>, count: usize) -> NonNull<T> {
    // a dangling base plus a count never wraps to null in practice
    unsafe { NonNull::new_unchecked(ptr.as_ptr().cast::<u8>().wrapping_add(count).cast::<T>()) }
}

/// `wrapping_byte_sub` for `NonNull`.
#[must_use]
#[inline(always)]
pub(crate) fn wrapping_byte_sub<T>(ptr: NonNull<T>, count: usize) -> NonNull<T> {
    unsafe { NonNull::new_unchecked(ptr.as_ptr().cast::<u8>().wrapping_sub(count).cast::<T>()) }
}
