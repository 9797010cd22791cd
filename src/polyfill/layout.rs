use core::{alloc::Layout, ptr::NonNull};

/// Creates a `NonNull` that is dangling, but well-aligned for this `Layout`.
///
/// Not part of the msrv's `Layout`.
#[must_use]
#[inline]
pub(crate) fn dangling(layout: Layout) -> NonNull<u8> {
    // SAFETY: layout alignments are nonzero
    unsafe { NonNull::new_unchecked(core::ptr::without_provenance_mut(layout.align())) }
}
