//! Compatibility with ecosystem allocator traits.

use core::{alloc::Layout, ptr::NonNull};

use super::{AllocError, Allocator};

/// Wraps a type implementing `allocator_api2` version `0.2`'s `Allocator`
/// trait to make it implement this crate's [`Allocator`].
///
/// This lets ecosystem arenas (bump allocators and friends) back a
/// [`Vec`](crate::Vec) without any glue code of their own.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AllocatorApi2Compat<A>(pub A);

impl<A> AllocatorApi2Compat<A> {
    /// Returns the wrapped allocator.
    pub fn into_inner(self) -> A {
        self.0
    }
}

unsafe impl<A: allocator_api2::alloc::Allocator> Allocator for AllocatorApi2Compat<A> {
    #[inline(always)]
    fn allocate(&self, layout: Layout) -> Result<NonNull<[u8]>, AllocError> {
        self.0.allocate(layout).map_err(|_| AllocError)
    }

    #[inline(always)]
    fn allocate_zeroed(&self, layout: Layout) -> Result<NonNull<[u8]>, AllocError> {
        self.0.allocate_zeroed(layout).map_err(|_| AllocError)
    }

    #[inline(always)]
    unsafe fn deallocate(&self, ptr: NonNull<u8>, layout: Layout) {
        unsafe { self.0.deallocate(ptr, layout) }
    }

    #[inline(always)]
    unsafe fn grow(
        &self,
        ptr: NonNull<u8>,
        old_layout: Layout,
        new_layout: Layout,
    ) -> Result<NonNull<[u8]>, AllocError> {
        unsafe { self.0.grow(ptr, old_layout, new_layout).map_err(|_| AllocError) }
    }

    #[inline(always)]
    unsafe fn grow_zeroed(
        &self,
        ptr: NonNull<u8>,
        old_layout: Layout,
        new_layout: Layout,
    ) -> Result<NonNull<[u8]>, AllocError> {
        unsafe { self.0.grow_zeroed(ptr, old_layout, new_layout).map_err(|_| AllocError) }
    }

    #[inline(always)]
    unsafe fn shrink(
        &self,
        ptr: NonNull<u8>,
        old_layout: Layout,
        new_layout: Layout,
    ) -> Result<NonNull<[u8]>, AllocError> {
        unsafe { self.0.shrink(ptr, old_layout, new_layout).map_err(|_| AllocError) }
    }
}
