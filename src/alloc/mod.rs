//! Memory allocation APIs.
//!
//! This module defines the capability through which a [`Vec`](crate::Vec)
//! talks to its backend: [`Allocator`]. The crate ships [`Global`] as the
//! heap backend; arena allocators provide their own implementations (usually
//! with a no-op [`deallocate`](Allocator::deallocate), see
//! [`WithoutDealloc`](crate::WithoutDealloc)).

use core::{
    alloc::Layout,
    fmt,
    ptr::{self, NonNull},
};

#[cfg(feature = "allocator-api2")]
pub mod compat;
#[cfg(feature = "alloc")]
mod global;

#[cfg(feature = "alloc")]
pub use global::Global;

/// The error type returned when an allocation fails.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct AllocError;

impl fmt::Display for AllocError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("memory allocation failed")
    }
}

impl core::error::Error for AllocError {}

/// Aborts execution in response to an allocation error.
///
/// Infallible (non-`try_`) vector operations call this when the backend
/// reports failure; there is no recovery path through them. Callers that
/// want to handle allocation failure use the `try_`-prefixed twins instead.
#[cfg(feature = "panic-on-alloc")]
#[cold]
#[inline(never)]
pub const fn handle_alloc_error(_layout: Layout) -> ! {
    panic!("allocation failed");
}

/// An implementation of `Allocator` can allocate, grow, shrink, and
/// deallocate arbitrary blocks of data described via [`Layout`].
///
/// The trait mirrors the unstable `core::alloc::Allocator`; ecosystem
/// allocators implementing `allocator_api2`'s version plug in through
/// `AllocatorApi2Compat` from the `compat` module.
///
/// # Safety
///
/// Memory blocks returned from an allocator must point to valid memory and
/// retain their validity while they are [*currently allocated*] and the
/// allocator (or a copy of it) is alive. Copies of the allocator must behave
/// like the same allocator.
///
/// [*currently allocated*]: https://doc.rust-lang.org/core/alloc/trait.Allocator.html#currently-allocated-memory
pub unsafe trait Allocator {
    /// Attempts to allocate a block of memory.
    ///
    /// The returned block may have a larger size than specified by
    /// `layout.size()`.
    ///
    /// # Errors
    /// Returning `Err` indicates that memory is exhausted or `layout` does
    /// not meet the allocator's size or alignment constraints.
    fn allocate(&self, layout: Layout) -> Result<NonNull<[u8]>, AllocError>;

    /// Behaves like `allocate`, but also ensures that the returned memory is
    /// zero-initialized.
    ///
    /// # Errors
    /// See [`allocate`](Allocator::allocate).
    fn allocate_zeroed(&self, layout: Layout) -> Result<NonNull<[u8]>, AllocError> {
        let ptr = self.allocate(layout)?;
        // SAFETY: `allocate` returned a block valid for `layout.size()` writes
        unsafe { ptr.cast::<u8>().as_ptr().write_bytes(0, layout.size()) }
        Ok(ptr)
    }

    /// Deallocates the memory referenced by `ptr`.
    ///
    /// Arena-style allocators whose backing region is released in bulk are
    /// free to make this a no-op.
    ///
    /// # Safety
    /// - `ptr` must denote a block of memory currently allocated via this
    ///   allocator, and
    /// - `layout` must fit that block of memory.
    unsafe fn deallocate(&self, ptr: NonNull<u8>, layout: Layout);

    /// Attempts to extend the memory block, preserving the first
    /// `old_layout.size()` bytes.
    ///
    /// This is the reallocate primitive: it receives the old and new total
    /// byte sizes packaged as layouts and may either extend in place or move
    /// the block.
    ///
    /// # Errors
    /// Returning `Err` indicates that memory is exhausted or the layouts do
    /// not meet the allocator's size or alignment constraints. On error the
    /// original block is left untouched.
    ///
    /// # Safety
    /// - `ptr` must denote a block of memory currently allocated via this
    ///   allocator,
    /// - `old_layout` must fit that block of memory, and
    /// - `new_layout.size()` must be greater than or equal to
    ///   `old_layout.size()`.
    unsafe fn grow(
        &self,
        ptr: NonNull<u8>,
        old_layout: Layout,
        new_layout: Layout,
    ) -> Result<NonNull<[u8]>, AllocError> {
        debug_assert!(
            new_layout.size() >= old_layout.size(),
            "`new_layout.size()` must be greater than or equal to `old_layout.size()`"
        );

        let new_ptr = self.allocate(new_layout)?;

        // SAFETY: the new block cannot overlap the still-allocated old block,
        // and both are valid for `old_layout.size()` bytes
        unsafe {
            ptr::copy_nonoverlapping(ptr.as_ptr(), new_ptr.cast::<u8>().as_ptr(), old_layout.size());
            self.deallocate(ptr, old_layout);
        }

        Ok(new_ptr)
    }

    /// Behaves like `grow`, but also ensures that the bytes past
    /// `old_layout.size()` are zero-initialized.
    ///
    /// # Errors
    /// See [`grow`](Allocator::grow).
    ///
    /// # Safety
    /// See [`grow`](Allocator::grow).
    unsafe fn grow_zeroed(
        &self,
        ptr: NonNull<u8>,
        old_layout: Layout,
        new_layout: Layout,
    ) -> Result<NonNull<[u8]>, AllocError> {
        // SAFETY: same contract as ours
        let new_ptr = unsafe { self.grow(ptr, old_layout, new_layout)? };

        let delta = new_layout.size() - old_layout.size();
        // SAFETY: the new block is valid for `new_layout.size()` writes
        unsafe {
            new_ptr
                .cast::<u8>()
                .as_ptr()
                .add(old_layout.size())
                .write_bytes(0, delta);
        }

        Ok(new_ptr)
    }

    /// Attempts to shrink the memory block, preserving the first
    /// `new_layout.size()` bytes.
    ///
    /// # Errors
    /// Returning `Err` indicates that memory is exhausted or the layouts do
    /// not meet the allocator's size or alignment constraints. On error the
    /// original block is left untouched.
    ///
    /// # Safety
    /// - `ptr` must denote a block of memory currently allocated via this
    ///   allocator,
    /// - `old_layout` must fit that block of memory, and
    /// - `new_layout.size()` must be smaller than or equal to
    ///   `old_layout.size()`.
    unsafe fn shrink(
        &self,
        ptr: NonNull<u8>,
        old_layout: Layout,
        new_layout: Layout,
    ) -> Result<NonNull<[u8]>, AllocError> {
        debug_assert!(
            new_layout.size() <= old_layout.size(),
            "`new_layout.size()` must be smaller than or equal to `old_layout.size()`"
        );

        let new_ptr = self.allocate(new_layout)?;

        // SAFETY: the new block cannot overlap the still-allocated old block,
        // and both are valid for `new_layout.size()` bytes
        unsafe {
            ptr::copy_nonoverlapping(ptr.as_ptr(), new_ptr.cast::<u8>().as_ptr(), new_layout.size());
            self.deallocate(ptr, old_layout);
        }

        Ok(new_ptr)
    }

    /// Creates a "by reference" adapter for this instance of `Allocator`.
    #[inline(always)]
    fn by_ref(&self) -> &Self
    where
        Self: Sized,
    {
        self
    }
}

unsafe impl<A: Allocator + ?Sized> Allocator for &A {
    #[inline(always)]
    fn allocate(&self, layout: Layout) -> Result<NonNull<[u8]>, AllocError> {
        (**self).allocate(layout)
    }

    #[inline(always)]
    fn allocate_zeroed(&self, layout: Layout) -> Result<NonNull<[u8]>, AllocError> {
        (**self).allocate_zeroed(layout)
    }

    #[inline(always)]
    unsafe fn deallocate(&self, ptr: NonNull<u8>, layout: Layout) {
        unsafe { (**self).deallocate(ptr, layout) }
    }

    #[inline(always)]
    unsafe fn grow(
        &self,
        ptr: NonNull<u8>,
        old_layout: Layout,
        new_layout: Layout,
    ) -> Result<NonNull<[u8]>, AllocError> {
        unsafe { (**self).grow(ptr, old_layout, new_layout) }
    }

    #[inline(always)]
    unsafe fn grow_zeroed(
        &self,
        ptr: NonNull<u8>,
        old_layout: Layout,
        new_layout: Layout,
    ) -> Result<NonNull<[u8]>, AllocError> {
        unsafe { (**self).grow_zeroed(ptr, old_layout, new_layout) }
    }

    #[inline(always)]
    unsafe fn shrink(
        &self,
        ptr: NonNull<u8>,
        old_layout: Layout,
        new_layout: Layout,
    ) -> Result<NonNull<[u8]>, AllocError> {
        unsafe { (**self).shrink(ptr, old_layout, new_layout) }
    }
}
