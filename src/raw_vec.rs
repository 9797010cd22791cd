use core::{alloc::Layout, mem, ptr::NonNull};

use crate::{SizedTypeProperties, alloc::Allocator, error_behavior::ErrorBehavior};

/// The slot count a vector is given when it is created with a capacity hint
/// of zero, and the floor for the first growth of an unallocated buffer.
pub const DEFAULT_CAPACITY: usize = 10;

/// The growth and allocation engine backing [`Vec`](crate::Vec).
///
/// Owns the buffer pointer, the slot capacity and the allocator binding.
/// It knows nothing about which slots are initialized; the vector tracks
/// that and passes its `len` in where a policy depends on it.
///
/// `RawVec` deliberately has no `Drop` implementation. The owning type calls
/// [`deallocate`](RawVec::deallocate) at the right point in its own teardown.
pub(crate) struct RawVec<T, A> {
    ptr: NonNull<T>,
    cap: usize,
    allocator: A,
}

impl<T, A> RawVec<T, A> {
    /// Creates the unallocated state: a dangling, well-aligned pointer and
    /// zero capacity (`usize::MAX` for zero-sized element types).
    #[inline]
    pub(crate) const fn new_in(allocator: A) -> Self {
        Self {
            ptr: NonNull::dangling(),
            cap: if T::IS_ZST { usize::MAX } else { 0 },
            allocator,
        }
    }

    #[inline(always)]
    pub(crate) const fn ptr(&self) -> NonNull<T> {
        self.ptr
    }

    #[inline(always)]
    pub(crate) const fn capacity(&self) -> usize {
        self.cap
    }

    #[inline(always)]
    pub(crate) const fn allocator(&self) -> &A {
        &self.allocator
    }

    /// Whether holding `len + additional` elements requires growing.
    ///
    /// Works for the unallocated and zero-sized-element states too: a ZST
    /// buffer has `usize::MAX` capacity and never grows.
    #[inline(always)]
    pub(crate) fn needs_to_grow(&self, len: usize, additional: usize) -> bool {
        additional > self.cap.wrapping_sub(len)
    }

    /// The layout of the currently allocated block.
    ///
    /// Must only be called while `cap > 0` and `T` is not zero-sized.
    #[inline]
    fn current_layout(&self) -> Layout {
        // we already allocated this amount so the arithmetic can't overflow
        unsafe { Layout::from_size_align_unchecked(mem::size_of::<T>() * self.cap, mem::align_of::<T>()) }
    }
}

impl<T, A: Allocator> RawVec<T, A> {
    /// Allocates a buffer for `capacity` elements up front.
    ///
    /// A `capacity` of zero is treated as a request for
    /// [`DEFAULT_CAPACITY`] slots.
    pub(crate) fn generic_with_capacity_in<E: ErrorBehavior>(capacity: usize, allocator: A) -> Result<Self, E> {
        if T::IS_ZST {
            return Ok(Self::new_in(allocator));
        }

        let capacity = if capacity == 0 { DEFAULT_CAPACITY } else { capacity };

        let Ok(layout) = Layout::array::<T>(capacity) else {
            return Err(E::capacity_overflow());
        };

        let ptr = match allocator.allocate(layout) {
            Ok(ptr) => ptr.cast::<T>(),
            Err(_) => return Err(E::allocation(layout)),
        };

        Ok(Self {
            ptr,
            cap: capacity,
            allocator,
        })
    }

    /// Amortized growth: doubles the capacity, or more if `len + additional`
    /// demands it. The first allocation of a lazily created buffer is at
    /// least [`DEFAULT_CAPACITY`] slots.
    #[cold]
    #[inline(never)]
    pub(crate) fn generic_grow_amortized<E: ErrorBehavior>(&mut self, len: usize, additional: usize) -> Result<(), E> {
        let Some(required) = len.checked_add(additional) else {
            return Err(E::capacity_overflow());
        };

        if T::IS_ZST {
            // `needs_to_grow` is never true for ZSTs; only the length
            // arithmetic above can fail
            return Ok(());
        }

        if self.cap == 0 {
            return self.allocate_fresh(required.max(DEFAULT_CAPACITY));
        }

        let new_cap = self.cap.checked_mul(2).unwrap_or(required).max(required);

        // SAFETY: `new_cap` is greater than the current capacity
        unsafe { self.grow_to(new_cap) }
    }

    /// Exact growth: capacity becomes exactly `len + additional`.
    ///
    /// Used where the final size is already known (join, copy, map, slice
    /// and sort destinations, explicit reservations).
    #[cold]
    #[inline(never)]
    pub(crate) fn generic_grow_exact<E: ErrorBehavior>(&mut self, len: usize, additional: usize) -> Result<(), E> {
        let Some(required) = len.checked_add(additional) else {
            return Err(E::capacity_overflow());
        };

        if T::IS_ZST {
            return Ok(());
        }

        if self.cap == 0 {
            return self.allocate_fresh(required);
        }

        // SAFETY: the caller checked `needs_to_grow`, so `required > cap`
        unsafe { self.grow_to(required) }
    }

    /// Reallocates down to `cap == len`.
    pub(crate) fn generic_shrink_to_fit<E: ErrorBehavior>(&mut self, len: usize) -> Result<(), E> {
        if T::IS_ZST || self.cap == len {
            return Ok(());
        }

        // SAFETY: `len <= cap` always holds, and equality was handled above
        unsafe { self.shrink_to(len) }
    }

    /// Reallocates to exactly `new_cap` slots, growing or shrinking.
    ///
    /// A request below `len` is silently ignored: the capacity never drops
    /// under the number of live elements.
    pub(crate) fn generic_set_capacity<E: ErrorBehavior>(&mut self, len: usize, new_cap: usize) -> Result<(), E> {
        if T::IS_ZST || new_cap < len || new_cap == self.cap {
            return Ok(());
        }

        if self.cap == 0 {
            return self.allocate_fresh(new_cap);
        }

        if new_cap > self.cap {
            // SAFETY: checked just above
            unsafe { self.grow_to(new_cap) }
        } else {
            // SAFETY: `new_cap < cap` and `new_cap >= len`
            unsafe { self.shrink_to(new_cap) }
        }
    }

    /// First allocation of a lazily created buffer.
    fn allocate_fresh<E: ErrorBehavior>(&mut self, capacity: usize) -> Result<(), E> {
        debug_assert!(self.cap == 0 && capacity > 0);

        let Ok(layout) = Layout::array::<T>(capacity) else {
            return Err(E::capacity_overflow());
        };

        match self.allocator.allocate(layout) {
            Ok(ptr) => {
                self.ptr = ptr.cast();
                self.cap = capacity;
                Ok(())
            }
            Err(_) => Err(E::allocation(layout)),
        }
    }

    /// Grows the block in place or moves it, preserving every byte of the
    /// old block at its relative position.
    ///
    /// # Safety
    /// `new_cap` must be greater than the current (nonzero) capacity.
    unsafe fn grow_to<E: ErrorBehavior>(&mut self, new_cap: usize) -> Result<(), E> {
        debug_assert!(self.cap > 0 && new_cap > self.cap);

        let old_layout = self.current_layout();

        let Ok(new_layout) = Layout::array::<T>(new_cap) else {
            return Err(E::capacity_overflow());
        };

        // SAFETY: the block was allocated by this allocator with `old_layout`
        // and `new_layout` is larger
        let ptr = match unsafe { self.allocator.grow(self.ptr.cast(), old_layout, new_layout) } {
            Ok(ptr) => ptr,
            Err(_) => return Err(E::allocation(new_layout)),
        };

        self.ptr = ptr.cast();
        self.cap = new_cap;
        Ok(())
    }

    /// # Safety
    /// `new_cap` must be smaller than the current (nonzero) capacity.
    unsafe fn shrink_to<E: ErrorBehavior>(&mut self, new_cap: usize) -> Result<(), E> {
        debug_assert!(new_cap < self.cap);

        if new_cap == 0 {
            // SAFETY: `cap > 0`, so there is a block to release
            unsafe { self.deallocate() };
            return Ok(());
        }

        let old_layout = self.current_layout();

        // smaller than a layout we already hold, cannot overflow
        let new_layout = unsafe { Layout::from_size_align_unchecked(mem::size_of::<T>() * new_cap, mem::align_of::<T>()) };

        // SAFETY: the block was allocated by this allocator with `old_layout`
        // and `new_layout` is smaller
        let ptr = match unsafe { self.allocator.shrink(self.ptr.cast(), old_layout, new_layout) } {
            Ok(ptr) => ptr,
            Err(_) => return Err(E::allocation(new_layout)),
        };

        self.ptr = ptr.cast();
        self.cap = new_cap;
        Ok(())
    }

    /// Releases the buffer and returns to the unallocated state.
    ///
    /// # Safety
    /// All elements must have been moved out or dropped already; the buffer
    /// contents are gone after this call.
    pub(crate) unsafe fn deallocate(&mut self) {
        if T::IS_ZST || self.cap == 0 {
            return;
        }

        // SAFETY: the block was allocated by this allocator with this layout
        unsafe { self.allocator.deallocate(self.ptr.cast(), self.current_layout()) };

        self.ptr = NonNull::dangling();
        self.cap = 0;
    }
}
