use bytemuck::Zeroable;

use crate::{
    Vec,
    alloc::{AllocError, Allocator},
};

mod sealed {
    pub trait Sealed {}
    impl<T, A: crate::alloc::Allocator> Sealed for crate::Vec<T, A> {}
}

/// Extension methods for vectors of [`Zeroable`] elements.
pub trait ZeroableVecExt<T>: sealed::Sealed {
    /// Extends the vector by `additional` zeroed elements.
    ///
    /// # Panics
    /// Panics if the allocation fails.
    #[cfg(feature = "panic-on-alloc")]
    fn extend_zeroed(&mut self, additional: usize);

    /// Extends the vector by `additional` zeroed elements.
    ///
    /// # Errors
    /// Errors if the allocation fails.
    fn try_extend_zeroed(&mut self, additional: usize) -> Result<(), AllocError>;

    /// Resizes the vector in-place so that its length equals `new_len`,
    /// filling new slots with zeroed elements.
    ///
    /// # Panics
    /// Panics if the allocation fails.
    #[cfg(feature = "panic-on-alloc")]
    fn resize_zeroed(&mut self, new_len: usize);

    /// Resizes the vector in-place so that its length equals `new_len`,
    /// filling new slots with zeroed elements.
    ///
    /// # Errors
    /// Errors if the allocation fails.
    fn try_resize_zeroed(&mut self, new_len: usize) -> Result<(), AllocError>;
}

impl<T: Zeroable, A: Allocator> ZeroableVecExt<T> for Vec<T, A> {
    #[cfg(feature = "panic-on-alloc")]
    fn extend_zeroed(&mut self, additional: usize) {
        self.reserve(additional);

        // SAFETY: space was reserved, and all-zero bytes are a valid `T`
        unsafe {
            self.as_mut_ptr().add(self.len()).write_bytes(0, additional);
            self.set_len(self.len() + additional);
        }
    }

    fn try_extend_zeroed(&mut self, additional: usize) -> Result<(), AllocError> {
        self.try_reserve(additional)?;

        // SAFETY: space was reserved, and all-zero bytes are a valid `T`
        unsafe {
            self.as_mut_ptr().add(self.len()).write_bytes(0, additional);
            self.set_len(self.len() + additional);
        }

        Ok(())
    }

    #[cfg(feature = "panic-on-alloc")]
    fn resize_zeroed(&mut self, new_len: usize) {
        let len = self.len();

        if new_len > len {
            self.extend_zeroed(new_len - len);
        } else {
            self.truncate(new_len);
        }
    }

    fn try_resize_zeroed(&mut self, new_len: usize) -> Result<(), AllocError> {
        let len = self.len();

        if new_len > len {
            self.try_extend_zeroed(new_len - len)
        } else {
            self.truncate(new_len);
            Ok(())
        }
    }
}
