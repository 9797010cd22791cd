#![cfg_attr(not(any(test, feature = "std")), no_std)]
#![warn(
    clippy::pedantic,
    clippy::cargo,
    clippy::correctness,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    missing_docs,
    rustdoc::missing_crate_level_docs
)]
#![allow(
    clippy::inline_always,
    clippy::module_name_repetitions,
    clippy::partialeq_ne_impl,
    clippy::items_after_statements
)]
//! A growable vector generic over its allocation backend, with
//! comparator-driven search, sort and slicing.
//!
//! [`Vec<T, A>`](Vec) stores elements of `T` in a buffer obtained from any
//! [`Allocator`](alloc::Allocator): the global heap via
//! [`Global`](alloc::Global), or a caller-supplied arena. The backend is
//! chosen at construction and fixed for the vector's lifetime.
//!
//! # Examples
//!
//! ```
//! use alloc_vec::{SearchMode, Vec};
//!
//! let mut vec: Vec<i32> = Vec::new();
//! vec.extend([3, 1, 4, 1, 5]);
//!
//! assert_eq!(vec.count(&1), 2);
//! assert_eq!(vec.search(&4, SearchMode::Linear), Some(2));
//!
//! let mut sorted: Vec<i32> = Vec::new();
//! vec.sort_into(&mut sorted, Ord::cmp);
//!
//! assert_eq!(sorted, [1, 1, 3, 4, 5]);
//! assert_eq!(sorted.search(&4, SearchMode::Binary), Some(3));
//! ```
//!
//! Bulk operations write into an out-parameter: the destination's previous
//! contents are replaced, and its buffer is sized to exactly what the
//! operation needs.
//!
//! ```
//! use alloc_vec::{Vec, alloc::Global, vec_in};
//!
//! let mut a = vec_in![in Global; 1, 2];
//! let b = vec_in![in Global; 3, 4];
//!
//! a.extend_from_slice_copy(&b);
//! assert_eq!(a, [1, 2, 3, 4]);
//!
//! let mut window: Vec<i32> = Vec::new();
//! a.slice_into(1..3, &mut window);
//! assert_eq!(window, [2, 3]);
//! ```
//!
//! # Allocation backends
//!
//! A heap-backed vector exclusively owns its buffer and releases it exactly
//! once when dropped. An arena-backed vector never owns its buffer's
//! lifetime: the arena does, and the arena must outlive every vector bound
//! to it. Any [`Allocator`](alloc::Allocator) implementation works as a
//! backend; [`WithoutDealloc`] adapts an allocator into the arena-style
//! binding by turning `deallocate` into a no-op, and the `allocator-api2`
//! feature makes ecosystem arenas usable directly.
//!
//! # Fatal and fallible APIs
//!
//! Allocation failure is fatal by default: the plain methods divert into
//! [`handle_alloc_error`](alloc::handle_alloc_error) and never return.
//! Every allocating method also has a `try_`-prefixed twin returning
//! [`Result`] for callers that treat out-of-memory as a recoverable
//! condition:
//!
//! ```
//! use alloc_vec::Vec;
//!
//! let mut vec: Vec<u8> = Vec::new();
//! vec.try_push(1)?;
//! vec.try_reserve(100)?;
//! # Ok::<(), alloc_vec::alloc::AllocError>(())
//! ```
//!
//! Contract violations (indexing out of bounds, inserting past the end,
//! slicing a bad range) are programmer errors and panic in both API
//! flavors.
//!
//! # Feature flags
//!
//! - **`std`** (default): enables `alloc` and allocator interop with the
//!   standard library.
//! - **`alloc`** (default): adds [`Global`](alloc::Global) as the default
//!   allocator.
//! - **`panic-on-alloc`** (default): adds the panicking (non-`try_`) API
//!   surface.
//! - **`serde`**: `Serialize` for `Vec`, `Deserialize` for vectors whose
//!   allocator is `Default`.
//! - **`bytemuck`**: the `ZeroableVecExt` extension trait.
//! - **`allocator-api2`**: the `AllocatorApi2Compat` wrapper in
//!   [`alloc::compat`](crate::alloc).

#[cfg(feature = "alloc")]
extern crate alloc as alloc_crate;

pub mod alloc;
mod error_behavior;
mod features;
mod into_iter;
mod partial_eq;
mod polyfill;
mod raw_vec;
mod search;
mod sort;
mod vec;
mod without_dealloc;

#[cfg(feature = "bytemuck")]
pub use features::bytemuck::ZeroableVecExt;
pub use into_iter::IntoIter;
pub use raw_vec::DEFAULT_CAPACITY;
pub use search::SearchMode;
pub use vec::Vec;
pub use without_dealloc::WithoutDealloc;

#[cfg(test)]
mod tests;

trait SizedTypeProperties: Sized {
    const IS_ZST: bool = core::mem::size_of::<Self>() == 0;
}

impl<T> SizedTypeProperties for T {}

#[cold]
#[inline(never)]
#[cfg(feature = "panic-on-alloc")]
pub(crate) const fn capacity_overflow() -> ! {
    panic!("capacity overflow");
}

// this is just `Result::into_ok` but with a name to match our use case
#[cfg(feature = "panic-on-alloc")]
#[inline(always)]
fn panic_on_error<T>(result: Result<T, core::convert::Infallible>) -> T {
    match result {
        Ok(value) => value,
        Err(never) => match never {},
    }
}
