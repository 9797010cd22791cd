//! Stuff that is missing from the msrv's std.
//!
//! This module also includes utility functions
//! that are not from the standard library.

#[cfg(feature = "alloc")]
pub(crate) mod layout;
pub(crate) mod non_null;
