//! Integrations that are only available with certain feature flags.

#[cfg(feature = "bytemuck")]
pub(crate) mod bytemuck;
#[cfg(feature = "serde")]
mod serde;
