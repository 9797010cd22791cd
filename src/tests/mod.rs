#![cfg(feature = "std")]

mod arena;
mod drop_and_zst;
mod search;
