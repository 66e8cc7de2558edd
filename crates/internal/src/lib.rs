//! Internal utilities for the galcrypt workspace.
//!
//! Nothing in this crate is cryptography by itself; it provides the
//! constant-time building blocks the other crates lean on.

#![forbid(unsafe_code)]

pub mod constant_time;

pub use constant_time::{ct_eq, ct_eq_choice, ConstantTimeEquals};
