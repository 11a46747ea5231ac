//! TCP listener loop.

pub mod listener;
