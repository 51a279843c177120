//! Core domain types for order authentication.

pub mod order;

pub use order::*;
