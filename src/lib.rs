//! Order Auth: typed order hashing and signature authentication
//!
//! This is the root crate that provides benchmark and integration-test access
//! to the workspace. For actual functionality, use the individual crates:
//!
//! - `order-signing`: EIP-712 order hashing, signature verification, signing, dedup hash
//! - `order-tool`: command-line tooling over `order-signing`

// Re-export for benchmarks
pub use order_signing as signing;
