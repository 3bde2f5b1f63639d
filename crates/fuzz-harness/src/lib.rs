//! Habitable Zone Fuzz Harness
//!
//! Reusable property-based testing strategies shared by the workspace:
//! stellar luminosities, semi-major axes, planet labels and the free-text
//! custom input a user would type.
//!
//! # Usage
//!
//! ```rust
//! use fuzz_harness::prelude::*;
//!
//! proptest! {
//!     #[test]
//!     fn my_fuzz_test(l in luminosity()) {
//!         prop_assert!(l > 0.0);
//!     }
//! }
//! ```

pub mod generators;

pub mod prelude {
    pub use crate::generators::*;
    pub use proptest::prelude::*;
}

// Re-export proptest for convenience
pub use proptest;
