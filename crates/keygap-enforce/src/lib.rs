//! Enforcement engine for keygap destructure checks.
//!
//! Validates `const { … } = target({ … })` sites and produces violations:
//! - K001: missing keys (a key passed in the object literal is not destructured)
//! - K002: cannot verify (the object literal has spread elements or computed keys)
//! - S001: suppressed (any of the above, downgraded via `--suppress`)

pub mod types;
pub mod extract;
pub mod checker;
pub mod rules;
pub mod suppress;
pub mod engine;
