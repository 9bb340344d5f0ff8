//! Core types, rule options, and configuration for keygap.
//!
//! This crate provides the foundational data structures used across all keygap crates:
//! - [`syntax`]: Engine-agnostic model of a variable declarator and its initializer
//! - [`types`]: Target specs, extraction results, verdicts, and error types
//! - [`policy`]: The [`IgnorePolicy`](policy::IgnorePolicy) deciding which keys are exempt
//! - [`targets`]: Resolution of configured targets into a [`ResolvedRule`](targets::ResolvedRule)
//! - [`config`]: Configuration loading from `.keygap/keygap.json`

pub mod config;
pub mod policy;
pub mod syntax;
pub mod targets;
pub mod types;
