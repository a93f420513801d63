//! Shared test fixtures for ShiftForge crates.
//!
//! - [`scenarios`] - small hand-checked inputs with known outcomes
//! - [`checks`] - schedule property checks usable against any solution
//! - [`sample`] - deterministic generator for a realistic sample week
//!
//! # Usage
//!
//! Add as a dev-dependency in your crate's `Cargo.toml`:
//!
//! ```toml
//! [dev-dependencies]
//! shiftforge-test = { workspace = true }
//! ```
//!
//! Then import the fixtures you need:
//!
//! ```ignore
//! use shiftforge_test::scenarios::single_slot;
//! use shiftforge_test::checks::property_violations;
//! ```

pub mod checks;
pub mod sample;
pub mod scenarios;

pub use checks::property_violations;
pub use sample::{generate_week, SampleSpec};
