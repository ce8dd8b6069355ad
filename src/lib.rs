//! Texture dimension snapping with step constraints, aspect ratio coupling,
//! and rounding control.
//!
//! Pure arithmetic — no pixel operations, no allocations in the core,
//! `no_std` compatible.
//!
//! # Modules
//!
//! - [`arith`] — gcd, lcm, and power-of-two primitives
//! - [`constraint`] — Step constraints (divisible-by, power-of-two) and
//!   dimension snapping, per axis or coupled through an aspect ratio
//! - [`form`] — Form field parsing, validation, and calculation requests
//!   (requires `alloc`)

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

#[cfg(feature = "alloc")]
extern crate alloc;

pub mod arith;
pub mod constraint;
#[cfg(feature = "alloc")]
pub mod form;

// Re-exports: core types from arith and constraint modules
pub use arith::{gcd, is_power_of_two, lcm};
pub use constraint::{AspectRatio, DrivingAxis, Rounding, Size, StepConstraint};
#[cfg(feature = "alloc")]
pub use form::{CalcRequest, CalcResult, ParamError, Params, StepMode, normalize};
