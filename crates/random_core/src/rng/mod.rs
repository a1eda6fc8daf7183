//! # Uniform Source Infrastructure
//!
//! This module provides the base pseudo-random primitives every sampler is
//! built on, and the rule that decides which generator a sampler draws from.
//!
//! ## Source Binding
//!
//! Every distribution constructor accepts an optional [`SharedSource`]:
//!
//! - **Present**: the sampler binds a handle to the caller's stream and draws
//!   from it exclusively
//! - **Absent**: the sampler draws from the process-wide default generator
//!   ([`DefaultSource`])
//!
//! The choice is made once by [`bind`] and captured in the sampler; it cannot
//! change afterwards.
//!
//! ## Module Structure
//!
//! - [`source`]: the [`UniformSource`] trait and the [`RngSource`] adapter
//! - [`binding`]: [`SharedSource`], [`DefaultSource`], [`seed_default`], [`bind`]
//!
//! ## Usage Example
//!
//! ```rust
//! use random_core::rng::{bind, SharedSource, UniformSource};
//!
//! let shared = SharedSource::from_seed(7);
//! let mut bound = bind(Some(&shared));
//! let u = bound.uniform01();
//! assert!((0.0..1.0).contains(&u));
//! ```

pub mod binding;
pub mod source;

pub use binding::{bind, seed_default, BoundSource, DefaultSource, SharedSource};
pub use source::{RngSource, UniformSource};

#[cfg(test)]
mod tests;
