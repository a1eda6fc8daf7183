//! # Distribution Samplers
//!
//! Parameterised samplers for common univariate distributions. Each
//! distribution is a struct generic over its [`UniformSource`](crate::rng::UniformSource)
//! plus a free constructor taking an optional [`SharedSource`](crate::rng::SharedSource).
//!
//! | Constructor | Sampler | Output | Primitives per draw |
//! |---|---|---|---|
//! | [`gauss`] | [`Gauss`] | real | 1 normal |
//! | [`exp`] | [`Exp`] | real | 1 exponential |
//! | [`flat`] | [`Flat`] | real | 1 uniform |
//! | [`chi2`] | [`Chi2`] | real | `ndf` normals |
//! | [`bernoulli`] | [`Bernoulli`] | 0 or 1 | 1 uniform |
//! | [`binomial`] | [`Binomial`] | `[0, n + 1]` | `n + 1` uniforms |
//! | [`poisson`] | [`Poisson`] | `[0, ∞)` | the returned count |
//!
//! Constructors never validate parameters. Out-of-domain values produce
//! samplers with unspecified output; use [`crate::config`] for checked
//! construction.
//!
//! Every sampler is `Debug`, printing its parameters only. `Clone` is
//! available only when the source is cloneable, so samplers built with
//! `Struct::new` over a `SharedSource` or `RngSource<R: Clone>` clone, while
//! those returned by the free constructors (boxed source) do not.
//!
//! ## Static Dispatch
//!
//! The free constructors box the bound source once. When the source type
//! is known, `Struct::new(.., source)` keeps dispatch static; with
//! [`DefaultSource`](crate::rng::DefaultSource) the sampler is also `Send`.
//!
//! ```rust
//! use random_core::distributions::Poisson;
//! use random_core::rng::DefaultSource;
//! use random_core::DiscreteSampler;
//!
//! let mut arrivals = Poisson::new(4.0, DefaultSource);
//! let handle = std::thread::spawn(move || arrivals.sample());
//! assert!(handle.join().unwrap() >= 0);
//! ```

mod continuous;
mod discrete;

pub use continuous::{chi2, exp, flat, gauss, Chi2, Exp, Flat, Gauss};
pub use discrete::{bernoulli, binomial, poisson, Bernoulli, Binomial, Poisson};
