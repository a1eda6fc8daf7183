//! The uniform source abstraction consumed by every sampler.
//!
//! A [`UniformSource`] is any deterministic stream that can hand out uniform
//! [0, 1) and standard normal variates. [`RngSource`] adapts any
//! `rand::RngCore` generator to it.

use rand::{Rng, RngCore};
use rand_distr::{Distribution, Exp1, StandardNormal};

/// Base pseudo-random primitives used to drive the samplers.
///
/// Implementations must be deterministic given their internal state: two
/// sources in the same state must yield the same sequence of primitives.
///
/// # Examples
///
/// ```rust
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
/// use random_core::rng::{RngSource, UniformSource};
///
/// let mut source = RngSource::new(StdRng::seed_from_u64(42));
/// let u = source.uniform01();
/// assert!((0.0..1.0).contains(&u));
/// ```
pub trait UniformSource {
    /// Draws a real in the half-open interval [0, 1).
    fn uniform01(&mut self) -> f64;

    /// Draws a real from N(0, 1).
    fn standard_normal(&mut self) -> f64;

    /// Draws a unit-rate exponential variate (expected value 1).
    ///
    /// The provided implementation inverts the CDF of a single
    /// [`uniform01`](Self::uniform01) draw: `-ln(1 - u)`.
    fn exponential(&mut self) -> f64 {
        -(1.0 - self.uniform01()).ln()
    }
}

impl<S: UniformSource + ?Sized> UniformSource for Box<S> {
    #[inline]
    fn uniform01(&mut self) -> f64 {
        (**self).uniform01()
    }

    #[inline]
    fn standard_normal(&mut self) -> f64 {
        (**self).standard_normal()
    }

    #[inline]
    fn exponential(&mut self) -> f64 {
        (**self).exponential()
    }
}

impl<S: UniformSource + ?Sized> UniformSource for &mut S {
    #[inline]
    fn uniform01(&mut self) -> f64 {
        (**self).uniform01()
    }

    #[inline]
    fn standard_normal(&mut self) -> f64 {
        (**self).standard_normal()
    }

    #[inline]
    fn exponential(&mut self) -> f64 {
        (**self).exponential()
    }
}

/// Adapter exposing a `rand` generator as a [`UniformSource`].
///
/// Normal variates use the ZIGNOR Ziggurat algorithm via
/// `rand_distr::StandardNormal`; exponential variates use the Ziggurat
/// `rand_distr::Exp1`.
///
/// # Algorithm Reference
///
/// - Marsaglia, G. & Tsang, W. W. (2000). "The Ziggurat Method for
///   Generating Random Variables". Journal of Statistical Software.
#[derive(Clone, Debug)]
pub struct RngSource<R> {
    inner: R,
}

impl<R: RngCore> RngSource<R> {
    /// Wraps the given generator.
    #[inline]
    pub fn new(inner: R) -> Self {
        Self { inner }
    }

    /// Returns the wrapped generator.
    #[inline]
    pub fn into_inner(self) -> R {
        self.inner
    }
}

impl<R: RngCore> UniformSource for RngSource<R> {
    #[inline]
    fn uniform01(&mut self) -> f64 {
        self.inner.gen()
    }

    #[inline]
    fn standard_normal(&mut self) -> f64 {
        StandardNormal.sample(&mut self.inner)
    }

    #[inline]
    fn exponential(&mut self) -> f64 {
        Exp1.sample(&mut self.inner)
    }
}
