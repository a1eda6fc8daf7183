//! Real-valued samplers: Gaussian, exponential, flat and chi-squared.

use std::fmt;

use crate::rng::{bind, BoundSource, SharedSource, UniformSource};
use crate::sampler::ContinuousSampler;

/// Location-scale normal distribution N(mean, stddev²).
///
/// Each draw consumes one standard normal primitive and returns
/// `z * stddev + mean`. Tails are not clamped. `stddev = 0` yields the
/// constant `mean`; a negative `stddev` is accepted unchecked.
///
/// # Examples
///
/// ```rust
/// use random_core::distributions::gauss;
/// use random_core::rng::SharedSource;
/// use random_core::ContinuousSampler;
///
/// let src = SharedSource::from_seed(42);
/// let mut normal = gauss(10.0, 2.0, Some(&src));
/// let x = normal.sample();
/// assert!(x.is_finite());
/// ```
#[derive(Clone)]
pub struct Gauss<S = BoundSource> {
    mean: f64,
    stddev: f64,
    source: S,
}

impl<S: UniformSource> Gauss<S> {
    /// Creates a Gaussian sampler drawing from `source`.
    #[inline]
    pub fn new(mean: f64, stddev: f64, source: S) -> Self {
        Self {
            mean,
            stddev,
            source,
        }
    }

    /// Returns the location parameter.
    #[inline]
    pub fn mean(&self) -> f64 {
        self.mean
    }

    /// Returns the scale parameter.
    #[inline]
    pub fn stddev(&self) -> f64 {
        self.stddev
    }
}

impl<S: UniformSource> ContinuousSampler for Gauss<S> {
    #[inline]
    fn sample(&mut self) -> f64 {
        self.source.standard_normal() * self.stddev + self.mean
    }
}

/// Gaussian sampler bound to `src`, or to the process default when `None`.
pub fn gauss(mean: f64, stddev: f64, src: Option<&SharedSource>) -> Gauss {
    Gauss::new(mean, stddev, bind(src))
}

/// Exponential distribution parameterised by its rate.
///
/// Each draw returns `e / mean` where `e` is a unit-rate exponential. The
/// parameter is historically named `mean` but acts as the rate: the
/// expected value of a draw is `1 / mean`. Requires `mean > 0`; other
/// values are accepted unchecked and yield infinities or negative draws.
#[derive(Clone)]
pub struct Exp<S = BoundSource> {
    mean: f64,
    source: S,
}

impl<S: UniformSource> Exp<S> {
    /// Creates an exponential sampler drawing from `source`.
    #[inline]
    pub fn new(mean: f64, source: S) -> Self {
        Self { mean, source }
    }

    /// Returns the divisor applied to each unit-rate draw.
    #[inline]
    pub fn mean(&self) -> f64 {
        self.mean
    }
}

impl<S: UniformSource> ContinuousSampler for Exp<S> {
    #[inline]
    fn sample(&mut self) -> f64 {
        self.source.exponential() / self.mean
    }
}

/// Exponential sampler bound to `src`, or to the process default when `None`.
pub fn exp(mean: f64, src: Option<&SharedSource>) -> Exp {
    Exp::new(mean, bind(src))
}

/// Uniform distribution on [min, max).
///
/// The width is computed once at construction. `min == max` yields the
/// constant `min`. Draws are `u * (max - min) + min` with `u < 1`; the
/// exclusive upper bound holds only up to floating-point rounding, and a
/// `u` within an ulp of 1 can round to exactly `max`.
#[derive(Clone)]
pub struct Flat<S = BoundSource> {
    min: f64,
    delta: f64,
    source: S,
}

impl<S: UniformSource> Flat<S> {
    /// Creates a uniform sampler drawing from `source`.
    #[inline]
    pub fn new(min: f64, max: f64, source: S) -> Self {
        Self {
            min,
            delta: max - min,
            source,
        }
    }

    /// Returns the inclusive lower bound.
    #[inline]
    pub fn min(&self) -> f64 {
        self.min
    }

    /// Returns the exclusive upper bound.
    #[inline]
    pub fn max(&self) -> f64 {
        self.min + self.delta
    }
}

impl<S: UniformSource> ContinuousSampler for Flat<S> {
    #[inline]
    fn sample(&mut self) -> f64 {
        self.source.uniform01() * self.delta + self.min
    }
}

/// Uniform sampler bound to `src`, or to the process default when `None`.
pub fn flat(min: f64, max: f64, src: Option<&SharedSource>) -> Flat {
    Flat::new(min, max, bind(src))
}

/// Chi-squared distribution with `ndf` degrees of freedom.
///
/// Each draw sums `ndf` squared standard normal variates, drawn through an
/// inner `Gauss(0, 1)`. `ndf = 0` yields the constant 0 and consumes nothing.
#[derive(Clone)]
pub struct Chi2<S = BoundSource> {
    ndf: u64,
    norm: Gauss<S>,
}

impl<S: UniformSource> Chi2<S> {
    /// Creates a chi-squared sampler drawing from `source`.
    #[inline]
    pub fn new(ndf: u64, source: S) -> Self {
        Self {
            ndf,
            norm: Gauss::new(0.0, 1.0, source),
        }
    }

    /// Returns the number of degrees of freedom.
    #[inline]
    pub fn ndf(&self) -> u64 {
        self.ndf
    }
}

impl<S: UniformSource> ContinuousSampler for Chi2<S> {
    fn sample(&mut self) -> f64 {
        let mut x = 0.0;
        for _ in 0..self.ndf {
            let z = self.norm.sample();
            x += z * z;
        }
        x
    }
}

/// Chi-squared sampler bound to `src`, or to the process default when `None`.
pub fn chi2(ndf: u64, src: Option<&SharedSource>) -> Chi2 {
    Chi2::new(ndf, bind(src))
}

impl<S> fmt::Debug for Gauss<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Gauss")
            .field("mean", &self.mean)
            .field("stddev", &self.stddev)
            .finish_non_exhaustive()
    }
}

impl<S> fmt::Debug for Exp<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Exp")
            .field("mean", &self.mean)
            .finish_non_exhaustive()
    }
}

impl<S> fmt::Debug for Flat<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Flat")
            .field("min", &self.min)
            .field("max", &(self.min + self.delta))
            .finish_non_exhaustive()
    }
}

impl<S> fmt::Debug for Chi2<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Chi2")
            .field("ndf", &self.ndf)
            .finish_non_exhaustive()
    }
}
