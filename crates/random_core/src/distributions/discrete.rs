//! Integer-valued samplers: Bernoulli, binomial and Poisson.

use std::fmt;

use crate::rng::{bind, BoundSource, SharedSource, UniformSource};
use crate::sampler::{ContinuousSampler, DiscreteSampler};

use super::continuous::Flat;

/// Biased coin: 1 with probability `p`, otherwise 0.
///
/// Each draw consumes one uniform and returns 1 when it is strictly below
/// `p`. `p = 0` always yields 0 and `p = 1` always yields 1.
#[derive(Clone)]
pub struct Bernoulli<S = BoundSource> {
    p: f64,
    uniform: Flat<S>,
}

impl<S: UniformSource> Bernoulli<S> {
    /// Creates a Bernoulli sampler drawing from `source`.
    #[inline]
    pub fn new(p: f64, source: S) -> Self {
        Self {
            p,
            uniform: Flat::new(0.0, 1.0, source),
        }
    }

    /// Returns the success probability.
    #[inline]
    pub fn p(&self) -> f64 {
        self.p
    }
}

impl<S: UniformSource> DiscreteSampler for Bernoulli<S> {
    #[inline]
    fn sample(&mut self) -> i64 {
        if self.uniform.sample() < self.p {
            1
        } else {
            0
        }
    }
}

/// Bernoulli sampler bound to `src`, or to the process default when `None`.
pub fn bernoulli(p: f64, src: Option<&SharedSource>) -> Bernoulli {
    Bernoulli::new(p, bind(src))
}

/// Sum of Bernoulli trials over the inclusive range `0..=n`.
///
/// Each draw sums `n + 1` trials, so results lie in `[0, n + 1]` and the
/// expected value is `(n + 1) * p`. The extra trial is part of the
/// contract and downstream results depend on it.
#[derive(Clone)]
pub struct Binomial<S = BoundSource> {
    n: u64,
    trial: Bernoulli<S>,
}

impl<S: UniformSource> Binomial<S> {
    /// Creates a binomial sampler drawing from `source`.
    #[inline]
    pub fn new(n: u64, p: f64, source: S) -> Self {
        Self {
            n,
            trial: Bernoulli::new(p, source),
        }
    }

    /// Returns the trial count parameter.
    #[inline]
    pub fn n(&self) -> u64 {
        self.n
    }

    /// Returns the per-trial success probability.
    #[inline]
    pub fn p(&self) -> f64 {
        self.trial.p()
    }
}

impl<S: UniformSource> DiscreteSampler for Binomial<S> {
    fn sample(&mut self) -> i64 {
        let mut x = 0;
        for _ in 0..=self.n {
            x += self.trial.sample();
        }
        x
    }
}

/// Binomial sampler bound to `src`, or to the process default when `None`.
pub fn binomial(n: u64, p: f64, src: Option<&SharedSource>) -> Binomial {
    Binomial::new(n, p, bind(src))
}

/// Poisson distribution via Knuth's multiplicative algorithm.
///
/// Uniforms are multiplied into a running product until it no longer
/// exceeds `exp(-mean)`; the count of uniforms consumed is the draw. Cost
/// grows linearly with `mean`, so keep it moderate. Once `exp(-mean)`
/// underflows to zero (`mean` above roughly 745) draws no longer follow a
/// Poisson law.
///
/// # Algorithm Reference
///
/// - Knuth, D. E. (1997). "The Art of Computer Programming, Vol. 2:
///   Seminumerical Algorithms", 3rd ed., section 3.4.1.
#[derive(Clone)]
pub struct Poisson<S = BoundSource> {
    mean: f64,
    /// `exp(-mean)`, fixed at construction.
    threshold: f64,
    uniform: Flat<S>,
}

impl<S: UniformSource> Poisson<S> {
    /// Creates a Poisson sampler drawing from `source`.
    #[inline]
    pub fn new(mean: f64, source: S) -> Self {
        Self {
            mean,
            threshold: (-mean).exp(),
            uniform: Flat::new(0.0, 1.0, source),
        }
    }

    /// Returns the mean event count.
    #[inline]
    pub fn mean(&self) -> f64 {
        self.mean
    }
}

impl<S: UniformSource> DiscreteSampler for Poisson<S> {
    fn sample(&mut self) -> i64 {
        let mut i = 0;
        let mut p = 1.0;
        while p > self.threshold {
            p *= self.uniform.sample();
            i += 1;
        }
        i
    }
}

/// Poisson sampler bound to `src`, or to the process default when `None`.
pub fn poisson(mean: f64, src: Option<&SharedSource>) -> Poisson {
    Poisson::new(mean, bind(src))
}

impl<S> fmt::Debug for Bernoulli<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Bernoulli")
            .field("p", &self.p)
            .finish_non_exhaustive()
    }
}

impl<S> fmt::Debug for Binomial<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Binomial")
            .field("n", &self.n)
            .field("p", &self.trial.p)
            .finish_non_exhaustive()
    }
}

impl<S> fmt::Debug for Poisson<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Poisson")
            .field("mean", &self.mean)
            .finish_non_exhaustive()
    }
}
