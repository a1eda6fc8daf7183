//! Nullary sampler abstractions.
//!
//! A sampler captures its distribution parameters and a bound source; each
//! call to `sample` yields one value and advances the source by exactly the
//! primitives the algorithm consumes.

/// Producer of real-valued samples.
pub trait ContinuousSampler {
    /// Draws one sample.
    fn sample(&mut self) -> f64;

    /// Fills the buffer with consecutive samples.
    ///
    /// This is a zero-allocation operation; empty buffers are a no-op.
    #[inline]
    fn fill(&mut self, buffer: &mut [f64]) {
        for value in buffer.iter_mut() {
            *value = self.sample();
        }
    }
}

/// Producer of integer-valued samples.
pub trait DiscreteSampler {
    /// Draws one sample.
    fn sample(&mut self) -> i64;

    /// Fills the buffer with consecutive samples.
    ///
    /// This is a zero-allocation operation; empty buffers are a no-op.
    #[inline]
    fn fill(&mut self, buffer: &mut [i64]) {
        for value in buffer.iter_mut() {
            *value = self.sample();
        }
    }
}

impl<T: ContinuousSampler + ?Sized> ContinuousSampler for Box<T> {
    #[inline]
    fn sample(&mut self) -> f64 {
        (**self).sample()
    }
}

impl<T: ContinuousSampler + ?Sized> ContinuousSampler for &mut T {
    #[inline]
    fn sample(&mut self) -> f64 {
        (**self).sample()
    }
}

impl<T: DiscreteSampler + ?Sized> DiscreteSampler for Box<T> {
    #[inline]
    fn sample(&mut self) -> i64 {
        (**self).sample()
    }
}

impl<T: DiscreteSampler + ?Sized> DiscreteSampler for &mut T {
    #[inline]
    fn sample(&mut self) -> i64 {
        (**self).sample()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Counter(i64);

    impl DiscreteSampler for Counter {
        fn sample(&mut self) -> i64 {
            self.0 += 1;
            self.0
        }
    }

    struct Halves(f64);

    impl ContinuousSampler for Halves {
        fn sample(&mut self) -> f64 {
            self.0 /= 2.0;
            self.0
        }
    }

    #[test]
    fn test_fill_discrete_in_order() {
        let mut counter = Counter(0);
        let mut buffer = [0; 4];
        counter.fill(&mut buffer);
        assert_eq!(buffer, [1, 2, 3, 4]);
    }

    #[test]
    fn test_fill_continuous_in_order() {
        let mut halves = Halves(1.0);
        let mut buffer = [0.0; 3];
        halves.fill(&mut buffer);
        assert_eq!(buffer, [0.5, 0.25, 0.125]);
    }

    #[test]
    fn test_empty_buffer() {
        let mut counter = Counter(0);
        counter.fill(&mut []);
        assert_eq!(counter.sample(), 1);
    }

    #[test]
    fn test_boxed_and_borrowed_samplers() {
        let mut boxed: Box<dyn DiscreteSampler> = Box::new(Counter(10));
        assert_eq!(boxed.sample(), 11);

        let mut inner = Halves(4.0);
        let mut borrowed = &mut inner;
        assert_eq!(ContinuousSampler::sample(&mut borrowed), 2.0);
        assert_eq!(inner.sample(), 1.0);
    }
}
