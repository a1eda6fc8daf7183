//! Caller-shared and process-default sources, and the binding helper that
//! picks between them at sampler construction.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;
use std::sync::{Mutex, MutexGuard, OnceLock, PoisonError};

use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};

use super::source::{RngSource, UniformSource};

/// Source resolved at construction time and captured by a sampler.
///
/// Boxed once when the sampler is built, so draws neither allocate nor
/// re-check whether a caller source was supplied.
pub type BoundSource = Box<dyn UniformSource>;

/// Process-wide default generator, seeded from OS entropy on first use.
static DEFAULT_RNG: OnceLock<Mutex<RngSource<StdRng>>> = OnceLock::new();

fn default_rng() -> MutexGuard<'static, RngSource<StdRng>> {
    DEFAULT_RNG
        .get_or_init(|| Mutex::new(RngSource::new(StdRng::from_entropy())))
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
}

/// Reseeds the process-wide default generator.
///
/// Samplers bound to [`DefaultSource`] are not reproducible unless the host
/// calls this before drawing. Reseeding affects every default-bound sampler
/// in the process.
pub fn seed_default(seed: u64) {
    *default_rng() = RngSource::new(StdRng::seed_from_u64(seed));
    tracing::debug!(seed, "reseeded process default generator");
}

/// Handle to the process-wide default generator.
///
/// The generator is guarded by a mutex, so default-bound samplers may be
/// moved to and invoked from different threads.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DefaultSource;

impl UniformSource for DefaultSource {
    #[inline]
    fn uniform01(&mut self) -> f64 {
        default_rng().uniform01()
    }

    #[inline]
    fn standard_normal(&mut self) -> f64 {
        default_rng().standard_normal()
    }

    #[inline]
    fn exponential(&mut self) -> f64 {
        default_rng().exponential()
    }
}

/// Cloneable handle to a caller-owned source.
///
/// Every clone refers to the same underlying state: two samplers bound to
/// the same handle interleave their draws on one stream. The handle is
/// neither `Send` nor `Sync`, so such samplers cannot be shared across
/// threads.
///
/// # Examples
///
/// ```rust
/// use random_core::rng::{SharedSource, UniformSource};
///
/// let mut a = SharedSource::from_seed(12345);
/// let mut b = SharedSource::from_seed(12345);
///
/// // Same seed produces identical sequences
/// assert_eq!(a.uniform01(), b.uniform01());
/// assert_eq!(a.seed(), Some(12345));
/// ```
#[derive(Clone)]
pub struct SharedSource {
    inner: Rc<RefCell<dyn UniformSource>>,
    /// Seed used for initialisation, when known.
    seed: Option<u64>,
}

impl SharedSource {
    /// Shares an arbitrary [`UniformSource`].
    pub fn new<S: UniformSource + 'static>(source: S) -> Self {
        Self {
            inner: Rc::new(RefCell::new(source)),
            seed: None,
        }
    }

    /// Shares a `rand` generator.
    pub fn from_rng<R: RngCore + 'static>(rng: R) -> Self {
        Self::new(RngSource::new(rng))
    }

    /// Creates a `StdRng`-backed source initialised with the given seed.
    ///
    /// The same seed always produces the same sequence of primitives.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..Self::from_rng(StdRng::seed_from_u64(seed))
        }
    }

    /// Returns the seed used for initialisation, if the source was seeded
    /// through [`from_seed`](Self::from_seed).
    #[inline]
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Returns `true` if both handles refer to the same underlying source.
    #[inline]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl fmt::Debug for SharedSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SharedSource")
            .field("seed", &self.seed)
            .field("handles", &Rc::strong_count(&self.inner))
            .finish()
    }
}

impl UniformSource for SharedSource {
    #[inline]
    fn uniform01(&mut self) -> f64 {
        self.inner.borrow_mut().uniform01()
    }

    #[inline]
    fn standard_normal(&mut self) -> f64 {
        self.inner.borrow_mut().standard_normal()
    }

    #[inline]
    fn exponential(&mut self) -> f64 {
        self.inner.borrow_mut().exponential()
    }
}

/// Resolves an optional caller source into the source a sampler captures.
///
/// `Some` binds a new handle onto the caller's stream; `None` binds the
/// process-wide default. The choice is frozen in the returned value.
pub fn bind(src: Option<&SharedSource>) -> BoundSource {
    match src {
        Some(shared) => Box::new(shared.clone()),
        None => Box::new(DefaultSource),
    }
}
