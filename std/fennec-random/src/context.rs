///
/// Per-context random number generation.
///
/// `ContextRng` is owned by one thread or task and seeded once. `with_thread_rng`
/// lends each thread its own lazily-seeded instance for the free functions.
///

use std::cell::RefCell;

use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};

/// A random number generator owned by a single execution context.
///
/// Seeded once, either from OS entropy or from a fixed seed. Give each thread or
/// task its own instance rather than sharing one. It cannot be cloned; a copy
/// would replay the same draws as the original.
///
/// ```compile_fail
/// let rng = fennec_random::ContextRng::from_entropy();
/// let _twin: fennec_random::ContextRng = rng.clone();
/// ```
#[derive(Debug)]
pub struct ContextRng {
    inner: StdRng,
}

impl Default for ContextRng {
    fn default() -> Self {
        Self::from_entropy()
    }
}

impl ContextRng {
    pub fn from_entropy() -> Self {
        Self {
            inner: StdRng::from_entropy(),
        }
    }

    /// A reproducible generator. Same seed, same sequence.
    pub fn seeded(seed: u64) -> Self {
        Self {
            inner: StdRng::seed_from_u64(seed),
        }
    }

    /// Random integer in `[min, max]`. Returns `min` when the range is empty or a
    /// single value.
    pub fn range(&mut self, min: i64, max: i64) -> i64 {
        if min >= max {
            return min;
        }
        self.inner.gen_range(min..=max)
    }

    pub(crate) fn range_u64(&mut self, min: u64, max: u64) -> u64 {
        if min >= max {
            return min;
        }
        self.inner.gen_range(min..=max)
    }

    /// Random float in `[0.0, 1.0)`
    pub fn unit_float(&mut self) -> f64 {
        self.inner.gen_range(0.0..1.0)
    }
}

impl RngCore for ContextRng {
    fn next_u32(&mut self) -> u32 {
        self.inner.next_u32()
    }

    fn next_u64(&mut self) -> u64 {
        self.inner.next_u64()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.inner.fill_bytes(dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.inner.try_fill_bytes(dest)
    }
}

thread_local! {
    static THREAD_RNG: RefCell<ContextRng> = RefCell::new(seed_thread_rng());
}

fn seed_thread_rng() -> ContextRng {
    tracing::trace!(thread = ?std::thread::current().id(), "seeding thread-local generator");
    ContextRng::from_entropy()
}

/// Lend the calling thread's generator to `f`.
///
/// `f` must not call `with_thread_rng` again; the generator is already borrowed.
pub fn with_thread_rng<R>(f: impl FnOnce(&mut ContextRng) -> R) -> R {
    THREAD_RNG.with(|rng| f(&mut rng.borrow_mut()))
}
