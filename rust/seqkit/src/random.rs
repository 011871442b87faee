//! The process-wide random source consumed by [`Seq::shuffle`](crate::Seq::shuffle).
//!
//! By default the source is a `fastrand` generator seeded from the wall clock the first
//! time it is needed. Tests replace it with [`set_random_source`] (or
//! [`seed_random_source`]) to get deterministic shuffles.
//!
//! Access is serialized by a mutex, so concurrent use is memory-safe. Replacing the
//! source is still meant to happen once, during single-threaded initialization: a
//! replacement racing with shuffles on other threads has no defined ordering relative
//! to them. The lock is held only while indices are drawn, so element `Clone` impls may
//! shuffle freely, but a [`RandomSource`] must not call back into `shuffle`.

use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::{SystemTime, UNIX_EPOCH};

/// A source of uniformly distributed indices.
pub trait RandomSource: Send {
    /// Returns a uniformly distributed index in `0..bound`. `bound` is never zero.
    fn next_index(&mut self, bound: usize) -> usize;
}

impl RandomSource for fastrand::Rng {
    fn next_index(&mut self, bound: usize) -> usize {
        self.usize(..bound)
    }
}

static SOURCE: Mutex<Option<Box<dyn RandomSource>>> = Mutex::new(None);

/// Replaces the process-wide random source.
pub fn set_random_source<R>(source: R)
where
    R: RandomSource + 'static,
{
    log::debug!("installing a custom random source");
    *lock() = Some(Box::new(source));
}

/// Replaces the process-wide random source with a `fastrand` generator seeded with `seed`.
pub fn seed_random_source(seed: u64) {
    log::debug!("seeding the random source with {seed}");
    *lock() = Some(Box::new(fastrand::Rng::with_seed(seed)));
}

/// Restores the default, wall-clock seeded random source.
pub fn reset_random_source() {
    log::debug!("resetting the random source");
    *lock() = None;
}

pub(crate) fn with_random_source<R>(f: impl FnOnce(&mut dyn RandomSource) -> R) -> R {
    let mut source = lock();
    let source = source.get_or_insert_with(|| {
        let seed = wall_clock_seed();
        log::debug!("seeding the default random source from the wall clock ({seed})");
        Box::new(fastrand::Rng::with_seed(seed))
    });
    f(source.as_mut())
}

fn lock() -> MutexGuard<'static, Option<Box<dyn RandomSource>>> {
    SOURCE.lock().unwrap_or_else(PoisonError::into_inner)
}

fn wall_clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_nanos() as u64)
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Countdown(usize);

    impl RandomSource for Countdown {
        fn next_index(&mut self, bound: usize) -> usize {
            self.0 = self.0.wrapping_add(1);
            self.0 % bound
        }
    }

    #[test]
    fn fastrand_source_stays_in_bounds() {
        let mut rng = fastrand::Rng::with_seed(42);
        for bound in 1..50 {
            assert!(rng.next_index(bound) < bound);
        }
    }

    #[test]
    fn custom_source_draws_in_bounds() {
        let mut source = Countdown(0);
        assert_eq!(source.next_index(10), 1);
        assert_eq!(source.next_index(10), 2);
        assert_eq!(source.next_index(2), 1);
    }
}
