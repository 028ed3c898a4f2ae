//! Process-wide shared instances.

use std::any::{type_name, Any, TypeId};
use std::collections::HashMap;
use std::marker::PhantomData;
use std::sync::{Arc, Mutex, OnceLock, PoisonError};

use crate::distributions::{CatalogDistribution, RangeDistribution};
use crate::engine::{Engine, SeedSource};
use crate::error::{RandomError, Result};
use crate::generator::Generator;

type Slot = Arc<dyn Any + Send + Sync>;

static REGISTRY: OnceLock<Mutex<HashMap<TypeId, Slot>>> = OnceLock::new();

/// Process-wide scope: one lazily constructed `G` shared by every thread.
///
/// Every draw locks the instance's `Mutex`; concurrent draws on the same
/// instantiation are serialised. The instance is seeded exactly once even
/// when several threads race to first use.
///
/// A panic while the instance is locked does not retire it: later draws
/// continue the stream.
///
/// # Deadlocks
///
/// Accessing the same instantiation again from inside [`with`](Self::with),
/// or from `G::default()`, never returns: the instance's lock (or its
/// one-time initialisation) is already held by the calling thread. Unlike
/// [`Local`](super::Local), this does not panic.
///
/// # Examples
///
/// ```rust
/// use randgen_core::presets::FloatGen;
/// use randgen_core::shared::Global;
///
/// let price = Global::<FloatGen<f64>>::range(100.0, 1000.0).unwrap();
/// assert!((100.0..1000.0).contains(&price));
/// ```
pub struct Global<G>(PhantomData<fn() -> G>);

impl<G: Default + Send + 'static> Global<G> {
    /// Runs `f` against the process-wide instance while holding its lock,
    /// constructing the instance first if needed.
    pub fn with<R>(f: impl FnOnce(&mut G) -> R) -> R {
        let slot = Self::slot();
        let instance = slot.get_or_init(|| {
            tracing::trace!(instance = type_name::<G>(), "Process-wide instance created");
            Mutex::new(G::default())
        });
        let mut generator = instance.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut generator)
    }

    fn slot() -> Arc<OnceLock<Mutex<G>>> {
        let registry = REGISTRY.get_or_init(|| Mutex::new(HashMap::new()));
        // Only the empty slot is created under the registry lock; the
        // instance itself is built by OnceLock::get_or_init
        let slot = {
            let mut slots = registry.lock().unwrap_or_else(PoisonError::into_inner);
            Arc::clone(
                slots
                    .entry(TypeId::of::<G>())
                    .or_insert_with(|| Arc::new(OnceLock::<Mutex<G>>::new()) as Slot),
            )
        };

        slot.downcast::<OnceLock<Mutex<G>>>()
            .expect("registry entry keyed by its own TypeId")
    }
}

impl<T, D, E, S> Global<Generator<T, D, E, S>>
where
    T: 'static,
    D: CatalogDistribution<Output = T> + Send + 'static,
    E: Engine + Send + 'static,
    S: SeedSource + Default + Send + 'static,
{
    /// Draws one value with the default parameters.
    #[inline]
    pub fn value() -> T {
        Self::with(Generator::value)
    }

    /// Draws one value with a one-shot parameter object.
    ///
    /// # Errors
    ///
    /// Returns the [`RandomError`] raised while validating `args`.
    #[inline]
    pub fn value_param<P>(args: P) -> Result<T>
    where
        P: TryInto<D::Param, Error = RandomError>,
    {
        Self::with(|generator| generator.value_param(args))
    }

    /// Returns the seed of the process-wide instance.
    pub fn seed() -> u64 {
        Self::with(|generator| generator.seed())
    }
}

impl<T, D, E, S> Global<Generator<T, D, E, S>>
where
    T: 'static,
    D: RangeDistribution<Output = T> + Send + 'static,
    E: Engine + Send + 'static,
    S: SeedSource + Default + Send + 'static,
{
    /// Draws one value constrained to `[min, max]`.
    ///
    /// # Errors
    ///
    /// Returns the [`RandomError`] raised while validating the bounds.
    #[inline]
    pub fn range(min: D::Bound, max: D::Bound) -> Result<T> {
        Self::with(|generator| generator.range(min, max))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distributions::{Bernoulli, UniformInt};
    use crate::engine::FixedSeed;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::sync::atomic::{AtomicU32, Ordering};
    use std::thread;

    static SEED_CALLS: AtomicU32 = AtomicU32::new(0);

    /// Seed source counting its invocations process-wide. Used by one test
    /// only, so the count is not shared with other tests.
    #[derive(Default)]
    struct CountingSeed;

    impl SeedSource for CountingSeed {
        fn next_seed(&mut self) -> u64 {
            SEED_CALLS.fetch_add(1, Ordering::SeqCst);
            314
        }
    }

    #[test]
    fn test_threads_share_one_stream_seeded_once() {
        type Counted = Generator<u64, UniformInt<u64>, StdRng, CountingSeed>;

        let workers: Vec<_> = (0..8)
            .map(|_| {
                thread::spawn(|| {
                    (0..100)
                        .map(|_| Global::<Counted>::value())
                        .collect::<Vec<u64>>()
                })
            })
            .collect();

        let mut drawn: Vec<u64> = workers
            .into_iter()
            .flat_map(|worker| worker.join().unwrap())
            .collect();

        assert_eq!(SEED_CALLS.load(Ordering::SeqCst), 1);

        let mut engine = StdRng::seed_from_u64(314);
        let dist = UniformInt::<u64>::default();
        let mut expected: Vec<u64> = (0..800).map(|_| dist.sample(&mut engine)).collect();

        drawn.sort_unstable();
        expected.sort_unstable();
        assert_eq!(drawn, expected, "every draw must come from the one shared stream");
    }

    #[test]
    fn test_seed_reported() {
        type Fixed = Generator<i16, UniformInt<i16>, StdRng, FixedSeed<11>>;
        assert_eq!(Global::<Fixed>::seed(), 11);
        assert!((-5..=5).contains(&Global::<Fixed>::range(-5, 5).unwrap()));
    }

    #[test]
    fn test_value_param_validated() {
        type Coin = Generator<bool, Bernoulli, StdRng, FixedSeed<5>>;
        assert!(Global::<Coin>::value_param(1.0).unwrap());
        assert!(Global::<Coin>::value_param(-0.1).is_err());
    }
}
