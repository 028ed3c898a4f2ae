//! Per-thread shared instances.

use std::any::{type_name, Any, TypeId};
use std::cell::RefCell;
use std::collections::HashMap;
use std::marker::PhantomData;
use std::rc::Rc;

use crate::distributions::{CatalogDistribution, RangeDistribution};
use crate::engine::{Engine, SeedSource};
use crate::error::{RandomError, Result};
use crate::generator::Generator;

thread_local! {
    static REGISTRY: RefCell<HashMap<TypeId, Rc<dyn Any>>> = RefCell::new(HashMap::new());
}

/// Thread-local scope: one lazily constructed `G` per thread.
///
/// Draws need no locking. Each thread seeds its own instance once, so draws
/// on different threads form independent streams.
///
/// # Panics
///
/// Accessing the same instantiation again from inside [`with`](Self::with)
/// panics, as the instance is already mutably borrowed.
///
/// # Examples
///
/// ```rust
/// use randgen_core::presets::IntGen;
/// use randgen_core::shared::Local;
///
/// let roll = Local::<IntGen>::range(1, 6).unwrap();
/// assert!((1..=6).contains(&roll));
/// ```
pub struct Local<G>(PhantomData<fn() -> G>);

impl<G: Default + 'static> Local<G> {
    /// Runs `f` against this thread's instance, constructing it first if
    /// needed.
    pub fn with<R>(f: impl FnOnce(&mut G) -> R) -> R {
        let instance = Self::instance();
        let mut generator = instance.borrow_mut();
        f(&mut generator)
    }

    fn instance() -> Rc<RefCell<G>> {
        let key = TypeId::of::<G>();
        let existing = REGISTRY.with(|registry| registry.borrow().get(&key).cloned());

        let entry = match existing {
            Some(entry) => entry,
            None => {
                // Built outside the registry borrow; G::default may use
                // other thread-local scopes
                let created: Rc<dyn Any> = Rc::new(RefCell::new(G::default()));
                tracing::trace!(instance = type_name::<G>(), "Thread-local instance created");
                REGISTRY.with(|registry| {
                    Rc::clone(registry.borrow_mut().entry(key).or_insert(created))
                })
            }
        };

        entry
            .downcast::<RefCell<G>>()
            .expect("registry entry keyed by its own TypeId")
    }
}

impl<T, D, E, S> Local<Generator<T, D, E, S>>
where
    T: 'static,
    D: CatalogDistribution<Output = T> + 'static,
    E: Engine + 'static,
    S: SeedSource + Default + 'static,
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

    /// Returns the seed of this thread's instance.
    pub fn seed() -> u64 {
        Self::with(|generator| generator.seed())
    }
}

impl<T, D, E, S> Local<Generator<T, D, E, S>>
where
    T: 'static,
    D: RangeDistribution<Output = T> + 'static,
    E: Engine + 'static,
    S: SeedSource + Default + 'static,
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
    use crate::distributions::UniformInt;
    use crate::engine::FixedSeed;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::cell::Cell;
    use std::thread;

    thread_local! {
        static SEED_CALLS: Cell<u32> = const { Cell::new(0) };
    }

    /// Seed source counting its invocations on the current thread.
    #[derive(Default)]
    struct CountingSeed;

    impl SeedSource for CountingSeed {
        fn next_seed(&mut self) -> u64 {
            SEED_CALLS.with(|calls| calls.set(calls.get() + 1));
            42
        }
    }

    type Counted = Generator<i32, UniformInt<i32>, StdRng, CountingSeed>;

    fn reference_stream(seed: u64, len: usize) -> Vec<i32> {
        let mut engine = StdRng::seed_from_u64(seed);
        let dist = UniformInt::<i32>::default();
        (0..len).map(|_| dist.sample(&mut engine)).collect()
    }

    #[test]
    fn test_seeded_once_per_thread() {
        for _ in 0..100 {
            Local::<Counted>::value();
            Local::<Counted>::range(0, 9).unwrap();
        }
        assert_eq!(SEED_CALLS.with(Cell::get), 1);
        assert_eq!(Local::<Counted>::seed(), 42);
    }

    #[test]
    fn test_calls_share_one_stream() {
        let drawn: Vec<i32> = (0..20).map(|_| Local::<Counted>::value()).collect();
        assert_eq!(drawn, reference_stream(42, 20));
    }

    #[test]
    fn test_threads_hold_separate_instances() {
        let here: Vec<i32> = (0..5).map(|_| Local::<Counted>::value()).collect();

        let there = thread::spawn(|| {
            let drawn: Vec<i32> = (0..5).map(|_| Local::<Counted>::value()).collect();
            (drawn, SEED_CALLS.with(Cell::get))
        })
        .join()
        .unwrap();

        // Same seed, fresh instance: the spawned thread restarts the stream
        assert_eq!(there.0, here);
        assert_eq!(there.1, 1);
    }

    #[test]
    fn test_instantiations_are_distinct() {
        type One = Generator<i32, UniformInt<i32>, StdRng, FixedSeed<1>>;
        type Two = Generator<i32, UniformInt<i32>, StdRng, FixedSeed<2>>;

        let one: Vec<i32> = (0..10).map(|_| Local::<One>::value()).collect();
        let two: Vec<i32> = (0..10).map(|_| Local::<Two>::value()).collect();

        assert_eq!(one, reference_stream(1, 10));
        assert_eq!(two, reference_stream(2, 10));
    }

    #[test]
    fn test_param_not_persisted() {
        assert_eq!(Local::<Counted>::value_param((3, 3)).unwrap(), 3);
        Local::<Counted>::with(|generator| {
            assert_eq!(generator.distribution().param().min(), 0);
        });
    }
}
