//! Integration tests for module exports.
//!
//! Verify that public modules and types are reachable via absolute paths and
//! through the crate-root re-exports.

use rand::Rng;

/// Test that the crate-root re-exports cover the generator surface.
#[test]
fn test_root_exports() {
    use randgen_core::{
        CatalogDistribution, CustomGenerator, Engine, EntropySeed, ExplicitSeed, FixedSeed,
        Generator, Global, IntegerType, Local, RandomError, RandomRange, RandomValue,
        RandomValueWith, RangeDistribution, RealType, Result, SeedSource, SyncGenerator,
    };

    fn integral<T: IntegerType>() {}
    fn real<T: RealType>() {}
    fn engine<E: Engine>() {}
    fn source<S: SeedSource>() {}
    fn catalog<D: CatalogDistribution>() {}
    fn ranged<D: RangeDistribution>() {}

    integral::<u16>();
    real::<f64>();
    engine::<rand::rngs::StdRng>();
    source::<EntropySeed>();
    source::<FixedSeed<1>>();
    source::<ExplicitSeed>();
    catalog::<randgen_core::distributions::Bernoulli>();
    ranged::<randgen_core::distributions::UniformInt<u8>>();

    let _: Option<Generator<i32, randgen_core::distributions::UniformInt<i32>>> = None;
    let _: Option<SyncGenerator<()>> = None;
    let _: Option<Local<()>> = None;
    let _: Option<Global<()>> = None;
    let _: Option<CustomGenerator<()>> = None;
    let _: Result<()> = Err(RandomError::InvalidParameter {
        distribution: "test",
        reason: String::new(),
    });

    struct Token;
    impl RandomValue for Token {
        type Output = u8;
        fn random_value_from<R: Rng + ?Sized>(rng: &mut R) -> u8 {
            rng.gen()
        }
    }
    impl RandomValueWith<u8> for Token {
        type Output = u8;
        fn random_value_with_from<R: Rng + ?Sized>(rng: &mut R, max: u8) -> u8 {
            rng.gen_range(0..=max)
        }
    }
    impl RandomRange<u8> for Token {
        type Output = u8;
        fn random_range_from<R: Rng + ?Sized>(rng: &mut R, min: u8, max: u8) -> u8 {
            rng.gen_range(min..=max)
        }
    }

    let _ = CustomGenerator::<Token, u8>::value();
    assert!(CustomGenerator::<Token, u8>::value_param(3_u8) <= 3);
    assert_eq!(CustomGenerator::<Token, u8>::range(9_u8, 9_u8), 9);
}

/// Test that every catalog entry is default-constructible and samples.
#[test]
fn test_catalog_exports() {
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use randgen_core::distributions::*;

    let mut rng = StdRng::seed_from_u64(1);

    let _: i32 = UniformInt::<i32>::default().sample(&mut rng);
    let _: f64 = UniformReal::<f64>::default().sample(&mut rng);
    let _: bool = Bernoulli::default().sample(&mut rng);
    let _: u32 = Binomial::<u32>::default().sample(&mut rng);
    let _: u32 = NegBinomial::<u32>::default().sample(&mut rng);
    let _: u32 = Geometric::<u32>::default().sample(&mut rng);
    let _: u32 = Poisson::<u32>::default().sample(&mut rng);
    let _: f64 = Exponential::<f64>::default().sample(&mut rng);
    let _: f64 = Gamma::<f64>::default().sample(&mut rng);
    let _: f64 = Weibull::<f64>::default().sample(&mut rng);
    let _: f64 = ExtremeValue::<f64>::default().sample(&mut rng);
    let _: f64 = Gaussian::<f64>::default().sample(&mut rng);
    let _: f64 = LogNormal::<f64>::default().sample(&mut rng);
    let _: f64 = ChiSquared::<f64>::default().sample(&mut rng);
    let _: f64 = Cauchy::<f64>::default().sample(&mut rng);
    let _: f64 = FisherF::<f64>::default().sample(&mut rng);
    let _: f64 = StudentT::<f64>::default().sample(&mut rng);
    let _: u32 = Discrete::<u32>::default().sample(&mut rng);
    let _: f32 = PiecewiseConstant::<f32>::default().sample(&mut rng);
    let _: f32 = PiecewiseLinear::<f32>::default().sample(&mut rng);
}

/// Test that the presets are reachable and default-wired.
#[test]
fn test_preset_exports() {
    use randgen_core::presets::{
        BoolGen, DefaultEngine, DefaultSeed, FloatGen, IntGen, SeededBoolGen, SeededFloatGen,
        SeededIntGen,
    };

    let _: IntGen = IntGen::new();
    let _: FloatGen = FloatGen::new();
    let _: BoolGen = BoolGen::new();
    let _: SeededIntGen = SeededIntGen::from_seed(1);
    let _: SeededFloatGen = SeededFloatGen::from_seed(1);
    let _: SeededBoolGen = SeededBoolGen::from_seed(1);
    let _: Option<(DefaultEngine, DefaultSeed)> = None;
}
