//! Demo command: a fixed menu of draws repeated for several rounds.
//!
//! Every generator in a run is seeded from one master seed, which is logged,
//! so any run can be replayed by putting that seed in the configuration.

use std::fmt;

use rand::{RngCore, SeedableRng};
use randgen_core::engine::{DefaultEngine, EntropySeed, SeedSource};
use randgen_core::presets::{SeededBoolGen, SeededFloatGen, SeededIntGen};
use randgen_core::CustomGenerator;
use tracing::info;

use crate::collaborators::{Item, RandomString};
use crate::config::DemoConfig;
use crate::Result;

/// Modifier applied to the scaled item draw.
const ITEM_MODIFIER: i32 = 5;

/// Vowel set for the second string draw.
const VOWELS: &str = "aeiou";

/// Values drawn in one round.
#[derive(Clone, Debug, PartialEq)]
pub struct DemoRound {
    /// i32 in `[0, 100]`
    pub small_int: i32,
    /// i64 over the default range
    pub wide_int: i64,
    /// f64 in `[-500, 500)`
    pub real: f64,
    /// bool with the configured probability
    pub coin: bool,
    /// String over the configured charset
    pub text: String,
    /// String over the vowels
    pub vowels: String,
    /// Item with default ranges
    pub item: Item,
    /// Item with scaled ranges
    pub scaled_item: Item,
}

impl fmt::Display for DemoRound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "  int32 [0, 100]      : {}", self.small_int)?;
        writeln!(f, "  int64               : {}", self.wide_int)?;
        writeln!(f, "  double [-500, 500)  : {:.4}", self.real)?;
        writeln!(f, "  bool                : {}", self.coin)?;
        writeln!(f, "  string              : {}", self.text)?;
        writeln!(f, "  string (vowels)     : {}", self.vowels)?;
        writeln!(f, "  item                : {}", self.item)?;
        write!(f, "  item (modifier {})  : {}", ITEM_MODIFIER, self.scaled_item)
    }
}

/// Owned generators for one demo run.
pub struct Demo {
    seed: u64,
    config: DemoConfig,
    small_ints: SeededIntGen,
    wide_ints: SeededIntGen<i64>,
    reals: SeededFloatGen<f64>,
    coins: SeededBoolGen,
    /// Engine driving the custom capabilities
    engine: DefaultEngine,
}

impl Demo {
    /// Creates the generators, seeding each from the configured seed or from
    /// fresh entropy.
    pub fn new(config: &DemoConfig) -> Self {
        let seed = config.seed.unwrap_or_else(|| EntropySeed.next_seed());
        let mut seeds = DefaultEngine::seed_from_u64(seed);

        Self {
            seed,
            config: config.clone(),
            small_ints: SeededIntGen::from_seed(seeds.next_u64()),
            wide_ints: SeededIntGen::from_seed(seeds.next_u64()),
            reals: SeededFloatGen::from_seed(seeds.next_u64()),
            coins: SeededBoolGen::from_seed(seeds.next_u64()),
            engine: DefaultEngine::seed_from_u64(seeds.next_u64()),
        }
    }

    /// Master seed of the run.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Draws one round.
    pub fn round(&mut self) -> Result<DemoRound> {
        Ok(DemoRound {
            small_int: self.small_ints.range(0, 100)?,
            wide_int: self.wide_ints.value(),
            real: self.reals.range(-500.0, 500.0)?,
            coin: self.coins.value_param(self.config.bool_probability)?,
            text: CustomGenerator::<RandomString, Result<String>>::value_param_from(
                &mut self.engine,
                (self.config.string_length, self.config.charset.as_str()),
            )?,
            vowels: CustomGenerator::<RandomString, Result<String>>::value_param_from(
                &mut self.engine,
                (self.config.vowel_string_length, VOWELS),
            )?,
            item: CustomGenerator::<Item>::value_from(&mut self.engine),
            scaled_item: CustomGenerator::<Item, Result<Item>>::value_param_from(
                &mut self.engine,
                ITEM_MODIFIER,
            )?,
        })
    }
}

/// Runs the demo, printing each round.
pub fn run(config: &DemoConfig) -> Result<()> {
    let mut demo = Demo::new(config);
    info!("Running demo: {} rounds, seed {}", config.rounds, demo.seed());

    println!("========================================");
    println!("randgen demo (seed {})", demo.seed());
    println!("========================================");

    for round in 1..=config.rounds {
        let drawn = demo.round()?;
        println!("[Round {}]", round);
        println!("{}", drawn);
    }

    println!("========================================");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded(seed: u64) -> DemoConfig {
        DemoConfig {
            seed: Some(seed),
            ..DemoConfig::default()
        }
    }

    #[test]
    fn test_demo_run() {
        let config = DemoConfig {
            rounds: 2,
            ..DemoConfig::default()
        };
        assert!(run(&config).is_ok());
    }

    #[test]
    fn test_round_ranges() {
        let mut demo = Demo::new(&seeded(7));
        for _ in 0..100 {
            let round = demo.round().unwrap();
            assert!((0..=100).contains(&round.small_int));
            assert!(round.wide_int >= 0);
            assert!((-500.0..500.0).contains(&round.real));
            assert_eq!(round.text.chars().count(), 5);
            assert_eq!(round.vowels.chars().count(), 10);
            assert!(round.vowels.chars().all(|c| VOWELS.contains(c)));
            assert!((0..=100).contains(&round.item.id));
            assert!((0..=500).contains(&round.scaled_item.id));
            assert!((500.0..5000.0).contains(&round.scaled_item.price));
        }
    }

    #[test]
    fn test_same_seed_replays_run() {
        let mut first = Demo::new(&seeded(2024));
        let mut second = Demo::new(&seeded(2024));
        for _ in 0..5 {
            assert_eq!(first.round().unwrap(), second.round().unwrap());
        }
    }

    #[test]
    fn test_coin_follows_probability() {
        let config = DemoConfig {
            bool_probability: 1.0,
            ..seeded(1)
        };
        let mut demo = Demo::new(&config);
        assert!((0..50).all(|_| demo.round().unwrap().coin));
    }
}
