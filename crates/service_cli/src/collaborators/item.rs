//! A small record drawn field by field.

use std::fmt;

use rand::Rng;
use randgen_core::distributions::{RangeDistribution, UniformInt, UniformReal};
use randgen_core::{RandomRange, RandomValue, RandomValueWith};

use crate::{CliError, Result};

/// Record with an integral id and a real price.
///
/// # Capabilities
///
/// - `RandomValue`: id in `[0, 100]`, price in `[100, 1000)`
/// - `RandomValueWith<i32>`: both ranges scaled by a positive modifier
/// - `RandomRange`: each field drawn between the matching fields of the
///   bounds
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Item {
    /// Identifier
    pub id: i32,
    /// Unit price
    pub price: f32,
}

impl Item {
    /// Closed id range of an unmodified draw.
    pub const ID_RANGE: (i32, i32) = (0, 100);

    /// Half-open price range of an unmodified draw.
    pub const PRICE_RANGE: (f32, f32) = (100.0, 1000.0);

    fn draw<R: Rng + ?Sized>(rng: &mut R, id: (i32, i32), price: (f32, f32)) -> Result<Self> {
        Ok(Self {
            id: UniformInt::<i32>::default().sample_range(rng, id.0, id.1)?,
            price: UniformReal::<f32>::default().sample_range(rng, price.0, price.1)?,
        })
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Item {{ id: {}, price: {:.2} }}", self.id, self.price)
    }
}

impl RandomValue for Item {
    type Output = Item;

    fn random_value_from<R: Rng + ?Sized>(rng: &mut R) -> Item {
        Self::draw(rng, Self::ID_RANGE, Self::PRICE_RANGE)
            .expect("constant item ranges are ordered and finite")
    }
}

impl RandomValueWith<i32> for Item {
    type Output = Result<Item>;

    fn random_value_with_from<R: Rng + ?Sized>(rng: &mut R, modifier: i32) -> Result<Item> {
        if modifier < 1 {
            return Err(CliError::InvalidArgument(format!(
                "Item modifier must be positive, got {}",
                modifier
            )));
        }
        let id_max = Self::ID_RANGE.1.checked_mul(modifier).ok_or_else(|| {
            CliError::InvalidArgument(format!("Item modifier {} overflows the id range", modifier))
        })?;
        let scale = modifier as f32;
        Self::draw(
            rng,
            (Self::ID_RANGE.0, id_max),
            (Self::PRICE_RANGE.0 * scale, Self::PRICE_RANGE.1 * scale),
        )
    }
}

impl RandomRange for Item {
    type Output = Result<Item>;

    fn random_range_from<R: Rng + ?Sized>(rng: &mut R, min: Item, max: Item) -> Result<Item> {
        Self::draw(rng, (min.id, max.id), (min.price, max.price))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use randgen_core::CustomGenerator;

    #[test]
    fn test_default_ranges() {
        for _ in 0..1_000 {
            let item = CustomGenerator::<Item>::value();
            assert!((0..=100).contains(&item.id));
            assert!((100.0..1000.0).contains(&item.price));
        }
    }

    #[test]
    fn test_plain_draw_matches_default_bounds() {
        let lower = Item {
            id: Item::ID_RANGE.0,
            price: Item::PRICE_RANGE.0,
        };
        let upper = Item {
            id: Item::ID_RANGE.1,
            price: Item::PRICE_RANGE.1,
        };
        let mut plain = StdRng::seed_from_u64(21);
        let mut ranged = StdRng::seed_from_u64(21);

        for _ in 0..100 {
            let ranged_item =
                CustomGenerator::<Item, Result<Item>>::range_from(&mut ranged, lower, upper).unwrap();
            assert_eq!(CustomGenerator::<Item>::value_from(&mut plain), ranged_item);
        }
    }

    #[test]
    fn test_modifier_scales_both_ranges() {
        let mut rng = StdRng::seed_from_u64(5);
        for _ in 0..1_000 {
            let item = CustomGenerator::<Item, Result<Item>>::value_param_from(&mut rng, 5).unwrap();
            assert!((0..=500).contains(&item.id));
            assert!((500.0..5000.0).contains(&item.price));
        }
    }

    #[test]
    fn test_modifier_rejected() {
        assert!(CustomGenerator::<Item, Result<Item>>::value_param(0).is_err());
        assert!(CustomGenerator::<Item, Result<Item>>::value_param(i32::MAX).is_err());
    }

    #[test]
    fn test_range_uses_both_bounds() {
        let min = Item { id: 10, price: 20.0 };
        let max = Item { id: 12, price: 30.0 };
        let mut rng = StdRng::seed_from_u64(8);

        for _ in 0..1_000 {
            let item = CustomGenerator::<Item, Result<Item>>::range_from(&mut rng, min, max).unwrap();
            assert!((10..=12).contains(&item.id));
            assert!((20.0..30.0).contains(&item.price));
        }
    }

    #[test]
    fn test_range_rejects_inverted_field() {
        let min = Item { id: 1, price: 50.0 };
        let max = Item { id: 5, price: 40.0 };
        let err = CustomGenerator::<Item, Result<Item>>::range(min, max).unwrap_err();
        assert!(matches!(err, CliError::Random(_)));
    }

    #[test]
    fn test_value_from_matches_capability() {
        let mut through_adapter = StdRng::seed_from_u64(1);
        let mut direct = StdRng::seed_from_u64(1);
        assert_eq!(
            CustomGenerator::<Item>::value_from(&mut through_adapter),
            Item::random_value_from(&mut direct)
        );
    }
}
