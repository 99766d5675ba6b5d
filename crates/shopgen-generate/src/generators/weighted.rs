use rand::Rng;
use rand::distr::Distribution;
use rand::distr::weighted::WeightedIndex;

use crate::errors::GenerationError;

/// Categorical draw over a fixed set of options with relative weights.
#[derive(Debug, Clone)]
pub struct WeightedChoice<T: Copy> {
    values: Vec<T>,
    index: WeightedIndex<u32>,
}

impl<T: Copy> WeightedChoice<T> {
    pub fn new(table: &[(T, u32)]) -> Result<Self, GenerationError> {
        let values = table.iter().map(|(value, _)| *value).collect();
        let index = WeightedIndex::new(table.iter().map(|(_, weight)| *weight))
            .map_err(|err| GenerationError::InvalidConfig(format!("invalid weights: {err}")))?;
        Ok(Self { values, index })
    }

    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> T {
        self.values[self.index.sample(rng)]
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use shopgen_core::OrderStatus;

    use super::*;

    #[test]
    fn rejects_all_zero_weights() {
        let err = WeightedChoice::new(&[("a", 0), ("b", 0)]).expect_err("zero weights");
        assert!(matches!(err, GenerationError::InvalidConfig(_)));
    }

    #[test]
    fn never_draws_zero_weight_option() {
        let choice = WeightedChoice::new(&[("never", 0), ("always", 3)]).expect("weights");
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        assert!((0..100).all(|_| choice.sample(&mut rng) == "always"));
    }

    #[test]
    fn follows_relative_weights() {
        let choice = WeightedChoice::new(&OrderStatus::WEIGHTED).expect("weights");
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let draws = 10_000;
        let delivered = (0..draws)
            .filter(|_| choice.sample(&mut rng) == OrderStatus::Delivered)
            .count();
        let cancelled = (0..draws)
            .filter(|_| choice.sample(&mut rng) == OrderStatus::Cancelled)
            .count();

        // 35% and 5% expected.
        assert!((3_000..4_000).contains(&delivered), "delivered={delivered}");
        assert!((300..800).contains(&cancelled), "cancelled={cancelled}");
    }
}
