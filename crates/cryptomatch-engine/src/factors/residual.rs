use cryptomatch_core::constants::{RESIDUAL_MAX, RESIDUAL_MIN};
use cryptomatch_core::traits::RandomSource;

/// Residual signal: stands in for community/engagement data this engine
/// does not model. Uniform integer in [60, 95], one draw from `rng`.
pub fn draw<R: RandomSource + ?Sized>(rng: &mut R) -> u8 {
    // RESIDUAL_MAX < 256
    rng.next_in_range(RESIDUAL_MIN, RESIDUAL_MAX) as u8
}

#[cfg(test)]
mod tests {
    use cryptomatch_core::traits::{FixedSequence, RngSource};

    use super::*;

    #[test]
    fn draws_stay_in_bounds() {
        let mut rng = RngSource::seeded(99);
        for _ in 0..500 {
            let v = draw(&mut rng);
            assert!((60..=95).contains(&v), "residual {v} out of bounds");
        }
    }

    #[test]
    fn fixed_source_pins_the_value() {
        let mut rng = FixedSequence::constant(80);
        assert_eq!(draw(&mut rng), 80);
    }

    #[test]
    fn out_of_range_fixed_values_are_clamped() {
        let mut rng = FixedSequence::new(vec![0, 1000]);
        assert_eq!(draw(&mut rng), 60);
        assert_eq!(draw(&mut rng), 95);
    }
}
