use rand::Rng;

use crate::engine::premium::PremiumStatus;
use crate::engine::screen::ScreenId;

pub const DEFAULT_AD_CHANCE: f64 = 0.75;

/// Source of uniform draws in `[0, 1)`.
pub trait RandomSource {
    fn next_unit(&mut self) -> f64;
}

/// Adapts any `rand` generator.
pub struct RngSource<R>(pub R);

impl<R: Rng> RandomSource for RngSource<R> {
    fn next_unit(&mut self) -> f64 {
        self.0.gen_range(0.0..1.0)
    }
}

pub struct AdGate<R> {
    source: R,
    ad_chance: f64,
}

impl<R: RandomSource> AdGate<R> {
    pub fn new(source: R, ad_chance: f64) -> Self {
        Self {
            source,
            ad_chance: ad_chance.clamp(0.0, 1.0),
        }
    }

    pub fn ad_chance(&self) -> f64 {
        self.ad_chance
    }

    /// Interrupts with probability `ad_chance`.
    pub fn should_interrupt(&mut self) -> bool {
        let draw = self.source.next_unit();
        let interrupt = draw > 1.0 - self.ad_chance;
        tracing::debug!(draw, ad_chance = self.ad_chance, interrupt, "ad gate draw");
        interrupt
    }

    /// Never draws for premium users or ungated targets.
    pub fn should_interrupt_for(&mut self, target: ScreenId, premium: PremiumStatus) -> bool {
        if premium.is_active() || !target.is_gated() {
            return false;
        }
        self.should_interrupt()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    struct Fixed(f64);

    impl RandomSource for Fixed {
        fn next_unit(&mut self) -> f64 {
            self.0
        }
    }

    struct Counting {
        draws: usize,
    }

    impl RandomSource for Counting {
        fn next_unit(&mut self) -> f64 {
            self.draws += 1;
            0.99
        }
    }

    #[test]
    fn test_threshold_boundary() {
        // 1.0 - 0.75 == 0.25; only strictly greater draws interrupt
        assert!(!AdGate::new(Fixed(0.25), 0.75).should_interrupt());
        assert!(AdGate::new(Fixed(0.26), 0.75).should_interrupt());
        assert!(!AdGate::new(Fixed(0.0), 0.75).should_interrupt());
    }

    #[test]
    fn test_zero_chance_never_interrupts() {
        assert!(!AdGate::new(Fixed(0.999), 0.0).should_interrupt());
    }

    #[test]
    fn test_chance_is_clamped() {
        assert_eq!(AdGate::new(Fixed(0.5), 3.0).ad_chance(), 1.0);
        assert_eq!(AdGate::new(Fixed(0.5), -1.0).ad_chance(), 0.0);
    }

    #[test]
    fn test_premium_skips_draw() {
        let mut gate = AdGate::new(Counting { draws: 0 }, 1.0);
        assert!(!gate.should_interrupt_for(ScreenId::SkillTree, PremiumStatus::new(true)));
        assert_eq!(gate.source.draws, 0);
    }

    #[test]
    fn test_ungated_target_skips_draw() {
        let mut gate = AdGate::new(Counting { draws: 0 }, 1.0);
        assert!(!gate.should_interrupt_for(ScreenId::Premium, PremiumStatus::default()));
        assert_eq!(gate.source.draws, 0);
        assert!(gate.should_interrupt_for(ScreenId::Leaderboard, PremiumStatus::default()));
        assert_eq!(gate.source.draws, 1);
    }

    #[test]
    fn test_rng_source_rate_is_near_chance() {
        let mut gate = AdGate::new(RngSource(SmallRng::seed_from_u64(42)), DEFAULT_AD_CHANCE);
        let hits = (0..10_000).filter(|_| gate.should_interrupt()).count();
        let rate = hits as f64 / 10_000.0;
        assert!((rate - 0.75).abs() < 0.03, "rate was {rate}");
    }
}
