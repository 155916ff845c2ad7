use bakeoff_analysis::bounds::Bounds;
use bakeoff_engine::{Feature, FeatureVector, ProposalAgent};
use rand::{Rng, RngCore};

use crate::composition::SymmetricDirichlet;

/// Agent that proposes a random recipe on every turn.
///
/// The ingredient ratios come from a flat Dirichlet over the five ingredients; Temp and
/// Time are drawn uniformly from the borrowed [`Bounds`], both ends inclusive. The agent
/// keeps no state between turns.
#[derive(Debug, Clone)]
pub struct SamplingAgent<'a> {
    bounds: &'a Bounds,
    composition: SymmetricDirichlet<{ Feature::INGREDIENT_LEN }>,
}

impl<'a> SamplingAgent<'a> {
    #[must_use]
    pub fn new(bounds: &'a Bounds) -> Self {
        Self {
            bounds,
            composition: SymmetricDirichlet::uniform(),
        }
    }

    #[must_use]
    pub fn bounds(&self) -> &'a Bounds {
        self.bounds
    }

    /// Draws a proposal from the given generator.
    pub fn act_with<R>(&self, rng: &mut R) -> FeatureVector
    where
        R: Rng + ?Sized,
    {
        let ingredients = self.composition.sample(rng);
        let temp = self.bounds.temp();
        let time = self.bounds.time();
        FeatureVector::from_parts(
            ingredients,
            rng.random_range(temp.min..=temp.max),
            rng.random_range(time.min..=time.max),
        )
    }

    /// Draws a proposal from the calling thread's generator.
    #[must_use]
    pub fn act(&self) -> FeatureVector {
        self.act_with(&mut rand::rng())
    }
}

impl ProposalAgent for SamplingAgent<'_> {
    fn propose(&self, rng: &mut dyn RngCore) -> FeatureVector {
        self.act_with(rng)
    }
}

#[cfg(test)]
mod tests {
    use std::thread;

    use bakeoff_analysis::bounds::FeatureRange;
    use rand::SeedableRng as _;
    use rand_pcg::Pcg32;

    use super::*;
    use crate::seed::AgentSeed;

    fn bounds(temp: (f64, f64), time: (f64, f64)) -> Bounds {
        Bounds::new(
            FeatureRange::new(Feature::Temp, temp.0, temp.1).unwrap(),
            FeatureRange::new(Feature::Time, time.0, time.1).unwrap(),
        )
    }

    fn assert_well_formed(v: &FeatureVector, bounds: &Bounds) {
        for r in v.ingredients() {
            assert!((0.0..=1.0).contains(&r), "ingredient {r}");
        }
        assert!((v.ingredient_sum() - 1.0).abs() < 1e-6);
        assert!(bounds.temp().contains(v[Feature::Temp]));
        assert!(bounds.time().contains(v[Feature::Time]));
    }

    #[test]
    fn test_many_draws_are_well_formed() {
        let bounds = bounds((325.0, 375.0), (20.0, 30.0));
        let agent = SamplingAgent::new(&bounds);
        let mut rng = Pcg32::seed_from_u64(2024);
        for _ in 0..5000 {
            assert_well_formed(&agent.act_with(&mut rng), &bounds);
        }
    }

    #[test]
    fn test_single_point_bounds() {
        let bounds = bounds((350.0, 350.0), (25.0, 25.0));
        let agent = SamplingAgent::new(&bounds);
        for _ in 0..100 {
            let v = agent.act();
            assert_eq!(v[Feature::Temp], 350.0);
            assert_eq!(v[Feature::Time], 25.0);
        }
    }

    #[test]
    fn test_same_seed_reproduces_turns() {
        let bounds = bounds((325.0, 375.0), (20.0, 30.0));
        let agent = SamplingAgent::new(&bounds);
        let seed: AgentSeed = "0123456789abcdef0123456789abcdef".parse().unwrap();
        let (mut a, mut b) = (seed.rng(), seed.rng());
        for _ in 0..20 {
            assert_eq!(agent.act_with(&mut a), agent.act_with(&mut b));
        }
    }

    #[test]
    fn test_propose_matches_act_with() {
        let bounds = bounds((325.0, 375.0), (20.0, 30.0));
        let agent = SamplingAgent::new(&bounds);
        let dyn_agent: &dyn ProposalAgent = &agent;
        let mut a = Pcg32::seed_from_u64(5);
        let mut b = Pcg32::seed_from_u64(5);
        assert_eq!(dyn_agent.propose(&mut a), agent.act_with(&mut b));
    }

    #[test]
    fn test_consecutive_turns_differ() {
        let bounds = bounds((325.0, 375.0), (20.0, 30.0));
        let agent = SamplingAgent::new(&bounds);
        let mut rng = Pcg32::seed_from_u64(9);
        assert_ne!(agent.act_with(&mut rng), agent.act_with(&mut rng));
    }

    #[test]
    fn test_shared_agent_across_threads() {
        let bounds = bounds((300.0, 400.0), (15.0, 40.0));
        let agent = SamplingAgent::new(&bounds);
        thread::scope(|s| {
            for _ in 0..4 {
                s.spawn(|| {
                    for _ in 0..250 {
                        assert_well_formed(&agent.act(), &bounds);
                    }
                });
            }
        });
    }
}
