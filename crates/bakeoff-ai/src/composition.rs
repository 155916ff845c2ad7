//! Random ingredient compositions.
//!
//! A symmetric Dirichlet draw over `N` components is obtained by drawing `N`
//! independent `Gamma(α, 1)` variates and dividing each by their sum. With `α = 1`
//! every point of the simplex is equally likely.

use rand::{Rng, distr::Distribution};
use rand_distr::Gamma;

#[derive(Debug, Clone, PartialEq, derive_more::Display, derive_more::Error)]
pub enum CompositionError {
    #[display("concentration must be finite and positive, got {concentration}")]
    InvalidConcentration { concentration: f64 },
}

/// Symmetric Dirichlet distribution over `N` components.
///
/// Every sample has components in `[0, 1]` summing to 1 up to rounding.
///
/// ```
/// use bakeoff_ai::composition::SymmetricDirichlet;
/// use rand::SeedableRng as _;
///
/// let dirichlet = SymmetricDirichlet::<5>::uniform();
/// let mut rng = rand_pcg::Pcg32::seed_from_u64(1);
/// let ratios = dirichlet.sample(&mut rng);
/// assert!((ratios.iter().sum::<f64>() - 1.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone)]
pub struct SymmetricDirichlet<const N: usize> {
    concentration: f64,
    gamma: Gamma<f64>,
}

impl<const N: usize> SymmetricDirichlet<N> {
    pub fn new(concentration: f64) -> Result<Self, CompositionError> {
        const { assert!(N > 0, "a composition needs at least one component") };
        if !concentration.is_finite() || concentration <= 0.0 {
            return Err(CompositionError::InvalidConcentration { concentration });
        }
        let gamma = Gamma::new(concentration, 1.0)
            .map_err(|_| CompositionError::InvalidConcentration { concentration })?;
        Ok(Self {
            concentration,
            gamma,
        })
    }

    /// The flat Dirichlet (all concentrations 1).
    #[must_use]
    pub fn uniform() -> Self {
        Self::new(1.0).expect("unit concentration is always valid")
    }

    #[must_use]
    pub fn concentration(&self) -> f64 {
        self.concentration
    }

    /// Draws one composition.
    pub fn sample<R>(&self, rng: &mut R) -> [f64; N]
    where
        R: Rng + ?Sized,
    {
        loop {
            let draws: [f64; N] = std::array::from_fn(|_| self.gamma.sample(rng));
            let sum = draws.iter().sum::<f64>();
            // All-zero underflow is astronomically rare but would divide by zero.
            if sum > 0.0 && sum.is_finite() {
                return draws.map(|x| x / sum);
            }
        }
    }
}

impl<const N: usize> Distribution<[f64; N]> for SymmetricDirichlet<N> {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> [f64; N] {
        SymmetricDirichlet::sample(self, rng)
    }
}
