use std::{fmt, num::ParseIntError, str::FromStr};

use rand::{
    Rng, SeedableRng as _,
    distr::{Distribution, StandardUniform},
};
use rand_pcg::Pcg32;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Seed for deterministic agent turns.
///
/// A 128-bit seed for the agent's random number generator. The same seed yields the
/// same sequence of proposals, which makes rounds reproducible for debugging and
/// testing. Serialized and parsed as 32 lowercase hex characters.
///
/// ```
/// use bakeoff_ai::seed::AgentSeed;
/// use rand::Rng as _;
///
/// let seed: AgentSeed = rand::rng().random();
/// let parsed: AgentSeed = seed.to_string().parse().unwrap();
/// assert_eq!(seed, parsed);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AgentSeed([u8; 16]);

#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum SeedParseError {
    #[display("invalid hex: expected 32 characters, got {len}")]
    Length { len: usize },
    #[display("invalid hex: {input}")]
    Digits {
        input: String,
        source: ParseIntError,
    },
}

impl AgentSeed {
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 16]) -> Self {
        Self(bytes)
    }

    /// Generator seeded from this seed.
    #[must_use]
    pub fn rng(&self) -> Pcg32 {
        Pcg32::from_seed(self.0)
    }
}

impl fmt::Display for AgentSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:032x}", u128::from_be_bytes(self.0))
    }
}

impl FromStr for AgentSeed {
    type Err = SeedParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != 32 {
            return Err(SeedParseError::Length { len: s.len() });
        }
        let num = u128::from_str_radix(s, 16).map_err(|source| SeedParseError::Digits {
            input: s.to_owned(),
            source,
        })?;
        Ok(Self(num.to_be_bytes()))
    }
}

impl Serialize for AgentSeed {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for AgentSeed {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let hex_str = String::deserialize(deserializer)?;
        hex_str.parse().map_err(serde::de::Error::custom)
    }
}

/// Allows generating random `AgentSeed` values with `rng.random()`.
impl Distribution<AgentSeed> for StandardUniform {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> AgentSeed {
        let mut seed = [0; 16];
        rng.fill(&mut seed);
        AgentSeed(seed)
    }
}
