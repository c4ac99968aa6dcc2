use std::{fmt, str::FromStr};

use rand::{
    Rng, SeedableRng as _,
    distr::{Distribution, StandardUniform},
};
use rand_pcg::Pcg32;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Seed for the single random source of a run.
///
/// A 128-bit seed for [`Pcg32`]. Running the same configuration with the same
/// seed reproduces the initial population, every selection, crossover and
/// mutation, and therefore the result.
///
/// Serialized and parsed as a 32-digit hex string.
///
/// # Example
///
/// ```
/// use rand::Rng as _;
/// use sensorga_training::GaSeed;
///
/// let seed: GaSeed = rand::rng().random();
/// let parsed: GaSeed = seed.to_string().parse().unwrap();
/// assert_eq!(seed, parsed);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GaSeed([u8; 16]);

impl GaSeed {
    #[must_use]
    pub const fn from_u128(value: u128) -> Self {
        Self(value.to_be_bytes())
    }

    #[must_use]
    pub const fn as_u128(self) -> u128 {
        u128::from_be_bytes(self.0)
    }

    /// Creates the random source for a run.
    #[must_use]
    pub fn rng(self) -> Pcg32 {
        Pcg32::from_seed(self.0)
    }
}

impl fmt::Display for GaSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:032x}", self.as_u128())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("invalid seed `{input}`: expected up to 32 hex digits")]
pub struct ParseSeedError {
    input: String,
}

impl FromStr for GaSeed {
    type Err = ParseSeedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s.strip_prefix("0x").unwrap_or(s);
        let is_hex = digits.bytes().all(|b| b.is_ascii_hexdigit());
        if digits.is_empty() || digits.len() > 32 || !is_hex {
            return Err(ParseSeedError {
                input: s.to_owned(),
            });
        }
        u128::from_str_radix(digits, 16)
            .map(Self::from_u128)
            .map_err(|_| ParseSeedError {
                input: s.to_owned(),
            })
    }
}

impl Serialize for GaSeed {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for GaSeed {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let hex_str = String::deserialize(deserializer)?;
        hex_str.parse().map_err(serde::de::Error::custom)
    }
}

/// Allows drawing fresh seeds with `rng.random()`.
impl Distribution<GaSeed> for StandardUniform {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> GaSeed {
        let mut seed = [0; 16];
        rng.fill(&mut seed);
        GaSeed(seed)
    }
}
