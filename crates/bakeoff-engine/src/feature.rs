use std::{fmt, ops::Index};

use serde::{Serialize, Serializer, ser::SerializeMap as _};

/// One of the seven tracked recipe attributes.
///
/// The declaration order is the canonical feature order used by every
/// [`FeatureVector`]: the five ingredient ratios first, then bake temperature and time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Feature {
    Sugar,
    Butter,
    Chocolate,
    Flour,
    Eggs,
    Temp,
    Time,
}

impl Feature {
    pub const LEN: usize = 7;
    pub const INGREDIENT_LEN: usize = 5;

    pub const ALL: [Self; Self::LEN] = [
        Self::Sugar,
        Self::Butter,
        Self::Chocolate,
        Self::Flour,
        Self::Eggs,
        Self::Temp,
        Self::Time,
    ];

    pub const INGREDIENTS: [Self; Self::INGREDIENT_LEN] = [
        Self::Sugar,
        Self::Butter,
        Self::Chocolate,
        Self::Flour,
        Self::Eggs,
    ];

    /// Column header used for this feature in reference datasets and forms.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sugar => "Sugar",
            Self::Butter => "Butter",
            Self::Chocolate => "Chocolate",
            Self::Flour => "Flour",
            Self::Eggs => "Eggs",
            Self::Temp => "Temp",
            Self::Time => "Time",
        }
    }

    /// Position of this feature in a [`FeatureVector`].
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    #[must_use]
    pub const fn is_ingredient(self) -> bool {
        self.index() < Self::INGREDIENT_LEN
    }

    /// Looks up a feature by its exact column header.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.name() == name)
    }
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

/// Ordered values of all seven features.
///
/// Nothing about the values is validated here; a vector produced from user input
/// must go through [`Proposal`](crate::Proposal) before it is trusted.
///
/// # Example
///
/// ```
/// use bakeoff_engine::{Feature, FeatureVector};
///
/// let v = FeatureVector::from_parts([0.3, 0.2, 0.2, 0.2, 0.1], 350.0, 25.0);
/// assert_eq!(v[Feature::Butter], 0.2);
/// assert_eq!(v[Feature::Temp], 350.0);
/// assert!((v.ingredient_sum() - 1.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeatureVector([f64; Feature::LEN]);

impl FeatureVector {
    #[must_use]
    pub const fn from_array(values: [f64; Feature::LEN]) -> Self {
        Self(values)
    }

    #[must_use]
    pub const fn from_parts(
        ingredients: [f64; Feature::INGREDIENT_LEN],
        temp: f64,
        time: f64,
    ) -> Self {
        let [sugar, butter, chocolate, flour, eggs] = ingredients;
        Self([sugar, butter, chocolate, flour, eggs, temp, time])
    }

    /// Builds a vector by evaluating `f` for each feature in canonical order.
    pub fn from_fn<F>(mut f: F) -> Self
    where
        F: FnMut(Feature) -> f64,
    {
        Self(Feature::ALL.map(&mut f))
    }

    #[must_use]
    pub const fn get(&self, feature: Feature) -> f64 {
        self.0[feature.index()]
    }

    /// Returns a copy with `feature` replaced by `value`.
    #[must_use]
    pub const fn with(mut self, feature: Feature, value: f64) -> Self {
        self.0[feature.index()] = value;
        self
    }

    #[must_use]
    pub const fn as_array(&self) -> &[f64; Feature::LEN] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = (Feature, f64)> + '_ {
        Feature::ALL.into_iter().zip(self.0.iter().copied())
    }

    #[must_use]
    pub fn ingredients(&self) -> [f64; Feature::INGREDIENT_LEN] {
        Feature::INGREDIENTS.map(|f| self.get(f))
    }

    #[must_use]
    pub fn ingredient_sum(&self) -> f64 {
        self.ingredients().iter().sum()
    }
}

impl Index<Feature> for FeatureVector {
    type Output = f64;

    fn index(&self, feature: Feature) -> &f64 {
        &self.0[feature.index()]
    }
}

/// Serialized as an object keyed by column name, in canonical order.
impl Serialize for FeatureVector {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(Feature::LEN))?;
        for (feature, value) in self.iter() {
            map.serialize_entry(feature.name(), &value)?;
        }
        map.end()
    }
}
