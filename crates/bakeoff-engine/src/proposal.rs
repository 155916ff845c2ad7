//! Boundary validation of human proposals.
//!
//! Input arrives as untyped text, one field per [`Feature`]. A [`Proposal`] can only be
//! obtained by passing the checks below, so downstream code may rely on the ingredient
//! invariant without re-checking it:
//!
//! 1. Every ingredient field is present and parses as a number
//! 2. Each ingredient ratio lies in `[0, 1]`
//! 3. The five ingredient ratios sum to 1 within [`INGREDIENT_SUM_TOLERANCE`]
//! 4. Temp and Time are present, parse as numbers and are finite
//!
//! Checks run in this order and the first failure is reported, so a bad ingredient
//! ratio is reported even when Temp or Time is also malformed.
//!
//! Failures are returned as [`ValidationError`], whose `Display` text is meant to be
//! shown to the user verbatim.

use crate::{Feature, FeatureVector};

/// Allowed absolute deviation of the ingredient sum from 1.
pub const INGREDIENT_SUM_TOLERANCE: f64 = 1e-4;

#[derive(Debug, Clone, PartialEq, derive_more::Display, derive_more::Error)]
pub enum ValidationError {
    #[display("{feature} is required.")]
    MissingField { feature: Feature },
    #[display("{feature} must be a number, got '{input}'.")]
    InvalidNumber { feature: Feature, input: String },
    #[display("Each ingredient must be between 0 and 1.")]
    IngredientOutOfRange { feature: Feature, value: f64 },
    #[display("Ingredient ratios must sum to 1.")]
    IngredientSumMismatch { sum: f64 },
    #[display("{feature} must be a finite number.")]
    NonFinite { feature: Feature, value: f64 },
}

/// A feature vector that passed boundary validation.
///
/// # Example
///
/// ```
/// use bakeoff_engine::{Feature, Proposal, ValidationError};
///
/// let form = [
///     ("Sugar", "0.3"), ("Butter", "0.2"), ("Chocolate", "0.2"),
///     ("Flour", "0.2"), ("Eggs", "0.1"), ("Temp", "350"), ("Time", "25"),
/// ];
/// let lookup = |feature: Feature| {
///     form.iter().find(|(name, _)| *name == feature.name()).map(|(_, v)| *v)
/// };
/// let proposal = Proposal::from_form(lookup).unwrap();
/// assert_eq!(proposal.vector()[Feature::Temp], 350.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Proposal(FeatureVector);

impl Proposal {
    /// Validates an already-numeric vector.
    pub fn new(vector: FeatureVector) -> Result<Self, ValidationError> {
        check_ingredients(&vector)?;
        check_bake_parameters(&vector)?;
        Ok(Self(vector))
    }

    /// Parses and validates untyped form input.
    ///
    /// `lookup` returns the raw text submitted for a feature, or `None` if the field
    /// is absent. Surrounding whitespace is ignored. Temp and Time are only parsed
    /// once the ingredient ratios have passed.
    pub fn from_form<'a, F>(mut lookup: F) -> Result<Self, ValidationError>
    where
        F: FnMut(Feature) -> Option<&'a str>,
    {
        let mut vector = FeatureVector::from_array([0.0; Feature::LEN]);
        for feature in Feature::INGREDIENTS {
            vector = vector.with(feature, parse_field(feature, lookup(feature))?);
        }
        check_ingredients(&vector)?;

        for feature in [Feature::Temp, Feature::Time] {
            vector = vector.with(feature, parse_field(feature, lookup(feature))?);
        }
        check_bake_parameters(&vector)?;

        Ok(Self(vector))
    }

    #[must_use]
    pub const fn vector(&self) -> &FeatureVector {
        &self.0
    }

    #[must_use]
    pub const fn into_vector(self) -> FeatureVector {
        self.0
    }
}

fn parse_field(feature: Feature, input: Option<&str>) -> Result<f64, ValidationError> {
    let input = input.ok_or(ValidationError::MissingField { feature })?;
    input
        .trim()
        .parse()
        .map_err(|_| ValidationError::InvalidNumber {
            feature,
            input: input.to_owned(),
        })
}

fn check_ingredients(vector: &FeatureVector) -> Result<(), ValidationError> {
    for feature in Feature::INGREDIENTS {
        let value = vector[feature];
        if !(0.0..=1.0).contains(&value) {
            return Err(ValidationError::IngredientOutOfRange { feature, value });
        }
    }

    let sum = vector.ingredient_sum();
    if (sum - 1.0).abs() > INGREDIENT_SUM_TOLERANCE {
        return Err(ValidationError::IngredientSumMismatch { sum });
    }
    Ok(())
}

fn check_bake_parameters(vector: &FeatureVector) -> Result<(), ValidationError> {
    for feature in [Feature::Temp, Feature::Time] {
        let value = vector[feature];
        if !value.is_finite() {
            return Err(ValidationError::NonFinite { feature, value });
        }
    }
    Ok(())
}
