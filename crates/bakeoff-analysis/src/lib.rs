//! Reference data analysis for the bake-off game.
//!
//! Scores and agent proposals are both anchored to a reference dataset of historical
//! brownie trials. This crate turns that dataset into the immutable configuration the
//! rest of the game reads from.
//!
//! # Pipeline
//!
//! 1. **Load** ([`dataset::ReferenceDataset`]) - Read trial rows from CSV or JSON
//! 2. **Profile** ([`profile::StatsProfile`]) - Per-feature mean and sample std
//! 3. **Bounds** ([`bounds::Bounds`]) - Observed Temp/Time ranges for agent sampling
//! 4. **Bundle** ([`reference::ReferenceConfig`]) - Built once at startup and lent by
//!    reference to the reward function and the agent
//!
//! ```
//! use bakeoff_analysis::{dataset::ReferenceDataset, reference::ReferenceConfig};
//! use bakeoff_analysis::profile::ZeroVariancePolicy;
//! use bakeoff_engine::Feature;
//!
//! let csv = "\
//! Sugar,Butter,Chocolate,Flour,Eggs,Temp,Time
//! 0.30,0.20,0.20,0.20,0.10,325,20
//! 0.20,0.30,0.20,0.20,0.10,350,25
//! 0.20,0.20,0.30,0.10,0.20,375,30
//! ";
//! let dataset = ReferenceDataset::from_csv_str(csv).unwrap();
//! let config = ReferenceConfig::from_dataset(&dataset, ZeroVariancePolicy::Reject).unwrap();
//! assert_eq!(config.profile().get(Feature::Temp).mean, 350.0);
//! assert_eq!(config.bounds().time().max, 30.0);
//! ```
//!
//! # Errors
//!
//! Every failure while building the configuration is a [`DataError`]. These are meant
//! to abort startup: a dataset that cannot be profiled must not produce scores.

use std::{io, path::PathBuf};

use bakeoff_engine::Feature;

use crate::profile::DomainError;

pub mod bounds;
pub mod dataset;
pub mod profile;
pub mod reference;

#[derive(Debug, derive_more::Display, derive_more::Error)]
pub enum DataError {
    #[display("failed to read dataset {}", path.display())]
    Io { path: PathBuf, source: io::Error },
    #[display("failed to parse JSON dataset")]
    Json { source: serde_json::Error },
    #[display("dataset is missing required column '{feature}'")]
    MissingColumn { feature: Feature },
    #[display("line {line}: expected {expected} cells, found {found}")]
    RowLength {
        line: usize,
        expected: usize,
        found: usize,
    },
    #[display("line {line}: invalid value '{value}' in column '{feature}'")]
    InvalidValue {
        line: usize,
        feature: Feature,
        value: String,
    },
    #[display("dataset contains no rows")]
    Empty,
    #[display("dataset needs at least 2 rows to estimate spread, found {rows}")]
    InsufficientRows { rows: usize },
    #[display("invalid {feature} range: min {min}, max {max}")]
    DegenerateBounds { feature: Feature, min: f64, max: f64 },
    #[display("{_0}")]
    Domain(DomainError),
}

impl From<DomainError> for DataError {
    fn from(err: DomainError) -> Self {
        Self::Domain(err)
    }
}
