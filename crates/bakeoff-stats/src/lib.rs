//! Statistical utilities for the bake-off game.
//!
//! The reference dataset of historical brownie trials is summarized once at startup;
//! this crate provides the summary measures used for that step and for reporting on
//! batches of agent draws.
//!
//! # Modules
//!
//! - [`descriptive`]: Descriptive statistics (mean, median, sample variance, etc.)
//!
//! # Examples
//!
//! ```
//! use bakeoff_stats::descriptive::DescriptiveStats;
//!
//! let values = [1.0, 2.0, 3.0, 4.0, 5.0];
//! let stats = DescriptiveStats::new(values).unwrap();
//! assert_eq!(stats.mean, 3.0);
//! assert_eq!(stats.variance, 2.5);
//! ```

pub mod descriptive;
