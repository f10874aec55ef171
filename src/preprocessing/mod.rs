//! Per-user rating normalization.
//!
//! Users rate on different personal scales: one user's "3 of 5" is another's
//! "5 of 5". [`RowNormalizer`] rescales every user's row independently with
//! min-max scaling so that the user's lowest rating maps to the bottom of the
//! target range and the highest to the top (default `[-1, 1]`).
//!
//! # Example
//!
//! ```
//! use aprender_collab::prelude::*;
//! use aprender_collab::preprocessing::RowNormalizer;
//!
//! let mut store = RatingStore::new();
//! store.add_rating(1, 10, 1.0);
//! store.add_rating(1, 20, 3.0);
//! store.add_rating(1, 30, 5.0);
//!
//! RowNormalizer::new().normalize(&mut store).expect("default range is valid");
//!
//! assert_eq!(store.rating(1, 10), Some(-1.0));
//! assert_eq!(store.rating(1, 20), Some(0.0));
//! assert_eq!(store.rating(1, 30), Some(1.0));
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{CollabError, Result};
use crate::ratings::{RatingRow, RatingStore};
use crate::traits::RatingTransformer;

/// Rescales each user's ratings into a fixed range.
///
/// For a row with minimum `min` and maximum `max`, a rating `v` becomes
/// `lo + (hi - lo) * (v - min) / (max - min)`. A row whose ratings are all
/// equal (including a single rating) collapses to the midpoint of the range,
/// `0.0` for the default `[-1, 1]`. Empty rows are left alone.
///
/// Normalization is not idempotent in general: run it once over raw data.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RowNormalizer {
    /// Lower bound of the target range.
    #[serde(default = "default_feature_min")]
    feature_min: f32,
    /// Upper bound of the target range.
    #[serde(default = "default_feature_max")]
    feature_max: f32,
}

fn default_feature_min() -> f32 {
    -1.0
}

fn default_feature_max() -> f32 {
    1.0
}

impl Default for RowNormalizer {
    fn default() -> Self {
        Self::new()
    }
}

/// Outcome counts of one normalization pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NormalizeStats {
    /// Rows with at least two distinct ratings.
    pub rescaled: usize,
    /// Rows whose ratings were all equal.
    pub collapsed: usize,
    /// Rows with no ratings.
    pub skipped: usize,
}

impl RowNormalizer {
    /// Creates a normalizer targeting `[-1, 1]`.
    #[must_use]
    pub fn new() -> Self {
        Self {
            feature_min: default_feature_min(),
            feature_max: default_feature_max(),
        }
    }

    /// Sets the target range.
    ///
    /// The range is checked by [`validate`](Self::validate) and
    /// [`normalize`](Self::normalize), not here.
    #[must_use]
    pub fn with_range(mut self, min: f32, max: f32) -> Self {
        self.feature_min = min;
        self.feature_max = max;
        self
    }

    /// Target range as `(min, max)`.
    #[must_use]
    pub fn range(&self) -> (f32, f32) {
        (self.feature_min, self.feature_max)
    }

    /// Checks that the target range is finite and non-degenerate.
    ///
    /// # Errors
    ///
    /// Returns [`CollabError::InvalidHyperparameter`] if either bound is not
    /// finite or `min >= max`.
    pub fn validate(&self) -> Result<()> {
        if !self.feature_min.is_finite() || !self.feature_max.is_finite() {
            return Err(CollabError::invalid_hyperparameter(
                "feature_range",
                format!("({}, {})", self.feature_min, self.feature_max),
                "finite bounds",
            ));
        }
        if self.feature_min >= self.feature_max {
            return Err(CollabError::invalid_hyperparameter(
                "feature_range",
                format!("({}, {})", self.feature_min, self.feature_max),
                "min < max",
            ));
        }
        Ok(())
    }

    /// Normalizes every row of `store` in place.
    ///
    /// # Errors
    ///
    /// Returns an error if the target range is invalid; the store is then
    /// left unchanged.
    pub fn normalize(&self, store: &mut RatingStore) -> Result<NormalizeStats> {
        self.validate()?;
        Ok(self.normalize_unchecked(store))
    }

    /// Normalization pass for a range already known to be valid.
    pub(crate) fn normalize_unchecked(&self, store: &mut RatingStore) -> NormalizeStats {
        let mut stats = NormalizeStats::default();
        for row in store.rows_mut() {
            match row.min_max() {
                None => stats.skipped += 1,
                Some((min, max)) => {
                    if min == max {
                        stats.collapsed += 1;
                    } else {
                        stats.rescaled += 1;
                    }
                    self.rescale(row, min, max);
                }
            }
        }

        debug!(
            rescaled = stats.rescaled,
            collapsed = stats.collapsed,
            skipped = stats.skipped,
            "normalized user rows"
        );
        stats
    }

    /// Normalizes a single row in place.
    pub fn normalize_row(&self, row: &mut RatingRow) {
        if let Some((min, max)) = row.min_max() {
            self.rescale(row, min, max);
        }
    }

    fn rescale(&self, row: &mut RatingRow, min: f32, max: f32) {
        for v in row.values_mut() {
            *v = self.scale(min, max, *v);
        }
    }

    /// Differences are taken in `f64`: `max - min` of two finite `f32`
    /// values can overflow `f32`.
    fn scale(&self, min: f32, max: f32, v: f32) -> f32 {
        let (min, max, v) = (f64::from(min), f64::from(max), f64::from(v));
        let lo = f64::from(self.feature_min);
        let span = f64::from(self.feature_max) - lo;
        if max == min {
            return (lo + span * 0.5) as f32;
        }
        let frac = (v - min) / (max - min);
        (lo + frac * span) as f32
    }
}

impl RatingTransformer for RowNormalizer {
    fn transform(&self, store: &mut RatingStore) -> Result<()> {
        self.normalize(store).map(|_| ())
    }
}
