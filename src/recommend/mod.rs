//! Recommendation by neighbour threshold voting.
//!
//! [`Recommender`] walks a target user's neighbours from most to least
//! similar and lets each neighbour vote for the items it liked. An item is
//! recommended the moment `support` distinct neighbours have voted for it,
//! and its predicted rating is the mean of exactly those `support` votes.
//! Collection stops as soon as `count` items have qualified.
//!
//! The output order is the order in which items first reached support, not
//! a ranking by total votes: items liked by the closest neighbours surface
//! first. A request that cannot be filled completely yields `None`; partial
//! lists are never returned.
//!
//! # Quick Start
//!
//! ```
//! use aprender_collab::prelude::*;
//!
//! let mut store = RatingStore::new();
//! for neighbor in 2..=6 {
//!     store.add_rating(neighbor, 1, 1.0);
//!     store.add_rating(neighbor, 100, 0.8);
//! }
//! store.add_rating(1, 1, 1.0);
//!
//! let rec = Recommender::default()
//!     .recommend(&store, 1, 1)
//!     .expect("five neighbours liked item 100");
//!
//! assert_eq!(rec.items(), &[100]);
//! assert!((rec.predicted()[0] - 0.8).abs() < 1e-6);
//! ```

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{CollabError, Result};
use crate::neighbors::NeighborRanker;
use crate::ratings::{ItemId, RatingStore, UserId};
use crate::similarity::CosineSimilarity;
use crate::traits::UserSimilarity;

const DEFAULT_SUPPORT: usize = 5;
const DEFAULT_LIKE_THRESHOLD: f32 = 0.1;

fn default_support() -> usize {
    DEFAULT_SUPPORT
}

fn default_like_threshold() -> f32 {
    DEFAULT_LIKE_THRESHOLD
}

/// Voting parameters for [`Recommender`].
///
/// # Example
///
/// ```
/// use aprender_collab::recommend::RecommenderConfig;
///
/// let config = RecommenderConfig::from_json(r#"{"support": 3}"#).expect("valid config");
/// assert_eq!(config.support(), 3);
/// assert_eq!(config.like_threshold(), 0.1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RecommenderConfig {
    /// Distinct neighbour votes an item needs before it is recommended.
    #[serde(default = "default_support")]
    support: usize,
    /// Minimum neighbour rating that counts as a vote, on the normalized scale.
    #[serde(default = "default_like_threshold")]
    like_threshold: f32,
}

impl Default for RecommenderConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl RecommenderConfig {
    /// Creates the default configuration: support 5, like threshold 0.1.
    #[must_use]
    pub fn new() -> Self {
        Self {
            support: DEFAULT_SUPPORT,
            like_threshold: DEFAULT_LIKE_THRESHOLD,
        }
    }

    /// Sets the number of votes an item needs.
    #[must_use]
    pub fn with_support(mut self, support: usize) -> Self {
        self.support = support;
        self
    }

    /// Sets the minimum rating that counts as a vote.
    #[must_use]
    pub fn with_like_threshold(mut self, like_threshold: f32) -> Self {
        self.like_threshold = like_threshold;
        self
    }

    /// Votes an item needs.
    #[must_use]
    pub fn support(&self) -> usize {
        self.support
    }

    /// Minimum rating that counts as a vote.
    #[must_use]
    pub fn like_threshold(&self) -> f32 {
        self.like_threshold
    }

    /// Checks the parameters.
    ///
    /// # Errors
    ///
    /// Returns [`CollabError::InvalidHyperparameter`] if `support` is zero
    /// or `like_threshold` is not finite.
    pub fn validate(&self) -> Result<()> {
        if self.support == 0 {
            return Err(CollabError::invalid_hyperparameter(
                "support",
                self.support,
                ">= 1",
            ));
        }
        if !self.like_threshold.is_finite() {
            return Err(CollabError::invalid_hyperparameter(
                "like_threshold",
                self.like_threshold,
                "finite",
            ));
        }
        Ok(())
    }

    /// Parses and validates a JSON configuration. Missing fields take their
    /// defaults.
    ///
    /// # Errors
    ///
    /// Returns [`CollabError::Config`] for malformed JSON and
    /// [`CollabError::InvalidHyperparameter`] for out-of-range values.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }
}

/// Recommended items with their predicted ratings, aligned by index.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    items: Vec<ItemId>,
    predicted: Vec<f32>,
}

impl Recommendation {
    /// Items in the order they reached support.
    #[must_use]
    pub fn items(&self) -> &[ItemId] {
        &self.items
    }

    /// Predicted rating for each item.
    #[must_use]
    pub fn predicted(&self) -> &[f32] {
        &self.predicted
    }

    /// Number of recommended items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if nothing is recommended.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterates `(item, predicted)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (ItemId, f32)> + '_ {
        self.items.iter().copied().zip(self.predicted.iter().copied())
    }

    /// Splits into `(items, predicted)`.
    #[must_use]
    pub fn into_parts(self) -> (Vec<ItemId>, Vec<f32>) {
        (self.items, self.predicted)
    }
}

#[derive(Debug, Default, Clone, Copy)]
struct Vote {
    count: usize,
    sum: f32,
}

/// User-based collaborative filtering recommender.
#[derive(Debug, Clone)]
pub struct Recommender<S = CosineSimilarity> {
    config: RecommenderConfig,
    ranker: NeighborRanker<S>,
}

impl Default for Recommender<CosineSimilarity> {
    fn default() -> Self {
        Self {
            config: RecommenderConfig::default(),
            ranker: NeighborRanker::new(),
        }
    }
}

impl Recommender<CosineSimilarity> {
    /// Creates a recommender ranking neighbours by absolute cosine similarity.
    ///
    /// # Errors
    ///
    /// Returns an error if `config` fails [`RecommenderConfig::validate`].
    pub fn new(config: RecommenderConfig) -> Result<Self> {
        Self::with_similarity(config, CosineSimilarity)
    }
}

impl<S: UserSimilarity> Recommender<S> {
    /// Creates a recommender with a custom similarity measure.
    ///
    /// # Errors
    ///
    /// Returns an error if `config` fails [`RecommenderConfig::validate`].
    pub fn with_similarity(config: RecommenderConfig, measure: S) -> Result<Self> {
        if let Err(err) = config.validate() {
            warn!(error = %err, "rejecting recommender configuration");
            return Err(err);
        }
        Ok(Self {
            config,
            ranker: NeighborRanker::with_measure(measure),
        })
    }

    /// The voting parameters.
    #[must_use]
    pub fn config(&self) -> &RecommenderConfig {
        &self.config
    }

    /// Recommends exactly `count` items `user` has not rated, or `None`.
    ///
    /// Returns `None` when fewer than `count` items reach support, and when
    /// `count` is zero.
    #[must_use]
    pub fn recommend(
        &self,
        store: &RatingStore,
        user: UserId,
        count: usize,
    ) -> Option<Recommendation> {
        if count == 0 {
            return None;
        }

        let neighbors = self.ranker.ranked_neighbors(store, user);
        let rated = store.row(user);
        let support = self.config.support;

        let mut votes: HashMap<ItemId, Vote> = HashMap::new();
        let mut items = Vec::with_capacity(count);
        let mut predicted = Vec::with_capacity(count);

        for neighbor in &neighbors {
            for (item, rating) in store.row(neighbor.user).iter() {
                if rated.contains(item) || rating < self.config.like_threshold {
                    continue;
                }

                let vote = votes.entry(item).or_default();
                vote.count += 1;
                vote.sum += rating;
                if vote.count != support {
                    continue;
                }

                items.push(item);
                predicted.push(vote.sum / support as f32);
                if items.len() == count {
                    debug!(user, count, neighbors = neighbors.len(), "recommendation filled");
                    return Some(Recommendation { items, predicted });
                }
            }
        }

        debug!(
            user,
            count,
            qualified = items.len(),
            neighbors = neighbors.len(),
            "not enough supported items"
        );
        None
    }
}

/// Recommends `count` items for `user` with the default configuration.
///
/// # Examples
///
/// ```
/// use aprender_collab::prelude::*;
///
/// let store = RatingStore::new();
/// assert!(aprender_collab::recommend::recommend(&store, 1, 3).is_none());
/// ```
#[must_use]
pub fn recommend(store: &RatingStore, user: UserId, count: usize) -> Option<Recommendation> {
    Recommender::default().recommend(store, user, count)
}

#[cfg(test)]
#[path = "recommend_tests.rs"]
mod tests;
