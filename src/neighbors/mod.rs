//! Ranking of users by similarity to a target user.
//!
//! [`NeighborRanker`] scores every other user in a [`RatingStore`] against a
//! target and orders them from most to least similar. Equal scores are
//! ordered by ascending user id, so rankings are reproducible.
//!
//! # Examples
//!
//! ```
//! use aprender_collab::prelude::*;
//!
//! let mut store = RatingStore::new();
//! store.add_rating(1, 10, 1.0);
//! store.add_rating(2, 10, 1.0);
//! store.add_rating(3, 20, 1.0);
//!
//! let ranked = NeighborRanker::new().ranked_neighbors(&store, 1);
//! assert_eq!(ranked.len(), 2);
//! assert_eq!(ranked[0].user, 2);
//! ```

use std::cmp::Ordering;
use std::fmt;

use crate::ratings::{RatingStore, UserId};
use crate::similarity::CosineSimilarity;
use crate::traits::UserSimilarity;

/// A user and its similarity to some implicit target user.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimilarityPair {
    /// Neighbouring user
    pub user: UserId,
    /// Similarity to the target
    pub similarity: f32,
}

impl SimilarityPair {
    /// Descending similarity, then ascending user id.
    fn rank_cmp(&self, other: &Self) -> Ordering {
        other
            .similarity
            .total_cmp(&self.similarity)
            .then_with(|| self.user.cmp(&other.user))
    }
}

impl fmt::Display for SimilarityPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{similarity={:.1} user={}}}", self.similarity, self.user)
    }
}

/// Orders users by similarity to a target.
#[derive(Debug, Clone, Default)]
pub struct NeighborRanker<S = CosineSimilarity> {
    measure: S,
}

impl NeighborRanker<CosineSimilarity> {
    /// Creates a ranker using absolute cosine similarity.
    #[must_use]
    pub fn new() -> Self {
        Self {
            measure: CosineSimilarity,
        }
    }
}

impl<S: UserSimilarity> NeighborRanker<S> {
    /// Creates a ranker using a custom similarity measure.
    #[must_use]
    pub fn with_measure(measure: S) -> Self {
        Self { measure }
    }

    /// The similarity measure in use.
    #[must_use]
    pub fn measure(&self) -> &S {
        &self.measure
    }

    /// Every known user except `user`, most similar first.
    ///
    /// `user` need not be in the store; an unknown target scores `0.0`
    /// against everyone and the ranking falls back to ascending user id.
    #[must_use]
    pub fn ranked_neighbors(&self, store: &RatingStore, user: UserId) -> Vec<SimilarityPair> {
        let target = store.row(user);
        let mut neighbors: Vec<SimilarityPair> = store
            .iter()
            .filter(|&(other, _)| other != user)
            .map(|(other, row)| SimilarityPair {
                user: other,
                similarity: self.measure.similarity(target, row),
            })
            .collect();

        neighbors.sort_by(SimilarityPair::rank_cmp);
        neighbors
    }

    /// The `k` most similar users to `user`.
    #[must_use]
    pub fn nearest(&self, store: &RatingStore, user: UserId, k: usize) -> Vec<SimilarityPair> {
        let mut neighbors = self.ranked_neighbors(store, user);
        neighbors.truncate(k);
        neighbors
    }
}

#[cfg(test)]
#[path = "neighbors_tests.rs"]
mod tests;
