//! Core traits for similarity measures and rating transformers.
//!
//! These traits define the seams between the rating store and the
//! algorithms that read or rewrite it.

use crate::error::Result;
use crate::ratings::{RatingRow, RatingStore};

/// A symmetric similarity measure between two users' rating rows.
///
/// Implementations must return a finite score and must return exactly the
/// same value for `(a, b)` and `(b, a)`, since neighbour rankings depend on it.
///
/// # Examples
///
/// ```
/// use aprender_collab::prelude::*;
///
/// let mut store = RatingStore::new();
/// store.add_rating(1, 10, 1.0);
/// store.add_rating(2, 10, 2.0);
///
/// let sim = CosineSimilarity.similarity(store.row(1), store.row(2));
/// assert!((sim - 1.0).abs() < 1e-6);
/// ```
pub trait UserSimilarity {
    /// Similarity between two rating rows.
    fn similarity(&self, a: &RatingRow, b: &RatingRow) -> f32;
}

impl<S: UserSimilarity + ?Sized> UserSimilarity for &S {
    fn similarity(&self, a: &RatingRow, b: &RatingRow) -> f32 {
        (**self).similarity(a, b)
    }
}

/// Trait for in-place rewrites of a whole rating store (normalizers, etc.).
pub trait RatingTransformer {
    /// Rewrites the store's ratings in place.
    ///
    /// # Errors
    ///
    /// Returns an error if the transformer is misconfigured; the store is
    /// then left unchanged.
    fn transform(&self, store: &mut RatingStore) -> Result<()>;
}
