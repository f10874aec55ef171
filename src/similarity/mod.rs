//! User-user similarity measures.
//!
//! # Absolute cosine
//!
//! [`CosineSimilarity`] is the cosine of the angle between two users' rating
//! vectors, with unrated items treated as zero, reported as its **absolute
//! value**. A user whose tastes are the mirror image of the target's scores
//! as high as one whose tastes match. This differs from textbook signed
//! cosine and changes which neighbours are ranked first, so it must not be
//! "corrected" to the signed form.
//!
//! ```text
//! sim(a, b) = | Σ_{i ∈ a ∩ b} a_i b_i | / ( ‖a‖ ‖b‖ )
//! ```
//!
//! The norms run over each user's full row, not just the co-rated items.
//! A user with zero norm (unknown, empty row, all ratings zero) has
//! similarity `0.0` with everyone instead of NaN.

use std::cmp::Ordering;

use crate::ratings::{RatingRow, RatingStore, UserId};
use crate::traits::UserSimilarity;

/// Absolute cosine similarity between two rating rows.
///
/// The result is always in `[0, 1]` and is bit-for-bit symmetric: co-rated
/// items are summed in ascending item order regardless of argument order.
///
/// # Examples
///
/// ```
/// use aprender_collab::prelude::*;
///
/// let mut store = RatingStore::new();
/// store.add_rating(1, 10, 1.0);
/// store.add_rating(1, 20, -1.0);
/// store.add_rating(2, 10, -1.0);
/// store.add_rating(2, 20, 1.0);
///
/// // Perfectly anti-correlated users are maximally similar.
/// let sim = CosineSimilarity.similarity(store.row(1), store.row(2));
/// assert!((sim - 1.0).abs() < 1e-6);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CosineSimilarity;

impl UserSimilarity for CosineSimilarity {
    fn similarity(&self, a: &RatingRow, b: &RatingRow) -> f32 {
        let norm_a = norm(a);
        let norm_b = norm(b);
        if norm_a == 0.0 || norm_b == 0.0 {
            return 0.0;
        }

        let raw = co_rated_dot(a, b) / (norm_a * norm_b);
        raw.abs().min(1.0) as f32
    }
}

/// Absolute cosine similarity between two users of `store`.
///
/// Unknown users behave as empty rows and yield `0.0`.
///
/// # Examples
///
/// ```
/// use aprender_collab::prelude::*;
/// use aprender_collab::similarity::cosine_similarity;
///
/// let mut store = RatingStore::new();
/// store.add_rating(1, 10, 3.0);
/// store.add_rating(2, 10, 4.0);
///
/// assert!((cosine_similarity(&store, 1, 2) - 1.0).abs() < 1e-6);
/// assert_eq!(cosine_similarity(&store, 1, 99), 0.0);
/// ```
#[must_use]
pub fn cosine_similarity(store: &RatingStore, a: UserId, b: UserId) -> f32 {
    CosineSimilarity.similarity(store.row(a), store.row(b))
}

fn norm(row: &RatingRow) -> f64 {
    row.iter()
        .map(|(_, v)| f64::from(v) * f64::from(v))
        .sum::<f64>()
        .sqrt()
}

/// Sum of rating products over items both rows contain, via a merge walk of
/// the two ascending item sequences.
fn co_rated_dot(a: &RatingRow, b: &RatingRow) -> f64 {
    let mut left = a.iter().peekable();
    let mut right = b.iter().peekable();
    let mut dot = 0.0;

    while let (Some(&(item_a, va)), Some(&(item_b, vb))) = (left.peek(), right.peek()) {
        match item_a.cmp(&item_b) {
            Ordering::Less => {
                left.next();
            }
            Ordering::Greater => {
                right.next();
            }
            Ordering::Equal => {
                dot += f64::from(va) * f64::from(vb);
                left.next();
                right.next();
            }
        }
    }
    dot
}

#[cfg(test)]
#[path = "similarity_tests.rs"]
mod tests;
