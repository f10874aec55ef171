//! Sparse user-by-item rating storage.
//!
//! A [`RatingStore`] maps each user to a [`RatingRow`], which in turn maps
//! items to ratings. Both levels are ordered maps, so every enumeration the
//! rest of the crate performs (users, items, rendering) is in ascending id
//! order and therefore reproducible.
//!
//! # Examples
//!
//! ```
//! use aprender_collab::ratings::RatingStore;
//!
//! let mut store = RatingStore::new();
//! store.add_rating(1, 10, 4.0);
//! store.add_rating(1, 20, 2.0);
//! store.add_rating(1, 10, 5.0); // last write wins
//!
//! assert_eq!(store.rating(1, 10), Some(5.0));
//! assert_eq!(store.row(1).to_string(), "{\n10: 5.0,\n20: 2.0,\n}\n");
//! assert!(store.row(99).is_empty());
//! ```

use std::collections::btree_map;
use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{CollabError, Result};
use crate::preprocessing::RowNormalizer;

/// Opaque user identifier.
pub type UserId = i64;

/// Opaque item identifier.
pub type ItemId = i64;

static EMPTY_ROW: RatingRow = RatingRow::new();

/// Ratings given by a single user, keyed by item.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RatingRow {
    ratings: BTreeMap<ItemId, f32>,
}

impl RatingRow {
    /// Creates an empty row.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            ratings: BTreeMap::new(),
        }
    }

    /// Rating for `item`, if the user rated it.
    #[must_use]
    pub fn get(&self, item: ItemId) -> Option<f32> {
        self.ratings.get(&item).copied()
    }

    /// Returns true if the user rated `item`.
    #[must_use]
    pub fn contains(&self, item: ItemId) -> bool {
        self.ratings.contains_key(&item)
    }

    /// Number of rated items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.ratings.len()
    }

    /// Returns true if no item is rated.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ratings.is_empty()
    }

    /// Iterates `(item, rating)` in ascending item order.
    pub fn iter(&self) -> impl Iterator<Item = (ItemId, f32)> + '_ {
        self.ratings.iter().map(|(&item, &rating)| (item, rating))
    }

    /// Smallest and largest rating in the row, or `None` when empty.
    #[must_use]
    pub fn min_max(&self) -> Option<(f32, f32)> {
        self.ratings.values().fold(None, |acc, &v| match acc {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        })
    }

    pub(crate) fn insert(&mut self, item: ItemId, rating: f32) {
        self.ratings.insert(item, rating);
    }

    pub(crate) fn values_mut(&mut self) -> btree_map::ValuesMut<'_, ItemId, f32> {
        self.ratings.values_mut()
    }
}

impl fmt::Display for RatingRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{{")?;
        for (item, rating) in self.iter() {
            writeln!(f, "{item}: {rating:.1},")?;
        }
        writeln!(f, "}}")
    }
}

/// Sparse rating matrix: user to [`RatingRow`].
///
/// Entries are created or overwritten by [`RatingStore::add_rating`] and are
/// never removed. The store holds no locks; callers sharing it across threads
/// must synchronize externally.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RatingStore {
    rows: BTreeMap<UserId, RatingRow>,
}

impl RatingStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or overwrites the rating for `(user, item)`.
    ///
    /// Creates the user's row if absent. Never fails.
    pub fn add_rating(&mut self, user: UserId, item: ItemId, rating: f32) {
        self.rows.entry(user).or_default().insert(item, rating);
    }

    /// Like [`add_rating`](Self::add_rating) but rejects NaN and infinite values.
    ///
    /// # Errors
    ///
    /// Returns [`CollabError::NonFiniteRating`] if `rating` is not finite; the
    /// store is left unchanged.
    pub fn try_add_rating(&mut self, user: UserId, item: ItemId, rating: f32) -> Result<()> {
        if !rating.is_finite() {
            return Err(CollabError::NonFiniteRating { user, item, rating });
        }
        self.add_rating(user, item, rating);
        Ok(())
    }

    /// The user's row, or an empty row if the user is unknown.
    #[must_use]
    pub fn row(&self, user: UserId) -> &RatingRow {
        self.rows.get(&user).unwrap_or(&EMPTY_ROW)
    }

    /// Rating for `(user, item)`, if present.
    #[must_use]
    pub fn rating(&self, user: UserId, item: ItemId) -> Option<f32> {
        self.rows.get(&user).and_then(|row| row.get(item))
    }

    /// Returns true if the user has a row (possibly empty).
    #[must_use]
    pub fn contains_user(&self, user: UserId) -> bool {
        self.rows.contains_key(&user)
    }

    /// Known users in ascending order.
    pub fn users(&self) -> impl Iterator<Item = UserId> + '_ {
        self.rows.keys().copied()
    }

    /// Iterates `(user, row)` in ascending user order.
    pub fn iter(&self) -> impl Iterator<Item = (UserId, &RatingRow)> + '_ {
        self.rows.iter().map(|(&user, row)| (user, row))
    }

    pub(crate) fn rows_mut(&mut self) -> impl Iterator<Item = &mut RatingRow> + '_ {
        self.rows.values_mut()
    }

    /// Number of users with a row.
    #[must_use]
    pub fn num_users(&self) -> usize {
        self.rows.len()
    }

    /// Total number of stored ratings.
    #[must_use]
    pub fn num_ratings(&self) -> usize {
        self.rows.values().map(RatingRow::len).sum()
    }

    /// Returns true if no user has been added.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Rescales every user's ratings into `[-1, 1]` in place.
    ///
    /// Must be called exactly once after loading raw ratings: a second call
    /// rescales the already-normalized values again.
    pub fn normalize_all_users(&mut self) {
        RowNormalizer::default().normalize_unchecked(self);
    }
}

impl FromIterator<(UserId, ItemId, f32)> for RatingStore {
    fn from_iter<I: IntoIterator<Item = (UserId, ItemId, f32)>>(iter: I) -> Self {
        let mut store = Self::new();
        store.extend(iter);
        store
    }
}

impl Extend<(UserId, ItemId, f32)> for RatingStore {
    fn extend<I: IntoIterator<Item = (UserId, ItemId, f32)>>(&mut self, iter: I) {
        for (user, item, rating) in iter {
            self.add_rating(user, item, rating);
        }
    }
}

#[cfg(test)]
#[path = "ratings_tests.rs"]
mod tests;
