//! aprender-collab: user-based collaborative filtering in pure Rust.
//!
//! Given a sparse matrix of (user, item) ratings, finds the users most
//! similar to a target user and recommends items those neighbours liked but
//! the target has not rated.
//!
//! # Quick Start
//!
//! ```
//! use aprender_collab::prelude::*;
//!
//! let mut store = RatingStore::new();
//! // Raw ratings on a 1-5 scale.
//! for user in 2..=6 {
//!     store.add_rating(user, 1, 5.0);
//!     store.add_rating(user, 2, 1.0);
//!     store.add_rating(user, 3, 4.0);
//! }
//! store.add_rating(1, 1, 5.0);
//! store.add_rating(1, 2, 2.0);
//!
//! // Rescale every user's ratings into [-1, 1], exactly once.
//! store.normalize_all_users();
//!
//! let rec = Recommender::default()
//!     .recommend(&store, 1, 1)
//!     .expect("item 3 is liked by five neighbours");
//! assert_eq!(rec.items(), &[3]);
//! ```
//!
//! # Modules
//!
//! - [`ratings`]: Sparse rating storage
//! - [`preprocessing`]: Per-user min-max normalization
//! - [`similarity`]: Absolute cosine similarity between users
//! - [`neighbors`]: Ranking of users by similarity
//! - [`recommend`]: Threshold-voting recommender
//!
//! # Concurrency
//!
//! Everything is synchronous and lock-free. [`RatingStore`] is plain data;
//! callers sharing one across threads supply their own synchronization.

pub mod error;
pub mod neighbors;
pub mod prelude;
pub mod preprocessing;
pub mod ratings;
pub mod recommend;
pub mod similarity;
pub mod traits;

pub use error::{CollabError, Result};
pub use ratings::RatingStore;
pub use recommend::{Recommendation, Recommender, RecommenderConfig};
