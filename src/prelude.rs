//! Convenience re-exports for common usage.
//!
//! # Usage
//!
//! ```
//! use aprender_collab::prelude::*;
//! ```

pub use crate::error::{CollabError, Result};
pub use crate::neighbors::{NeighborRanker, SimilarityPair};
pub use crate::preprocessing::RowNormalizer;
pub use crate::ratings::{ItemId, RatingRow, RatingStore, UserId};
pub use crate::recommend::{Recommendation, Recommender, RecommenderConfig};
pub use crate::similarity::CosineSimilarity;
pub use crate::traits::{RatingTransformer, UserSimilarity};
