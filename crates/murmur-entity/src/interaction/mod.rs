//! Interaction ledger entities — likes and follow edges.
//!
//! Each interaction record is unique per (actor, target) pair.

pub mod follow;
pub mod like;

pub use follow::{Follow, FollowStats};
pub use like::Like;
