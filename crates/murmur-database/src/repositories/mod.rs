//! Repository implementations, one per aggregate.

pub mod comment;
pub mod feed;
pub mod follow;
pub mod like;
pub mod notification;
pub mod post;
pub mod user;
