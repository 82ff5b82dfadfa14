//! Post and comment domain entities.

pub mod comment;
pub mod model;

pub use comment::{Comment, CommentWithAuthor, CreateComment};
pub use model::{CreatePost, Post, PostWithMeta, UpdatePost};
