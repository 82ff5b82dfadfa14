//! Polymorphic notification target.
//!
//! A target is stored as a tagged (kind, id) pair and resolved lazily on
//! read by a lookup keyed on the kind — never by runtime type inspection.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// The kind of entity a notification points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "target_kind", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum TargetKind {
    /// A post.
    Post,
    /// A comment.
    Comment,
    /// A user.
    User,
}

impl TargetKind {
    /// Return the kind as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Post => "post",
            Self::Comment => "comment",
            Self::User => "user",
        }
    }
}

impl fmt::Display for TargetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for TargetKind {
    type Err = murmur_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "post" => Ok(Self::Post),
            "comment" => Ok(Self::Comment),
            "user" => Ok(Self::User),
            _ => Err(murmur_core::AppError::validation(format!(
                "Invalid target kind: '{s}'. Expected one of: post, comment, user"
            ))),
        }
    }
}

/// A reference to a target entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetRef {
    /// The kind of the referenced entity.
    pub kind: TargetKind,
    /// The referenced entity's identifier.
    pub id: Uuid,
}

impl TargetRef {
    /// Reference a post.
    pub fn post(id: Uuid) -> Self {
        Self {
            kind: TargetKind::Post,
            id,
        }
    }

    /// Reference a comment.
    pub fn comment(id: Uuid) -> Self {
        Self {
            kind: TargetKind::Comment,
            id,
        }
    }

    /// Reference a user.
    pub fn user(id: Uuid) -> Self {
        Self {
            kind: TargetKind::User,
            id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors_tag_kind() {
        let id = Uuid::nil();
        assert_eq!(TargetRef::post(id).kind, TargetKind::Post);
        assert_eq!(TargetRef::comment(id).kind, TargetKind::Comment);
        assert_eq!(TargetRef::user(id).kind, TargetKind::User);
    }

    #[test]
    fn test_kind_from_str() {
        assert_eq!("post".parse::<TargetKind>().unwrap(), TargetKind::Post);
        assert!("page".parse::<TargetKind>().is_err());
    }
}
