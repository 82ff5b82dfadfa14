//! Notification verb enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The interaction that produced a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "notification_verb", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum NotificationVerb {
    /// Someone liked the recipient's post.
    Like,
    /// Someone commented on the recipient's post.
    Comment,
    /// Someone followed the recipient.
    Follow,
}

impl NotificationVerb {
    /// Return the verb as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Like => "like",
            Self::Comment => "comment",
            Self::Follow => "follow",
        }
    }
}

impl fmt::Display for NotificationVerb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for NotificationVerb {
    type Err = murmur_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "like" => Ok(Self::Like),
            "comment" => Ok(Self::Comment),
            "follow" => Ok(Self::Follow),
            _ => Err(murmur_core::AppError::validation(format!(
                "Invalid notification verb: '{s}'. Expected one of: like, comment, follow"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str() {
        assert_eq!("like".parse::<NotificationVerb>().unwrap(), NotificationVerb::Like);
        assert_eq!("FOLLOW".parse::<NotificationVerb>().unwrap(), NotificationVerb::Follow);
        assert!("boost".parse::<NotificationVerb>().is_err());
    }

    #[test]
    fn test_display_round_trip() {
        for verb in [
            NotificationVerb::Like,
            NotificationVerb::Comment,
            NotificationVerb::Follow,
        ] {
            assert_eq!(verb.to_string().parse::<NotificationVerb>().unwrap(), verb);
        }
    }
}
