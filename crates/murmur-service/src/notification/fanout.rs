//! Fan-out rule — decides who, if anyone, receives a notification for
//! an interaction.
//!
//! The rule is deliberately a pure function: interacting with your own
//! content produces no notification, everything else notifies the
//! content owner. Repositories then write the result inside the
//! interaction's transaction.

use uuid::Uuid;

use murmur_entity::notification::{NewNotification, NotificationVerb, TargetRef};

/// Computes the notification an interaction fans out to, if any.
///
/// Returns `None` when the actor is also the owner of the target
/// content — self-interactions never notify.
pub fn notification_for(
    actor_id: Uuid,
    owner_id: Uuid,
    verb: NotificationVerb,
    target: TargetRef,
) -> Option<NewNotification> {
    if actor_id == owner_id {
        return None;
    }
    Some(NewNotification {
        recipient_id: owner_id,
        actor_id,
        verb,
        target,
    })
}

/// Computes the recipient of a comment notification, if any.
///
/// Used when the target's identifier does not exist yet (the comment id
/// is generated on insert), so only the recipient decision can be made
/// up front.
pub fn comment_recipient(actor_id: Uuid, post_author_id: Uuid) -> Option<Uuid> {
    if actor_id == post_author_id {
        None
    } else {
        Some(post_author_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn self_interaction_is_suppressed() {
        let me = Uuid::new_v4();
        let target = TargetRef::post(Uuid::new_v4());
        assert!(notification_for(me, me, NotificationVerb::Like, target).is_none());
        assert!(comment_recipient(me, me).is_none());
    }

    #[test]
    fn foreign_interaction_notifies_owner() {
        let actor = Uuid::new_v4();
        let owner = Uuid::new_v4();
        let post_id = Uuid::new_v4();

        let n = notification_for(actor, owner, NotificationVerb::Like, TargetRef::post(post_id))
            .expect("should fan out");

        assert_eq!(n.recipient_id, owner);
        assert_eq!(n.actor_id, actor);
        assert_eq!(n.verb, NotificationVerb::Like);
        assert_eq!(n.target, TargetRef::post(post_id));
    }

    #[test]
    fn comment_on_foreign_post_notifies_author() {
        let actor = Uuid::new_v4();
        let author = Uuid::new_v4();
        assert_eq!(comment_recipient(actor, author), Some(author));
    }

    #[test]
    fn follow_targets_the_follower() {
        let follower = Uuid::new_v4();
        let followee = Uuid::new_v4();

        let n = notification_for(
            follower,
            followee,
            NotificationVerb::Follow,
            TargetRef::user(follower),
        )
        .expect("should fan out");

        assert_eq!(n.recipient_id, followee);
        assert_eq!(n.target, TargetRef::user(follower));
    }
}
