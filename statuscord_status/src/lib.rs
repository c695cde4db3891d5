//! The decision core: turning a voice channel's membership into a status line.
//!
//! Everything in this crate is synchronous and free of side effects. The bot
//! feeds in a snapshot of a channel's occupants and gets back a single string;
//! all Discord I/O stays with the caller.

use serenity::all::{ActivityType, UserId};

mod collector;
mod decider;

pub use collector::collect_activities;
pub use decider::{decide_status, StatusOptions};

/// A non-bot member connected to the voice channel under consideration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Participant {
    pub id: UserId,
    pub tag: String,
}

impl Participant {
    pub fn new(id: UserId, tag: impl Into<String>) -> Self {
        Self {
            id,
            tag: tag.into(),
        }
    }
}

/// One activity as reported by the gateway, before any filtering.
#[derive(Debug, Clone)]
pub struct PresenceActivity {
    pub kind: ActivityType,
    pub name: String,
}

/// A participant together with whatever activities their presence currently
/// reports. An empty list is normal: members without presence data simply
/// contribute nothing.
#[derive(Debug, Clone)]
pub struct VoiceMember {
    pub participant: Participant,
    pub activities: Vec<PresenceActivity>,
}

/// A single "is playing" observation. A participant running several games at
/// once yields several records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityRecord {
    pub participant: Participant,
    pub game: String,
}
