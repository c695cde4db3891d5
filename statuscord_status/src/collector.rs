use serenity::all::ActivityType;

use crate::{ActivityRecord, VoiceMember};

/// Collect one record per "playing" activity across the channel's members.
///
/// Records come out in member order, then in the order the activities were
/// reported. Callers are expected to have filtered out bot accounts already.
pub fn collect_activities(members: &[VoiceMember]) -> Vec<ActivityRecord> {
    let mut records = Vec::new();

    for member in members {
        for activity in &member.activities {
            if activity.kind != ActivityType::Playing {
                continue;
            }

            let game = normalize_game_name(&activity.name);
            if game.is_empty() {
                continue;
            }

            records.push(ActivityRecord {
                participant: member.participant.clone(),
                game,
            });
        }
    }

    records
}

/// Publishers love decorating their titles ("Rocket League®"); strip the
/// trailing glyphs so the same game always lands in the same tally bucket.
fn normalize_game_name(name: &str) -> String {
    name.trim()
        .trim_end_matches(['®', '©', '™'])
        .trim_end()
        .to_string()
}
