use std::collections::HashMap;

use crate::ActivityRecord;

/// Formatting toggles for [`decide_status`]. Passed in explicitly on every
/// call so behavior can eventually differ per guild without touching this
/// crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusOptions {
    /// Render entries as `"Chess (2)"` instead of `"Chess"`.
    pub include_counts: bool,
    /// List every distinct game instead of only the top-ranked one.
    pub list_all_games: bool,
}

impl Default for StatusOptions {
    fn default() -> Self {
        Self {
            include_counts: true,
            list_all_games: true,
        }
    }
}

/// Decide the status line for a channel with `member_count` non-bot occupants
/// reporting `activities`.
///
/// An empty result means "clear the status". With a single occupant their
/// first game is shown verbatim. Otherwise games are tallied and sorted by
/// count descending, ties broken by label ascending, so identical input
/// always renders the identical string.
pub fn decide_status(
    activities: &[ActivityRecord],
    member_count: usize,
    options: StatusOptions,
) -> String {
    // Must run before the single-occupant shortcut reads activities[0]
    if activities.is_empty() {
        return String::new();
    }

    if member_count == 1 {
        return activities[0].game.clone();
    }

    let mut tally: HashMap<&str, usize> = HashMap::new();
    for record in activities {
        *tally.entry(record.game.as_str()).or_default() += 1;
    }

    let mut games: Vec<(&str, usize)> = tally.into_iter().collect();
    games.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));

    let render = |&(game, count): &(&str, usize)| {
        if options.include_counts {
            format!("{game} ({count})")
        } else {
            game.to_string()
        }
    };

    if options.list_all_games {
        games.iter().map(render).collect::<Vec<_>>().join(", ")
    } else {
        games.first().map(render).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Participant;
    use serenity::all::UserId;

    fn record(id: u64, game: &str) -> ActivityRecord {
        ActivityRecord {
            participant: Participant::new(UserId::new(id), format!("user{id}")),
            game: game.to_string(),
        }
    }

    #[test]
    fn test_no_activities_yields_empty_status() {
        for member_count in [0, 1, 2, 10] {
            assert_eq!(
                decide_status(&[], member_count, StatusOptions::default()),
                ""
            );
        }
    }

    #[test]
    fn test_single_member_shows_game_verbatim() {
        let activities = [record(1, "Chess")];

        assert_eq!(
            decide_status(&activities, 1, StatusOptions::default()),
            "Chess"
        );
    }

    #[test]
    fn test_single_member_with_multiple_games_shows_first() {
        let activities = [record(1, "Chess"), record(1, "Go")];

        assert_eq!(
            decide_status(&activities, 1, StatusOptions::default()),
            "Chess"
        );
    }

    #[test]
    fn test_shared_game_is_tallied() {
        let activities = [record(1, "Chess"), record(2, "Chess")];

        assert_eq!(
            decide_status(&activities, 2, StatusOptions::default()),
            "Chess (2)"
        );
    }

    #[test]
    fn test_count_tie_breaks_alphabetically() {
        let activities = [record(1, "Go"), record(2, "Chess")];

        assert_eq!(
            decide_status(&activities, 2, StatusOptions::default()),
            "Chess (1), Go (1)"
        );
    }

    #[test]
    fn test_higher_count_sorts_first() {
        let activities = [record(1, "Go"), record(2, "Chess"), record(3, "Go")];

        assert_eq!(
            decide_status(&activities, 3, StatusOptions::default()),
            "Go (2), Chess (1)"
        );
    }

    #[test]
    fn test_top_game_only_when_not_listing_all() {
        let activities = [record(1, "Chess"), record(2, "Chess"), record(3, "Go")];
        let options = StatusOptions {
            list_all_games: false,
            ..Default::default()
        };

        assert_eq!(decide_status(&activities, 3, options), "Chess (2)");
    }

    #[test]
    fn test_counts_can_be_disabled() {
        let activities = [record(1, "Chess"), record(2, "Chess"), record(3, "Go")];
        let options = StatusOptions {
            include_counts: false,
            ..Default::default()
        };

        let status = decide_status(&activities, 3, options);

        assert_eq!(status, "Chess, Go");
        assert!(!status.contains('('));
    }

    #[test]
    fn test_top_game_without_counts() {
        let activities = [record(1, "Chess"), record(2, "Chess"), record(3, "Go")];
        let options = StatusOptions {
            include_counts: false,
            list_all_games: false,
        };

        assert_eq!(decide_status(&activities, 3, options), "Chess");
    }

    #[test]
    fn test_labels_are_case_sensitive() {
        let activities = [record(1, "chess"), record(2, "Chess")];

        assert_eq!(
            decide_status(&activities, 2, StatusOptions::default()),
            "Chess (1), chess (1)"
        );
    }

    #[test]
    fn test_identical_input_renders_identical_output() {
        let activities = [
            record(1, "Chess"),
            record(2, "Go"),
            record(3, "Go"),
            record(4, "Baba Is You"),
        ];

        let first = decide_status(&activities, 4, StatusOptions::default());
        let second = decide_status(&activities, 4, StatusOptions::default());

        assert_eq!(first, second);
        assert_eq!(first, "Go (2), Baba Is You (1), Chess (1)");
    }
}
