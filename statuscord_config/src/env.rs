use std::sync::LazyLock;

pub static DISCORD_TOKEN: LazyLock<String> = LazyLock::new(|| {
    std::env::var("DISCORD_TOKEN").expect("missing DISCORD_TOKEN environment variable")
});
pub static SHOW_PLAYER_COUNTS: LazyLock<bool> = LazyLock::new(|| {
    std::env::var("SHOW_PLAYER_COUNTS")
        .unwrap_or_else(|_| "true".to_string())
        .parse()
        .expect("SHOW_PLAYER_COUNTS must be either true or false")
});
pub static SHOW_ALL_GAMES: LazyLock<bool> = LazyLock::new(|| {
    std::env::var("SHOW_ALL_GAMES")
        .unwrap_or_else(|_| "true".to_string())
        .parse()
        .expect("SHOW_ALL_GAMES must be either true or false")
});
