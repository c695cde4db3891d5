use serenity::all::GatewayIntents;

mod env;

pub fn discord_token() -> &'static str {
    &env::DISCORD_TOKEN
}

/// Presence and voice-state tracking both require privileged intents, which
/// must also be enabled on the bot's application page.
pub fn discord_intents() -> GatewayIntents {
    GatewayIntents::GUILDS
        | GatewayIntents::GUILD_VOICE_STATES
        | GatewayIntents::GUILD_PRESENCES
        | GatewayIntents::GUILD_MEMBERS
}

pub fn show_player_counts() -> bool {
    *env::SHOW_PLAYER_COUNTS
}

pub fn show_all_games() -> bool {
    *env::SHOW_ALL_GAMES
}
