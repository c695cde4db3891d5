mod bot;
mod commands;

use log::{error, info};
use poise::Framework;
use serenity::all::ClientBuilder;

#[tokio::main]
async fn main() {
    // Setup logging
    if std::env::var("RUST_LOG").is_err() {
        #[cfg(debug_assertions)]
        std::env::set_var("RUST_LOG", "statuscord");

        #[cfg(not(debug_assertions))]
        std::env::set_var("RUST_LOG", "statuscord=info");
    }

    env_logger::init();

    info!("What are they playing in there?");
    info!(" - Statuscord");

    dotenvy::dotenv().ok();

    // Set up bot
    let framework = Framework::builder()
        .setup(|ctx, ready, framework| Box::pin(bot::setup(ctx, ready, framework)))
        .options(bot::framework_opts())
        .build();

    let mut client = match ClientBuilder::new(
        statuscord_config::discord_token(),
        statuscord_config::discord_intents(),
    )
    .framework(framework)
    .await
    {
        Ok(client) => client,
        Err(why) => {
            error!("Fatal error when building Serenity client: {why}");
            return;
        }
    };

    if let Err(why) = client.start_autosharded().await {
        error!("Fatal error occured during bot operations: {why}");
        error!("Bot will now shut down!");
    }
}
