mod events;

use anyhow::Result;
use log::info;
use poise::{Framework, FrameworkOptions};
use serenity::all::Ready;
use statuscord_status::StatusOptions;

use crate::commands;

pub struct Data {
    status_options: StatusOptions,
    rest: reqwest::Client,
}

impl Data {
    /// Formatting toggles handed to the decision function on every update.
    pub fn status_options(&self) -> StatusOptions {
        self.status_options
    }

    pub fn rest(&self) -> &reqwest::Client {
        &self.rest
    }
}

pub type Context<'a> = poise::Context<'a, Data, anyhow::Error>;
pub type FrameworkError<'a> = poise::FrameworkError<'a, Data, anyhow::Error>;

pub async fn setup(
    ctx: &serenity::all::Context,
    ready: &Ready,
    framework: &Framework<Data, anyhow::Error>,
) -> Result<Data> {
    poise::builtins::register_globally(ctx, &framework.options().commands).await?;

    info!("Logged in as {}", ready.user.tag());
    info!("Watching voice and presence events");

    Ok(Data {
        status_options: StatusOptions {
            include_counts: statuscord_config::show_player_counts(),
            list_all_games: statuscord_config::show_all_games(),
        },
        rest: reqwest::Client::new(),
    })
}

pub fn framework_opts() -> FrameworkOptions<Data, anyhow::Error> {
    FrameworkOptions {
        commands: vec![commands::core::version(), commands::core::hello()],
        event_handler: |ctx, event, framework, data| {
            Box::pin(events::handle_event(ctx, event, framework, data))
        },
        ..Default::default()
    }
}
