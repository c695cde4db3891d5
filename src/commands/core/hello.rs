use anyhow::Result;
use log::error;
use poise::CreateReply;
use serenity::all::{CreateEmbed, Mentionable};
use statuscord_utils::discord::Colors;

use crate::bot::{Context, FrameworkError};

/// Say hello to everyone in the channel
#[poise::command(slash_command, on_error = on_error)]
pub async fn hello(ctx: Context<'_>) -> Result<()> {
    ctx.send(
        CreateReply::default().embed(
            CreateEmbed::new()
                .description(format!(
                    "{} says hello to everyone in this channel! 👋",
                    ctx.author().mention()
                ))
                .color(Colors::Success),
        ),
    )
    .await?;

    Ok(())
}

async fn on_error(error: FrameworkError<'_>) {
    if let FrameworkError::Command { error, ctx, .. } = error {
        error!("An error occured while greeting the channel: {error}");

        _ = ctx
            .send(
                CreateReply::default()
                    .embed(
                        CreateEmbed::new()
                            .description("An error occured whilst trying to say hello.")
                            .color(Colors::Error),
                    )
                    .ephemeral(true),
            )
            .await;
    } else {
        error!("{error}")
    }
}
