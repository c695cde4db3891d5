use anyhow::Result;
use poise::CreateReply;
use serenity::all::CreateEmbed;
use statuscord_utils::discord::Colors;

use crate::bot::Context;

/// Show the current bot version
#[poise::command(slash_command)]
pub async fn version(ctx: Context<'_>) -> Result<()> {
    ctx.send(
        CreateReply::default()
            .embed(
                CreateEmbed::new()
                    .title("Statuscord")
                    .description(format!(
                        "Currently running version {}",
                        env!("CARGO_PKG_VERSION")
                    ))
                    .color(Colors::Info),
            )
            .ephemeral(true),
    )
    .await?;

    Ok(())
}
