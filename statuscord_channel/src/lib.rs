//! Writing a status string onto a voice channel.
//!
//! Serenity has no binding for the voice status endpoint, so the primary path
//! is a raw REST call; if that fails we fall back to a plain channel edit.
//! Callers never learn which mechanism ran.

use log::{debug, warn};
use serenity::all::{ChannelId, EditChannel, Http};

mod error;

pub use error::{Error, Result};

const DISCORD_API_BASE: &str = "https://discord.com/api/v10";

/// Discord rejects voice channel statuses longer than this.
pub const MAX_STATUS_LEN: usize = 500;

/// Write `status` onto the given voice channel. An empty string clears the
/// displayed status.
pub async fn apply_channel_status(
    http: &Http,
    rest: &reqwest::Client,
    channel_id: ChannelId,
    status: &str,
) -> Result<()> {
    let status = clamp_status(status);

    match put_voice_status(rest, channel_id, status).await {
        Ok(()) => {
            debug!("Set status of channel {channel_id} to {status:?}");
            return Ok(());
        }
        Err(why) => {
            warn!("Voice status endpoint failed for channel {channel_id}, falling back to a channel edit: {why}");
        }
    }

    channel_id
        .edit(http, EditChannel::new().topic(status))
        .await?;

    Ok(())
}

async fn put_voice_status(
    rest: &reqwest::Client,
    channel_id: ChannelId,
    status: &str,
) -> Result<()> {
    let url = format!("{DISCORD_API_BASE}/channels/{channel_id}/voice-status");

    let response = rest
        .put(url)
        .header(
            "Authorization",
            format!("Bot {}", statuscord_config::discord_token()),
        )
        .json(&serde_json::json!({ "status": status }))
        .send()
        .await?;

    if !response.status().is_success() {
        return Err(Error::UnexpectedStatus(response.status().as_u16()));
    }

    Ok(())
}

/// Cut the status down to what Discord accepts, without splitting a character.
fn clamp_status(status: &str) -> &str {
    match status.char_indices().nth(MAX_STATUS_LEN) {
        Some((index, _)) => &status[..index],
        None => status,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_status_is_untouched() {
        assert_eq!(clamp_status("Chess (2)"), "Chess (2)");
        assert_eq!(clamp_status(""), "");
    }

    #[test]
    fn test_long_status_is_clamped_to_limit() {
        let long = "x".repeat(MAX_STATUS_LEN + 37);

        let clamped = clamp_status(&long);

        assert_eq!(clamped.chars().count(), MAX_STATUS_LEN);
    }

    #[test]
    fn test_clamp_respects_multibyte_boundaries() {
        let long = "é".repeat(MAX_STATUS_LEN + 5);

        let clamped = clamp_status(&long);

        assert_eq!(clamped.chars().count(), MAX_STATUS_LEN);
        assert!(long.starts_with(clamped));
    }
}
