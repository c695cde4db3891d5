use log::{debug, error};
use poise::FrameworkContext;
use serenity::all::{ChannelId, ChannelType, Context, FullEvent, GuildId};
use statuscord_channel::apply_channel_status;
use statuscord_status::{
    collect_activities, decide_status, Participant, PresenceActivity, VoiceMember,
};

use super::Data;

pub async fn handle_event(
    ctx: &Context,
    event: &FullEvent,
    _framework: FrameworkContext<'_, Data, anyhow::Error>,
    data: &Data,
) -> anyhow::Result<()> {
    match event {
        FullEvent::VoiceStateUpdate { old, new } => {
            let old_guild = old.as_ref().and_then(|state| state.guild_id);
            let old_channel = old.as_ref().and_then(|state| state.channel_id);

            // A move between channels refreshes both ends independently
            if let (Some(guild_id), Some(channel_id)) = (old_guild, old_channel) {
                refresh_channel_status(ctx, data, guild_id, channel_id).await;
            }

            if let (Some(guild_id), Some(channel_id)) = (new.guild_id, new.channel_id) {
                if Some(channel_id) != old_channel {
                    refresh_channel_status(ctx, data, guild_id, channel_id).await;
                }
            }
        }
        FullEvent::PresenceUpdate { new_data } => {
            let Some(guild_id) = new_data.guild_id else {
                return Ok(());
            };

            // Presence changes only matter for members currently in voice
            let channel_id = ctx.cache.guild(guild_id).and_then(|guild| {
                guild
                    .voice_states
                    .get(&new_data.user.id)
                    .and_then(|state| state.channel_id)
            });

            if let Some(channel_id) = channel_id {
                refresh_channel_status(ctx, data, guild_id, channel_id).await;
            }
        }
        _ => {}
    }

    Ok(())
}

/// Recompute a channel's status from the current cache contents and write it
/// out. Write failures are logged and dropped; the next voice or presence
/// event supersedes whatever we failed to apply here.
async fn refresh_channel_status(
    ctx: &Context,
    data: &Data,
    guild_id: GuildId,
    channel_id: ChannelId,
) {
    let Some(members) = snapshot_voice_members(ctx, guild_id, channel_id) else {
        return;
    };

    if members.is_empty() {
        // Discord clears the status itself once the last member leaves
        return;
    }

    let activities = collect_activities(&members);
    let status = decide_status(&activities, members.len(), data.status_options());

    debug!(
        "Channel {channel_id}: {} non-bot member(s), status {status:?}",
        members.len()
    );

    if let Err(why) = apply_channel_status(&ctx.http, data.rest(), channel_id, &status).await {
        error!("Failed to update status of channel {channel_id}: {why}");
    }
}

/// Snapshot the non-bot occupants of a voice channel together with their
/// reported activities. Returns `None` for uncached guilds and for channels
/// that are not plain voice channels (stage channels are left alone).
fn snapshot_voice_members(
    ctx: &Context,
    guild_id: GuildId,
    channel_id: ChannelId,
) -> Option<Vec<VoiceMember>> {
    let guild = ctx.cache.guild(guild_id)?;

    let channel = guild.channels.get(&channel_id)?;
    if channel.kind != ChannelType::Voice {
        return None;
    }

    let mut members = Vec::new();

    for (user_id, state) in &guild.voice_states {
        if state.channel_id != Some(channel_id) {
            continue;
        }

        let Some(member) = guild.members.get(user_id) else {
            continue;
        };

        if member.user.bot {
            continue;
        }

        // Members without cached presence data still count towards the
        // occupant total, they just report no activities.
        let activities = guild
            .presences
            .get(user_id)
            .map(|presence| {
                presence
                    .activities
                    .iter()
                    .map(|activity| PresenceActivity {
                        kind: activity.kind,
                        name: activity.name.clone(),
                    })
                    .collect()
            })
            .unwrap_or_default();

        members.push(VoiceMember {
            participant: Participant::new(*user_id, member.user.tag()),
            activities,
        });
    }

    // Cache iteration order is arbitrary; keep snapshots stable
    members.sort_by_key(|member| member.participant.id);

    Some(members)
}
