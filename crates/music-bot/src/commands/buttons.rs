//! Track buttons - hand the chosen track's command back to the user.

use crate::commands::CommandHandler;
use crate::custom_id::{TrackAction, TrackButtonId};
use crate::error::AppResult;
use async_trait::async_trait;
use discord_client::{BotEvent, Gateway, Reply};
use std::sync::Arc;
use track_catalog::Catalog;
use tracing::{debug, info, warn};

const NOT_FOUND: &str = "Error: Not found.";

pub struct TrackButtonHandler {
    catalog: Arc<Catalog>,
}

impl TrackButtonHandler {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self { catalog }
    }
}

#[async_trait]
impl CommandHandler for TrackButtonHandler {
    fn name(&self) -> &str {
        "track-button"
    }

    fn matches(&self, event: &BotEvent) -> bool {
        matches!(event, BotEvent::Button(click) if TrackButtonId::is_ours(&click.custom_id))
    }

    async fn execute(&self, event: &BotEvent, gateway: &dyn Gateway) -> AppResult<()> {
        let BotEvent::Button(click) = event else {
            return Ok(());
        };

        let resolved = click
            .custom_id
            .parse::<TrackButtonId>()
            .map_err(|e| e.to_string())
            .and_then(|id| {
                self.catalog
                    .get(id.index)
                    .map(|track| (id.action, track))
                    .ok_or_else(|| format!("index {} out of range", id.index))
            });

        let (action, track) = match resolved {
            Ok(found) => found,
            Err(reason) => {
                warn!("Unresolvable button {:?}: {}", click.custom_id, reason);
                gateway
                    .respond(&click.interaction, &Reply::ephemeral_text(NOT_FOUND))
                    .await?;
                return Ok(());
            }
        };
        let command = &track.command;

        match action {
            TrackAction::Pick => {
                let content = format!(
                    "```\n{}\n```\nClick to copy the command above, then send it yourself.",
                    command
                );
                gateway
                    .respond(&click.interaction, &Reply::ephemeral_text(content))
                    .await?;
            }
            TrackAction::Load => {
                let content = format!(
                    "💬 Your command is ready:\n`{}`\n\nJust press **Enter** to send it.",
                    command
                );
                gateway
                    .respond(&click.interaction, &Reply::ephemeral_text(content))
                    .await?;

                let dm = Reply::text(format!("💬 Auto-filled command:\n`{}`", command));
                if let Err(e) = gateway.send_direct(click.user_id, &dm).await {
                    // Users with closed DMs still got the ephemeral copy.
                    debug!("Direct message to {} failed: {}", click.user_id, e);
                }
            }
            TrackAction::SendDirect => {
                let dm = Reply::text(format!("Here is your command:\n`{}`", command));
                let content = match gateway.send_direct(click.user_id, &dm).await {
                    Ok(()) => "Sent to your DM!".to_string(),
                    Err(e) => {
                        warn!("Direct message to {} failed: {}", click.user_id, e);
                        format!("I couldn't send you a DM. Here is your command:\n`{}`", command)
                    }
                };
                gateway
                    .respond(&click.interaction, &Reply::ephemeral_text(content))
                    .await?;
            }
        }

        info!("Handled {:?} for track {:?}", action, track.name);
        Ok(())
    }
}
