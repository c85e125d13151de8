use std::fmt::Write as _;

use meetnotify_domain::{ParticipantFilter, Result};

use super::or_dash;
use crate::context::AppContext;
use crate::utils::command_helpers::execute_command;

/// Participants matching `filter`, sorted by name.
pub async fn list_participants(ctx: &AppContext, filter: &ParticipantFilter) -> Result<String> {
    execute_command("participants::list", || async move {
        let participants = ctx.participants.list(filter).await?;
        if participants.is_empty() {
            return Ok("No participants found.\n".to_string());
        }

        let mut out = String::new();
        let _ = writeln!(
            out,
            "{:<5} {:<24} {:<16} {:<14} POSITION",
            "ID", "NAME", "WHATSAPP", "SEKSI"
        );
        for participant in &participants {
            let _ = writeln!(
                out,
                "{:<5} {:<24} {:<16} {:<14} {}",
                participant.id,
                participant.name,
                participant.whatsapp_number,
                participant.seksi,
                or_dash(participant.position.as_deref())
            );
        }
        let _ = writeln!(out, "{} participants", participants.len());
        Ok(out)
    })
    .await
}

pub async fn list_seksi(ctx: &AppContext) -> Result<String> {
    execute_command("participants::seksi", || async move {
        let names = ctx.participants.seksi_names().await?;
        Ok(names.iter().map(|name| format!("{name}\n")).collect())
    })
    .await
}
