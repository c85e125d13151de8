use std::fmt::Write as _;

use meetnotify_domain::Result;

use crate::context::AppContext;
use crate::utils::command_helpers::execute_command;

pub async fn show_settings(ctx: &AppContext) -> Result<String> {
    execute_command("settings::show", || async move {
        let settings = ctx.settings.get().await?;
        let offsets = settings
            .reminder_offsets_minutes
            .iter()
            .map(|minutes| describe_offset(*minutes))
            .collect::<Vec<_>>()
            .join(", ");

        let mut out = String::new();
        let _ = writeln!(out, "Notifications:    {}", on_off(settings.enabled));
        let offsets = if offsets.is_empty() { "-" } else { offsets.as_str() };
        let _ = writeln!(out, "Reminders before: {offsets}");
        let _ = writeln!(out, "Notify on create: {}", on_off(settings.notify_on_create));
        let _ = writeln!(out, "Notify on update: {}", on_off(settings.notify_on_update));
        let _ = writeln!(out, "Message template:");
        let _ = writeln!(out, "{}", settings.message_template);
        Ok(out)
    })
    .await
}

fn on_off(flag: bool) -> &'static str {
    if flag {
        "on"
    } else {
        "off"
    }
}

/// Largest whole unit: `1440` is `1d`, `90` is `90m`.
fn describe_offset(minutes: u32) -> String {
    const DAY: u32 = 24 * 60;
    if minutes % DAY == 0 {
        format!("{}d", minutes / DAY)
    } else if minutes % 60 == 0 {
        format!("{}h", minutes / 60)
    } else {
        format!("{minutes}m")
    }
}
