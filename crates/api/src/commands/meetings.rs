use std::fmt::Write as _;

use meetnotify_domain::{Meeting, MeetingFilter, Page, Result};

use super::{or_dash, DIVIDER};
use crate::context::AppContext;
use crate::utils::command_helpers::execute_command;

/// Arranged, filtered and paginated meeting list.
pub async fn list_meetings(ctx: &AppContext, filter: &MeetingFilter) -> Result<String> {
    execute_command("meetings::list", || async move {
        let page = ctx.meetings.list(filter).await?;
        Ok(render_page(&page))
    })
    .await
}

pub async fn show_meeting(ctx: &AppContext, id: u64) -> Result<String> {
    execute_command("meetings::show", || async move {
        let meeting = ctx.meetings.get(id).await?;
        let status = ctx.meetings.status_of(&meeting);

        let mut out = String::new();
        let _ = writeln!(out, "#{} {}", meeting.id, meeting.title);
        let _ = writeln!(out, "Status:       {status}");
        let _ = writeln!(out, "Date:         {}", meeting.date);
        let _ = writeln!(out, "Time:         {}", time_range(&meeting));
        let _ = writeln!(out, "Location:     {}", or_dash(meeting.location.as_deref()));
        if let Some(description) = meeting.description.as_deref() {
            let _ = writeln!(out, "Description:  {description}");
        }
        let _ = writeln!(out, "Participants: {}", join_ids(&meeting.participant_ids));
        for attachment in &meeting.attachments {
            let _ = writeln!(out, "Attachment:   {} ({})", attachment.file_name, attachment.url);
        }
        Ok(out)
    })
    .await
}

pub async fn delete_meeting(ctx: &AppContext, id: u64) -> Result<String> {
    execute_command("meetings::delete", || async move {
        ctx.meetings.delete(id).await?;
        Ok(format!("Deleted meeting #{id}\n"))
    })
    .await
}

/// Reminder instants still due for a meeting under the current settings.
pub async fn meeting_reminders(ctx: &AppContext, id: u64) -> Result<String> {
    execute_command("meetings::reminders", || async move {
        let meeting = ctx.meetings.get(id).await?;
        let pending = ctx.settings.pending_reminders(&meeting).await?;
        if pending.is_empty() {
            return Ok(format!("No pending reminders for meeting #{id}\n"));
        }

        let mut out = format!("Pending reminders for meeting #{id}:\n");
        for at in pending {
            let _ = writeln!(out, "  {}", at.format("%Y-%m-%d %H:%M"));
        }
        Ok(out)
    })
    .await
}

fn render_page(page: &Page<Meeting>) -> String {
    if page.items.is_empty() {
        return format!("No meetings found (page {} of {}).\n", page.page, page.total_pages.max(1));
    }

    let mut out = String::new();
    let _ = writeln!(out, "{:<5} {:<10} {:<13} {:<10} TITLE", "ID", "DATE", "TIME", "STATUS");
    for (index, meeting) in page.items.iter().enumerate() {
        if page.divider_index == Some(index) {
            let _ = writeln!(out, "{DIVIDER}");
        }
        let status = page.status_at(index).map_or_else(|| "-".to_string(), |s| s.to_string());
        let _ = writeln!(
            out,
            "{:<5} {:<10} {:<13} {:<10} {}",
            meeting.id,
            short_date(&meeting.date),
            time_range(meeting),
            status,
            meeting.title
        );
    }
    let _ = writeln!(
        out,
        "Page {} of {} ({} meetings)",
        page.page,
        page.total_pages.max(1),
        page.total
    );
    out
}

fn short_date(date: &str) -> &str {
    date.get(..10).unwrap_or(date)
}

fn time_range(meeting: &Meeting) -> String {
    format!("{}-{}", short_time(&meeting.start_time), short_time(&meeting.end_time))
}

/// `HH:mm` from a bare time; full timestamps are shown as given.
fn short_time(time: &str) -> &str {
    if time.len() == 8 && time.as_bytes().get(2) == Some(&b':') {
        time.get(..5).unwrap_or(time)
    } else {
        time
    }
}

fn join_ids(ids: &[u64]) -> String {
    if ids.is_empty() {
        return "-".to_string();
    }
    ids.iter().map(u64::to_string).collect::<Vec<_>>().join(", ")
}
