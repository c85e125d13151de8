use std::fmt::Write as _;

use meetnotify_domain::{Meeting, Result};

use crate::context::AppContext;
use crate::utils::command_helpers::execute_command;

/// Review dashboard as text.
pub async fn review_summary(ctx: &AppContext) -> Result<String> {
    execute_command("review::summary", || async move {
        let summary = ctx.review.summary().await?;

        let mut out = String::new();
        let _ = writeln!(out, "Meetings:     {}", summary.total_meetings);
        let _ = writeln!(out, "  upcoming:   {}", summary.upcoming);
        let _ = writeln!(out, "  completed:  {}", summary.completed);
        if summary.unparsed > 0 {
            let _ = writeln!(out, "  unparsable: {}", summary.unparsed);
        }
        let _ = writeln!(out, "Participants: {}", summary.total_participants);
        for (seksi, count) in &summary.participants_by_seksi {
            let _ = writeln!(out, "  {seksi}: {count}");
        }
        let _ = writeln!(out, "Meetings by month:");
        for (month, count) in &summary.meetings_by_month {
            let _ = writeln!(out, "  {month}: {count}");
        }
        let _ = writeln!(out, "Next meeting: {}", headline(summary.next_meeting.as_ref()));
        let _ = writeln!(out, "Last meeting: {}", headline(summary.last_meeting.as_ref()));
        Ok(out)
    })
    .await
}

fn headline(meeting: Option<&Meeting>) -> String {
    match meeting {
        Some(m) => format!("#{} {} ({} {})", m.id, m.title, m.date, m.start_time),
        None => "-".to_string(),
    }
}
