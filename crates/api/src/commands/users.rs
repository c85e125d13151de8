use std::fmt::Write as _;

use meetnotify_domain::Result;

use super::or_dash;
use crate::context::AppContext;
use crate::utils::command_helpers::execute_command;

pub async fn list_users(ctx: &AppContext) -> Result<String> {
    execute_command("users::list", || async move {
        let users = ctx.users.list().await?;

        let mut out = String::new();
        let _ = writeln!(out, "{:<5} {:<16} {:<24} {:<9} EMAIL", "ID", "USERNAME", "NAME", "ROLE");
        for user in &users {
            let _ = writeln!(
                out,
                "{:<5} {:<16} {:<24} {:<9} {}",
                user.id,
                user.username,
                user.name,
                user.role.to_string(),
                or_dash(user.email.as_deref())
            );
        }
        Ok(out)
    })
    .await
}
