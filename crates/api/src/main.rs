//! MeetNotify - meeting and WhatsApp notification administration client
//!
//! Main entry point for the command line binary.

#![allow(clippy::print_stdout, clippy::print_stderr)]

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use meetnotify_domain::{MeetingFilter, ParticipantFilter, TemporalStatus};
use meetnotify_infra::config::{load_layered, LoadedConfig};
use meetnotify_lib::commands::{
    delete_meeting, list_meetings, list_participants, list_seksi, list_users, meeting_reminders,
    review_summary, show_meeting, show_settings,
};
use meetnotify_lib::utils::logging::init_tracing;
use meetnotify_lib::AppContext;

const ABOUT_TEXT: &str = "Administer meetings, participants and WhatsApp reminders.

The backend is chosen by MEETNOTIFY_BACKEND (api or memory) or a config file
named by MEETNOTIFY_CONFIG. Without either, seeded demo data is used.";

/// Construct the CLI configuration.
fn cli() -> Command {
    let id_arg = || {
        Arg::new("id")
            .help("Meeting ID")
            .required(true)
            .value_parser(value_parser!(u64))
    };

    clap::command!("meetnotify")
        .about(ABOUT_TEXT)
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("meetings")
                .about("Meeting list, details and deletion")
                .subcommand_required(true)
                .subcommand(
                    Command::new("list")
                        .about("Upcoming meetings first, then completed ones")
                        .arg(
                            Arg::new("status")
                                .long("status")
                                .help("Only show one group: upcoming (incoming) or completed")
                                .value_parser(|raw: &str| raw.parse::<TemporalStatus>()),
                        )
                        .arg(Arg::new("search").long("search").short('s').help("Search term"))
                        .arg(
                            Arg::new("page")
                                .long("page")
                                .short('p')
                                .value_parser(value_parser!(u32)),
                        )
                        .arg(
                            Arg::new("per-page")
                                .long("per-page")
                                .value_parser(value_parser!(u32).range(1..)),
                        ),
                )
                .subcommand(Command::new("show").about("Meeting details").arg(id_arg()))
                .subcommand(Command::new("delete").about("Delete a meeting").arg(id_arg()))
                .subcommand(
                    Command::new("reminders")
                        .about("Reminders still due for a meeting")
                        .arg(id_arg()),
                ),
        )
        .subcommand(
            Command::new("participants")
                .about("Participant directory")
                .subcommand_required(true)
                .subcommand(
                    Command::new("list")
                        .about("Participants sorted by name")
                        .arg(Arg::new("search").long("search").short('s').help("Search term"))
                        .arg(Arg::new("seksi").long("seksi").help("Exact seksi name")),
                )
                .subcommand(Command::new("seksi").about("Distinct seksi names")),
        )
        .subcommand(
            Command::new("users")
                .about("User accounts")
                .subcommand_required(true)
                .subcommand(Command::new("list").about("Users sorted by username")),
        )
        .subcommand(
            Command::new("settings")
                .about("Notification settings")
                .subcommand_required(true)
                .subcommand(Command::new("show").about("Current notification settings")),
        )
        .subcommand(Command::new("review").about("Review dashboard summary"))
        .arg(
            Arg::new("json-logs")
                .long("json-logs")
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Emit logs as JSON on stderr"),
        )
}

async fn dispatch(ctx: &AppContext, matches: &ArgMatches) -> meetnotify_domain::Result<String> {
    match matches.subcommand() {
        Some(("meetings", sub)) => match sub.subcommand() {
            Some(("list", args)) => list_meetings(ctx, &meeting_filter(args)).await,
            Some(("show", args)) => show_meeting(ctx, meeting_id(args)).await,
            Some(("delete", args)) => delete_meeting(ctx, meeting_id(args)).await,
            Some(("reminders", args)) => meeting_reminders(ctx, meeting_id(args)).await,
            _ => Ok(String::new()),
        },
        Some(("participants", sub)) => match sub.subcommand() {
            Some(("list", args)) => {
                let filter = ParticipantFilter {
                    search: args.get_one::<String>("search").cloned(),
                    seksi: args.get_one::<String>("seksi").cloned(),
                };
                list_participants(ctx, &filter).await
            }
            Some(("seksi", _)) => list_seksi(ctx).await,
            _ => Ok(String::new()),
        },
        Some(("users", _)) => list_users(ctx).await,
        Some(("settings", _)) => show_settings(ctx).await,
        Some(("review", _)) => review_summary(ctx).await,
        _ => Ok(String::new()),
    }
}

fn meeting_filter(args: &ArgMatches) -> MeetingFilter {
    MeetingFilter {
        status: args.get_one::<TemporalStatus>("status").copied(),
        search: args.get_one::<String>("search").cloned(),
        page: args.get_one::<u32>("page").copied(),
        per_page: args.get_one::<u32>("per-page").copied(),
    }
}

fn meeting_id(args: &ArgMatches) -> u64 {
    // `id` is required, clap rejects the command line before we get here.
    args.get_one::<u64>("id").copied().unwrap_or_default()
}

async fn run(matches: ArgMatches, env_file: Option<PathBuf>) -> anyhow::Result<String> {
    let LoadedConfig { mut config, source } =
        load_layered().context("failed to load configuration")?;
    if matches.get_flag("json-logs") {
        config.logging.json = true;
    }
    init_tracing(&config.logging)?;
    if let Some(path) = env_file {
        tracing::debug!(path = %path.display(), "loaded .env");
    }
    match source {
        Some(path) => tracing::info!(path = %path.display(), "configuration loaded from file"),
        None => tracing::debug!("no config file found, using defaults and environment"),
    }

    let ctx = AppContext::new(config).context("failed to initialise application")?;
    Ok(dispatch(&ctx, &matches).await?)
}

#[tokio::main]
async fn main() -> ExitCode {
    let env_file = dotenvy::dotenv().ok();
    let matches = cli().get_matches();

    match run(matches, env_file).await {
        Ok(output) => {
            print!("{output}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
