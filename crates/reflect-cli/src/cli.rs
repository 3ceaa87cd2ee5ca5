use std::io::IsTerminal;
use std::path::PathBuf;

use anyhow::anyhow;
use clap::{ArgAction, Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug, Clone)]
#[command(
    name = "reflect",
    version,
    about = "Browse daily reflections from the terminal"
)]
pub struct GlobalCli {
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[arg(short = 'q', long = "quiet", action = ArgAction::Count, global = true)]
    pub quiet: u8,

    /// Config file; defaults to $XDG_CONFIG_HOME/reflect/reflect.toml when present.
    #[arg(long = "config", global = true)]
    pub config: Option<PathBuf>,

    #[arg(long = "endpoint", env = "REFLECT_ENDPOINT", global = true)]
    pub endpoint: Option<String>,

    #[arg(long = "uid", env = "REFLECT_UID", global = true)]
    pub uid: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Fetch a reflection and print every story slide.
    Show {
        /// Date as YYYY-MM-DD; today when omitted.
        #[arg(long)]
        date: Option<String>,

        /// Print the raw reflection document as JSON.
        #[arg(long)]
        json: bool,
    },
    /// Fetch a reflection and print the derived task checklist as copy text.
    Tasks {
        #[arg(long)]
        date: Option<String>,

        /// Task ids to leave unchecked (e.g. direct-0, suggested-1).
        #[arg(long = "skip", action = ArgAction::Append)]
        skip: Vec<String>,
    },
    /// Print a month grid.
    Calendar {
        /// Month as YYYY-MM; the current month when omitted.
        #[arg(long)]
        month: Option<String>,

        /// Day to mark as selected, as YYYY-MM-DD.
        #[arg(long)]
        select: Option<String>,
    },
}

pub fn init_tracing(verbose: u8, quiet: u8) -> anyhow::Result<()> {
    let default_level = if quiet >= 2 {
        "error"
    } else if quiet == 1 {
        "warn"
    } else if verbose >= 3 {
        "trace"
    } else if verbose == 2 {
        "debug"
    } else if verbose == 1 {
        "info"
    } else {
        "warn"
    };

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .map_err(|e| anyhow!("invalid RUST_LOG / log filter: {e}"))?;

    let init_result = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(true)
        .with_level(true)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .try_init();

    if let Err(err) = init_result {
        debug!(error = %err, "tracing subscriber already set, continuing");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::{Command, GlobalCli};

    #[test]
    fn parses_tasks_with_repeated_skips() {
        let cli = GlobalCli::try_parse_from([
            "reflect",
            "-vv",
            "tasks",
            "--date",
            "2026-10-17",
            "--skip",
            "direct-0",
            "--skip",
            "suggested-1",
        ])
        .expect("parse args");

        assert_eq!(cli.verbose, 2);
        match cli.command {
            Command::Tasks { date, skip } => {
                assert_eq!(date.as_deref(), Some("2026-10-17"));
                assert_eq!(skip, vec!["direct-0", "suggested-1"]);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn global_flags_follow_subcommand() {
        let cli = GlobalCli::try_parse_from([
            "reflect",
            "calendar",
            "--month",
            "2024-02",
            "--uid",
            "alice",
        ])
        .expect("parse args");
        assert_eq!(cli.uid.as_deref(), Some("alice"));
    }
}
