use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

use crunch_profiles::{
    identity::{self, Action},
    logging,
    paths::Paths,
    prompt,
    store::ProfileStore,
    ui::{ColorMode, Ui},
};

#[derive(Parser)]
#[command(name = "crunch-identity")]
#[command(about = "CrunchDAO Identity Manager - manage coordinator/cruncher profiles")]
#[command(version)]
struct Cli {
    /// Command to execute
    #[arg(value_enum, default_value_t = Action::List)]
    command: Action,

    /// Profile name (for show/cmd commands)
    profile: Option<String>,

    /// Profile store to read (defaults to profiles.json in the install root)
    #[arg(long, value_name = "FILE")]
    profiles: Option<PathBuf>,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// When to use colors: always, auto, never
    #[arg(long, value_name = "WHEN", default_value = "auto")]
    color: ColorMode,

    /// Log debug diagnostics to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let paths = Paths::new(cli.profiles.as_deref())?;
    let ui = Ui::new(cli.color, cli.no_color);
    tracing::debug!(store = %paths.profiles_file.display(), command = ?cli.command, "crunch-identity");

    let store = ProfileStore::load(&paths.profiles_file)?;
    let mut prompt = prompt::stdin_prompt();
    identity::run(&store, cli.command, cli.profile.as_deref(), prompt.as_mut(), &ui)
}
