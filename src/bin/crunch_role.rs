use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

use crunch_profiles::{
    logging,
    paths::Paths,
    roles::{self, RoleAction},
    store::ProfileStore,
    ui::{ColorMode, Ui},
};

#[derive(Parser)]
#[command(name = "crunch-role")]
#[command(about = "CrunchDAO Role Switcher - quick switching between coordinator profiles")]
#[command(version, disable_help_flag = true)]
struct Cli {
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

    /// <profile-name> | list | overview | help | switch to role <profile-name>
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    args: Vec<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let paths = Paths::new(cli.profiles.as_deref())?;
    let ui = Ui::new(cli.color, cli.no_color);
    let action = RoleAction::parse(&cli.args);
    tracing::debug!(store = %paths.profiles_file.display(), ?action, "crunch-role");

    let store = ProfileStore::load(&paths.profiles_file)?;
    roles::run(&store, &action, &ui);
    Ok(())
}
