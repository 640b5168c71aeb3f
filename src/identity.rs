//! Identity manager: list, inspect and pick coordinator/cruncher profiles.
//!
//! Each sub-command of `crunch-identity` maps to one function here. Output is
//! rendered to a `String` first so it can be asserted on.

use anyhow::Result;
use clap::ValueEnum;
use thiserror::Error;

use crate::command::CoordinatorCommand;
use crate::prompt::{LinePrompt, Reply};
use crate::store::{Profile, ProfileStore};
use crate::ui::{Glyph, Ui, abbreviate};

/// Sub-commands accepted by `crunch-identity`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Action {
    /// List all profiles
    #[default]
    List,
    /// Show a profile's fields
    Show,
    /// Pick a profile interactively
    Switch,
    /// Create a coordinator profile (not implemented)
    SetupCoordinator,
    /// Create a cruncher profile (not implemented)
    SetupCruncher,
    /// Print the coordinator CLI command for a profile
    Cmd,
}

/// Why an interactive selection did not resolve to a profile
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectionError {
    #[error("Invalid selection")]
    OutOfRange(String),
    #[error("Profile '{0}' not found")]
    UnknownName(String),
}

pub fn run(
    store: &ProfileStore,
    action: Action,
    profile: Option<&str>,
    prompt: &mut dyn LinePrompt,
    ui: &Ui,
) -> Result<()> {
    match action {
        Action::List => ui.println(render_list(store, ui)),
        Action::Show => ui.println(render_show(store, profile, ui)),
        Action::Switch => {
            switch_profile(store, prompt, ui)?;
        }
        Action::SetupCoordinator => ui.println(render_setup("Coordinator", ui)),
        Action::SetupCruncher => ui.println(render_setup("Cruncher", ui)),
        Action::Cmd => match profile {
            Some(name) => {
                generate_cli_command(store, name, ui);
            }
            None => ui.println("Profile name required for cmd command"),
        },
    }
    Ok(())
}

fn not_found(name: &str, ui: &Ui) -> String {
    ui.with_glyph(Glyph::Cross, format!("Profile '{}' not found", name))
}

pub fn render_list(store: &ProfileStore, ui: &Ui) -> String {
    if store.is_empty() {
        return "No profiles configured".to_string();
    }

    let mut lines = vec![
        String::new(),
        ui.heading(Glyph::Tools, "Available Crunch Profiles:"),
        ui.rule(50),
    ];

    for (name, profile) in store.iter() {
        let glyph = if profile.coordinator_wallet().is_some() {
            Glyph::Coordinator
        } else {
            Glyph::Basic
        };
        lines.push(format!("{} {:<15} ({})", ui.glyph(glyph), name, profile.network()));

        if let Some(coordinator) = profile.coordinator_wallet() {
            lines.push(format!("   Coordinator: {}", abbreviate(coordinator)));
        }
        if let Some(multisig) = profile.multisig_address() {
            lines.push(format!("   Multisig:    {}", abbreviate(multisig)));
        }
        lines.push(String::new());
    }

    lines.join("\n")
}

fn render_profile(name: &str, profile: &Profile, ui: &Ui) -> String {
    let mut table = ui.simple_table();
    table.add_row(vec![ui.header_cell("Network:"), ui.cell(profile.network().as_str())]);
    table.add_row(vec![
        ui.header_cell("URL:"),
        ui.cell(profile.url.clone().unwrap_or_default()),
    ]);
    table.add_row(vec![
        ui.header_cell("Wallet:"),
        ui.cell(profile.wallet.clone().unwrap_or_default()),
    ]);
    if let Some(coordinator) = profile.coordinator_wallet() {
        table.add_row(vec![ui.header_cell("Coordinator:"), ui.cell(coordinator)]);
    }
    if let Some(multisig) = profile.multisig_address() {
        table.add_row(vec![ui.header_cell("Multisig:"), ui.cell(multisig)]);
    }

    [
        String::new(),
        ui.heading(Glyph::Clipboard, format!("Profile: {name}")),
        ui.rule(30),
        table.to_string(),
    ]
    .join("\n")
}

/// Field dump for `name`; without a name there is no active profile to show
pub fn render_show(store: &ProfileStore, name: Option<&str>, ui: &Ui) -> String {
    let Some(name) = name else {
        return "Active profile functionality not implemented yet".to_string();
    };

    match store.get(name) {
        Some(profile) => render_profile(name, profile, ui),
        None => not_found(name, ui),
    }
}

/// Print the `get` command for a profile and return it
pub fn generate_cli_command(store: &ProfileStore, name: &str, ui: &Ui) -> Option<String> {
    match render_cli_command(store, name, ui) {
        Some((text, command)) => {
            ui.println(text);
            Some(command)
        }
        None => {
            ui.println(not_found(name, ui));
            None
        }
    }
}

fn render_cli_command(store: &ProfileStore, name: &str, ui: &Ui) -> Option<(String, String)> {
    let command = CoordinatorCommand::get(store.get(name)?).to_string();
    let text = format!(
        "\n{}\n{}",
        ui.heading(Glyph::Rocket, format!("CLI Command for '{name}':")),
        command
    );
    Some((text, command))
}

pub fn render_setup(role: &str, ui: &Ui) -> String {
    [
        ui.heading(Glyph::Tools, format!("{role} Profile Setup")),
        format!(
            "This would interactively create a {} profile",
            role.to_lowercase()
        ),
        "Implementation pending...".to_string(),
    ]
    .join("\n")
}

/// Optional sign followed by ASCII digits, of any magnitude
fn is_integer(input: &str) -> bool {
    let digits = input.strip_prefix(['+', '-']).unwrap_or(input);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

/// Resolve a typed selection: a 1-based index or a profile name
pub fn resolve_selection<'a>(
    store: &'a ProfileStore,
    input: &str,
) -> Result<&'a str, SelectionError> {
    let input = input.trim();

    if is_integer(input) {
        return input
            .parse::<usize>()
            .ok()
            .and_then(|position| store.get_by_position(position))
            .map(|(name, _)| name)
            .ok_or_else(|| SelectionError::OutOfRange(input.to_string()));
    }

    store
        .profiles
        .get_key_value(input)
        .map(|(name, _)| name.as_str())
        .ok_or_else(|| SelectionError::UnknownName(input.to_string()))
}

/// Interactive switch. Returns the generated command when a profile was picked.
pub fn switch_profile(
    store: &ProfileStore,
    prompt: &mut dyn LinePrompt,
    ui: &Ui,
) -> Result<Option<String>> {
    if store.is_empty() {
        ui.println("No profiles available to switch to");
        return Ok(None);
    }

    let mut lines = vec![String::new(), ui.heading(Glyph::Switch, "Available profiles:")];
    lines.extend(
        store
            .names()
            .enumerate()
            .map(|(i, name)| format!("{}. {}", i + 1, name)),
    );
    lines.push(String::new());
    ui.println(lines.join("\n"));

    let answer = match prompt.ask("Select profile (number or name):")? {
        Reply::Answer(answer) => answer,
        Reply::Cancelled => {
            ui.println(format!("\n{}", ui.with_glyph(Glyph::Cross, "Cancelled")));
            return Ok(None);
        }
    };

    match resolve_selection(store, &answer) {
        Ok(name) => {
            tracing::debug!(profile = name, "profile selected");
            ui.println(format!(
                "\n{}",
                ui.with_glyph(Glyph::Check, format!("Switched to profile: {name}"))
            ));
            Ok(generate_cli_command(store, name, ui))
        }
        Err(e) => {
            ui.println(e.to_string());
            Ok(None)
        }
    }
}
