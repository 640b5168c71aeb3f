//! Role switcher: quick switching between coordinator/cruncher identities.
//!
//! Each `render_*` function turns a store snapshot into the text the
//! `crunch-role` binary prints; [`run`] prints it.

use anstyle::AnsiColor;

use crate::command::{CoordinatorCommand, GET};
use crate::store::{Network, Profile, ProfileStore};
use crate::ui::{Glyph, Ui, abbreviate};

/// Name of the role switcher binary, used in hints
pub const BIN_NAME: &str = "crunch-role";

/// Commands offered after a switch, with their descriptions
pub const READY_COMMANDS: [(&str, &str); 4] = [
    (GET, "Get coordinator details"),
    ("crunches list", "List all crunches"),
    ("list", "List all coordinators"),
    ("get-config", "Get coordinator config"),
];

/// Parsed `crunch-role` invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoleAction {
    List,
    Overview,
    Help,
    Switch(String),
    /// `switch to role` without a profile name
    SwitchUsage,
}

impl RoleAction {
    /// Interpret raw positional arguments.
    ///
    /// Keywords are matched case-insensitively; a profile name is kept as typed.
    pub fn parse(args: &[String]) -> Self {
        let Some(first) = args.first() else {
            return Self::List;
        };
        let keyword = first.to_lowercase();

        let is_phrase = keyword == "switch"
            && args.len() >= 3
            && args[1].eq_ignore_ascii_case("to")
            && args[2].eq_ignore_ascii_case("role");
        if is_phrase {
            return match args.get(3) {
                Some(name) => Self::Switch(name.clone()),
                None => Self::SwitchUsage,
            };
        }

        match keyword.as_str() {
            "list" => Self::List,
            "overview" => Self::Overview,
            "help" | "--help" | "-h" => Self::Help,
            _ => Self::Switch(first.clone()),
        }
    }
}

pub fn run(store: &ProfileStore, action: &RoleAction, ui: &Ui) {
    match action {
        RoleAction::List => ui.println(render_list(store, ui)),
        RoleAction::Overview => ui.println(render_overview(store, ui)),
        RoleAction::Help => ui.println(render_help(store, ui)),
        RoleAction::SwitchUsage => {
            ui.println(format!("Usage: {BIN_NAME} switch to role <profile-name>"))
        }
        RoleAction::Switch(name) => switch_to_role(store, name, ui),
    }
}

/// Ready-to-use coordinator command for a profile, `None` if it doesn't exist
pub fn generate_cli_command(store: &ProfileStore, name: &str, subcommand: &str) -> Option<String> {
    store
        .get(name)
        .map(|profile| CoordinatorCommand::for_profile(profile, subcommand).to_string())
}

/// Print the switch banner, or the not-found message listing known profiles
pub fn switch_to_role(store: &ProfileStore, name: &str, ui: &Ui) {
    match render_switch(store, name, ui) {
        Some(text) => ui.println(text),
        None => ui.println(render_not_found(store, name, ui)),
    }
}

pub fn render_not_found(store: &ProfileStore, name: &str, ui: &Ui) -> String {
    let available = store.names().collect::<Vec<_>>().join(", ");
    format!(
        "{}\nAvailable profiles: {}",
        ui.with_glyph(Glyph::Cross, format!("Profile '{}' not found", name)),
        available
    )
}

fn network_label(network: Network, ui: &Ui) -> String {
    let color = match network {
        Network::Mainnet => AnsiColor::Yellow,
        Network::Devnet => AnsiColor::Cyan,
    };
    ui.colored(network.as_str(), color)
}

pub fn render_switch(store: &ProfileStore, name: &str, ui: &Ui) -> Option<String> {
    let profile = store.get(name)?;
    tracing::debug!(profile = name, "switching role");

    let mut lines = vec![
        String::new(),
        ui.heading(
            Glyph::Switch,
            format!("Switched to: {} ({})", name, network_label(profile.network(), ui)),
        ),
        ui.rule(50),
    ];

    if let Some(coordinator) = profile.coordinator_wallet() {
        lines.push(ui.with_glyph(Glyph::Clipboard, format!("Coordinator: {coordinator}")));
    }
    if let Some(multisig) = profile.multisig_address() {
        lines.push(ui.with_glyph(Glyph::Lock, format!("Multisig: {multisig}")));
    }

    lines.push(String::new());
    lines.push(ui.heading(Glyph::Rocket, "Ready-to-use commands:"));

    for (subcommand, description) in READY_COMMANDS {
        if let Some(command) = generate_cli_command(store, name, subcommand) {
            lines.push(String::new());
            lines.push(ui.dim(format!("# {description}")));
            lines.push(command);
        }
    }

    Some(lines.join("\n"))
}

fn status_glyph(profile: &Profile) -> Glyph {
    match (profile.coordinator_wallet(), profile.multisig_address()) {
        (Some(_), Some(_)) => Glyph::CoordinatorMultisig,
        (Some(_), None) => Glyph::Coordinator,
        _ => Glyph::Basic,
    }
}

pub fn render_list(store: &ProfileStore, ui: &Ui) -> String {
    if store.is_empty() {
        return "No profiles configured".to_string();
    }

    let mut lines = vec![
        String::new(),
        ui.heading(Glyph::Roles, "Quick Role Profiles:"),
        ui.rule(40),
    ];

    for (name, profile) in store.iter() {
        lines.push(format!(
            "{} {:<15} ({})",
            ui.glyph(status_glyph(profile)),
            name,
            network_label(profile.network(), ui)
        ));
        lines.push(ui.dim(format!("   {BIN_NAME} {name}")));
    }

    lines.join("\n")
}

pub fn render_overview(store: &ProfileStore, ui: &Ui) -> String {
    let mut lines = vec![
        String::new(),
        ui.heading(Glyph::Chart, "Coordinator Overview:"),
        ui.rule(40),
    ];

    let (mainnet, devnet): (Vec<_>, Vec<_>) = store
        .iter()
        .filter_map(|(name, profile)| {
            profile
                .coordinator_wallet()
                .map(|coordinator| (name, profile, coordinator))
        })
        .partition(|(_, profile, _)| profile.network() == Network::Mainnet);

    if !mainnet.is_empty() {
        lines.push(String::new());
        lines.push(ui.heading(Glyph::Globe, "Mainnet Coordinators:"));
        for (name, profile, coordinator) in &mainnet {
            lines.push(format!("  • {}: {}", name, abbreviate(coordinator)));
            if let Some(multisig) = profile.multisig_address() {
                lines.push(format!("    Multisig: {}", abbreviate(multisig)));
            }
        }
    }

    if !devnet.is_empty() {
        lines.push(String::new());
        lines.push(ui.heading(Glyph::Lab, "Devnet Coordinators:"));
        for (name, _, coordinator) in &devnet {
            lines.push(format!("  • {}: {}", name, abbreviate(coordinator)));
        }
    }

    lines.join("\n")
}

pub fn render_help(store: &ProfileStore, ui: &Ui) -> String {
    let mut lines = vec![
        String::new(),
        ui.heading(Glyph::Roles, "CrunchDAO Role Switcher"),
        "Quick switching between coordinator profiles".to_string(),
        String::new(),
        ui.bold("Usage:"),
        format!("  {BIN_NAME} <profile-name>               # Quick switch"),
        format!("  {BIN_NAME} list                         # List profiles"),
        format!("  {BIN_NAME} overview                     # Show coordinator overview"),
        format!("  {BIN_NAME} switch to role <name>        # Full syntax"),
        String::new(),
        ui.bold("Available profiles:"),
    ];
    lines.extend(store.names().map(|name| format!("  - {name}")));
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::ColorMode;

    fn test_ui() -> Ui {
        Ui::new(ColorMode::Never, false)
    }

    fn args(tokens: &[&str]) -> Vec<String> {
        tokens.iter().map(|t| t.to_string()).collect()
    }

    fn store() -> ProfileStore {
        serde_json::from_str(
            r#"{"profiles": {
                "alice": {
                    "url": "https://mainnet.example",
                    "wallet": "W1",
                    "coordinatorWallet": "C1",
                    "multisigAddress": "M1"
                },
                "bob": {
                    "url": "https://api.devnet.solana.com",
                    "wallet": "your keypair",
                    "coordinatorWallet": "BobCoordinatorWallet1234567890"
                },
                "carol": {"url": "https://api.devnet.solana.com", "wallet": "~/.config/solana/id.json"}
            }}"#,
        )
        .unwrap()
    }

    #[test]
    fn test_parse_actions() {
        assert_eq!(RoleAction::parse(&[]), RoleAction::List);
        assert_eq!(RoleAction::parse(&args(&["LIST"])), RoleAction::List);
        assert_eq!(RoleAction::parse(&args(&["overview"])), RoleAction::Overview);
        assert_eq!(RoleAction::parse(&args(&["-h"])), RoleAction::Help);
        assert_eq!(RoleAction::parse(&args(&["--help"])), RoleAction::Help);
        assert_eq!(RoleAction::parse(&args(&["help"])), RoleAction::Help);
        assert_eq!(
            RoleAction::parse(&args(&["Alice"])),
            RoleAction::Switch("Alice".into())
        );
    }

    #[test]
    fn test_parse_switch_phrase() {
        assert_eq!(
            RoleAction::parse(&args(&["Switch", "TO", "role", "alice"])),
            RoleAction::Switch("alice".into())
        );
        assert_eq!(
            RoleAction::parse(&args(&["switch", "to", "role"])),
            RoleAction::SwitchUsage
        );
        // Not the full phrase: "switch" is taken as a profile name
        assert_eq!(
            RoleAction::parse(&args(&["switch", "to"])),
            RoleAction::Switch("switch".into())
        );
    }

    #[test]
    fn test_generate_cli_command() {
        let store = store();
        assert_eq!(
            generate_cli_command(&store, "alice", GET).unwrap(),
            "npm run coordinator-cli -- -u https://mainnet.example -w W1 -m M1 get C1"
        );
        assert_eq!(
            generate_cli_command(&store, "bob", "list").unwrap(),
            "npm run coordinator-cli -- -u https://api.devnet.solana.com list"
        );
        assert!(generate_cli_command(&store, "nobody", GET).is_none());
    }

    #[test]
    fn test_switch_mainnet_profile() {
        let text = render_switch(&store(), "alice", &test_ui()).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert!(lines.iter().any(|l| l.contains("Switched to: alice (mainnet)")));
        assert!(lines.iter().any(|l| l.contains("Coordinator: C1")));
        assert!(lines.iter().any(|l| l.contains("Multisig: M1")));

        let get_line = lines
            .iter()
            .find(|l| l.starts_with("npm run coordinator-cli") && l.contains(" get "))
            .unwrap();
        assert_eq!(get_line.split(' ').next_back(), Some("C1"));

        for (subcommand, description) in READY_COMMANDS {
            assert!(text.contains(&format!("# {description}")));
            assert!(text.contains(&format!("-m M1 {subcommand}")));
        }
    }

    #[test]
    fn test_switch_commands_match_generated() {
        let store = store();
        let text = render_switch(&store, "bob", &test_ui()).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        for (subcommand, _) in READY_COMMANDS {
            let expected = generate_cli_command(&store, "bob", subcommand).unwrap();
            assert!(lines.contains(&expected.as_str()), "missing {expected:?}");
        }
        assert!(lines.contains(
            &"npm run coordinator-cli -- -u https://api.devnet.solana.com get BobCoordinatorWallet1234567890"
        ));
    }

    #[test]
    fn test_switch_omits_absent_fields() {
        let text = render_switch(&store(), "carol", &test_ui()).unwrap();
        assert!(text.contains("(devnet)"));
        assert!(!text.contains("Coordinator:"));
        assert!(!text.contains("Multisig:"));
    }

    #[test]
    fn test_switch_unknown_profile() {
        let store = store();
        let before = store.clone();
        assert!(render_switch(&store, "dave", &test_ui()).is_none());

        let message = render_not_found(&store, "dave", &test_ui());
        assert!(message.contains("Profile 'dave' not found"));
        assert!(message.contains("Available profiles: alice, bob, carol"));
        assert_eq!(store, before);
    }

    #[test]
    fn test_list_status_glyphs() {
        let text = render_list(&store(), &test_ui());
        assert!(text.contains("[C+M] alice           (mainnet)"));
        assert!(text.contains("[C]   bob             (devnet)"));
        assert!(text.contains("[ ]   carol           (devnet)"));
        assert!(text.contains("   crunch-role carol"));
    }

    #[test]
    fn test_list_empty() {
        let text = render_list(&ProfileStore::default(), &test_ui());
        assert_eq!(text, "No profiles configured");
    }

    #[test]
    fn test_overview_partitions_by_network() {
        let text = render_overview(&store(), &test_ui());
        let mainnet_at = text.find("Mainnet Coordinators:").unwrap();
        let devnet_at = text.find("Devnet Coordinators:").unwrap();
        let alice_at = text.find("• alice: C1").unwrap();
        let bob_at = text.find("• bob: BobCoord...34567890").unwrap();

        assert!(mainnet_at < alice_at && alice_at < devnet_at);
        assert!(devnet_at < bob_at);
        assert!(text.contains("    Multisig: M1"));
        assert!(!text.contains("carol"));
    }

    #[test]
    fn test_overview_without_coordinators() {
        let store: ProfileStore = serde_json::from_str(
            r#"{"profiles": {"carol": {"url": "https://mainnet.example"}}}"#,
        )
        .unwrap();
        let text = render_overview(&store, &test_ui());
        assert!(text.contains("Coordinator Overview:"));
        assert!(!text.contains("Mainnet Coordinators:"));
        assert!(!text.contains("Devnet Coordinators:"));
    }

    #[test]
    fn test_help_lists_profiles() {
        let text = render_help(&store(), &test_ui());
        assert!(text.contains("crunch-role switch to role <name>"));
        assert!(text.contains("  - alice\n  - bob\n  - carol"));
    }
}
