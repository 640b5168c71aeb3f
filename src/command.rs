//! Builder for coordinator CLI invocations.
//!
//! The coordinator CLI is never executed here; both binaries only print the
//! command line a user is meant to copy and run.

use std::fmt;

use crate::store::Profile;

/// Program prefix for every generated invocation
pub const CLI_PREFIX: [&str; 4] = ["npm", "run", "coordinator-cli", "--"];

/// Sub-command that takes the coordinator wallet as a trailing argument
pub const GET: &str = "get";

/// An ordered coordinator CLI invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoordinatorCommand {
    args: Vec<String>,
}

impl CoordinatorCommand {
    /// Build the invocation of `subcommand` for `profile`.
    ///
    /// Order: prefix, `-u <url>`, `-w <wallet>`, `-m <multisig>` (each only
    /// when set), the sub-command, then the coordinator wallet for `get`.
    /// Multi-word sub-commands such as `crunches list` are inserted as-is.
    pub fn for_profile(profile: &Profile, subcommand: &str) -> Self {
        let mut args: Vec<String> = CLI_PREFIX.iter().map(|s| s.to_string()).collect();

        if let Some(url) = profile.url() {
            args.extend(["-u".to_string(), url.to_string()]);
        }
        if let Some(wallet) = profile.wallet() {
            args.extend(["-w".to_string(), wallet.to_string()]);
        }
        if let Some(multisig) = profile.multisig_address() {
            args.extend(["-m".to_string(), multisig.to_string()]);
        }

        args.push(subcommand.to_string());

        if subcommand == GET {
            if let Some(coordinator) = profile.coordinator_wallet() {
                args.push(coordinator.to_string());
            }
        }

        Self { args }
    }

    /// Shorthand for the `get` invocation
    pub fn get(profile: &Profile) -> Self {
        Self::for_profile(profile, GET)
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }
}

/// Space-joined, without shell quoting.
impl fmt::Display for CoordinatorCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.args.join(" "))
    }
}
