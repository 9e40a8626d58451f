//! Clap derive structures for the `ax` CLI.
//!
//! Defines the command tree, global flags, and shared argument types.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

// ── Top-Level CLI ────────────────────────────────────────────────────

/// ax -- command-line client for the Arxignis edge platform
#[derive(Debug, Parser)]
#[command(
    name = "ax",
    version,
    about = "Manage Arxignis sites from the command line",
    long_about = "CLI tool for managing Arxignis sites: onboarding, site \
        registration, settings pushes, and cache purges.",
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOpts,

    #[command(subcommand)]
    pub command: Command,
}

// ── Global Options ───────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct GlobalOpts {
    /// API base URL
    #[arg(long, env = "CLI_API_URL", global = true)]
    pub api_url: Option<String>,

    /// Account signup page URL
    #[arg(long, env = "CLI_SIGNUP_URL", global = true, hide = true)]
    pub signup_url: Option<String>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(long, short = 'v', action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress informational output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,
}

// ── Top-Level Command Enum ───────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Guided onboarding: log in and scaffold a site configuration
    Init,

    /// Open the account signup page in a browser
    Register,

    /// Log in with an account token
    Login,

    /// Manage sites
    #[command(subcommand)]
    Site(SiteCommand),

    /// Push a site configuration file to the control plane
    Settings {
        /// Domain name
        #[arg(long, short = 'd', required = true)]
        domain: String,

        /// Config file path
        #[arg(long, short = 'c', required = true)]
        config: PathBuf,
    },

    /// Purge cached content
    #[command(subcommand)]
    Purge(PurgeCommand),

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        shell: clap_complete::Shell,
    },
}

// ── Sites ────────────────────────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum SiteCommand {
    /// List all sites
    #[command(alias = "ls")]
    List {
        /// Show a single domain instead of the full listing
        #[arg(long, short = 'd')]
        domain: Option<String>,
    },

    /// Create a new site
    Create {
        /// Domain name (prompted for when omitted)
        #[arg(long, short = 'd')]
        domain: Option<String>,
    },
}

// ── Purge ────────────────────────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum PurgeCommand {
    /// Purge a specific URL from the cache
    UrlPurge(UrlPurgeArgs),
}

/// `url-purge` takes either `--domain`/`--url`, or the `all` subcommand.
/// The flags stop being required as soon as a subcommand appears.
#[derive(Debug, Args)]
#[command(subcommand_negates_reqs = true)]
pub struct UrlPurgeArgs {
    #[command(subcommand)]
    pub command: Option<UrlPurgeCommand>,

    /// Domain name
    #[arg(long, short = 'd', required = true)]
    pub domain: Option<String>,

    /// URL to purge
    #[arg(long, short = 'u', required = true)]
    pub url: Option<String>,
}

#[derive(Debug, Subcommand)]
pub enum UrlPurgeCommand {
    /// Purge all URLs from the cache
    All {
        /// Domain name
        #[arg(long, short = 'd', required = true)]
        domain: String,
    },
}
