//! Clap derive structures for the `npman` CLI.
//!
//! Defines the complete command tree, global flags, and shared types.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

// ── Top-Level CLI ────────────────────────────────────────────────────

/// npman -- CLI for Nginx Proxy Manager instances
#[derive(Debug, Parser)]
#[command(
    name = "npman",
    version,
    about = "Manage Nginx Proxy Manager instances from the command line",
    long_about = "A CLI for administering Nginx Proxy Manager over its REST API:\n\
        proxy hosts, redirections, 404 hosts, streams, access lists,\n\
        certificates, users, and settings.",
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
    /// Instance profile to use
    #[arg(long, short = 'p', env = "NPM_PROFILE", global = true)]
    pub profile: Option<String>,

    /// Instance base URL (overrides profile)
    #[arg(long, short = 'u', env = "NPM_URL", global = true)]
    pub url: Option<String>,

    /// Login identity, i.e. the account email address
    #[arg(long, env = "NPM_IDENTITY", global = true)]
    pub identity: Option<String>,

    /// Name of an environment variable holding the password
    #[arg(long, global = true)]
    pub password_env: Option<String>,

    /// Output format
    #[arg(
        long,
        short = 'o',
        env = "NPM_OUTPUT",
        default_value = "table",
        global = true
    )]
    pub output: OutputFormat,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(long, short = 'v', action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Skip confirmation prompts
    #[arg(long, short = 'y', global = true)]
    pub yes: bool,

    /// Accept self-signed TLS certificates
    #[arg(long, short = 'k', env = "NPM_INSECURE", global = true)]
    pub insecure: bool,

    /// Request timeout in seconds
    #[arg(long, env = "NPM_TIMEOUT", global = true)]
    pub timeout: Option<u64>,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    /// Pretty table (default, interactive)
    Table,
    /// Pretty-printed JSON
    Json,
    /// Compact single-line JSON
    JsonCompact,
    /// Plain text, one identifier per line (scripting)
    Plain,
}

// ── Top-Level Command Enum ───────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Manage proxy hosts
    #[command(alias = "ph")]
    ProxyHosts(ProxyHostsArgs),

    /// Manage redirection hosts
    #[command(alias = "rh")]
    RedirectionHosts(RedirectionHostsArgs),

    /// Manage 404 hosts
    #[command(alias = "dh")]
    DeadHosts(DeadHostsArgs),

    /// Manage TCP/UDP streams
    Streams(StreamsArgs),

    /// Manage access lists
    #[command(alias = "acl")]
    AccessLists(AccessListsArgs),

    /// Manage certificates
    #[command(alias = "certs")]
    Certificates(CertificatesArgs),

    /// Manage user accounts
    Users(UsersArgs),

    /// View and update instance settings
    Settings(SettingsArgs),

    /// Instance health and version
    System(SystemArgs),

    /// Manage configuration profiles
    Config(ConfigArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

// ── Proxy Hosts ──────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct ProxyHostsArgs {
    #[command(subcommand)]
    pub command: ProxyHostsCommand,
}

#[derive(Debug, Subcommand)]
pub enum ProxyHostsCommand {
    /// List all proxy hosts
    #[command(alias = "ls")]
    List,

    /// Show one proxy host
    Show { id: u64 },

    /// Create a proxy host
    Create {
        /// JSON file with the desired state
        #[arg(long, value_name = "FILE", conflicts_with_all = ["domains", "forward_host", "forward_port"])]
        from_file: Option<PathBuf>,

        /// Domain name to answer for (repeatable)
        #[arg(long = "domain", value_name = "NAME")]
        domains: Vec<String>,

        /// Upstream host to forward to
        #[arg(long)]
        forward_host: Option<String>,

        /// Upstream port to forward to
        #[arg(long)]
        forward_port: Option<u16>,

        /// Upstream scheme
        #[arg(long, default_value = "http")]
        forward_scheme: String,

        /// Create the host disabled
        #[arg(long)]
        disabled: bool,
    },

    /// Update a proxy host from a JSON file
    Update {
        id: u64,
        #[arg(long, value_name = "FILE")]
        from_file: PathBuf,
    },

    /// Delete a proxy host
    #[command(alias = "rm")]
    Delete { id: u64 },

    /// Enable a proxy host
    Enable { id: u64 },

    /// Disable a proxy host
    Disable { id: u64 },
}

// ── Redirection Hosts ────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct RedirectionHostsArgs {
    #[command(subcommand)]
    pub command: RedirectionHostsCommand,
}

#[derive(Debug, Subcommand)]
pub enum RedirectionHostsCommand {
    /// List all redirection hosts
    #[command(alias = "ls")]
    List,

    /// Show one redirection host
    Show { id: u64 },

    /// Create a redirection host from a JSON file
    Create {
        #[arg(long, value_name = "FILE")]
        from_file: PathBuf,
    },

    /// Update a redirection host from a JSON file
    Update {
        id: u64,
        #[arg(long, value_name = "FILE")]
        from_file: PathBuf,
    },

    /// Delete a redirection host
    #[command(alias = "rm")]
    Delete { id: u64 },

    /// Enable a redirection host
    Enable { id: u64 },

    /// Disable a redirection host
    Disable { id: u64 },
}

// ── Dead Hosts ───────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct DeadHostsArgs {
    #[command(subcommand)]
    pub command: DeadHostsCommand,
}

#[derive(Debug, Subcommand)]
pub enum DeadHostsCommand {
    /// List all 404 hosts
    #[command(alias = "ls")]
    List,

    /// Show one 404 host
    Show { id: u64 },

    /// Create a 404 host from a JSON file
    Create {
        #[arg(long, value_name = "FILE")]
        from_file: PathBuf,
    },

    /// Update a 404 host from a JSON file
    Update {
        id: u64,
        #[arg(long, value_name = "FILE")]
        from_file: PathBuf,
    },

    /// Delete a 404 host
    #[command(alias = "rm")]
    Delete { id: u64 },

    /// Enable a 404 host
    Enable { id: u64 },

    /// Disable a 404 host
    Disable { id: u64 },
}

// ── Streams ──────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct StreamsArgs {
    #[command(subcommand)]
    pub command: StreamsCommand,
}

#[derive(Debug, Subcommand)]
pub enum StreamsCommand {
    /// List all streams
    #[command(alias = "ls")]
    List,

    /// Show one stream
    Show { id: u64 },

    /// Create a stream from a JSON file
    Create {
        #[arg(long, value_name = "FILE")]
        from_file: PathBuf,
    },

    /// Update a stream from a JSON file
    Update {
        id: u64,
        #[arg(long, value_name = "FILE")]
        from_file: PathBuf,
    },

    /// Delete a stream
    #[command(alias = "rm")]
    Delete { id: u64 },

    /// Enable a stream
    Enable { id: u64 },

    /// Disable a stream
    Disable { id: u64 },
}

// ── Access Lists ─────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct AccessListsArgs {
    #[command(subcommand)]
    pub command: AccessListsCommand,
}

#[derive(Debug, Subcommand)]
pub enum AccessListsCommand {
    /// List all access lists
    #[command(alias = "ls")]
    List,

    /// Show one access list
    Show { id: u64 },

    /// Create an access list from a JSON file
    Create {
        #[arg(long, value_name = "FILE")]
        from_file: PathBuf,
    },

    /// Update an access list from a JSON file
    Update {
        id: u64,
        #[arg(long, value_name = "FILE")]
        from_file: PathBuf,
    },

    /// Delete an access list
    #[command(alias = "rm")]
    Delete { id: u64 },

    /// Enable an access list
    Enable { id: u64 },

    /// Disable an access list
    Disable { id: u64 },
}

// ── Certificates ─────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct CertificatesArgs {
    #[command(subcommand)]
    pub command: CertificatesCommand,
}

#[derive(Debug, Subcommand)]
pub enum CertificatesCommand {
    /// List all certificates
    #[command(alias = "ls")]
    List,

    /// Show one certificate
    Show { id: u64 },

    /// Create a certificate record
    Create {
        /// JSON file with the desired state
        #[arg(long, value_name = "FILE", conflicts_with_all = ["domains", "nice_name"])]
        from_file: Option<PathBuf>,

        /// Covered domain name (repeatable)
        #[arg(long = "domain", value_name = "NAME")]
        domains: Vec<String>,

        /// Certificate provider
        #[arg(long, default_value = "other")]
        provider: String,

        /// Display name
        #[arg(long)]
        nice_name: Option<String>,
    },

    /// Delete a certificate
    #[command(alias = "rm")]
    Delete { id: u64 },

    /// Upload a PEM certificate/key pair onto an existing record
    Upload {
        id: u64,
        /// PEM certificate file
        #[arg(long, value_name = "FILE")]
        certificate: PathBuf,
        /// PEM private key file
        #[arg(long, value_name = "FILE")]
        key: PathBuf,
    },

    /// Validate a PEM certificate/key pair without creating anything
    Validate {
        /// PEM certificate file
        #[arg(long, value_name = "FILE")]
        certificate: PathBuf,
        /// PEM private key file
        #[arg(long, value_name = "FILE")]
        key: PathBuf,
    },
}

// ── Users ────────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct UsersArgs {
    #[command(subcommand)]
    pub command: UsersCommand,
}

#[derive(Debug, Subcommand)]
pub enum UsersCommand {
    /// List all user accounts
    #[command(alias = "ls")]
    List,

    /// Show one user
    Show { id: u64 },

    /// Show the authenticated user
    Me,

    /// Create a user from a JSON file
    Create {
        #[arg(long, value_name = "FILE")]
        from_file: PathBuf,
    },

    /// Update a user from a JSON file
    Update {
        id: u64,
        #[arg(long, value_name = "FILE")]
        from_file: PathBuf,
    },

    /// Delete a user
    #[command(alias = "rm")]
    Delete { id: u64 },

    /// Change a user's password (prompts unless --password-env is set)
    SetPassword { id: u64 },

    /// Replace a user's permissions from a JSON file
    SetPermissions {
        id: u64,
        #[arg(long, value_name = "FILE")]
        from_file: PathBuf,
    },
}

// ── Settings ─────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct SettingsArgs {
    #[command(subcommand)]
    pub command: SettingsCommand,
}

#[derive(Debug, Subcommand)]
pub enum SettingsCommand {
    /// List all settings
    #[command(alias = "ls")]
    List,

    /// Show one setting
    Show { id: String },

    /// Update a setting's value
    Set {
        id: String,
        /// New value, parsed as JSON (falls back to a plain string)
        value: String,
    },
}

// ── System ───────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct SystemArgs {
    #[command(subcommand)]
    pub command: SystemCommand,
}

#[derive(Debug, Subcommand)]
pub enum SystemCommand {
    /// Probe instance health and version
    Health,
}

// ── Config ───────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Interactively create or update a profile
    Init,

    /// Print the config file path
    Path,

    /// Print the loaded configuration (passwords redacted)
    Show,
}

// ── Completions ──────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: clap_complete::Shell,
}
