use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(name = "hcac")]
#[command(about = "Assign a product category from its name and description")]
#[command(version)]
pub struct Cli {
    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Quiet output (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Base directory (default: ~/.hcac)
    #[arg(long, global = true)]
    pub base_dir: Option<PathBuf>,

    /// Launch GUI (requires the `gui` feature)
    #[arg(long)]
    pub gui: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
#[allow(clippy::enum_variant_names)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Categorize a single product
    Categorize {
        /// Product name
        name: String,

        /// Product description
        #[arg(default_value = "")]
        description: String,

        /// Show which keywords matched for every category
        #[arg(short, long)]
        explain: bool,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Categorize products interactively and keep a history
    Shell {
        /// Delay before each result in milliseconds (default: shell.delay_ms)
        #[arg(long)]
        delay_ms: Option<u64>,
    },

    /// List the available categories
    Categories {
        /// Also list the keywords of each category
        #[arg(short, long)]
        keywords: bool,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Get a config value
    Get {
        /// Config key (e.g., shell.delay_ms)
        key: String,
    },

    /// Set a config value
    Set {
        /// Config key (e.g., shell.delay_ms)
        key: String,

        /// Value to set (e.g., 500)
        value: String,
    },

    /// List all config values
    List,

    /// Show config file path
    Path,

    /// Initialize config file with defaults
    Init,
}
