use std::io;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{CommandFactory, Parser};
use clap_complete::generate;
use colored::Colorize;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use hcac_core::config::Config;
use hcac_core::{categorize, explain, Category, HcacError, Pacing, Result, BUILTIN_CATEGORIES};

mod args;
mod interactive;
use args::{Cli, Commands, ConfigAction, Shell};

#[cfg(feature = "gui")]
mod gui;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    let base_dir = resolve_base_dir(cli.base_dir);
    debug!(base_dir = %base_dir.display(), "resolved base directory");

    // Handle GUI flag
    #[cfg(feature = "gui")]
    if cli.gui {
        let result = Config::load(&base_dir).and_then(gui::run);
        return match result {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                eprintln!("{} {}", "[ERROR]".red().bold(), e);
                ExitCode::FAILURE
            }
        };
    }

    #[cfg(not(feature = "gui"))]
    if cli.gui {
        eprintln!(
            "{} GUI not available. Build with: cargo install --path crates/hcac-cli --features gui",
            "[ERROR]".red().bold()
        );
        return ExitCode::FAILURE;
    }

    let result = match cli.command {
        Some(Commands::Categorize {
            name,
            description,
            explain,
            json,
        }) => handle_categorize(&name, &description, explain, json),
        Some(Commands::Shell { delay_ms }) => handle_shell(&base_dir, delay_ms),
        Some(Commands::Categories { keywords }) => {
            handle_categories(keywords);
            Ok(())
        }
        Some(Commands::Config { action }) => handle_config(action, &base_dir),
        Some(Commands::Completions { shell }) => {
            handle_completions(shell);
            Ok(())
        }
        None => {
            Cli::command().print_help().ok();
            Ok(())
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", "[ERROR]".red().bold(), e);
            ExitCode::from(e.exit_code() as u8)
        }
    }
}

fn init_logging(verbose: bool, quiet: bool) {
    let default_level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(verbose)
        .init();
}

fn handle_completions(shell: Shell) {
    let mut cmd = Cli::command();
    let shell = match shell {
        Shell::Bash => clap_complete::Shell::Bash,
        Shell::Zsh => clap_complete::Shell::Zsh,
        Shell::Fish => clap_complete::Shell::Fish,
        Shell::PowerShell => clap_complete::Shell::PowerShell,
        Shell::Elvish => clap_complete::Shell::Elvish,
    };
    generate(shell, &mut cmd, "hcac", &mut io::stdout());
}

fn resolve_base_dir(cli_base: Option<PathBuf>) -> PathBuf {
    if let Some(base) = cli_base {
        return base;
    }

    if let Ok(base) = std::env::var("HCAC_BASE") {
        return PathBuf::from(base);
    }

    dirs::home_dir()
        .map(|h| h.join(".hcac"))
        .unwrap_or_else(|| PathBuf::from(".hcac"))
}

fn handle_categorize(name: &str, description: &str, show_explain: bool, json: bool) -> Result<()> {
    if show_explain {
        let result = explain(name, description);
        if json {
            println!("{}", to_json(&result)?);
            return Ok(());
        }

        println!();
        println!("{} {}", "Category:".green(), result.category.label().bold());
        if result.is_fallback() {
            println!("  {}", "(no keywords matched, using default)".dimmed());
        }
        println!();
        for score in &result.scores {
            let marker = if score.category == result.category {
                "*".green().bold()
            } else {
                " ".normal()
            };
            let matched = if score.matched.is_empty() {
                "-".dimmed().to_string()
            } else {
                score.matched.join(", ")
            };
            println!(
                "{} {:<24} {} {}",
                marker,
                score.category.label().cyan(),
                score.count(),
                matched
            );
        }
        println!();
        return Ok(());
    }

    let category = categorize(name, description);
    if json {
        let value = serde_json::json!({ "category": category });
        println!("{}", to_json(&value)?);
    } else {
        println!("{}", category);
    }
    Ok(())
}

fn handle_shell(base_dir: &Path, delay_ms: Option<u64>) -> Result<()> {
    let config = Config::load(base_dir)?;
    let pacing = delay_ms.map_or_else(|| config.pacing(), Pacing::from_millis);
    interactive::run(&config, pacing)
}

fn handle_categories(show_keywords: bool) {
    println!();
    for builtin in BUILTIN_CATEGORIES {
        println!("{}", builtin.category.label().cyan().bold());
        println!("  {}", builtin.description);
        if show_keywords {
            println!("  {} {}", "Keywords:".dimmed(), builtin.keywords.join(", "));
        }
    }
    println!();
    println!(
        "{} {}",
        "Default:".dimmed(),
        Category::default().label().dimmed()
    );
}

fn handle_config(action: ConfigAction, base_dir: &Path) -> Result<()> {
    match action {
        ConfigAction::Get { key } => {
            let config = Config::load(base_dir)?;
            match config.get(&key) {
                Some(value) => {
                    println!("{}", value);
                }
                None => {
                    return Err(HcacError::ConfigKeyNotFound { key });
                }
            }
        }
        ConfigAction::Set { key, value } => {
            let mut config = Config::load(base_dir)?;
            config.set(&key, &value)?;
            config.save(base_dir)?;
            println!("{} {} = {}", "Set:".green(), key, value);
        }
        ConfigAction::List => {
            let config = Config::load(base_dir)?;
            println!();
            for (key, value) in config.list() {
                println!("{} = {}", key.cyan(), value);
            }
            println!();
        }
        ConfigAction::Path => {
            let path = Config::path(base_dir);
            println!("{}", path.display());
        }
        ConfigAction::Init => {
            let path = Config::init(base_dir)?;
            println!("{} {}", "Initialized:".green(), path.display());
        }
    }

    Ok(())
}

fn to_json<T: serde::Serialize>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_json_serializes_category_label() {
        let value = serde_json::json!({ "category": categorize("Carpet", "") });
        let text = to_json(&value).unwrap();
        assert!(text.contains("\"category\": \"Automotive\""));
    }
}
