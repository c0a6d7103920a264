//! # Almanac
//!
//! Command-line front end for the Nyx shell settings file.
//!
//! - `show`: print the settings as they would be saved
//! - `get` / `set`: read or update a single setting
//! - `migrate`: upgrade a legacy document in place
//! - `cleanup`: drop keys the shell no longer knows
//! - `keys`: list settings and their defaults

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use nyx_shell_settings::prelude::*;
use serde_json::Value;
use std::cell::Cell;
use std::path::PathBuf;
use tracing::{debug, info};

/// Almanac - Nyx shell settings tool
#[derive(Parser, Debug)]
#[command(name = "almanac", version, about = "Inspect and migrate Nyx shell settings")]
struct Args {
    /// Settings file (defaults to the user config directory)
    #[arg(short, long, env = "NYX_SHELL_SETTINGS")]
    file: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the settings document
    Show,

    /// Print one setting
    Get {
        key: String,
    },

    /// Update one setting and save
    Set {
        key: String,
        /// JSON value; anything that is not valid JSON is taken as a string
        value: String,
    },

    /// Upgrade a legacy settings file
    Migrate,

    /// Remove unknown keys from the settings file
    Cleanup,

    /// List settings and their defaults
    Keys {
        /// Include runtime-only settings
        #[arg(long)]
        all: bool,
    },
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    let log_level = if args.debug { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(log_level)
        .with_writer(std::io::stderr)
        .init();

    let file = SettingsFile::new(args.file.unwrap_or_else(SettingsFile::default_location));
    debug!("Using settings file {:?}", file.path());

    match args.command {
        Command::Show => {
            let loaded = file.load()?;
            println!("{}", loaded.settings.to_json_string()?);
        }
        Command::Get { key } => {
            let loaded = file.load()?;
            let Some(value) = loaded.settings.get(&key) else {
                bail!("Unknown setting: {}", key);
            };
            println!("{}", serde_json::to_string_pretty(value)?);
        }
        Command::Set { key, value } => set(&file, &key, &value)?,
        Command::Migrate => {
            let loaded = file.load()?;
            if loaded.needs_save {
                file.save(&loaded.settings)?;
                info!("Migrated {:?} to version {}", file.path(), loaded.settings.config_version());
            } else {
                info!("{:?} is up to date", file.path());
            }
        }
        Command::Cleanup => {
            if file.cleanup()? {
                info!("Removed unused keys from {:?}", file.path());
            } else {
                info!("Nothing to clean up in {:?}", file.path());
            }
        }
        Command::Keys { all } => {
            for def in schema().iter().filter(|def| all || def.persist) {
                let marker = if def.persist { "" } else { " (runtime)" };
                println!("{} = {}{}", def.key, def.default, marker);
            }
        }
    }

    Ok(())
}

fn set(file: &SettingsFile, key: &str, raw: &str) -> Result<()> {
    if !schema().contains(key) {
        bail!("Unknown setting: {}", key);
    }

    let value: Value = serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()));
    let mut loaded = file.load()?;

    if value.is_null() {
        bail!("Cannot store null for {}", key);
    }

    let dirty = Cell::new(false);
    loaded
        .settings
        .set(key, value, || dirty.set(true), &logging_hooks());

    if dirty.get() {
        file.save(&loaded.settings)
            .with_context(|| format!("Failed to save {:?}", file.path()))?;
        info!("Set {} in {:?}", key, file.path());
    }
    Ok(())
}

/// The shell's side effects live in the shell; here they are only logged
fn logging_hooks() -> HookTable {
    Hook::ALL.into_iter().fold(HookTable::new(), |table, hook| {
        table.with(hook, move |_| info!("Would run {} hook", hook))
    })
}
