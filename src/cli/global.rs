// manifest-rs: Cargo manifest synthesizer
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Global CLI options available for all commands.
//!
//! # Option Precedence
//!
//! ```text
//! --input FILE      ← Additional request files (can repeat)
//! --set KEY=VAL     ← Direct request override (can repeat)
//! --log-level N     ← Console verbosity (0-6)
//! --file-log-level  ← File verbosity (overrides --log-level)
//!
//! Precedence: --set > MANIFEST_* env > --input > manifest.toml
//! ```

use clap::Args;
use std::path::PathBuf;

use crate::error::ConfigError;

/// Global options available for all commands.
#[derive(Debug, Clone, Default, Args)]
pub struct GlobalOptions {
    /// Path to additional TOML request file(s).
    /// Can be specified multiple times.
    #[arg(short = 'i', long = "input", value_name = "FILE", action = clap::ArgAction::Append)]
    pub inputs: Vec<PathBuf>,

    /// Console log level (0=silent, 1=errors, 2=warnings, 3=info, 4=debug, 5=trace, 6=dump).
    #[arg(short = 'l', long = "log-level", value_name = "LEVEL", value_parser = clap::value_parser!(u8).range(0..=6)
    )]
    pub log_level: Option<u8>,

    /// File log level, overrides --log-level for the log file.
    #[arg(long = "file-log-level", value_name = "LEVEL", value_parser = clap::value_parser!(u8).range(0..=6)
    )]
    pub file_log_level: Option<u8>,

    /// Shows the module path of each console log line.
    #[arg(long = "log-target")]
    pub log_target: bool,

    /// Path to log file.
    #[arg(long = "log-file", value_name = "FILE")]
    pub log_file: Option<PathBuf>,

    /// Sets a request value, such as 'settings.version=2.0.0'.
    /// Can be specified multiple times.
    #[arg(short = 's', long = "set", value_name = "KEY=VALUE", action = clap::ArgAction::Append)]
    pub options: Vec<String>,

    /// Disables auto loading of manifest.toml, only uses --input.
    #[arg(long = "no-default-inputs")]
    pub no_default_inputs: bool,
}

impl GlobalOptions {
    /// Splits each `--set` option into a key/value pair.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` for an option without `=` or with
    /// an empty key.
    pub fn overrides(&self) -> Result<Vec<(&str, &str)>, ConfigError> {
        self.options
            .iter()
            .map(|option| match option.split_once('=') {
                Some((key, value)) if !key.trim().is_empty() => Ok((key.trim(), value)),
                _ => Err(ConfigError::InvalidValue {
                    section: "cli".to_string(),
                    key: "--set".to_string(),
                    message: format!("expected KEY=VALUE, got '{option}'"),
                }),
            })
            .collect()
    }
}
