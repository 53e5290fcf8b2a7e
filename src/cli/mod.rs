// manifest-rs: Cargo manifest synthesizer
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! CLI module for manifest-rs using clap derive.
//!
//! # Command Structure
//!
//! ```text
//! manifest [global options] <command>
//! version
//! render [-c FILE]... [-o FILE] [--header TEXT] [--no-customizations]
//! tree   [-c FILE]... [--no-customizations]
//! inputs
//! ```

pub mod global;
pub mod render;


use crate::cli::global::GlobalOptions;
use crate::cli::render::{RenderArgs, TreeArgs};
use clap::{Parser, Subcommand};

/// Cargo manifest synthesizer
///
/// Builds a `Cargo.toml` from a request file, merges customizations into it
/// and writes the result.
#[derive(Debug, Parser)]
#[command(
    name = "manifest",
    author,
    version,
    about = "Cargo manifest synthesizer",
    long_about = "manifest-rs Copyright (C) 2026 Romeo Ahmed\n\
                  This program comes with ABSOLUTELY NO WARRANTY\n\
                  This is free software, and you are welcome to redistribute it\n\
                  under certain conditions; see LICENSE for details.\n\n\
                  Builds a Cargo manifest from package settings, dependency and\n\
                  feature records, then deep-merges customization files into it.\n\n\
                  Invoking `manifest render` reads `manifest.toml` from the current\n\
                  directory and prints the manifest. See `manifest <command> --help`\n\
                  for more information about a command.",
    after_help = "REQUEST FILES:\n\n\
                  By default, manifest loads `manifest.toml` from the current\n\
                  directory if it exists. Additional request files can be given\n\
                  with --input; later files override earlier ones. MANIFEST_*\n\
                  environment variables (e.g. MANIFEST_SETTINGS__VERSION) and\n\
                  --set KEY=VALUE are applied last. Use --no-default-inputs to\n\
                  only load the files given with --input."
)]
pub struct Cli {
    /// Global options shared by all commands
    #[command(flatten)]
    pub global: GlobalOptions,

    /// Command to execute
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Shows the version.
    #[command(visible_alias = "-v")]
    Version,

    /// Renders the manifest.
    Render(RenderArgs),

    /// Prints the merged manifest tree as JSON.
    Tree(TreeArgs),

    /// Lists the request files that were loaded.
    Inputs,
}

/// Parses command-line arguments.
#[must_use]
pub fn parse() -> Cli {
    Cli::parse()
}
