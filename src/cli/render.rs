// manifest-rs: Cargo manifest synthesizer
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Render and tree command arguments.
//!
//! ```text
//! --customizations FILE  applied after [output] customizations, in order
//! --no-customizations    skip every customization source
//! --output FILE          atomic write instead of stdout (render only)
//! --header TEXT          overrides [output] header (render only)
//! ```

use clap::Args;
use std::path::PathBuf;

/// Customization sources shared by `render` and `tree`.
#[derive(Debug, Clone, Default, Args)]
pub struct CustomizationArgs {
    /// Customization file (JSON or TOML) merged over the built manifest.
    /// Can be specified multiple times.
    #[arg(short = 'c', long = "customizations", value_name = "FILE", action = clap::ArgAction::Append)]
    pub files: Vec<PathBuf>,

    /// Ignores all customization files, including those from the request.
    #[arg(long = "no-customizations", conflicts_with = "files")]
    pub disabled: bool,
}

/// Arguments for the `render` command.
#[derive(Debug, Clone, Default, Args)]
pub struct RenderArgs {
    #[command(flatten)]
    pub customizations: CustomizationArgs,

    /// Writes the manifest to FILE instead of stdout.
    #[arg(short = 'o', long = "output", value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Comment banner written above the manifest.
    #[arg(long = "header", value_name = "TEXT")]
    pub header: Option<String>,
}

/// Arguments for the `tree` command.
#[derive(Debug, Clone, Default, Args)]
pub struct TreeArgs {
    #[command(flatten)]
    pub customizations: CustomizationArgs,
}
