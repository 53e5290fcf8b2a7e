// manifest-rs: Cargo manifest synthesizer
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Entry point.
//!
//! ```text
//! cli::parse() --> Logging --> Command Dispatch
//!   Version | Render | Tree | Inputs
//! ```

use std::process::ExitCode;

use manifest_rs::cli::global::GlobalOptions;
use manifest_rs::cli::{self, Command};
use manifest_rs::cmd::inputs::run_inputs_command;
use manifest_rs::cmd::render::{run_render_command, run_tree_command};
use manifest_rs::config::Request;
use manifest_rs::config::loader::RequestLoader;
use manifest_rs::logging::init_logging;
use manifest_rs::logging::{LogConfig, LogLevel};

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

const DEFAULT_INPUT: &str = "manifest.toml";
const ENV_PREFIX: &str = "MANIFEST";

fn main() -> ExitCode {
    let cli = cli::parse();

    let log_config = build_log_config(&cli.global);
    let _log_guard = match init_logging(&log_config) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e}");
            return ExitCode::FAILURE;
        }
    };

    dispatch_command(&cli)
}

fn build_log_config(global: &GlobalOptions) -> LogConfig {
    let console_level = global
        .log_level
        .and_then(LogLevel::from_u8)
        .unwrap_or(LogLevel::Warn);

    let file_level = global
        .file_log_level
        .and_then(LogLevel::from_u8)
        .unwrap_or(console_level);

    LogConfig::builder()
        .with_console_level(console_level)
        .with_file_level(file_level)
        .with_show_target(global.log_target)
        .maybe_with_log_file(global.log_file.as_ref().map(|p| p.display().to_string()))
        .build()
}

fn dispatch_command(cli: &cli::Cli) -> ExitCode {
    let result = match &cli.command {
        Some(Command::Version) => {
            handle_version_command();
            Ok(())
        }
        Some(Command::Inputs) => {
            let loader = build_request_loader(&cli.global);
            run_inputs_command(&loader.format_loaded_files());
            Ok(())
        }
        Some(Command::Render(args)) => {
            load_request(&cli.global).and_then(|request| run_render_command(args, &request))
        }
        Some(Command::Tree(args)) => {
            load_request(&cli.global).and_then(|request| run_tree_command(args, &request))
        }
        None => {
            eprintln!("No command specified. Use --help for usage information.");
            Err(anyhow::anyhow!("No command specified"))
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn handle_version_command() {
    println!("{}", env!("CARGO_PKG_VERSION"));
}

fn build_request_loader(global: &GlobalOptions) -> RequestLoader {
    let mut loader = RequestLoader::new();
    if !global.no_default_inputs {
        loader = loader.add_toml_file_optional(DEFAULT_INPUT);
    }
    for input in &global.inputs {
        loader = loader.add_toml_file(input);
    }
    loader.with_env_prefix(ENV_PREFIX)
}

fn load_request(global: &GlobalOptions) -> manifest_rs::error::Result<Request> {
    let mut loader = build_request_loader(global);
    for (key, value) in global.overrides()? {
        loader = loader.set(key, value)?;
    }
    loader.build().map_err(|e| {
        eprintln!("Failed to load request: {e}");
        e
    })
}
