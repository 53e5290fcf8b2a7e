// manifest-rs: Cargo manifest synthesizer
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Library root.
//!
//! # Crate Architecture
//!
//! ```text
//!                        main.rs
//!                           |
//!                +----------+----------+
//!                v                     v
//!             cli (clap)          cmd (handlers)
//!                |             render / tree / inputs
//!                +----------+----------+
//!                           v
//!              ,---------------------------,
//!              |          config           |
//!              |  request, customizations  |
//!              '-------------+-------------'
//!                            v
//!   manifest:  builder --> merge --> render
//!              (tree)     (deep)     (TOML)
//!
//!   +-----------------------------------------+
//!   |  foundation   error, logging, utility   |
//!   +-----------------------------------------+
//! ```

pub mod cli;
pub mod cmd;
pub mod config;
pub mod error;
pub mod logging;
pub mod manifest;
pub mod utility;
