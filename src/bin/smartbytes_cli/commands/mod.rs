// ABOUTME: Command modules for smartbytes-cli
// ABOUTME: Each command prints pretty JSON to stdout
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SmartBytes

pub mod goals;
pub mod menu;
pub mod nutrition;

use anyhow::Result;
use serde::Serialize;

/// Print `value` as pretty JSON
pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
