// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `nb end-at`

use anyhow::{anyhow, Result};
use clap::Args;
use nb_core::RepeatSpec;

#[derive(Args)]
pub struct EndAtArgs {
    /// First occurrence, milliseconds since the epoch
    #[arg(long = "send-at", allow_hyphen_values = true)]
    pub send_at: i64,

    /// Interval keyword (minute, hour, halfDay, day, week, month, year) or milliseconds
    #[arg(long)]
    pub every: String,

    /// Number of repeats
    #[arg(long)]
    pub count: u32,
}

pub fn handle(args: EndAtArgs) -> Result<()> {
    println!("{}", compute(&args)?);
    Ok(())
}

fn compute(args: &EndAtArgs) -> Result<i64> {
    let spec = RepeatSpec::from_wire(&args.every);
    spec.end_at(args.send_at, args.count)
        .ok_or_else(|| anyhow!("unknown repeat interval: {}", args.every))
}

#[cfg(test)]
#[path = "end_at_tests.rs"]
mod tests;
