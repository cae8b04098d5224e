// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `nb decode`

use anyhow::{Context, Result};
use clap::Args;
use nb_core::HostNotificationRecord;
use std::path::PathBuf;

use super::{print_json, read_input};

#[derive(Args)]
pub struct DecodeArgs {
    /// JSON host record file (reads stdin when omitted)
    pub file: Option<PathBuf>,
}

pub fn handle(args: DecodeArgs) -> Result<()> {
    let input = read_input(args.file.as_deref())?;
    let record: HostNotificationRecord =
        serde_json::from_str(&input).context("invalid host record")?;
    tracing::debug!(id = record.id, "decoding host record");
    print_json(&nb_core::decode(record))
}
