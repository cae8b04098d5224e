// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `nb encode`

use anyhow::{Context, Result};
use chrono::Utc;
use clap::Args;
use nb_core::{Encoder, HostNotificationRecord, NotificationId, NotificationRequest};
use std::path::PathBuf;

use super::{print_json, read_input};

#[derive(Args)]
pub struct EncodeArgs {
    /// JSON request file (reads stdin when omitted)
    pub file: Option<PathBuf>,

    /// Subject for requests without one (default: NB_APP_NAME)
    #[arg(long = "app-name")]
    pub app_name: Option<String>,

    /// Pin the notification id instead of drawing a random one
    #[arg(long)]
    pub id: Option<NotificationId>,

    /// Compute calendar fields in UTC instead of the local zone
    #[arg(long)]
    pub utc: bool,
}

pub fn handle(args: EncodeArgs) -> Result<()> {
    let input = read_input(args.file.as_deref())?;
    let request: NotificationRequest =
        serde_json::from_str(&input).context("invalid notification request")?;
    let record = encode_request(request, &args);
    tracing::debug!(id = record.id, "encoded request");
    print_json(&record)
}

fn encode_request(mut request: NotificationRequest, args: &EncodeArgs) -> HostNotificationRecord {
    if request.subject.as_deref().map_or(true, str::is_empty) {
        if let Some(name) = args.app_name.clone().or_else(nb_adapters::env::app_name) {
            request.subject = Some(name);
        }
    }
    if let Some(id) = args.id {
        request.id = Some(id);
    }

    let encoder = Encoder::new().with_defaults(nb_adapters::env::codec_defaults());
    if args.utc {
        encoder.with_time_zone(Utc).encode(&request)
    } else {
        encoder.encode(&request)
    }
}

#[cfg(test)]
#[path = "encode_tests.rs"]
mod tests;
