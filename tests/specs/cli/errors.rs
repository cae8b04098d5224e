//! CLI error handling specs

use crate::prelude::*;

#[test]
fn malformed_request_fails() {
    cli()
        .args(&["encode"])
        .stdin("{not json")
        .fails()
        .stderr_has("Error: invalid notification request");
}

#[test]
fn malformed_record_fails() {
    cli()
        .args(&["decode"])
        .stdin("42")
        .fails()
        .stderr_has("Error: invalid host record");
}

#[test]
fn missing_file_fails() {
    let dir = Workdir::new();
    dir.nb()
        .args(&["encode", "absent.json"])
        .fails()
        .stderr_has("cannot read absent.json");
}

#[test]
fn unknown_interval_fails() {
    cli()
        .args(&["end-at", "--send-at", "0", "--every", "fortnight", "--count", "2"])
        .fails()
        .stderr_has("unknown repeat interval: fortnight");
}

#[test]
fn unknown_subcommand_fails() {
    cli().args(&["schedule"]).fails().stderr_has("unrecognized subcommand");
}
