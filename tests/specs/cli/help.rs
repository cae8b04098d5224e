//! CLI help output specs

use crate::prelude::*;

#[test]
fn nb_no_args_shows_usage_and_exits_zero() {
    cli().passes().stdout_has("Usage:");
}

#[test]
fn nb_help_lists_commands() {
    cli()
        .args(&["--help"])
        .passes()
        .stdout_has("encode")
        .stdout_has("decode")
        .stdout_has("end-at");
}

#[test]
fn nb_encode_help_shows_options() {
    cli()
        .args(&["encode", "--help"])
        .passes()
        .stdout_has("--app-name")
        .stdout_has("--utc");
}

#[test]
fn nb_version_shows_version() {
    cli().args(&["--version"]).passes().stdout_has("0.1");
}
