//! `nb end-at` specs

use crate::prelude::*;

#[test]
fn daily_repeat_adds_half_day_buffer() {
    cli()
        .args(&["end-at", "--send-at", "1000", "--every", "day", "--count", "2"])
        .passes()
        .stdout_eq("216001000\n");
}

#[test]
fn fixed_period_adds_half_period() {
    cli()
        .args(&["end-at", "--send-at", "0", "--every", "60000", "--count", "5"])
        .passes()
        .stdout_eq("330000\n");
}

#[test]
fn zero_count_keeps_buffer_only() {
    cli()
        .args(&["end-at", "--send-at", "0", "--every", "hour", "--count", "0"])
        .passes()
        .stdout_eq("1800000\n");
}
