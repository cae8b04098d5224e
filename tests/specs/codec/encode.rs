//! `nb encode` specs

use crate::prelude::*;

#[test]
fn encodes_scheduled_request_from_file() {
    let dir = Workdir::new();
    dir.file("request.json", DAILY_REQUEST);

    let record = dir
        .nb()
        .args(&["encode", "request.json", "--utc", "--id", "42"])
        .passes()
        .json();

    assert_eq!(record["id"], 42);
    assert_eq!(record["message"], "Stand-up");
    assert_eq!(record["sendAt"], "1710498600000");
    assert_eq!(record["repeatEvery"], "day");
    assert_eq!(record["repeatType"], "day");
    assert_eq!(record["scheduled"], true);
    assert_eq!(record["delayed"], false);
    assert_eq!(record["sendAtYear"], 2024);
    assert_eq!(record["sendAtMonth"], 3);
    assert_eq!(record["sendAtDay"], 15);
    assert_eq!(record["sendAtWeekDay"], 5);
    assert_eq!(record["sendAtHour"], 10);
    assert_eq!(record["sendAtMinute"], 30);
    assert_eq!(record["payload"], r#"{"room":"blue"}"#);
}

#[test]
fn fills_host_defaults() {
    let record = cli()
        .args(&["encode", "--id", "1"])
        .stdin(r#"{"message": "hi"}"#)
        .passes()
        .json();

    assert_eq!(record["action"], "DEFAULT");
    assert_eq!(record["channelId"], "default-channel");
    assert_eq!(record["smallIcon"], "ic_launcher_foreground");
    assert_eq!(record["sound"], "default");
    assert_eq!(record["payload"], "{}");
    assert_eq!(record["tickerText"], "hi");
}

#[test]
fn env_overrides_defaults() {
    let record = cli()
        .args(&["encode", "--id", "1"])
        .env("NB_DEFAULT_CHANNEL", "alerts")
        .env("NB_SMALL_ICON", "ic_bell")
        .stdin(r#"{"message": "hi"}"#)
        .passes()
        .json();

    assert_eq!(record["channelId"], "alerts");
    assert_eq!(record["smallIcon"], "ic_bell");
}

#[test]
fn app_name_becomes_subject() {
    let record = cli()
        .args(&["encode", "--app-name", "Shop"])
        .stdin(r#"{"message": "Sale"}"#)
        .passes()
        .json();

    assert_eq!(record["subject"], "Shop");
    assert_eq!(record["tickerText"], "Shop: Sale");
    let id = record["id"].as_i64().unwrap();
    assert!((0..100_000).contains(&id));
}

#[test]
fn explicit_null_disables_sound() {
    let record = cli()
        .args(&["encode", "--id", "1"])
        .stdin(r#"{"message": "quiet", "sound": null}"#)
        .passes()
        .json();

    assert!(record["sound"].is_null());
    assert_eq!(record["vibrate"], "default");
}

#[test]
fn invalid_date_logs_warning_at_warn_level() {
    cli()
        .args(&["encode", "--id", "1", "--utc"])
        .stdin(r#"{"message": "x", "sendAt": "not a date"}"#)
        .passes()
        .stdout_has(r#""sendAt": "NaN""#)
        .stderr_has("WARN");
}

#[test]
fn log_filter_silences_warnings() {
    cli()
        .args(&["encode", "--id", "1"])
        .env("NB_LOG", "error")
        .stdin(r#"{"message": "x", "sendAt": "not a date"}"#)
        .passes()
        .stderr_lacks("WARN");
}
