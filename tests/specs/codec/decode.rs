//! `nb decode` specs

use crate::prelude::*;

#[test]
fn decodes_host_record() {
    let request = cli()
        .args(&["decode"])
        .stdin(
            r#"{
  "id": 7,
  "message": "Stand-up",
  "payload": "{\"room\":\"blue\"}",
  "sendAt": "1710498600000",
  "repeatEvery": "86400000",
  "progress": 420
}"#,
        )
        .passes()
        .json();

    assert_eq!(request["id"], 7);
    assert_eq!(request["payload"]["room"], "blue");
    assert_eq!(request["repeatEvery"], 86_400_000);
    assert_eq!(request["progress"], 0.42);
}

#[test]
fn unparseable_payload_stays_text() {
    let request = cli()
        .args(&["decode"])
        .stdin(r#"{"id": 1, "message": "m", "payload": "plain words"}"#)
        .passes()
        .json();

    assert_eq!(request["payload"], "plain words");
}

#[test]
fn encode_then_decode_keeps_payload() {
    let dir = Workdir::new();
    dir.file("request.json", DAILY_REQUEST);
    let record = dir
        .nb()
        .args(&["encode", "request.json", "--utc", "--id", "5"])
        .passes()
        .stdout();

    let request = dir.nb().args(&["decode"]).stdin(&record).passes().json();
    assert_eq!(request["id"], 5);
    assert_eq!(request["payload"]["room"], "blue");
    assert_eq!(request["repeatEvery"], "day");
    assert_eq!(request["repeatCount"], 3);
}
