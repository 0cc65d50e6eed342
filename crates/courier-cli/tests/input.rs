use std::path::PathBuf;

use tempfile::TempDir;

use courier_cli::input::{load_events, load_options, load_payloads};
use courier_core::CarrierPayload;

fn write_json(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, contents).unwrap();
    path
}

#[test]
fn loads_single_payload_and_arrays() {
    let dir = TempDir::new().unwrap();
    let single = write_json(
        &dir,
        "one.json",
        r#"{"carrier": "fedex", "derivedStatusCode": "IT", "exceptionCode": "07"}"#,
    );
    let payloads = load_payloads(&single).unwrap();
    assert_eq!(payloads.len(), 1);
    assert!(matches!(
        &payloads[0],
        CarrierPayload::Fedex { exception_code: Some(code), .. } if code == "07"
    ));

    let many = write_json(
        &dir,
        "many.json",
        r#"[{"carrier": "dhl", "statusText": "En ruta"},
            {"carrier": "fedex-legacy", "status": "Delivered"}]"#,
    );
    assert_eq!(load_payloads(&many).unwrap().len(), 2);
}

#[test]
fn parse_errors_name_the_file() {
    let dir = TempDir::new().unwrap();
    let path = write_json(&dir, "broken.json", r#"{"carrier": "ups"}"#);
    let error = load_payloads(&path).unwrap_err();
    let message = format!("{error:#}");
    assert!(message.contains("parse payload file"));
    assert!(message.contains("broken.json"));

    let missing = dir.path().join("missing.json");
    let error = load_events(&missing).unwrap_err();
    assert!(format!("{error}").contains("read scan event file"));
}

#[test]
fn loads_events_and_options() {
    let dir = TempDir::new().unwrap();
    let events = write_json(
        &dir,
        "events.json",
        r#"[{"eventDescription": "Recoleccion", "date": "2024-06-03T09:00:00Z"}]"#,
    );
    assert_eq!(load_events(&events).unwrap().len(), 1);

    let defaults = load_options(None).unwrap();
    assert!(defaults.narrow_extensions);

    let config = write_json(
        &dir,
        "config.json",
        r#"{"narrow_extensions": false, "event_filter": "centro"}"#,
    );
    let options = load_options(Some(&config)).unwrap();
    assert!(!options.narrow_extensions);
    assert_eq!(options.event_filter.as_deref(), Some("centro"));
    assert!(options.status_overrides.is_empty());
}
