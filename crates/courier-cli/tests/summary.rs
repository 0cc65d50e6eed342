//! Rendering of CLI output.

use chrono::{TimeZone, Utc};

use courier_cli::summary::{
    batch_summary, code_table, events_table, reconciliation_table, status_line,
};
use courier_core::{CarrierPayload, StatusReconciler};
use courier_model::{CanonicalStatus, ScanEvent};
use courier_normalization::FEDEX_EXCEPTION_CODES;

#[test]
fn status_line_shows_narrowing_and_review() {
    insta::assert_snapshot!(
        status_line("fedex", "DL", CanonicalStatus::Entregado),
        @r#"fedex "DL" -> entregado"#
    );
    insta::assert_snapshot!(
        status_line("fedex", "OD", CanonicalStatus::AcargoDeFedex),
        @r#"fedex "OD" -> acargo_de_fedex (persisted as retenido_por_fedex)"#
    );
    insta::assert_snapshot!(
        status_line("fedex", " ZZ ", CanonicalStatus::Desconocido),
        @r#"fedex "ZZ" -> desconocido [needs review]"#
    );
}

#[test]
fn batch_summary_counts_narrowed_and_review() {
    let reconciler = StatusReconciler::default();
    let payloads = vec![
        CarrierPayload::Fedex {
            derived_status_code: "OD".to_string(),
            exception_code: None,
            scan_events: Vec::new(),
        },
        CarrierPayload::Fedex {
            derived_status_code: "ZZ".to_string(),
            exception_code: None,
            scan_events: Vec::new(),
        },
        CarrierPayload::Dhl {
            status_text: "Entregado".to_string(),
            scan_events: Vec::new(),
        },
    ];
    let results = reconciler.reconcile_batch(&payloads, None);
    insta::assert_snapshot!(
        batch_summary(&results),
        @"3 payloads reconciled, 1 narrowed, 1 need review"
    );
    insta::assert_snapshot!(
        batch_summary(&results[..1]),
        @"1 payload reconciled, 1 narrowed, 0 need review"
    );

    let mut table = reconciliation_table(&results);
    table.force_no_tty();
    let rendered = table.to_string();
    assert!(rendered.contains("retenido_por_fedex"));
    assert!(rendered.contains("acargo_de_fedex"));
    assert!(rendered.contains("desconocido"));
}

#[test]
fn events_table_lists_newest_first_input_order() {
    let events = vec![
        ScanEvent::new(
            "Entregado",
            Utc.with_ymd_and_hms(2024, 6, 4, 15, 30, 0).unwrap(),
        ),
        ScanEvent::new("En ruta", Utc.with_ymd_and_hms(2024, 6, 4, 8, 5, 0).unwrap()),
    ];
    let mut table = events_table(&events);
    table.force_no_tty();
    let rendered = table.to_string();
    let delivered = rendered.find("Entregado").unwrap();
    let en_route = rendered.find("En ruta").unwrap();
    assert!(delivered < en_route);
    assert!(rendered.contains("2024-06-04 15:30"));
}

#[test]
fn code_table_lists_every_exception_code() {
    let mut table = code_table("Exception", FEDEX_EXCEPTION_CODES);
    table.force_no_tty();
    let rendered = table.to_string();
    for (code, _) in FEDEX_EXCEPTION_CODES {
        assert!(rendered.contains(code), "missing {code}");
    }
    assert!(rendered.contains("devuelto_a_fedex"));
}

#[test]
fn latest_event_is_newest_for_unfiltered_trails() {
    let payload = CarrierPayload::Dhl {
        status_text: "Entregado".to_string(),
        scan_events: vec![
            ScanEvent::new(
                "Recoleccion",
                Utc.with_ymd_and_hms(2024, 1, 1, 9, 0, 0).unwrap(),
            ),
            ScanEvent::new(
                "Paquete entregado",
                Utc.with_ymd_and_hms(2024, 1, 2, 9, 0, 0).unwrap(),
            ),
        ],
    };
    let results = StatusReconciler::default().reconcile_batch(&[payload], None);
    let mut table = reconciliation_table(&results);
    table.force_no_tty();
    let rendered = table.to_string();
    assert!(rendered.contains("Paquete entregado"));
    assert!(!rendered.contains("Recoleccion"));
}
