use anyhow::{Context, Result};
use tracing::{debug, info, info_span, trace};

use courier_cli::input::{load_events, load_options, load_payloads};
use courier_cli::logging::redact_value;
use courier_cli::lookup::{dhl_line, fedex_legacy_line, fedex_line};
use courier_cli::summary::{code_table, events_table, print_reconciliations};
use courier_core::StatusReconciler;
use courier_ingest::{IngestError, detect_file_layout, read_layout_table};
use courier_normalization::{
    FEDEX_DERIVED_CODES, FEDEX_EXCEPTION_CODES, FEDEX_LEGACY_STATUSES, filter_scan_events,
};

use crate::cli::{DhlArgs, EventsArgs, FedexArgs, FedexLegacyArgs, LayoutArgs, ReconcileArgs};

pub fn run_fedex(args: &FedexArgs) -> Result<()> {
    println!("{}", fedex_line(&args.derived, args.exception.as_deref()));
    Ok(())
}

pub fn run_fedex_legacy(args: &FedexLegacyArgs) -> Result<()> {
    println!("{}", fedex_legacy_line(&args.status));
    Ok(())
}

pub fn run_dhl(args: &DhlArgs) -> Result<()> {
    debug!(text = redact_value(&args.text), "mapping dhl status");
    println!("{}", dhl_line(&args.text));
    Ok(())
}

pub fn run_layout(args: &LayoutArgs) -> Result<()> {
    let span = info_span!("layout", file = %args.file.display());
    let _guard = span.enter();
    if !args.rows {
        let layout = detect_file_layout(&args.file).inspect_err(|error| {
            if let IngestError::UnsupportedLayout { headers, .. } = error {
                trace!(header = redact_value(&headers.join(" | ")), "unrecognized header row");
            }
        })?;
        println!("{layout}");
        return Ok(());
    }
    let table = read_layout_table(&args.file)?;
    info!(layout = %table.layout, rows = table.len(), "spreadsheet loaded");
    println!("{} ({} rows)", table.layout, table.len());
    Ok(())
}

pub fn run_events(args: &EventsArgs) -> Result<()> {
    let events = load_events(&args.file)?;
    debug!(
        events = events.len(),
        filter = redact_value(&args.filter),
        "filtering scan events"
    );
    let filtered = filter_scan_events(&events, &args.filter);
    println!("{}", events_table(&filtered));
    Ok(())
}

pub fn run_reconcile(args: &ReconcileArgs) -> Result<()> {
    let options = load_options(args.config.as_deref())?;
    let reconciler = StatusReconciler::new(options);
    let payloads = load_payloads(&args.file)?;
    let results = reconciler.reconcile_batch(&payloads, args.filter.as_deref());
    info!(payloads = results.len(), "reconciled payloads");
    if args.json {
        let json = serde_json::to_string_pretty(&results).context("serialize results")?;
        println!("{json}");
    } else {
        print_reconciliations(&results);
    }
    Ok(())
}

pub fn run_codes() -> Result<()> {
    println!("{}", code_table("Exception", FEDEX_EXCEPTION_CODES));
    println!("{}", code_table("Derived", FEDEX_DERIVED_CODES));
    println!("{}", code_table("Legacy status", FEDEX_LEGACY_STATUSES));
    Ok(())
}
