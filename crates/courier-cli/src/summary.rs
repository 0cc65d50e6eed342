use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use courier_core::Reconciliation;
use courier_model::{CanonicalStatus, ScanEvent};

/// One-line result for the single-status subcommands.
///
/// Shows the narrowed status alongside when it differs.
pub fn status_line(carrier: &str, input: &str, status: CanonicalStatus) -> String {
    let persisted = status.persisted();
    let mut line = format!("{carrier} {:?} -> {status}", input.trim());
    if persisted != status {
        line.push_str(&format!(" (persisted as {persisted})"));
    }
    if status.needs_review() {
        line.push_str(" [needs review]");
    }
    line
}

/// Counts line printed under the reconciliation table.
pub fn batch_summary(results: &[Reconciliation]) -> String {
    let review = results.iter().filter(|result| result.needs_review).count();
    let narrowed = results
        .iter()
        .filter(|result| result.raw_status != result.status)
        .count();
    let noun = if results.len() == 1 { "payload" } else { "payloads" };
    format!(
        "{} {noun} reconciled, {narrowed} narrowed, {review} need review",
        results.len()
    )
}

pub fn reconciliation_table(results: &[Reconciliation]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("#"),
        header_cell("Carrier"),
        header_cell("Mapped"),
        header_cell("Status"),
        header_cell("Events"),
        header_cell("Latest event"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    align_column(&mut table, 4, CellAlignment::Right);
    for (index, result) in results.iter().enumerate() {
        let mapped = if result.raw_status == result.status {
            dim_cell("-")
        } else {
            Cell::new(result.raw_status)
        };
        let (count, latest) = match &result.events {
            Some(events) => (
                Cell::new(events.len()),
                events
                    .iter()
                    .max_by_key(|event| event.date)
                    .map_or_else(|| dim_cell("-"), |event| Cell::new(&event.event_description)),
            ),
            None => (dim_cell("-"), dim_cell("-")),
        };
        table.add_row(vec![
            Cell::new(index + 1),
            Cell::new(result.carrier),
            mapped,
            status_cell(result.status),
            count,
            latest,
        ]);
    }
    table
}

pub fn print_reconciliations(results: &[Reconciliation]) {
    println!("{}", reconciliation_table(results));
    println!("{}", batch_summary(results));
}

pub fn events_table(events: &[ScanEvent]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Date"), header_cell("Description")]);
    apply_table_style(&mut table);
    for event in events {
        table.add_row(vec![
            dim_cell(event.date.format("%Y-%m-%d %H:%M")),
            Cell::new(&event.event_description),
        ]);
    }
    table
}

/// Code tables for one FedEx lookup: code, status, narrowed status.
pub fn code_table(title: &str, codes: &[(&str, CanonicalStatus)]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell(title),
        header_cell("Status"),
        header_cell("Persisted as"),
    ]);
    apply_table_style(&mut table);
    for &(code, status) in codes {
        let persisted = status.persisted();
        let persisted_cell = if persisted == status {
            dim_cell("-")
        } else {
            Cell::new(persisted)
        };
        table.add_row(vec![Cell::new(code), status_cell(status), persisted_cell]);
    }
    table
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn status_cell(status: CanonicalStatus) -> Cell {
    let cell = Cell::new(status);
    if status.needs_review() {
        cell.fg(Color::Red).add_attribute(Attribute::Bold)
    } else if status.is_terminal() {
        cell.fg(Color::Green)
    } else {
        cell
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
