use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{
    Attribute, Cell, CellAlignment, Color, ColumnConstraint, ContentArrangement, Table, Width,
};
use serde::Serialize;

use audit_core::AuditSession;
use audit_model::{Progress, Standard};
use audit_standards::StandardRegistry;

/// Machine-readable progress report for `summary --json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionSummary {
    pub client_name: String,
    pub audit_date: String,
    pub progress: Progress,
    pub percent_complete: usize,
    pub pending: Vec<Standard>,
}

impl SessionSummary {
    pub fn from_session(session: &AuditSession) -> Self {
        let progress = session.summary();
        Self {
            client_name: session.context().client_name.clone(),
            audit_date: session.context().audit_date_text(),
            progress,
            percent_complete: progress.percent_complete(),
            pending: session.pending().into_iter().cloned().collect(),
        }
    }
}

pub fn progress_line(progress: Progress) -> String {
    format!("Completed: {progress} standards")
}

pub fn checklist_header(session: &AuditSession) -> String {
    let context = session.context();
    format!(
        "Audit Checklist for {} ({})",
        context.client_name,
        context.audit_date_text()
    )
}

/// Bullet list of pending standards, one `- code: name` per line.
pub fn pending_lines(session: &AuditSession) -> Vec<String> {
    session
        .pending()
        .into_iter()
        .map(|standard| format!("- {}: {}", standard.code, standard.name))
        .collect()
}

/// Full checklist: code, name, done marker and notes.
pub fn checklist_table(session: &AuditSession) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("SA Code"),
        header_cell("Standard Name"),
        header_cell("Done"),
        header_cell("Notes"),
    ]);
    apply_checklist_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Center);
    for (standard, record) in session.checklist() {
        table.add_row(vec![
            code_cell(&standard.code, record.done),
            Cell::new(&standard.name),
            done_cell(record.done),
            notes_cell(&record.notes),
        ]);
    }
    let progress = session.summary();
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(format!("{}% complete", progress.percent_complete()))
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(progress).add_attribute(Attribute::Bold),
        dim_cell("-"),
    ]);
    table
}

/// Catalogue listing for the `standards` subcommand.
pub fn standards_table(registry: &StandardRegistry) -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell("SA Code"), header_cell("Standard Name")]);
    apply_table_style(&mut table);
    for standard in registry {
        table.add_row(vec![
            Cell::new(&standard.code).fg(Color::Blue),
            Cell::new(&standard.name),
        ]);
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

fn apply_checklist_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::DynamicFullWidth)
        .set_width(140);
    table.set_constraints(vec![
        ColumnConstraint::LowerBoundary(Width::Fixed(8)),
        ColumnConstraint::UpperBoundary(Width::Percentage(50)),
        ColumnConstraint::LowerBoundary(Width::Fixed(6)),
        ColumnConstraint::UpperBoundary(Width::Percentage(35)),
    ]);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn code_cell(code: &str, done: bool) -> Cell {
    if done {
        Cell::new(code).fg(Color::Green)
    } else {
        Cell::new(code)
            .fg(Color::Blue)
            .add_attribute(Attribute::Bold)
    }
}

fn done_cell(done: bool) -> Cell {
    if done {
        Cell::new("✓")
            .fg(Color::Green)
            .add_attribute(Attribute::Bold)
    } else {
        dim_cell("-")
    }
}

fn notes_cell(notes: &str) -> Cell {
    if notes.is_empty() {
        dim_cell("-")
    } else {
        Cell::new(notes)
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
