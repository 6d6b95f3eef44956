use std::fmt::Write as _;

use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use apps_transform::CleaningStage;

use crate::pipeline::{CleanedCatalog, MarketAnalysis, popularity_label};

const STAGE_COLUMNS: [CleaningStage; 5] = [
    CleaningStage::Loaded,
    CleaningStage::Validated,
    CleaningStage::Deduplicated,
    CleaningStage::English,
    CleaningStage::Free,
];

/// `key : value` lines, in the given order. Whole numbers keep their
/// `.0` (`25.0`, not `25`).
pub fn render_pairs(entries: &[(String, f64)]) -> String {
    let mut out = String::new();
    for (key, value) in entries {
        let _ = writeln!(out, "{key} : {value:?}");
    }
    out
}

/// `name : metric` lines for a group listing.
pub fn render_listing(entries: &[(String, String)]) -> String {
    let mut out = String::new();
    for (name, metric) in entries {
        let _ = writeln!(out, "{name} : {metric}");
    }
    out
}

pub fn cleaning_table(catalogs: &[CleanedCatalog]) -> Table {
    let mut table = Table::new();
    let mut header = vec![header_cell("Marketplace")];
    header.extend(STAGE_COLUMNS.iter().map(|stage| header_cell(stage.label())));
    header.push(header_cell("Rejected"));
    header.push(header_cell("Duplicates"));
    table.set_header(header);
    apply_summary_table_style(&mut table);
    for index in 1..=STAGE_COLUMNS.len() + 2 {
        align_column(&mut table, index, CellAlignment::Right);
    }
    for catalog in catalogs {
        let report = &catalog.report;
        let mut row = vec![
            Cell::new(catalog.marketplace.label())
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
        ];
        for stage in STAGE_COLUMNS {
            row.push(match report.rows_after(stage) {
                Some(rows) => Cell::new(rows),
                None => dim_cell("-"),
            });
        }
        row.push(count_cell(Some(report.rejected.len()), Color::Red));
        row.push(count_cell(
            report.duplicates.as_ref().map(|d| d.duplicate_count),
            Color::Yellow,
        ));
        table.add_row(row);
    }
    table
}

/// Rows dropped by validation, or `None` when every row passed.
pub fn rejected_table(catalogs: &[CleanedCatalog]) -> Option<Table> {
    let rejected: Vec<_> = catalogs
        .iter()
        .flat_map(|catalog| {
            catalog
                .report
                .rejected
                .iter()
                .map(move |row| (catalog.marketplace, row))
        })
        .collect();
    if rejected.is_empty() {
        return None;
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Marketplace"),
        header_cell("Row"),
        header_cell("App"),
        header_cell("Reason"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    for (marketplace, row) in rejected {
        table.add_row(vec![
            Cell::new(marketplace.label()),
            Cell::new(row.index),
            Cell::new(&row.name),
            Cell::new(row.reason.to_string()).fg(Color::Red),
        ]);
    }
    Some(table)
}

pub fn profile_table(analysis: &MarketAnalysis, top: usize) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("#"),
        header_cell("Category"),
        header_cell("Apps"),
        header_cell("Share %"),
        header_cell(&format!("Avg {}", popularity_label(analysis.marketplace))),
    ]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Right);
    align_column(&mut table, 4, CellAlignment::Right);
    for (rank, profile) in analysis.profiles.iter().take(top).enumerate() {
        table.add_row(vec![
            dim_cell(rank + 1),
            Cell::new(&profile.group)
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            Cell::new(profile.apps),
            Cell::new(format!("{:.2}", profile.share_pct)),
            Cell::new(format!("{:.0}", profile.average)),
        ]);
    }
    table
}

pub fn print_cleaning_summary(catalogs: &[CleanedCatalog]) {
    println!("{}", cleaning_table(catalogs));
    if let Some(table) = rejected_table(catalogs) {
        println!();
        println!("Rejected rows:");
        println!("{table}");
    }
    for catalog in catalogs {
        let Some(duplicates) = &catalog.report.duplicates else {
            continue;
        };
        println!();
        println!(
            "{}: {} duplicate entries",
            catalog.marketplace, duplicates.duplicate_count
        );
        if !duplicates.examples.is_empty() {
            println!("Examples: {}", duplicates.examples.join(", "));
        }
    }
}

pub fn print_analysis(analysis: &MarketAnalysis, top: usize) {
    println!("== {} ({} free English apps) ==", analysis.marketplace, analysis.apps);
    for section in &analysis.frequencies {
        println!();
        println!("Share of apps by {} (%):", section.column);
        print!("{}", render_pairs(&section.entries));
    }
    println!();
    println!(
        "Average {} by category:",
        popularity_label(analysis.marketplace)
    );
    print!("{}", render_pairs(&analysis.averages));
    println!();
    println!("Top {top} categories by average {}:", popularity_label(analysis.marketplace));
    println!("{}", profile_table(analysis, top));
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn count_cell(count: Option<usize>, color: Color) -> Cell {
    match count {
        Some(value) if value > 0 => Cell::new(value).fg(color).add_attribute(Attribute::Bold),
        Some(value) => dim_cell(value),
        None => dim_cell("-"),
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
