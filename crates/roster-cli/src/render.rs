//! Terminal tables for the record list and dashboard stats.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use roster_model::{SortDirection, SortKey, SortSpec};
use roster_store::{DashboardStats, DerivedView, Selection};

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

/// Column header with a sort arrow on the active key.
fn column_label(key: SortKey, sort: SortSpec) -> String {
    match (sort.key, sort.direction) {
        (Some(active), SortDirection::Ascending) if active == key => format!("{} ▲", key.label()),
        (Some(active), SortDirection::Descending) if active == key => format!("{} ▼", key.label()),
        _ => key.label().to_string(),
    }
}

/// The current page of records. Selected rows are marked in the first column.
pub fn records_table(view: &DerivedView<'_>, selection: &Selection, sort: SortSpec) -> Table {
    let mut table = Table::new();
    let mut header = vec![header_cell("")];
    header.extend(SortKey::ALL.map(|key| header_cell(&column_label(key, sort))));
    table.set_header(header);
    apply_table_style(&mut table);

    for record in &view.page_items {
        let marker = if selection.contains(record.id.as_str()) {
            Cell::new("●").fg(Color::Green)
        } else {
            dim_cell("○")
        };
        let mut row = vec![marker];
        row.extend(record.values().map(|value| {
            if value.is_empty() {
                dim_cell("-")
            } else {
                Cell::new(value)
            }
        }));
        table.add_row(row);
    }
    table
}

/// `Showing 11-20 of 45 · page 2 of 5`.
pub fn page_footer(view: &DerivedView<'_>) -> String {
    match view.showing() {
        Some((first, last)) => format!(
            "Showing {first}-{last} of {} · page {} of {}",
            view.filtered_len, view.effective_page, view.total_pages
        ),
        None => "No users match the current filters".to_string(),
    }
}

/// Totals followed by one row per gender with its share.
pub fn stats_table(stats: &DashboardStats) -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Metric"), header_cell("Count"), header_cell("Share")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);

    table.add_row(vec![
        Cell::new("Total users").add_attribute(Attribute::Bold),
        Cell::new(stats.total).add_attribute(Attribute::Bold),
        dim_cell("-"),
    ]);
    table.add_row(vec![
        Cell::new("Unique IPs"),
        Cell::new(stats.unique_ips),
        dim_cell("-"),
    ]);
    table.add_row(vec![
        Cell::new("Gender categories"),
        Cell::new(stats.gender_categories()),
        dim_cell("-"),
    ]);
    for bucket in &stats.by_gender {
        table.add_row(vec![
            Cell::new(format!("  {}", bucket.gender)).fg(Color::Blue),
            Cell::new(bucket.count),
            Cell::new(format!("{:.1}%", stats.percent(bucket.count))),
        ]);
    }
    table
}
