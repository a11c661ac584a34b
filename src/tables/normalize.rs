//! Post-merge table cleanup.

use crate::tables::buffer::MergedTable;

/// Normalize a merged table.
///
/// Strips leading and trailing whitespace from every cell and every
/// header, then drops rows whose cells are all empty after stripping.
/// Columns are never dropped. Returns a new table; the input is not
/// mutated. Normalizing an already-normalized table returns an equal
/// table.
pub fn normalize_table(table: &MergedTable) -> MergedTable {
    let columns: Vec<String> = table.columns.iter().map(|c| c.trim().to_string()).collect();

    let rows: Vec<Vec<String>> = table
        .rows
        .iter()
        .map(|row| row.iter().map(|cell| cell.trim().to_string()).collect::<Vec<String>>())
        .filter(|row| row.iter().any(|cell| !cell.is_empty()))
        .collect();

    MergedTable {
        original_tables: table.original_tables.clone(),
        columns,
        rows,
        page_range: table.page_range,
    }
}
