//! Integration tests for cross-page table merging.

use docstruct::geometry::BoundingBox;
use docstruct::layout::TableCandidate;
use docstruct::tables::{normalize_table, MergeParams, TableBuffer};

// Helper functions for creating mock candidates

fn mock_table(columns: &[&str], rows: &[&[&str]], xs: &[f32]) -> TableCandidate {
    TableCandidate {
        page_start: 0,
        page_end: 0,
        columns: columns.iter().map(|c| c.to_string()).collect(),
        rows: rows
            .iter()
            .map(|r| r.iter().map(|c| c.to_string()).collect())
            .collect(),
        bbox: BoundingBox::new(40.0, 60.0, 560.0, 720.0),
        x_coordinates: xs.to_vec(),
    }
}

#[test]
fn test_same_headers_on_adjacent_pages_merge() {
    // Two tables with the same three headers on pages 2 and 3, columns
    // within two units of each other.
    let headers = ["Region", "Units", "Revenue"];
    let xs_a = [40.0, 220.0, 400.0];
    let xs_b = [41.5, 221.0, 398.5];

    let mut buffer = TableBuffer::new();
    buffer.add(
        mock_table(&headers, &[&["North", "120", "8400"]], &xs_a),
        2,
    );
    buffer.add(
        mock_table(&headers, &[&["South", "95", "6650"]], &xs_b),
        3,
    );

    let merged = buffer.merge(&MergeParams::default());
    assert_eq!(merged.len(), 1);
    assert_eq!(merged[0].page_range, (2, 3));
    assert_eq!(
        merged[0].rows,
        vec![vec!["North", "120", "8400"], vec!["South", "95", "6650"]]
    );
}

#[test]
fn test_merge_chain_is_left_associative() {
    // Candidates on pages 1, 2, 3 with identical columns collapse into a
    // single group whose rows concatenate in page order.
    let headers = ["Name", "Qty"];
    let xs = [40.0, 300.0];

    let mut buffer = TableBuffer::new();
    buffer.add(mock_table(&headers, &[&["a", "1"]], &xs), 1);
    buffer.add(mock_table(&headers, &[&["b", "2"]], &xs), 2);
    buffer.add(mock_table(&headers, &[&["c", "3"]], &xs), 3);

    let merged = buffer.merge(&MergeParams::default());
    assert_eq!(merged.len(), 1);
    assert_eq!(merged[0].page_range, (1, 3));
    assert_eq!(merged[0].original_tables.len(), 3);
    assert_eq!(
        merged[0].rows,
        vec![vec!["a", "1"], vec!["b", "2"], vec!["c", "3"]]
    );
}

#[test]
fn test_merge_does_not_bridge_page_gaps() {
    // A merges with B, but C sits two pages after B: the result is the
    // (A, B) group plus C untouched, never one group of three.
    let headers = ["Name", "Qty"];
    let xs = [40.0, 300.0];

    let mut buffer = TableBuffer::new();
    buffer.add(mock_table(&headers, &[&["a", "1"]], &xs), 1);
    buffer.add(mock_table(&headers, &[&["b", "2"]], &xs), 2);
    buffer.add(mock_table(&headers, &[&["c", "3"]], &xs), 4);

    let merged = buffer.merge(&MergeParams::default());
    assert_eq!(merged.len(), 2);
    assert_eq!(merged[0].original_tables.len(), 2);
    assert_eq!(merged[0].page_range, (1, 2));
    assert_eq!(merged[1].original_tables.len(), 1);
    assert_eq!(merged[1].page_range, (4, 4));
    assert_eq!(merged[1].rows, vec![vec!["c", "3"]]);
}

#[test]
fn test_headerless_continuation_merges() {
    // The continuation page lost its header; its first data row width
    // matches the first table's column count.
    let mut buffer = TableBuffer::new();
    buffer.add(
        mock_table(
            &["Name", "Qty", "Price"],
            &[&["Bolt", "12", "0.40"]],
            &[],
        ),
        1,
    );
    buffer.add(mock_table(&[], &[&["Nut", "30", "0.15"]], &[]), 2);

    let merged = buffer.merge(&MergeParams::default());
    assert_eq!(merged.len(), 1);
    assert_eq!(merged[0].columns, vec!["Name", "Qty", "Price"]);
    assert_eq!(merged[0].rows.len(), 2);
}

#[test]
fn test_column_drift_beyond_tolerance_blocks_merge() {
    let headers = ["Name", "Qty"];

    let mut buffer = TableBuffer::new();
    buffer.add(mock_table(&headers, &[&["a", "1"]], &[40.0, 300.0]), 1);
    buffer.add(mock_table(&headers, &[&["b", "2"]], &[40.0, 330.0]), 2);

    let merged = buffer.merge(&MergeParams::default());
    assert_eq!(merged.len(), 2);
}

#[test]
fn test_merge_result_survives_reinvocation() {
    let headers = ["Name", "Qty"];
    let xs = [40.0, 300.0];

    let mut buffer = TableBuffer::new();
    buffer.add(mock_table(&headers, &[&["a", "1"]], &xs), 1);
    buffer.add(mock_table(&headers, &[&["b", "2"]], &xs), 2);

    let first = buffer.merge(&MergeParams::default());
    let second = buffer.merge(&MergeParams::default());
    assert_eq!(first, second);
}

#[test]
fn test_normalize_after_merge() {
    let mut buffer = TableBuffer::new();
    buffer.add(
        mock_table(
            &[" Name ", "Qty "],
            &[&[" Bolt ", " 12 "], &["  ", " "]],
            &[40.0, 300.0],
        ),
        1,
    );

    let merged = buffer.merge(&MergeParams::default());
    assert_eq!(merged.len(), 1);

    let normalized = normalize_table(&merged[0]);
    assert_eq!(normalized.columns, vec!["Name", "Qty"]);
    assert_eq!(normalized.rows, vec![vec!["Bolt", "12"]]);

    // Idempotent
    assert_eq!(normalize_table(&normalized), normalized);
}
