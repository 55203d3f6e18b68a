//! Integration tests for MK export normalization.

use nonofetch::{normalize, Dimensions, Error};

/// Build an MK export with labelled clue lines.
fn build_export(rows: usize, columns: usize, extra_lines: usize) -> String {
    let mut lines = vec![format!("{} {}", rows, columns)];
    lines.extend((0..rows).map(|i| format!("r{}", i)));
    lines.push("#".to_string());
    lines.extend((0..columns).map(|i| format!("c{}", i)));
    lines.extend((0..extra_lines).map(|i| format!("extra{}", i)));
    lines.join("\n")
}

#[test]
fn test_shape_for_many_sizes() {
    for rows in 0..6 {
        for columns in 0..6 {
            let doc = normalize(&build_export(rows, columns, 0)).unwrap();
            let lines: Vec<&str> = doc.as_str().split('\n').collect();

            assert_eq!(lines.len(), 1 + columns + rows + 1, "{}x{}", rows, columns);
            assert_eq!(lines[0], format!("{} {}", columns, rows));
            assert_eq!(lines.last(), Some(&""));
            assert_eq!(doc.dimensions(), Dimensions::new(rows, columns));
        }
    }
}

#[test]
fn test_blocks_are_reordered() {
    let doc = normalize(&build_export(3, 2, 0)).unwrap();
    assert_eq!(doc.as_str(), "2 3\nc0\nc1\nr0\nr1\nr2\n");
    assert_eq!(doc.column_lines().collect::<Vec<_>>(), vec!["c0", "c1"]);
    assert_eq!(doc.row_lines().collect::<Vec<_>>(), vec!["r0", "r1", "r2"]);
}

#[test]
fn test_trailing_lines_are_dropped() {
    let doc = normalize(&build_export(1, 1, 4)).unwrap();
    assert_eq!(doc.as_str(), "1 1\nc0\nr0\n");
}

#[test]
fn test_short_exports_fail_instead_of_truncating() {
    for missing in 1..=3 {
        let full = build_export(2, 3, 0);
        let lines: Vec<&str> = full.split('\n').collect();
        let short = lines[..lines.len() - missing].join("\n");

        let result = normalize(&short);
        assert!(
            matches!(
                result,
                Err(Error::MalformedExport {
                    dimensions: Some(Dimensions { rows: 2, columns: 3 }),
                    ..
                })
            ),
            "missing {} lines",
            missing
        );
    }
}

#[test]
fn test_ambiguous_example_is_rejected() {
    // Header announces 2 rows and 3 columns but only one column line follows
    let result = normalize("2 3\n0\nabc\ndef\nghi\n");
    assert!(matches!(result, Err(Error::MalformedExport { .. })));
}

#[test]
fn test_empty_clues_become_blank_lines() {
    let raw = "2 2\n0\n3\n#\n0\n1 1\n";
    let doc = normalize(raw).unwrap();
    assert_eq!(doc.as_str(), "2 2\n\n1 1\n\n3\n");
}

#[test]
fn test_separator_line_is_skipped_whatever_it_holds() {
    let raw = "1 1\nrow\nnot-a-hash\ncol\n";
    let doc = normalize(raw).unwrap();
    assert_eq!(doc.as_str(), "1 1\ncol\nrow\n");
}

#[test]
fn test_marker_page_is_malformed() {
    let page = "<html>\nThe mk format cannot handle puzzles with blotted clues.\n</html>";
    assert!(matches!(
        normalize(page),
        Err(Error::MalformedExport { dimensions: None, .. })
    ));
}
