//! Chip cells: a few labels inline, the rest summarized as "+N".

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::table::{CellKind, TableCell};

/// A single chip label.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChipData {
    pub label: String,
}

/// Build a chips cell showing at most `max_visible` labels.
///
/// The tooltip always lists every label.
pub fn chip_cell_from_labels<S: AsRef<str>>(labels: &[S], max_visible: usize) -> TableCell {
    let visible = labels.len().min(max_visible);

    TableCell {
        kind: CellKind::Chips,
        chips: labels[..visible]
            .iter()
            .map(|label| ChipData {
                label: label.as_ref().to_string(),
            })
            .collect(),
        chip_overflow: labels.len() - visible,
        chip_tooltip: labels
            .iter()
            .map(|label| label.as_ref())
            .collect::<Vec<&str>>()
            .join(", "),
        ..TableCell::default()
    }
}

/// Build a chips cell from comma-separated ids resolved through `names`.
///
/// Whitespace around ids is ignored. Blank, unparsable and unknown ids are
/// skipped.
pub fn chip_cell_from_ids(
    comma_separated_ids: &str,
    names: &HashMap<i64, String>,
    max_visible: usize,
) -> TableCell {
    let resolved: Vec<&str> = comma_separated_ids
        .split(',')
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .filter_map(|id| id.parse::<i64>().ok())
        .filter_map(|id| names.get(&id).map(String::as_str))
        .collect();

    chip_cell_from_labels(resolved.as_slice(), max_visible)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(cell: &TableCell) -> Vec<&str> {
        cell.chips.iter().map(|c| c.label.as_str()).collect()
    }

    #[test]
    fn test_labels_within_limit() {
        let cell = chip_cell_from_labels(&["Admin", "Payroll"], 3);
        assert_eq!(cell.kind, CellKind::Chips);
        assert_eq!(labels(&cell), vec!["Admin", "Payroll"]);
        assert_eq!(cell.chip_overflow, 0);
        assert_eq!(cell.chip_tooltip, "Admin, Payroll");
    }

    #[test]
    fn test_labels_overflow() {
        let cell = chip_cell_from_labels(&["a", "b", "c", "d", "e"], 2);
        assert_eq!(labels(&cell), vec!["a", "b"]);
        assert_eq!(cell.chip_overflow, 3);
        assert_eq!(cell.chip_tooltip, "a, b, c, d, e");
    }

    #[test]
    fn test_empty_labels() {
        let cell = chip_cell_from_labels::<&str>(&[], 3);
        assert_eq!(cell.kind, CellKind::Chips);
        assert!(cell.chips.is_empty());
        assert!(cell.chip_tooltip.is_empty());
    }

    #[test]
    fn test_ids_resolved_and_trimmed() {
        let names: HashMap<i64, String> = [(1, "North"), (2, "South"), (3, "East")]
            .into_iter()
            .map(|(id, name)| (id, name.to_string()))
            .collect();

        let cell = chip_cell_from_ids(" 1, x ,,3, 99 ", &names, 5);
        assert_eq!(labels(&cell), vec!["North", "East"]);
        assert_eq!(cell.chip_tooltip, "North, East");

        assert!(chip_cell_from_ids("", &names, 5).chips.is_empty());
    }
}
