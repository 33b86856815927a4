use std::collections::BTreeMap;
use std::fmt;

use anyhow::{Result, bail};
use serde::Serialize;

// ---------------------------------------------------------------------------
// CellValue – a single cell of the table
// ---------------------------------------------------------------------------

/// A dynamically-typed cell mirroring common DataFrame dtypes.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum CellValue {
    String(String),
    Integer(i64),
    Float(f64),
    Bool(bool),
    Null,
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::String(s) => write!(f, "{s}"),
            CellValue::Integer(i) => write!(f, "{i}"),
            CellValue::Float(v) => write!(f, "{v}"),
            CellValue::Bool(b) => write!(f, "{b}"),
            CellValue::Null => write!(f, "<null>"),
        }
    }
}

impl CellValue {
    /// Try to interpret the value as an `f64` for plotting.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            CellValue::Float(v) => Some(*v),
            CellValue::Integer(i) => Some(*i as f64),
            _ => None,
        }
    }

    /// Whether this cell counts toward a numeric column dtype.
    pub fn is_numeric(&self) -> bool {
        matches!(self, CellValue::Integer(_) | CellValue::Float(_))
    }
}

// ---------------------------------------------------------------------------
// RowSnapshot – an immutable copy of one row, captured at selection time
// ---------------------------------------------------------------------------

/// One row of the dataset: its index plus a copy of every cell.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RowSnapshot {
    pub index: usize,
    values: BTreeMap<String, CellValue>,
}

impl RowSnapshot {
    pub fn get(&self, column: &str) -> Option<&CellValue> {
        self.values.get(column)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &CellValue)> {
        self.values.iter()
    }
}

impl fmt::Display for RowSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.index)?;
        for (col, val) in &self.values {
            write!(f, " {col}={val}")?;
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Dataset – the complete loaded table, column-major
// ---------------------------------------------------------------------------

/// A flat table with named columns and a stable row ordering.
/// Read-only after construction.
#[derive(Debug, Clone)]
pub struct Dataset {
    /// Column names in original (file) order.
    column_names: Vec<String>,
    columns: BTreeMap<String, Vec<CellValue>>,
    n_rows: usize,
}

impl Dataset {
    /// Build a dataset from `(name, cells)` pairs.
    /// All columns must have the same length; names must be unique.
    pub fn new(columns: Vec<(String, Vec<CellValue>)>) -> Result<Self> {
        let n_rows = columns.first().map(|(_, c)| c.len()).unwrap_or(0);
        let mut column_names = Vec::with_capacity(columns.len());
        let mut map = BTreeMap::new();

        for (name, cells) in columns {
            if cells.len() != n_rows {
                bail!(
                    "column '{name}' has {} rows, expected {n_rows}",
                    cells.len()
                );
            }
            if map.insert(name.clone(), cells).is_some() {
                bail!("duplicate column name '{name}'");
            }
            column_names.push(name);
        }

        Ok(Dataset {
            column_names,
            columns: map,
            n_rows,
        })
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.n_rows
    }

    /// Whether the dataset has no rows.
    pub fn is_empty(&self) -> bool {
        self.n_rows == 0
    }

    /// Column names in original order.
    pub fn column_names(&self) -> &[String] {
        &self.column_names
    }

    /// Cells of a column, or `None` for an unknown name.
    pub fn column(&self, name: &str) -> Option<&[CellValue]> {
        self.columns.get(name).map(|c| c.as_slice())
    }

    /// A column is numeric when it has at least one non-null cell and
    /// every non-null cell is an integer or float.
    pub fn is_numeric(&self, name: &str) -> bool {
        match self.columns.get(name) {
            Some(cells) => {
                let mut any = false;
                for cell in cells {
                    match cell {
                        CellValue::Null => {}
                        c if c.is_numeric() => any = true,
                        _ => return false,
                    }
                }
                any
            }
            None => false,
        }
    }

    /// Names of all numeric columns, in original order.
    pub fn numeric_columns(&self) -> Vec<String> {
        self.column_names
            .iter()
            .filter(|n| self.is_numeric(n))
            .cloned()
            .collect()
    }

    /// A numeric column as `f64` values, with NaN for null cells.
    /// Empty for an unknown column name.
    pub fn numeric_values(&self, name: &str) -> Vec<f64> {
        match self.columns.get(name) {
            Some(cells) => cells
                .iter()
                .map(|c| c.as_f64().unwrap_or(f64::NAN))
                .collect(),
            None => Vec::new(),
        }
    }

    /// Snapshot of one row. Out-of-range indices yield an empty row.
    pub fn row(&self, index: usize) -> RowSnapshot {
        let values = self
            .columns
            .iter()
            .filter_map(|(name, cells)| {
                cells.get(index).map(|c| (name.clone(), c.clone()))
            })
            .collect();
        RowSnapshot { index, values }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_dataset() -> Dataset {
        Dataset::new(vec![
            (
                "a".into(),
                vec![
                    CellValue::Integer(1),
                    CellValue::Null,
                    CellValue::Float(2.5),
                ],
            ),
            (
                "name".into(),
                vec![
                    CellValue::String("x".into()),
                    CellValue::String("y".into()),
                    CellValue::String("z".into()),
                ],
            ),
            (
                "empty".into(),
                vec![CellValue::Null, CellValue::Null, CellValue::Null],
            ),
        ])
        .unwrap()
    }

    #[test]
    fn numeric_predicate() {
        let ds = small_dataset();
        assert!(ds.is_numeric("a"));
        assert!(!ds.is_numeric("name"));
        assert!(!ds.is_numeric("empty"));
        assert!(!ds.is_numeric("missing"));
        assert_eq!(ds.numeric_columns(), vec!["a".to_string()]);
    }

    #[test]
    fn numeric_values_map_nulls_to_nan() {
        let ds = small_dataset();
        let vals = ds.numeric_values("a");
        assert_eq!(vals.len(), 3);
        assert_eq!(vals[0], 1.0);
        assert!(vals[1].is_nan());
        assert_eq!(vals[2], 2.5);
    }

    #[test]
    fn row_snapshot_contents() {
        let ds = small_dataset();
        let row = ds.row(2);
        assert_eq!(row.index, 2);
        assert_eq!(row.get("a"), Some(&CellValue::Float(2.5)));
        assert_eq!(row.get("name"), Some(&CellValue::String("z".into())));
        assert_eq!(row.get("missing"), None);
    }

    #[test]
    fn ragged_columns_rejected() {
        let result = Dataset::new(vec![
            ("a".into(), vec![CellValue::Integer(1)]),
            ("b".into(), vec![]),
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn duplicate_names_rejected() {
        let result = Dataset::new(vec![
            ("a".into(), vec![CellValue::Integer(1)]),
            ("a".into(), vec![CellValue::Integer(2)]),
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn row_snapshot_serializes() {
        let ds = small_dataset();
        let json = serde_json::to_string(&ds.row(0)).unwrap();
        assert!(json.contains("\"a\":1"));
    }
}
