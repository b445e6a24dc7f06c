use super::dataset::{PackedDataset, SliceTable, TargetColumn};
use super::error::Error;

/// A table of fixed-width numeric target rows, one row per graph.
///
/// Rows are flattened into a single buffer as they are pushed; the width is
/// enforced at insertion so an attached table can never be ragged.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TargetTable {
    width: usize,
    rows: usize,
    values: Vec<f64>,
}

impl TargetTable {
    pub fn new(width: usize) -> Self {
        Self {
            width,
            rows: 0,
            values: Vec::new(),
        }
    }

    pub fn from_rows(width: usize, rows: &[Vec<f64>]) -> Result<Self, Error> {
        let mut table = Self::new(width);
        for row in rows {
            table.push_row(row)?;
        }
        Ok(table)
    }

    pub fn push_row(&mut self, row: &[f64]) -> Result<(), Error> {
        if row.len() != self.width {
            return Err(Error::TargetWidthMismatch {
                row: self.rows,
                expected: self.width,
                got: row.len(),
            });
        }
        self.values.extend_from_slice(row);
        self.rows += 1;
        Ok(())
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn row_count(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rows == 0
    }

    pub fn row(&self, i: usize) -> &[f64] {
        &self.values[i * self.width..(i + 1) * self.width]
    }
}

/// Merges a per-graph target table into a packed pair under `name`.
///
/// The table must hold exactly one row per graph; the new field gets the
/// identity slice `0..=graph_count`, so a one-row-per-graph field slices
/// uniformly with the variable-length ones. Returns a new pair; the inputs
/// are consumed rather than mutated in place.
pub fn attach(
    mut dataset: PackedDataset,
    mut slices: SliceTable,
    name: impl Into<String>,
    table: TargetTable,
) -> Result<(PackedDataset, SliceTable), Error> {
    let graph_count = slices.graph_count();
    if table.row_count() != graph_count {
        return Err(Error::TargetCountMismatch {
            expected: graph_count,
            got: table.row_count(),
        });
    }

    let name = name.into();
    slices.targets.insert(name.clone(), (0..=graph_count).collect());
    dataset.targets.insert(
        name,
        TargetColumn {
            width: table.width,
            values: table.values,
        },
    );
    Ok((dataset, slices))
}
