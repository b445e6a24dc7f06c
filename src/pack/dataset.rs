use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One attached per-graph target field: `width` values per graph, rows
/// flattened into a single buffer in dataset order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TargetColumn {
    pub width: usize,
    pub values: Vec<f64>,
}

/// Columnar concatenation of every per-graph field across a whole dataset.
///
/// Each field is one contiguous buffer holding graph 0's values, then graph
/// 1's, and so on — a struct-of-arrays layout with no per-graph allocation.
/// Where each graph's segment starts and ends is recorded in the
/// [`SliceTable`] built alongside; the two are only meaningful as a pair,
/// and every operation in this module consumes and returns them together.
///
/// `bond_index` endpoints stay local to their owning graph (0-based atom
/// indices within the graph's own atom segment).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PackedDataset {
    pub atomic_numbers: Vec<u8>,
    pub positions: Vec<[f64; 3]>,
    pub bond_index: Vec<[u32; 2]>,
    pub bond_orders: Vec<u8>,
    pub targets: BTreeMap<String, TargetColumn>,
}

/// Per-field offset tables delimiting each graph's segment of the flat
/// buffers in a [`PackedDataset`].
///
/// Every offset list has `graph_count + 1` non-decreasing entries, starts
/// at 0 and ends at the governed field's element count. `atoms` governs
/// `atomic_numbers` and `positions`; `bonds` governs `bond_index` and
/// `bond_orders`; each entry of `targets` counts rows of the same-named
/// target column and is the identity after attachment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SliceTable {
    pub atoms: Vec<usize>,
    pub bonds: Vec<usize>,
    pub targets: BTreeMap<String, Vec<usize>>,
}

impl SliceTable {
    /// A table for a dataset of zero graphs.
    pub fn empty() -> Self {
        Self {
            atoms: vec![0],
            bonds: vec![0],
            targets: BTreeMap::new(),
        }
    }

    #[inline]
    pub fn graph_count(&self) -> usize {
        self.atoms.len().saturating_sub(1)
    }
}

impl Default for SliceTable {
    fn default() -> Self {
        Self::empty()
    }
}

/// Borrowed view of one graph's segment of every field.
#[derive(Debug, Clone, PartialEq)]
pub struct GraphView<'a> {
    pub atomic_numbers: &'a [u8],
    pub positions: &'a [[f64; 3]],
    pub bond_index: &'a [[u32; 2]],
    pub bond_orders: &'a [u8],
    pub targets: BTreeMap<&'a str, &'a [f64]>,
}

impl PackedDataset {
    /// O(1) random access to graph `index` without unpacking the dataset.
    ///
    /// `slices` must be the table built together with this dataset.
    /// Returns `None` when `index` is past the last graph.
    pub fn graph<'a>(&'a self, slices: &'a SliceTable, index: usize) -> Option<GraphView<'a>> {
        if index >= slices.graph_count() {
            return None;
        }

        let (a0, a1) = (slices.atoms[index], slices.atoms[index + 1]);
        let (b0, b1) = (slices.bonds[index], slices.bonds[index + 1]);

        let mut targets = BTreeMap::new();
        for (name, column) in &self.targets {
            let offsets = &slices.targets[name];
            let (r0, r1) = (offsets[index], offsets[index + 1]);
            targets.insert(
                name.as_str(),
                &column.values[r0 * column.width..r1 * column.width],
            );
        }

        Some(GraphView {
            atomic_numbers: &self.atomic_numbers[a0..a1],
            positions: &self.positions[a0..a1],
            bond_index: &self.bond_index[b0..b1],
            bond_orders: &self.bond_orders[b0..b1],
            targets,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_slice_table_has_zero_graphs() {
        let slices = SliceTable::empty();
        assert_eq!(slices.graph_count(), 0);
        assert_eq!(slices.atoms, vec![0]);
        assert_eq!(slices.bonds, vec![0]);
        assert!(slices.targets.is_empty());
    }

    #[test]
    fn graph_view_out_of_range_is_none() {
        let dataset = PackedDataset::default();
        let slices = SliceTable::empty();
        assert!(dataset.graph(&slices, 0).is_none());
    }

    #[test]
    fn packed_pair_survives_serialization() {
        let dataset = PackedDataset {
            atomic_numbers: vec![6, 8, 1],
            positions: vec![[0.0, 0.0, 0.0], [1.2, 0.0, 0.0], [1.8, 0.9, 0.0]],
            bond_index: vec![[0, 1], [1, 2]],
            bond_orders: vec![2, 1],
            targets: BTreeMap::from([(
                "y".to_string(),
                TargetColumn {
                    width: 2,
                    values: vec![0.5, -0.5],
                },
            )]),
        };
        let slices = SliceTable {
            atoms: vec![0, 3],
            bonds: vec![0, 2],
            targets: BTreeMap::from([("y".to_string(), vec![0, 1])]),
        };

        let blob = serde_json::to_string(&(&dataset, &slices)).unwrap();
        let (restored_dataset, restored_slices): (PackedDataset, SliceTable) =
            serde_json::from_str(&blob).unwrap();
        assert_eq!(restored_dataset, dataset);
        assert_eq!(restored_slices, slices);
    }
}
