use super::dataset::{PackedDataset, SliceTable, TargetColumn};
use super::error::Error;

/// Rebuilds a packed pair restricted to `indices`, in the given order.
///
/// For every field the selected graphs' segments are copied into fresh flat
/// buffers and new cumulative offsets recorded, so the output is a
/// self-contained pair with the same invariants as a freshly collated one.
/// Named splits and invalid-entry removal are both this one operation:
/// keep the graphs whose index is listed, in the listed order.
///
/// Indices need not be sorted; duplicates are permitted and duplicate the
/// graph's data. An empty `indices` yields empty buffers and single-offset
/// slices. Any index at or past the graph count fails with
/// [`Error::IndexOutOfRange`] before anything is copied.
pub fn select(
    dataset: &PackedDataset,
    slices: &SliceTable,
    indices: &[usize],
) -> Result<(PackedDataset, SliceTable), Error> {
    let graph_count = slices.graph_count();
    if let Some(&index) = indices.iter().find(|&&i| i >= graph_count) {
        return Err(Error::IndexOutOfRange { index, graph_count });
    }

    let mut out = PackedDataset::default();
    let mut out_slices = SliceTable::empty();
    out_slices.atoms.reserve(indices.len());
    out_slices.bonds.reserve(indices.len());

    for &i in indices {
        let (a0, a1) = (slices.atoms[i], slices.atoms[i + 1]);
        out.atomic_numbers
            .extend_from_slice(&dataset.atomic_numbers[a0..a1]);
        out.positions.extend_from_slice(&dataset.positions[a0..a1]);
        out_slices.atoms.push(out.atomic_numbers.len());

        let (b0, b1) = (slices.bonds[i], slices.bonds[i + 1]);
        out.bond_index.extend_from_slice(&dataset.bond_index[b0..b1]);
        out.bond_orders
            .extend_from_slice(&dataset.bond_orders[b0..b1]);
        out_slices.bonds.push(out.bond_index.len());
    }

    for (name, column) in &dataset.targets {
        let offsets = &slices.targets[name];
        let mut values = Vec::new();
        let mut out_offsets = Vec::with_capacity(indices.len() + 1);
        out_offsets.push(0);
        let mut rows = 0;

        for &i in indices {
            let (r0, r1) = (offsets[i], offsets[i + 1]);
            values.extend_from_slice(&column.values[r0 * column.width..r1 * column.width]);
            rows += r1 - r0;
            out_offsets.push(rows);
        }

        out.targets.insert(
            name.clone(),
            TargetColumn {
                width: column.width,
                values,
            },
        );
        out_slices.targets.insert(name.clone(), out_offsets);
    }

    Ok((out, out_slices))
}
