use super::dataset::{PackedDataset, SliceTable};
use crate::model::molecule::Molecule;

/// Concatenates an ordered sequence of molecules into a packed pair.
///
/// Walks the molecules in order, appends each one's per-field values to the
/// shared flat buffers and records the cumulative lengths as slice offsets.
/// A molecule with no atoms or no bonds contributes a length-0 segment,
/// never a sentinel, so every graph keeps an entry in every offset list.
pub fn collate(molecules: &[Molecule]) -> (PackedDataset, SliceTable) {
    let total_atoms: usize = molecules.iter().map(Molecule::atom_count).sum();
    let total_bonds: usize = molecules.iter().map(Molecule::bond_count).sum();

    let mut dataset = PackedDataset {
        atomic_numbers: Vec::with_capacity(total_atoms),
        positions: Vec::with_capacity(total_atoms),
        bond_index: Vec::with_capacity(total_bonds),
        bond_orders: Vec::with_capacity(total_bonds),
        ..PackedDataset::default()
    };
    let mut slices = SliceTable::empty();
    slices.atoms.reserve(molecules.len());
    slices.bonds.reserve(molecules.len());

    for molecule in molecules {
        for atom in &molecule.atoms {
            dataset.atomic_numbers.push(atom.element.atomic_number());
            dataset.positions.push(atom.position);
        }
        for bond in &molecule.bonds {
            dataset.bond_index.push([bond.i as u32, bond.j as u32]);
            dataset.bond_orders.push(bond.order.ctfile_code());
        }
        slices.atoms.push(dataset.atomic_numbers.len());
        slices.bonds.push(dataset.bond_index.len());
    }

    (dataset, slices)
}
