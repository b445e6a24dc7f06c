use super::atom::Atom;
use super::types::BondOrder;

/// Bond between two atoms of the same molecule, by 0-based atom index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Bond {
    pub i: usize,
    pub j: usize,
    pub order: BondOrder,
}

impl Bond {
    pub fn new(i: usize, j: usize, order: BondOrder) -> Self {
        Self { i, j, order }
    }
}

/// One parsed molecular graph: ordered atoms plus the bonds between them.
///
/// Atom order is significant; it defines the indices that [`Bond`] refers
/// to and the order atoms occupy in a packed dataset. A `Molecule` is
/// transient: it exists between parsing and collation and is consumed by
/// [`crate::pack::collate`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Molecule {
    pub atoms: Vec<Atom>,
    pub bonds: Vec<Bond>,
}

impl Molecule {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn atom_count(&self) -> usize {
        self.atoms.len()
    }

    #[inline]
    pub fn bond_count(&self) -> usize {
        self.bonds.len()
    }
}
