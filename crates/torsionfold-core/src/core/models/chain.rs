use super::bonds::BackboneAtomKind;
use nalgebra::Point3;

/// A reconstructed backbone chain: an ordered, write-once sequence of atom
/// positions.
///
/// The chain is indexed from zero starting at the amide nitrogen of the first
/// residue, so atom kinds cycle N, Cα, C with period three and a chain of
/// `n` residues holds `3 * n` atoms. Positions are only ever appended during
/// reconstruction; once written, an atom's position is never mutated.
#[derive(Debug, Clone, PartialEq)]
pub struct BackboneChain {
    positions: Vec<Point3<f64>>,
}

impl BackboneChain {
    /// Creates an empty chain pre-sized for `atoms` positions.
    pub fn with_capacity(atoms: usize) -> Self {
        Self {
            positions: Vec::with_capacity(atoms),
        }
    }

    /// Creates a chain from an existing position sequence.
    ///
    /// Useful for wrapping reference coordinates (e.g. from an experimental
    /// structure) for comparison against a reconstructed chain.
    pub fn from_positions(positions: Vec<Point3<f64>>) -> Self {
        Self { positions }
    }

    pub(crate) fn push(&mut self, position: Point3<f64>) {
        self.positions.push(position);
    }

    /// Returns the number of atoms in the chain.
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Returns `true` if the chain holds no atoms.
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Returns the number of complete residues (backbone triplets).
    pub fn residue_count(&self) -> usize {
        self.positions.len() / 3
    }

    /// Returns the position of atom `index`, if present.
    pub fn position(&self, index: usize) -> Option<&Point3<f64>> {
        self.positions.get(index)
    }

    /// Returns all atom positions in chain order.
    pub fn positions(&self) -> &[Point3<f64>] {
        &self.positions
    }

    /// Returns the backbone slot of atom `index`, if present.
    pub fn atom_kind(&self, index: usize) -> Option<BackboneAtomKind> {
        if index < self.positions.len() {
            Some(BackboneAtomKind::from_index(index))
        } else {
            None
        }
    }

    /// Returns the measured length of the bond arriving at atom `index`
    /// (the distance to atom `index - 1`), if both endpoints exist.
    pub fn bond_length(&self, index: usize) -> Option<f64> {
        if index == 0 {
            return None;
        }
        let a = self.positions.get(index - 1)?;
        let b = self.positions.get(index)?;
        Some((b - a).norm())
    }
}
