use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifies an atom's slot in the repeating N–Cα–C backbone triplet.
///
/// Chains are indexed from the amide nitrogen of the first residue, so an
/// atom's kind is fully determined by its chain index modulo three.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BackboneAtomKind {
    /// Amide nitrogen.
    N,
    /// Alpha carbon.
    Ca,
    /// Carbonyl carbon.
    C,
}

impl BackboneAtomKind {
    /// Returns the kind of the atom at `index` in an N-first chain.
    pub fn from_index(index: usize) -> Self {
        match index % 3 {
            0 => BackboneAtomKind::N,
            1 => BackboneAtomKind::Ca,
            _ => BackboneAtomKind::C,
        }
    }

    /// Returns the conventional atom name ("N", "CA", "C").
    pub fn as_str(&self) -> &'static str {
        match self {
            BackboneAtomKind::N => "N",
            BackboneAtomKind::Ca => "CA",
            BackboneAtomKind::C => "C",
        }
    }
}

impl fmt::Display for BackboneAtomKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The fixed bond lengths of the repeating backbone triplet, in Ångström.
///
/// Reconstruction treats these as constants of the chain: every N–Cα bond has
/// length `n_ca`, and so on, regardless of residue identity. The defaults are
/// the standard values used for backbone model building.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BondGeometry {
    /// N–Cα bond length.
    pub n_ca: f64,
    /// Cα–C bond length.
    pub ca_c: f64,
    /// C–N peptide bond length.
    pub c_n: f64,
}

impl Default for BondGeometry {
    fn default() -> Self {
        Self {
            n_ca: 1.458,
            ca_c: 1.525,
            c_n: 1.329,
        }
    }
}

impl BondGeometry {
    /// Returns the length of the bond arriving at an atom of the given kind.
    ///
    /// In an N-first chain the bond into an N is the peptide C–N bond, the
    /// bond into a Cα is N–Cα, and the bond into a C is Cα–C.
    pub fn bond_into(&self, kind: BackboneAtomKind) -> f64 {
        match kind {
            BackboneAtomKind::N => self.c_n,
            BackboneAtomKind::Ca => self.n_ca,
            BackboneAtomKind::C => self.ca_c,
        }
    }

    /// Returns the length of the bond arriving at chain index `index`.
    ///
    /// This is the explicit form of the cyclic three-element lookup the
    /// extension recurrence performs at every step.
    pub fn length_into(&self, index: usize) -> f64 {
        self.bond_into(BackboneAtomKind::from_index(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_geometry_uses_standard_backbone_lengths() {
        let geometry = BondGeometry::default();
        assert_eq!(geometry.n_ca, 1.458);
        assert_eq!(geometry.ca_c, 1.525);
        assert_eq!(geometry.c_n, 1.329);
    }

    #[test]
    fn atom_kinds_cycle_with_period_three() {
        assert_eq!(BackboneAtomKind::from_index(0), BackboneAtomKind::N);
        assert_eq!(BackboneAtomKind::from_index(1), BackboneAtomKind::Ca);
        assert_eq!(BackboneAtomKind::from_index(2), BackboneAtomKind::C);
        assert_eq!(BackboneAtomKind::from_index(3), BackboneAtomKind::N);
        assert_eq!(BackboneAtomKind::from_index(7), BackboneAtomKind::Ca);
    }

    #[test]
    fn length_into_follows_the_cyclic_table() {
        let geometry = BondGeometry::default();

        // Arriving bonds for N, CA, C slots: C-N, N-CA, CA-C.
        assert_eq!(geometry.length_into(0), 1.329);
        assert_eq!(geometry.length_into(1), 1.458);
        assert_eq!(geometry.length_into(2), 1.525);
        assert_eq!(geometry.length_into(3), 1.329);
        assert_eq!(geometry.length_into(5), 1.525);
    }

    #[test]
    fn atom_kind_names_match_convention() {
        assert_eq!(BackboneAtomKind::N.to_string(), "N");
        assert_eq!(BackboneAtomKind::Ca.to_string(), "CA");
        assert_eq!(BackboneAtomKind::C.to_string(), "C");
    }
}
